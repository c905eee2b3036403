//! Flow elements, activities, and artifacts.
//!
//! `FlowElement` is the closed union of everything that can appear in a
//! process's flow-element collection. Boundary events hang off the
//! activity that owns them and are deliberately not part of that
//! collection.

use serde::{Deserialize, Serialize};

use crate::kind::ElementKind;

/// An event attached to the boundary of an activity.
///
/// Boundary events are owned by their activity and are only reachable
/// through it, never through the normal flow-element iteration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Whether the event interrupts its activity when it fires.
    #[serde(default)]
    pub cancel_activity: bool,
}

/// Common payload for task activities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub boundary_events: Vec<BoundaryEvent>,
}

/// An activity that nests its own flow elements and artifacts.
///
/// Nesting is unbounded in the type system; consumers that recurse over
/// sub-processes are expected to bound their own descent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProcess {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub boundary_events: Vec<BoundaryEvent>,
    #[serde(default)]
    pub flow_elements: Vec<FlowElement>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

/// A single element in a process's flow-element collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FlowElement {
    StartEvent {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: String,
    },
    EndEvent {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: String,
    },
    UserTask(Task),
    ServiceTask(Task),
    ScriptTask(Task),
    ExclusiveGateway {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: String,
    },
    ParallelGateway {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: String,
    },
    SequenceFlow {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        source_ref: Option<String>,
        #[serde(default)]
        target_ref: Option<String>,
    },
    SubProcess(SubProcess),
}

impl FlowElement {
    /// The kind of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            FlowElement::StartEvent { .. } => ElementKind::StartEvent,
            FlowElement::EndEvent { .. } => ElementKind::EndEvent,
            FlowElement::UserTask(_) => ElementKind::UserTask,
            FlowElement::ServiceTask(_) => ElementKind::ServiceTask,
            FlowElement::ScriptTask(_) => ElementKind::ScriptTask,
            FlowElement::ExclusiveGateway { .. } => ElementKind::ExclusiveGateway,
            FlowElement::ParallelGateway { .. } => ElementKind::ParallelGateway,
            FlowElement::SequenceFlow { .. } => ElementKind::SequenceFlow,
            FlowElement::SubProcess(_) => ElementKind::SubProcess,
        }
    }

    /// The element's identifier, if one has been assigned.
    pub fn id(&self) -> Option<&str> {
        match self {
            FlowElement::StartEvent { id, .. }
            | FlowElement::EndEvent { id, .. }
            | FlowElement::ExclusiveGateway { id, .. }
            | FlowElement::ParallelGateway { id, .. }
            | FlowElement::SequenceFlow { id, .. } => id.as_deref(),
            FlowElement::UserTask(task)
            | FlowElement::ServiceTask(task)
            | FlowElement::ScriptTask(task) => task.id.as_deref(),
            FlowElement::SubProcess(sub) => sub.id.as_deref(),
        }
    }

    /// Boundary events owned by this element.
    ///
    /// Empty for anything that is not an activity.
    pub fn boundary_events(&self) -> &[BoundaryEvent] {
        match self {
            FlowElement::UserTask(task)
            | FlowElement::ServiceTask(task)
            | FlowElement::ScriptTask(task) => &task.boundary_events,
            FlowElement::SubProcess(sub) => &sub.boundary_events,
            _ => &[],
        }
    }

    /// The nested sub-process payload, if this element is one.
    pub fn as_sub_process(&self) -> Option<&SubProcess> {
        match self {
            FlowElement::SubProcess(sub) => Some(sub),
            _ => None,
        }
    }

    /// Returns true if this element is an activity (may own boundary events).
    pub fn is_activity(&self) -> bool {
        matches!(
            self,
            FlowElement::UserTask(_)
                | FlowElement::ServiceTask(_)
                | FlowElement::ScriptTask(_)
                | FlowElement::SubProcess(_)
        )
    }
}

/// A non-flow annotation attached to a process or sub-process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Artifact {
    TextAnnotation {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        text: String,
    },
    Association {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        source_ref: Option<String>,
        #[serde(default)]
        target_ref: Option<String>,
    },
}

impl Artifact {
    /// The kind of this artifact.
    pub fn kind(&self) -> ElementKind {
        match self {
            Artifact::TextAnnotation { .. } => ElementKind::TextAnnotation,
            Artifact::Association { .. } => ElementKind::Association,
        }
    }

    /// The artifact's identifier, if one has been assigned.
    pub fn id(&self) -> Option<&str> {
        match self {
            Artifact::TextAnnotation { id, .. } | Artifact::Association { id, .. } => id.as_deref(),
        }
    }
}

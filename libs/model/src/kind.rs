//! Element and step classifiers.
//!
//! `ElementKind` is the closed set of model element kinds that identifier
//! allocation dispatches on. `StepKind` is the same thing for the
//! simplified-workflow variant. Both use the camelCase wire names that
//! appear as serde tags on the element unions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a kind name does not match any known classifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown kind: {0}")]
pub struct UnknownKind(pub String);

/// Kind of a process-model element.
///
/// Activities (user, service, and script tasks, plus sub-processes) may
/// carry boundary events; `BoundaryEvent` itself is reachable only through
/// the activity that owns it, never through the flow-element collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Pool,
    Lane,
    TextAnnotation,
    Association,
    MessageFlow,
    BoundaryEvent,
    StartEvent,
    EndEvent,
    UserTask,
    ServiceTask,
    ScriptTask,
    ExclusiveGateway,
    ParallelGateway,
    SequenceFlow,
    SubProcess,
}

impl ElementKind {
    /// The canonical (camelCase) name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Pool => "pool",
            ElementKind::Lane => "lane",
            ElementKind::TextAnnotation => "textAnnotation",
            ElementKind::Association => "association",
            ElementKind::MessageFlow => "messageFlow",
            ElementKind::BoundaryEvent => "boundaryEvent",
            ElementKind::StartEvent => "startEvent",
            ElementKind::EndEvent => "endEvent",
            ElementKind::UserTask => "userTask",
            ElementKind::ServiceTask => "serviceTask",
            ElementKind::ScriptTask => "scriptTask",
            ElementKind::ExclusiveGateway => "exclusiveGateway",
            ElementKind::ParallelGateway => "parallelGateway",
            ElementKind::SequenceFlow => "sequenceFlow",
            ElementKind::SubProcess => "subProcess",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ElementKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "pool" => ElementKind::Pool,
            "lane" => ElementKind::Lane,
            "textAnnotation" => ElementKind::TextAnnotation,
            "association" => ElementKind::Association,
            "messageFlow" => ElementKind::MessageFlow,
            "boundaryEvent" => ElementKind::BoundaryEvent,
            "startEvent" => ElementKind::StartEvent,
            "endEvent" => ElementKind::EndEvent,
            "userTask" => ElementKind::UserTask,
            "serviceTask" => ElementKind::ServiceTask,
            "scriptTask" => ElementKind::ScriptTask,
            "exclusiveGateway" => ElementKind::ExclusiveGateway,
            "parallelGateway" => ElementKind::ParallelGateway,
            "sequenceFlow" => ElementKind::SequenceFlow,
            "subProcess" => ElementKind::SubProcess,
            other => return Err(UnknownKind(other.to_string())),
        };
        Ok(kind)
    }
}

/// Kind of a simplified-workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    HumanStep,
    ScriptStep,
    FeedbackStep,
}

impl StepKind {
    /// The canonical (camelCase) name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::HumanStep => "humanStep",
            StepKind::ScriptStep => "scriptStep",
            StepKind::FeedbackStep => "feedbackStep",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StepKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "humanStep" => StepKind::HumanStep,
            "scriptStep" => StepKind::ScriptStep,
            "feedbackStep" => StepKind::FeedbackStep,
            other => return Err(UnknownKind(other.to_string())),
        };
        Ok(kind)
    }
}

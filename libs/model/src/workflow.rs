//! The simplified-workflow variant: a flat list of steps.

use serde::{Deserialize, Serialize};

use crate::kind::StepKind;

/// A single step in a workflow definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Step {
    HumanStep {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: String,
        #[serde(default)]
        assignee: Option<String>,
    },
    ScriptStep {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: String,
        #[serde(default)]
        script: String,
    },
    FeedbackStep {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: String,
    },
}

impl Step {
    /// The kind of this step.
    pub fn kind(&self) -> StepKind {
        match self {
            Step::HumanStep { .. } => StepKind::HumanStep,
            Step::ScriptStep { .. } => StepKind::ScriptStep,
            Step::FeedbackStep { .. } => StepKind::FeedbackStep,
        }
    }

    /// The step's identifier, if one has been assigned.
    pub fn id(&self) -> Option<&str> {
        match self {
            Step::HumanStep { id, .. }
            | Step::ScriptStep { id, .. }
            | Step::FeedbackStep { id, .. } => id.as_deref(),
        }
    }
}

/// A workflow definition: a name and its steps, in order.
///
/// Steps never nest; the collection is flat.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

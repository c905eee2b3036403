//! The document root and its top-level collections.

use serde::{Deserialize, Serialize};

use crate::element::{Artifact, FlowElement};

/// A participant pool at the root of the document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Identifier of the process this pool executes, if bound.
    #[serde(default)]
    pub process_ref: Option<String>,
}

/// A lane partitioning a process.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lane {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// Identifiers of the flow elements assigned to this lane.
    #[serde(default)]
    pub flow_refs: Vec<String>,
}

/// A message flow between participants.
///
/// Message flows live in one flat document-level collection, not inside
/// any process.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageFlow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub source_ref: Option<String>,
    #[serde(default)]
    pub target_ref: Option<String>,
}

/// A process: lanes plus a tree of flow elements and artifacts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lanes: Vec<Lane>,
    #[serde(default)]
    pub flow_elements: Vec<FlowElement>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

/// The root of a process-model document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub pools: Vec<Pool>,
    #[serde(default)]
    pub processes: Vec<Process>,
    #[serde(default)]
    pub message_flows: Vec<MessageFlow>,
}

impl Document {
    /// Finds a flow element by identifier anywhere in the document,
    /// descending into nested sub-processes depth-first.
    pub fn find_element(&self, id: &str) -> Option<&FlowElement> {
        self.processes
            .iter()
            .find_map(|process| find_in_elements(&process.flow_elements, id))
    }

    /// Every identifier assigned anywhere in the document.
    ///
    /// Covers pools, processes, lanes, flow elements (including nested
    /// sub-process children), boundary events, artifacts, and message
    /// flows. Order follows the tree, depth-first.
    pub fn all_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for pool in &self.pools {
            ids.extend(pool.id.as_deref());
        }
        for process in &self.processes {
            ids.extend(process.id.as_deref());
            for lane in &process.lanes {
                ids.extend(lane.id.as_deref());
            }
            collect_element_ids(&process.flow_elements, &mut ids);
            collect_artifact_ids(&process.artifacts, &mut ids);
        }
        for flow in &self.message_flows {
            ids.extend(flow.id.as_deref());
        }
        ids
    }
}

fn find_in_elements<'a>(elements: &'a [FlowElement], id: &str) -> Option<&'a FlowElement> {
    for element in elements {
        if element.id() == Some(id) {
            return Some(element);
        }
        if let Some(sub) = element.as_sub_process() {
            if let Some(found) = find_in_elements(&sub.flow_elements, id) {
                return Some(found);
            }
        }
    }
    None
}

fn collect_element_ids<'a>(elements: &'a [FlowElement], ids: &mut Vec<&'a str>) {
    for element in elements {
        ids.extend(element.id());
        for boundary in element.boundary_events() {
            ids.extend(boundary.id.as_deref());
        }
        if let Some(sub) = element.as_sub_process() {
            collect_element_ids(&sub.flow_elements, ids);
            collect_artifact_ids(&sub.artifacts, ids);
        }
    }
}

fn collect_artifact_ids<'a>(artifacts: &'a [Artifact], ids: &mut Vec<&'a str>) {
    for artifact in artifacts {
        ids.extend(artifact.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Task;

    fn sample_document() -> Document {
        serde_json::from_str(
            r#"{
                "pools": [{"id": "pool1", "name": "Customer"}],
                "processes": [{
                    "id": "process1",
                    "lanes": [{"id": "lane1"}, {"id": "lane2"}],
                    "flowElements": [
                        {"type": "startEvent", "id": "startevent1"},
                        {"type": "userTask", "id": "task1", "boundaryEvents": [
                            {"id": "boundarytimer1"}
                        ]},
                        {"type": "subProcess", "id": "subprocess1",
                         "flowElements": [{"type": "scriptTask", "id": "task2"}],
                         "artifacts": [{"type": "textAnnotation", "id": "annotation1"}]}
                    ],
                    "artifacts": [{"type": "association", "id": "association1"}]
                }],
                "messageFlows": [{"id": "messageflow1"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_element_top_level() {
        let doc = sample_document();
        let element = doc.find_element("task1").unwrap();
        assert_eq!(element.id(), Some("task1"));
    }

    #[test]
    fn test_find_element_nested() {
        let doc = sample_document();
        let element = doc.find_element("task2").unwrap();
        assert!(matches!(element, FlowElement::ScriptTask(Task { .. })));
    }

    #[test]
    fn test_find_element_missing() {
        let doc = sample_document();
        assert!(doc.find_element("task999").is_none());
    }

    #[test]
    fn test_all_ids_covers_every_collection() {
        let doc = sample_document();
        let ids = doc.all_ids();
        for expected in [
            "pool1",
            "process1",
            "lane1",
            "lane2",
            "startevent1",
            "task1",
            "boundarytimer1",
            "subprocess1",
            "task2",
            "annotation1",
            "association1",
            "messageflow1",
        ] {
            assert!(ids.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_empty_document_default() {
        let doc = Document::default();
        assert!(doc.all_ids().is_empty());
        assert!(doc.find_element("task1").is_none());
    }
}

//! Kind-dispatched document scans.
//!
//! Each element kind maps to the one collection family that can hold it:
//! pools sit at the document root, lanes under each process, artifacts
//! under processes and nested sub-processes, message flows in one flat
//! document-level collection, and everything else in the flow-element
//! tree. Boundary events are a side channel of that tree: they are owned
//! by activities and never appear in the flow-element collections
//! themselves.

use flowdoc_model::{Artifact, Document, ElementKind, FlowElement, StepKind, WorkflowDefinition};

use crate::error::AllocError;
use crate::suffix::SuffixMax;

/// Maximum depth of sub-process nesting the scan will descend into.
///
/// Nesting is unbounded in the model; the cap keeps a pathological
/// document from exhausting the call stack. Documents deeper than this
/// fail with [`AllocError::NestingTooDeep`] rather than returning an
/// identifier computed from a partial scan.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Computes the next free identifier for an element of `kind` under
/// `prefix`.
///
/// Scans every existing identifier of the kind's collection family
/// reachable from the document root, takes the largest numeric suffix in
/// the prefix family, and returns `prefix` followed by that maximum plus
/// one. With no matching identifiers present the result is `prefix`
/// followed by `1`.
///
/// The scan is read-only and deterministic; calling it twice on the same
/// snapshot returns the same identifier. The returned identifier is only
/// guaranteed unused among identifiers that were themselves produced by
/// this scheme.
pub fn next_element_id(
    document: &Document,
    kind: ElementKind,
    prefix: &str,
) -> Result<String, AllocError> {
    let mut max = SuffixMax::default();

    match kind {
        ElementKind::Pool => {
            for pool in &document.pools {
                max.observe(pool.id.as_deref(), prefix);
            }
        }
        ElementKind::Lane => {
            for process in &document.processes {
                for lane in &process.lanes {
                    max.observe(lane.id.as_deref(), prefix);
                }
            }
        }
        ElementKind::TextAnnotation | ElementKind::Association => {
            for process in &document.processes {
                scan_artifacts(&process.artifacts, &process.flow_elements, prefix, 0, &mut max)?;
            }
        }
        ElementKind::MessageFlow => {
            // one flat document-level collection, scanned exactly once
            for flow in &document.message_flows {
                max.observe(flow.id.as_deref(), prefix);
            }
        }
        ElementKind::BoundaryEvent
        | ElementKind::StartEvent
        | ElementKind::EndEvent
        | ElementKind::UserTask
        | ElementKind::ServiceTask
        | ElementKind::ScriptTask
        | ElementKind::ExclusiveGateway
        | ElementKind::ParallelGateway
        | ElementKind::SequenceFlow
        | ElementKind::SubProcess => {
            for process in &document.processes {
                scan_elements(&process.flow_elements, kind, prefix, 0, &mut max)?;
            }
        }
    }

    Ok(format!("{prefix}{}", max.next()))
}

/// Computes the next free identifier for a workflow step of `kind` under
/// `prefix`.
///
/// Steps live in a single flat list, so this never recurses and cannot
/// fail.
pub fn next_step_id(workflow: &WorkflowDefinition, kind: StepKind, prefix: &str) -> String {
    let mut max = SuffixMax::default();
    for step in &workflow.steps {
        if step.kind() == kind {
            max.observe(step.id(), prefix);
        }
    }
    format!("{prefix}{}", max.next())
}

/// Walks a flow-element collection, recursing into nested sub-processes.
///
/// Elements whose kind matches the requested kind contribute their suffix.
/// When the requested kind is `BoundaryEvent`, the boundary events of each
/// activity are scanned as well; boundary events without an identifier are
/// skipped.
fn scan_elements(
    elements: &[FlowElement],
    kind: ElementKind,
    prefix: &str,
    depth: usize,
    max: &mut SuffixMax,
) -> Result<(), AllocError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(AllocError::NestingTooDeep {
            max_depth: MAX_NESTING_DEPTH,
        });
    }

    for element in elements {
        if let Some(sub) = element.as_sub_process() {
            scan_elements(&sub.flow_elements, kind, prefix, depth + 1, max)?;
        }

        if kind == ElementKind::BoundaryEvent {
            for boundary in element.boundary_events() {
                max.observe(boundary.id.as_deref(), prefix);
            }
        }

        if element.kind() == kind {
            max.observe(element.id(), prefix);
        }
    }

    Ok(())
}

/// Walks the artifacts of a container and of every sub-process nested
/// under it.
///
/// Artifacts are not filtered by kind: the prefix family alone decides
/// which identifiers contribute.
fn scan_artifacts(
    artifacts: &[Artifact],
    elements: &[FlowElement],
    prefix: &str,
    depth: usize,
    max: &mut SuffixMax,
) -> Result<(), AllocError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(AllocError::NestingTooDeep {
            max_depth: MAX_NESTING_DEPTH,
        });
    }

    for artifact in artifacts {
        max.observe(artifact.id(), prefix);
    }

    for element in elements {
        if let Some(sub) = element.as_sub_process() {
            scan_artifacts(&sub.artifacts, &sub.flow_elements, prefix, depth + 1, max)?;
        }
    }

    Ok(())
}

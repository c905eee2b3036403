//! # flowdoc-model
//!
//! Process-model document tree for the flowdoc toolkit.
//!
//! ## Design Principles
//!
//! - The tree is owned top-down: a document owns its processes, a process
//!   owns its flow elements, a sub-process owns its children. There are no
//!   back-references.
//! - Element kinds form a closed set. Adding a kind means touching the
//!   `FlowElement` union and the `ElementKind` classifier, and the compiler
//!   points at every match that needs a new arm.
//! - Identifiers are plain strings assigned by the caller; the model never
//!   generates or validates them. Elements may legitimately have no
//!   identifier yet (freshly created, not yet named).
//! - All types round-trip through JSON for snapshots and test fixtures.
//!
//! ## Structure
//!
//! A [`Document`] holds pools, processes, and one flat collection of
//! message flows. Each [`Process`] holds lanes, flow elements, and
//! artifacts. Sub-processes nest flow elements and artifacts recursively.
//! The simplified-workflow variant lives in [`WorkflowDefinition`], a flat
//! list of steps with no nesting.

mod document;
mod element;
mod kind;
mod workflow;

pub use document::{Document, Lane, MessageFlow, Pool, Process};
pub use element::{Artifact, BoundaryEvent, FlowElement, SubProcess, Task};
pub use kind::{ElementKind, StepKind, UnknownKind};
pub use workflow::{Step, WorkflowDefinition};

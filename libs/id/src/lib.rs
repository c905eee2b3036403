//! # flowdoc-id
//!
//! Identifier allocation over process-model document trees.
//!
//! ## Design Principles
//!
//! - Allocation is a pure function of the document snapshot: no interior
//!   state, no side effects, deterministic for a given tree and arguments.
//! - Identifiers are namespaced by prefix. An identifier belongs to a
//!   family when it is exactly the prefix followed by decimal digits;
//!   everything else is ignored, never rejected.
//! - Dispatch over element kinds is an exhaustive match. A kind added to
//!   the model is a compile error here until a traversal branch is chosen
//!   for it.
//! - The scan assumes exclusive read access for the duration of one call;
//!   the caller runs it inside the same edit boundary that assigns the
//!   returned identifier.
//!
//! ## Allocation
//!
//! [`next_element_id`] walks the collections that can hold elements of the
//! requested kind (pools, lanes, artifacts, message flows, or the
//! flow-element tree, descending into nested sub-processes) and returns
//! `prefix + (max_suffix + 1)`:
//!
//! ```
//! use flowdoc_id::next_element_id;
//! use flowdoc_model::{Document, ElementKind};
//!
//! let doc = Document::default();
//! let id = next_element_id(&doc, ElementKind::UserTask, "task").unwrap();
//! assert_eq!(id, "task1");
//! ```
//!
//! [`next_step_id`] is the flat equivalent for the simplified-workflow
//! variant.

mod error;
mod scan;
mod suffix;

pub use error::AllocError;
pub use scan::{next_element_id, next_step_id, MAX_NESTING_DEPTH};
pub use suffix::MAX_SUFFIX;

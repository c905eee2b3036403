//! Error types for identifier allocation.

use thiserror::Error;

/// Errors that can occur while scanning a document for identifiers.
///
/// Malformed or foreign identifiers are not errors; they contribute
/// nothing to the scan. The only failure is structural.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// Sub-process nesting exceeded the supported depth.
    #[error("sub-process nesting exceeds {max_depth} levels")]
    NestingTooDeep {
        /// The depth cap that was exceeded.
        max_depth: usize,
    },
}

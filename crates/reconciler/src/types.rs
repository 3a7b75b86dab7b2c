//! Report types for the object index.

use kindex_core::ObjectReference;
use serde::{Deserialize, Serialize};

/// Outcome of a reconciliation pass over an [`ObjectIndex`](crate::ObjectIndex).
///
/// Both lists are ordered by canonical key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexReport {
    /// Number of indexed references.
    pub total: usize,
    /// References matched by at least one lookup.
    pub matched: Vec<ObjectReference>,
    /// References never matched; candidates for deletion.
    pub orphaned: Vec<ObjectReference>,
}

impl IndexReport {
    /// Create a new report.
    pub fn new(matched: Vec<ObjectReference>, orphaned: Vec<ObjectReference>) -> Self {
        let total = matched.len().saturating_add(orphaned.len());
        Self {
            total,
            matched,
            orphaned,
        }
    }

    /// Check if every indexed reference is still desired.
    pub fn is_converged(&self) -> bool {
        self.orphaned.is_empty()
    }

    /// Number of orphaned references.
    pub fn orphaned_count(&self) -> usize {
        self.orphaned.len()
    }
}

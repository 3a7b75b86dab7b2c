//! Equivalence-aware object identity index for K8s-style reconciliation.
//!
//! A reconciler applies a desired set of objects and remembers what it applied.
//! On the next pass it needs to know which previously applied objects are
//! still desired. Identities can change when an API moves between groups
//! (a `Deployment` in `extensions` becomes a `Deployment` in `apps`), so the
//! lookup is widened through configurable group kind equivalences.
//!
//! # Key Concepts
//!
//! - **Canonical key**: `group/kind/namespace/name`, with an empty namespace
//!   defaulted to `default` for every kind except `Namespace`.
//! - **Equivalences**: group kinds that identify the same object across API
//!   migrations.
//! - **Orphans**: indexed references never matched during a pass.
//!
//! # Example
//!
//! ```ignore
//! use kindex_reconciler::{EquivalenceRules, ObjectIndex};
//!
//! let rules = EquivalenceRules::with_defaults();
//! let mut index = ObjectIndex::new(previously_applied, Some(&rules));
//!
//! for desired in &desired_state {
//!     index.lookup(desired);
//! }
//!
//! for orphan in index.orphans() {
//!     // delete orphan
//! }
//! ```

pub mod config;
pub mod equivalences;
pub mod index;
pub mod key;
pub mod types;

// Re-export main types
pub use config::EquivalenceConfig;
pub use equivalences::{EquivalenceRules, Equivalences, NoEquivalences};
pub use index::ObjectIndex;
pub use key::{DEFAULT_NAMESPACE, NAMESPACE_KIND, object_key, object_key_for};
pub use kindex_core::{Error, GroupKind, ObjectReference, Result};
pub use types::IndexReport;

//! Object index.
//!
//! Built once from the references applied in a previous reconciliation. Each
//! object of the current desired state is then looked up; whatever was never
//! matched is an orphan and a candidate for deletion.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use kindex_core::ObjectReference;
use tracing::{debug, trace};

use crate::equivalences::Equivalences;
use crate::key::{object_key, object_key_for};
use crate::types::IndexReport;

/// Index of known object references with found-tracking.
///
/// The key to reference mapping is fixed at construction. Only the found set
/// changes afterwards, and only through [`lookup`](Self::lookup), which takes
/// `&mut self`; concurrent callers need their own mutual exclusion.
pub struct ObjectIndex<'a> {
    index: HashMap<String, ObjectReference>,
    found: HashSet<String>,
    equivalences: Option<&'a dyn Equivalences>,
}

impl<'a> ObjectIndex<'a> {
    /// Index the given references.
    ///
    /// References sharing a canonical key overwrite each other; the last one
    /// wins. Without `equivalences`, references only match under their exact
    /// group kind.
    pub fn new(
        references: impl IntoIterator<Item = ObjectReference>,
        equivalences: Option<&'a dyn Equivalences>,
    ) -> Self {
        let index: HashMap<String, ObjectReference> = references
            .into_iter()
            .map(|reference| (object_key_for(&reference), reference))
            .collect();

        debug!(
            objects = index.len(),
            equivalences = equivalences.is_some(),
            "Built object index"
        );

        Self {
            index,
            found: HashSet::new(),
            equivalences,
        }
    }

    /// All indexed references by canonical key, found or not.
    pub const fn objects(&self) -> &HashMap<String, ObjectReference> {
        &self.index
    }

    /// Check whether `reference` was marked found by a previous lookup.
    ///
    /// Only the reference's own group kind is checked. A reference that was
    /// matched through an equivalent group kind is found under the stored
    /// reference's identity, not under its own.
    pub fn found(&self, reference: &ObjectReference) -> bool {
        self.found.contains(&object_key_for(reference))
    }

    /// Look up `reference`, falling back to equivalent group kinds.
    ///
    /// The exact key is tried first, then the key under every equivalent group
    /// kind (same namespace and name) in ascending group kind order. The first
    /// hit is marked found and returned. A miss returns `None` and changes
    /// nothing.
    pub fn lookup(&mut self, reference: &ObjectReference) -> Option<&ObjectReference> {
        let key = object_key_for(reference);
        if self.index.contains_key(&key) {
            return self.mark_found(key);
        }

        let group_kind = reference.group_kind();
        let candidates = self
            .equivalences
            .map(|equivalences| equivalences.equivalences_for(&group_kind))
            .unwrap_or_default();

        let matched = candidates.iter().find_map(|candidate| {
            let key = object_key(
                &candidate.group,
                &candidate.kind,
                &reference.namespace,
                &reference.name,
            );
            self.index.contains_key(&key).then(|| (candidate, key))
        });

        match matched {
            Some((candidate, key)) => {
                debug!(
                    reference = %reference,
                    via = %candidate,
                    "Matched object through equivalent group kind"
                );
                self.mark_found(key)
            }
            None => {
                trace!(reference = %reference, "Object not in index");
                None
            }
        }
    }

    /// Canonical keys marked found so far.
    pub const fn found_keys(&self) -> &HashSet<String> {
        &self.found
    }

    /// Number of indexed references.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the index holds no references.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Indexed references never matched by a lookup, ordered by key.
    pub fn orphans(&self) -> Vec<&ObjectReference> {
        self.index
            .iter()
            .filter(|(key, _)| !self.found.contains(*key))
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, reference)| reference)
            .collect_vec()
    }

    /// Summarize matched and orphaned references.
    pub fn report(&self) -> IndexReport {
        let (matched, orphaned): (Vec<_>, Vec<_>) = self
            .index
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .partition(|(key, _)| self.found.contains(*key));

        IndexReport::new(
            matched.into_iter().map(|(_, r)| r.clone()).collect(),
            orphaned.into_iter().map(|(_, r)| r.clone()).collect(),
        )
    }

    fn mark_found(&mut self, key: String) -> Option<&ObjectReference> {
        let reference = self.index.get(&key);
        self.found.insert(key);
        reference
    }
}

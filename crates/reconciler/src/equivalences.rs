//! Group kind equivalences.
//!
//! Objects can change their group when an API is migrated (for example a
//! `Deployment` moving from `extensions` to `apps`). An [`Equivalences`]
//! resolver tells the index which other group kinds identify the same object.

use std::collections::{BTreeSet, HashMap};

use kindex_core::GroupKind;
use tracing::trace;

/// Resolves the group kinds considered interchangeable with a given one.
pub trait Equivalences: Send + Sync {
    /// Group kinds equivalent to `group_kind`, excluding `group_kind` itself.
    ///
    /// The set is ordered by group, then kind; the index tries candidates in
    /// that order.
    fn equivalences_for(&self, group_kind: &GroupKind) -> BTreeSet<GroupKind>;
}

/// Resolver without any equivalences.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEquivalences;

impl Equivalences for NoEquivalences {
    fn equivalences_for(&self, _group_kind: &GroupKind) -> BTreeSet<GroupKind> {
        BTreeSet::new()
    }
}

/// Well-known API group migrations, as `(groups, kinds)`.
const DEFAULT_MIGRATIONS: &[(&[&str], &[&str])] = &[
    (&["extensions", "apps"], &["DaemonSet", "Deployment", "ReplicaSet"]),
    (&["extensions", "networking.k8s.io"], &["NetworkPolicy", "Ingress"]),
    (&["extensions", "policy"], &["PodSecurityPolicy"]),
];

/// Resolver built from equivalence classes.
///
/// Every member of a class is equivalent to every other member. Classes that
/// share a member are merged per group kind: the shared member sees the union
/// of both classes, the others only their own class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceRules {
    rules: HashMap<GroupKind, BTreeSet<GroupKind>>,
}

impl EquivalenceRules {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rule set pre-loaded with the well-known Kubernetes API group
    /// migrations (`extensions` to `apps`, `networking.k8s.io` and `policy`).
    pub fn with_defaults() -> Self {
        let mut rules = Self::new();
        for (groups, kinds) in DEFAULT_MIGRATIONS {
            for kind in *kinds {
                rules.add_class(groups.iter().map(|group| GroupKind::new(*group, *kind)));
            }
        }
        rules
    }

    /// Create a rule set from a list of classes.
    pub fn from_classes<C, I>(classes: C) -> Self
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = GroupKind>,
    {
        let mut rules = Self::new();
        for class in classes {
            rules.add_class(class);
        }
        rules
    }

    /// Declare all given group kinds equivalent to each other.
    ///
    /// Classes with fewer than two distinct members are ignored.
    pub fn add_class(&mut self, class: impl IntoIterator<Item = GroupKind>) {
        let members: BTreeSet<GroupKind> = class.into_iter().collect();
        if members.len() < 2 {
            trace!(members = members.len(), "Ignoring trivial equivalence class");
            return;
        }

        for member in &members {
            let others = members.iter().filter(|other| *other != member).cloned();
            self.rules.entry(member.clone()).or_default().extend(others);
        }
    }

    /// Builder form of [`add_class`](Self::add_class).
    #[must_use]
    pub fn with_class(mut self, class: impl IntoIterator<Item = GroupKind>) -> Self {
        self.add_class(class);
        self
    }

    /// Number of group kinds that have at least one equivalent.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no equivalences are defined.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Equivalences for EquivalenceRules {
    fn equivalences_for(&self, group_kind: &GroupKind) -> BTreeSet<GroupKind> {
        self.rules.get(group_kind).cloned().unwrap_or_default()
    }
}

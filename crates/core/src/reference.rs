//! Object identity types.
//!
//! A [`GroupKind`] names a resource type independent of its version. An
//! [`ObjectReference`] names one object of that type; its `version` travels
//! along with the reference but never takes part in identity comparison.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An (API group, kind) pair identifying a resource type.
///
/// Ordering is lexicographic by group, then kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKind {
    /// API group, empty for the core group.
    #[serde(default)]
    pub group: String,
    /// Resource kind, e.g. `Deployment`.
    pub kind: String,
}

impl GroupKind {
    /// Create a new group kind.
    pub fn new(group: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}.{}", self.kind, self.group)
        }
    }
}

/// Parses `Kind.group` (e.g. `Deployment.apps`, `Ingress.networking.k8s.io`).
///
/// Everything up to the first `.` is the kind; a bare `Kind` is in the core group.
impl FromStr for GroupKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, group) = s.split_once('.').unwrap_or((s, ""));
        if kind.is_empty() {
            return Err(Error::invalid_group_kind(s, "kind must not be empty"));
        }
        Ok(Self::new(group, kind))
    }
}

/// Reference to a managed object.
///
/// `Default` is the zero value: every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    /// API group, empty for the core group.
    #[serde(default)]
    pub group: String,
    /// API version within the group. Not part of the identity.
    #[serde(default)]
    pub version: String,
    /// Resource kind.
    pub kind: String,
    /// Namespace, empty for cluster-scoped objects or the default namespace.
    #[serde(default)]
    pub namespace: String,
    /// Object name.
    pub name: String,
}

impl ObjectReference {
    /// Create a new object reference.
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Create a reference from an `apiVersion` string such as `apps/v1`.
    ///
    /// An `apiVersion` without a `/` (e.g. `v1`) belongs to the core group.
    pub fn from_api_version(
        api_version: &str,
        kind: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let (group, version) = api_version
            .split_once('/')
            .unwrap_or(("", api_version));
        Self::new(group, version, kind, namespace, name)
    }

    /// The resource type of this object.
    #[must_use]
    pub fn group_kind(&self) -> GroupKind {
        GroupKind::new(self.group.as_str(), self.kind.as_str())
    }

    /// The `apiVersion` string, `group/version` or just `version` for the core group.
    #[must_use]
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{} {}", self.group_kind(), self.name)
        } else {
            write!(f, "{} {}/{}", self.group_kind(), self.namespace, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_kind_display() {
        assert_eq!(GroupKind::new("apps", "Deployment").to_string(), "Deployment.apps");
        assert_eq!(GroupKind::new("", "ConfigMap").to_string(), "ConfigMap");
    }

    #[test]
    fn test_group_kind_parse() -> Result<(), Error> {
        let gk: GroupKind = "Ingress.networking.k8s.io".parse()?;
        assert_eq!(gk, GroupKind::new("networking.k8s.io", "Ingress"));

        let core: GroupKind = "Service".parse()?;
        assert_eq!(core, GroupKind::new("", "Service"));
        Ok(())
    }

    #[test]
    fn test_group_kind_parse_rejects_empty_kind() {
        assert!(matches!(
            ".apps".parse::<GroupKind>(),
            Err(Error::InvalidGroupKind { .. })
        ));
        assert!("".parse::<GroupKind>().is_err());
    }

    #[test]
    fn test_group_kind_ordering_is_group_then_kind() {
        let mut kinds = vec![
            GroupKind::new("extensions", "Deployment"),
            GroupKind::new("apps", "ReplicaSet"),
            GroupKind::new("apps", "Deployment"),
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                GroupKind::new("apps", "Deployment"),
                GroupKind::new("apps", "ReplicaSet"),
                GroupKind::new("extensions", "Deployment"),
            ]
        );
    }

    #[test]
    fn test_from_api_version() {
        let r = ObjectReference::from_api_version("apps/v1", "Deployment", "default", "foo");
        assert_eq!(r.group, "apps");
        assert_eq!(r.version, "v1");
        assert_eq!(r.api_version(), "apps/v1");

        let core = ObjectReference::from_api_version("v1", "ConfigMap", "", "cm");
        assert_eq!(core.group, "");
        assert_eq!(core.version, "v1");
        assert_eq!(core.api_version(), "v1");
    }

    #[test]
    fn test_default_is_zero_value() {
        let r = ObjectReference::default();
        assert!(r.group.is_empty() && r.kind.is_empty() && r.name.is_empty());
    }

    #[test]
    fn test_reference_display() {
        let r = ObjectReference::new("apps", "v1", "Deployment", "kube-system", "dns");
        assert_eq!(r.to_string(), "Deployment.apps kube-system/dns");

        let ns = ObjectReference::new("", "v1", "Namespace", "", "garden");
        assert_eq!(ns.to_string(), "Namespace garden");
    }

    #[test]
    fn test_reference_serde_camel_case() -> Result<(), serde_json::Error> {
        let json = r#"{"group":"apps","version":"v1","kind":"Deployment","name":"foo"}"#;
        let r: ObjectReference = serde_json::from_str(json)?;
        assert_eq!(r.namespace, "");
        assert_eq!(r.group_kind(), GroupKind::new("apps", "Deployment"));
        Ok(())
    }
}

//! Canonical object keys.
//!
//! A key is `group/kind/namespace/name`. Objects of any kind other than
//! `Namespace` with an empty namespace are keyed under `default`, so a
//! reference with an omitted namespace and one naming `default` explicitly
//! share a key. Fields are joined without escaping; values containing `/`
//! can produce colliding keys.

use kindex_core::ObjectReference;

/// Namespace substituted for an empty namespace on namespaced kinds.
pub const DEFAULT_NAMESPACE: &str = "default";

/// The cluster-scoped kind whose namespace is never defaulted.
pub const NAMESPACE_KIND: &str = "Namespace";

/// Build the canonical key for the given identity fields.
#[must_use]
pub fn object_key(group: &str, kind: &str, namespace: &str, name: &str) -> String {
    let namespace = if kind != NAMESPACE_KIND && namespace.is_empty() {
        DEFAULT_NAMESPACE
    } else {
        namespace
    };
    format!("{group}/{kind}/{namespace}/{name}")
}

/// Build the canonical key for a reference using its own group and kind.
#[must_use]
pub fn object_key_for(reference: &ObjectReference) -> String {
    object_key(
        &reference.group,
        &reference.kind,
        &reference.namespace,
        &reference.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_joins_fields() {
        assert_eq!(
            object_key("apps", "Deployment", "kube-system", "dns"),
            "apps/Deployment/kube-system/dns"
        );
    }

    #[test]
    fn test_empty_namespace_defaults() {
        assert_eq!(object_key("", "ConfigMap", "", "x"), "/ConfigMap/default/x");
        assert_eq!(
            object_key("", "ConfigMap", "", "x"),
            object_key("", "ConfigMap", "default", "x")
        );
    }

    #[test]
    fn test_namespace_kind_is_not_defaulted() {
        assert_eq!(object_key("", "Namespace", "", "ns1"), "/Namespace//ns1");
        assert_ne!(
            object_key("", "Namespace", "", "ns1"),
            object_key("", "Namespace", "default", "ns1")
        );
    }

    #[test]
    fn test_version_does_not_affect_key() {
        let v1 = ObjectReference::new("apps", "v1", "Deployment", "", "foo");
        let v1beta2 = ObjectReference::new("apps", "v1beta2", "Deployment", "default", "foo");
        assert_eq!(object_key_for(&v1), object_key_for(&v1beta2));
    }

    #[test]
    fn test_unescaped_slashes_can_collide() {
        assert_eq!(
            object_key("a/b", "Kind", "ns", "name"),
            object_key("a", "b/Kind", "ns", "name")
        );
    }
}

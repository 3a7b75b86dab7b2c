//! Equivalence configuration loading.
//!
//! # Example Config
//!
//! ```toml
//! include_defaults = true
//!
//! classes = [
//!     [
//!         { group = "extensions", kind = "Ingress" },
//!         { group = "networking.k8s.io", kind = "Ingress" },
//!     ],
//! ]
//! ```
//!
//! The same structure is accepted as YAML or JSON; the format is chosen by
//! file extension.

use std::path::Path;

use kindex_core::{Error, GroupKind, Result, ResultExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equivalences::EquivalenceRules;

/// Declarative equivalence rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EquivalenceConfig {
    /// Start from the well-known Kubernetes API group migrations.
    pub include_defaults: bool,
    /// Additional classes of interchangeable group kinds.
    pub classes: Vec<Vec<GroupKind>>,
}

impl Default for EquivalenceConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            classes: Vec::new(),
        }
    }
}

impl EquivalenceConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `TomlParseFailed` if the document is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::toml_parse_failed(e.to_string()))
    }

    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `YamlParseFailed` if the document is malformed.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::yaml_parse_failed(e.to_string()))
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `JsonParseFailed` if the document is malformed.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::json_parse_failed(e.to_string()))
    }

    /// Load and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The extension is not `.toml`, `.yaml`, `.yml` or `.json`
    /// - The file cannot be read
    /// - The content is malformed
    /// - A class names a group kind without a kind
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("yaml" | "yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(Error::unsupported_config_format(path)),
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::file_read_failed(path, e.to_string()))?;

        let config = parse(&content)?;
        config.validate()?;

        debug!(
            path = %path.display(),
            include_defaults = config.include_defaults,
            classes = config.classes.len(),
            "Loaded equivalence config"
        );
        Ok(config)
    }

    /// Load a config file, falling back to the default config on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).or_default_logged(Self::default())
    }

    /// Check that every group kind in every class names a kind.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEquivalenceClass` for the first offending class.
    pub fn validate(&self) -> Result<()> {
        self.classes
            .iter()
            .enumerate()
            .find_map(|(index, class)| {
                class.iter().find(|gk| gk.kind.is_empty()).map(|gk| {
                    Error::invalid_equivalence_class(format!(
                        "class {index} contains group kind with empty kind (group '{}')",
                        gk.group
                    ))
                })
            })
            .map_or(Ok(()), Err)
    }

    /// Build the resolver described by this config.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEquivalenceClass` if validation fails.
    pub fn into_rules(self) -> Result<EquivalenceRules> {
        self.validate()?;

        let base = if self.include_defaults {
            EquivalenceRules::with_defaults()
        } else {
            EquivalenceRules::new()
        };

        Ok(self
            .classes
            .into_iter()
            .fold(base, |rules, class| rules.with_class(class)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::equivalences::Equivalences;

    fn gk(group: &str, kind: &str) -> GroupKind {
        GroupKind::new(group, kind)
    }

    const TOML_CONFIG: &str = r#"
include_defaults = false

classes = [
    [
        { group = "example.io", kind = "Widget" },
        { group = "widgets.example.io", kind = "Widget" },
    ],
]
"#;

    const YAML_CONFIG: &str = r"
classes:
  - - group: example.io
      kind: Widget
    - group: widgets.example.io
      kind: Widget
";

    #[test]
    fn test_default_includes_well_known_migrations() -> Result<()> {
        let rules = EquivalenceConfig::default().into_rules()?;
        assert!(rules
            .equivalences_for(&gk("extensions", "Deployment"))
            .contains(&gk("apps", "Deployment")));
        Ok(())
    }

    #[test]
    fn test_from_toml_str() -> Result<()> {
        let config = EquivalenceConfig::from_toml_str(TOML_CONFIG)?;
        assert!(!config.include_defaults);
        assert_eq!(config.classes.len(), 1);

        let rules = config.into_rules()?;
        assert_eq!(rules.len(), 2);
        assert!(rules
            .equivalences_for(&gk("example.io", "Widget"))
            .contains(&gk("widgets.example.io", "Widget")));
        Ok(())
    }

    #[test]
    fn test_from_yaml_str_keeps_defaults() -> Result<()> {
        let config = EquivalenceConfig::from_yaml_str(YAML_CONFIG)?;
        assert!(config.include_defaults);

        let rules = config.into_rules()?;
        assert_eq!(rules.len(), 14);
        Ok(())
    }

    #[test]
    fn test_from_json_str() -> Result<()> {
        let malformed = EquivalenceConfig::from_json_str(r#"{"classes": [[{"group": 1}]]}"#);
        assert!(matches!(malformed, Err(Error::JsonParseFailed { .. })));

        let config = EquivalenceConfig::from_json_str(r#"{"include_defaults": false}"#)?;
        assert!(config.into_rules()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_toml() {
        let result = EquivalenceConfig::from_toml_str("classes = [[{ group = ");
        assert!(matches!(result, Err(Error::TomlParseFailed { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_kind() {
        let config = EquivalenceConfig {
            include_defaults: false,
            classes: vec![vec![gk("apps", "Deployment"), gk("extensions", "")]],
        };
        assert!(matches!(
            config.into_rules(),
            Err(Error::InvalidEquivalenceClass { .. })
        ));
    }

    #[test]
    fn test_load_by_extension() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("equivalences.toml");
        std::fs::File::create(&path)?.write_all(TOML_CONFIG.as_bytes())?;

        let config = EquivalenceConfig::load(&path)?;
        assert!(!config.include_defaults);

        let yaml_path = dir.path().join("equivalences.yml");
        std::fs::write(&yaml_path, YAML_CONFIG)?;
        assert_eq!(EquivalenceConfig::load(&yaml_path)?.classes.len(), 1);
        Ok(())
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let result = EquivalenceConfig::load("equivalences.ini");
        assert!(matches!(result, Err(Error::UnsupportedConfigFormat { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = EquivalenceConfig::load("/nonexistent/kindex/equivalences.toml");
        assert!(matches!(result, Err(Error::FileReadFailed { .. })));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = EquivalenceConfig::load_or_default("/nonexistent/kindex/equivalences.yaml");
        assert_eq!(config, EquivalenceConfig::default());
    }
}

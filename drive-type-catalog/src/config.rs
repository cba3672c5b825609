// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::naming::{DEFAULT_TEMPLATE_LONG, DEFAULT_TEMPLATE_SHORT, NameFormatter};

/// Catalog settings, read from TOML
///
/// ```toml
/// drive_type_template_short = "%s_%sGB_%sRPM"
/// drive_type_template_long = "%s_%sGB_%sRPM_%s"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Template for names of drive types without capabilities
    pub drive_type_template_short: String,

    /// Template for names of drive types with capabilities
    pub drive_type_template_long: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            drive_type_template_short: DEFAULT_TEMPLATE_SHORT.to_string(),
            drive_type_template_long: DEFAULT_TEMPLATE_LONG.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse both templates; malformed templates are rejected here
    pub fn name_formatter(&self) -> Result<NameFormatter> {
        NameFormatter::new(
            &self.drive_type_template_short,
            &self.drive_type_template_long,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CatalogConfig::from_toml_str("").expect("parse empty config");
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn overrides_one_template() {
        let config = CatalogConfig::from_toml_str(r#"drive_type_template_short = "%s-%s-%s""#)
            .expect("parse config");
        assert_eq!(config.drive_type_template_short, "%s-%s-%s");
        assert_eq!(config.drive_type_template_long, DEFAULT_TEMPLATE_LONG);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = CatalogConfig::from_toml_str("drive_type_template = \"%s\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn malformed_template_fails_when_building_formatter() {
        let config = CatalogConfig {
            drive_type_template_long: "%s".to_string(),
            ..CatalogConfig::default()
        };
        let err = config.name_formatter().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Template {
                setting: "drive_type_template_long",
                ..
            }
        ));
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(&path, "drive_type_template_long = \"%s/%s/%s/%s\"\n").expect("write config");

        let config = CatalogConfig::load(&path).expect("load config");
        assert_eq!(config.drive_type_template_long, "%s/%s/%s/%s");

        let err = CatalogConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }
}

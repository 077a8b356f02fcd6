use std::collections::BTreeMap;

use crate::error::ConfigError;

use super::types::PluginConfigFile;

/// Validated, immutable plugin configuration. Resolved once at plugin
/// construction; every aggregation call reads it, nothing mutates it.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    pub namespace: String,
    pub region: String,
    pub dimensions: BTreeMap<String, String>,
}

impl PluginConfig {
    /// Validates the raw file shape: `namespace` and `region` are required
    /// and must be non-empty; `dimensions` is optional.
    ///
    /// # Errors
    ///
    /// Returns an error when a required parameter is missing or empty.
    /// These are fatal to plugin startup and never retried.
    pub fn from_file(raw: PluginConfigFile) -> Result<Self, ConfigError> {
        let namespace = raw.namespace.ok_or(ConfigError::NamespaceRequired)?;
        if namespace.is_empty() {
            return Err(ConfigError::NamespaceEmpty);
        }
        let region = raw.region.ok_or(ConfigError::RegionRequired)?;
        if region.is_empty() {
            return Err(ConfigError::RegionEmpty);
        }
        Ok(Self {
            namespace,
            region,
            dimensions: raw.dimensions.unwrap_or_default(),
        })
    }
}

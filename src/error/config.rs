use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading or validating the plugin configuration.
/// All of these are fatal at plugin initialization; nothing here is retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read plugin config '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML plugin config '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to parse JSON plugin config '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported plugin config extension '{ext}'. Use .toml or .json.")]
    UnsupportedExtension { ext: String },
    #[error("Plugin config file must have .toml or .json extension.")]
    MissingExtension,
    #[error("The 'namespace' parameter is required.")]
    NamespaceRequired,
    #[error("The 'namespace' param must have a length of at least one.")]
    NamespaceEmpty,
    #[error("The 'region' parameter is required.")]
    RegionRequired,
    #[error("The 'region' param must have a length of at least one.")]
    RegionEmpty,
}

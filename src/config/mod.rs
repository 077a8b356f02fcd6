//! Plugin configuration loading and validation.
mod loader;
mod types;
mod validate;


pub use loader::load_plugin_config;
pub use types::PluginConfigFile;
pub use validate::PluginConfig;

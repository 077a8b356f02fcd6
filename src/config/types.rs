use std::collections::BTreeMap;

use serde::Deserialize;

/// Raw plugin configuration as read from file, before validation.
///
/// `region` is consumed only by backend-client construction; the plugin
/// validates and stores it but never dials anything itself.
#[derive(Debug, Default, Deserialize)]
pub struct PluginConfigFile {
    pub namespace: Option<String>,
    pub region: Option<String>,
    pub dimensions: Option<BTreeMap<String, String>>,
}

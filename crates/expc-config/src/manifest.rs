use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use expc_model::CompilerConfig;

pub const CONFIG_SCHEMA: &str = "expc.compiler-config";
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// On-disk layout of a compiler configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub manifest: ManifestHeader,
    pub platforms: BTreeMap<String, String>,
    pub defaults: BTreeMap<String, String>,
    pub final_return: BTreeMap<String, String>,
    pub final_define: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

impl From<ConfigFile> for CompilerConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            platforms: file.platforms,
            defaults: file.defaults,
            final_return: file.final_return,
            final_define: file.final_define,
        }
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Platform rendered as the `#else` branch of generated code.
pub const FALLBACK_PLATFORM: &str = "posix";

/// Default symbol meaning "on in debug builds, off otherwise".
pub const DEBUG_ONLY_DEFAULT: &str = "kDefaultForDebugOnly";

/// Injected configuration for one compilation run.
///
/// All tables are keyed in name order so every walk over platforms or value
/// classes is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Platform name to platform-detection symbol.
    pub platforms: BTreeMap<String, String>,
    /// Value class to literal default symbol.
    pub defaults: BTreeMap<String, String>,
    /// Value class to the expression returned by `Is*Enabled()`.
    pub final_return: BTreeMap<String, String>,
    /// Value class to the preprocessor text preceding the inclusion define.
    pub final_define: BTreeMap<String, String>,
}

impl CompilerConfig {
    pub fn platform_names(&self) -> impl Iterator<Item = &str> {
        self.platforms.keys().map(String::as_str)
    }

    pub fn platform_symbol(&self, platform: &str) -> Option<&str> {
        self.platforms.get(platform).map(String::as_str)
    }

    pub fn default_symbol(&self, value_class: &str) -> Option<&str> {
        self.defaults.get(value_class).map(String::as_str)
    }

    pub fn final_return_for(&self, value_class: &str) -> Option<&str> {
        self.final_return.get(value_class).map(String::as_str)
    }

    pub fn final_define_for(&self, value_class: &str) -> Option<&str> {
        self.final_define.get(value_class).map(String::as_str)
    }

    /// Platforms that get their own `#if defined(...)` branch.
    pub fn guarded_platforms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.platforms
            .iter()
            .filter(|(name, _)| name.as_str() != FALLBACK_PLATFORM)
            .map(|(name, symbol)| (name.as_str(), symbol.as_str()))
    }
}

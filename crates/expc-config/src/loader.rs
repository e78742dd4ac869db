use std::path::Path;

use tracing::debug;

use expc_model::{CompilerConfig, DEBUG_VALUE_CLASS, FALLBACK_PLATFORM, FALLBACK_VALUE_CLASS};

use crate::error::ConfigError;
use crate::manifest::{CONFIG_SCHEMA, CONFIG_SCHEMA_VERSION, ConfigFile};

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");
const DEFAULT_CONFIG_PATH: &str = "<built-in>";

/// Value classes the compiler itself produces.
const REQUIRED_VALUE_CLASSES: &[&str] = &[DEBUG_VALUE_CLASS, FALLBACK_VALUE_CLASS];

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<CompilerConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    parse_config(&contents, path)
}

/// The configuration shipped with the compiler (gRPC platforms and value classes).
pub fn load_default_config() -> Result<CompilerConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG, Path::new(DEFAULT_CONFIG_PATH))
}

/// Parse configuration text; `origin` is only used in error messages.
pub fn parse_config(contents: &str, origin: &Path) -> Result<CompilerConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(contents).map_err(|e| ConfigError::Toml {
        path: origin.to_path_buf(),
        source: e,
    })?;
    validate_header(&file)?;
    let config = CompilerConfig::from(file);
    validate_config(&config)?;
    debug!(
        origin = %origin.display(),
        platform_count = config.platforms.len(),
        value_class_count = config.defaults.len(),
        "loaded compiler config"
    );
    Ok(config)
}

fn validate_header(file: &ConfigFile) -> Result<(), ConfigError> {
    if file.manifest.schema != CONFIG_SCHEMA {
        return Err(ConfigError::InvalidManifest {
            message: format!("unsupported schema: {}", file.manifest.schema),
        });
    }
    if file.manifest.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(ConfigError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                file.manifest.schema_version
            ),
        });
    }
    Ok(())
}

/// Check that the tables agree with each other and with what the compiler emits.
pub fn validate_config(config: &CompilerConfig) -> Result<(), ConfigError> {
    if !config.platforms.contains_key(FALLBACK_PLATFORM) {
        return Err(ConfigError::MissingPlatform {
            platform: FALLBACK_PLATFORM.to_string(),
        });
    }

    for value_class in REQUIRED_VALUE_CLASSES {
        if !config.defaults.contains_key(*value_class) {
            return Err(ConfigError::MissingValueClass {
                value_class: (*value_class).to_string(),
            });
        }
    }

    let tables = [
        ("final_return", &config.final_return),
        ("final_define", &config.final_define),
    ];
    for value_class in config.defaults.keys() {
        for (table, entries) in tables {
            if !entries.contains_key(value_class) {
                return Err(ConfigError::IncompleteValueClass {
                    value_class: value_class.clone(),
                    table: table.to_string(),
                });
            }
        }
    }
    for (table, entries) in tables {
        if let Some(value_class) = entries.keys().find(|k| !config.defaults.contains_key(*k)) {
            return Err(ConfigError::UnknownValueClass {
                value_class: value_class.clone(),
                table: table.to_string(),
            });
        }
    }

    Ok(())
}

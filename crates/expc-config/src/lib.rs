#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod manifest;

pub use crate::error::ConfigError;
pub use crate::loader::{load_config, load_default_config, parse_config, validate_config};
pub use crate::manifest::{CONFIG_SCHEMA, CONFIG_SCHEMA_VERSION, ConfigFile};

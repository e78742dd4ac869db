use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// Header path used when the caller does not supply one.
pub const DEFAULT_HEADER_PATH: &str = "src/core/lib/experiments/experiments.h";

/// Flavour of generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderTarget {
    Google3,
    #[default]
    OssProduction,
    OssTest,
}

impl RenderTarget {
    pub const ALL: [RenderTarget; 3] = [Self::Google3, Self::OssProduction, Self::OssTest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google3 => "grpc_google3",
            Self::OssProduction => "grpc_oss_production",
            Self::OssTest => "grpc_oss_test",
        }
    }

    /// Name of the generated metadata array.
    pub fn metadata_symbol(&self) -> &'static str {
        match self {
            Self::OssTest => "g_test_experiment_metadata",
            Self::Google3 | Self::OssProduction => "g_experiment_metadata",
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderTarget {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| RenderError::UnsupportedMode {
                mode: s.to_string(),
            })
    }
}

/// Options shared by the header and source renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub target: RenderTarget,
    /// Path the source file uses to include the header.
    pub header_path: String,
}

impl RenderOptions {
    pub fn new(target: RenderTarget) -> Self {
        Self {
            target,
            header_path: DEFAULT_HEADER_PATH.to_string(),
        }
    }

    #[must_use]
    pub fn with_header_path(mut self, header_path: impl Into<String>) -> Self {
        self.header_path = header_path.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(RenderTarget::default())
    }
}

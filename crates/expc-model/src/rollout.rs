use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Rollout policy for one experiment.
///
/// `default_value` applies to every platform and wins over `platform_value`
/// when both are supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloutSpecification {
    pub name: String,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub platform_value: BTreeMap<String, String>,
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl RolloutSpecification {
    pub fn with_default(name: impl Into<String>, value_class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: Some(value_class.into()),
            ..Self::default()
        }
    }

    pub fn with_platform_values<I, K, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            platform_value: values
                .into_iter()
                .map(|(platform, value)| (platform.into(), value.into()))
                .collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_requirements<I, S>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requirements = requirements.into_iter().map(Into::into).collect();
        self
    }

    /// The single default, ignoring an empty string.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref().filter(|value| !value.is_empty())
    }

    /// True when neither value shape carries anything.
    pub fn has_no_value(&self) -> bool {
        self.default_value().is_none() && self.platform_value.is_empty()
    }

    /// Value class requested for `platform`.
    pub fn value_for(&self, platform: &str) -> Option<&str> {
        self.default_value()
            .or_else(|| self.platform_value.get(platform).map(String::as_str))
    }
}

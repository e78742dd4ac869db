use std::fmt;

use serde::{Deserialize, Serialize};

/// Issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Which definition rule produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    MissingName,
    MissingDescription,
    MissingOwner,
    MissingExpiry,
    MonitoringExpiry,
    InvalidExpiryFormat,
    ExpiryInBlackout,
    Expired,
    ExpiryTooFar,
    DefinitionInvalid,
}

impl CheckType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckType::MissingName => "Missing Name",
            CheckType::MissingDescription => "Missing Description",
            CheckType::MissingOwner => "Missing Owner",
            CheckType::MissingExpiry => "Missing Expiry",
            CheckType::MonitoringExpiry => "Monitoring Expiry",
            CheckType::InvalidExpiryFormat => "Invalid Expiry Format",
            CheckType::ExpiryInBlackout => "Expiry In Blackout",
            CheckType::Expired => "Expired",
            CheckType::ExpiryTooFar => "Expiry Too Far",
            CheckType::DefinitionInvalid => "Definition Invalid",
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem found in one experiment definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub check_type: CheckType,
    pub message: String,
}

impl Issue {
    pub fn error(check_type: CheckType, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            check_type,
            message: message.into(),
        }
    }

    pub fn warning(check_type: CheckType, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            check_type,
            message: message.into(),
        }
    }
}

/// Validation report for one experiment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub experiment: String,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn new(experiment: &str) -> Self {
        Self {
            experiment: experiment.to_string(),
            issues: Vec::new(),
        }
    }

    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Warnings never affect validity.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    pub fn has_check(&self, check_type: CheckType) -> bool {
        self.issues.iter().any(|i| i.check_type == check_type)
    }
}

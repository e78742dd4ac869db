use std::path::PathBuf;

use serde::Serialize;

use expc_model::ValidationReport;
use expc_report::RenderTarget;

#[derive(Debug)]
pub struct GenerateResult {
    pub target: RenderTarget,
    pub platforms: Vec<String>,
    pub experiments: Vec<ExperimentRow>,
    pub reports: Vec<ValidationReport>,
    pub header: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub dry_run: bool,
    pub has_errors: bool,
}

/// One experiment's resolution, with value classes in platform order.
#[derive(Debug)]
pub struct ExperimentRow {
    pub name: String,
    pub value_classes: Vec<String>,
    pub requirements: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub experiments: usize,
    pub valid: usize,
    pub reports: Vec<ValidationReport>,
    pub has_errors: bool,
}

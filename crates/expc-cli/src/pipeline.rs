//! Load inputs, resolve them, and write generated files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info, info_span};

use expc_core::ExperimentsCompiler;
use expc_model::{CheckType, CompilerConfig, ValidationReport};
use expc_report::{RenderOptions, render_header, render_source};
use expc_validate::Validator;

/// Paths and settings that feed one compilation run.
#[derive(Debug, Clone, Default)]
pub struct PipelineInputs {
    pub definitions: Vec<PathBuf>,
    pub rollouts: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    /// Pinned date for expiry checks; today (UTC) when unset.
    pub today: Option<NaiveDate>,
}

/// A compiler with every input applied.
#[derive(Debug)]
pub struct LoadedRun {
    pub compiler: ExperimentsCompiler,
    /// Construction-time report of each registered definition, by name.
    /// A redefinition replaces the earlier record's report.
    pub definition_reports: BTreeMap<String, ValidationReport>,
    pub rollouts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub header: String,
    pub source: String,
}

/// The configuration at `path`, or the built-in one.
pub fn load_config(path: Option<&Path>) -> Result<CompilerConfig> {
    match path {
        Some(path) => expc_config::load_config(path)
            .with_context(|| format!("load config {}", path.display())),
        None => expc_config::load_default_config().context("load built-in config"),
    }
}

/// Read every definition file, then every rollout file, into a fresh compiler.
pub fn load_inputs(inputs: &PipelineInputs) -> Result<LoadedRun> {
    let span = info_span!("load");
    let _guard = span.enter();

    let config = load_config(inputs.config.as_deref())?;
    let validator = match inputs.today {
        Some(today) => Validator::new().with_today(today),
        None => Validator::new(),
    };
    let mut compiler = ExperimentsCompiler::new(config).with_validator(validator);

    let mut definition_reports = BTreeMap::new();
    for path in &inputs.definitions {
        let contents = read_input(path)?;
        let reports = compiler
            .add_experiment_definitions(&contents)
            .with_context(|| format!("parse experiment definitions {}", path.display()))?;
        debug!(path = %path.display(), records = reports.len(), "read definitions");
        for report in reports {
            definition_reports.insert(report.experiment.clone(), report);
        }
    }

    let mut rollouts = 0;
    for path in &inputs.rollouts {
        let contents = read_input(path)?;
        rollouts += compiler
            .add_rollout_specifications(&contents)
            .with_context(|| format!("apply rollout specifications {}", path.display()))?;
    }

    info!(
        experiments = compiler.experiment_definitions().len(),
        rollouts, "inputs loaded"
    );
    Ok(LoadedRun {
        compiler,
        definition_reports,
        rollouts,
    })
}

/// Reports with at least one issue, ordered by experiment name.
///
/// Definitions that failed construction are reported with their original
/// issues rather than a bare "invalid" marker.
pub fn collect_reports(run: &LoadedRun, check_expiry: bool) -> Vec<ValidationReport> {
    let mut reports: Vec<ValidationReport> = run
        .definition_reports
        .values()
        .filter(|report| !report.issues.is_empty())
        .cloned()
        .collect();
    reports.extend(
        run.compiler
            .check_definitions(check_expiry)
            .into_iter()
            .filter(|report| {
                !report.issues.is_empty() && !report.has_check(CheckType::DefinitionInvalid)
            }),
    );
    reports.sort_by(|a, b| a.experiment.cmp(&b.experiment));
    reports
}

/// Render both files for the run's resolved table.
pub fn render_outputs(compiler: &ExperimentsCompiler, options: &RenderOptions) -> Result<RenderedOutput> {
    let span = info_span!("render", mode = %options.target);
    let _guard = span.enter();

    let table = compiler.resolved_table();
    let header = render_header(&table, options).context("render header")?;
    let source = render_source(&table, options).context("render source")?;
    info!(experiments = table.len(), "rendered outputs");
    Ok(RenderedOutput { header, source })
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

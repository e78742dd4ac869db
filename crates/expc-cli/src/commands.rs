use anyhow::{Result, bail};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use expc_cli::pipeline::{
    LoadedRun, PipelineInputs, collect_reports, load_config, load_inputs, render_outputs,
    write_output,
};
use expc_model::FALLBACK_PLATFORM;
use expc_report::RenderOptions;

use crate::cli::{CheckArgs, GenerateArgs, InputArgs, PlatformsArgs};
use crate::summary::apply_table_style;
use crate::types::{CheckResult, ExperimentRow, GenerateResult};

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let span = info_span!("generate", mode = %args.mode);
    let _guard = span.enter();

    let run = load_inputs(&pipeline_inputs(&args.inputs))?;
    let reports = collect_reports(&run, args.check_expiry);
    let mut result = GenerateResult {
        target: args.mode,
        platforms: run
            .compiler
            .config()
            .platform_names()
            .map(str::to_string)
            .collect(),
        experiments: experiment_rows(&run),
        has_errors: reports.iter().any(|report| report.has_errors()),
        reports,
        header: None,
        source: None,
        dry_run: args.dry_run,
    };
    if result.has_errors {
        warn!("invalid experiment definitions, nothing generated");
        return Ok(result);
    }

    let debug_experiments = run.compiler.debug_experiments();
    if args.no_debug_experiments && !debug_experiments.is_empty() {
        let mut names: Vec<&str> = debug_experiments
            .iter()
            .map(|entry| entry.experiment.as_str())
            .collect();
        names.dedup();
        bail!("debug-only experiments are not allowed: {}", names.join(", "));
    }

    let options = RenderOptions::new(args.mode).with_header_path(args.header_path.clone());
    let rendered = render_outputs(&run.compiler, &options)?;
    if args.dry_run {
        info!("dry run, outputs not written");
        return Ok(result);
    }
    if let Some(path) = &args.header_output {
        write_output(path, &rendered.header)?;
        result.header = Some(path.clone());
    }
    if let Some(path) = &args.source_output {
        write_output(path, &rendered.source)?;
        result.source = Some(path.clone());
    }
    Ok(result)
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let span = info_span!("check");
    let _guard = span.enter();

    let run = load_inputs(&pipeline_inputs(&args.inputs))?;
    let reports = collect_reports(&run, args.check_expiry);
    Ok(CheckResult {
        experiments: run.compiler.experiment_definitions().len(),
        valid: run.compiler.resolved_table().len(),
        has_errors: reports.iter().any(|report| report.has_errors()),
        reports,
    })
}

pub fn run_platforms(args: &PlatformsArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Platform", "Symbol", "Branch"]);
    apply_table_style(&mut table);
    let mut guarded = 0usize;
    for (platform, symbol) in &config.platforms {
        let branch = if platform == FALLBACK_PLATFORM {
            "#else".to_string()
        } else {
            guarded += 1;
            let directive = if guarded == 1 { "#if" } else { "#elif" };
            format!("{directive} defined({symbol})")
        };
        table.add_row(vec![platform.clone(), symbol.clone(), branch]);
    }
    println!("{table}");
    Ok(())
}

fn pipeline_inputs(args: &InputArgs) -> PipelineInputs {
    PipelineInputs {
        definitions: args.definitions.clone(),
        rollouts: args.rollouts.clone(),
        config: args.config.clone(),
        today: args.today,
    }
}

fn experiment_rows(run: &LoadedRun) -> Vec<ExperimentRow> {
    let config = run.compiler.config();
    run.compiler
        .resolved_table()
        .experiments()
        .iter()
        .map(|experiment| ExperimentRow {
            name: experiment.name.clone(),
            value_classes: config
                .platform_names()
                .map(|platform| experiment.default_value(platform).to_string())
                .collect(),
            requirements: experiment.requirements().to_vec(),
        })
        .collect()
}

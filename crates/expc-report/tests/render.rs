//! Rendering tests over a small resolved table.

use chrono::NaiveDate;
use expc_core::ExperimentsCompiler;
use expc_report::{RenderError, RenderOptions, RenderTarget, render_header, render_source};
use expc_validate::Validator;

const DEFINITIONS: &str = r#"
- name: alpha
  description: First experiment.
  owner: someone@example.com
  expiry: 2025-02-01
- name: beta
  description: Needs "alpha".
  owner: someone@example.com
  expiry: 2025-02-01
  allow_in_fuzzing_config: true
"#;

const ROLLOUTS: &str = r#"
- name: alpha
  default_value: true
- name: beta
  default_value: false
  requirements: [alpha]
"#;

fn compiler(definitions: &str, rollouts: &str) -> ExperimentsCompiler {
    let config = expc_config::load_default_config().unwrap();
    let validator = Validator::new().with_today(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
    let mut compiler = ExperimentsCompiler::new(config).with_validator(validator);
    compiler.add_experiment_definitions(definitions).unwrap();
    compiler.add_rollout_specifications(rollouts).unwrap();
    compiler
}

#[test]
fn header_snapshot() {
    let compiler = compiler(DEFINITIONS, ROLLOUTS);
    let header = render_header(
        &compiler.resolved_table(),
        &RenderOptions::new(RenderTarget::OssProduction),
    )
    .unwrap();
    insta::assert_snapshot!("oss_production_header", header);
}

#[test]
fn source_lists_metadata_per_platform() {
    let compiler = compiler(DEFINITIONS, ROLLOUTS);
    let options = RenderOptions::new(RenderTarget::OssProduction)
        .with_header_path("src/core/lib/experiments/experiments.github.h");
    let source = render_source(&compiler.resolved_table(), &options).unwrap();

    assert!(source.contains("#include <stdint.h>"));
    assert!(source.contains("#include \"src/core/lib/experiments/experiments.h\""));
    assert!(source.contains("#ifndef GRPC_EXPERIMENTS_ARE_FINAL"));
    assert!(source.contains("#if defined(GRPC_CFSTREAM)"));
    assert!(source.contains("#elif defined(GPR_WINDOWS)"));
    assert!(source.contains("const char* const description_beta = \"Needs \\\"alpha\\\".\";"));
    assert!(source.contains("const char* const additional_constraints_beta = \"alpha\";"));
    assert!(source.contains(
        "const uint8_t required_experiments_beta[] = {static_cast<uint8_t>(grpc_core::kExperimentIdAlpha)};"
    ));
    assert!(source.contains(
        "  {\"alpha\", description_alpha, additional_constraints_alpha, nullptr, 0, true, false},"
    ));
    assert!(source.contains(
        "  {\"beta\", description_beta, additional_constraints_beta, required_experiments_beta, 1, kDefaultForDebugOnly, true},"
    ));
    assert_eq!(source.matches("const ExperimentMetadata g_experiment_metadata[] = {").count(), 3);
    assert_eq!(source.matches("const bool kDefaultForDebugOnly = true;").count(), 3);
}

#[test]
fn test_target_renames_metadata_array() {
    let compiler = compiler(DEFINITIONS, ROLLOUTS);
    let options = RenderOptions::new(RenderTarget::OssTest);
    let table = compiler.resolved_table();
    let header = render_header(&table, &options).unwrap();
    let source = render_source(&table, &options).unwrap();
    assert!(header.contains("extern const ExperimentMetadata g_test_experiment_metadata[kNumExperiments];"));
    assert!(source.contains("const ExperimentMetadata g_test_experiment_metadata[] = {"));
    assert!(!source.contains("g_experiment_metadata"));
}

#[test]
fn no_debug_block_or_stdint_without_requirements() {
    let compiler = compiler(
        "name: alpha\ndescription: d\nowner: o\nexpiry: 2025-02-01\n",
        "name: alpha\ndefault_value: false\n",
    );
    let source = render_source(&compiler.resolved_table(), &RenderOptions::default()).unwrap();
    assert!(!source.contains("<stdint.h>"));
    assert!(!source.contains("const bool kDefaultForDebugOnly"));
    assert!(source.contains("nullptr, 0, false, false},"));
}

#[test]
fn invalid_experiments_are_not_rendered() {
    let mut compiler = compiler(DEFINITIONS, ROLLOUTS);
    compiler
        .add_experiment_definitions("name: gamma\ndescription: d\nowner: ''\nexpiry: 2025-02-01\n")
        .unwrap();
    let table = compiler.resolved_table();
    let header = render_header(&table, &RenderOptions::default()).unwrap();
    let source = render_source(&table, &RenderOptions::default()).unwrap();
    assert!(!header.contains("Gamma"));
    assert!(!source.contains("gamma"));
}

#[test]
fn rendering_is_deterministic() {
    let options = RenderOptions::default();
    let first = compiler(DEFINITIONS, ROLLOUTS);
    let second = compiler(DEFINITIONS, ROLLOUTS);
    assert_eq!(
        render_header(&first.resolved_table(), &options).unwrap(),
        render_header(&second.resolved_table(), &options).unwrap()
    );
    assert_eq!(
        render_source(&first.resolved_table(), &options).unwrap(),
        render_source(&second.resolved_table(), &options).unwrap()
    );
}

#[test]
fn unknown_value_class_is_reported() {
    let compiler = compiler(
        "name: alpha\ndescription: d\nowner: o\nexpiry: 2025-02-01\n",
        "name: alpha\ndefault_value: sometimes\n",
    );
    let error = render_header(&compiler.resolved_table(), &RenderOptions::default()).unwrap_err();
    assert_eq!(
        error,
        RenderError::UnknownValueClass {
            experiment: "alpha".to_string(),
            platform: "ios".to_string(),
            value_class: "sometimes".to_string(),
            table: "final_define",
        }
    );
}

#[test]
fn requirement_on_missing_experiment_is_reported() {
    let compiler = compiler(
        "name: alpha\ndescription: d\nowner: o\nexpiry: 2025-02-01\n",
        "name: alpha\ndefault_value: true\nrequirements: [ghost]\n",
    );
    let error = render_source(&compiler.resolved_table(), &RenderOptions::default()).unwrap_err();
    assert_eq!(
        error,
        RenderError::UnknownRequirement {
            experiment: "alpha".to_string(),
            requirement: "ghost".to_string(),
        }
    );
}

#[test]
fn mode_strings_round_trip() {
    for target in RenderTarget::ALL {
        assert_eq!(target.as_str().parse::<RenderTarget>().unwrap(), target);
    }
    assert!(matches!(
        "grpc_bzl".parse::<RenderTarget>(),
        Err(RenderError::UnsupportedMode { mode }) if mode == "grpc_bzl"
    ));
}

//! `experiments.cc` rendering.

use expc_core::ResolvedTable;
use expc_model::{DEBUG_ONLY_DEFAULT, ExperimentDefinition};

use crate::common::{
    ConfigTable, FINAL_GUARD, c_string_literal, generated_marker, platform_branches,
    snake_to_pascal, strip_github,
};
use crate::error::RenderError;
use crate::target::RenderOptions;

/// Render the experiments source file for `table`.
pub fn render_source(table: &ResolvedTable<'_>, options: &RenderOptions) -> Result<String, RenderError> {
    let mut output = generated_marker(options.target);
    output.push_str("#include <grpc/support/port_platform.h>\n\n");
    if table.any_requirements() {
        output.push_str("#include <stdint.h>\n\n");
    }
    output.push_str(&format!(
        "#include \"{}\"\n\n",
        strip_github(&options.header_path)
    ));

    output.push_str(&format!("#ifndef {FINAL_GUARD}\n\n"));
    platform_branches(&mut output, table.config(), |output, platform| {
        platform_metadata(output, table, options, platform)
    })?;
    output.push_str("\n#endif\n");
    Ok(output)
}

fn platform_metadata(
    output: &mut String,
    table: &ResolvedTable<'_>,
    options: &RenderOptions,
    platform: &str,
) -> Result<(), RenderError> {
    let config = table.config();
    let mut debug_only = false;

    output.push_str("namespace {\n");
    for experiment in table.experiments() {
        let name = &experiment.name;
        output.push_str(&format!(
            "const char* const description_{name} = {};\n",
            c_string_literal(&experiment.description)
        ));
        output.push_str(&format!(
            "const char* const additional_constraints_{name} = {};\n",
            c_string_literal(experiment.additional_constraints(platform))
        ));
        if !experiment.requirements().is_empty() {
            output.push_str(&format!(
                "const uint8_t required_experiments_{name}[] = {{{}}};\n",
                required_ids(table, experiment)?
            ));
        }
        if ConfigTable::Defaults.lookup(config, experiment, platform)? == DEBUG_ONLY_DEFAULT {
            debug_only = true;
        }
    }
    if debug_only {
        output.push_str("#ifdef NDEBUG\n");
        output.push_str(&format!("const bool {DEBUG_ONLY_DEFAULT} = false;\n"));
        output.push_str("#else\n");
        output.push_str(&format!("const bool {DEBUG_ONLY_DEFAULT} = true;\n"));
        output.push_str("#endif\n");
    }
    output.push_str("}  // namespace\n\n");

    output.push_str("namespace grpc_core {\n\n");
    output.push_str(&format!(
        "const ExperimentMetadata {}[] = {{\n",
        options.target.metadata_symbol()
    ));
    for experiment in table.experiments() {
        let name = &experiment.name;
        let required = if experiment.requirements().is_empty() {
            "nullptr".to_string()
        } else {
            format!("required_experiments_{name}")
        };
        output.push_str(&format!(
            "  {{{}, description_{name}, additional_constraints_{name}, {required}, {}, {}, {}}},\n",
            c_string_literal(name),
            experiment.requirements().len(),
            ConfigTable::Defaults.lookup(config, experiment, platform)?,
            experiment.allow_in_fuzzing_config,
        ));
    }
    output.push_str("};\n\n");
    output.push_str("}  // namespace grpc_core\n");
    Ok(())
}

fn required_ids(
    table: &ResolvedTable<'_>,
    experiment: &ExperimentDefinition,
) -> Result<String, RenderError> {
    let ids = experiment
        .requirements()
        .iter()
        .map(|requirement| {
            if table.contains(requirement) {
                Ok(format!(
                    "static_cast<uint8_t>(grpc_core::kExperimentId{})",
                    snake_to_pascal(requirement)
                ))
            } else {
                Err(RenderError::UnknownRequirement {
                    experiment: experiment.name.clone(),
                    requirement: requirement.clone(),
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ids.join(", "))
}

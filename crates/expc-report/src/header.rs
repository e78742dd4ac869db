//! `experiments.h` rendering.

use expc_core::ResolvedTable;
use expc_model::ExperimentDefinition;

use crate::common::{
    ConfigTable, FINAL_GUARD, NUM_EXPERIMENTS, generated_marker, include_macro, platform_branches,
    snake_to_pascal,
};
use crate::error::RenderError;
use crate::target::RenderOptions;

const INCLUDE_GUARD: &str = "GRPC_SRC_CORE_LIB_EXPERIMENTS_EXPERIMENTS_H";

/// Render the experiments header for `table`.
pub fn render_header(table: &ResolvedTable<'_>, options: &RenderOptions) -> Result<String, RenderError> {
    let config = table.config();
    let mut output = generated_marker(options.target);
    output.push_str(&format!("#ifndef {INCLUDE_GUARD}\n#define {INCLUDE_GUARD}\n\n"));
    output.push_str("#include <grpc/support/port_platform.h>\n\n");
    output.push_str("#include \"src/core/lib/experiments/config.h\"\n\n");
    output.push_str("namespace grpc_core {\n\n");

    output.push_str(&format!("#ifdef {FINAL_GUARD}\n\n"));
    platform_branches(&mut output, config, |output, platform| {
        for experiment in table.experiments() {
            final_accessor(output, table, experiment, platform)?;
        }
        Ok(())
    })?;

    output.push_str("\n#else\n");
    output.push_str("enum ExperimentIds {\n");
    for experiment in table.experiments() {
        output.push_str(&format!("  kExperimentId{},\n", snake_to_pascal(&experiment.name)));
    }
    output.push_str(&format!("  {NUM_EXPERIMENTS}\n}};\n"));
    for experiment in table.experiments() {
        let pascal = snake_to_pascal(&experiment.name);
        output.push_str(&format!("#define {}\n", include_macro(&experiment.name)));
        output.push_str(&format!(
            "inline bool Is{pascal}Enabled() {{ return IsExperimentEnabled<kExperimentId{pascal}>(); }}\n"
        ));
    }
    output.push_str(&format!(
        "\nextern const ExperimentMetadata {}[{NUM_EXPERIMENTS}];\n\n",
        options.target.metadata_symbol()
    ));
    output.push_str("#endif\n");
    output.push_str("}  // namespace grpc_core\n\n");
    output.push_str(&format!("#endif  // {INCLUDE_GUARD}\n"));
    Ok(output)
}

fn final_accessor(
    output: &mut String,
    table: &ResolvedTable<'_>,
    experiment: &ExperimentDefinition,
    platform: &str,
) -> Result<(), RenderError> {
    let config = table.config();
    let define = ConfigTable::FinalDefine.lookup(config, experiment, platform)?;
    if !define.is_empty() {
        output.push_str(&define.replace("%s", &include_macro(&experiment.name)));
        output.push('\n');
    }
    let body = ConfigTable::FinalReturn.lookup(config, experiment, platform)?;
    let pascal = snake_to_pascal(&experiment.name);
    if body.starts_with('\n') {
        output.push_str(&format!("inline bool Is{pascal}Enabled() {{{body}}}\n"));
    } else {
        output.push_str(&format!("inline bool Is{pascal}Enabled() {{ {body} }}\n"));
    }
    Ok(())
}

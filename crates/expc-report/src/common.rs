//! Helpers shared by the header and source renderers.

use expc_model::{CompilerConfig, ExperimentDefinition, FALLBACK_PLATFORM};

use crate::error::RenderError;
use crate::target::RenderTarget;

pub(crate) const FINAL_GUARD: &str = "GRPC_EXPERIMENTS_ARE_FINAL";
pub(crate) const NUM_EXPERIMENTS: &str = "kNumExperiments";

/// `tcp_frame_size_tuning` becomes `TcpFrameSizeTuning`.
pub fn snake_to_pascal(snake: &str) -> String {
    let mut pascal = String::with_capacity(snake.len());
    let mut capitalize_next = true;
    for c in snake.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            pascal.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            pascal.push(c);
        }
    }
    pascal
}

pub(crate) fn include_macro(name: &str) -> String {
    format!("GRPC_EXPERIMENT_IS_INCLUDED_{}", name.to_ascii_uppercase())
}

pub(crate) fn generated_marker(target: RenderTarget) -> String {
    format!("// Auto generated by expc ({target}). Do not edit.\n\n")
}

/// Quote `text` as a C string literal.
pub(crate) fn c_string_literal(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('"');
    for c in text.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\t' => literal.push_str("\\t"),
            '\r' => literal.push_str("\\r"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

/// Drop the first `.github` segment so mirrored checkouts include the real path.
pub(crate) fn strip_github(path: &str) -> String {
    path.replacen(".github", "", 1)
}

/// Configuration tables keyed by value class.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ConfigTable {
    Defaults,
    FinalReturn,
    FinalDefine,
}

impl ConfigTable {
    fn name(self) -> &'static str {
        match self {
            Self::Defaults => "defaults",
            Self::FinalReturn => "final_return",
            Self::FinalDefine => "final_define",
        }
    }

    /// Entry for the value class `experiment` resolved to on `platform`.
    pub(crate) fn lookup<'a>(
        self,
        config: &'a CompilerConfig,
        experiment: &ExperimentDefinition,
        platform: &str,
    ) -> Result<&'a str, RenderError> {
        let value_class = experiment.default_value(platform);
        let found = match self {
            Self::Defaults => config.default_symbol(value_class),
            Self::FinalReturn => config.final_return_for(value_class),
            Self::FinalDefine => config.final_define_for(value_class),
        };
        found.ok_or_else(|| RenderError::UnknownValueClass {
            experiment: experiment.name.clone(),
            platform: platform.to_string(),
            value_class: value_class.to_string(),
            table: self.name(),
        })
    }
}

/// Emit one `#if`/`#elif` branch per guarded platform and `#else` for the
/// fallback platform. With no guarded platforms only the fallback body is
/// written.
pub(crate) fn platform_branches<F>(
    output: &mut String,
    config: &CompilerConfig,
    mut body: F,
) -> Result<(), RenderError>
where
    F: FnMut(&mut String, &str) -> Result<(), RenderError>,
{
    let mut guarded = config.guarded_platforms().peekable();
    if guarded.peek().is_none() {
        return body(output, FALLBACK_PLATFORM);
    }
    for (index, (platform, symbol)) in guarded.enumerate() {
        let directive = if index == 0 { "#if" } else { "#elif" };
        output.push_str(&format!("{directive} defined({symbol})\n"));
        body(output, platform)?;
    }
    output.push_str("#else\n");
    body(output, FALLBACK_PLATFORM)?;
    output.push_str("#endif\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_conversion() {
        assert_eq!(snake_to_pascal("tcp_frame_size_tuning"), "TcpFrameSizeTuning");
        assert_eq!(snake_to_pascal("a__b"), "AB");
        assert_eq!(snake_to_pascal("already"), "Already");
        assert_eq!(snake_to_pascal(""), "");
    }

    #[test]
    fn literals_are_escaped() {
        assert_eq!(c_string_literal("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
        assert_eq!(c_string_literal(""), "\"\"");
    }

    #[test]
    fn github_segment_is_removed_once() {
        assert_eq!(
            strip_github("grpc.github/src/core/lib/experiments/experiments.h"),
            "grpc/src/core/lib/experiments/experiments.h"
        );
        assert_eq!(strip_github("src/x.h"), "src/x.h");
    }
}

//! Rollout specification documents.

use expc_model::RolloutSpecification;
use tracing::debug;

use crate::document::{RecordReader, load_records};
use crate::error::Result;

/// Parse every rollout specification in a YAML stream.
///
/// Shape checks beyond field types (a rollout with neither `default_value` nor
/// `platform_value`) are left to the compiler.
pub fn parse_rollout_specifications(content: &str) -> Result<Vec<RolloutSpecification>> {
    let records = load_records(content)?;
    let mut rollouts = Vec::with_capacity(records.len());
    for (index, map) in records.iter().enumerate() {
        let reader = RecordReader::new(index, map);
        let default_value = if reader.has("default_value") {
            Some(reader.string("default_value")?)
        } else {
            None
        };
        let rollout = RolloutSpecification {
            name: reader.string("name")?,
            default_value,
            platform_value: reader.string_map("platform_value")?,
            requirements: reader.string_list("requirements")?,
        };
        debug!(
            experiment = %rollout.name,
            default_value = rollout.default_value.as_deref().unwrap_or(""),
            platform_count = rollout.platform_value.len(),
            requirement_count = rollout.requirements.len(),
            "parsed rollout specification"
        );
        rollouts.push(rollout);
    }
    Ok(rollouts)
}

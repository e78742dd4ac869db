//! Experiment definition documents.

use expc_model::ExperimentDefinition;
use tracing::debug;

use crate::document::{RecordReader, load_records};
use crate::error::Result;

/// Parse every experiment definition in a YAML stream.
///
/// Missing text fields come back empty so the validator can report all of a
/// record's problems at once; fields of the wrong shape fail the whole batch.
pub fn parse_experiment_definitions(content: &str) -> Result<Vec<ExperimentDefinition>> {
    let records = load_records(content)?;
    let mut definitions = Vec::with_capacity(records.len());
    for (index, map) in records.iter().enumerate() {
        let reader = RecordReader::new(index, map);
        let definition = ExperimentDefinition::new(
            reader.string("name")?,
            reader.string("description")?,
            reader.string("owner")?,
            reader.string("expiry")?,
        )
        .with_uses_polling(reader.boolean("uses_polling")?)
        .with_allow_in_fuzzing_config(reader.boolean("allow_in_fuzzing_config")?)
        .with_test_tags(reader.string_list("test_tags")?);
        debug!(
            experiment = %definition.name,
            owner = %definition.owner,
            expiry = %definition.expiry,
            uses_polling = definition.uses_polling,
            allow_in_fuzzing_config = definition.allow_in_fuzzing_config,
            "parsed experiment definition"
        );
        definitions.push(definition);
    }
    Ok(definitions)
}

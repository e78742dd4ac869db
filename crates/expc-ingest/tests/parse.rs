//! Integration tests for YAML document parsing.

use expc_ingest::{IngestError, parse_experiment_definitions, parse_rollout_specifications};

const DEFINITIONS: &str = r#"
name: tcp_frame_size_tuning
description: Allow sending and receiving larger frames.
owner: vigneshbabu@google.com
expiry: 2025-06-01
uses_polling: false
allow_in_fuzzing_config: true
test_tags: ["endpoint_test", "flow_control_test"]
---
name: event_engine_client
description: Use EventEngine clients instead of iomgr's.
owner: hork@google.com
expiry: 2025-09-01
uses_polling: true
"#;

#[test]
fn parses_multi_document_definitions() {
    let definitions = parse_experiment_definitions(DEFINITIONS).unwrap();
    assert_eq!(definitions.len(), 2);

    let first = &definitions[0];
    assert_eq!(first.name, "tcp_frame_size_tuning");
    assert_eq!(first.owner, "vigneshbabu@google.com");
    assert_eq!(first.expiry, "2025-06-01");
    assert!(!first.uses_polling);
    assert!(first.allow_in_fuzzing_config);
    assert_eq!(first.test_tags, vec!["endpoint_test", "flow_control_test"]);

    let second = &definitions[1];
    assert!(second.uses_polling);
    assert!(!second.allow_in_fuzzing_config);
    assert!(second.test_tags.is_empty());
}

#[test]
fn sequence_documents_contribute_each_map_item() {
    let content = r#"
- name: a
  description: first
  owner: me
  expiry: 2025-02-01
- just a string
- name: b
  description: second
  owner: me
  expiry: 2025-03-01
"#;
    let definitions = parse_experiment_definitions(content).unwrap();
    let names: Vec<_> = definitions.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn missing_text_fields_read_as_empty() {
    let definitions = parse_experiment_definitions("name: lonely\n").unwrap();
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].owner, "");
    assert_eq!(definitions[0].expiry, "");
}

#[test]
fn wrongly_shaped_field_fails_the_batch() {
    let content = "name: a\ntest_tags: not-a-list\n";
    let error = parse_experiment_definitions(content).unwrap_err();
    match error {
        IngestError::InvalidField {
            document, field, ..
        } => {
            assert_eq!(document, 0);
            assert_eq!(field, "test_tags");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_yaml_is_reported() {
    let error = parse_experiment_definitions("name: [unterminated\n").unwrap_err();
    assert!(matches!(error, IngestError::Yaml { .. }));
}

#[test]
fn parses_rollout_shapes() {
    let content = r#"
name: tcp_frame_size_tuning
default_value: "true"
---
name: event_engine_client
platform_value:
  ios: broken
  posix: false
  windows: true
requirements: [event_engine_listener]
"#;
    let rollouts = parse_rollout_specifications(content).unwrap();
    assert_eq!(rollouts.len(), 2);

    assert_eq!(rollouts[0].default_value.as_deref(), Some("true"));
    assert!(rollouts[0].platform_value.is_empty());

    let second = &rollouts[1];
    assert_eq!(second.default_value, None);
    assert_eq!(second.platform_value.get("posix").map(String::as_str), Some("false"));
    assert_eq!(second.platform_value.get("windows").map(String::as_str), Some("true"));
    assert_eq!(second.requirements, vec!["event_engine_listener"]);
}

#[test]
fn requirements_are_read_alongside_default_value() {
    let content = "name: a\ndefault_value: always_on\nrequirements: [experiment_b]\n";
    let rollouts = parse_rollout_specifications(content).unwrap();
    assert_eq!(rollouts[0].requirements, vec!["experiment_b"]);
}

#[test]
fn unquoted_boolean_default_reads_as_text() {
    let rollouts = parse_rollout_specifications("name: a\ndefault_value: false\n").unwrap();
    assert_eq!(rollouts[0].default_value.as_deref(), Some("false"));
}

use std::fs;
use std::path::Path;

use expc_config::{ConfigError, load_config, load_default_config, parse_config};

const MINIMAL: &str = r##"[manifest]
schema = "expc.compiler-config"
schema_version = 1

[platforms]
linux = "GPR_LINUX"
posix = ""

[defaults]
"debug" = "kDefaultForDebugOnly"
"false" = "false"

[final_return]
"debug" = "return true;"
"false" = "return false;"

[final_define]
"debug" = "#define %s"
"false" = ""
"##;

#[test]
fn default_config_matches_grpc_platforms() {
    let config = load_default_config().expect("default config");
    let platforms: Vec<_> = config.platform_names().collect();
    assert_eq!(platforms, vec!["ios", "posix", "windows"]);
    assert_eq!(config.platform_symbol("windows"), Some("GPR_WINDOWS"));
    assert_eq!(config.default_symbol("debug"), Some("kDefaultForDebugOnly"));
    assert_eq!(config.final_define_for("false"), Some(""));
}

#[test]
fn loads_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("experiments.toml");
    fs::write(&path, MINIMAL).unwrap();

    let config = load_config(&path).expect("load config");
    assert_eq!(config.platforms.len(), 2);
    assert_eq!(config.final_return_for("debug"), Some("return true;"));
}

#[test]
fn missing_file_reports_path() {
    let error = load_config(Path::new("/nonexistent/expc.toml")).unwrap_err();
    match error {
        ConfigError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/expc.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_unknown_schema() {
    let contents = MINIMAL.replace("expc.compiler-config", "something-else");
    let error = parse_config(&contents, Path::new("test.toml")).unwrap_err();
    assert!(matches!(error, ConfigError::InvalidManifest { .. }));
}

#[test]
fn requires_posix_platform() {
    let contents = MINIMAL.replace("posix = \"\"\n", "");
    let error = parse_config(&contents, Path::new("test.toml")).unwrap_err();
    assert!(matches!(error, ConfigError::MissingPlatform { platform } if platform == "posix"));
}

#[test]
fn requires_debug_value_class() {
    let contents = MINIMAL
        .replace("\"debug\" = \"kDefaultForDebugOnly\"\n", "")
        .replace("\"debug\" = \"return true;\"\n", "")
        .replace("\"debug\" = \"#define %s\"\n", "");
    let error = parse_config(&contents, Path::new("test.toml")).unwrap_err();
    assert!(matches!(error, ConfigError::MissingValueClass { value_class } if value_class == "debug"));
}

#[test]
fn every_value_class_needs_a_define() {
    let contents = MINIMAL.replace("\"debug\" = \"#define %s\"\n", "");
    let error = parse_config(&contents, Path::new("test.toml")).unwrap_err();
    match error {
        ConfigError::IncompleteValueClass { value_class, table } => {
            assert_eq!(value_class, "debug");
            assert_eq!(table, "final_define");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn stray_value_class_is_rejected() {
    let contents = MINIMAL.replace(
        "[final_define]\n",
        "[final_define]\n\"sometimes\" = \"\"\n",
    );
    let error = parse_config(&contents, Path::new("test.toml")).unwrap_err();
    assert!(matches!(error, ConfigError::UnknownValueClass { value_class, .. } if value_class == "sometimes"));
}

#[test]
fn malformed_toml_is_reported() {
    let error = parse_config("[manifest\n", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(error, ConfigError::Toml { .. }));
}

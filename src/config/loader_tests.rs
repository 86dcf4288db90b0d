//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_names_listbind_config_toml() {
    let Some(path) = default_config_path() else {
        return; // No config dir on this platform
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("listbind") && path_str.ends_with("config.toml"),
        "Path should contain 'listbind' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_listbind_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("listbind.log"),
        "Default log path should end with 'listbind.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/listbind.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("listbind_test_config.toml");
    let toml_content = r#"
default_reuse_identifier = "entry"
fail_fast_on_stale = false
show_footers = false
catalog_path = "/data/items.jsonl"
"#;
    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should parse valid TOML")
        .expect("Should return Some for existing file");

    assert_eq!(config.default_reuse_identifier, Some("entry".to_string()));
    assert_eq!(config.fail_fast_on_stale, Some(false));
    assert_eq!(config.show_footers, Some(false));
    assert_eq!(config.catalog_path, Some(PathBuf::from("/data/items.jsonl")));
    assert_eq!(config.log_file_path, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("listbind_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);
    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = env::temp_dir().join("listbind_test_unknown_key.toml");
    fs::write(&config_path, "theme = \"monokai\"\n").expect("Failed to write config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn merge_config_none_returns_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_partial_file_keeps_other_defaults() {
    let file = ConfigFile {
        show_footers: Some(false),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));

    assert!(!resolved.show_footers);
    assert_eq!(resolved.default_reuse_identifier, "cell");
    assert!(resolved.fail_fast_on_stale);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn merge_config_file_log_path_overrides_default() {
    let custom_path = PathBuf::from("/custom/path/to/app.log");
    let file = ConfigFile {
        log_file_path: Some(custom_path.clone()),
        ..ConfigFile::default()
    };
    assert_eq!(merge_config(Some(file)).log_file_path, custom_path);
}

#[test]
#[serial(env)]
fn env_override_replaces_reuse_identifier() {
    env::set_var(REUSE_IDENTIFIER_ENV_VAR, "from-env");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(REUSE_IDENTIFIER_ENV_VAR);

    assert_eq!(config.default_reuse_identifier, "from-env");
}

#[test]
#[serial(env)]
fn blank_env_override_is_ignored() {
    env::set_var(REUSE_IDENTIFIER_ENV_VAR, "   ");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var(REUSE_IDENTIFIER_ENV_VAR);

    assert_eq!(config.default_reuse_identifier, "cell");
}

#[test]
#[serial(env)]
fn explicit_path_wins_over_env_var() {
    let explicit = env::temp_dir().join("listbind_test_explicit.toml");
    let from_env = env::temp_dir().join("listbind_test_env.toml");
    fs::write(&explicit, "show_footers = false\n").expect("write explicit");
    fs::write(&from_env, "show_footers = true\n").expect("write env");

    env::set_var(CONFIG_ENV_VAR, &from_env);
    let loaded = load_config_with_precedence(Some(explicit.clone()));
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(
        loaded.map(|c| c.and_then(|c| c.show_footers)),
        Ok(Some(false))
    );

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(env)]
fn env_var_path_is_used_without_explicit_path() {
    let from_env = env::temp_dir().join("listbind_test_env_only.toml");
    fs::write(&from_env, "default_reuse_identifier = \"env-file\"\n").expect("write env");

    env::set_var(CONFIG_ENV_VAR, &from_env);
    let loaded = load_config_with_precedence(None);
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(
        loaded.map(|c| c.and_then(|c| c.default_reuse_identifier)),
        Ok(Some("env-file".to_string()))
    );

    fs::remove_file(from_env).ok();
}

#[test]
fn cli_overrides_apply_only_when_set() {
    let base = ResolvedConfig::default();
    let unchanged = apply_cli_overrides(base.clone(), None, None, None);
    assert_eq!(unchanged, base);

    let changed = apply_cli_overrides(
        base,
        Some(PathBuf::from("items.jsonl")),
        Some(false),
        Some(true),
    );
    assert_eq!(changed.catalog_path, Some(PathBuf::from("items.jsonl")));
    assert!(!changed.fail_fast_on_stale);
    assert!(!changed.show_footers);
}

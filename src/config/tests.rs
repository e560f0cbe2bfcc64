//! Tests for the config module

use super::loader::{apply_overrides, PROJECT_CONFIG};
use super::types::*;
use crate::domain::services::SelectionMode;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(!config.selection.strict);
    assert_eq!(config.selection.mode(), SelectionMode::Lenient);
    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert_eq!(config.output.icons, IconMode::Auto);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[selection]
strict = true

[output]
verbosity = "debug"
icons = "ascii"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.selection.mode(), SelectionMode::Strict);
    assert_eq!(config.output.verbosity, Verbosity::Debug);
    assert_eq!(config.output.icons, IconMode::Ascii);
}

#[test]
fn test_config_partial_sections_use_defaults() {
    let config: Config = toml::from_str("[output]\nicons = \"unicode\"\n").unwrap();

    assert!(!config.selection.strict);
    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert_eq!(config.output.icons, IconMode::Unicode);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[selection]\nstrickt = true\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert!(!config.selection.strict);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "strickt");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("strict"));
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nverbosity = \"loud\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn test_load_or_default_reads_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(PROJECT_CONFIG),
        "[output]\nicons = \"ascii\"\n",
    )
    .unwrap();

    let config = Config::load_or_default(Some(dir.path()));
    assert_eq!(config.output.icons, IconMode::Ascii);
}

#[test]
fn test_env_overrides() {
    let config = apply_overrides(
        Config::default(),
        env_of(&[
            ("CHECKTREE_STRICT", "1"),
            ("CHECKTREE_VERBOSITY", "Verbose"),
            ("CHECKTREE_ICONS", "unicode"),
        ]),
    );

    assert!(config.selection.strict);
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert_eq!(config.output.icons, IconMode::Unicode);
}

#[test]
fn test_env_strict_false_disables() {
    let mut config = Config::default();
    config.selection.strict = true;

    let config = apply_overrides(config, env_of(&[("CHECKTREE_STRICT", "false")]));
    assert!(!config.selection.strict);
}

#[test]
fn test_verbosity_bumped_never_lowers() {
    assert_eq!(Verbosity::Normal.bumped(0), Verbosity::Normal);
    assert_eq!(Verbosity::Normal.bumped(1), Verbosity::Verbose);
    assert_eq!(Verbosity::Quiet.bumped(3), Verbosity::Debug);
    assert_eq!(Verbosity::Debug.bumped(1), Verbosity::Debug);
}

#[test]
fn test_icon_mode_resolution() {
    assert!(IconMode::Auto.use_unicode(true));
    assert!(!IconMode::Auto.use_unicode(false));
    assert!(IconMode::Unicode.use_unicode(false));
    assert!(!IconMode::Ascii.use_unicode(true));
}

use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::config::Config;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join(".header-guard.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn load_config_no_config_returns_default() {
    let loaded = load_config(None, true).unwrap();
    assert_eq!(loaded.config, Config::default());
    assert!(loaded.source.is_none());
}

#[test]
fn load_config_no_config_ignores_explicit_path() {
    let loaded = load_config(Some(Path::new("missing.toml")), true).unwrap();
    assert!(loaded.source.is_none());
}

#[test]
fn load_config_with_nonexistent_path_returns_error() {
    let result = load_config(Some(Path::new("nonexistent.toml")), false);
    assert!(matches!(result, Err(HeaderGuardError::FileRead { .. })));
}

#[test]
fn load_config_reads_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[header]\ncode_owner = \"Acme\"\n");

    let loaded = load_config(Some(&path), false).unwrap();

    assert_eq!(loaded.config.header.code_owner, "Acme");
    assert_eq!(loaded.source, Some(path));
}

#[test]
fn resolve_template_defaults_to_builtin() {
    let template = resolve_template(&LoadResult::defaults(), None).unwrap();
    assert_eq!(template, HeaderTemplate::builtin());
}

#[test]
fn resolve_template_prefers_command_line_file() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("header.txt");
    std::fs::write(&template_path, "/**\n * YYYY OWNER\n */\n").unwrap();

    let mut loaded = LoadResult::defaults();
    loaded.config.header.template = Some("// YYYY OWNER\n".to_string());

    let template = resolve_template(&loaded, Some(&template_path)).unwrap();
    assert_eq!(template.as_str(), "/**\n * YYYY OWNER\n */\n");
}

#[test]
fn resolve_template_missing_command_line_file() {
    let result = resolve_template(&LoadResult::defaults(), Some(Path::new("missing-header.txt")));
    assert!(matches!(result, Err(HeaderGuardError::FileRead { .. })));
}

#[test]
fn resolve_template_uses_config_file_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("header.txt"), "// YYYY OWNER\n").unwrap();
    let path = write_config(&temp_dir, "[header]\ntemplate_file = \"header.txt\"\n");

    let loaded = load_config(Some(&path), false).unwrap();
    let template = resolve_template(&loaded, None).unwrap();

    assert_eq!(template.as_str(), "// YYYY OWNER\n");
}

#[test]
fn write_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("reports").join("header.json");

    write_output(Some(&output_path), "{}", false).unwrap();

    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "{}");
}

#[test]
fn write_output_quiet_to_stdout_is_ok() {
    assert!(write_output(None, "report", true).is_ok());
}

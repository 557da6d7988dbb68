use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::config::Config;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_nonexistent_file_returns_error() {
    let result = run_config_validate_impl(Path::new("nonexistent_config.toml"));
    assert!(result.unwrap_err().to_string().contains("not found"));
}

#[test]
fn validate_invalid_toml_returns_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(&temp_dir, "bad.toml", "this is not valid { toml }");

    let result = run_config_validate_impl(&path);
    assert!(matches!(result, Err(HeaderGuardError::TomlParse(_))));
}

#[test]
fn validate_minimal_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(&temp_dir, "minimal.toml", "# minimal valid config\n");
    assert!(run_config_validate_impl(&path).is_ok());
}

#[test]
fn validate_full_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        &temp_dir,
        "full.toml",
        r#"
[header]
code_owner = "Acme"
force_current_year = true
template = "/**\n * (c) YYYY OWNER\n */\n"

[scanner]
extensions = ["php", "inc"]
exclude = ["**/generated/**"]
gitignore = false
"#,
    );
    assert!(run_config_validate_impl(&path).is_ok());
}

#[test]
fn validate_reports_missing_template_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        &temp_dir,
        "with-file.toml",
        "[header]\ntemplate_file = \"missing.txt\"\n",
    );

    let result = run_config_validate_impl(&path);
    assert!(matches!(result, Err(HeaderGuardError::FileRead { .. })));
}

#[test]
fn validate_reports_bad_exclude_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(&temp_dir, "bad-glob.toml", "[scanner]\nexclude = [\"[oops\"]\n");

    let result = run_config_validate_impl(&path);
    assert!(matches!(result, Err(HeaderGuardError::InvalidPattern { .. })));
}

#[test]
fn show_json_round_trips_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(&temp_dir, "c.toml", "[header]\ncode_owner = \"Acme\"\n");

    let output = run_config_show_impl(Some(&path), ConfigFormat::Json, false).unwrap();
    let config: Config = serde_json::from_str(&output).unwrap();

    assert_eq!(config.header.code_owner, "Acme");
}

#[test]
fn show_text_names_source_and_sections() {
    let output = run_config_show_impl(None, ConfigFormat::Text, true).unwrap();

    assert!(output.starts_with("# Effective configuration (built-in defaults)"));
    assert!(output.contains("[header]"));
    assert!(output.contains("code_owner = \"Blue Acorn iCi\""));
    assert!(output.contains("[scanner]"));
}

#[test]
fn show_text_output_parses_back() {
    let output = run_config_show_impl(None, ConfigFormat::Text, true).unwrap();
    let config: Config = toml::from_str(&output).unwrap();
    assert_eq!(config, Config::default());
}

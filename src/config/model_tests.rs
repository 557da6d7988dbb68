use super::*;

#[test]
fn default_config_values() {
    let config = Config::default();
    assert_eq!(config.header.code_owner, "Blue Acorn iCi");
    assert!(!config.header.force_current_year);
    assert!(config.header.template.is_none());
    assert!(config.header.template_file.is_none());
    assert_eq!(config.scanner.extensions, vec!["php", "phtml"]);
    assert!(config.scanner.gitignore);
    assert!(config.scanner.exclude.contains(&"**/vendor/**".to_string()));
}

#[test]
fn empty_toml_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_header_section_keeps_other_defaults() {
    let config: Config = toml::from_str(
        r#"
[header]
force_current_year = true
"#,
    )
    .unwrap();

    assert!(config.header.force_current_year);
    assert_eq!(config.header.code_owner, "Blue Acorn iCi");
    assert_eq!(config.scanner, ScannerConfig::default());
}

#[test]
fn full_config_parses() {
    let config: Config = toml::from_str(
        r#"
[header]
code_owner = "Acme"
template_file = "tools/header.txt"

[scanner]
extensions = ["js", "ts"]
exclude = ["dist/**"]
gitignore = false
"#,
    )
    .unwrap();

    assert_eq!(config.header.code_owner, "Acme");
    assert_eq!(
        config.header.template_file,
        Some(PathBuf::from("tools/header.txt"))
    );
    assert_eq!(config.scanner.extensions, vec!["js", "ts"]);
    assert_eq!(config.scanner.exclude, vec!["dist/**"]);
    assert!(!config.scanner.gitignore);
}

#[test]
fn settings_copy_header_values() {
    let header = HeaderConfig {
        code_owner: "Acme".to_string(),
        force_current_year: true,
        ..HeaderConfig::default()
    };
    let settings = header.settings();
    assert_eq!(settings.code_owner, "Acme");
    assert!(settings.force_current_year);
}

#[test]
fn serialization_skips_unset_template() {
    let rendered = toml::to_string(&Config::default()).unwrap();
    assert!(rendered.contains("code_owner = \"Blue Acorn iCi\""));
    assert!(!rendered.contains("template"));
}

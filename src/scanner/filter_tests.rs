use std::path::Path;

use super::*;

#[test]
fn filter_by_extension() {
    let filter = GlobFilter::new(vec!["php".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("app/code/Model.php")));
    assert!(!filter.should_include(Path::new("app/code/Model.xml")));
}

#[test]
fn filter_extension_is_case_insensitive() {
    let filter = GlobFilter::new(vec!["php".to_string()], &[]).unwrap();
    assert!(filter.should_include(Path::new("Legacy.PHP")));
}

#[test]
fn filter_multiple_extensions() {
    let filter = GlobFilter::new(vec!["php".to_string(), "phtml".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("index.php")));
    assert!(filter.should_include(Path::new("view/list.phtml")));
    assert!(!filter.should_include(Path::new("composer.json")));
}

#[test]
fn filter_empty_extensions_accepts_all() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("main.rs")));
    assert!(filter.should_include(Path::new("readme.txt")));
}

#[test]
fn filter_file_without_extension_rejected() {
    let filter = GlobFilter::new(vec!["php".to_string()], &[]).unwrap();
    assert!(!filter.should_include(Path::new("bin/magento")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = GlobFilter::new(
        vec!["php".to_string()],
        &["**/vendor/**".to_string(), "**/generated/**".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/Model.php")));
    assert!(!filter.should_include(Path::new("vendor/acme/lib/Client.php")));
    assert!(!filter.should_include(Path::new("src/generated/Proxy.php")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = GlobFilter::new(vec![], &["[invalid".to_string()]);
    assert!(matches!(
        result,
        Err(HeaderGuardError::InvalidPattern { .. })
    ));
}

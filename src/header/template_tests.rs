use super::*;

const SIMPLE: &str = "/**\n * @copyright YYYY OWNER. All Rights Reserved.\n */\n";

#[test]
fn new_accepts_template_with_both_placeholders() {
    let template = HeaderTemplate::new(SIMPLE).unwrap();
    assert_eq!(template.as_str(), SIMPLE);
}

#[test]
fn new_rejects_empty_template() {
    let err = HeaderTemplate::new("  \n").unwrap_err();
    assert!(matches!(err, HeaderGuardError::InvalidTemplate(_)));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn new_rejects_missing_owner() {
    let err = HeaderTemplate::new("/** @copyright YYYY Acme */").unwrap_err();
    assert!(err.to_string().contains("OWNER"));
}

#[test]
fn new_rejects_missing_year() {
    let err = HeaderTemplate::new("/** @copyright 2020 OWNER */").unwrap_err();
    assert!(err.to_string().contains("YYYY"));
}

#[test]
fn builtin_template_is_valid() {
    let builtin = HeaderTemplate::builtin();
    assert_eq!(HeaderTemplate::new(BUILTIN_TEMPLATE).unwrap(), builtin);
    assert!(builtin.as_str().starts_with("<?php\n/**\n"));
    assert_eq!(HeaderTemplate::default(), builtin);
}

#[test]
fn build_replaces_owner_and_keeps_year_placeholder() {
    let template = HeaderTemplate::new(SIMPLE).unwrap();
    let built = template.build("Acme Corp", false);

    assert!(!built.contains(OWNER_PLACEHOLDER));
    assert!(built.contains("YYYY Acme Corp."));
}

#[test]
fn build_replaces_every_occurrence() {
    let template = HeaderTemplate::new("OWNER YYYY OWNER YYYY").unwrap();
    assert_eq!(template.build_with_year("A", Some(2001)), "A 2001 A 2001");
    assert_eq!(template.build("A", false), "A YYYY A YYYY");
}

#[test]
fn build_with_empty_owner() {
    let template = HeaderTemplate::new(SIMPLE).unwrap();
    let built = template.build("", false);
    assert!(built.contains("@copyright YYYY . All Rights Reserved."));
}

#[test]
fn build_forcing_current_year_inserts_year() {
    let template = HeaderTemplate::new(SIMPLE).unwrap();
    let built = template.build("Acme", true);

    assert!(!built.contains(YEAR_PLACEHOLDER));
    assert!(built.contains(&format!("{} Acme.", current_year())));
}

#[test]
fn build_with_year_pads_to_four_digits() {
    let template = HeaderTemplate::new(SIMPLE).unwrap();
    assert!(template.build_with_year("X", Some(999)).contains("0999 X."));
}

#[test]
fn build_substitutes_owner_before_year() {
    let template = HeaderTemplate::new(SIMPLE).unwrap();
    let built = template.build_with_year("YYYY Inc", Some(2030));
    assert!(built.contains("2030 2030 Inc."));
}

#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2024);
}

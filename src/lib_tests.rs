use super::*;

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_HEADER_MISMATCH, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn error_reexport_is_usable() {
    let result: Result<()> = Err(HeaderGuardError::Config("bad".to_string()));
    assert!(result.is_err());
}

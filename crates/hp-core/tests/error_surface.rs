use hp_core::errors::{ErrorInfo, HpError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("id", "1")
        .with_context("reason", "example")
}

#[test]
fn invalid_input_error_surface() {
    let err = HpError::InvalidInput(sample_info("E001", "empty HP string"));
    assert_eq!(err.info().code, "E001");
    assert!(err.info().context.contains_key("id"));
}

#[test]
fn invalid_input_helper_constructor() {
    let err = HpError::invalid("E002", "chi must be >= 2");
    assert_eq!(err.info().code, "E002");
    assert!(err.info().context.is_empty());
}

#[test]
fn display_includes_code_context_and_hint() {
    let info = sample_info("E003", "nu outside [0, 1]").with_hint("pass nu in [0.0, 1.0]");
    let rendered = info.to_string();
    assert!(rendered.contains("nu outside [0, 1]"));
    assert!(rendered.contains("E003"));
    assert!(rendered.contains("id=1"));
    assert!(rendered.contains("pass nu in [0.0, 1.0]"));
}

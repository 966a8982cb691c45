use hp_core::errors::{ErrorInfo, HpError};

#[test]
fn invalid_input_roundtrips_through_json() {
    let err = HpError::InvalidInput(
        ErrorInfo::new("E_NU_RANGE", "nu must lie in [0, 1]")
            .with_context("nu", "1.5")
            .with_hint("pass nu in [0.0, 1.0]"),
    );

    let text = serde_json::to_string(&err).expect("serialize error");
    let parsed: HpError = serde_json::from_str(&text).expect("deserialize error");
    assert_eq!(parsed, err);
}

use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TimelineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(TimelineError::parse("x").to_string().contains("parse error:"));
    assert!(
        TimelineError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        TimelineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TimelineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err: TimelineError = err.into();
    assert!(matches!(err, TimelineError::Serde(_)));
}

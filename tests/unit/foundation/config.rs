use super::*;

#[test]
fn defaults_validate() {
    let cfg = TimelineConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.total_width(), 1640.0);
    assert_eq!(cfg.axis_range(), (120.0, 1520.0));
    assert_eq!(cfg.translate_extent(), (-1280.0, 2920.0));
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let cfg = TimelineConfig::from_json_str(
        r##"{ "inner_width": 900, "margin": { "left": 40 }, "palette": { "dot": "#112233" } }"##,
    )
    .unwrap();
    assert_eq!(cfg.inner_width, 900.0);
    assert_eq!(cfg.margin.left, 40.0);
    assert_eq!(cfg.margin.top, 120.0);
    assert_eq!(cfg.palette.dot, Rgba8::rgb(0x11, 0x22, 0x33));
    assert_eq!(cfg.palette.axis, Palette::default().axis);
    assert_eq!(cfg.lane_spacing, 120.0);
}

#[test]
fn invalid_geometry_is_rejected() {
    let err = TimelineConfig::from_json_str(r#"{ "wrap_width": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("wrap_width"));

    let err = TimelineConfig::from_json_str(r#"{ "min_zoom": 4, "max_zoom": 2 }"#).unwrap_err();
    assert!(err.to_string().contains("min_zoom"));

    let err = TimelineConfig::from_json_str(r#"{ "margin": { "top": -1 } }"#).unwrap_err();
    assert!(err.to_string().contains("margin.top"));
}

#[test]
fn malformed_json_maps_to_serde_error() {
    let err = TimelineConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, TimelineError::Serde(_)));
}

#[test]
fn easing_curves_are_named_in_snake_case() {
    let cfg =
        TimelineConfig::from_json_str(r#"{ "view_ease": "out_cubic", "hover_ease": "in_out_quad" }"#)
            .unwrap();
    assert_eq!(cfg.view_ease, Ease::OutCubic);
    assert_eq!(cfg.hover_ease, Ease::InOutQuad);

    let defaults = TimelineConfig::default();
    assert_eq!(defaults.view_ease, Ease::InOutCubic);
    assert_eq!(defaults.hover_ease, Ease::Linear);

    assert!(TimelineConfig::from_json_str(r#"{ "view_ease": "bounce" }"#).is_err());
}

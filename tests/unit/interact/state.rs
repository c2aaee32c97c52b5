use super::*;

const AXIS_Y: f64 = 350.0;

fn env(now_ms: f64) -> ReduceEnv {
    ReduceEnv::new(&TimelineConfig::default(), AXIS_Y, now_ms)
}

fn run(state: InteractionState, actions: &[(f64, Action)]) -> InteractionState {
    actions
        .iter()
        .fold(state, |s, (now, action)| s.reduce(action, &env(*now)))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn starts_at_identity() {
    let s = InteractionState::new();
    assert_eq!(s.view_at(0.0), ViewTransform::IDENTITY);
    assert!(!s.is_animating(0.0));
    assert_eq!(s.pointer(), None);
}

#[test]
fn zoom_in_animates_toward_target_anchored_at_center() {
    let s = run(InteractionState::new(), &[(0.0, Action::ZoomIn)]);
    assert!(s.is_animating(100.0));
    let mid = s.view_at(150.0);
    assert!(mid.scale > 1.0 && mid.scale < 1.4);

    let done = s.view_at(300.0);
    assert!(close(done.scale, 1.4));
    let center = env(0.0).chart_center.x;
    assert!(close(done.invert(center), center));
}

#[test]
fn zoom_in_then_out_round_trips_scale() {
    let s = run(
        InteractionState::new(),
        &[
            (0.0, Action::ZoomIn),
            (300.0, Action::Tick),
            (400.0, Action::ZoomOut),
            (700.0, Action::Tick),
        ],
    );
    let v = s.view_at(700.0);
    assert!(close(v.scale, 1.0));
    assert!(v.translate_x.abs() < 1e-6);
    assert!(!s.is_animating(700.0));
}

#[test]
fn zoom_anchors_on_last_pointer() {
    let s = run(
        InteractionState::new(),
        &[
            (0.0, Action::PointerMove { x: 300.0, y: 200.0 }),
            (0.0, Action::ZoomIn),
        ],
    );
    let v = s.view_at(1_000.0);
    assert!(close(v.invert(300.0), 300.0));
    assert_eq!(s.pointer(), Some(Point::new(300.0, 200.0)));

    // Leaving the surface falls back to the chart centre.
    let s = run(
        s,
        &[
            (1_000.0, Action::Tick),
            (1_000.0, Action::PointerLeave),
            (1_000.0, Action::ZoomOut),
        ],
    );
    assert_eq!(s.pointer(), None);
    let before = s.view_at(1_000.0);
    let after = s.view_at(2_000.0);
    let center = env(0.0).chart_center.x;
    assert!(close(after.invert(center), before.invert(center)));
}

#[test]
fn new_gesture_supersedes_running_transition() {
    let s = run(InteractionState::new(), &[(0.0, Action::ZoomIn)]);
    let mid = s.view_at(150.0);
    let s = run(s, &[(150.0, Action::ZoomIn)]);
    assert_eq!(s.view_at(150.0), mid);
    let end = s.view_at(450.0);
    assert!(close(end.scale, mid.scale * 1.4));
}

#[test]
fn reset_eases_back_to_identity() {
    let s = run(
        InteractionState::new(),
        &[
            (0.0, Action::Wheel { x: 500.0, y: 300.0, delta_y: -500.0, mode: WheelMode::Pixel }),
            (10.0, Action::Reset),
        ],
    );
    assert!(s.view_at(10.0).scale > 1.0);
    assert!(s.is_animating(200.0));
    assert_eq!(s.view_at(410.0), ViewTransform::IDENTITY);
    let s = run(s, &[(410.0, Action::Tick)]);
    assert_eq!(s.view_at(410.0), ViewTransform::IDENTITY);
    assert!(!s.is_animating(410.0));
}

#[test]
fn wheel_zoom_is_immediate_and_clamped() {
    let s = run(
        InteractionState::new(),
        &[(0.0, Action::Wheel { x: 820.0, y: 300.0, delta_y: -500.0, mode: WheelMode::Pixel })],
    );
    assert!(close(s.view_at(0.0).scale, 2.0));
    assert!(!s.is_animating(0.0));

    let s = run(
        s,
        &[(0.0, Action::Wheel { x: 820.0, y: 300.0, delta_y: -100.0, mode: WheelMode::Page })],
    );
    assert_eq!(s.view_at(0.0).scale, 12.0);

    let s = run(
        s,
        &[(0.0, Action::Wheel { x: 820.0, y: 300.0, delta_y: 100.0, mode: WheelMode::Line })],
    );
    assert_eq!(s.view_at(0.0).scale, 0.5);
}

#[test]
fn drag_pans_by_pointer_delta() {
    let s = run(
        InteractionState::new(),
        &[
            (0.0, Action::DragStart { x: 400.0, y: 300.0 }),
            (16.0, Action::DragMove { x: 450.0, y: 310.0 }),
            (32.0, Action::DragMove { x: 480.0, y: 310.0 }),
        ],
    );
    assert!(s.is_dragging());
    assert_eq!(s.view_at(32.0).translate_x, 80.0);

    let s = run(
        s,
        &[(48.0, Action::DragEnd), (64.0, Action::DragMove { x: 900.0, y: 0.0 })],
    );
    assert!(!s.is_dragging());
    assert_eq!(s.view_at(64.0).translate_x, 80.0);
}

#[test]
fn pinch_zooms_around_its_center() {
    let s = run(
        InteractionState::new(),
        &[(0.0, Action::Pinch { x: 600.0, y: 300.0, factor: 3.0 })],
    );
    let v = s.view_at(0.0);
    assert!(close(v.scale, 3.0));
    assert!(close(v.invert(600.0), 600.0));

    let ignored = run(
        s.clone(),
        &[(0.0, Action::Pinch { x: 600.0, y: 300.0, factor: f64::NAN })],
    );
    assert_eq!(ignored.view_at(0.0), v);
}

#[test]
fn hover_fades_card_in_and_out() {
    let card = HoverTarget::Card { group: 2, index: 0 };
    let s = run(InteractionState::new(), &[(0.0, Action::HoverEnter(card))]);
    assert!(s.is_hovered(card));
    assert_eq!(s.hover_view(0.0).emphasis_of(card), 0.0);
    assert_eq!(s.hover_view(100.0).emphasis_of(card), 0.5);
    assert_eq!(s.hover_view(200.0).emphasis_of(card), 1.0);
    assert_eq!(s.hover_view(200.0).emphasis_of(HoverTarget::Dot { group: 2 }), 1.0);

    let s = run(s, &[(300.0, Action::HoverLeave(card)), (600.0, Action::Tick)]);
    let hv = s.hover_view(600.0);
    assert_eq!(hv.emphasis_of(card), 0.0);
    assert!(hv.emphasis.is_empty());
    assert!(!s.is_animating(600.0));
}

#[test]
fn group_highlight_is_reference_counted() {
    let a = HoverTarget::Card { group: 0, index: 0 };
    let b = HoverTarget::Card { group: 0, index: 1 };
    let dot = HoverTarget::Dot { group: 0 };

    let s = run(
        InteractionState::new(),
        &[
            (0.0, Action::HoverEnter(a)),
            (10.0, Action::HoverEnter(b)),
            (20.0, Action::HoverEnter(b)),
        ],
    );
    assert_eq!(s.group_hover_count(0), 2);

    let s = run(s, &[(300.0, Action::HoverLeave(a))]);
    assert_eq!(s.group_hover_count(0), 1);
    assert_eq!(s.hover_view(1_000.0).emphasis_of(dot), 1.0);

    let s = run(s, &[(400.0, Action::HoverLeave(b))]);
    assert_eq!(s.group_hover_count(0), 0);
    assert_eq!(s.hover_view(1_000.0).emphasis_of(dot), 0.0);

    // Unmatched leave is ignored.
    let s = run(s, &[(500.0, Action::HoverLeave(a))]);
    assert_eq!(s.group_hover_count(0), 0);
}

#[test]
fn dot_hover_counts_toward_its_group() {
    let dot = HoverTarget::Dot { group: 4 };
    let card = HoverTarget::Card { group: 4, index: 0 };
    let s = run(
        InteractionState::new(),
        &[(0.0, Action::HoverEnter(dot)), (0.0, Action::HoverEnter(card))],
    );
    assert_eq!(s.group_hover_count(4), 2);
    let s = run(s, &[(50.0, Action::HoverLeave(dot))]);
    assert_eq!(s.hover_view(1_000.0).emphasis_of(dot), 1.0);
}

#[test]
fn hovering_raises_targets_to_the_top() {
    let a = HoverTarget::Card { group: 0, index: 0 };
    let b = HoverTarget::Card { group: 1, index: 0 };
    let s = run(
        InteractionState::new(),
        &[
            (0.0, Action::HoverEnter(a)),
            (0.0, Action::HoverEnter(b)),
            (0.0, Action::HoverLeave(a)),
            (0.0, Action::HoverEnter(a)),
        ],
    );
    let hv = s.hover_view(0.0);
    assert!(hv.raise_rank(a) > hv.raise_rank(b));
    assert!(hv.raise_rank(HoverTarget::Dot { group: 0 }).is_some());
    assert_eq!(hv.raise_rank(HoverTarget::Card { group: 9, index: 0 }), None);
}

#[test]
fn non_finite_wheel_and_drag_leave_view_untouched() {
    let zoomed = run(
        InteractionState::new(),
        &[(
            0.0,
            Action::Pinch {
                x: 400.0,
                y: AXIS_Y,
                factor: 2.0,
            },
        )],
    );
    let before = zoomed.view_at(0.0);

    let s = run(
        zoomed,
        &[
            (
                10.0,
                Action::Wheel {
                    x: 400.0,
                    y: AXIS_Y,
                    delta_y: f64::NAN,
                    mode: WheelMode::Pixel,
                },
            ),
            (
                20.0,
                Action::Wheel {
                    x: 400.0,
                    y: AXIS_Y,
                    delta_y: f64::INFINITY,
                    mode: WheelMode::Line,
                },
            ),
            (30.0, Action::DragStart { x: 400.0, y: AXIS_Y }),
            (
                40.0,
                Action::DragMove {
                    x: f64::NAN,
                    y: AXIS_Y,
                },
            ),
            (
                50.0,
                Action::DragMove {
                    x: 450.0,
                    y: AXIS_Y,
                },
            ),
            (60.0, Action::DragEnd),
        ],
    );
    let after = s.view_at(60.0);
    assert!(after.scale.is_finite() && after.translate_x.is_finite());
    assert_eq!(after.scale, before.scale);
    assert!(close(after.translate_x, before.translate_x + 50.0));
}

#[test]
fn configured_eases_drive_transitions() {
    let cfg = TimelineConfig {
        view_ease: Ease::Linear,
        hover_ease: Ease::OutQuad,
        ..TimelineConfig::default()
    };
    let env = |now| ReduceEnv::new(&cfg, AXIS_Y, now);
    let card = HoverTarget::Card { group: 0, index: 0 };
    let s = InteractionState::new()
        .reduce(&Action::ZoomIn, &env(0.0))
        .reduce(&Action::HoverEnter(card), &env(0.0));

    assert!(close(s.view_at(150.0).scale, 1.2));
    let emphasis = s.hover_view(100.0).emphasis[&card];
    assert!(close(emphasis, 0.75));
}

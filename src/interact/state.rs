use std::collections::{BTreeMap, BTreeSet};

use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::foundation::config::TimelineConfig;
use crate::foundation::core::Point;
use crate::transform::view::{ViewBounds, ViewTransform};

/// Something the pointer can hover: a card of a year stack, or a year's axis dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HoverTarget {
    Card { group: usize, index: usize },
    Dot { group: usize },
}

impl HoverTarget {
    pub fn group(&self) -> usize {
        match *self {
            Self::Card { group, .. } | Self::Dot { group } => group,
        }
    }
}

/// Units of a wheel delta, mirroring DOM `deltaMode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WheelMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl WheelMode {
    fn zoom_rate(self) -> f64 {
        match self {
            Self::Pixel => 0.002,
            Self::Line => 0.05,
            Self::Page => 1.0,
        }
    }
}

/// Discrete input handled by [`InteractionState::reduce`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    PointerMove { x: f64, y: f64 },
    PointerLeave,
    Wheel { x: f64, y: f64, delta_y: f64, mode: WheelMode },
    DragStart { x: f64, y: f64 },
    DragMove { x: f64, y: f64 },
    DragEnd,
    /// Two-finger pinch; `factor` is the scale change since the previous event.
    Pinch { x: f64, y: f64, factor: f64 },
    ZoomIn,
    ZoomOut,
    Reset,
    HoverEnter(HoverTarget),
    HoverLeave(HoverTarget),
    /// Animation clock advanced; settles finished transitions.
    Tick,
}

/// Everything a reduction needs besides the state itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReduceEnv {
    pub now_ms: f64,
    pub bounds: ViewBounds,
    /// Zoom anchor used when no pointer position is known.
    pub chart_center: Point,
    pub zoom_step: f64,
    pub zoom_duration_ms: f64,
    pub reset_duration_ms: f64,
    pub hover_duration_ms: f64,
    pub view_ease: Ease,
    pub hover_ease: Ease,
}

impl ReduceEnv {
    pub fn new(cfg: &TimelineConfig, axis_y: f64, now_ms: f64) -> Self {
        Self {
            now_ms,
            bounds: ViewBounds::from_config(cfg),
            chart_center: Point::new(cfg.margin.left + cfg.inner_width * 0.5, axis_y),
            zoom_step: cfg.zoom_step,
            zoom_duration_ms: cfg.zoom_duration_ms,
            reset_duration_ms: cfg.reset_duration_ms,
            hover_duration_ms: cfg.hover_duration_ms,
            view_ease: cfg.view_ease,
            hover_ease: cfg.hover_ease,
        }
    }
}

/// Snapshot of hover styling at one instant, consumed by the render builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverView {
    /// Emphasis in `[0, 1]` per target; absent means 0.
    pub emphasis: BTreeMap<HoverTarget, f64>,
    /// Targets raised above their siblings, bottom to top.
    pub raised: Vec<HoverTarget>,
}

impl HoverView {
    pub fn emphasis_of(&self, target: HoverTarget) -> f64 {
        self.emphasis.get(&target).copied().unwrap_or(0.0)
    }

    /// Raise rank of `target`, `None` if it was never raised.
    pub fn raise_rank(&self, target: HoverTarget) -> Option<usize> {
        self.raised.iter().position(|t| *t == target)
    }
}

/// The whole mutable interaction state of a mounted timeline.
///
/// Updated only through [`InteractionState::reduce`]; everything time-dependent is
/// sampled from tweens against the caller's clock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
    view: ViewTransform,
    transition: Option<Tween<ViewTransform>>,
    pointer: Option<Point>,
    drag_x: Option<f64>,
    hovered: BTreeSet<HoverTarget>,
    group_hovers: BTreeMap<usize, u32>,
    fades: BTreeMap<HoverTarget, Tween<f64>>,
    raised: Vec<HoverTarget>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform to draw with at `now_ms`, including any in-flight transition.
    pub fn view_at(&self, now_ms: f64) -> ViewTransform {
        self.transition
            .as_ref()
            .map_or(self.view, |t| t.sample(now_ms))
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_x.is_some()
    }

    pub fn is_hovered(&self, target: HoverTarget) -> bool {
        self.hovered.contains(&target)
    }

    /// Number of hovered targets (cards or dot) within `group`.
    pub fn group_hover_count(&self, group: usize) -> u32 {
        self.group_hovers.get(&group).copied().unwrap_or(0)
    }

    /// True while a view transition or hover fade still has frames to produce.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.transition.is_some_and(|t| !t.is_done(now_ms))
            || self.fades.values().any(|f| !f.is_done(now_ms))
    }

    pub fn hover_view(&self, now_ms: f64) -> HoverView {
        HoverView {
            emphasis: self
                .fades
                .iter()
                .map(|(target, fade)| (*target, fade.sample(now_ms)))
                .filter(|(_, e)| *e > 0.0)
                .collect(),
            raised: self.raised.clone(),
        }
    }

    /// Apply one action, returning the next state.
    pub fn reduce(mut self, action: &Action, env: &ReduceEnv) -> Self {
        let now = env.now_ms;
        match *action {
            Action::PointerMove { x, y } => {
                self.pointer = Some(Point::new(x, y));
            }
            Action::PointerLeave => {
                self.pointer = None;
            }
            Action::Wheel {
                x,
                y,
                delta_y,
                mode,
            } => {
                self.pointer = Some(Point::new(x, y));
                if delta_y.is_finite() && x.is_finite() {
                    let factor = 2f64.powf(-delta_y * mode.zoom_rate());
                    let base = self.settle(now);
                    self.view = env.bounds.zoom_at(&base, factor, x);
                }
            }
            Action::DragStart { x, y } => {
                self.pointer = Some(Point::new(x, y));
                self.view = self.settle(now);
                self.drag_x = x.is_finite().then_some(x);
            }
            Action::DragMove { x, y } => {
                self.pointer = Some(Point::new(x, y));
                if let Some(last) = self.drag_x
                    && x.is_finite()
                {
                    let base = self.settle(now);
                    self.view = env.bounds.pan(&base, x - last);
                    self.drag_x = Some(x);
                }
            }
            Action::DragEnd => {
                self.drag_x = None;
            }
            Action::Pinch { x, y, factor } => {
                self.pointer = Some(Point::new(x, y));
                if factor.is_finite() && factor > 0.0 && x.is_finite() {
                    let base = self.settle(now);
                    self.view = env.bounds.zoom_at(&base, factor, x);
                }
            }
            Action::ZoomIn => self.animate_zoom(env.zoom_step, env),
            Action::ZoomOut => self.animate_zoom(1.0 / env.zoom_step, env),
            Action::Reset => {
                let base = self.settle(now);
                self.start_transition(base, ViewTransform::IDENTITY, env.reset_duration_ms, env);
            }
            Action::HoverEnter(target) => self.hover_enter(target, env),
            Action::HoverLeave(target) => self.hover_leave(target, env),
            Action::Tick => {
                if self.transition.is_some_and(|t| t.is_done(now)) {
                    self.view = self.settle(now);
                }
                self.fades
                    .retain(|_, fade| !(fade.is_done(now) && fade.to <= 0.0));
            }
        }
        self
    }

    /// Collapse any running transition into the committed view at `now_ms`.
    fn settle(&mut self, now_ms: f64) -> ViewTransform {
        if let Some(t) = self.transition.take() {
            self.view = t.sample(now_ms);
        }
        self.view
    }

    fn animate_zoom(&mut self, factor: f64, env: &ReduceEnv) {
        let base = self.settle(env.now_ms);
        let anchor = self.pointer.unwrap_or(env.chart_center);
        let target = env.bounds.zoom_at(&base, factor, anchor.x);
        self.start_transition(base, target, env.zoom_duration_ms, env);
    }

    fn start_transition(
        &mut self,
        from: ViewTransform,
        to: ViewTransform,
        duration_ms: f64,
        env: &ReduceEnv,
    ) {
        if duration_ms <= 0.0 || from == to {
            self.view = to;
            self.transition = None;
            return;
        }
        self.view = from;
        self.transition = Some(Tween::new(from, to, env.now_ms, duration_ms, env.view_ease));
    }

    fn hover_enter(&mut self, target: HoverTarget, env: &ReduceEnv) {
        if !self.hovered.insert(target) {
            return;
        }
        let group = target.group();
        let count = self.group_hovers.entry(group).or_insert(0);
        *count += 1;
        let first_in_group = *count == 1;

        self.raise(target);
        if let HoverTarget::Card { .. } = target {
            self.fade_to(target, 1.0, env);
        }
        let dot = HoverTarget::Dot { group };
        if dot != target {
            self.raise(dot);
        }
        if first_in_group {
            self.fade_to(dot, 1.0, env);
        }
    }

    fn hover_leave(&mut self, target: HoverTarget, env: &ReduceEnv) {
        if !self.hovered.remove(&target) {
            return;
        }
        let group = target.group();
        let remaining = match self.group_hovers.get_mut(&group) {
            Some(count) => {
                *count = count.saturating_sub(1);
                *count
            }
            None => 0,
        };

        if let HoverTarget::Card { .. } = target {
            self.fade_to(target, 0.0, env);
        }
        if remaining == 0 {
            self.group_hovers.remove(&group);
            self.fade_to(HoverTarget::Dot { group }, 0.0, env);
        }
    }

    fn fade_to(&mut self, target: HoverTarget, to: f64, env: &ReduceEnv) {
        let from = self
            .fades
            .get(&target)
            .map_or(0.0, |f| f.sample(env.now_ms));
        self.fades.insert(
            target,
            Tween::new(from, to, env.now_ms, env.hover_duration_ms, env.hover_ease),
        );
    }

    fn raise(&mut self, target: HoverTarget) {
        self.raised.retain(|t| *t != target);
        self.raised.push(target);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/state.rs"]
mod tests;

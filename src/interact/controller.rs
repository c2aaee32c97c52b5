use crate::foundation::config::TimelineConfig;
use crate::foundation::core::Point;
use crate::foundation::error::{TimelineError, TimelineResult};
use crate::interact::state::{Action, HoverTarget, InteractionState, ReduceEnv};
use crate::layout::stack::{LayoutResult, compute_layout};
use crate::model::event::RawEvent;
use crate::render::commands::{RenderCommands, build_render_commands};
use crate::render::surface::{InputChannel, ListenerId, RenderSurface};
use crate::text::metrics::{ApproxMeasure, TextMeasure};

/// Entry point for mounting a timeline; see [`InteractionController::mount`].
pub type Timeline<S, M = ApproxMeasure> = InteractionController<S, M>;

/// A timeline mounted on a [`RenderSurface`].
///
/// Owns the layout, the interaction state and the surface. Actions go through the
/// state reducer; whenever the view or hover styling changes a fresh frame is built
/// from the unchanged layout and presented.
#[derive(Debug)]
pub struct InteractionController<S: RenderSurface, M: TextMeasure = ApproxMeasure> {
    cfg: TimelineConfig,
    events: Vec<RawEvent>,
    layout: Option<LayoutResult>,
    state: InteractionState,
    surface: S,
    measure: M,
    listeners: Vec<ListenerId>,
    pointer_target: Option<HoverTarget>,
    frame: Option<RenderCommands>,
    /// The last frame caught a transition or fade mid-flight.
    frame_in_flight: bool,
}

impl<S: RenderSurface, M: TextMeasure> InteractionController<S, M> {
    /// Lay out `events` and take over `target`.
    ///
    /// Without a target nothing happens and `Ok(None)` is returned. An event set with no
    /// usable dates mounts an idle controller that draws nothing until
    /// [`InteractionController::set_events`] supplies data.
    pub fn mount(
        target: Option<S>,
        events: &[RawEvent],
        cfg: TimelineConfig,
        measure: M,
        now_ms: f64,
    ) -> TimelineResult<Option<Self>> {
        let Some(surface) = target else {
            tracing::debug!("no mount target, timeline not mounted");
            return Ok(None);
        };
        cfg.validate()?;

        let mut this = Self {
            cfg,
            events: events.to_vec(),
            layout: None,
            state: InteractionState::new(),
            surface,
            measure,
            listeners: Vec::new(),
            pointer_target: None,
            frame: None,
            frame_in_flight: false,
        };
        this.relayout();
        this.sync_listeners();
        this.render(now_ms)?;
        tracing::debug!(
            events = this.events.len(),
            laid_out = this.layout.is_some(),
            "timeline mounted"
        );
        Ok(Some(this))
    }

    pub fn layout(&self) -> Option<&LayoutResult> {
        self.layout.as_ref()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.cfg
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&RenderCommands> {
        self.frame.as_ref()
    }

    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Reduce one action and re-render if anything visible changed.
    ///
    /// Returns whether a frame was presented.
    pub fn dispatch(&mut self, action: Action, now_ms: f64) -> TimelineResult<bool> {
        self.apply(&[action], now_ms)
    }

    pub fn zoom_in(&mut self, now_ms: f64) -> TimelineResult<()> {
        self.dispatch(Action::ZoomIn, now_ms).map(|_| ())
    }

    pub fn zoom_out(&mut self, now_ms: f64) -> TimelineResult<()> {
        self.dispatch(Action::ZoomOut, now_ms).map(|_| ())
    }

    pub fn reset_view(&mut self, now_ms: f64) -> TimelineResult<()> {
        self.dispatch(Action::Reset, now_ms).map(|_| ())
    }

    /// Advance the animation clock; presents a frame while anything is in flight.
    pub fn tick(&mut self, now_ms: f64) -> TimelineResult<bool> {
        self.dispatch(Action::Tick, now_ms)
    }

    /// Pointer moved over the surface; hover enter/leave follow from a hit test
    /// against the last presented frame.
    pub fn pointer_move(&mut self, x: f64, y: f64, now_ms: f64) -> TimelineResult<bool> {
        let hit = self
            .frame
            .as_ref()
            .and_then(|f| f.hit_test(Point::new(x, y)));
        let mut actions = vec![Action::PointerMove { x, y }];
        if hit != self.pointer_target {
            if let Some(old) = self.pointer_target {
                actions.push(Action::HoverLeave(old));
            }
            if let Some(new) = hit {
                actions.push(Action::HoverEnter(new));
            }
            self.pointer_target = hit;
        }
        self.apply(&actions, now_ms)
    }

    pub fn pointer_leave(&mut self, now_ms: f64) -> TimelineResult<bool> {
        let mut actions = vec![Action::PointerLeave];
        if let Some(old) = self.pointer_target.take() {
            actions.push(Action::HoverLeave(old));
        }
        self.apply(&actions, now_ms)
    }

    /// Replace the event set: recompute the layout and return to the identity view.
    pub fn set_events(&mut self, events: &[RawEvent], now_ms: f64) -> TimelineResult<()> {
        self.events = events.to_vec();
        self.relayout();
        self.sync_listeners();
        self.render(now_ms)
    }

    /// Change the axis width. All listeners are detached, the layout is rebuilt for
    /// the new geometry and listeners are attached again.
    pub fn resize(&mut self, inner_width: f64, now_ms: f64) -> TimelineResult<()> {
        if !inner_width.is_finite() || inner_width <= 0.0 {
            return Err(TimelineError::validation(format!(
                "inner_width must be finite and > 0 (got {inner_width})"
            )));
        }
        self.detach_all();
        self.cfg.inner_width = inner_width;
        self.relayout();
        self.sync_listeners();
        tracing::debug!(inner_width, "timeline resized");
        self.render(now_ms)
    }

    /// Detach every listener and hand the surface back.
    pub fn unmount(mut self) -> S {
        self.detach_all();
        tracing::debug!("timeline unmounted");
        self.surface
    }

    fn apply(&mut self, actions: &[Action], now_ms: f64) -> TimelineResult<bool> {
        let Some(layout) = &self.layout else {
            return Ok(false);
        };
        let env = ReduceEnv::new(&self.cfg, layout.timeline_axis_y, now_ms);
        let next = actions
            .iter()
            .fold(self.state.clone(), |state, action| state.reduce(action, &env));
        let changed = next != self.state || self.frame_in_flight || next.is_animating(now_ms);
        self.state = next;
        if changed {
            self.render(now_ms)?;
        }
        Ok(changed)
    }

    fn relayout(&mut self) {
        self.layout = compute_layout(&self.events, &self.cfg, &mut self.measure);
        self.state = InteractionState::new();
        self.pointer_target = None;
    }

    /// Listeners are attached only while there is something to interact with.
    fn sync_listeners(&mut self) {
        if self.layout.is_none() {
            self.detach_all();
        } else if self.listeners.is_empty() {
            self.listeners = InputChannel::ALL
                .iter()
                .map(|channel| self.surface.attach(*channel))
                .collect();
        }
    }

    fn detach_all(&mut self) {
        for id in self.listeners.drain(..) {
            self.surface.detach(id);
        }
    }

    fn render(&mut self, now_ms: f64) -> TimelineResult<()> {
        let frame = match &self.layout {
            Some(layout) => build_render_commands(
                layout,
                &self.state.view_at(now_ms),
                &self.state.hover_view(now_ms),
                &self.cfg,
            ),
            // Clear a surface that previously showed content; otherwise draw nothing.
            None if self.frame.is_some() => RenderCommands {
                width: self.cfg.total_width(),
                height: self.cfg.min_height,
                commands: Vec::new(),
            },
            None => return Ok(()),
        };
        self.surface.present(&frame)?;
        self.frame = Some(frame);
        self.frame_in_flight = self.state.is_animating(now_ms);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/controller.rs"]
mod tests;

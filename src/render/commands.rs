//! Backend-neutral drawing list for one timeline frame.
//!
//! [`build_render_commands`] is a pure function of the layout, the current view
//! transform and the hover snapshot. Commands are in painter's order: later commands
//! draw over earlier ones, and hovered elements are moved to the end of their layer.

use crate::foundation::config::TimelineConfig;
use crate::foundation::core::{Point, Rect, Rgba8, lerp};
use crate::interact::state::{HoverTarget, HoverView};
use crate::layout::stack::{CardRows, LayoutResult, StackedEvent, YearGroup};
use crate::render::ticks::year_ticks;
use crate::transform::view::ViewTransform;

/// Distance of a tick label baseline below the axis.
const TICK_LABEL_OFFSET: f64 = 26.0;
/// Half length of a tick mark.
const TICK_HALF: f64 = 6.0;
const TICK_FONT_PX: f64 = 13.0;
const TICK_STROKE: f64 = 1.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Line {
        from: Point,
        to: Point,
        stroke: Rgba8,
        width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgba8,
        target: Option<HoverTarget>,
    },
    /// Rounded event card background.
    Card {
        rect: Rect,
        radius: f64,
        fill: Rgba8,
        stroke: Rgba8,
        stroke_width: f64,
        target: HoverTarget,
    },
    Text {
        /// Anchor point on the baseline.
        pos: Point,
        text: String,
        size_px: f64,
        bold: bool,
        fill: Rgba8,
        anchor: TextAnchor,
        opacity: f64,
    },
}

impl RenderCommand {
    fn hit(&self, p: Point) -> Option<HoverTarget> {
        match self {
            Self::Circle {
                center,
                radius,
                target: Some(target),
                ..
            } => (center.distance(p) <= *radius).then_some(*target),
            Self::Card { rect, target, .. } => rect.contains(p).then_some(*target),
            _ => None,
        }
    }
}

/// A complete frame: surface size plus the ordered draw list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderCommands {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<RenderCommand>,
}

impl RenderCommands {
    /// Topmost hoverable element under `p`.
    pub fn hit_test(&self, p: Point) -> Option<HoverTarget> {
        self.commands.iter().rev().find_map(|c| c.hit(p))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build the draw list for `layout` seen through `view` with hover styling applied.
pub fn build_render_commands(
    layout: &LayoutResult,
    view: &ViewTransform,
    hover: &HoverView,
    cfg: &TimelineConfig,
) -> RenderCommands {
    let palette = &cfg.palette;
    let axis_y = layout.timeline_axis_y;
    let rows = CardRows::from_config(cfg);
    let mut commands = Vec::new();

    // The axis covers the rescaled domain, clipped to the surface.
    let rescaled = layout.scale.rescaled(view);
    let axis_x0 = rescaled.range.0.min(rescaled.range.1).max(0.0);
    let axis_x1 = rescaled.range.0.max(rescaled.range.1).min(layout.total_width);
    if axis_x0 < axis_x1 {
        commands.push(RenderCommand::Line {
            from: Point::new(axis_x0, axis_y),
            to: Point::new(axis_x1, axis_y),
            stroke: palette.axis,
            width: cfg.axis_stroke_width,
        });
    }

    let cards = layered(
        layout.groups.iter().enumerate().flat_map(|(gi, group)| {
            group.events.iter().map(move |ev| {
                (
                    HoverTarget::Card {
                        group: gi,
                        index: ev.stack_index,
                    },
                    (group, ev),
                )
            })
        }),
        hover,
    );

    for (_, (group, ev)) in &cards {
        let x = view.apply(group.base_x);
        let edge = if group.is_above {
            axis_y - ev.vertical_offset
        } else {
            axis_y + ev.vertical_offset
        };
        commands.push(RenderCommand::Line {
            from: Point::new(x, axis_y),
            to: Point::new(x, edge),
            stroke: palette.connector,
            width: cfg.connector_stroke_width,
        });
    }

    let dots = layered(
        layout
            .groups
            .iter()
            .enumerate()
            .map(|(gi, group)| (HoverTarget::Dot { group: gi }, group)),
        hover,
    );
    for (target, group) in dots {
        let e = hover.emphasis_of(target);
        commands.push(RenderCommand::Circle {
            center: Point::new(view.apply(group.base_x), axis_y),
            radius: lerp(cfg.dot_radius, cfg.dot_radius_hover, e),
            fill: palette.dot,
            target: Some(target),
        });
    }

    let frame = Frame {
        view,
        axis_y,
        rows: &rows,
        cfg,
    };
    for (target, (group, ev)) in cards {
        frame.push_card(&mut commands, target, group, ev, hover.emphasis_of(target));
    }

    for tick in year_ticks(&rescaled, cfg.tick_step_years, cfg.min_tick_spacing) {
        if tick.x < 0.0 || tick.x > layout.total_width {
            continue;
        }
        commands.push(RenderCommand::Line {
            from: Point::new(tick.x, axis_y - TICK_HALF),
            to: Point::new(tick.x, axis_y + TICK_HALF),
            stroke: palette.tick,
            width: TICK_STROKE,
        });
        commands.push(RenderCommand::Text {
            pos: Point::new(tick.x, axis_y + TICK_LABEL_OFFSET),
            text: tick.year.to_string(),
            size_px: TICK_FONT_PX,
            bold: true,
            fill: palette.tick_label,
            anchor: TextAnchor::Middle,
            opacity: 1.0,
        });
    }

    RenderCommands {
        width: layout.total_width,
        height: layout.total_height,
        commands,
    }
}

/// Stable reorder: never-raised items first in input order, then raised items by rank.
fn layered<T>(
    items: impl Iterator<Item = (HoverTarget, T)>,
    hover: &HoverView,
) -> Vec<(HoverTarget, T)> {
    let mut items = items.collect::<Vec<_>>();
    items.sort_by_key(|(target, _)| hover.raise_rank(*target).map_or(0, |r| r + 1));
    items
}

/// Per-frame constants shared by every card.
struct Frame<'a> {
    view: &'a ViewTransform,
    axis_y: f64,
    rows: &'a CardRows,
    cfg: &'a TimelineConfig,
}

impl Frame<'_> {
    fn push_card(
        &self,
        out: &mut Vec<RenderCommand>,
        target: HoverTarget,
        group: &YearGroup,
        ev: &StackedEvent,
        emphasis: f64,
    ) {
        let cfg = self.cfg;
        let rows = self.rows;
        let axis_y = self.axis_y;
        let palette = &cfg.palette;
        let x = self.view.apply(group.base_x);
        let top = if group.is_above {
            axis_y - ev.vertical_offset - cfg.card_height
        } else {
            axis_y + ev.vertical_offset
        };
        let width = lerp(ev.card_width, ev.expanded_width, emphasis);
        let height = lerp(cfg.card_height, ev.expanded_height, emphasis);

        out.push(RenderCommand::Card {
            rect: Rect::new(x - width * 0.5, top, x + width * 0.5, top + height),
            radius: cfg.card_radius,
            fill: palette.card_fill,
            stroke: palette.card_stroke.mix(palette.highlight, emphasis),
            stroke_width: cfg.card_stroke_width,
            target,
        });
        out.push(RenderCommand::Text {
            pos: Point::new(x, top + rows.label_baseline),
            text: ev.event.label.clone(),
            size_px: cfg.label_font_px,
            bold: true,
            fill: palette.label_text,
            anchor: TextAnchor::Middle,
            opacity: 1.0,
        });
        out.push(RenderCommand::Text {
            pos: Point::new(x, top + rows.date_baseline),
            text: ev.event.date.clone(),
            size_px: cfg.date_font_px,
            bold: false,
            fill: palette.date_text,
            anchor: TextAnchor::Middle,
            opacity: 1.0,
        });
        if emphasis <= 0.0 {
            return;
        }
        for (i, line) in ev.description_lines.iter().enumerate() {
            out.push(RenderCommand::Text {
                pos: Point::new(
                    x,
                    top + rows.description_baseline + (i as f64) * cfg.description_line_height,
                ),
                text: line.clone(),
                size_px: cfg.description_font_px,
                bold: false,
                fill: palette.description_text,
                anchor: TextAnchor::Middle,
                opacity: emphasis,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/commands.rs"]
mod tests;

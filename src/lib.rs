//! chronolane lays out and renders zoomable historical timelines.
//!
//! Dated events are grouped by calendar year, each year group is given a lane above or
//! below the time axis so neighbouring groups never collide, and same-year events stack
//! as cards. The resulting [`LayoutResult`] is computed once per event set; pan, zoom and
//! hover only change the [`ViewTransform`] and hover styling applied when building a
//! frame.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `RawEvent -> Event` ([`parse_event_date`]); malformed dates are dropped.
//! 2. **Lay out**: `[Event] -> LayoutResult` ([`compute_layout`]): year groups, lanes,
//!    card stacks and the total height.
//! 3. **Interact**: [`InteractionState::reduce`] folds pointer, wheel, drag and button
//!    actions into a view transform plus eased transitions.
//! 4. **Render**: `(LayoutResult, ViewTransform, HoverView) -> RenderCommands`
//!    ([`build_render_commands`]), serialized by [`write_svg`] and optionally
//!    rasterized with [`rasterize_svg`].
//!
//! [`InteractionController`] ties the last two steps to a [`RenderSurface`].
//!
//! For a walkthrough, see [`crate::guide`].
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod interact;
mod layout;
mod model;
mod parse;
mod render;
mod text;
mod transform;

/// Standalone walkthrough of the layout and interaction model.
pub mod guide;

pub use animation::ease::Ease;
pub use animation::tween::{Lerp, Tween};
pub use foundation::config::{Margins, Palette, TimelineConfig};
pub use foundation::core::{Point, Rect, Rgba8, Vec2, lerp};
pub use foundation::error::{TimelineError, TimelineResult};
pub use interact::controller::{InteractionController, Timeline};
pub use interact::state::{
    Action, HoverTarget, HoverView, InteractionState, ReduceEnv, WheelMode,
};
pub use layout::group::{YearBucket, group_by_year};
pub use layout::lanes::{assign_lanes, is_above};
pub use layout::stack::{
    CardRows, LayoutResult, StackedEvent, YearGroup, compute_layout, layout_events,
};
pub use layout::wrap::{truncate_to_width, wrap_words};
pub use model::event::{Event, EventSet, RawEvent};
pub use model::sample::sample_events;
pub use parse::date::{DateParseError, format_month_year, parse_event_date};
pub use parse::events::parse_events;
pub use render::commands::{RenderCommand, RenderCommands, TextAnchor, build_render_commands};
pub use render::surface::{InputChannel, ListenerId, RenderSurface};
pub use render::svg::{RasterImage, SvgSurface, escape_xml, rasterize_svg, write_svg};
pub use render::ticks::{YearTick, tick_step, year_ticks};
pub use text::metrics::{ApproxMeasure, ParleyMeasure, TextMeasure, TextStyle};
pub use transform::scale::{TimeScale, day_number};
pub use transform::view::{ViewBounds, ViewTransform};

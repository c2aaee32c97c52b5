//! # chronolane guide
//!
//! A walkthrough of how a timeline goes from a list of dated strings to a frame on a
//! drawing surface, and which pieces stay fixed while the user pans and zooms.
//!
//! If you only want to render a file, the `chronolane` binary covers that:
//! `chronolane render --in events.json --out timeline.svg`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`RawEvent`](crate::RawEvent): `{date, label, description}` as supplied by the caller
//! - [`Event`](crate::Event): a raw event whose date parsed, plus its input index
//! - [`YearGroup`](crate::YearGroup): all events of one calendar year, with a signed lane
//! - [`LayoutResult`](crate::LayoutResult): the zoom-independent geometry of a whole timeline
//! - [`ViewTransform`](crate::ViewTransform): horizontal `scale` and `translate_x`
//! - [`InteractionState`](crate::InteractionState): view, transitions, pointer and hover
//! - [`RenderCommands`](crate::RenderCommands): one frame as an ordered draw list
//!
//! ---
//!
//! ## Dates
//!
//! [`parse_event_date`](crate::parse_event_date) accepts the short "Mon YYYY" form
//! (`"Jan 1950"`, `"sep 2001"`) first, then full month names, ISO dates, `YYYY-MM`,
//! `MM/DD/YYYY` and bare years. The day is always normalized to the first of the month,
//! so `format_month_year(parse(s))` round-trips. Events whose date fails to parse are
//! dropped with a `warn!` log line and never reach the layout.
//!
//! ## Layout
//!
//! [`compute_layout`](crate::compute_layout) runs the whole zoom-independent pass:
//!
//! 1. Group by calendar year, chronological inside each group.
//! 2. Map each group's earliest date through the base [`TimeScale`](crate::TimeScale),
//!    which spans one year either side of the data.
//! 3. Assign lanes left to right. A group may not reuse a lane of any earlier group
//!    closer than `lane_spacing` pixels; candidates go `+1, -1, +2, -2, ...`.
//!    Positive lanes sit above the axis.
//! 4. Stack cards away from the axis, `stack_spacing` apart, starting
//!    `base_offset + (|lane| - 1) * level_offset` from it.
//! 5. Size every card from measured label/date widths and its wrapped description.
//! 6. Derive the axis position and total height from the furthest stacks above and below,
//!    never less than `min_height`.
//!
//! Text width comes from a [`TextMeasure`](crate::TextMeasure).
//! [`ApproxMeasure`](crate::ApproxMeasure) needs no fonts and is deterministic;
//! [`ParleyMeasure`](crate::ParleyMeasure) shapes with a real font.
//!
//! ## Interaction
//!
//! The layout is never touched by pan or zoom. Input becomes an
//! [`Action`](crate::Action) and goes through
//! [`InteractionState::reduce`](crate::InteractionState::reduce):
//!
//! - wheel and pinch zoom immediately around the pointer
//! - drag pans one-to-one
//! - zoom in/out buttons ease by `zoom_step` around the last pointer, or the chart centre
//! - reset eases back to identity
//! - hover fades card expansion and dot growth in and out
//!
//! The view is always constrained: scale within `[min_zoom, max_zoom]`, and the viewport
//! may not leave `[margin.left - inner_width, margin.left + 2 * inner_width]`.
//!
//! A new gesture settles any running transition at its current value before applying
//! itself, so there is nothing to cancel.
//!
//! ## Frames
//!
//! [`build_render_commands`](crate::build_render_commands) is a pure function of
//! layout, view and hover snapshot. Hovered cards and dots are drawn last so they sit on
//! top, and [`RenderCommands::hit_test`](crate::RenderCommands::hit_test) walks the list
//! in reverse to find what is under the pointer.
//!
//! [`InteractionController`](crate::InteractionController) owns all of this for a mounted
//! surface: it attaches input listeners, turns pointer moves into hover enter/leave via
//! hit testing, presents a new frame whenever something visible changed, and detaches
//! every listener on resize and unmount.
//!
//! ```no_run
//! use chronolane::{ApproxMeasure, SvgSurface, Timeline, TimelineConfig, sample_events};
//!
//! # fn main() -> chronolane::TimelineResult<()> {
//! let Some(mut timeline) = Timeline::mount(
//!     Some(SvgSurface::new()),
//!     &sample_events(),
//!     TimelineConfig::default(),
//!     ApproxMeasure,
//!     0.0,
//! )?
//! else {
//!     return Ok(());
//! };
//! timeline.zoom_in(0.0)?;
//! timeline.tick(300.0)?;
//! let svg = timeline.surface().document().unwrap_or_default().to_string();
//! # let _ = svg;
//! # Ok(())
//! # }
//! ```

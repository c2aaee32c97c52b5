use chrono::NaiveDate;

use crate::foundation::config::TimelineConfig;
use crate::layout::group::{YearBucket, group_by_year};
use crate::layout::lanes::{assign_lanes, is_above};
use crate::layout::wrap::wrap_words;
use crate::model::event::{Event, RawEvent};
use crate::parse::events::parse_events;
use crate::text::metrics::{TextMeasure, TextStyle};
use crate::transform::scale::TimeScale;

/// An event placed in its year stack.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StackedEvent {
    #[serde(flatten)]
    pub event: Event,
    /// Position within the year stack, 0 nearest the axis.
    pub stack_index: usize,
    /// Distance from the axis to the card edge facing it.
    pub vertical_offset: f64,
    pub card_width: f64,
    pub expanded_width: f64,
    pub expanded_height: f64,
    /// Description wrapped to the configured width.
    pub description_lines: Vec<String>,
}

/// One calendar year of events with its lane and stack geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct YearGroup {
    pub year: i32,
    /// Earliest event date in the group; anchors the group on the time axis.
    pub representative_date: NaiveDate,
    pub events: Vec<StackedEvent>,
    pub lane: i32,
    pub is_above: bool,
    /// Anchor x under the base scale.
    pub base_x: f64,
    /// Distance from the axis to the nearest card of the stack.
    pub axis_offset: f64,
    /// `(count - 1) * stack_spacing + card_height`.
    pub stack_depth: f64,
}

impl YearGroup {
    /// How far the stack reaches away from the axis.
    pub fn extent(&self) -> f64 {
        self.axis_offset + self.stack_depth
    }
}

/// Pan/zoom-invariant geometry of a whole timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutResult {
    pub timeline_axis_y: f64,
    pub total_height: f64,
    pub total_width: f64,
    /// Time-to-pixel mapping at identity zoom.
    pub scale: TimeScale,
    pub groups: Vec<YearGroup>,
}

impl LayoutResult {
    pub fn event_count(&self) -> usize {
        self.groups.iter().map(|g| g.events.len()).sum()
    }
}

/// Vertical positions of text rows inside a card, relative to its top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRows {
    pub label_baseline: f64,
    pub date_baseline: f64,
    pub description_baseline: f64,
}

impl CardRows {
    pub fn from_config(cfg: &TimelineConfig) -> Self {
        let label_baseline = cfg.card_padding * 0.5 + cfg.label_font_px;
        let date_baseline = label_baseline + cfg.date_font_px + 3.0;
        let description_baseline =
            cfg.card_height.max(date_baseline) + cfg.description_font_px * 0.25;
        Self {
            label_baseline,
            date_baseline,
            description_baseline,
        }
    }
}

/// Parse, group, lane and stack `raw` events.
///
/// Returns `None` when no event survives date parsing; the caller draws nothing.
#[tracing::instrument(skip_all, fields(events = raw.len()))]
pub fn compute_layout<M: TextMeasure + ?Sized>(
    raw: &[RawEvent],
    cfg: &TimelineConfig,
    measure: &mut M,
) -> Option<LayoutResult> {
    let events = parse_events(raw);
    if events.len() != raw.len() {
        tracing::warn!(
            dropped = raw.len() - events.len(),
            "some events were excluded from the layout"
        );
    }
    layout_events(&events, cfg, measure)
}

/// Lay out already-parsed events.
pub fn layout_events<M: TextMeasure + ?Sized>(
    events: &[Event],
    cfg: &TimelineConfig,
    measure: &mut M,
) -> Option<LayoutResult> {
    let buckets = group_by_year(events);
    let first = buckets.first()?.events.first()?.parsed_date;
    let last = buckets
        .iter()
        .flat_map(|b| b.events.iter())
        .map(|e| e.parsed_date)
        .max()
        .unwrap_or(first);
    let scale = TimeScale::padded(first, last, cfg.axis_range());

    let positions = buckets
        .iter()
        .map(|b| scale.map(b.events[0].parsed_date))
        .collect::<Vec<_>>();
    let lanes = assign_lanes(&positions, cfg.lane_spacing);

    let rows = CardRows::from_config(cfg);
    let groups = buckets
        .into_iter()
        .zip(positions)
        .zip(lanes)
        .map(|((bucket, base_x), lane)| stack_group(bucket, base_x, lane, cfg, &rows, measure))
        .collect::<Vec<_>>();

    let above = max_extent(groups.iter().filter(|g| g.is_above));
    let below = max_extent(groups.iter().filter(|g| !g.is_above));
    let content = cfg.margin.top + above + below + cfg.margin.bottom;
    let total_height = content.max(cfg.min_height);
    let slack = total_height - content;

    tracing::debug!(
        groups = groups.len(),
        above,
        below,
        total_height,
        "timeline layout computed"
    );

    Some(LayoutResult {
        timeline_axis_y: cfg.margin.top + above + slack * 0.5,
        total_height,
        total_width: cfg.total_width(),
        scale,
        groups,
    })
}

fn stack_group<M: TextMeasure + ?Sized>(
    bucket: YearBucket,
    base_x: f64,
    lane: i32,
    cfg: &TimelineConfig,
    rows: &CardRows,
    measure: &mut M,
) -> YearGroup {
    let magnitude = f64::from(lane.unsigned_abs().saturating_sub(1));
    let axis_offset = cfg.base_offset + magnitude * cfg.level_offset;
    let count = bucket.events.len();
    let stack_depth = (count.saturating_sub(1) as f64) * cfg.stack_spacing + cfg.card_height;
    let representative_date = bucket.events[0].parsed_date;

    let events = bucket
        .events
        .into_iter()
        .enumerate()
        .map(|(stack_index, event)| {
            size_card(
                event,
                stack_index,
                axis_offset + (stack_index as f64) * cfg.stack_spacing,
                cfg,
                rows,
                measure,
            )
        })
        .collect();

    YearGroup {
        year: bucket.year,
        representative_date,
        events,
        lane,
        is_above: is_above(lane),
        base_x,
        axis_offset,
        stack_depth,
    }
}

fn size_card<M: TextMeasure + ?Sized>(
    event: Event,
    stack_index: usize,
    vertical_offset: f64,
    cfg: &TimelineConfig,
    rows: &CardRows,
    measure: &mut M,
) -> StackedEvent {
    let label_w = measure.measure(&event.label, TextStyle::bold(cfg.label_font_px));
    let date_w = measure.measure(&event.date, TextStyle::regular(cfg.date_font_px));
    let card_width = cfg
        .min_card_width
        .max(label_w.max(date_w) + 2.0 * cfg.card_padding);

    let desc_style = TextStyle::regular(cfg.description_font_px);
    let description_lines = wrap_words(&event.description, cfg.wrap_width, desc_style, measure);
    let widest_line = description_lines
        .iter()
        .map(|line| measure.measure(line, desc_style))
        .fold(0.0, f64::max);
    let expanded_width = card_width.max(widest_line + 2.0 * cfg.card_padding);
    let expanded_height = if description_lines.is_empty() {
        cfg.card_height
    } else {
        let last_baseline = rows.description_baseline
            + ((description_lines.len() - 1) as f64) * cfg.description_line_height;
        cfg.card_height.max(last_baseline + cfg.card_padding)
    };

    StackedEvent {
        event,
        stack_index,
        vertical_offset,
        card_width,
        expanded_width,
        expanded_height,
        description_lines,
    }
}

fn max_extent<'a>(groups: impl Iterator<Item = &'a YearGroup>) -> f64 {
    groups.map(YearGroup::extent).fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/stack.rs"]
mod tests;

use std::path::Path;

use anyhow::Context as _;

use crate::animation::ease::Ease;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{TimelineError, TimelineResult};

/// Outer margins around the drawable timeline band, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 120.0,
            right: 120.0,
            bottom: 120.0,
            left: 120.0,
        }
    }
}

/// Colours used by the render command builder.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    pub axis: Rgba8,
    pub connector: Rgba8,
    pub dot: Rgba8,
    pub card_fill: Rgba8,
    pub card_stroke: Rgba8,
    pub highlight: Rgba8,
    pub label_text: Rgba8,
    pub date_text: Rgba8,
    pub description_text: Rgba8,
    pub tick: Rgba8,
    pub tick_label: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            axis: Rgba8::rgb(0xd1, 0xd5, 0xdb),
            connector: Rgba8::rgb(0xcb, 0xd5, 0xf5),
            dot: Rgba8::rgb(0xf9, 0x73, 0x16),
            card_fill: Rgba8::rgb(0xff, 0xff, 0xff),
            card_stroke: Rgba8::rgb(0xd1, 0xd5, 0xdb),
            highlight: Rgba8::rgb(0xf9, 0x73, 0x16),
            label_text: Rgba8::rgb(0x1f, 0x29, 0x37),
            date_text: Rgba8::rgb(0x6b, 0x72, 0x80),
            description_text: Rgba8::rgb(0x37, 0x41, 0x51),
            tick: Rgba8::rgb(0x9c, 0xa3, 0xaf),
            tick_label: Rgba8::rgb(0x6b, 0x72, 0x80),
        }
    }
}

/// Every tunable of the layout, transform and interaction pipeline.
///
/// All fields default individually, so a JSON config only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub margin: Margins,
    /// Width of the time axis at identity zoom.
    pub inner_width: f64,
    /// Floor for the total chart height.
    pub min_height: f64,

    /// Groups closer than this (base-scale pixels) never share a lane.
    pub lane_spacing: f64,
    /// Distance from the axis to the first card of a lane-1 group.
    pub base_offset: f64,
    /// Extra distance per lane magnitude beyond the first.
    pub level_offset: f64,
    /// Vertical distance between consecutive cards of one stack.
    pub stack_spacing: f64,

    pub card_height: f64,
    pub card_radius: f64,
    pub min_card_width: f64,
    pub card_padding: f64,
    pub card_stroke_width: f64,

    pub label_font_px: f64,
    pub date_font_px: f64,
    pub description_font_px: f64,
    pub description_line_height: f64,
    /// Maximum pixel width of a wrapped description line.
    pub wrap_width: f64,

    pub dot_radius: f64,
    pub dot_radius_hover: f64,
    pub axis_stroke_width: f64,
    pub connector_stroke_width: f64,

    /// Multiplier applied by zoom-in (and divided by zoom-out).
    pub zoom_step: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_duration_ms: f64,
    pub reset_duration_ms: f64,
    pub hover_duration_ms: f64,
    /// Curve for animated zoom and reset.
    pub view_ease: Ease,
    pub hover_ease: Ease,

    pub tick_step_years: u32,
    /// Adjacent year markers are kept at least this far apart under zoom.
    pub min_tick_spacing: f64,

    pub palette: Palette,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            margin: Margins::default(),
            inner_width: 1400.0,
            min_height: 700.0,
            lane_spacing: 120.0,
            base_offset: 100.0,
            level_offset: 80.0,
            stack_spacing: 100.0,
            card_height: 45.0,
            card_radius: 10.0,
            min_card_width: 140.0,
            card_padding: 12.0,
            card_stroke_width: 2.0,
            label_font_px: 13.0,
            date_font_px: 11.0,
            description_font_px: 12.0,
            description_line_height: 14.0,
            wrap_width: 256.0,
            dot_radius: 8.0,
            dot_radius_hover: 10.0,
            axis_stroke_width: 3.0,
            connector_stroke_width: 1.5,
            zoom_step: 1.4,
            min_zoom: 0.5,
            max_zoom: 12.0,
            zoom_duration_ms: 300.0,
            reset_duration_ms: 400.0,
            hover_duration_ms: 200.0,
            view_ease: Ease::InOutCubic,
            hover_ease: Ease::Linear,
            tick_step_years: 5,
            min_tick_spacing: 60.0,
            palette: Palette::default(),
        }
    }
}

impl TimelineConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> TimelineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> TimelineResult<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> TimelineResult<()> {
        let positive = [
            ("inner_width", self.inner_width),
            ("min_height", self.min_height),
            ("lane_spacing", self.lane_spacing),
            ("stack_spacing", self.stack_spacing),
            ("card_height", self.card_height),
            ("min_card_width", self.min_card_width),
            ("label_font_px", self.label_font_px),
            ("date_font_px", self.date_font_px),
            ("description_font_px", self.description_font_px),
            ("description_line_height", self.description_line_height),
            ("wrap_width", self.wrap_width),
            ("zoom_step", self.zoom_step),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(TimelineError::validation(format!(
                    "{name} must be finite and > 0 (got {v})"
                )));
            }
        }

        let non_negative = [
            ("margin.top", self.margin.top),
            ("margin.right", self.margin.right),
            ("margin.bottom", self.margin.bottom),
            ("margin.left", self.margin.left),
            ("base_offset", self.base_offset),
            ("level_offset", self.level_offset),
            ("card_padding", self.card_padding),
            ("zoom_duration_ms", self.zoom_duration_ms),
            ("reset_duration_ms", self.reset_duration_ms),
            ("hover_duration_ms", self.hover_duration_ms),
            ("min_tick_spacing", self.min_tick_spacing),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(TimelineError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }

        if self.min_zoom > self.max_zoom {
            return Err(TimelineError::validation(
                "min_zoom must be <= max_zoom",
            ));
        }
        if self.tick_step_years == 0 {
            return Err(TimelineError::validation("tick_step_years must be > 0"));
        }
        Ok(())
    }

    /// Full drawing-surface width: margins plus the axis band.
    pub fn total_width(&self) -> f64 {
        self.margin.left + self.inner_width + self.margin.right
    }

    /// Horizontal pixel range the base time scale maps onto.
    pub fn axis_range(&self) -> (f64, f64) {
        (self.margin.left, self.margin.left + self.inner_width)
    }

    /// Horizontal bounds content may not be panned beyond.
    pub fn translate_extent(&self) -> (f64, f64) {
        (
            self.margin.left - self.inner_width,
            self.margin.left + self.inner_width * 2.0,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;

//! Pluggable text measurement used to size timeline cards.
//!
//! Layout never talks to a font stack directly. It asks a [`TextMeasure`] for the
//! advance width of a string, so the same algorithm runs against real font metrics
//! ([`ParleyMeasure`]) or a deterministic stand-in ([`ApproxMeasure`]).

use crate::foundation::error::{TimelineError, TimelineResult};

/// Font size and weight of a run of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size_px: f64,
    pub bold: bool,
}

impl TextStyle {
    pub fn regular(size_px: f64) -> Self {
        Self {
            size_px,
            bold: false,
        }
    }

    pub fn bold(size_px: f64) -> Self {
        Self {
            size_px,
            bold: true,
        }
    }
}

/// Measures the horizontal advance of single-line text, in pixels.
pub trait TextMeasure {
    fn measure(&mut self, text: &str, style: TextStyle) -> f64;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &mut T {
    fn measure(&mut self, text: &str, style: TextStyle) -> f64 {
        (**self).measure(text, style)
    }
}

/// Font-free approximation based on per-character advance classes.
///
/// Deterministic and platform independent; the default for headless layout and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxMeasure;

impl ApproxMeasure {
    fn advance_em(c: char) -> f64 {
        match c {
            ' ' => 0.28,
            'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 0.26,
            'f' | 't' | 'r' | 'I' | '(' | ')' | '-' => 0.36,
            'm' | 'w' => 0.82,
            'M' | 'W' => 0.88,
            '0'..='9' => 0.56,
            c if c.is_ascii_uppercase() => 0.66,
            c if c.is_ascii() => 0.53,
            _ => 0.9,
        }
    }
}

impl TextMeasure for ApproxMeasure {
    fn measure(&mut self, text: &str, style: TextStyle) -> f64 {
        let weight = if style.bold { 1.06 } else { 1.0 };
        let ems: f64 = text.chars().map(Self::advance_em).sum();
        ems * style.size_px * weight
    }
}

/// Measures text with real font metrics by shaping it through parley.
pub struct ParleyMeasure {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
}

impl ParleyMeasure {
    /// Register `font_bytes` (TTF/OTF) and measure every string with its first family.
    pub fn from_font_bytes(font_bytes: &[u8]) -> TimelineResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            TimelineError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TimelineError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> TimelineResult<Self> {
        use anyhow::Context as _;

        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        Self::from_font_bytes(&bytes)
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl TextMeasure for ParleyMeasure {
    fn measure(&mut self, text: &str, style: TextStyle) -> f64 {
        if text.is_empty() {
            return 0.0;
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px as f32));
        if style.bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout
            .lines()
            .map(|line| f64::from(line.metrics().advance))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;

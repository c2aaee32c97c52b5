//! SVG serialization of [`RenderCommands`] and rasterization through usvg/resvg.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{TimelineError, TimelineResult};
use crate::render::commands::{RenderCommand, RenderCommands};
use crate::render::surface::{InputChannel, ListenerId, RenderSurface};

const FONT_FAMILY: &str = "sans-serif";
const MAX_DIM: u32 = 16_384;

/// Serialize one frame as a standalone SVG document.
pub fn write_svg(frame: &RenderCommands) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(frame.width),
        h = num(frame.height),
    );
    for cmd in &frame.commands {
        write_command(&mut out, cmd);
    }
    out.push_str("</svg>\n");
    out
}

fn write_command(out: &mut String, cmd: &RenderCommand) {
    let _ = match cmd {
        RenderCommand::Line {
            from,
            to,
            stroke,
            width,
        } => writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}"{} stroke-width="{}"/>"#,
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y),
            paint("stroke", *stroke),
            num(*width),
        ),
        RenderCommand::Circle {
            center,
            radius,
            fill,
            ..
        } => writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{}"{}/>"#,
            num(center.x),
            num(center.y),
            num(*radius),
            paint("fill", *fill),
        ),
        RenderCommand::Card {
            rect,
            radius,
            fill,
            stroke,
            stroke_width,
            ..
        } => writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}"{}{} stroke-width="{}"/>"#,
            num(rect.x0),
            num(rect.y0),
            num(rect.width()),
            num(rect.height()),
            num(*radius),
            paint("fill", *fill),
            paint("stroke", *stroke),
            num(*stroke_width),
        ),
        RenderCommand::Text {
            pos,
            text,
            size_px,
            bold,
            fill,
            anchor,
            opacity,
        } => {
            let weight = if *bold { r#" font-weight="600""# } else { "" };
            let alpha = if *opacity < 1.0 {
                format!(r#" opacity="{}""#, num(opacity.max(0.0)))
            } else {
                String::new()
            };
            writeln!(
                out,
                r#"  <text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="{}"{weight} text-anchor="{}"{}{alpha}>{}</text>"#,
                num(pos.x),
                num(pos.y),
                num(*size_px),
                anchor.as_svg(),
                paint("fill", *fill),
                escape_xml(text),
            )
        }
    };
}

fn paint(attr: &str, c: Rgba8) -> String {
    let rgb = Rgba8 { a: 255, ..c }.to_hex();
    if c.a == 255 {
        format!(r#" {attr}="{rgb}""#)
    } else {
        format!(
            r#" {attr}="{rgb}" {attr}-opacity="{}""#,
            num(f64::from(c.a) / 255.0)
        )
    }
}

/// Shortest stable decimal form, at most two fractional digits.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// In-memory surface that keeps the latest frame as an SVG document.
#[derive(Debug, Default)]
pub struct SvgSurface {
    listeners: BTreeMap<ListenerId, InputChannel>,
    next_id: u64,
    document: Option<String>,
    frames: usize,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG of the most recently presented frame.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn frames_presented(&self) -> usize {
        self.frames
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_listening(&self, channel: InputChannel) -> bool {
        self.listeners.values().any(|c| *c == channel)
    }
}

impl RenderSurface for SvgSurface {
    fn attach(&mut self, channel: InputChannel) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, channel);
        id
    }

    fn detach(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn present(&mut self, frame: &RenderCommands) -> TimelineResult<()> {
        self.document = Some(write_svg(frame));
        self.frames += 1;
        Ok(())
    }
}

/// Straight-alpha RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Parse and rasterize an SVG document at its intrinsic size.
///
/// System fonts are always loaded; `font` adds one more face and makes it the
/// `sans-serif` family used by [`write_svg`].
pub fn rasterize_svg(svg: &str, font: Option<&Path>) -> TimelineResult<RasterImage> {
    let fontdb = build_fontdb(font)?;
    let opts = usvg::Options {
        fontdb,
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

    let size = tree.size();
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| TimelineError::render("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    tracing::debug!(width, height, "rasterized svg");
    Ok(RasterImage {
        width,
        height,
        rgba,
    })
}

fn to_px(v: f32) -> TimelineResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(TimelineError::render("svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIM {
        return Err(TimelineError::render(format!(
            "svg raster size too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

fn build_fontdb(font: Option<&Path>) -> TimelineResult<Arc<usvg::fontdb::Database>> {
    let mut db = usvg::fontdb::Database::new();
    let mut family = None;
    if let Some(path) = font {
        db.load_font_file(path)
            .with_context(|| format!("load font '{}'", path.display()))?;
        family = db
            .faces()
            .next()
            .and_then(|face| face.families.first())
            .map(|(name, _)| name.clone());
    }
    db.load_system_fonts();
    if let Some(name) = family {
        db.set_sans_serif_family(name);
    }
    Ok(Arc::new(db))
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;

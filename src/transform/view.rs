use crate::foundation::config::TimelineConfig;
use crate::foundation::core::lerp;

/// Horizontal zoom/pan state: `screen_x = scale * x + translate_x`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate_x: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
    };

    pub fn new(scale: f64, translate_x: f64) -> Self {
        Self { scale, translate_x }
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        self.scale * x + self.translate_x
    }

    #[inline]
    pub fn invert(&self, screen_x: f64) -> f64 {
        (screen_x - self.translate_x) / self.scale
    }

    /// Set the scale to `k` while keeping the content under `anchor_x` fixed.
    pub fn scale_to(&self, k: f64, anchor_x: f64) -> Self {
        let content_x = self.invert(anchor_x);
        Self {
            scale: k,
            translate_x: anchor_x - content_x * k,
        }
    }

    /// Pan by a screen-space delta.
    pub fn translate_by(&self, dx: f64) -> Self {
        Self {
            scale: self.scale,
            translate_x: self.translate_x + dx,
        }
    }

    pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            scale: lerp(a.scale, b.scale, t),
            translate_x: lerp(a.translate_x, b.translate_x, t),
        }
    }
}

/// Limits a [`ViewTransform`] must respect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Visible screen span.
    pub viewport: (f64, f64),
    /// Content span the viewport may not leave.
    pub translate_extent: (f64, f64),
}

impl ViewBounds {
    pub fn from_config(cfg: &TimelineConfig) -> Self {
        Self {
            min_scale: cfg.min_zoom,
            max_scale: cfg.max_zoom,
            viewport: (0.0, cfg.total_width()),
            translate_extent: cfg.translate_extent(),
        }
    }

    pub fn clamp_scale(&self, k: f64) -> f64 {
        k.clamp(self.min_scale, self.max_scale)
    }

    /// Multiply the scale by `factor` around `anchor_x`, then constrain.
    pub fn zoom_at(&self, view: &ViewTransform, factor: f64, anchor_x: f64) -> ViewTransform {
        let k = self.clamp_scale(view.scale * factor);
        self.constrain(&view.scale_to(k, anchor_x))
    }

    pub fn pan(&self, view: &ViewTransform, dx: f64) -> ViewTransform {
        self.constrain(&view.translate_by(dx))
    }

    /// Shift the view so the viewport stays inside the translate extent.
    ///
    /// If the viewport is wider than the extent (zoomed far out) it is centred on it.
    pub fn constrain(&self, view: &ViewTransform) -> ViewTransform {
        let dx0 = view.invert(self.viewport.0) - self.translate_extent.0;
        let dx1 = view.invert(self.viewport.1) - self.translate_extent.1;
        let shift = if dx1 > dx0 {
            (dx0 + dx1) * 0.5
        } else if dx0 < 0.0 {
            dx0
        } else {
            dx1.max(0.0)
        };
        ViewTransform {
            scale: view.scale,
            translate_x: view.translate_x + view.scale * shift,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/view.rs"]
mod tests;

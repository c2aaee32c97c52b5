use crate::animation::ease::Ease;
use crate::transform::view::ViewTransform;

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        crate::foundation::core::lerp(*a, *b, t)
    }
}

impl Lerp for ViewTransform {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        ViewTransform::lerp(a, b, t)
    }
}

/// Time-based eased interpolation between two values.
///
/// Clock values are host milliseconds; the tween never reads a clock itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            ease,
        }
    }

    /// Normalized progress in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Value at `now_ms`. Exactly `to` once the tween has finished.
    pub fn sample(&self, now_ms: f64) -> T {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return self.to;
        }
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;

use chrono::{Datelike, NaiveDate};

use crate::parse::date::offset_years;
use crate::transform::view::ViewTransform;

const DAYS_PER_YEAR: f64 = 365.2425;

/// Linear mapping from a date domain onto a horizontal pixel range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeScale {
    pub domain_start: NaiveDate,
    pub domain_end: NaiveDate,
    /// Pixel x of `domain_start` and `domain_end`.
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain_start: NaiveDate, domain_end: NaiveDate, range: (f64, f64)) -> Self {
        Self {
            domain_start,
            domain_end,
            range,
        }
    }

    /// Scale covering `[min - 1yr, max + 1yr]` so the extreme events are not flush
    /// against the ends of the axis.
    pub fn padded(min: NaiveDate, max: NaiveDate, range: (f64, f64)) -> Self {
        Self::new(offset_years(min, -1), offset_years(max, 1), range)
    }

    pub fn map(&self, date: NaiveDate) -> f64 {
        self.map_days(day_number(date))
    }

    pub fn map_days(&self, days: f64) -> f64 {
        let (d0, d1) = self.domain_days();
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (days - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Inverse of [`TimeScale::map_days`].
    pub fn invert(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain_days();
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (x - r0) / (r1 - r0) * (d1 - d0)
    }

    pub fn invert_date(&self, x: f64) -> Option<NaiveDate> {
        let days = i32::try_from(self.invert(x).round() as i64).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days)
    }

    /// The same domain with the view transform composed onto its range.
    pub fn rescaled(&self, view: &ViewTransform) -> Self {
        Self {
            range: (view.apply(self.range.0), view.apply(self.range.1)),
            ..*self
        }
    }

    pub fn pixels_per_day(&self) -> f64 {
        let (d0, d1) = self.domain_days();
        if d1 == d0 {
            return 0.0;
        }
        (self.range.1 - self.range.0) / (d1 - d0)
    }

    pub fn pixels_per_year(&self) -> f64 {
        self.pixels_per_day() * DAYS_PER_YEAR
    }

    fn domain_days(&self) -> (f64, f64) {
        (day_number(self.domain_start), day_number(self.domain_end))
    }
}

/// Days since the proleptic Gregorian epoch, as a continuous coordinate.
pub fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/scale.rs"]
mod tests;

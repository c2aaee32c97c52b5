use chrono::{Datelike, NaiveDate};

use crate::transform::scale::TimeScale;

const STEP_LADDER: [u32; 10] = [1, 2, 5, 10, 20, 50, 100, 200, 500, 1000];

/// A year marker on the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearTick {
    pub year: i32,
    pub x: f64,
}

/// Pick a tick step near `preferred` that keeps markers `min_spacing` apart.
///
/// Starting from `preferred`, the step climbs the 1-2-5 ladder while ticks would be too
/// dense and steps down while the next finer step still leaves enough room.
pub fn tick_step(scale: &TimeScale, preferred: u32, min_spacing: f64) -> u32 {
    let ppy = scale.pixels_per_year().abs();
    let mut ladder = STEP_LADDER.to_vec();
    if !ladder.contains(&preferred) {
        ladder.push(preferred);
        ladder.sort_unstable();
    }
    let fits = |step: u32| f64::from(step) * ppy >= min_spacing;

    let mut idx = ladder.iter().position(|s| *s == preferred).unwrap_or(0);
    while !fits(ladder[idx]) && idx + 1 < ladder.len() {
        idx += 1;
    }
    while idx > 0 && fits(ladder[idx - 1]) {
        idx -= 1;
    }
    ladder[idx]
}

/// Year ticks aligned to multiples of the chosen step, across the scale's domain.
pub fn year_ticks(scale: &TimeScale, preferred: u32, min_spacing: f64) -> Vec<YearTick> {
    let step = i32::try_from(tick_step(scale, preferred, min_spacing)).unwrap_or(1);
    let start = scale.domain_start;
    let first_whole = if start.month() == 1 && start.day() == 1 {
        start.year()
    } else {
        start.year() + 1
    };
    let first = first_whole.div_euclid(step) * step
        + if first_whole.rem_euclid(step) == 0 { 0 } else { step };

    let mut ticks = Vec::new();
    let mut year = first;
    while year <= scale.domain_end.year() {
        if let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) {
            if date > scale.domain_end {
                break;
            }
            ticks.push(YearTick {
                year,
                x: scale.map(date),
            });
        }
        year += step;
    }
    ticks
}

#[cfg(test)]
#[path = "../../tests/unit/render/ticks.rs"]
mod tests;

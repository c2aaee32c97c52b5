use chrono::{Datelike, NaiveDate};

/// Why a date string could not be placed on the timeline.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum DateParseError {
    #[error("empty date string")]
    Empty,
    #[error("unrecognized date '{0}'")]
    Unrecognized(String),
}

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Formats carrying a day of month; the day is discarded afterwards.
const DAY_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%B %d %Y",
];

// Month-precision formats; parsed with a synthetic leading day.
const MONTH_FORMATS: [&str; 4] = ["%B %Y", "%B, %Y", "%Y-%m", "%m/%Y"];

/// Parse a "Mon YYYY" event date into the first day of that month.
///
/// The three-letter abbreviation path is tried first (case-insensitive, any
/// whitespace between month and year). When it fails, a handful of generic
/// date layouts are attempted, and last a month word plus a four-digit year found
/// anywhere in the text (`"Jan 1950 (est.)"`, `"Sept 1950"`). Whatever path
/// succeeds, the day is normalized to 1.
pub fn parse_event_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }
    if let Some(date) = parse_abbreviated(trimmed) {
        return Ok(date);
    }
    parse_generic(trimmed)
        .or_else(|| parse_embedded(trimmed))
        .ok_or_else(|| DateParseError::Unrecognized(trimmed.to_string()))
}

/// Canonical "Mon YYYY" rendering; `parse_event_date` round-trips through it.
pub fn format_month_year(date: NaiveDate) -> String {
    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    format!("{month} {}", date.year())
}

/// Shift a date by whole years, clamping Feb 29 onto Feb 28.
pub(crate) fn offset_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year().saturating_add(years);
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

fn parse_abbreviated(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split_whitespace();
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let month = month.trim_end_matches(['.', ',']);
    let month0 = MONTH_ABBREVIATIONS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(month))?;
    let year = year.parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1)
}

fn parse_generic(s: &str) -> Option<NaiveDate> {
    let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");

    // Month formats go first: a format space also matches zero whitespace, so
    // "%B %d %Y" would otherwise read "January 1950" as day 19 of year 50.
    let with_day = format!("1 {normalized}");
    for fmt in MONTH_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&with_day, &format!("%d {fmt}"))
            && year_is_written(&normalized, date.year())
        {
            return Some(date);
        }
    }

    for fmt in DAY_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&normalized, fmt)
            && year_is_written(&normalized, date.year())
        {
            return date.with_day(1);
        }
    }

    if (1..=4).contains(&normalized.len()) && normalized.bytes().all(|b| b.is_ascii_digit()) {
        let year = normalized.parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

/// A month word and exactly one four-digit year, surrounded by anything.
fn parse_embedded(s: &str) -> Option<NaiveDate> {
    let month0 = s
        .split(|c: char| !c.is_ascii_alphabetic())
        .find_map(month_word)?;

    let mut years = four_digit_runs(s);
    let year = years.next()?;
    if years.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// Zero-based month for a full name or a prefix of at least three letters.
fn month_word(word: &str) -> Option<u32> {
    if word.len() < 3 {
        return None;
    }
    let word = word.to_ascii_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&word))
        .map(|i| i as u32)
}

fn four_digit_runs(s: &str) -> impl Iterator<Item = i32> + '_ {
    s.split(|c: char| !c.is_ascii_digit())
        .filter(|run| run.len() == 4)
        .filter_map(|run| run.parse::<i32>().ok())
}

/// Rejects chrono reading a year out of a day field or a leading hyphen as a sign.
fn year_is_written(s: &str, year: i32) -> bool {
    year >= 0 && four_digit_runs(s).any(|y| y == year)
}

#[cfg(test)]
#[path = "../../tests/unit/parse/date.rs"]
mod tests;

use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn abbreviated_month_year_lands_on_first_of_month() {
    assert_eq!(parse_event_date("Jan 1950").unwrap(), ymd(1950, 1, 1));
    assert_eq!(parse_event_date("Dec 2025").unwrap(), ymd(2025, 12, 1));
    assert_eq!(parse_event_date("  sep\t1998 ").unwrap(), ymd(1998, 9, 1));
    assert_eq!(parse_event_date("OCT   1992").unwrap(), ymd(1992, 10, 1));
}

#[test]
fn every_abbreviation_parses_idempotently() {
    for (i, abbr) in MONTH_ABBREVIATIONS.iter().enumerate() {
        for year in [1, 999, 1950, 2000, 2025, 9999] {
            let input = format!("{abbr} {year}");
            let first = parse_event_date(&input).unwrap();
            assert_eq!(first.day(), 1);
            assert_eq!(first.month0() as usize, i);
            assert_eq!(first.year(), year);

            let again = parse_event_date(&format_month_year(first)).unwrap();
            assert_eq!(again, first);
        }
    }
}

#[test]
fn generic_layouts_fall_back_and_normalize_day() {
    assert_eq!(parse_event_date("January 1950").unwrap(), ymd(1950, 1, 1));
    assert_eq!(parse_event_date("1962-03-17").unwrap(), ymd(1962, 3, 1));
    assert_eq!(parse_event_date("07/04/1976").unwrap(), ymd(1976, 7, 1));
    assert_eq!(parse_event_date("12 November 1983").unwrap(), ymd(1983, 11, 1));
    assert_eq!(parse_event_date("May 5, 1988").unwrap(), ymd(1988, 5, 1));
    assert_eq!(parse_event_date("2003-06").unwrap(), ymd(2003, 6, 1));
    assert_eq!(parse_event_date("2010").unwrap(), ymd(2010, 1, 1));
}

#[test]
fn full_month_names_keep_four_digit_year() {
    assert_eq!(parse_event_date("March 1962").unwrap(), ymd(1962, 3, 1));
    assert_eq!(parse_event_date("June 2003").unwrap(), ymd(2003, 6, 1));
    assert_eq!(parse_event_date("December 2025").unwrap(), ymd(2025, 12, 1));
    assert_eq!(parse_event_date("september, 1998").unwrap(), ymd(1998, 9, 1));
}

#[test]
fn hyphen_before_year_is_not_a_sign() {
    let date = parse_event_date("Jan-1950").unwrap();
    assert_eq!(date, ymd(1950, 1, 1));
    assert!(date.year() > 0);
}

#[test]
fn month_and_year_found_inside_other_text() {
    assert_eq!(parse_event_date("Jan 1950 (est.)").unwrap(), ymd(1950, 1, 1));
    assert_eq!(parse_event_date("Sept 1950").unwrap(), ymd(1950, 9, 1));
    assert_eq!(parse_event_date("1950 Jan extra").unwrap(), ymd(1950, 1, 1));
    assert_eq!(parse_event_date("early Nov. of 1987").unwrap(), ymd(1987, 11, 1));
}

#[test]
fn malformed_strings_are_rejected() {
    assert_eq!(parse_event_date(""), Err(DateParseError::Empty));
    assert_eq!(parse_event_date("   "), Err(DateParseError::Empty));
    for bad in [
        "not a date",
        "Foo 1950",
        "Jan",
        "Jan nineteen",
        "Jan 19x0",
        "Sept 1950 or 1951",
        "circa 1950",
        "13/45/2000",
        "Feb 2000 2001",
    ] {
        assert!(
            matches!(parse_event_date(bad), Err(DateParseError::Unrecognized(_))),
            "expected '{bad}' to be rejected"
        );
    }
}

#[test]
fn offset_years_clamps_leap_day() {
    assert_eq!(offset_years(ymd(2000, 2, 29), 1), ymd(2001, 2, 28));
    assert_eq!(offset_years(ymd(1950, 1, 1), -1), ymd(1949, 1, 1));
}

use super::*;
use crate::model::event::RawEvent;
use crate::parse::events::parse_events;

fn events(dates: &[&str]) -> Vec<Event> {
    let raw = dates
        .iter()
        .enumerate()
        .map(|(i, d)| RawEvent::new(*d, format!("e{i}"), ""))
        .collect::<Vec<_>>();
    parse_events(&raw)
}

#[test]
fn buckets_are_ascending_by_year() {
    let evs = events(&["Mar 2001", "Jan 1950", "Dec 1999", "Feb 1950"]);
    let groups = group_by_year(&evs);
    let years = groups.iter().map(|g| g.year).collect::<Vec<_>>();
    assert_eq!(years, vec![1950, 1999, 2001]);
}

#[test]
fn events_within_a_year_are_chronological() {
    let evs = events(&["Nov 1983", "Feb 1983", "Jul 1983"]);
    let groups = group_by_year(&evs);
    assert_eq!(groups.len(), 1);
    let labels = groups[0]
        .events
        .iter()
        .map(|e| e.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["e1", "e2", "e0"]);
}

#[test]
fn same_date_ties_keep_input_order() {
    let evs = events(&["Jan 1950", "Mar 1950", "Jan 1950", "Jan 1950"]);
    let groups = group_by_year(&evs);
    let labels = groups[0]
        .events
        .iter()
        .map(|e| e.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["e0", "e2", "e3", "e1"]);
}

#[test]
fn empty_input_yields_no_buckets() {
    assert!(group_by_year(&[]).is_empty());
}

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::model::event::Event;

/// Events sharing a calendar year, before lanes and geometry are attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearBucket {
    pub year: i32,
    pub events: Vec<Event>,
}

/// Bucket events by calendar year, ascending.
///
/// Within a bucket events are ordered by date; equal dates keep their input order.
pub fn group_by_year(events: &[Event]) -> Vec<YearBucket> {
    let mut by_year = BTreeMap::<i32, Vec<Event>>::new();
    for ev in events {
        by_year
            .entry(ev.parsed_date.year())
            .or_default()
            .push(ev.clone());
    }

    by_year
        .into_iter()
        .map(|(year, mut events)| {
            events.sort_by_key(|e| (e.parsed_date, e.input_index));
            YearBucket { year, events }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/group.rs"]
mod tests;

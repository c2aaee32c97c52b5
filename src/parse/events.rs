use crate::model::event::{Event, RawEvent};
use crate::parse::date::parse_event_date;

/// Attach parsed dates to raw events, dropping the ones whose date cannot be read.
///
/// Dropped events are logged and otherwise ignored; input order is preserved for the
/// survivors so later stable sorts can break ties by it.
pub fn parse_events(raw: &[RawEvent]) -> Vec<Event> {
    let mut out = Vec::with_capacity(raw.len());
    for (input_index, ev) in raw.iter().enumerate() {
        match parse_event_date(&ev.date) {
            Ok(parsed_date) => out.push(Event {
                date: ev.date.clone(),
                label: ev.label.clone(),
                description: ev.description.clone(),
                parsed_date,
                input_index,
            }),
            Err(err) => {
                tracing::warn!(
                    index = input_index,
                    label = %ev.label,
                    error = %err,
                    "dropping event with unparseable date"
                );
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/parse/events.rs"]
mod tests;

use std::path::Path;

use anyhow::Context as _;
use chrono::NaiveDate;

use crate::foundation::error::TimelineResult;

/// Event record as supplied by the host. Missing fields read as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RawEvent {
    pub date: String,
    pub label: String,
    pub description: String,
}

impl RawEvent {
    pub fn new(
        date: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// An event whose date survived parsing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub date: String,
    pub label: String,
    pub description: String,
    /// First day of the event's month.
    pub parsed_date: NaiveDate,
    /// Position in the host-supplied sequence, used as the final sort tie-break.
    pub input_index: usize,
}

/// Ordered input sequence loaded from JSON.
///
/// Accepts either a bare array of events or an object with an `events` array.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct EventSet {
    pub events: Vec<RawEvent>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum EventSetRepr {
    Bare(Vec<RawEvent>),
    Wrapped { events: Vec<RawEvent> },
}

impl<'de> serde::Deserialize<'de> for EventSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let events = match EventSetRepr::deserialize(deserializer)? {
            EventSetRepr::Bare(events) | EventSetRepr::Wrapped { events } => events,
        };
        Ok(Self { events })
    }
}

impl EventSet {
    pub fn from_path(path: impl AsRef<Path>) -> TimelineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read events '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> TimelineResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl From<Vec<RawEvent>> for EventSet {
    fn from(events: Vec<RawEvent>) -> Self {
        Self { events }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/event.rs"]
mod tests;

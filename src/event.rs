use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A schedulable occasion with its own independent seat inventory.
///
/// Events are created once during bulk load and never mutated or removed
/// for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: String,
    pub name: String,
    pub event_date: NaiveDate,
}

impl Event {
    pub fn new(
        event_id: impl Into<String>,
        name: impl Into<String>,
        event_date: NaiveDate,
    ) -> Self {
        Event {
            event_id: event_id.into(),
            name: name.into(),
            event_date,
        }
    }
}

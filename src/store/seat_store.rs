use std::collections::HashMap;
use std::sync::RwLock;

use crate::event::Event;
use crate::seat::{Seat, SeatRequest, SeatStatus};

use super::StoreError;

/// Sort token for ordering events by name, matched case-insensitively.
pub const SORT_BY_NAME: &str = "name";
/// Sort token for ordering events by date, matched case-insensitively.
pub const SORT_BY_DATE: &str = "date";

/// In-memory seat inventory, keyed by event identifier.
///
/// Seats live in load order under their event; the catalog keeps events in
/// first-seen order. All queries clone out of the maps, so callers never
/// hold a guard across their own logic.
pub struct SeatStore {
    events: RwLock<Vec<Event>>,
    event_seats: RwLock<HashMap<String, Vec<Seat>>>,
}

impl SeatStore {
    pub fn new() -> Self {
        SeatStore {
            events: RwLock::new(Vec::new()),
            event_seats: RwLock::new(HashMap::new()),
        }
    }

    /// Add an event to the catalog, ignoring duplicates by id.
    ///
    /// Bulk-load entry point; first occurrence wins and fixes the load
    /// order used when listing without a sort token.
    pub fn add_event(&self, event: Event) -> Result<(), StoreError> {
        let mut events = self
            .events
            .write()
            .map_err(|_| StoreError::LockPoisoned("events write"))?;
        if events.iter().all(|e| e.event_id != event.event_id) {
            events.push(event);
        }
        Ok(())
    }

    /// Append a seat under the given event id.
    ///
    /// Bulk-load entry point; the loader guarantees compound-key uniqueness
    /// within an event.
    pub fn add_seat(&self, event_id: &str, seat: Seat) -> Result<(), StoreError> {
        let mut seats = self
            .event_seats
            .write()
            .map_err(|_| StoreError::LockPoisoned("seats write"))?;
        seats.entry(event_id.to_string()).or_default().push(seat);
        Ok(())
    }

    pub fn event_exists(&self, event_id: &str) -> Result<bool, StoreError> {
        let seats = self
            .event_seats
            .read()
            .map_err(|_| StoreError::LockPoisoned("seats read"))?;
        Ok(seats.contains_key(event_id))
    }

    pub fn seat_exists(&self, event_id: &str, request: &SeatRequest) -> Result<bool, StoreError> {
        let seats = self
            .event_seats
            .read()
            .map_err(|_| StoreError::LockPoisoned("seats read"))?;
        Ok(seats
            .get(event_id)
            .is_some_and(|list| list.iter().any(|seat| seat.matches(request))))
    }

    /// Whether a seat matching the compound key exists and is `Open`.
    pub fn seat_available(
        &self,
        event_id: &str,
        request: &SeatRequest,
    ) -> Result<bool, StoreError> {
        let seats = self
            .event_seats
            .read()
            .map_err(|_| StoreError::LockPoisoned("seats read"))?;
        Ok(seats.get(event_id).is_some_and(|list| {
            list.iter()
                .any(|seat| seat.matches(request) && seat.status == SeatStatus::Open)
        }))
    }

    /// Look up one seat by compound key. Linear scan, first match.
    pub fn get_seat(
        &self,
        event_id: &str,
        request: &SeatRequest,
    ) -> Result<Option<Seat>, StoreError> {
        let seats = self
            .event_seats
            .read()
            .map_err(|_| StoreError::LockPoisoned("seats read"))?;
        Ok(seats
            .get(event_id)
            .and_then(|list| list.iter().find(|seat| seat.matches(request)).cloned()))
    }

    /// The `Open` seats of an event, best sell rank first, at most
    /// `quantity` of them.
    ///
    /// Sorting is stable, so equal ranks keep their load order. Fewer open
    /// seats than requested is a short result, not an error.
    pub fn get_best_seats(
        &self,
        event_id: &str,
        quantity: usize,
    ) -> Result<Vec<Seat>, StoreError> {
        let seats = self
            .event_seats
            .read()
            .map_err(|_| StoreError::LockPoisoned("seats read"))?;
        let mut open: Vec<Seat> = seats
            .get(event_id)
            .map(|list| {
                list.iter()
                    .filter(|seat| seat.status == SeatStatus::Open)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        open.sort_by_key(|seat| seat.sell_rank);
        open.truncate(quantity);
        Ok(open)
    }

    /// Every known event, ordered by the given sort token.
    ///
    /// `"name"` sorts by name ascending (case-insensitive), `"date"` by
    /// date ascending; any other token, or none, keeps load order. Always a
    /// stable sort.
    pub fn get_all_events(&self, sort: Option<&str>) -> Result<Vec<Event>, StoreError> {
        let events = self
            .events
            .read()
            .map_err(|_| StoreError::LockPoisoned("events read"))?;
        let mut listed = events.clone();
        if let Some(token) = sort {
            if token.eq_ignore_ascii_case(SORT_BY_NAME) {
                listed.sort_by(|a, b| {
                    a.name
                        .to_lowercase()
                        .cmp(&b.name.to_lowercase())
                });
            } else if token.eq_ignore_ascii_case(SORT_BY_DATE) {
                listed.sort_by(|a, b| a.event_date.cmp(&b.event_date));
            }
        }
        Ok(listed)
    }

    /// Flip the matching seat to `Hold`, returning whether a seat matched.
    ///
    /// Only the reservation engine calls this, while holding the event's
    /// lock from the pool.
    pub fn hold_seat(&self, event_id: &str, request: &SeatRequest) -> Result<bool, StoreError> {
        let mut seats = self
            .event_seats
            .write()
            .map_err(|_| StoreError::LockPoisoned("seats write"))?;
        if let Some(list) = seats.get_mut(event_id) {
            if let Some(seat) = list.iter_mut().find(|seat| seat.matches(request)) {
                seat.status = SeatStatus::Hold;
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Default for SeatStore {
    fn default() -> Self {
        Self::new()
    }
}

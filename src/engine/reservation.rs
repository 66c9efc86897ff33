use std::sync::Arc;

use tracing::warn;

use crate::event::Event;
use crate::lock::LockPool;
use crate::seat::{Seat, SeatRequest};
use crate::store::SeatStore;

use super::ReserveError;

/// Orchestrates seat reservations against one shared store and lock pool.
///
/// Construct once at startup and share by `Arc`/reference; the engine keeps
/// no state of its own beyond the two collaborators.
pub struct ReservationEngine {
    store: Arc<SeatStore>,
    locks: Arc<LockPool>,
}

impl ReservationEngine {
    pub fn new(store: Arc<SeatStore>, locks: Arc<LockPool>) -> Self {
        ReservationEngine { store, locks }
    }

    pub fn store(&self) -> &SeatStore {
        &self.store
    }

    /// Every known event, ordered by the optional sort token.
    pub fn get_all_events(&self, sort: Option<&str>) -> Result<Vec<Event>, ReserveError> {
        Ok(self.store.get_all_events(sort)?)
    }

    /// Look up one seat by compound key within a known event.
    pub fn get_seat(
        &self,
        event_id: &str,
        request: &SeatRequest,
    ) -> Result<Option<Seat>, ReserveError> {
        self.require_event(event_id)?;
        Ok(self.store.get_seat(event_id, request)?)
    }

    /// The best open seats of a known event, at most `quantity` of them.
    pub fn get_best_seats(
        &self,
        event_id: &str,
        quantity: usize,
    ) -> Result<Vec<Seat>, ReserveError> {
        self.require_event(event_id)?;
        Ok(self.store.get_best_seats(event_id, quantity)?)
    }

    /// Reserve a batch of seats for one event.
    ///
    /// Outer validation runs without the event lock: the event must exist,
    /// then every requested seat must exist, then every requested seat must
    /// be open; each pass stops at its first failure. The commit pass then
    /// runs under the event's lock, re-checking availability per request in
    /// caller order before flipping it to `Hold`. A request found taken
    /// mid-pass aborts with `SeatUnavailable`; seats already flipped
    /// earlier in that pass stay held.
    pub fn reserve(&self, event_id: &str, requests: &[SeatRequest]) -> Result<(), ReserveError> {
        self.require_event(event_id)?;
        self.require_seats_exist(event_id, requests)?;
        self.require_seats_available(event_id, requests)?;

        let handle = self.locks.acquire(event_id)?;
        let outcome = self.commit_batch(event_id, requests);
        self.locks.release(handle)?;
        outcome
    }

    fn require_event(&self, event_id: &str) -> Result<(), ReserveError> {
        if !self.store.event_exists(event_id)? {
            warn!(event_id, "event not found");
            return Err(ReserveError::EventNotFound(event_id.to_string()));
        }
        Ok(())
    }

    fn require_seats_exist(
        &self,
        event_id: &str,
        requests: &[SeatRequest],
    ) -> Result<(), ReserveError> {
        for request in requests {
            if !self.store.seat_exists(event_id, request)? {
                warn!(
                    seat_number = %request.seat_number,
                    row = %request.row,
                    level = %request.level,
                    section = %request.section,
                    "requested seat does not exist"
                );
                return Err(ReserveError::SeatNotFound(request.clone()));
            }
        }
        Ok(())
    }

    fn require_seats_available(
        &self,
        event_id: &str,
        requests: &[SeatRequest],
    ) -> Result<(), ReserveError> {
        for request in requests {
            if !self.store.seat_available(event_id, request)? {
                warn!(
                    seat_number = %request.seat_number,
                    row = %request.row,
                    level = %request.level,
                    section = %request.section,
                    "requested seat is already reserved"
                );
                return Err(ReserveError::SeatUnavailable(request.clone()));
            }
        }
        Ok(())
    }

    /// The lock-protected pass. Re-checks each request because the store
    /// may have changed between outer validation and lock grant.
    fn commit_batch(&self, event_id: &str, requests: &[SeatRequest]) -> Result<(), ReserveError> {
        for request in requests {
            if !self.store.seat_available(event_id, request)? {
                warn!(
                    seat_number = %request.seat_number,
                    row = %request.row,
                    level = %request.level,
                    section = %request.section,
                    "seat taken between validation and commit"
                );
                return Err(ReserveError::SeatUnavailable(request.clone()));
            }
            if !self.store.hold_seat(event_id, request)? {
                return Err(ReserveError::SeatNotFound(request.clone()));
            }
        }
        Ok(())
    }
}

//! Reservation Engine — validate-then-commit seat holds, serialized per
//! event.
//!
//! The engine is the only writer of seat status. A `reserve` call runs an
//! exhaustive outer validation without any lock, then takes the event's
//! lock from the pool and re-checks each request as it flips seats to
//! `Hold`, releasing the lock on every exit path.

mod error;
mod reservation;

pub use error::ReserveError;
pub use reservation::ReservationEngine;

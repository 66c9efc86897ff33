use std::fmt;

use crate::lock::LockError;
use crate::seat::SeatRequest;
use crate::store::StoreError;

/// Error type for reservation engine operations.
///
/// The first three variants are the domain taxonomy surfaced to callers;
/// `Store` and `Lock` carry internal plumbing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveError {
    /// The event identifier is unknown to the catalog.
    EventNotFound(String),
    /// No seat in the event matches the request's compound key.
    SeatNotFound(SeatRequest),
    /// A matching seat exists but is no longer open.
    SeatUnavailable(SeatRequest),
    /// Seat store failure.
    Store(StoreError),
    /// Lock pool failure.
    Lock(LockError),
}

impl fmt::Display for ReserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReserveError::EventNotFound(event_id) => {
                write!(f, "event with id {} not found", event_id)
            }
            ReserveError::SeatNotFound(request) => write!(
                f,
                "seat '{}' in row '{}' in level '{}' in section '{}' does not exist",
                request.seat_number, request.row, request.level, request.section
            ),
            ReserveError::SeatUnavailable(request) => write!(
                f,
                "seat '{}' in row '{}' in level '{}' in section '{}' is already reserved",
                request.seat_number, request.row, request.level, request.section
            ),
            ReserveError::Store(e) => write!(f, "store error: {}", e),
            ReserveError::Lock(e) => write!(f, "lock error: {}", e),
        }
    }
}

impl std::error::Error for ReserveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReserveError::Store(e) => Some(e),
            ReserveError::Lock(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ReserveError {
    fn from(err: StoreError) -> Self {
        ReserveError::Store(err)
    }
}

impl From<LockError> for ReserveError {
    fn from(err: LockError) -> Self {
        ReserveError::Lock(err)
    }
}

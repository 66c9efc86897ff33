//! Seat Inventory Store — the authoritative per-event seat collections.
//!
//! `SeatStore` maps an event identifier to its ordered seat list and answers
//! existence, availability, lookup and best-seat queries. Reads never take
//! the per-event reservation lock; they only go through the store's own
//! `RwLock`, so they may run concurrently with an in-flight commit and
//! observe a batch mid-transition.

mod error;
mod seat_store;

pub use error::StoreError;
pub use seat_store::{SeatStore, SORT_BY_DATE, SORT_BY_NAME};

//! Lock Pool — reference-counted per-event mutual exclusion.
//!
//! `LockPool` hands out one `Lock` per event identifier. Each pool entry
//! carries a live-holder count so entries are created on first contention
//! and removed once no in-flight reservation attempt references them; the
//! pool's size tracks the events currently being contended for, not every
//! event ever reserved against.

mod error;
mod lock;
mod pool;

pub use error::LockError;
pub use lock::Lock;
pub use pool::{LockHandle, LockPool};

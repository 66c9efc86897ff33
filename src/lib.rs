mod engine;
mod event;
mod http;
mod loader;
mod lock;
mod seat;
mod store;

pub use engine::{ReservationEngine, ReserveError};
pub use event::Event;
pub use http::{ApiResponse, SeatDto};
pub use loader::{load_csv, load_csv_file, LoaderError};
pub use lock::{Lock, LockError, LockHandle, LockPool};
pub use seat::{Seat, SeatRequest, SeatStatus};
pub use store::{SeatStore, StoreError, SORT_BY_DATE, SORT_BY_NAME};

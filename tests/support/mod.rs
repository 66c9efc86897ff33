use std::sync::Arc;

use chrono::NaiveDate;

use boxoffice_rust::{
    Event, LockPool, ReservationEngine, Seat, SeatRequest, SeatStatus, SeatStore,
};

pub fn date(d: &str) -> NaiveDate {
    NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()
}

pub fn seat(number: &str, row: &str, status: SeatStatus, sell_rank: i32) -> Seat {
    Seat {
        seat_number: number.to_string(),
        row: row.to_string(),
        level: "1".to_string(),
        section: "Ground".to_string(),
        status,
        sell_rank,
        has_upsells: false,
    }
}

pub fn request(number: &str, row: &str) -> SeatRequest {
    SeatRequest::new(number, row, "1", "Ground")
}

/// Catalog used across the integration tests:
/// - "1000" / "Event 001" on 2025-06-01, one open seat
/// - "2000" / "Event 002" on 2025-01-15 (the earlier date), one open seat
/// - "3001" / "Event 003" with open seats at sell ranks 2, 4 and 9 plus one
///   already-held seat
pub fn seeded_store() -> Arc<SeatStore> {
    let store = SeatStore::new();

    store
        .add_event(Event::new("1000", "Event 001", date("2025-06-01")))
        .unwrap();
    store
        .add_event(Event::new("2000", "Event 002", date("2025-01-15")))
        .unwrap();
    store
        .add_event(Event::new("3001", "Event 003", date("2025-03-10")))
        .unwrap();

    store
        .add_seat("1000", seat("9", "AA", SeatStatus::Open, 1))
        .unwrap();
    store
        .add_seat("2000", seat("1", "A", SeatStatus::Open, 1))
        .unwrap();
    store
        .add_seat("3001", seat("1", "A", SeatStatus::Open, 2))
        .unwrap();
    store
        .add_seat("3001", seat("2", "A", SeatStatus::Open, 4))
        .unwrap();
    store
        .add_seat("3001", seat("3", "B", SeatStatus::Open, 9))
        .unwrap();
    store
        .add_seat("3001", seat("4", "B", SeatStatus::Hold, 3))
        .unwrap();

    Arc::new(store)
}

pub fn engine(store: Arc<SeatStore>) -> (ReservationEngine, Arc<LockPool>) {
    let locks = Arc::new(LockPool::new());
    (ReservationEngine::new(store, Arc::clone(&locks)), locks)
}

use serde::{Deserialize, Serialize};

/// Lifecycle status of a seat.
///
/// The only transition any operation performs is `Open -> Hold`. `Sold` is
/// representable so loaded data can carry it, but nothing in the engine
/// produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    Open,
    Hold,
    Sold,
}

impl SeatStatus {
    /// Parse the uppercase token used by the bulk-load data.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "OPEN" => Some(SeatStatus::Open),
            "HOLD" => Some(SeatStatus::Hold),
            "SOLD" => Some(SeatStatus::Sold),
            _ => None,
        }
    }
}

/// One inventory unit within an event.
///
/// `seat_number`, `row`, `level` and `section` together form the compound
/// key, unique within an event. Only `status` is ever mutated, and only by
/// the reservation engine while holding that event's lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub seat_number: String,
    pub row: String,
    pub level: String,
    pub section: String,
    pub status: SeatStatus,
    pub sell_rank: i32,
    pub has_upsells: bool,
}

impl Seat {
    /// Whether this seat matches the compound key of the given request.
    pub fn matches(&self, request: &SeatRequest) -> bool {
        self.seat_number == request.seat_number
            && self.row == request.row
            && self.level == request.level
            && self.section == request.section
    }
}

/// The four-field compound key identifying one seat within an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRequest {
    pub seat_number: String,
    pub row: String,
    pub level: String,
    pub section: String,
}

impl SeatRequest {
    pub fn new(
        seat_number: impl Into<String>,
        row: impl Into<String>,
        level: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        SeatRequest {
            seat_number: seat_number.into(),
            row: row.into(),
            level: level.into(),
            section: section.into(),
        }
    }
}

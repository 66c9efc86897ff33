//! Framework-agnostic HTTP request/response types for the adapter layer.
//!
//! These types bridge HTTP frameworks (axum, actix-web, etc.) and the
//! reservation engine. The library stays framework-agnostic — the actual
//! HTTP server is wired by the consumer, which only needs the status code
//! and JSON body produced here.

use serde::{Deserialize, Serialize};

use crate::engine::ReserveError;
use crate::seat::{Seat, SeatStatus};

/// Seat shape returned to clients: the compound key plus status, without
/// the internal ranking fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatDto {
    pub seat_number: String,
    pub row: String,
    pub level: String,
    pub section: String,
    pub status: SeatStatus,
}

impl From<&Seat> for SeatDto {
    fn from(seat: &Seat) -> Self {
        SeatDto {
            seat_number: seat.seat_number.clone(),
            row: seat.row.clone(),
            level: seat.level.clone(),
            section: seat.section.clone(),
            status: seat.status,
        }
    }
}

/// The response an HTTP adapter should emit for an engine outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body (success payload or error message).
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Build a success (200) response with the given payload.
    pub fn ok(body: serde_json::Value) -> Self {
        ApiResponse { status: 200, body }
    }

    /// Build a created (201) response, used by successful reservations.
    pub fn created() -> Self {
        ApiResponse {
            status: 201,
            body: serde_json::json!({ "reserved": true }),
        }
    }

    /// Map an engine error onto its transport status code.
    ///
    /// Unknown event is 404, a seat that does not exist is a 400 (the
    /// request named something that was never loaded), a seat already
    /// taken is a 409 conflict, and plumbing failures are 500s.
    pub fn from_error(err: &ReserveError) -> Self {
        let status = match err {
            ReserveError::EventNotFound(_) => 404,
            ReserveError::SeatNotFound(_) => 400,
            ReserveError::SeatUnavailable(_) => 409,
            ReserveError::Store(_) | ReserveError::Lock(_) => 500,
        };
        ApiResponse {
            status,
            body: serde_json::json!({ "error": err.to_string() }),
        }
    }
}

impl From<&ReserveError> for ApiResponse {
    fn from(err: &ReserveError) -> Self {
        Self::from_error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat::SeatRequest;

    #[test]
    fn seat_dto_drops_ranking_fields() {
        let seat = Seat {
            seat_number: "9".to_string(),
            row: "AA".to_string(),
            level: "1".to_string(),
            section: "Ground".to_string(),
            status: SeatStatus::Open,
            sell_rank: 2,
            has_upsells: true,
        };
        let dto = SeatDto::from(&seat);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["seatNumber"], "9");
        assert_eq!(json["status"], "OPEN");
        assert!(json.get("sellRank").is_none());
        assert!(json.get("hasUpsells").is_none());
    }

    #[test]
    fn errors_map_to_expected_status_codes() {
        let request = SeatRequest::new("9", "AA", "1", "Ground");
        assert_eq!(
            ApiResponse::from_error(&ReserveError::EventNotFound("42".into())).status,
            404
        );
        assert_eq!(
            ApiResponse::from_error(&ReserveError::SeatNotFound(request.clone())).status,
            400
        );
        assert_eq!(
            ApiResponse::from_error(&ReserveError::SeatUnavailable(request)).status,
            409
        );
    }

    #[test]
    fn created_response_for_successful_reserve() {
        let response = ApiResponse::created();
        assert_eq!(response.status, 201);
        assert_eq!(response.body["reserved"], true);
    }
}

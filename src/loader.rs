//! Bulk CSV ingestion populating the seat store at startup.
//!
//! One row per seat: `eventId, seatNumber, row, level, section, status,
//! eventDate, sellRank, hasUpsells`, with a header line first. Events are
//! derived from the rows, deduplicated by id in first-seen order, with the
//! display name `Event NNN` built from the numeric id. Validation of the
//! input lives here; the store assumes well-formed data once loaded.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::Event;
use crate::seat::{Seat, SeatStatus};
use crate::store::{SeatStore, StoreError};

const COLUMNS: usize = 9;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Error type for bulk-load failures, carrying the offending line number.
#[derive(Debug)]
pub enum LoaderError {
    Io(io::Error),
    MissingColumns { line: usize, found: usize },
    BadStatus { line: usize, token: String },
    BadDate { line: usize, value: String },
    BadNumber { line: usize, value: String },
    Store(StoreError),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Io(e) => write!(f, "csv read failed: {}", e),
            LoaderError::MissingColumns { line, found } => write!(
                f,
                "line {}: expected {} columns, found {}",
                line, COLUMNS, found
            ),
            LoaderError::BadStatus { line, token } => {
                write!(f, "line {}: unknown seat status '{}'", line, token)
            }
            LoaderError::BadDate { line, value } => {
                write!(f, "line {}: unparseable event date '{}'", line, value)
            }
            LoaderError::BadNumber { line, value } => {
                write!(f, "line {}: unparseable number '{}'", line, value)
            }
            LoaderError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Io(e) => Some(e),
            LoaderError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoaderError {
    fn from(err: io::Error) -> Self {
        LoaderError::Io(err)
    }
}

impl From<StoreError> for LoaderError {
    fn from(err: StoreError) -> Self {
        LoaderError::Store(err)
    }
}

/// Load seat data from a CSV file into the store.
pub fn load_csv_file(store: &SeatStore, path: impl AsRef<Path>) -> Result<usize, LoaderError> {
    load_csv(store, File::open(path)?)
}

/// Load seat data from any CSV reader into the store.
///
/// The first line is a header and is skipped; blank lines are ignored.
/// Returns the number of seats loaded.
pub fn load_csv<R: Read>(store: &SeatStore, reader: R) -> Result<usize, LoaderError> {
    let mut loaded = 0;
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let number = index + 1;
        if number == 1 || line.trim().is_empty() {
            continue;
        }
        let row = parse_row(number, &line)?;
        store.add_event(Event::new(
            row.event_id.clone(),
            row.event_name,
            row.event_date,
        ))?;
        store.add_seat(&row.event_id, row.seat)?;
        loaded += 1;
    }
    Ok(loaded)
}

struct SeatRow {
    event_id: String,
    event_name: String,
    event_date: NaiveDate,
    seat: Seat,
}

fn parse_row(number: usize, line: &str) -> Result<SeatRow, LoaderError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < COLUMNS {
        return Err(LoaderError::MissingColumns {
            line: number,
            found: fields.len(),
        });
    }

    let event_id = fields[0].to_string();
    let status =
        SeatStatus::parse(fields[5]).ok_or_else(|| LoaderError::BadStatus {
            line: number,
            token: fields[5].to_string(),
        })?;
    let event_date = NaiveDateTime::parse_from_str(fields[6], DATE_FORMAT)
        .map(|dt| dt.date())
        .map_err(|_| LoaderError::BadDate {
            line: number,
            value: fields[6].to_string(),
        })?;
    let sell_rank: i32 = fields[7].parse().map_err(|_| LoaderError::BadNumber {
        line: number,
        value: fields[7].to_string(),
    })?;
    let event_number: u32 = event_id.parse().map_err(|_| LoaderError::BadNumber {
        line: number,
        value: event_id.clone(),
    })?;

    Ok(SeatRow {
        event_name: format!("Event {:03}", event_number),
        event_date,
        seat: Seat {
            seat_number: fields[1].to_string(),
            row: fields[2].to_string(),
            level: fields[3].to_string(),
            section: fields[4].to_string(),
            status,
            sell_rank,
            has_upsells: fields[8].eq_ignore_ascii_case("true"),
        },
        event_id,
    })
}

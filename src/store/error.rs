use std::fmt;

/// Error type for seat store operations.
///
/// The store reports absence through booleans and options; the only thing
/// that can actually fail here is its internal locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "seat store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

use std::fmt;

/// Error type for lock pool operations.
///
/// Acquire and release cannot fail as domain operations; the only failure
/// mode is a poisoned internal mutex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockError {
    Poisoned(&'static str),
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::Poisoned(what) => write!(f, "lock poisoned: {}", what),
        }
    }
}

impl std::error::Error for LockError {}

use std::sync::{Condvar, Mutex};

use super::LockError;

/// A single mutual-exclusion handle backed by `Mutex<bool>` + `Condvar`.
///
/// Unlike `MutexGuard`, acquisition and release are decoupled calls, which
/// is what the pool needs: the thread that blocks in `acquire` releases
/// from a different stack frame than the one holding any guard.
pub struct Lock {
    held: Mutex<bool>,
    wake: Condvar,
}

impl Lock {
    pub fn new() -> Self {
        Lock {
            held: Mutex::new(false),
            wake: Condvar::new(),
        }
    }

    /// Block until the lock becomes available, then take it.
    pub fn lock(&self) -> Result<(), LockError> {
        let mut held = self
            .held
            .lock()
            .map_err(|_| LockError::Poisoned("lock state"))?;
        while *held {
            held = self
                .wake
                .wait(held)
                .map_err(|_| LockError::Poisoned("lock wait"))?;
        }
        *held = true;
        Ok(())
    }

    /// Take the lock without blocking. Returns whether it was acquired.
    pub fn try_lock(&self) -> Result<bool, LockError> {
        let mut held = self
            .held
            .lock()
            .map_err(|_| LockError::Poisoned("lock state"))?;
        if *held {
            Ok(false)
        } else {
            *held = true;
            Ok(true)
        }
    }

    /// Release the lock and wake one waiter.
    pub fn unlock(&self) -> Result<(), LockError> {
        let mut held = self
            .held
            .lock()
            .map_err(|_| LockError::Poisoned("lock state"))?;
        if *held {
            *held = false;
            self.wake.notify_one();
        }
        Ok(())
    }
}

impl Default for Lock {
    fn default() -> Self {
        Self::new()
    }
}

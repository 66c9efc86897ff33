use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{Lock, LockError};

/// One pool entry: the event's lock plus the count of threads currently
/// waiting on or holding it.
struct PoolEntry {
    lock: Lock,
    holders: AtomicUsize,
}

/// Proof of a granted acquisition, consumed by [`LockPool::release`].
pub struct LockHandle {
    event_id: String,
    entry: Arc<PoolEntry>,
}

impl LockHandle {
    pub fn event_id(&self) -> &str {
        &self.event_id
    }
}

/// Reference-counted registry of per-event locks.
///
/// The map mutex guards entry creation, the holder counts, and entry
/// removal; the blocking wait on the per-event lock itself happens outside
/// it, so contention on one event never stalls acquisition for another.
pub struct LockPool {
    entries: Mutex<HashMap<String, Arc<PoolEntry>>>,
}

impl LockPool {
    pub fn new() -> Self {
        LockPool {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Acquire the lock for `event_id`, creating a pool entry on first
    /// contention, and block until it is granted.
    ///
    /// The holder count is incremented before the blocking wait, so a
    /// concurrent release can never remove an entry this thread is about
    /// to wait on.
    pub fn acquire(&self, event_id: &str) -> Result<LockHandle, LockError> {
        let entry = {
            let mut entries = self
                .entries
                .lock()
                .map_err(|_| LockError::Poisoned("pool map"))?;
            let entry = entries
                .entry(event_id.to_string())
                .or_insert_with(|| {
                    Arc::new(PoolEntry {
                        lock: Lock::new(),
                        holders: AtomicUsize::new(0),
                    })
                })
                .clone();
            entry.holders.fetch_add(1, Ordering::SeqCst);
            entry
        };

        entry.lock.lock()?;
        Ok(LockHandle {
            event_id: event_id.to_string(),
            entry,
        })
    }

    /// Release a granted lock; the last holder out removes the pool entry.
    ///
    /// The removal only happens if the map still points at the handle's own
    /// entry, so a fresh entry created for the same event id after removal
    /// is never torn down by a stale handle.
    pub fn release(&self, handle: LockHandle) -> Result<(), LockError> {
        handle.entry.lock.unlock()?;

        let mut entries = self
            .entries
            .lock()
            .map_err(|_| LockError::Poisoned("pool map"))?;
        if handle.entry.holders.fetch_sub(1, Ordering::SeqCst) == 1 {
            if let Some(current) = entries.get(&handle.event_id) {
                if Arc::ptr_eq(current, &handle.entry) {
                    entries.remove(&handle.event_id);
                }
            }
        }
        Ok(())
    }

    /// Whether the pool currently tracks an entry for `event_id`.
    pub fn contains(&self, event_id: &str) -> Result<bool, LockError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| LockError::Poisoned("pool map"))?;
        Ok(entries.contains_key(event_id))
    }

    /// Number of events currently contended for.
    pub fn len(&self) -> Result<usize, LockError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| LockError::Poisoned("pool map"))?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, LockError> {
        Ok(self.len()? == 0)
    }
}

impl Default for LockPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn acquire_release_removes_entry() {
        let pool = LockPool::new();
        let handle = pool.acquire("3001").unwrap();
        assert!(pool.contains("3001").unwrap());
        pool.release(handle).unwrap();
        assert!(!pool.contains("3001").unwrap());
        assert!(pool.is_empty().unwrap());
    }

    #[test]
    fn entry_survives_while_another_holder_is_live() {
        let pool = Arc::new(LockPool::new());
        let handle = pool.acquire("3001").unwrap();

        let waiter = {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                let handle = pool.acquire("3001").unwrap();
                pool.release(handle).unwrap();
            })
        };

        // Give the waiter time to register interest and block.
        thread::sleep(std::time::Duration::from_millis(50));
        assert!(pool.contains("3001").unwrap());
        pool.release(handle).unwrap();
        waiter.join().unwrap();
        assert!(!pool.contains("3001").unwrap());
    }

    #[test]
    fn different_events_use_independent_locks() {
        let pool = LockPool::new();
        let a = pool.acquire("1000").unwrap();
        let b = pool.acquire("2000").unwrap();
        assert_eq!(pool.len().unwrap(), 2);
        pool.release(a).unwrap();
        pool.release(b).unwrap();
        assert!(pool.is_empty().unwrap());
    }

    #[test]
    fn reacquire_after_cleanup_creates_fresh_entry() {
        let pool = LockPool::new();
        let first = pool.acquire("3001").unwrap();
        pool.release(first).unwrap();
        let second = pool.acquire("3001").unwrap();
        assert!(pool.contains("3001").unwrap());
        pool.release(second).unwrap();
        assert!(!pool.contains("3001").unwrap());
    }

    #[test]
    fn contended_acquires_serialize() {
        let pool = Arc::new(LockPool::new());
        let counter = Arc::new(Mutex::new(0u32));
        let mut joins = Vec::new();

        for _ in 0..8 {
            let pool = Arc::clone(&pool);
            let counter = Arc::clone(&counter);
            joins.push(thread::spawn(move || {
                let handle = pool.acquire("3001").unwrap();
                {
                    let mut count = counter.lock().unwrap();
                    *count += 1;
                }
                pool.release(handle).unwrap();
            }));
        }
        for join in joins {
            join.join().unwrap();
        }

        assert_eq!(*counter.lock().unwrap(), 8);
        assert!(pool.is_empty().unwrap());
    }
}

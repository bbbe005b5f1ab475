//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::clock::Clock;
use crate::persistence::{InMemoryKeyValueStore, KeyValueStore, PersistenceError};

/// In-memory store whose writes can be made to fail on demand.
#[derive(Debug, Clone, Default)]
pub struct FlakyKeyValueStore {
    inner: InMemoryKeyValueStore,
    failing: Arc<AtomicBool>,
    /// Writes still allowed before every later one fails. `None` is unlimited.
    write_budget: Arc<Mutex<Option<usize>>>,
}

impl FlakyKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Let `writes` more `set`/`remove` calls succeed, then fail the rest.
    pub fn fail_after_writes(&self, writes: usize) {
        if let Ok(mut budget) = self.write_budget.lock() {
            *budget = Some(writes);
        }
    }

    fn check(&self) -> Result<(), PersistenceError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable("quota exceeded".into()));
        }
        if let Ok(mut budget) = self.write_budget.lock() {
            match budget.as_mut() {
                Some(0) => {
                    return Err(PersistenceError::Unavailable("quota exceeded".into()));
                }
                Some(remaining) => *remaining -= 1,
                None => {}
            }
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        self.check()?;
        self.inner.remove(key)
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        let start = Utc
            .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .unwrap_or_default();
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.lock().map(|now| *now).unwrap_or_default()
    }
}

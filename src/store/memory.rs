//! In-memory store, used to exercise the workflows without touching disk.

use super::{EventLogStore, RosterStore};
use crate::errors::{AppError, AppResult};
use crate::models::{Driver, Event};
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct MemoryStore {
    drivers: Mutex<Vec<Driver>>,
    events: Mutex<Vec<Event>>,
    fail_event_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new(drivers: Vec<Driver>, events: Vec<Event>) -> Self {
        Self {
            drivers: Mutex::new(drivers),
            events: Mutex::new(events),
            fail_event_writes: AtomicBool::new(false),
        }
    }

    pub fn with_drivers(drivers: Vec<Driver>) -> Self {
        Self::new(drivers, Vec::new())
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self::new(Vec::new(), events)
    }

    /// Make every following `save_events` fail with an I/O error.
    pub fn fail_event_writes(&self, fail: bool) {
        self.fail_event_writes.store(fail, Ordering::SeqCst);
    }

    pub fn drivers(&self) -> Vec<Driver> {
        self.drivers.lock().map(|d| d.clone()).unwrap_or_default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

fn poisoned() -> AppError {
    AppError::Other("memory store lock poisoned".into())
}

impl RosterStore for MemoryStore {
    fn load_drivers(&self) -> AppResult<Vec<Driver>> {
        Ok(self.drivers.lock().map_err(|_| poisoned())?.clone())
    }

    fn save_drivers(&self, drivers: &[Driver]) -> AppResult<()> {
        *self.drivers.lock().map_err(|_| poisoned())? = drivers.to_vec();
        Ok(())
    }
}

impl EventLogStore for MemoryStore {
    fn load_events(&self) -> AppResult<Vec<Event>> {
        Ok(self.events.lock().map_err(|_| poisoned())?.clone())
    }

    fn save_events(&self, events: &[Event]) -> AppResult<()> {
        if self.fail_event_writes.load(Ordering::SeqCst) {
            return Err(io::Error::other("event log write disabled").into());
        }
        *self.events.lock().map_err(|_| poisoned())? = events.to_vec();
        Ok(())
    }
}

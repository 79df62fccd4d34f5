//! Persistence of the two tables (roster and event log).
//!
//! Stores only load and save whole snapshots; every operation is
//! load → mutate in memory → save. The snapshot helpers in [`roster`] and
//! [`history`] perform the in-memory mutation.

pub mod csv_store;
pub mod history;
pub mod log;
pub mod memory;
pub mod roster;

use crate::errors::AppResult;
use crate::models::{Driver, Event};

pub use csv_store::CsvStore;
pub use memory::MemoryStore;

/// Backing table of drivers.
pub trait RosterStore {
    /// Full table in file order. A missing table is an empty roster.
    fn load_drivers(&self) -> AppResult<Vec<Driver>>;

    /// Overwrite the whole table with `drivers`, header first.
    fn save_drivers(&self, drivers: &[Driver]) -> AppResult<()>;
}

/// Backing table of movement events, ordered by insertion.
pub trait EventLogStore {
    /// Full table in file order. A missing table is an empty history.
    fn load_events(&self) -> AppResult<Vec<Event>>;

    /// Overwrite the whole table with `events`, header first.
    fn save_events(&self, events: &[Event]) -> AppResult<()>;
}

/// Both tables behind one handle, as the web server holds them.
pub trait FleetStore: RosterStore + EventLogStore + Send + Sync {}

impl<T> FleetStore for T where T: RosterStore + EventLogStore + Send + Sync {}

use crate::errors::AppResult;
use crate::models::Driver;
use crate::store::{RosterStore, roster};

/// Maintenance of the roster outside of registrations.
pub struct RosterLogic;

impl RosterLogic {
    /// Add an available driver; names stay unique.
    pub fn add<R: RosterStore + ?Sized>(
        store: &R,
        name: &str,
        id: Option<&str>,
    ) -> AppResult<Driver> {
        let mut drivers = store.load_drivers()?;
        let driver = roster::add_driver(&mut drivers, name, id)?;
        store.save_drivers(&drivers)?;
        Ok(driver)
    }
}

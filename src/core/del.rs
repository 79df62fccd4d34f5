use crate::errors::{AppError, AppResult};
use crate::models::Event;
use crate::store::{EventLogStore, history};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the event at `index` and return it. Every later event moves
    /// down one position. An unknown position leaves the table unwritten.
    pub fn apply<H: EventLogStore + ?Sized>(store: &H, index: usize) -> AppResult<Event> {
        let mut events = store.load_events()?;
        let len = events.len();

        let removed =
            history::delete_at(&mut events, index).ok_or(AppError::NotFound { index, len })?;
        store.save_events(&events)?;

        Ok(removed)
    }
}

use crate::core::require;
use crate::errors::AppResult;
use crate::models::{Event, EventPatch};
use crate::store::{EventLogStore, history};

/// Edit events in place, addressed by position.
///
/// Edits never touch the roster: a driver's status follows registrations only.
pub struct EditLogic;

impl EditLogic {
    pub fn get<H: EventLogStore + ?Sized>(store: &H, index: usize) -> AppResult<Event> {
        let events = store.load_events()?;
        Ok(history::get_at(&events, index)?.clone())
    }

    /// Replace every field of the event at `index`.
    pub fn replace<H: EventLogStore + ?Sized>(
        store: &H,
        index: usize,
        event: Event,
    ) -> AppResult<Event> {
        require("nombre", &event.name)?;
        require("accion", &event.action)?;

        let mut events = store.load_events()?;
        history::replace_at(&mut events, index, event.clone())?;
        store.save_events(&events)?;

        Ok(event)
    }

    /// Overwrite only the fields present in `patch`.
    pub fn patch<H: EventLogStore + ?Sized>(
        store: &H,
        index: usize,
        patch: EventPatch,
    ) -> AppResult<Event> {
        let mut events = store.load_events()?;
        let updated = patch.apply_to(history::get_at(&events, index)?);

        require("nombre", &updated.name)?;
        require("accion", &updated.action)?;

        history::replace_at(&mut events, index, updated.clone())?;
        store.save_events(&events)?;

        Ok(updated)
    }
}

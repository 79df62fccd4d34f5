//! In-memory operations on an event log snapshot.
//!
//! Events are addressed by position only. Removing one shifts every later
//! event down by one.

use crate::errors::{AppError, AppResult};
use crate::models::Event;

/// Push `event` at the end and return its position.
pub fn append(events: &mut Vec<Event>, event: Event) -> usize {
    events.push(event);
    events.len() - 1
}

/// Remove the event at `index`. Out of range is a no-op returning `None`.
pub fn delete_at(events: &mut Vec<Event>, index: usize) -> Option<Event> {
    if index < events.len() {
        Some(events.remove(index))
    } else {
        None
    }
}

/// Overwrite the event at `index`, returning the previous one.
pub fn replace_at(events: &mut [Event], index: usize, event: Event) -> AppResult<Event> {
    let len = events.len();
    let slot = events
        .get_mut(index)
        .ok_or(AppError::NotFound { index, len })?;
    Ok(std::mem::replace(slot, event))
}

pub fn get_at(events: &[Event], index: usize) -> AppResult<&Event> {
    events.get(index).ok_or(AppError::NotFound {
        index,
        len: events.len(),
    })
}

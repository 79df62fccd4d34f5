use crate::core::require;
use crate::errors::AppResult;
use crate::models::{Event, MovementKind};
use crate::store::roster::set_status_by_name;
use crate::store::{EventLogStore, RosterStore, history};
use crate::utils::time::resolve_timestamp;
use chrono::{DateTime, FixedOffset};

/// Raw values of a movement to register.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub action: String,
    pub kind: MovementKind,
    pub time: Option<String>,
    pub date: Option<String>,
    pub destination: String,
    pub union_rep: String,
    pub rationale: String,
    pub transport_request: String,
    pub directed_by: String,
}

impl RegisterRequest {
    /// Request with empty context fields; the movement kind is derived from
    /// `action`.
    pub fn new(name: impl Into<String>, action: impl Into<String>, departure_action: &str) -> Self {
        let action = action.into();
        Self {
            name: name.into(),
            kind: MovementKind::from_action(&action, departure_action),
            action,
            time: None,
            date: None,
            destination: String::new(),
            union_rep: String::new(),
            rationale: String::new(),
            transport_request: String::new(),
            directed_by: String::new(),
        }
    }
}

/// Outcome of a registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub event: Event,
    /// Position of the new event in the log.
    pub index: usize,
    /// False when no roster row carries the event's name.
    pub driver_found: bool,
}

/// High-level business logic for registering a movement.
pub struct RegisterLogic;

impl RegisterLogic {
    /// Validate, stamp, update the driver's status, then append to the log.
    ///
    /// Nothing is written when validation fails. The two tables are saved one
    /// after the other: a failure while saving the log leaves the roster
    /// already updated.
    pub fn apply<R, H>(
        roster: &R,
        history_store: &H,
        req: RegisterRequest,
        now: DateTime<FixedOffset>,
    ) -> AppResult<Registration>
    where
        R: RosterStore + ?Sized,
        H: EventLogStore + ?Sized,
    {
        require("nombre", &req.name)?;
        require("accion", &req.action)?;

        let (time, date) = resolve_timestamp(req.time.as_deref(), req.date.as_deref(), &now);

        let mut drivers = roster.load_drivers()?;
        let driver_found =
            set_status_by_name(&mut drivers, &req.name, req.kind.resulting_status());
        if driver_found {
            roster.save_drivers(&drivers)?;
        }

        let event = Event {
            name: req.name,
            time,
            date,
            action: req.action,
            union_rep: req.union_rep,
            destination: req.destination,
            rationale: req.rationale,
            transport_request: req.transport_request,
            directed_by: req.directed_by,
        };

        let mut events = history_store.load_events()?;
        let index = history::append(&mut events, event.clone());
        history_store.save_events(&events)?;

        Ok(Registration {
            event,
            index,
            driver_found,
        })
    }
}

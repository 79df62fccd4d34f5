use super::driver_status::DriverStatus;

/// Action text that marks a departure unless the configuration says otherwise.
pub const DEFAULT_DEPARTURE_ACTION: &str = "salida";

/// Direction of a movement event.
///
/// The stored `accion` column stays free text; the kind is resolved once at the
/// request boundary and is the only thing the roster update looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    Departure,
    Return,
}

impl MovementKind {
    /// Exact, case-sensitive match against the departure action text.
    pub fn from_action(action: &str, departure_action: &str) -> Self {
        if action == departure_action {
            MovementKind::Departure
        } else {
            MovementKind::Return
        }
    }

    pub fn resulting_status(&self) -> DriverStatus {
        match self {
            MovementKind::Departure => DriverStatus::Busy,
            MovementKind::Return => DriverStatus::Available,
        }
    }
}

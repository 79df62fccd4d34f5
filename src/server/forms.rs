use crate::core::register::RegisterRequest;
use crate::models::{Event, MovementKind};
use serde::Deserialize;

/// Form fields of the register and edit forms.
///
/// Every field is optional on the wire; missing ones read as empty, so that
/// the required-field check reports them instead of a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventForm {
    #[serde(default, alias = "name")]
    pub nombre: String,
    #[serde(default, alias = "action")]
    pub accion: String,
    #[serde(default, alias = "time")]
    pub hora: String,
    #[serde(default, alias = "date")]
    pub fecha: String,
    #[serde(default, alias = "union_rep")]
    pub dirigencia: String,
    #[serde(default, alias = "destination")]
    pub destino: String,
    #[serde(default, alias = "rationale")]
    pub sustento: String,
    #[serde(default, alias = "transport_request")]
    pub solicitud_movilidad: String,
    #[serde(default, alias = "directed_by")]
    pub quien_dirige: String,
}

fn optional(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

impl EventForm {
    pub fn into_register_request(self, departure_action: &str) -> RegisterRequest {
        RegisterRequest {
            kind: MovementKind::from_action(&self.accion, departure_action),
            name: self.nombre,
            action: self.accion,
            time: optional(self.hora),
            date: optional(self.fecha),
            destination: self.destino,
            union_rep: self.dirigencia,
            rationale: self.sustento,
            transport_request: self.solicitud_movilidad,
            directed_by: self.quien_dirige,
        }
    }

    /// Full replacement row for an edit.
    pub fn into_event(self) -> Event {
        Event {
            name: self.nombre,
            time: self.hora,
            date: self.fecha,
            action: self.accion,
            union_rep: self.dirigencia,
            destination: self.destino,
            rationale: self.sustento,
            transport_request: self.solicitud_movilidad,
            directed_by: self.quien_dirige,
        }
    }
}

use serde::{Deserialize, Serialize};

/// One row of the event log (`historial`).
///
/// Field order is the column order of the table. Every column but `nombre`
/// may be absent in older files and then reads back as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "hora", default)]
    pub time: String,
    #[serde(rename = "fecha", default)]
    pub date: String,
    #[serde(rename = "accion", default)]
    pub action: String,
    #[serde(rename = "dirigencia", default)]
    pub union_rep: String,
    #[serde(rename = "destino", default)]
    pub destination: String,
    #[serde(rename = "sustento", default)]
    pub rationale: String,
    #[serde(rename = "solicitud_movilidad", default)]
    pub transport_request: String,
    #[serde(rename = "quien_dirige", default)]
    pub directed_by: String,
}

impl Event {
    pub const HEADERS: [&'static str; 9] = [
        "nombre",
        "hora",
        "fecha",
        "accion",
        "dirigencia",
        "destino",
        "sustento",
        "solicitud_movilidad",
        "quien_dirige",
    ];
}

/// Partial update of an event: `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub name: Option<String>,
    pub time: Option<String>,
    pub date: Option<String>,
    pub action: Option<String>,
    pub union_rep: Option<String>,
    pub destination: Option<String>,
    pub rationale: Option<String>,
    pub transport_request: Option<String>,
    pub directed_by: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.time.is_none()
            && self.date.is_none()
            && self.action.is_none()
            && self.union_rep.is_none()
            && self.destination.is_none()
            && self.rationale.is_none()
            && self.transport_request.is_none()
            && self.directed_by.is_none()
    }

    pub fn apply_to(self, ev: &Event) -> Event {
        Event {
            name: self.name.unwrap_or_else(|| ev.name.clone()),
            time: self.time.unwrap_or_else(|| ev.time.clone()),
            date: self.date.unwrap_or_else(|| ev.date.clone()),
            action: self.action.unwrap_or_else(|| ev.action.clone()),
            union_rep: self.union_rep.unwrap_or_else(|| ev.union_rep.clone()),
            destination: self.destination.unwrap_or_else(|| ev.destination.clone()),
            rationale: self.rationale.unwrap_or_else(|| ev.rationale.clone()),
            transport_request: self
                .transport_request
                .unwrap_or_else(|| ev.transport_request.clone()),
            directed_by: self.directed_by.unwrap_or_else(|| ev.directed_by.clone()),
        }
    }
}

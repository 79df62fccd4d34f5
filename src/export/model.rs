// src/export/model.rs

use crate::models::Event;
use serde::Serialize;

/// Flat export row: the event plus its position in the log.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub index: usize,
    pub nombre: String,
    pub hora: String,
    pub fecha: String,
    pub accion: String,
    pub dirigencia: String,
    pub destino: String,
    pub sustento: String,
    pub solicitud_movilidad: String,
    pub quien_dirige: String,
}

impl EventExport {
    pub fn from_event(index: usize, ev: &Event) -> Self {
        Self {
            index,
            nombre: ev.name.clone(),
            hora: ev.time.clone(),
            fecha: ev.date.clone(),
            accion: ev.action.clone(),
            dirigencia: ev.union_rep.clone(),
            destino: ev.destination.clone(),
            sustento: ev.rationale.clone(),
            solicitud_movilidad: ev.transport_request.clone(),
            quien_dirige: ev.directed_by.clone(),
        }
    }
}

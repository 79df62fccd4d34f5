use super::driver_status::DriverStatus;
use serde::{Deserialize, Serialize};

/// One row of the roster table (`id, nombre, estado`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "estado", default)]
    pub status: DriverStatus,
}

impl Driver {
    pub const HEADERS: [&'static str; 3] = ["id", "nombre", "estado"];

    pub fn new(id: impl Into<String>, name: impl Into<String>, status: DriverStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};

/// Availability of a driver, as stored in the `estado` column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DriverStatus {
    #[default]
    #[serde(rename = "disponible")]
    Available,
    #[serde(rename = "ocupado")]
    Busy,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "disponible",
            DriverStatus::Busy => "ocupado",
        }
    }

    /// Read a status as typed by hand into the roster.
    ///
    /// Case and surrounding blanks are ignored; only `ocupado` means busy,
    /// anything else (blank included) reads as available.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("ocupado") {
            DriverStatus::Busy
        } else {
            DriverStatus::Available
        }
    }
}

impl<'de> Deserialize<'de> for DriverStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod log;
pub mod register;
pub mod roster;

use crate::errors::{AppError, AppResult};

/// Reject an empty (or blank) required field.
pub(crate) fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("the field '{}' is required", field)));
    }
    Ok(())
}

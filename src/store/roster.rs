//! In-memory operations on a roster snapshot.

use crate::errors::{AppError, AppResult};
use crate::models::{Driver, DriverStatus};

/// Set the status of the first driver whose name matches exactly.
///
/// Returns `false` when no driver carries that name; the snapshot is then
/// left as it was.
pub fn set_status_by_name(drivers: &mut [Driver], name: &str, status: DriverStatus) -> bool {
    match drivers.iter_mut().find(|d| d.name == name) {
        Some(driver) => {
            driver.status = status;
            true
        }
        None => false,
    }
}

pub fn find_by_name<'a>(drivers: &'a [Driver], name: &str) -> Option<&'a Driver> {
    drivers.iter().find(|d| d.name == name)
}

/// Next free numeric id: one past the largest numeric id, non-numeric ids
/// are ignored.
pub fn next_id(drivers: &[Driver]) -> String {
    let max = drivers
        .iter()
        .filter_map(|d| d.id.trim().parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

/// Append a new available driver. Names must stay unique across the roster.
pub fn add_driver(drivers: &mut Vec<Driver>, name: &str, id: Option<&str>) -> AppResult<Driver> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("driver name must not be empty".into()));
    }
    if find_by_name(drivers, name).is_some() {
        return Err(AppError::Validation(format!(
            "a driver named '{}' is already in the roster",
            name
        )));
    }

    let id = match id.map(str::trim) {
        Some(i) if !i.is_empty() => {
            if drivers.iter().any(|d| d.id == i) {
                return Err(AppError::Validation(format!("driver id '{}' already in use", i)));
            }
            i.to_string()
        }
        _ => next_id(drivers),
    };

    let driver = Driver::new(id, name, DriverStatus::Available);
    drivers.push(driver.clone());
    Ok(driver)
}

// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::export::range::parse_range;
use crate::store::EventLogStore;
use crate::ui::messages::warning;
use crate::utils::date::date_in_bounds;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the event log.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"`, or a period accepted by `parse_range`;
    ///   events whose date does not parse are left out of a ranged export.
    ///
    /// Returns the number of exported events.
    pub fn export<H: EventLogStore + ?Sized>(
        store: &H,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = select(&store.load_events()?, bounds);

        if rows.is_empty() {
            warning("No events found for the selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}

/// Keep original positions so exported rows still address the live log.
fn select(
    events: &[crate::models::Event],
    bounds: Option<(chrono::NaiveDate, chrono::NaiveDate)>,
) -> Vec<EventExport> {
    events
        .iter()
        .enumerate()
        .filter(|(_, ev)| bounds.is_none_or(|b| date_in_bounds(&ev.date, b)))
        .map(|(i, ev)| EventExport::from_event(i, ev))
        .collect()
}

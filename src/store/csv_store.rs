//! CSV-file backend for both tables.

use super::{EventLogStore, RosterStore};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Driver, Event};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Roster and event log stored as two UTF-8, comma-separated files with a
/// header row.
#[derive(Debug, Clone)]
pub struct CsvStore {
    roster_path: PathBuf,
    history_path: PathBuf,
}

impl CsvStore {
    pub fn new(roster_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self {
            roster_path: roster_path.into(),
            history_path: history_path.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.roster_path(), cfg.history_path())
    }

    pub fn roster_path(&self) -> &Path {
        &self.roster_path
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    /// Create any missing table as a header-only file. Existing files are
    /// left untouched.
    pub fn ensure_tables(&self) -> AppResult<()> {
        if !self.roster_path.exists() {
            self.save_drivers(&[])?;
        }
        if !self.history_path.exists() {
            self.save_events(&[])?;
        }
        Ok(())
    }
}

impl RosterStore for CsvStore {
    fn load_drivers(&self) -> AppResult<Vec<Driver>> {
        load_table(&self.roster_path)
    }

    fn save_drivers(&self, drivers: &[Driver]) -> AppResult<()> {
        save_table(&self.roster_path, &Driver::HEADERS, drivers)
    }
}

impl EventLogStore for CsvStore {
    fn load_events(&self) -> AppResult<Vec<Event>> {
        load_table(&self.history_path)
    }

    fn save_events(&self, events: &[Event]) -> AppResult<()> {
        save_table(&self.history_path, &Event::HEADERS, events)
    }
}

/// Read every row of a table by header name.
///
/// Rows may be shorter than the header (older, narrower files): absent
/// columns fall back to the field default.
pub(crate) fn load_table<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let mut record = record?;
        // serde defaults only cover absent headers, not short records
        while record.len() < headers.len() {
            record.push_field("");
        }
        rows.push(record.deserialize(Some(&headers))?);
    }
    Ok(rows)
}

/// Write header + rows to a sibling temp file, then rename it over `path`.
/// On failure the previous table stays as it was.
pub(crate) fn save_table<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_sibling(path);

    let written = write_rows(&tmp, headers, rows).and_then(|_| {
        fs::rename(&tmp, path)?;
        Ok(())
    });

    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written
}

fn write_rows<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(headers)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    let file = wtr.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "table".into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DriverStatus;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CsvStore {
        CsvStore::new(
            dir.path().join("choferes.csv"),
            dir.path().join("historial.csv"),
        )
    }

    #[test]
    fn missing_files_load_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.load_drivers().unwrap().is_empty());
        assert!(store.load_events().unwrap().is_empty());
    }

    #[test]
    fn empty_save_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save_events(&[]).unwrap();
        store.save_drivers(&[]).unwrap();

        let history = fs::read_to_string(store.history_path()).unwrap();
        assert_eq!(
            history.trim_end(),
            "nombre,hora,fecha,accion,dirigencia,destino,sustento,solicitud_movilidad,quien_dirige"
        );
        let roster = fs::read_to_string(store.roster_path()).unwrap();
        assert_eq!(roster.trim_end(), "id,nombre,estado");
    }

    #[test]
    fn roster_status_is_written_as_spanish_text() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save_drivers(&[
                Driver::new("1", "Juan", DriverStatus::Busy),
                Driver::new("2", "Ana", DriverStatus::Available),
            ])
            .unwrap();

        let raw = fs::read_to_string(store.roster_path()).unwrap();
        assert!(raw.contains("1,Juan,ocupado"));
        assert!(raw.contains("2,Ana,disponible"));
    }

    #[test]
    fn legacy_six_column_history_is_readable() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(
            store.history_path(),
            "nombre,hora,fecha,accion,dirigencia,destino\n\
             Juan,08:00:00,2024-05-02,salida,Sindicato,Callao\n",
        )
        .unwrap();

        let events = store.load_events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Juan");
        assert_eq!(events[0].destination, "Callao");
        assert_eq!(events[0].rationale, "");
        assert_eq!(events[0].directed_by, "");
    }

    #[test]
    fn short_rows_fill_trailing_columns_with_empty_strings() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(
            store.history_path(),
            "nombre,hora,fecha,accion,dirigencia,destino,sustento,solicitud_movilidad,quien_dirige\n\
             Ana,09:15:00,2024-05-03,retorno\n",
        )
        .unwrap();

        let events = store.load_events().unwrap();
        assert_eq!(events[0].action, "retorno");
        assert_eq!(events[0].union_rep, "");
        assert_eq!(events[0].transport_request, "");
    }

    #[test]
    fn save_after_legacy_load_writes_full_shape() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(
            store.history_path(),
            "nombre,hora,fecha,accion\nJuan,08:00:00,2024-05-02,salida\n",
        )
        .unwrap();

        let events = store.load_events().unwrap();
        store.save_events(&events).unwrap();

        let raw = fs::read_to_string(store.history_path()).unwrap();
        let mut lines = raw.lines();
        assert_eq!(lines.next().unwrap().split(',').count(), 9);
        assert_eq!(lines.next().unwrap(), "Juan,08:00:00,2024-05-02,salida,,,,,");
    }

    #[test]
    fn no_temp_file_is_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save_events(&[Event::default()]).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn ensure_tables_keeps_existing_rows() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save_drivers(&[Driver::new("1", "Juan", DriverStatus::Available)])
            .unwrap();
        store.ensure_tables().unwrap();

        assert_eq!(store.load_drivers().unwrap().len(), 1);
        assert!(store.history_path().exists());
    }

    #[test]
    fn hand_edited_roster_statuses_still_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(
            store.roster_path(),
            "id,nombre,estado\n1,Juan,disponible\n2,Ana,\n3,Luis,Disponible\n4,Rosa, OCUPADO\n5,Pedro\n",
        )
        .unwrap();

        let drivers = store.load_drivers().unwrap();
        let statuses: Vec<_> = drivers.iter().map(|d| d.status).collect();
        assert_eq!(
            statuses,
            vec![
                DriverStatus::Available,
                DriverStatus::Available,
                DriverStatus::Available,
                DriverStatus::Busy,
                DriverStatus::Available,
            ]
        );
        assert_eq!(drivers[4].name, "Pedro");
    }
}

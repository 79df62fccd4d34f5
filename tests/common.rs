#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rfleetlog::models::{Driver, Event};
use rfleetlog::store::{CsvStore, EventLogStore, RosterStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// An isolated HOME plus data directory for one test.
pub struct Workspace {
    pub home: TempDir,
    pub data_dir: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let home = TempDir::new().expect("temp home");
        let data_dir = home.path().join("data");
        Self { home, data_dir }
    }

    /// `rfleetlog --data-dir <data> <args>` with HOME pointing at the temp dir.
    pub fn rfl(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rfleetlog");
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env("NO_COLOR", "1")
            .args(["--data-dir", &self.data_dir.to_string_lossy()]);
        cmd
    }

    /// Run `init` in test mode (no config file written).
    pub fn init(&self) {
        self.rfl().args(["--test", "init"]).assert().success();
    }

    pub fn store(&self) -> CsvStore {
        CsvStore::new(
            self.data_dir.join("choferes.csv"),
            self.data_dir.join("historial.csv"),
        )
    }

    pub fn seed_roster(&self, drivers: &[Driver]) {
        self.store().save_drivers(drivers).expect("seed roster");
    }

    pub fn seed_events(&self, events: &[Event]) {
        self.store().save_events(events).expect("seed events");
    }

    pub fn drivers(&self) -> Vec<Driver> {
        self.store().load_drivers().expect("load roster")
    }

    pub fn events(&self) -> Vec<Event> {
        self.store().load_events().expect("load history")
    }

    pub fn raw(&self, file: &str) -> String {
        fs::read_to_string(self.data_dir.join(file)).unwrap_or_default()
    }
}

pub fn event(name: &str, action: &str, destination: &str) -> Event {
    Event {
        name: name.to_string(),
        time: "08:00:00".to_string(),
        date: "2024-05-02".to_string(),
        action: action.to_string(),
        destination: destination.to_string(),
        ..Event::default()
    }
}

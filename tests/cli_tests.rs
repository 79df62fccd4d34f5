use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rfleetlog::models::{Driver, DriverStatus};

mod common;
use common::{Workspace, event};

fn juan() -> Driver {
    Driver::new("1", "Juan", DriverStatus::Available)
}

#[test]
fn init_creates_header_only_tables() {
    let ws = Workspace::new();
    ws.init();

    assert_eq!(ws.raw("choferes.csv").trim_end(), "id,nombre,estado");
    assert!(ws.raw("historial.csv").starts_with("nombre,hora,fecha,accion,"));
    assert!(
        !ws.home.path().join(".rfleetlog").join("rfleetlog.conf").exists(),
        "test mode must not write the config file"
    );
}

#[test]
fn departure_marks_driver_busy_and_appends_event() {
    let ws = Workspace::new();
    ws.init();
    ws.seed_roster(&[juan()]);

    ws.rfl()
        .args(["register", "Juan", "salida", "--destination", "Callao"])
        .assert()
        .success()
        .stdout(contains("Registered #0"));

    assert_eq!(ws.drivers()[0].status, DriverStatus::Busy);

    let events = ws.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Juan");
    assert_eq!(events[0].action, "salida");
    assert_eq!(events[0].destination, "Callao");
    assert_eq!(events[0].time.len(), 8, "time is HH:MM:SS");
    assert_eq!(events[0].date.len(), 10, "date is YYYY-MM-DD");
}

#[test]
fn return_action_makes_driver_available_again() {
    let ws = Workspace::new();
    ws.seed_roster(&[Driver::new("1", "Juan", DriverStatus::Busy)]);

    ws.rfl()
        .args(["register", "Juan", "retorno"])
        .assert()
        .success();

    assert_eq!(ws.drivers()[0].status, DriverStatus::Available);
}

#[test]
fn empty_action_leaves_tables_untouched() {
    let ws = Workspace::new();
    ws.init();
    ws.seed_roster(&[juan()]);
    ws.seed_events(&[event("Ana", "salida", "Ica")]);

    let roster_before = ws.raw("choferes.csv");
    let history_before = ws.raw("historial.csv");

    ws.rfl()
        .args(["register", "Juan", ""])
        .assert()
        .failure()
        .stderr(contains("accion"));

    ws.rfl()
        .args(["register", "", "salida"])
        .assert()
        .failure()
        .stderr(contains("nombre"));

    assert_eq!(ws.raw("choferes.csv"), roster_before);
    assert_eq!(ws.raw("historial.csv"), history_before);
}

#[test]
fn unknown_driver_is_warned_about() {
    let ws = Workspace::new();
    ws.init();
    ws.seed_roster(&[juan()]);

    ws.rfl()
        .args(["register", "Pedro", "salida"])
        .assert()
        .success()
        .stdout(contains("not in the roster"));

    assert_eq!(ws.drivers()[0].status, DriverStatus::Available);
    assert_eq!(ws.events()[0].name, "Pedro");
}

#[test]
fn explicit_time_and_date_are_stored_verbatim() {
    let ws = Workspace::new();
    ws.init();

    ws.rfl()
        .args([
            "register",
            "Juan",
            "salida",
            "--time",
            "06:45:00",
            "--date",
            "2024-01-15",
        ])
        .assert()
        .success();

    let events = ws.events();
    assert_eq!(events[0].time, "06:45:00");
    assert_eq!(events[0].date, "2024-01-15");
}

#[test]
fn malformed_date_is_rejected_before_any_write() {
    let ws = Workspace::new();
    ws.init();

    ws.rfl()
        .args(["register", "Juan", "salida", "--time", "06:45", "--date", "15/01/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    assert!(ws.events().is_empty());
}

#[test]
fn delete_shifts_later_events() {
    let ws = Workspace::new();
    ws.seed_events(&[
        event("Juan", "salida", "Lima"),
        event("Ana", "salida", "Ica"),
        event("Luis", "retorno", "Puno"),
    ]);

    ws.rfl()
        .args(["del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Event #1 deleted"));

    let events = ws.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, "Juan");
    assert_eq!(events[1].name, "Luis");
}

#[test]
fn delete_without_confirmation_is_cancelled() {
    let ws = Workspace::new();
    ws.seed_events(&[event("Juan", "salida", "Lima")]);

    ws.rfl()
        .args(["del", "0"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    assert_eq!(ws.events().len(), 1);
}

#[test]
fn delete_out_of_range_fails() {
    let ws = Workspace::new();
    ws.seed_events(&[event("Juan", "salida", "Lima")]);
    let before = ws.raw("historial.csv");

    ws.rfl()
        .args(["del", "5", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No event at position 5"));

    assert_eq!(ws.raw("historial.csv"), before);
}

#[test]
fn edit_changes_only_given_field() {
    let ws = Workspace::new();
    ws.seed_events(&[event("Juan", "salida", "Lima"), event("Ana", "salida", "Ica")]);
    let before = ws.events();

    ws.rfl()
        .args(["edit", "0", "--destination", "Cusco"])
        .assert()
        .success()
        .stdout(contains("Event #0 updated"));

    let after = ws.events();
    assert_eq!(after.len(), 2);
    assert_eq!(after[0].destination, "Cusco");
    assert_eq!(after[0].name, before[0].name);
    assert_eq!(after[0].time, before[0].time);
    assert_eq!(after[0].date, before[0].date);
    assert_eq!(after[0].action, before[0].action);
    assert_eq!(after[1], before[1]);
}

#[test]
fn edit_out_of_range_fails() {
    let ws = Workspace::new();
    ws.seed_events(&[event("Juan", "salida", "Lima")]);

    ws.rfl()
        .args(["edit", "1", "--destination", "Cusco"])
        .assert()
        .failure()
        .stderr(contains("No event at position 1"));
}

#[test]
fn edit_does_not_touch_roster() {
    let ws = Workspace::new();
    ws.seed_roster(&[juan()]);
    ws.seed_events(&[event("Juan", "retorno", "Lima")]);

    ws.rfl()
        .args(["edit", "0", "--action", "salida"])
        .assert()
        .success();

    assert_eq!(ws.drivers()[0].status, DriverStatus::Available);
    assert_eq!(ws.events()[0].action, "salida");
}

#[test]
fn list_shows_roster_and_history() {
    let ws = Workspace::new();
    ws.seed_roster(&[juan(), Driver::new("2", "Ana", DriverStatus::Busy)]);
    ws.seed_events(&[event("Ana", "salida", "Ica")]);

    ws.rfl()
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Roster"))
        .stdout(contains("ocupado"))
        .stdout(contains("History"))
        .stdout(contains("Ica"));

    ws.rfl()
        .args(["list", "--roster"])
        .assert()
        .success()
        .stdout(contains("Juan").and(contains("Ica").not()));
}

#[test]
fn roster_add_rejects_duplicate_names() {
    let ws = Workspace::new();
    ws.init();

    ws.rfl()
        .args(["roster", "--add", "Juan"])
        .assert()
        .success()
        .stdout(contains("added with id 1"));

    ws.rfl()
        .args(["roster", "--add", "Juan"])
        .assert()
        .failure()
        .stderr(contains("already in the roster"));

    assert_eq!(ws.drivers().len(), 1);
}

#[test]
fn export_json_keeps_log_positions() {
    let ws = Workspace::new();
    let mut old = event("Juan", "salida", "Lima");
    old.date = "2023-12-30".into();
    ws.seed_events(&[old, event("Ana", "salida", "Ica")]);

    let out = ws.home.path().join("export.json");
    let out_str = out.to_string_lossy().to_string();

    ws.rfl()
        .args([
            "export", "--format", "json", "--file", &out_str, "--range", "2024", "--force",
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["index"], 1);
    assert_eq!(rows[0]["nombre"], "Ana");
}

#[test]
fn audit_log_records_mutations() {
    let ws = Workspace::new();
    ws.init();

    ws.rfl().args(["register", "Juan", "salida"]).assert().success();
    ws.rfl().args(["del", "0", "--yes"]).assert().success();

    ws.rfl()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("register (Juan)"))
        .stdout(contains("del (#0)"));
}

#[test]
fn config_print_shows_reference_timezone() {
    let ws = Workspace::new();

    ws.rfl()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("America/Lima"))
        .stdout(contains("departure_action: salida"))
        .stdout(contains("is a label only: events are stamped with utc_offset -05:00"));
}

#[test]
fn config_check_flags_an_unusable_offset() {
    let ws = Workspace::new();
    let conf_dir = ws.home.path().join(".rfleetlog");
    std::fs::create_dir_all(&conf_dir).unwrap();
    std::fs::write(
        conf_dir.join("rfleetlog.conf"),
        "timezone: Europe/Rome\nutc_offset: Rome\n",
    )
    .unwrap();

    ws.rfl()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field 'data_dir'"))
        .stdout(contains("utc_offset 'Rome' is not usable"));
}

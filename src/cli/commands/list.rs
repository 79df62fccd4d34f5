use crate::cli::commands::roster::print_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{CsvStore, EventLogStore};
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { roster, events } = cmd {
        let store = CsvStore::from_config(cfg);

        // neither flag means both
        let show_roster = *roster || !*events;
        let show_events = *events || !*roster;

        if show_roster {
            header("Roster");
            print_roster(&store)?;
        }

        if show_events {
            if show_roster {
                println!();
            }
            header("History");
            print_events(&store)?;
        }
    }
    Ok(())
}

fn print_events(store: &CsvStore) -> AppResult<()> {
    let events = store.load_events()?;
    if events.is_empty() {
        info("No events recorded.");
        return Ok(());
    }

    let mut table = Table::new([
        "#",
        "nombre",
        "fecha",
        "hora",
        "accion",
        "destino",
        "dirigencia",
        "sustento",
        "solicitud",
        "dirige",
    ]);
    for (i, ev) in events.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            ev.name.clone(),
            ev.date.clone(),
            ev.time.clone(),
            ev.action.clone(),
            ev.destination.clone(),
            ev.union_rep.clone(),
            ev.rationale.clone(),
            ev.transport_request.clone(),
            ev.directed_by.clone(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::RosterLogic;
use crate::errors::AppResult;
use crate::store::{CsvStore, RosterStore};
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster { add, id } = cmd {
        let store = CsvStore::from_config(cfg);

        if let Some(name) = add {
            let driver = RosterLogic::add(&store, name, id.as_deref())?;
            success(format!("Driver '{}' added with id {}.", driver.name, driver.id));

            if let Err(e) = cfg.audit("roster", &driver.name, "Driver added") {
                warning(format!("Failed to write internal log: {}", e));
            }
            return Ok(());
        }

        print_roster(&store)?;
    }

    Ok(())
}

pub(crate) fn print_roster(store: &CsvStore) -> AppResult<()> {
    let drivers = store.load_drivers()?;
    if drivers.is_empty() {
        info("The roster is empty.");
        return Ok(());
    }

    let mut table = Table::new(["id", "nombre", "estado"]);
    for d in &drivers {
        table.add_row(vec![
            d.id.clone(),
            d.name.clone(),
            d.status.as_str().to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

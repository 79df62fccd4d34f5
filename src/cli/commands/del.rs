use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::CsvStore;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, yes } = cmd {
        let prompt = format!(
            "Delete event #{}? Every later event moves up one position. This action is irreversible.",
            index
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = CsvStore::from_config(cfg);
        let removed = DeleteLogic::apply(&store, *index)?;

        success(format!(
            "Event #{} deleted ({} {} on {}).",
            index, removed.name, removed.action, removed.date
        ));

        if let Err(e) = cfg.audit(
            "del",
            &format!("#{}", index),
            &format!("{} {} {}", removed.name, removed.action, removed.date),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory
///  - the roster and history tables, header only, when missing
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rFleetLog…");

    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    println!("📄 Roster  : {}", cfg.roster_path().display());
    println!("🗂️  History : {}", cfg.history_path().display());

    if let Err(e) = cfg.audit(
        "init",
        &cfg.data_path().to_string_lossy(),
        "Data directory initialized",
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 rFleetLog initialization completed!");
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::server::{self, AppState};
use crate::store::CsvStore;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// Start the web server on the configured (or given) address.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        let bind = bind.clone().unwrap_or_else(|| cfg.bind.clone());
        let addr: SocketAddr = bind
            .parse()
            .map_err(|_| AppError::Config(format!("invalid bind address '{}'", bind)))?;

        // ignore a second init (tests, embedding)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .try_init();

        CsvStore::from_config(cfg).ensure_tables()?;
        let state = AppState::from_config(cfg)?;

        tracing::info!(
            data_dir = %cfg.data_path().display(),
            timezone = %cfg.timezone,
            utc_offset = %cfg.utc_offset,
            "starting rfleetlog"
        );

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(server::serve(state, addr))?;
    }

    Ok(())
}

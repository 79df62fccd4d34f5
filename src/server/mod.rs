//! JSON web surface over the two tables.

mod forms;
mod handlers;
mod response;

pub use forms::EventForm;
pub use response::{ApiError, EventResponse, IndexedEvent, Overview};

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{CsvStore, FleetStore};
use axum::Router;
use axum::routing::{get, post};
use chrono::FixedOffset;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::net::TcpListener;
use tracing::info;

/// Request-independent settings of the server.
#[derive(Debug, Clone)]
pub struct Settings {
    pub departure_action: String,
    pub offset: FixedOffset,
    /// Audit table; `None` disables auditing.
    pub audit_log: Option<PathBuf>,
}

impl Settings {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            departure_action: cfg.departure_action.clone(),
            offset: cfg.offset()?,
            audit_log: Some(cfg.log_path()),
        })
    }
}

/// Shared handler state.
///
/// Every request runs its whole load → mutate → save cycle while holding
/// `lock`, so requests served by one process never interleave.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn FleetStore>,
    lock: Arc<Mutex<()>>,
    settings: Arc<Settings>,
}

impl AppState {
    pub fn new(store: impl FleetStore + 'static, settings: Settings) -> Self {
        Self {
            store: Arc::new(store),
            lock: Arc::new(Mutex::new(())),
            settings: Arc::new(settings),
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self::new(CsvStore::from_config(cfg), Settings::from_config(cfg)?))
    }

    pub(crate) fn store(&self) -> &dyn FleetStore {
        self.store.as_ref()
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.settings
    }

    /// A poisoned lock only means an earlier request panicked; the tables on
    /// disk are still whole, so carry on.
    pub(crate) fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::overview))
        .route("/healthz", get(handlers::healthz))
        .route("/register", post(handlers::register))
        .route("/delete/:index", post(handlers::delete))
        .route(
            "/edit/:index",
            get(handlers::edit_form).post(handlers::edit),
        )
        .with_state(state)
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve_on(listener: TcpListener, state: AppState) -> AppResult<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub async fn serve(state: AppState, addr: SocketAddr) -> AppResult<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "rfleetlog listening");
    serve_on(listener, state).await?;
    info!("rfleetlog stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no signal handler available: run until the process is killed
        std::future::pending::<()>().await;
    }
}

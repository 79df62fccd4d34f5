use super::forms::EventForm;
use super::response::{ApiError, EventResponse, IndexedEvent, Overview};
use super::{AppState, Settings};
use crate::core::del::DeleteLogic;
use crate::core::edit::EditLogic;
use crate::core::register::RegisterLogic;
use crate::errors::{AppError, AppResult};
use crate::models::Event;
use crate::store::log::ttlog;
use crate::utils::time::now_in;
use axum::Json;
use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use tracing::{info, warn};

type ApiResult<T> = Result<T, ApiError>;

fn audit(settings: &Settings, operation: &str, target: &str, message: &str) {
    if let Some(path) = &settings.audit_log
        && let Err(e) = ttlog(path, settings.offset, operation, target, message)
    {
        warn!(error = %e, operation, "failed to write internal log");
    }
}

fn summary(ev: &Event) -> String {
    format!("{}, {} {} {}", ev.name, ev.action, ev.date, ev.time)
}

/// Log the failure and hand it to the response layer.
fn reject(operation: &str, e: impl Into<ApiError>) -> ApiError {
    let e: ApiError = e.into();
    if e.status_code().is_server_error() {
        tracing::error!(error = %e.0, operation, "request failed");
    } else {
        info!(error = %e.0, operation, "request rejected");
    }
    e
}

/// Event position from the URL. A negative number is a position that cannot
/// exist; anything else that is not a number is a malformed request.
fn position(path: Result<Path<String>, PathRejection>) -> AppResult<usize> {
    let Path(raw) = path.map_err(|e| AppError::Validation(e.body_text()))?;
    let raw = raw.trim();

    if let Ok(index) = raw.parse::<usize>() {
        return Ok(index);
    }
    match raw.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            Err(AppError::NoSuchPosition(raw.to_string()))
        }
        _ => Err(AppError::Validation(format!(
            "'{}' is not an event position",
            raw
        ))),
    }
}

fn form_fields(body: Result<Form<EventForm>, FormRejection>) -> AppResult<EventForm> {
    body.map(|Form(f)| f)
        .map_err(|e| AppError::Validation(e.body_text()))
}

/// Run one load → mutate → save cycle off the async workers, holding the
/// store lock for its whole length.
async fn with_store<T, F>(state: &AppState, operation: &'static str, f: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&AppState) -> AppResult<T> + Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || {
        let _guard = state.lock();
        f(&state)
    })
    .await
    .map_err(|e| AppError::Other(format!("{} worker failed: {}", operation, e)))
    .and_then(|res| res)
    .map_err(|e| reject(operation, e))
}

pub(super) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub(super) async fn overview(State(state): State<AppState>) -> ApiResult<Json<Overview>> {
    let overview = with_store(&state, "overview", |state| {
        let store = state.store();
        let drivers = store.load_drivers()?;
        let events = store
            .load_events()?
            .into_iter()
            .enumerate()
            .map(|(index, event)| IndexedEvent { index, event })
            .collect();
        Ok(Overview { drivers, events })
    })
    .await?;

    Ok(Json(overview))
}

pub(super) async fn register(
    State(state): State<AppState>,
    body: Result<Form<EventForm>, FormRejection>,
) -> ApiResult<(StatusCode, Json<EventResponse>)> {
    let form = form_fields(body).map_err(|e| reject("register", e))?;

    let body = with_store(&state, "register", move |state| {
        let settings = state.settings();
        let req = form.into_register_request(&settings.departure_action);
        let reg = RegisterLogic::apply(state.store(), state.store(), req, now_in(settings.offset))?;

        let mut body = EventResponse::ok(reg.index, reg.event);
        if reg.driver_found {
            info!(index = reg.index, name = %body.event.name, action = %body.event.action, "event registered");
        } else {
            warn!(index = reg.index, name = %body.event.name, "event registered for a name not in the roster");
            body.warning = Some(format!(
                "'{}' is not in the roster: no driver status was changed",
                body.event.name
            ));
        }
        audit(settings, "register", &body.event.name, &summary(&body.event));
        Ok(body)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(body)))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<EventResponse>> {
    let index = position(path).map_err(|e| reject("delete", e))?;

    let removed = with_store(&state, "delete", move |state| {
        let removed = DeleteLogic::apply(state.store(), index)?;
        info!(index, name = %removed.name, "event deleted");
        audit(state.settings(), "del", &format!("#{}", index), &summary(&removed));
        Ok(removed)
    })
    .await?;

    Ok(Json(EventResponse::ok(index, removed)))
}

pub(super) async fn edit_form(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<IndexedEvent>> {
    let index = position(path).map_err(|e| reject("edit", e))?;

    let event = with_store(&state, "edit", move |state| EditLogic::get(state.store(), index)).await?;
    Ok(Json(IndexedEvent { index, event }))
}

pub(super) async fn edit(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Form<EventForm>, FormRejection>,
) -> ApiResult<Json<EventResponse>> {
    let index = position(path).map_err(|e| reject("edit", e))?;
    let form = form_fields(body).map_err(|e| reject("edit", e))?;

    let event = with_store(&state, "edit", move |state| {
        let event = EditLogic::replace(state.store(), index, form.into_event())?;
        info!(index, name = %event.name, "event edited");
        audit(state.settings(), "edit", &format!("#{}", index), &summary(&event));
        Ok(event)
    })
    .await?;

    Ok(Json(EventResponse::ok(index, event)))
}

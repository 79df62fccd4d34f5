use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::{RegisterLogic, RegisterRequest};
use crate::errors::{AppError, AppResult};
use crate::store::CsvStore;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::{now_in, parse_optional_time};

/// Register a movement for a driver.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        name,
        action,
        time,
        date: date_arg,
        context,
    } = cmd
    {
        //
        // 1. Explicit stamp is checked here, then stored as typed
        //
        parse_optional_time(time.as_ref())?;
        if let Some(d) = date_arg
            && date::parse_date(d).is_none()
        {
            return Err(AppError::InvalidDate(d.to_string()));
        }
        if time.is_some() != date_arg.is_some() {
            warning("--time and --date are used only together: stamping with the current time.");
        }

        //
        // 2. Build the request
        //
        let mut req = RegisterRequest::new(name.clone(), action.clone(), &cfg.departure_action);
        req.time = time.clone();
        req.date = date_arg.clone();
        req.destination = context.destination.clone().unwrap_or_default();
        req.union_rep = context.union_rep.clone().unwrap_or_default();
        req.rationale = context.rationale.clone().unwrap_or_default();
        req.transport_request = context.transport_request.clone().unwrap_or_default();
        req.directed_by = context.directed_by.clone().unwrap_or_default();

        //
        // 3. Execute logic
        //
        let store = CsvStore::from_config(cfg);
        let reg = RegisterLogic::apply(&store, &store, req, now_in(cfg.offset()?))?;

        if !reg.driver_found {
            warning(format!(
                "'{}' is not in the roster: no driver status was changed.",
                reg.event.name
            ));
        }
        success(format!(
            "Registered #{}: {} {} on {} at {}.",
            reg.index, reg.event.name, reg.event.action, reg.event.date, reg.event.time
        ));

        if let Err(e) = cfg.audit(
            "register",
            &reg.event.name,
            &format!("#{} {}", reg.index, reg.event.action),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}

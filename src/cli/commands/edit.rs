use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::{AppError, AppResult};
use crate::models::EventPatch;
use crate::store::CsvStore;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        index,
        name,
        action,
        time,
        date: date_arg,
        context,
    } = cmd
    {
        parse_optional_time(time.as_ref())?;
        if let Some(d) = date_arg
            && date::parse_date(d).is_none()
        {
            return Err(AppError::InvalidDate(d.to_string()));
        }

        let patch = EventPatch {
            name: name.clone(),
            time: time.clone(),
            date: date_arg.clone(),
            action: action.clone(),
            union_rep: context.union_rep.clone(),
            destination: context.destination.clone(),
            rationale: context.rationale.clone(),
            transport_request: context.transport_request.clone(),
            directed_by: context.directed_by.clone(),
        };

        if patch.is_empty() {
            return Err(AppError::Validation(
                "Nothing to do: specify at least one field to change.".into(),
            ));
        }

        let store = CsvStore::from_config(cfg);
        let ev = EditLogic::patch(&store, *index, patch)?;

        success(format!(
            "Event #{} updated: {} {} on {} at {}.",
            index, ev.name, ev.action, ev.date, ev.time
        ));

        if let Err(e) = cfg.audit(
            "edit",
            &format!("#{}", index),
            &format!("{} {}", ev.name, ev.action),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}

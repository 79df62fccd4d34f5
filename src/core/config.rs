use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        info(format!(
            "'timezone' ({}) is a label only: events are stamped with utc_offset {}.",
            cfg.timezone, cfg.utc_offset
        ));
        Ok(())
    }

    /// Report fields missing from the config file and an unusable offset.
    pub fn check(cfg: &Config) -> AppResult<Vec<&'static str>> {
        let missing = Config::missing_fields()?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            for field in &missing {
                warning(format!("Missing field '{}' (default value in use)", field));
            }
        }
        if let Err(e) = cfg.offset() {
            warning(format!(
                "utc_offset '{}' is not usable ({}): timestamps cannot be derived.",
                cfg.utc_offset, e
            ));
        }
        Ok(missing)
    }

    /// Open the config file with the requested editor, falling back to
    /// $EDITOR / $VISUAL / the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", editor_to_use));
                return Ok(());
            }
            _ if editor_to_use != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
            }
            _ => {
                return Err(AppError::Config(format!(
                    "failed to run editor '{}'",
                    editor_to_use
                )));
            }
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;
        if !status.success() {
            return Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                default_editor, status
            )));
        }
        success(format!("Configuration file edited using '{}'", default_editor));
        Ok(())
    }
}

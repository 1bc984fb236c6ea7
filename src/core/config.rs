use crate::config::migrate::{migrate, missing_fields};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    /// Report keys missing from the configuration file. Returns them too.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        let missing = missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration is complete.");
        } else {
            warning(format!(
                "Missing configuration keys: {} (run `config --migrate`)",
                missing.join(", ")
            ));
        }
        Ok(missing)
    }

    pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
        migrate(path)
    }

    /// Open the configuration file in the requested editor, then in the
    /// platform default when that fails.
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
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                Ok(())
            }
            _ => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    Ok(())
                } else {
                    Err(AppError::Config(format!(
                        "editor '{}' exited with {}",
                        default_editor, status
                    )))
                }
            }
        }
    }
}

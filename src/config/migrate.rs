//! Configuration file upgrades: detect keys missing from an older
//! `farmledger.conf` and add them with their default values.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn defaults_mapping() -> AppResult<Mapping> {
    let value =
        serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))?;
    value
        .as_mapping()
        .cloned()
        .ok_or_else(|| AppError::Config("default configuration is not a mapping".into()))
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    match yaml {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a key/value document",
            path.display()
        ))),
    }
}

/// Dotted names of the keys present in the defaults but absent from `current`.
fn missing_in(current: &Mapping, defaults: &Mapping, prefix: &str) -> Vec<String> {
    let mut out = Vec::new();

    for (key, default) in defaults {
        let name = match key.as_str() {
            Some(k) => k,
            None => continue,
        };
        let dotted = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", prefix, name)
        };

        match (current.get(key), default) {
            (None, _) => out.push(dotted),
            (Some(Value::Mapping(cur)), Value::Mapping(def)) => {
                out.extend(missing_in(cur, def, &dotted))
            }
            _ => {}
        }
    }

    out
}

fn fill_missing(current: &mut Mapping, defaults: &Mapping) {
    for (key, default) in defaults {
        match current.get_mut(key) {
            None => {
                current.insert(key.clone(), default.clone());
            }
            Some(Value::Mapping(cur)) => {
                if let Value::Mapping(def) = default {
                    fill_missing(cur, def);
                }
            }
            Some(_) => {}
        }
    }
}

/// Keys missing from the configuration file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    Ok(missing_in(&current, &defaults_mapping()?, ""))
}

/// Add every missing key with its default value. Existing values are kept.
/// Returns the keys that were added.
pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = defaults_mapping()?;
    let missing = missing_in(&current, &defaults, "");

    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(missing);
    }

    fill_missing(&mut current, &defaults);

    let serialized = serde_yaml::to_string(&Value::Mapping(current))
        .map_err(|e| AppError::Config(e.to_string()))?;
    fs::write(path, serialized)?;

    success(format!(
        "Configuration migrated: added {}",
        missing.join(", ")
    ));
    Ok(missing)
}

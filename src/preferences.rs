use crate::error::PreferenceError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "preferences.json";

/// Directory holding the preference file, from the platform config dir
/// unless overridden.
pub fn config_dir(override_dir: Option<&Path>) -> Result<PathBuf, PreferenceError> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    let project_dirs = directories::ProjectDirs::from("dev", "portfolio", "portfolio-explorer")
        .ok_or(PreferenceError::NoHomeDirectory)?;
    Ok(project_dirs.config_dir().to_path_buf())
}

/// Preferences persisted as a JSON object. Only string values are read;
/// other keys are kept as-is and written back untouched.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    values: Map<String, Value>,
}

impl PreferenceStore {
    /// Open the store at `dir`. A missing file yields an empty store; a
    /// malformed one is logged and treated as empty.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(FILE_NAME);
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(values)) => values,
                Ok(_) => {
                    tracing::warn!(path = %path.display(), "preferences are not a JSON object, ignoring");
                    Map::new()
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring malformed preferences");
                    Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read preferences");
                Map::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Set `key` and write the whole store back to disk.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .insert(key.to_string(), Value::String(value.to_string()));
        self.save()
    }

    fn save(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}

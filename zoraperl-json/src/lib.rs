use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use zoraperl_core::{ConfigRecord, CoreError};

pub mod paths;

/// Keys the configured check requires in the top-level object. Nothing beyond
/// presence is validated, and the persisted `setupVersion` is never compared
/// against anything.
pub const REQUIRED_KEYS: [&str; 3] = ["username", "language", "setupVersion"];

/// Persists the setup record as `<root>/etc/config.json` and answers the
/// launcher's "is this installation configured?" question.
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Opens the store at the root resolved for this process.
    pub fn discover() -> Self {
        Self::new(paths::install_root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        paths::config_path(&self.root)
    }

    /// Writes the record, overwriting any existing file. No merge, no backup;
    /// a failure carries the attempted path and is not retried.
    pub fn save(&self, record: &ConfigRecord) -> Result<PathBuf, CoreError> {
        let etc = self.root.join("etc");
        let path = etc.join(paths::CONFIG_FILE);
        let persist_err = |source| CoreError::Persist {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&etc).map_err(persist_err)?;

        let json = serde_json::to_vec_pretty(record)
            .map_err(|e| persist_err(std::io::Error::other(e)))?;
        let mut tmp = NamedTempFile::new_in(&etc).map_err(persist_err)?;
        tmp.write_all(&json).map_err(persist_err)?;
        tmp.flush().map_err(persist_err)?;
        let _ = fs::remove_file(&path);
        tmp.persist(&path).map_err(|e| persist_err(e.error))?;

        debug!(path = %path.display(), "configuration written");
        Ok(path)
    }

    /// Raw read for status display. No validation.
    pub fn read(&self) -> Option<Value> {
        let data = fs::read(self.config_path()).ok()?;
        serde_json::from_slice(&data).ok()
    }

    /// True iff the config file exists, is readable, parses as JSON, and its
    /// top-level object carries every required key. All failure modes collapse
    /// to `false`; the cause only shows up in the debug log.
    pub fn is_configured(&self) -> bool {
        let path = self.config_path();
        let data = match fs::read(&path) {
            Ok(d) => d,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "config file unreadable");
                return false;
            }
        };
        let value: Value = match serde_json::from_slice(&data) {
            Ok(v) => v,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "config file is not valid JSON");
                return false;
            }
        };
        let Some(obj) = value.as_object() else {
            debug!(path = %path.display(), "config file is not a JSON object");
            return false;
        };
        for key in REQUIRED_KEYS {
            if !obj.contains_key(key) {
                debug!(path = %path.display(), missing = key, "config file missing required field");
                return false;
            }
        }
        true
    }
}

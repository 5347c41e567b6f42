use crate::errors::CoreError;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Subdirectories that must exist under the installation root for the
/// installation to count as scaffolded.
pub const MANAGED_DIRS: [&str; 5] = ["bin", "compat", "etc", "system", "users"];

/// Creates the installation root and its managed subdirectories.
///
/// Only a root that cannot be created is a hard error. Each missing child is
/// created best-effort: a failure is logged and the remaining children are
/// still attempted. Pre-existing children are left untouched, so the call is
/// idempotent and fills in a partially scaffolded root.
pub fn ensure_scaffold(root: &Path) -> Result<(), CoreError> {
    fs::create_dir_all(root).map_err(|source| CoreError::Scaffold {
        path: root.to_path_buf(),
        source,
    })?;

    for name in MANAGED_DIRS {
        let dir = root.join(name);
        if dir.is_dir() {
            continue;
        }
        match fs::create_dir(&dir) {
            Ok(()) => debug!(dir = %dir.display(), "created managed directory"),
            Err(e) => warn!(dir = %dir.display(), error = %e, "could not create managed directory"),
        }
    }
    Ok(())
}

/// True iff `root` exists and contains every managed subdirectory.
pub fn is_scaffolded(root: &Path) -> bool {
    if !root.is_dir() {
        debug!(root = %root.display(), "installation root does not exist");
        return false;
    }
    for name in MANAGED_DIRS {
        if !root.join(name).is_dir() {
            debug!(root = %root.display(), missing = name, "required subdirectory missing");
            return false;
        }
    }
    true
}

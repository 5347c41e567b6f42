use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;
use zoraperl_core::scaffold;
use zoraperl_json::{paths, ConfigStore};

#[cfg(windows)]
pub const ONBOARDING_EXE: &str = "zoraperl-onboarding.exe";
#[cfg(not(windows))]
pub const ONBOARDING_EXE: &str = "zoraperl-onboarding";

/// Directory the onboarding executable ships in, relative to wherever the
/// launcher happens to live.
pub const ONBOARDING_DIR: &str = "zoraperl-onboarding";

/// Launcher-side view of the installation: answers whether setup has already
/// run and hands off to the onboarding executable when it has not.
pub struct SystemChecker {
    root: PathBuf,
    store: ConfigStore,
}

impl SystemChecker {
    pub fn new() -> Self {
        Self::with_root(paths::install_root())
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let store = ConfigStore::new(&root);
        Self { root, store }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// True iff the managed directory layout is complete and the config file
    /// passes the key-presence check. Any failure is just "not configured".
    pub fn is_system_configured(&self) -> bool {
        debug!(root = %self.root.display(), "checking system configuration");
        scaffold::is_scaffolded(&self.root) && self.store.is_configured()
    }

    /// Finds the onboarding executable in a short list of relative locations
    /// and spawns it detached. Returns false if it is missing or will not
    /// start; the caller decides what to tell the user.
    pub fn run_onboarding(&self) -> bool {
        let Some(exe) = find_onboarding_executable() else {
            debug!("onboarding executable not found");
            return false;
        };
        debug!(exe = %exe.display(), "starting onboarding");

        let mut cmd = Command::new(&exe);
        if let Some(dir) = exe.parent() {
            cmd.current_dir(dir);
        }
        match cmd.spawn() {
            Ok(_) => true,
            Err(e) => {
                debug!(exe = %exe.display(), error = %e, "failed to start onboarding");
                false
            }
        }
    }
}

impl Default for SystemChecker {
    fn default() -> Self {
        Self::new()
    }
}

pub fn find_onboarding_executable() -> Option<PathBuf> {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))?;
    onboarding_candidates(&exe_dir).into_iter().find(|p| p.is_file())
}

/// Candidate locations: the onboarding directory and its build subdirectory,
/// next to the launcher and then up to three parents above it.
pub fn onboarding_candidates(exe_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    let mut dir = exe_dir.to_path_buf();
    for _ in 0..=3 {
        candidates.push(dir.join(ONBOARDING_DIR).join(ONBOARDING_EXE));
        candidates.push(dir.join(ONBOARDING_DIR).join("build").join(ONBOARDING_EXE));
        if !dir.pop() {
            break;
        }
    }
    candidates
}

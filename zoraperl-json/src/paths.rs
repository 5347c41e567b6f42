use std::env;
use std::path::{Path, PathBuf};
use zoraperl_core::{locate_install_root, INSTALL_DIR_NAME};

/// Name of the config file under `<root>/etc`.
pub const CONFIG_FILE: &str = "config.json";

pub fn config_path(root: &Path) -> PathBuf {
    root.join("etc").join(CONFIG_FILE)
}

/// Resolves the installation root for this process: walk up from the running
/// executable's directory, retry from the working directory, fall back to
/// `<executable dir>/ZoraPerl`.
pub fn install_root() -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    locate_install_root(&exe_dir, &cwd, INSTALL_DIR_NAME)
}

use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name the installation root is matched by.
pub const INSTALL_DIR_NAME: &str = "ZoraPerl";

/// Upper bound on parent hops during the upward walk. The installation may be
/// launched from a build subdirectory, a packaged layout, or a developer tree;
/// the bound keeps the search from escaping to the filesystem root.
pub const MAX_HOPS: usize = 5;

/// Bounded upward walk from `start` looking for the installation directory.
///
/// `start` itself matches if its own name equals `target`. Otherwise each
/// candidate, beginning with `start` and moving up at most `max_hops` parents,
/// matches if it has a child directory named `target`. First match wins; an
/// unrelated directory that happens to share the name is accepted silently.
pub fn find_install_root(start: &Path, target: &str, max_hops: usize) -> Option<PathBuf> {
    find_install_root_with(start, target, max_hops, None)
}

/// Same walk as [`find_install_root`], but a match must also contain a child
/// named `marker`. The config-path variant passes `"etc"` so that a bare
/// same-named directory is not mistaken for a scaffolded installation.
pub fn find_install_root_with(
    start: &Path,
    target: &str,
    max_hops: usize,
    marker: Option<&str>,
) -> Option<PathBuf> {
    let accepts = |dir: &Path| match marker {
        Some(child) => dir.is_dir() && dir.join(child).is_dir(),
        None => dir.is_dir(),
    };

    if start.file_name().is_some_and(|n| n == target) && accepts(start) {
        return Some(start.to_path_buf());
    }

    let mut dir = start.to_path_buf();
    for _ in 0..=max_hops {
        let candidate = dir.join(target);
        if accepts(&candidate) {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Full resolution chain: walk up from the executable's directory, retry the
/// same walk from the current working directory, then fall back to a
/// deterministic guess under the executable's directory. The fallback is not
/// verified to exist; resolution never fails.
pub fn locate_install_root(exe_dir: &Path, cwd: &Path, target: &str) -> PathBuf {
    if let Some(root) = find_install_root(exe_dir, target, MAX_HOPS) {
        debug!(root = %root.display(), "installation root found near executable");
        return root;
    }
    if let Some(root) = find_install_root(cwd, target, MAX_HOPS) {
        debug!(root = %root.display(), "installation root found near working directory");
        return root;
    }
    let fallback = exe_dir.join(target);
    debug!(root = %fallback.display(), "installation root not found, using fallback");
    fallback
}

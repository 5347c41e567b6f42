use std::fs;
use std::path::Path;
use tempfile::tempdir;
use zoraperl_core::{find_install_root, find_install_root_with, locate_install_root, MAX_HOPS};

fn mkdirs(base: &Path, rel: &str) -> std::path::PathBuf {
    let p = base.join(rel);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn start_matching_by_name_wins() {
    let tmp = tempdir().unwrap();
    let root = mkdirs(tmp.path(), "Install/ZoraPerl");

    let found = find_install_root(&root, "ZoraPerl", MAX_HOPS).unwrap();
    assert_eq!(found, root);
}

#[test]
fn child_of_ancestor_found_within_bound() {
    let tmp = tempdir().unwrap();
    let root = mkdirs(tmp.path(), "Install/ZoraPerl");
    let start = mkdirs(tmp.path(), "Install/bin/debug/app");

    let found = find_install_root(&start, "ZoraPerl", MAX_HOPS).unwrap();
    assert_eq!(found, root);
}

#[test]
fn ancestor_beyond_hop_bound_is_not_found() {
    let tmp = tempdir().unwrap();
    mkdirs(tmp.path(), "ZoraPerl");
    let start = mkdirs(tmp.path(), "a/b/c/d/e/f/g");

    assert!(find_install_root(&start, "ZoraPerl", 3).is_none());
}

#[test]
fn marker_variant_rejects_bare_directory() {
    let tmp = tempdir().unwrap();
    mkdirs(tmp.path(), "Install/ZoraPerl");
    let start = mkdirs(tmp.path(), "Install/bin");

    // Same-named directory without an etc child is not a configured install.
    assert!(find_install_root_with(&start, "ZoraPerl", MAX_HOPS, Some("etc")).is_none());

    mkdirs(tmp.path(), "Install/ZoraPerl/etc");
    let found = find_install_root_with(&start, "ZoraPerl", MAX_HOPS, Some("etc")).unwrap();
    assert_eq!(found, tmp.path().join("Install/ZoraPerl"));
}

#[test]
fn onboarding_layout_scenario() {
    // Resolution started from Install/bin/onboarding with Install/ZoraPerl/etc
    // present lands on Install/ZoraPerl.
    let tmp = tempdir().unwrap();
    let root = mkdirs(tmp.path(), "Install/ZoraPerl/etc");
    let start = mkdirs(tmp.path(), "Install/bin/onboarding");

    let found = find_install_root(&start, "ZoraPerl", MAX_HOPS).unwrap();
    assert_eq!(found, root.parent().unwrap());
}

#[test]
fn locate_retries_from_cwd() {
    let tmp = tempdir().unwrap();
    let root = mkdirs(tmp.path(), "work/ZoraPerl");
    let exe_dir = mkdirs(tmp.path(), "elsewhere/one/two/three/four/five/six/deep");
    let cwd = mkdirs(tmp.path(), "work/session");

    let found = locate_install_root(&exe_dir, &cwd, "ZoraPerl");
    assert_eq!(found, root);
}

#[test]
fn locate_falls_back_deterministically() {
    let tmp = tempdir().unwrap();
    let exe_dir = mkdirs(tmp.path(), "app/bin");
    let cwd = mkdirs(tmp.path(), "home");

    let found = locate_install_root(&exe_dir, &cwd, "ZoraPerl");
    assert_eq!(found, exe_dir.join("ZoraPerl"));
    // The fallback is a guess, not a promise.
    assert!(!found.exists());
}

use crate::cli::opts::*;
use crate::launcher::SystemChecker;
use crate::python::PythonInterpreter;

use anyhow::{bail, Result};
use std::path::PathBuf;
use zoraperl_core::{ensure_scaffold, ConfigRecord, Interpreter, RecommendedApps, MANAGED_DIRS};
use zoraperl_json::paths;

pub fn run_cli(args: Cli) -> Result<()> {
    let root = args.root.clone().unwrap_or_else(paths::install_root);
    match args.cmd {
        Command::Status => status_cmd(root),
        Command::Scaffold => scaffold_cmd(root),
        Command::Setup(cmd) => setup_cmd(root, cmd),
        Command::Launch => launch_cmd(root),
        Command::Exec(cmd) => exec_cmd(cmd),
    }
}

fn status_cmd(root: PathBuf) -> Result<()> {
    let checker = SystemChecker::with_root(root);
    println!("root: {}", checker.root().display());

    for name in MANAGED_DIRS {
        let state = if checker.root().join(name).is_dir() { "ok" } else { "missing" };
        println!("  {name}\t{state}");
    }

    match checker.store().read() {
        Some(v) => {
            println!("config: {}", checker.store().config_path().display());
            if let Some(user) = v.get("username").and_then(|u| u.as_str()) {
                println!("  username: {user}");
            }
            if let Some(ver) = v.get("setupVersion").and_then(|u| u.as_str()) {
                println!("  setupVersion: {ver}");
            }
        }
        None => println!("config: not present"),
    }

    println!(
        "configured: {}",
        if checker.is_system_configured() { "yes" } else { "no" }
    );
    Ok(())
}

fn scaffold_cmd(root: PathBuf) -> Result<()> {
    ensure_scaffold(&root)?;
    println!("{}", root.display());
    Ok(())
}

fn setup_cmd(root: PathBuf, cmd: SetupCmd) -> Result<()> {
    ensure_scaffold(&root)?;

    let record = build_record(&cmd);
    let store = zoraperl_json::ConfigStore::new(&root);
    let path = store.save(&record)?;
    println!("configuration written to {}", path.display());
    Ok(())
}

pub fn build_record(cmd: &SetupCmd) -> ConfigRecord {
    ConfigRecord::builder()
        .username(&cmd.username)
        .language(&cmd.language)
        .region(&cmd.region)
        .keyboard_layout(&cmd.keyboard)
        .theme(cmd.theme.into())
        .has_password(cmd.password.is_some())
        .selected_network(&cmd.network)
        .developer_mode(cmd.developer_mode)
        .recommended_apps(RecommendedApps {
            web_browser: cmd.web_browser,
            music_player: cmd.music_player,
            dev_tools: cmd.dev_tools,
            office_suite: cmd.office_suite,
        })
        .finish()
}

fn launch_cmd(root: PathBuf) -> Result<()> {
    let checker = SystemChecker::with_root(root);
    if checker.is_system_configured() {
        println!("system configured; ready");
        return Ok(());
    }

    println!("system not configured; starting setup...");
    if !checker.run_onboarding() {
        bail!("failed to start onboarding; run zoraperl-onboarding manually");
    }
    println!("onboarding started; restart after it completes");
    Ok(())
}

fn exec_cmd(cmd: ExecCmd) -> Result<()> {
    let interp = PythonInterpreter::detect()?;
    let out = match (&cmd.code, &cmd.file) {
        (Some(code), _) => interp.run(code)?,
        (None, Some(file)) => interp.run_file(file)?,
        (None, None) => bail!("nothing to run: pass --code or --file"),
    };
    print!("{}", out.stdout);
    eprint!("{}", out.stderr);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoraperl_core::Theme;

    fn setup_args(extra: &[&str]) -> SetupCmd {
        let mut argv = vec!["zoraperl", "setup", "--username", "ada"];
        argv.extend_from_slice(extra);
        let cli = <Cli as clap::Parser>::try_parse_from(argv).unwrap();
        match cli.cmd {
            Command::Setup(cmd) => cmd,
            _ => unreachable!(),
        }
    }

    #[test]
    fn record_from_defaults() {
        let record = build_record(&setup_args(&[]));
        assert_eq!(record.username, "ada");
        assert_eq!(record.language, "English (US)");
        assert_eq!(record.theme, Theme::Light);
        assert!(!record.has_password);
        assert!(!record.recommended_apps.web_browser);
    }

    #[test]
    fn password_flag_only_records_presence() {
        let record = build_record(&setup_args(&["--password", "hunter2"]));
        assert!(record.has_password);
        let v = serde_json::to_value(&record).unwrap();
        assert!(v.get("password").is_none());
        assert_eq!(v["hasPassword"], true);
    }

    #[test]
    fn app_flags_map_to_recommended_apps() {
        let record = build_record(&setup_args(&["--web-browser", "--music-player"]));
        assert!(record.recommended_apps.web_browser);
        assert!(record.recommended_apps.music_player);
        assert!(!record.recommended_apps.dev_tools);
        assert!(!record.recommended_apps.office_suite);
    }
}

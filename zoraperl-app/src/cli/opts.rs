use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use zoraperl_core::Theme;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeOpt {
    Light,
    Dark,
}

impl From<ThemeOpt> for Theme {
    fn from(t: ThemeOpt) -> Self {
        match t {
            ThemeOpt::Light => Theme::Light,
            ThemeOpt::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(name = "zoraperl", version, about = "ZoraPerl launcher and setup CLI")]
pub struct Cli {
    /// Installation root (defaults to the resolved ZoraPerl directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Report scaffold and configuration state
    Status,
    /// Create the managed directory layout under the root
    Scaffold,
    /// Collect a setup record and write it to <root>/etc/config.json
    Setup(SetupCmd),
    /// Check the installation and hand off to onboarding if needed
    Launch,
    /// Run a script through the system Python hook
    Exec(ExecCmd),
}

#[derive(Debug, Args, Clone)]
pub struct SetupCmd {
    #[arg(long)]
    pub username: String,
    #[arg(long, default_value = "English (US)")]
    pub language: String,
    #[arg(long, default_value = "United States")]
    pub region: String,
    #[arg(long, default_value = "US QWERTY")]
    pub keyboard: String,
    #[arg(long, value_enum, default_value_t = ThemeOpt::Light)]
    pub theme: ThemeOpt,
    /// Account password; only the fact that one was set is recorded
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long, default_value = "Skip for now")]
    pub network: String,
    #[arg(long)]
    pub developer_mode: bool,
    #[arg(long)]
    pub web_browser: bool,
    #[arg(long)]
    pub music_player: bool,
    #[arg(long)]
    pub dev_tools: bool,
    #[arg(long)]
    pub office_suite: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ExecCmd {
    /// Inline code to run
    #[arg(long, conflicts_with = "file")]
    pub code: Option<String>,
    /// Script file to run
    #[arg(long)]
    pub file: Option<PathBuf>,
}

//! Motorcycle instrument cluster simulator.
//!
//! Keeps one motorcycle's speed, RPM, and gear under `.motodash/`, and drives
//! it from an interactive terminal session.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use motodash::core::registry::Model;
use motodash::dashboard::Dashboard;
use motodash::exit_codes;
use motodash::io::config::load_config;
use motodash::io::init::{DashPaths, InitOptions, init_dashboard};
use motodash::io::state_store::load_state;
use motodash::logging;
use motodash::session::{SleepTicker, run_session};

#[derive(Parser)]
#[command(
    name = "motodash",
    version,
    about = "Motorcycle instrument cluster simulator"
)]
struct Cli {
    /// Project directory (contains .motodash/).
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `.motodash/` with `config.toml` and the state schema.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// List the available motorcycle models.
    Models,
    /// Print the saved dashboard readout.
    Show,
    /// Start an interactive session reading commands from stdin.
    Drive,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(cli.root, force),
        Command::Models => cmd_models(),
        Command::Show => cmd_show(cli.root),
        Command::Drive => cmd_drive(cli.root),
    }
}

fn cmd_init(root: PathBuf, force: bool) -> Result<i32> {
    let paths = init_dashboard(&root, &InitOptions { force })?;
    println!("initialized {}", paths.dash_dir.display());
    Ok(exit_codes::OK)
}

fn cmd_models() -> Result<i32> {
    for model in Model::ALL {
        println!("{model}");
    }
    Ok(exit_codes::OK)
}

fn cmd_show(root: PathBuf) -> Result<i32> {
    let paths = DashPaths::new(root);
    let config = load_config(&paths.config_path).context("load config")?;
    let dashboard = Dashboard::new(load_state(&paths.state_path(&config)));
    println!("{}", dashboard.readout());
    if dashboard.variant().is_none() {
        return Ok(exit_codes::NO_VEHICLE);
    }
    Ok(exit_codes::OK)
}

fn cmd_drive(root: PathBuf) -> Result<i32> {
    let paths = DashPaths::new(root);
    let config = load_config(&paths.config_path).context("load config")?;
    let state_path = paths.state_path(&config);
    let mut dashboard = Dashboard::new(load_state(&state_path));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = run_session(
        stdin.lock(),
        &mut stdout,
        &mut dashboard,
        &config,
        &state_path,
        &mut SleepTicker,
    )?;
    debug!(commands = summary.commands, saves = summary.saves, "session ended");
    Ok(exit_codes::OK)
}

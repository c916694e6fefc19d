//! Interactive `motodash drive` session.
//!
//! Reads one command per line, drives the [`Dashboard`], and prints the
//! readout after every command. Holding a control is simulated by a
//! cooperative repeat timer behind the [`Ticker`] seam.

use std::io::{BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::core::registry::Model;
use crate::dashboard::{Control, Dashboard, SaveOutcome};
use crate::io::config::DashConfig;

/// Waits out one repeat interval.
pub trait Ticker {
    fn wait(&mut self, interval: Duration);
}

/// Real-time ticker backed by `thread::sleep`.
#[derive(Debug, Default)]
pub struct SleepTicker;

impl Ticker for SleepTicker {
    fn wait(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Number of repeat ticks that fire while a control is held for `hold`.
pub fn ticks_within(hold: Duration, interval: Duration) -> u32 {
    if interval.is_zero() {
        return 0;
    }
    let ticks = hold.as_nanos() / interval.as_nanos();
    u32::try_from(ticks).unwrap_or(u32::MAX)
}

/// Press `control`, let the repeat timer run for `hold`, then release.
///
/// Returns how many times the action was applied (zero if the press was ignored).
pub fn hold_control<T: Ticker>(
    dashboard: &mut Dashboard,
    control: Control,
    hold: Duration,
    interval: Duration,
    ticker: &mut T,
) -> u32 {
    if !dashboard.on_press_start(control) {
        return 0;
    }
    let mut applied = 1;
    for _ in 0..ticks_within(hold, interval) {
        ticker.wait(interval);
        if !dashboard.on_tick() {
            break;
        }
        applied += 1;
    }
    dashboard.on_press_end();
    debug!(?control, applied, "control released");
    applied
}

/// One line of session input.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Debug, Subcommand)]
enum SessionCommand {
    /// Select a model by name (e.g. `select Honda CBR`).
    Select {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Hold the accelerator.
    Accelerate {
        /// How long to hold, in milliseconds.
        #[arg(long)]
        hold_ms: Option<u64>,
    },
    /// Hold the brake.
    Brake {
        /// How long to hold, in milliseconds.
        #[arg(long)]
        hold_ms: Option<u64>,
    },
    /// Force speed to 50 km/h.
    Cruise,
    /// Save the current state.
    Save,
    /// Print the readout.
    Show,
    /// List available models.
    Models,
    /// End the session.
    #[command(alias = "exit")]
    Quit,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub commands: u32,
    pub saves: u32,
}

/// Run a session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write, T: Ticker>(
    input: R,
    output: &mut W,
    dashboard: &mut Dashboard,
    config: &DashConfig,
    state_path: &Path,
    ticker: &mut T,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    writeln!(output, "{}", dashboard.readout()).context("write readout")?;

    for line in input.lines() {
        let line = line.context("read session input")?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                write!(output, "{}", err).context("write usage")?;
                continue;
            }
        };
        summary.commands += 1;

        match parsed.command {
            SessionCommand::Select { name } => {
                let name = name.join(" ");
                if !dashboard.select_model(&name) {
                    writeln!(output, "unknown model: {name}").context("write output")?;
                }
            }
            SessionCommand::Accelerate { hold_ms } => {
                let hold = hold_ms.map_or_else(|| config.default_hold(), Duration::from_millis);
                hold_control(dashboard, Control::Accelerate, hold, config.tick_interval(), ticker);
            }
            SessionCommand::Brake { hold_ms } => {
                let hold = hold_ms.map_or_else(|| config.default_hold(), Duration::from_millis);
                hold_control(dashboard, Control::Brake, hold, config.tick_interval(), ticker);
            }
            SessionCommand::Cruise => {
                dashboard.toggle_cruise_control();
            }
            SessionCommand::Save => {
                match dashboard.on_save(state_path) {
                    Ok(outcome) => {
                        if outcome == SaveOutcome::Saved {
                            summary.saves += 1;
                        }
                        writeln!(output, "{}", outcome.message()).context("write output")?;
                    }
                    Err(err) => {
                        warn!(
                            path = %state_path.display(),
                            error = %format!("{err:#}"),
                            "save failed"
                        );
                        writeln!(output, "save failed: {err:#}").context("write output")?;
                    }
                }
                continue;
            }
            SessionCommand::Show => {}
            SessionCommand::Models => {
                for model in Model::ALL {
                    writeln!(output, "{model}").context("write output")?;
                }
                continue;
            }
            SessionCommand::Quit => break,
        }
        writeln!(output, "{}", dashboard.readout()).context("write readout")?;
    }

    Ok(summary)
}

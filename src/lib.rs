pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

/// How calculator results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// A calculator invocation. `None` fields fall back to the config file and
/// then to built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Loan {
        amount: Option<f64>,
        rate: Option<f64>,
        months: Option<u32>,
    },
    Inflation {
        amount: Option<f64>,
        years: Option<u32>,
        rate: Option<f64>,
    },
    Savings {
        monthly: Option<f64>,
        rate: Option<f64>,
        years: Option<u32>,
    },
    Budget {
        income: Option<f64>,
        allocations: Vec<(String, f64)>,
    },
    /// Plays a trap scenario with one-based choices, or lists scenarios when
    /// `scenario` is `None`.
    Traps {
        scenario: Option<String>,
        choices: Vec<usize>,
    },
}

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

/// Runs a command and returns what it would print.
pub fn render_command(
    command: AppCommand,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let config = load_config(config_path)?;
    match command {
        AppCommand::Loan {
            amount,
            rate,
            months,
        } => cli::loan::render(&config, amount, rate, months, format),
        AppCommand::Inflation {
            amount,
            years,
            rate,
        } => cli::inflation::render(&config, amount, years, rate, format),
        AppCommand::Savings {
            monthly,
            rate,
            years,
        } => cli::savings::render(&config, monthly, rate, years, format),
        AppCommand::Budget {
            income,
            allocations,
        } => cli::budget::render(&config, income, &allocations, format),
        AppCommand::Traps { scenario, choices } => {
            cli::traps::render(scenario.as_deref(), &choices, format)
        }
    }
}

pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    info!(?command, "Running calculator");
    let output = render_command(command, config_path, format)?;
    println!("{output}");
    Ok(())
}

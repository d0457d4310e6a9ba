use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use finlit::cli::budget::parse_allocation;
use finlit::cli::{MAX_TERM_MONTHS, MAX_YEARS};
use finlit::core::log::init_logging;
use finlit::{AppCommand, OutputFormat};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Monthly payment and overpayment of a loan
    Loan {
        /// Loan amount
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,
        /// Annual interest rate in percent
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,
        /// Term in months (1 to 1200)
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_TERM_MONTHS)))]
        months: Option<u32>,
    },
    /// Real value of money after inflation
    Inflation {
        /// Amount today
        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,
        /// Number of years (1 to 100)
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_YEARS)))]
        years: Option<u32>,
        /// Annual inflation in percent
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,
    },
    /// Growth of a monthly savings plan
    Savings {
        /// Monthly contribution
        #[arg(long, allow_negative_numbers = true)]
        monthly: Option<f64>,
        /// Annual return in percent
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,
        /// Number of years (1 to 100)
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_YEARS)))]
        years: Option<u32>,
    },
    /// Check a monthly budget allocation
    Budget {
        /// Monthly income
        #[arg(long, allow_negative_numbers = true)]
        income: Option<f64>,
        /// Allocation as CATEGORY=AMOUNT, repeatable
        #[arg(long = "alloc", value_parser = parse_allocation)]
        allocations: Vec<(String, f64)>,
    },
    /// Walk through a financial trap scenario
    Traps {
        /// Scenario to play (scam, impulse, pyramid, bad_loan); lists them when omitted
        #[arg(long)]
        scenario: Option<String>,
        /// Choice numbers for each step in order, e.g. 2,2
        #[arg(long, value_delimiter = ',')]
        choices: Vec<usize>,
    },
}

impl From<Commands> for AppCommand {
    fn from(cmd: Commands) -> AppCommand {
        match cmd {
            Commands::Loan {
                amount,
                rate,
                months,
            } => AppCommand::Loan {
                amount,
                rate,
                months,
            },
            Commands::Inflation {
                amount,
                years,
                rate,
            } => AppCommand::Inflation {
                amount,
                years,
                rate,
            },
            Commands::Savings {
                monthly,
                rate,
                years,
            } => AppCommand::Savings {
                monthly,
                rate,
                years,
            },
            Commands::Budget {
                income,
                allocations,
            } => AppCommand::Budget {
                income,
                allocations,
            },
            Commands::Traps { scenario, choices } => AppCommand::Traps { scenario, choices },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let result = match cli.command {
        Some(Commands::Setup) => finlit::cli::setup::setup(),
        Some(cmd) => finlit::run_command(cmd.into(), cli.config_path.as_deref(), format),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

//! Tally command line tool
//!
//! Runs the allocation and invoice rules against JSON documents or
//! command line amounts and prints the derived values.

mod commands;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_shared::{AppConfig, AppError, Currency, Locale};

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Bookkeeping calculation rules: allocation status, invoice totals, formatting")]
struct Cli {
    /// Display locale (overrides configuration).
    #[arg(long, global = true, env = "TALLY_LOCALE")]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify an allocated amount against a total.
    Status {
        /// Full signed amount to allocate.
        #[arg(long, value_parser = input::parse_decimal_arg, allow_hyphen_values = true)]
        total: Decimal,
        /// Amount allocated so far; omit it or pass `NaN` when nothing is.
        #[arg(long, value_parser = input::parse_allocated_arg, allow_hyphen_values = true)]
        allocated: Option<Decimal>,
    },
    /// Signed amount left to allocate.
    Remainder {
        /// Full signed amount to allocate.
        #[arg(long, value_parser = input::parse_decimal_arg, allow_hyphen_values = true)]
        total: Decimal,
        /// One allocation amount; repeat for more.
        #[arg(short, long = "allocation", value_parser = input::parse_decimal_arg, allow_hyphen_values = true)]
        allocations: Vec<Decimal>,
    },
    /// Allocation summary of a transaction or purchase invoice document.
    Summarize {
        /// JSON file, or `-` for stdin.
        path: PathBuf,
        /// Document type.
        #[arg(long, value_enum, default_value_t = DocumentKind::Transaction)]
        kind: DocumentKind,
    },
    /// Totals and submission records for an itemized invoice document.
    Invoice {
        /// JSON file with `{"lines": [...]}`, or `-` for stdin.
        path: PathBuf,
    },
    /// VAT and total for a flat invoice.
    Flat {
        /// Amount excluding VAT.
        #[arg(long, value_parser = input::parse_decimal_arg, allow_hyphen_values = true)]
        subtotal: Decimal,
        /// VAT percentage.
        #[arg(long, value_parser = input::parse_decimal_arg)]
        vat: Decimal,
    },
    /// Format an amount as currency.
    Format {
        /// Amount to format.
        #[arg(value_parser = input::parse_decimal_arg, allow_hyphen_values = true)]
        amount: Decimal,
        /// Currency (defaults to configuration).
        #[arg(long)]
        currency: Option<Currency>,
    },
    /// Parse amount field text the way the forms do.
    Parse {
        /// Text as typed.
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Profit and loss from a transaction list or explicit figures.
    Pnl {
        /// JSON file with a list of transactions, or `-` for stdin.
        path: Option<PathBuf>,
        /// Revenue, when no file is given.
        #[arg(long, value_parser = input::parse_decimal_arg, conflicts_with = "path")]
        revenue: Option<Decimal>,
        /// Expenses as a positive amount, when no file is given.
        #[arg(long, value_parser = input::parse_decimal_arg, conflicts_with = "path")]
        expenses: Option<Decimal>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum DocumentKind {
    Transaction,
    Invoice,
}

fn init_tracing(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };
    if let Some(locale) = cli.locale {
        config.formatting.locale = locale;
    }

    init_tracing(&config);
    info!(locale = %config.formatting.locale, currency = %config.formatting.currency, "configuration loaded");

    match commands::run(cli.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

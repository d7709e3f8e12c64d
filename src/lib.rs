//! ISO 4217 currency database.
//!
//! Resolves a currency's name and precision from its 3-letter or numeric code:
//!
//! ```
//! let usd = currencies::lookup_by_code("USD").unwrap();
//! assert_eq!(usd.number(), 840);
//! assert_eq!(usd.scale(), 100);
//! assert_eq!(currencies::lookup_by_number(840), Some(usd));
//! assert!(currencies::lookup_by_code("usd").is_none());
//! ```

pub mod cli;
pub mod core;

pub use crate::core::{Currency, Registry, all, check_table, lookup_by_code, lookup_by_number};

use crate::core::config::{AppConfig, ConfigOverrides};
use anyhow::Result;
use rust_decimal::Decimal;
use tracing::{debug, info};

pub enum AppCommand {
    Code(Vec<String>),
    Number(Vec<String>),
    List,
    Check,
    MinorUnits { code: String, amount: Decimal },
}

pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    overrides: ConfigOverrides,
) -> Result<()> {
    info!("Currencies starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    }
    .with_overrides(overrides);
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Code(codes) => cli::lookup::run_by_code(&codes, &config),
        AppCommand::Number(numbers) => cli::lookup::run_by_number(&numbers, &config),
        AppCommand::List => cli::list::run(&config),
        AppCommand::Check => cli::check::run(),
        AppCommand::MinorUnits { code, amount } => cli::minor_units::run(&code, amount, &config),
    }
}

use crate::core::config::{AppConfig, OutputFormat};
use crate::core::lookup_by_code;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct MinorUnits {
    pub code: &'static str,
    pub amount: Decimal,
    pub scale: u32,
    pub minor_units: i64,
}

pub fn compute(code: &str, amount: Decimal, config: &AppConfig) -> Result<MinorUnits> {
    let normalized = config.normalize_code(code);
    let currency = lookup_by_code(&normalized)
        .with_context(|| format!("Currency not found: {normalized}"))?;
    let minor_units = currency.to_minor_units(amount).with_context(|| {
        format!(
            "{amount} cannot be expressed in {} minor units ({} decimal places)",
            currency.code(),
            currency.decimal_places()
        )
    })?;

    Ok(MinorUnits {
        code: currency.code(),
        amount,
        scale: currency.scale(),
        minor_units,
    })
}

pub fn run(code: &str, amount: Decimal, config: &AppConfig) -> Result<()> {
    let result = compute(code, amount, config)?;
    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table | OutputFormat::Plain => println!(
            "{} {} = {} (scale {})",
            result.amount, result.code, result.minor_units, result.scale
        ),
    }
    Ok(())
}

use super::ui;
use crate::core::{all, check_table};
use anyhow::{Context, Result};

/// Verifies the compiled-in table and reports a one-line summary.
pub fn run() -> Result<()> {
    let currencies = all();
    check_table(currencies).context("Currency table is inconsistent")?;

    let max_places = currencies
        .iter()
        .map(|c| c.decimal_places())
        .max()
        .unwrap_or_default();
    println!(
        "{} {} currencies, unique codes and numbers, up to {} decimal places",
        ui::style_text("OK", ui::StyleType::Success),
        currencies.len(),
        max_places
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_check_compiled_table() {
        assert!(super::run().is_ok());
    }
}

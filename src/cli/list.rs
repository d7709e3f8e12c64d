use super::ui;
use crate::core::all;
use crate::core::config::{AppConfig, OutputFormat};
use anyhow::Result;

/// Prints every known currency in code order.
pub fn run(config: &AppConfig) -> Result<()> {
    let currencies: Vec<_> = all().iter().collect();

    if config.output == OutputFormat::Table {
        println!(
            "{}\n",
            ui::style_text("ISO 4217 currencies", ui::StyleType::Title)
        );
    }
    println!("{}", ui::render_currencies(&currencies, config.output)?);
    if config.output == OutputFormat::Table {
        println!(
            "\n{}",
            ui::style_text(
                &format!("{} currencies", currencies.len()),
                ui::StyleType::Subtle
            )
        );
    }
    Ok(())
}

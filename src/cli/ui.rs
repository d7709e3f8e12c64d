use crate::core::Currency;
use crate::core::config::OutputFormat;
use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Success,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Success => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

pub fn currencies_table(currencies: &[&Currency]) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Number"),
        header_cell("Decimals"),
        header_cell("Scale"),
        header_cell("Description"),
    ]);

    for currency in currencies {
        table.add_row(vec![
            Cell::new(currency.code()).add_attribute(Attribute::Bold),
            number_cell(format!("{:03}", currency.number())),
            number_cell(currency.decimal_places().to_string()),
            number_cell(currency.scale().to_string()),
            Cell::new(currency.description()),
        ]);
    }
    table
}

/// Renders currencies in the requested output format.
pub fn render_currencies(currencies: &[&Currency], format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Table => currencies_table(currencies).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(currencies)
            .context("Failed to serialize currencies as JSON")?,
        OutputFormat::Plain => currencies
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lookup_by_code;

    fn sample() -> Vec<&'static Currency> {
        ["USD", "BHD"]
            .iter()
            .filter_map(|code| lookup_by_code(code))
            .collect()
    }

    #[test]
    fn test_render_plain() {
        let output = render_currencies(&sample(), OutputFormat::Plain).unwrap();
        assert_eq!(
            output,
            "USD (840) United States dollar\nBHD (048) Bahraini dinar"
        );
    }

    #[test]
    fn test_render_json() {
        let output = render_currencies(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["code"], "USD");
        assert_eq!(value[1]["number"], 48);
        assert_eq!(value[1]["scale"], 1000);
    }

    #[test]
    fn test_render_table() {
        let output = render_currencies(&sample(), OutputFormat::Table).unwrap();
        assert!(output.contains("Code"));
        assert!(output.contains("United States dollar"));
        assert!(output.contains("048"));
        assert!(output.contains("1000"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_currencies(&[], OutputFormat::Plain).unwrap(), "");
        assert_eq!(render_currencies(&[], OutputFormat::Json).unwrap(), "[]");
    }
}

use super::ui;
use crate::core::config::AppConfig;
use crate::core::{Currency, lookup_by_code, lookup_by_number};
use anyhow::{Result, bail};
use std::fmt::Display;
use tracing::debug;

/// Outcome of resolving a batch of user inputs against the registry.
#[derive(Debug, Default, PartialEq)]
pub struct Resolved {
    pub found: Vec<&'static Currency>,
    pub missing: Vec<String>,
}

fn resolve<T: Display>(
    inputs: &[T],
    lookup: impl Fn(&T) -> Option<&'static Currency>,
) -> Resolved {
    let mut resolved = Resolved::default();
    for input in inputs {
        match lookup(input) {
            Some(currency) => {
                debug!(%input, code = currency.code(), "Currency found");
                resolved.found.push(currency);
            }
            None => {
                debug!(%input, "Currency not found");
                resolved.missing.push(input.to_string());
            }
        }
    }
    resolved
}

pub fn resolve_codes(codes: &[String], config: &AppConfig) -> Resolved {
    resolve(codes, |code| lookup_by_code(&config.normalize_code(code)))
}

/// Inputs that are not a number in range are reported as missing, like any
/// unknown code.
pub fn resolve_numbers(numbers: &[String]) -> Resolved {
    resolve(numbers, |number| {
        number.trim().parse::<u16>().ok().and_then(lookup_by_number)
    })
}

fn display(resolved: Resolved, config: &AppConfig) -> Result<()> {
    if !resolved.found.is_empty() {
        println!("{}", ui::render_currencies(&resolved.found, config.output)?);
    }

    if !resolved.missing.is_empty() {
        let missing = resolved.missing.join(", ");
        eprintln!(
            "{} {}",
            ui::style_text("Not found:", ui::StyleType::Error),
            missing
        );
        bail!("Currency not found: {missing}");
    }
    Ok(())
}

pub fn run_by_code(codes: &[String], config: &AppConfig) -> Result<()> {
    display(resolve_codes(codes, config), config)
}

pub fn run_by_number(numbers: &[String], config: &AppConfig) -> Result<()> {
    display(resolve_numbers(numbers), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_codes() {
        let codes = vec!["USD".to_string(), "XYZ".to_string(), "usd".to_string()];
        let resolved = resolve_codes(&codes, &AppConfig::default());
        assert_eq!(resolved.found.len(), 1);
        assert_eq!(resolved.found[0].code(), "USD");
        assert_eq!(resolved.missing, vec!["XYZ", "usd"]);
    }

    #[test]
    fn test_resolve_codes_ignoring_case() {
        let config = AppConfig {
            ignore_case: true,
            ..AppConfig::default()
        };
        let codes = vec!["usd".to_string(), " eur ".to_string()];
        let resolved = resolve_codes(&codes, &config);
        let found: Vec<_> = resolved.found.iter().map(|c| c.code()).collect();
        assert_eq!(found, vec!["USD", "EUR"]);
        assert!(resolved.missing.is_empty());
    }

    fn strings(inputs: &[&str]) -> Vec<String> {
        inputs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_numbers() {
        let resolved = resolve_numbers(&strings(&["840", "999", "048"]));
        let found: Vec<_> = resolved.found.iter().map(|c| c.code()).collect();
        assert_eq!(found, vec!["USD", "BHD"]);
        assert_eq!(resolved.missing, vec!["999"]);
    }

    #[test]
    fn test_resolve_numbers_out_of_range_or_malformed() {
        let resolved = resolve_numbers(&strings(&["70000", "-1", "abc", "", "978"]));
        assert_eq!(resolved.found.len(), 1);
        assert_eq!(resolved.found[0].code(), "EUR");
        assert_eq!(resolved.missing, vec!["70000", "-1", "abc", ""]);
    }

    #[test]
    fn test_run_by_code_fails_on_missing() {
        let err = run_by_code(&["ABCDS".to_string()], &AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("ABCDS"));
    }

    #[test]
    fn test_run_by_number_succeeds() {
        assert!(run_by_number(&strings(&["978"]), &AppConfig::default()).is_ok());
    }
}

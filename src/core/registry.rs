//! Indexed, read-only view over the currency table.

use super::currency::{Currency, MAX_DECIMAL_PLACES};
use super::table::CURRENCIES;
use anyhow::{Result, bail};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use tracing::{debug, warn};

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| Registry::new(CURRENCIES));

/// Lookup indices by alphabetic and numeric code. Both maps borrow from the
/// static record slice, which stays the single source of truth.
#[derive(Debug)]
pub struct Registry {
    records: &'static [Currency],
    by_code: HashMap<&'static str, &'static Currency>,
    by_number: HashMap<u16, &'static Currency>,
}

impl Registry {
    /// Builds both indices from `records`. If two records share a key, the
    /// earlier one is kept.
    pub fn new(records: &'static [Currency]) -> Self {
        let mut by_code: HashMap<&'static str, &'static Currency> =
            HashMap::with_capacity(records.len());
        let mut by_number: HashMap<u16, &'static Currency> = HashMap::with_capacity(records.len());

        for currency in records {
            if let Some(existing) = by_code.get(currency.code()) {
                warn!(code = currency.code(), kept = %existing, "Duplicate currency code");
            } else {
                by_code.insert(currency.code(), currency);
            }
            if let Some(existing) = by_number.get(&currency.number()) {
                warn!(number = currency.number(), kept = %existing, "Duplicate currency number");
            } else {
                by_number.insert(currency.number(), currency);
            }
        }

        debug!(
            records = records.len(),
            codes = by_code.len(),
            numbers = by_number.len(),
            "Built currency registry"
        );

        Self {
            records,
            by_code,
            by_number,
        }
    }

    /// The process-wide registry over the compiled-in table.
    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    /// Exact, case-sensitive match on the 3-letter code.
    pub fn by_code(&self, code: &str) -> Option<&'static Currency> {
        self.by_code.get(code).copied()
    }

    pub fn by_number(&self, number: u16) -> Option<&'static Currency> {
        self.by_number.get(&number).copied()
    }

    /// All records in table order.
    pub fn all(&self) -> &'static [Currency] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Finds a currency by its 3-letter code. Returns `None` if it is not in the
/// database; no case folding or trimming is applied.
pub fn lookup_by_code(code: &str) -> Option<&'static Currency> {
    Registry::global().by_code(code)
}

/// Finds a currency by its numeric code. Returns `None` if it is not in the
/// database.
pub fn lookup_by_number(number: u16) -> Option<&'static Currency> {
    Registry::global().by_number(number)
}

/// Every currency in the database, ordered by code.
pub fn all() -> &'static [Currency] {
    Registry::global().all()
}

/// Verifies that `records` forms a well-formed table: unique codes and
/// numbers, 3 uppercase ASCII letters per code, numbers within 0..=999 and a
/// scale matching the decimal places.
pub fn check_table(records: &[Currency]) -> Result<()> {
    let mut codes = HashSet::with_capacity(records.len());
    let mut numbers = HashSet::with_capacity(records.len());

    for currency in records {
        let code = currency.code();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            bail!("Invalid currency code {code:?}: expected 3 uppercase letters");
        }
        if currency.number() > 999 {
            bail!(
                "Invalid number {} for {code}: must be within 0..=999",
                currency.number()
            );
        }
        if currency.decimal_places() > MAX_DECIMAL_PLACES {
            bail!(
                "Invalid decimal places {} for {code}: at most {MAX_DECIMAL_PLACES} supported",
                currency.decimal_places()
            );
        }
        let expected_scale = 10u32.pow(u32::from(currency.decimal_places()));
        if currency.scale() != expected_scale {
            bail!(
                "Scale {} for {code} does not match {} decimal places",
                currency.scale(),
                currency.decimal_places()
            );
        }
        if !codes.insert(code) {
            bail!("Duplicate currency code {code}");
        }
        if !numbers.insert(currency.number()) {
            bail!("Duplicate currency number {} ({code})", currency.number());
        }
    }

    debug!(records = records.len(), "Currency table check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    static DUPLICATES: &[Currency] = &[
        Currency::new("AAA", 1, 2, "First"),
        Currency::new("AAA", 2, 2, "Same code"),
        Currency::new("BBB", 1, 0, "Same number"),
    ];

    #[test]
    fn test_compiled_table_is_valid() {
        check_table(CURRENCIES).unwrap();
        assert_eq!(CURRENCIES.len(), 164);
    }

    #[test]
    fn test_table_is_sorted_by_code() {
        assert!(CURRENCIES.windows(2).all(|w| w[0].code() < w[1].code()));
    }

    #[test]
    fn test_global_indexes_every_record() {
        let registry = Registry::global();
        assert_eq!(registry.len(), CURRENCIES.len());
        assert!(!registry.is_empty());
        for currency in CURRENCIES {
            assert_eq!(registry.by_code(currency.code()), Some(currency));
            assert_eq!(registry.by_number(currency.number()), Some(currency));
        }
    }

    #[test]
    fn test_global_matches_fresh_build() {
        let global = Registry::global();
        let fresh = Registry::new(CURRENCIES);
        assert!(std::ptr::eq(global.all(), CURRENCIES));
        assert_eq!(global.by_code, fresh.by_code);
        assert_eq!(global.by_number, fresh.by_number);
    }

    #[test]
    fn test_rebuild_is_identical() {
        let first = Registry::new(CURRENCIES);
        let second = Registry::new(CURRENCIES);
        assert_eq!(first.by_code, second.by_code);
        assert_eq!(first.by_number, second.by_number);
    }

    #[test_log::test]
    fn test_duplicates_keep_first_record() {
        let registry = Registry::new(DUPLICATES);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.by_code("AAA").unwrap().description(), "First");
        assert_eq!(registry.by_number(1).unwrap().description(), "First");
        assert_eq!(registry.by_number(2).unwrap().description(), "Same code");
        assert_eq!(registry.by_code("BBB").unwrap().description(), "Same number");
    }

    #[test]
    fn test_check_table_rejects_duplicate_code() {
        let err = check_table(&DUPLICATES[..2]).unwrap_err();
        assert!(err.to_string().contains("Duplicate currency code AAA"));
    }

    #[test]
    fn test_check_table_rejects_duplicate_number() {
        let records = [DUPLICATES[0], DUPLICATES[2]];
        let err = check_table(&records).unwrap_err();
        assert!(err.to_string().contains("Duplicate currency number 1"));
    }

    #[test]
    fn test_check_table_rejects_bad_code() {
        for code in ["usd", "US", "USDX", "U1D"] {
            let records = [Currency::new(code, 840, 2, "Bad")];
            assert!(check_table(&records).is_err(), "{code} should be rejected");
        }
    }

    #[test]
    fn test_check_table_rejects_number_out_of_range() {
        let records = [Currency::new("ABC", 1000, 2, "Too big")];
        let err = check_table(&records).unwrap_err();
        assert!(err.to_string().contains("0..=999"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new(&[]);
        assert!(registry.is_empty());
        assert_eq!(registry.by_code("USD"), None);
        assert_eq!(registry.by_number(840), None);
    }

    #[test]
    fn test_lookup_by_code_is_case_sensitive() {
        assert!(lookup_by_code("USD").is_some());
        assert_eq!(lookup_by_code("usd"), None);
        assert_eq!(lookup_by_code("Usd"), None);
        assert_eq!(lookup_by_code(" USD"), None);
    }
}

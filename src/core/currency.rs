//! ISO 4217 currency record.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::fmt;

/// Powers of ten indexed by minor-unit digits.
const SCALES: [u32; 5] = [1, 10, 100, 1_000, 10_000];

/// Largest number of minor-unit digits any record may carry.
pub const MAX_DECIMAL_PLACES: u8 = (SCALES.len() - 1) as u8;

/// A single currency entry. Instances only exist inside the compiled table and
/// are handed out as `&'static Currency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Currency {
    code: &'static str,
    number: u16,
    decimal_places: u8,
    scale: u32,
    description: &'static str,
}

impl Currency {
    /// Builds a record, deriving `scale` from `decimal_places`.
    ///
    /// Evaluated at compile time for the static table, so a record with more
    /// than [`MAX_DECIMAL_PLACES`] digits fails the build.
    pub(crate) const fn new(
        code: &'static str,
        number: u16,
        decimal_places: u8,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            number,
            decimal_places,
            scale: SCALES[decimal_places as usize],
            description,
        }
    }

    /// 3-letter currency code, e.g. "USD" for US dollar.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Numeric currency code, e.g. 840 for US dollar.
    pub fn number(&self) -> u16 {
        self.number
    }

    /// Digits after the decimal point, e.g. 2 for US dollar or 0 for Japanese yen.
    pub fn decimal_places(&self) -> u8 {
        self.decimal_places
    }

    /// Multiplier converting a major-unit amount to the lowest denomination,
    /// e.g. 100 for US dollar (dollars to cents) or 1 for Japanese yen.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Plain English name, e.g. "United States dollar".
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Converts a major-unit amount into an integer count of minor units.
    ///
    /// Returns `None` if the amount carries more fractional digits than the
    /// currency allows, or if the result does not fit in an `i64`.
    pub fn to_minor_units(&self, amount: Decimal) -> Option<i64> {
        let minor = amount.checked_mul(Decimal::from(self.scale))?;
        if !minor.fract().is_zero() {
            return None;
        }
        minor.to_i64()
    }

    /// Converts a count of minor units back into a major-unit amount with
    /// exactly `decimal_places` fractional digits.
    pub fn major_units(&self, minor: i64) -> Decimal {
        Decimal::new(minor, u32::from(self.decimal_places))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:03}) {}", self.code, self.number, self.description)
    }
}

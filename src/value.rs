use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::{One, Zero};

/// The single number a message is encoded into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedValue(BigDecimal);

impl EncodedValue {
    pub fn new(value: BigDecimal) -> Self {
        EncodedValue(value)
    }

    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Number of significant digits after the decimal point, ignoring
    /// trailing zeros.
    pub fn fractional_digits(&self) -> u64 {
        let (_, scale) = self.0.normalized().as_bigint_and_exponent();
        scale.max(0) as u64
    }

    /// Whether the value lies in `[0, 1)`.
    pub fn is_in_unit_interval(&self) -> bool {
        self.0 >= BigDecimal::zero() && self.0 < BigDecimal::one()
    }
}

impl FromStr for EncodedValue {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s.trim()).map(EncodedValue)
    }
}

/// Always positional notation, never exponent notation, so the full digit
/// string can be copied into a decoder.
impl fmt::Display for EncodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_plain_string(f)
    }
}

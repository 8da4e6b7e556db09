use num_bigint::BigUint;

/// The number of fractional decimal digits carried by the fixed-point
/// interval arithmetic.
///
/// Interval bounds are multiples of `10^-digits`. The width of the working
/// interval after `n` symbols is roughly the product of the probabilities of
/// those symbols, so longer messages and larger alphabets need more digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u32);

impl Precision {
    pub const DEFAULT: Precision = Precision(70);

    pub const fn new(digits: u32) -> Self {
        Precision(digits)
    }

    pub const fn digits(&self) -> u32 {
        self.0
    }

    /// The smallest precision guaranteed to code any message of `length`
    /// symbols over an alphabet of `alphabet_len` symbols.
    ///
    /// At step `i` the least likely symbol has probability `1 / (i + k)`, so
    /// the exact interval width never drops below `prod 1 / (i + k)`. Flooring
    /// each sub-interval loses at most one unit per step, which the
    /// `log10(n + 2)` term covers; one extra guard digit is added on top.
    pub fn sufficient_for(length: usize, alphabet_len: usize) -> Self {
        let k = alphabet_len.max(1) as f64;
        let narrowing: f64 = (0..length).map(|i| (i as f64 + k).log10()).sum();
        let rounding = (length as f64 + 2.0).log10();
        Precision((narrowing + rounding).ceil() as u32 + 1)
    }

    /// `10^digits`, the fixed-point representation of 1.
    pub(crate) fn one(&self) -> BigUint {
        BigUint::from(10u32).pow(self.0)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::DEFAULT
    }
}

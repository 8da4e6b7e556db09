use std::f64::consts::LOG2_10;

use crate::alphabet::Symbol;
use crate::value::EncodedValue;

/// Bits per input symbol when the message is stored uncompressed.
pub const SYMBOL_BITS: u64 = 8;

/// The outcome of coding one message: whether it survived the round trip and
/// how large the encoded value is compared to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionReport<S: Symbol> {
    pub value: EncodedValue,
    pub decoded: Vec<S>,
    pub round_trip: bool,
    /// Size of the message at [`SYMBOL_BITS`] per symbol.
    pub input_bits: u64,
    /// Bits needed to write the fractional digits of the value as a binary
    /// integer.
    pub encoded_bits: u64,
}

impl<S: Symbol> CompressionReport<S> {
    pub fn new(message: &[S], value: EncodedValue, decoded: Vec<S>) -> Self {
        Self {
            round_trip: decoded == message,
            input_bits: message.len() as u64 * SYMBOL_BITS,
            encoded_bits: encoded_bits(&value),
            value,
            decoded,
        }
    }

    /// Encoded size over input size; below one means the message shrank.
    pub fn ratio(&self) -> f64 {
        if self.input_bits == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.input_bits as f64
    }
}

/// `ceil(digits * log2(10))` for the significant fractional digits of
/// `value`.
pub fn encoded_bits(value: &EncodedValue) -> u64 {
    (value.fractional_digits() as f64 * LOG2_10).ceil() as u64
}

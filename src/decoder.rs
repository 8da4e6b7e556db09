use log::{debug, trace};

use crate::alphabet::{Alphabet, Symbol};
use crate::error::CodingError;
use crate::interval::Interval;
use crate::model::FrequencyCounts;
use crate::precision::Precision;
use crate::value::EncodedValue;

pub struct Decoder<S: Symbol> {
    alphabet: Alphabet<S>,
    precision: Precision,
}

/// The decoded symbols of a single message, one per step.
pub struct DecoderOutput<'d, S: Symbol> {
    value: &'d EncodedValue,
    length: usize,
    position: usize,
    counts: FrequencyCounts<'d, S>,
    interval: Interval,
    failed: bool,
}

// Decoder Algorithm
//
// Input: v, n
//
// [lo, hi) = [0, 1), decoded = []
// for i = 0, ..., n-1
//     P = laplace(decoded, A)             (same prefix the encoder saw)
//     partition [lo, hi) by P, in alphabet order
//     fail if any sub-interval is empty
//     s = first symbol whose sub-interval has seg_lo <= v < seg_hi
//     decoded.push(s)
//     [lo, hi) = sub-interval of s
impl<S: Symbol> DecoderOutput<'_, S> {
    fn advance(&mut self) -> Result<S, CodingError> {
        let value = self.value.as_big_decimal();
        let partition = self.interval.partition(&self.counts.table());
        if partition.has_empty_segment() {
            return Err(CodingError::PrecisionExhausted {
                step: self.position,
                precision: self.interval.precision(),
            });
        }

        let (symbol, next) =
            partition
                .locate(value)
                .ok_or_else(|| CodingError::NoMatchingInterval {
                    step: self.position,
                    value: self.value.to_string(),
                })?;

        trace!(
            "step {}: {:?} <- [{}, {})",
            self.position,
            symbol,
            next.lo(),
            next.hi()
        );

        self.interval = next.clone();
        self.counts.observe(symbol)?;
        self.position += 1;
        Ok(symbol)
    }
}

impl<S: Symbol> Iterator for DecoderOutput<'_, S> {
    type Item = Result<S, CodingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.length {
            return None;
        }

        let symbol = self.advance();
        self.failed = symbol.is_err();
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.length - self.position))
    }
}

impl<S: Symbol> Decoder<S> {
    /// Create a decoder for values produced by an [`Encoder`] with the same
    /// alphabet and precision.
    ///
    /// [`Encoder`]: crate::encoder::Encoder
    pub fn new(alphabet: Alphabet<S>, precision: Precision) -> Self {
        Self {
            alphabet,
            precision,
        }
    }

    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Decode `length` symbols from `value`, one at a time.
    ///
    /// The value is checked before the first step: it must lie in `[0, 1)`
    /// and carry no more digits than an encoder of this precision emits.
    pub fn symbols<'d>(
        &'d self,
        value: &'d EncodedValue,
        length: usize,
    ) -> Result<DecoderOutput<'d, S>, CodingError> {
        if length == 0 {
            return Err(CodingError::EmptyMessage);
        }
        if !value.is_in_unit_interval() {
            return Err(CodingError::ValueOutOfRange {
                value: value.as_big_decimal().to_string(),
            });
        }
        let digits = value.fractional_digits();
        if digits > u64::from(self.precision.digits()) + 1 {
            return Err(CodingError::PrecisionMismatch {
                digits,
                precision: self.precision,
            });
        }

        Ok(DecoderOutput {
            value,
            length,
            position: 0,
            counts: FrequencyCounts::new(&self.alphabet),
            interval: Interval::unit(self.precision),
            failed: false,
        })
    }

    /// Decode a whole message of `length` symbols.
    pub fn decode(&self, value: &EncodedValue, length: usize) -> Result<Vec<S>, CodingError> {
        debug!(
            "decoding {} symbols over {} with {} digits",
            length,
            self.alphabet.len(),
            self.precision.digits()
        );

        let decoded = self.symbols(value, length)?.collect::<Result<Vec<_>, _>>()?;
        debug!("decoded {} symbols", decoded.len());
        Ok(decoded)
    }
}

use log::{debug, trace};

use crate::alphabet::{Alphabet, Symbol};
use crate::error::CodingError;
use crate::interval::Interval;
use crate::model::FrequencyCounts;
use crate::precision::Precision;
use crate::value::EncodedValue;

pub struct Encoder<S: Symbol> {
    alphabet: Alphabet<S>,
    precision: Precision,
}

/// The working interval after each encoded symbol.
pub struct EncoderSteps<'e, S: Symbol> {
    message: &'e [S],
    position: usize,
    counts: FrequencyCounts<'e, S>,
    interval: Interval,
    failed: bool,
}

// Encoder Algorithm
//
// Input: x_0, ..., x_{n-1} over alphabet A
//
// [lo, hi) = [0, 1)
// for i = 0, ..., n-1
//     P = laplace(x_0 .. x_{i-1}, A)      (never sees x_i)
//     partition [lo, hi) by P, in alphabet order
//     [lo, hi) = sub-interval of x_i
//     fail if any sub-interval is empty
// emit (lo + hi) / 2
impl<S: Symbol> EncoderSteps<'_, S> {
    fn advance(&mut self) -> Result<Interval, CodingError> {
        let symbol = self.message[self.position];
        let table = self.counts.table();
        let partition = self.interval.partition(&table);
        if partition.has_empty_segment() {
            return Err(CodingError::PrecisionExhausted {
                step: self.position,
                precision: self.interval.precision(),
            });
        }

        let next = partition
            .take(&symbol)
            .ok_or_else(|| CodingError::UnknownSymbol {
                position: self.position,
                symbol: format!("{symbol:?}"),
            })?;

        trace!(
            "step {}: {:?} -> [{}, {})",
            self.position,
            symbol,
            next.lo(),
            next.hi()
        );

        self.counts.observe(symbol)?;
        self.interval = next.clone();
        self.position += 1;
        Ok(next)
    }
}

impl<S: Symbol> Iterator for EncoderSteps<'_, S> {
    type Item = Result<Interval, CodingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.message.len() {
            return None;
        }

        let step = self.advance();
        self.failed = step.is_err();
        Some(step)
    }
}

impl<S: Symbol> Encoder<S> {
    /// Create an encoder for messages drawn from `alphabet`, computing
    /// interval bounds to `precision` fractional digits.
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

    /// Walk the message one symbol at a time, yielding the narrowed working
    /// interval after each symbol.
    ///
    /// The message is validated up front, so an empty message or a symbol
    /// outside the alphabet fails before any interval is computed.
    pub fn steps<'e>(&'e self, message: &'e [S]) -> Result<EncoderSteps<'e, S>, CodingError> {
        self.alphabet.validate(message)?;

        Ok(EncoderSteps {
            message,
            position: 0,
            counts: FrequencyCounts::new(&self.alphabet),
            interval: Interval::unit(self.precision),
            failed: false,
        })
    }

    /// Encode a whole message as the midpoint of its final interval.
    pub fn encode(&self, message: &[S]) -> Result<EncodedValue, CodingError> {
        debug!(
            "encoding {} symbols over {} with {} digits",
            message.len(),
            self.alphabet.len(),
            self.precision.digits()
        );

        let mut interval = Interval::unit(self.precision);
        for step in self.steps(message)? {
            interval = step?;
        }

        let value = EncodedValue::new(interval.midpoint());
        debug!("encoded value has {} digits", value.fractional_digits());
        Ok(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    /// Convenience function for encoding a string over the alphabet `ab`
    fn encode(message: &str, digits: u32) -> Result<EncodedValue, CodingError> {
        let alphabet = Alphabet::from_text("ab").unwrap();
        let encoder = Encoder::new(alphabet, Precision::new(digits));
        encoder.encode(&message.chars().collect::<Vec<_>>())
    }

    fn value(s: &str) -> EncodedValue {
        EncodedValue::new(BigDecimal::from_str(s).unwrap())
    }

    #[test]
    fn encode_single_symbol() {
        // a -> [0, 0.5)
        assert_eq!(encode("a", 3), Ok(value("0.2500")));
        // b -> [0.5, 1)
        assert_eq!(encode("b", 3), Ok(value("0.7500")));
    }

    #[test]
    fn encode_small_message() {
        // a -> [0, 0.5), then P(a) = 2/3 puts b at [0.333, 0.5)
        assert_eq!(encode("ab", 3), Ok(value("0.4165")));
    }

    #[test]
    fn encode_small_message_default_precision() {
        // Same intervals as above, with the floor applied at the 70th digit.
        let expected = format!("0.41{}65", "6".repeat(67));
        assert_eq!(encode("ab", 70), Ok(value(&expected)));
    }

    #[test]
    fn encode_repeated_symbol_single_alphabet() {
        let alphabet = Alphabet::from_text("a").unwrap();
        let encoder = Encoder::new(alphabet, Precision::DEFAULT);
        assert_eq!(encoder.encode(&['a'; 4]), Ok(value("0.5")));
    }

    #[test]
    fn error_on_empty_message() {
        assert_eq!(encode("", 10), Err(CodingError::EmptyMessage));
    }

    #[test]
    fn error_on_unknown_symbol() {
        assert_eq!(
            encode("abcab", 10),
            Err(CodingError::UnknownSymbol {
                position: 2,
                symbol: "'c'".into()
            })
        );
    }

    #[test]
    fn unknown_symbol_rejected_before_any_step() {
        let alphabet = Alphabet::from_text("ab").unwrap();
        let encoder = Encoder::new(alphabet, Precision::DEFAULT);
        assert!(encoder.steps(&['a', 'b', 'z']).is_err());
    }

    #[test]
    fn error_on_exhausted_precision() {
        let result = encode(&"ab".repeat(20), 5);
        assert!(matches!(
            result,
            Err(CodingError::PrecisionExhausted { precision, .. }) if precision == Precision::new(5)
        ));
    }

    #[test]
    fn steps_narrow_monotonically() {
        let alphabet = Alphabet::from_text("abc").unwrap();
        let encoder = Encoder::new(alphabet, Precision::DEFAULT);
        let message: Vec<char> = "abcabbbcaacb".chars().collect();

        let mut previous = Interval::unit(Precision::DEFAULT);
        let mut count = 0;
        for step in encoder.steps(&message).unwrap() {
            let step = step.unwrap();
            assert!(step.is_within(&previous));
            assert!(step.width() < previous.width());
            previous = step;
            count += 1;
        }
        assert_eq!(count, message.len());
    }

    #[test]
    fn error_when_rounding_empties_other_symbol() {
        // At one digit, a has no room from step 3 on, so b could no longer
        // narrow [0.3, 0.4).
        assert_eq!(
            encode("ababbbbb", 1),
            Err(CodingError::PrecisionExhausted {
                step: 3,
                precision: Precision::new(1)
            })
        );
    }

    #[test]
    fn steps_stop_after_failure() {
        let alphabet = Alphabet::from_text("ab").unwrap();
        let encoder = Encoder::new(alphabet, Precision::new(1));
        let message: Vec<char> = "abababab".chars().collect();

        let steps: Vec<_> = encoder.steps(&message).unwrap().collect();
        assert!(steps.last().unwrap().is_err());
        assert!(steps.len() < message.len());
    }
}

use log::warn;

use crate::alphabet::{Alphabet, Symbol};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodingError;
use crate::precision::Precision;
use crate::stats::CompressionReport;
use crate::value::EncodedValue;

/// A paired encoder and decoder sharing one alphabet and one precision.
///
/// Values produced by [`Session::encode`] are only meaningful to a decoder
/// built from the same alphabet and precision.
pub struct Session<S: Symbol> {
    encoder: Encoder<S>,
    decoder: Decoder<S>,
}

impl<S: Symbol> Session<S> {
    pub fn new(alphabet: Alphabet<S>, precision: Precision) -> Self {
        Self {
            encoder: Encoder::new(alphabet.clone(), precision),
            decoder: Decoder::new(alphabet, precision),
        }
    }

    /// A session over the distinct symbols of `message`.
    pub fn from_message(message: &[S], precision: Precision) -> Result<Self, CodingError> {
        Ok(Self::new(Alphabet::from_message(message)?, precision))
    }

    /// A session over the distinct symbols of `message`, with just enough
    /// precision to code it.
    pub fn sized_for(message: &[S]) -> Result<Self, CodingError> {
        let alphabet = Alphabet::from_message(message)?;
        let precision = Precision::sufficient_for(message.len(), alphabet.len());
        Ok(Self::new(alphabet, precision))
    }

    pub fn alphabet(&self) -> &Alphabet<S> {
        self.encoder.alphabet()
    }

    pub fn precision(&self) -> Precision {
        self.encoder.precision()
    }

    pub fn encode(&self, message: &[S]) -> Result<EncodedValue, CodingError> {
        let needed = Precision::sufficient_for(message.len(), self.alphabet().len());
        if self.precision() < needed {
            warn!(
                "{} digits of precision may not suffice for {} symbols, {} recommended",
                self.precision().digits(),
                message.len(),
                needed.digits()
            );
        }
        self.encoder.encode(message)
    }

    pub fn decode(&self, value: &EncodedValue, length: usize) -> Result<Vec<S>, CodingError> {
        self.decoder.decode(value, length)
    }

    /// Encode `message`, decode it again and report on the result.
    pub fn round_trip(&self, message: &[S]) -> Result<CompressionReport<S>, CodingError> {
        let value = self.encode(message)?;
        let decoded = self.decode(&value, message.len())?;
        Ok(CompressionReport::new(message, value, decoded))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test_log::test]
    fn test_round_trip() {
        let message = chars("abracadabra");
        let session = Session::from_message(&message, Precision::DEFAULT).unwrap();
        let value = session.encode(&message).unwrap();
        assert_eq!(session.decode(&value, message.len()), Ok(message));
    }

    #[test_log::test]
    fn test_sized_for() {
        let message = chars("the quick brown fox jumps over the lazy dog");
        let session = Session::sized_for(&message).unwrap();
        assert_eq!(
            session.precision(),
            Precision::sufficient_for(message.len(), session.alphabet().len())
        );

        let report = session.round_trip(&message).unwrap();
        assert!(report.round_trip);
    }

    #[test_log::test]
    fn test_low_precision_warns_then_fails() {
        let message = chars("abcdefghijklmnopqrstuvwxyz");
        let session = Session::from_message(&message, Precision::new(8)).unwrap();
        let err = session.encode(&message).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PrecisionExhausted);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            Session::<char>::from_message(&[], Precision::DEFAULT).err(),
            Some(CodingError::EmptyAlphabet)
        );
        let session = Session::new(Alphabet::from_text("ab").unwrap(), Precision::DEFAULT);
        assert_eq!(session.encode(&[]), Err(CodingError::EmptyMessage));
    }
}

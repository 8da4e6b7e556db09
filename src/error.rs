use crate::precision::Precision;

/// The broad class an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller handed over an alphabet, message or length that cannot be
    /// coded at all.
    InvalidInput,
    /// The working interval shrank to zero width before the message was
    /// complete.
    PrecisionExhausted,
    /// The encoded value could not be mapped back onto a symbol.
    DecodeError,
}

/// Errors that can occur while encoding or decoding
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodingError {
    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("Message must contain at least one symbol")]
    EmptyMessage,

    #[error("Symbol {symbol} at position {position} is not in the alphabet")]
    UnknownSymbol { position: usize, symbol: String },

    #[error("Interval collapsed at step {step} with {} digits of precision", .precision.digits())]
    PrecisionExhausted { step: usize, precision: Precision },

    #[error("Encoded value {value} lies outside [0, 1)")]
    ValueOutOfRange { value: String },

    #[error(
        "Encoded value has {digits} fractional digits, but {} digits of precision produce at most {}",
        .precision.digits(),
        .precision.digits() + 1
    )]
    PrecisionMismatch { digits: u64, precision: Precision },

    #[error("Encoded value {value} falls in no sub-interval at step {step}")]
    NoMatchingInterval { step: usize, value: String },
}

impl CodingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodingError::EmptyAlphabet
            | CodingError::EmptyMessage
            | CodingError::UnknownSymbol { .. } => ErrorKind::InvalidInput,
            CodingError::PrecisionExhausted { .. } => ErrorKind::PrecisionExhausted,
            CodingError::ValueOutOfRange { .. }
            | CodingError::PrecisionMismatch { .. }
            | CodingError::NoMatchingInterval { .. } => ErrorKind::DecodeError,
        }
    }
}

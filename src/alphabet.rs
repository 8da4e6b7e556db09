use std::fmt::Debug;

use crate::error::CodingError;

/// Anything that can appear in a message.
///
/// The ordering is what fixes the position of each symbol inside a
/// probability table, so it must be the same for encoder and decoder.
pub trait Symbol: Ord + Copy + Debug {}

impl Symbol for char {}
impl Symbol for u8 {}

/// The set of symbols a session may code, stored in ascending order.
///
/// The order is fixed when the alphabet is built and every probability table
/// and partition walks the symbols in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<S: Symbol> {
    symbols: Vec<S>,
}

impl<S: Symbol> Alphabet<S> {
    /// Build an alphabet from any collection of symbols. Duplicates are
    /// dropped.
    pub fn new<I>(symbols: I) -> Result<Self, CodingError>
    where
        I: IntoIterator<Item = S>,
    {
        let mut symbols: Vec<S> = symbols.into_iter().collect();
        symbols.sort_unstable();
        symbols.dedup();

        if symbols.is_empty() {
            return Err(CodingError::EmptyAlphabet);
        }
        Ok(Self { symbols })
    }

    /// The distinct symbols occurring in `message`.
    pub fn from_message(message: &[S]) -> Result<Self, CodingError> {
        Self::new(message.iter().copied())
    }

    /// An iterator over the symbols in the alphabet, in table order.
    pub fn symbols(&self) -> impl Iterator<Item = &S> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Position of `symbol` in table order.
    pub fn index_of(&self, symbol: &S) -> Option<usize> {
        self.symbols.binary_search(symbol).ok()
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Check that `message` is non-empty and drawn entirely from this
    /// alphabet.
    pub fn validate(&self, message: &[S]) -> Result<(), CodingError> {
        if message.is_empty() {
            return Err(CodingError::EmptyMessage);
        }
        match message.iter().position(|s| !self.contains(s)) {
            Some(position) => Err(CodingError::UnknownSymbol {
                position,
                symbol: format!("{:?}", message[position]),
            }),
            None => Ok(()),
        }
    }
}

impl Alphabet<char> {
    /// The distinct characters of `text`.
    pub fn from_text(text: &str) -> Result<Self, CodingError> {
        Self::new(text.chars())
    }
}

use num_rational::Ratio;

use crate::alphabet::{Alphabet, Symbol};
use crate::error::CodingError;

/// Conditional probabilities of every alphabet symbol, in alphabet order.
///
/// Each probability is stored as an integer weight `count(s) + 1` over the
/// shared denominator `total + |alphabet|`, so the values are exact and sum
/// to exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityTable<S: Symbol> {
    weights: Vec<(S, u64)>,
    denominator: u64,
}

impl<S: Symbol> ProbabilityTable<S> {
    /// An iterator over `(symbol, probability)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (S, Ratio<u64>)> + '_ {
        self.weights
            .iter()
            .map(|&(symbol, weight)| (symbol, Ratio::new(weight, self.denominator)))
    }

    pub fn probability(&self, symbol: &S) -> Option<Ratio<u64>> {
        self.iter().find(|(s, _)| s == symbol).map(|(_, p)| p)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Unnormalised weights, whose sum is `denominator()`.
    pub(crate) fn weights(&self) -> impl ExactSizeIterator<Item = (S, u64)> + '_ {
        self.weights.iter().copied()
    }

    pub(crate) fn denominator(&self) -> u64 {
        self.denominator
    }
}

/// Laplace-smoothed probability table for the symbol following `prefix`.
///
/// ```text
/// P(s) = (count(s) + 1) / (len(prefix) + |alphabet|)
/// ```
///
/// Every symbol keeps a strictly positive probability, even one that has
/// never been seen.
pub fn compute_table<S: Symbol>(
    prefix: &[S],
    alphabet: &Alphabet<S>,
) -> Result<ProbabilityTable<S>, CodingError> {
    let mut counts = FrequencyCounts::new(alphabet);
    for &symbol in prefix {
        counts.observe(symbol)?;
    }
    Ok(counts.table())
}

/// Running symbol counts over the prefix coded so far.
///
/// Encoder and decoder feed it one symbol per step instead of rescanning the
/// whole prefix, which yields the same tables as [`compute_table`].
#[derive(Debug, Clone)]
pub struct FrequencyCounts<'a, S: Symbol> {
    alphabet: &'a Alphabet<S>,
    counts: Vec<u64>,
    total: u64,
}

impl<'a, S: Symbol> FrequencyCounts<'a, S> {
    pub fn new(alphabet: &'a Alphabet<S>) -> Self {
        Self {
            alphabet,
            counts: vec![0; alphabet.len()],
            total: 0,
        }
    }

    /// Record one more occurrence of `symbol`.
    pub fn observe(&mut self, symbol: S) -> Result<(), CodingError> {
        let index = self
            .alphabet
            .index_of(&symbol)
            .ok_or_else(|| CodingError::UnknownSymbol {
                position: self.total as usize,
                symbol: format!("{symbol:?}"),
            })?;
        self.counts[index] += 1;
        self.total += 1;
        Ok(())
    }

    pub fn table(&self) -> ProbabilityTable<S> {
        let weights = self
            .alphabet
            .symbols()
            .zip(&self.counts)
            .map(|(&symbol, &count)| (symbol, count + 1))
            .collect();

        ProbabilityTable {
            weights,
            denominator: self.total + self.alphabet.len() as u64,
        }
    }
}

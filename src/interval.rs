use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::alphabet::Symbol;
use crate::model::ProbabilityTable;
use crate::precision::Precision;

/// A half-open interval `[lo, hi)` inside `[0, 1)`.
///
/// Both bounds are integers counting units of `10^-precision`, so every
/// subdivision is exact integer arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    lo: BigUint,
    hi: BigUint,
    precision: Precision,
}

impl Interval {
    /// `[0, 1)`, the interval every session starts from.
    pub fn unit(precision: Precision) -> Self {
        Self {
            lo: BigUint::zero(),
            hi: precision.one(),
            precision,
        }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn lo(&self) -> BigDecimal {
        self.to_decimal(&self.lo)
    }

    pub fn hi(&self) -> BigDecimal {
        self.to_decimal(&self.hi)
    }

    pub fn width(&self) -> BigDecimal {
        self.to_decimal(&self.units())
    }

    /// True once the interval has collapsed and can hold no value.
    pub fn is_empty(&self) -> bool {
        self.lo >= self.hi
    }

    /// `lo <= value < hi`.
    pub fn contains(&self, value: &BigDecimal) -> bool {
        self.lo() <= *value && *value < self.hi()
    }

    /// Whether `self` lies within `outer`.
    pub fn is_within(&self, outer: &Interval) -> bool {
        self.precision == outer.precision && outer.lo <= self.lo && self.hi <= outer.hi
    }

    /// The exact midpoint `(lo + hi) / 2`, which needs one more fractional
    /// digit than the bounds.
    pub fn midpoint(&self) -> BigDecimal {
        let doubled_digits = (&self.lo + &self.hi) * 5u32;
        BigDecimal::new(
            BigInt::from(doubled_digits),
            i64::from(self.precision.digits()) + 1,
        )
    }

    /// Split the interval into one sub-interval per table entry.
    ///
    /// ```text
    /// w      = hi - lo
    /// cursor = lo
    /// for each (s, n / d) in table order:
    ///     upper  = cursor + floor(w * n / d)     (hi for the last symbol)
    ///     seg(s) = [cursor, upper)
    ///     cursor = upper
    /// ```
    ///
    /// The last sub-interval always ends at `hi`, so the pieces cover the
    /// interval exactly. With too little precision a piece may be empty.
    pub fn partition<S: Symbol>(&self, table: &ProbabilityTable<S>) -> Partition<S> {
        let width = self.units();
        let denominator = BigUint::from(table.denominator());
        let last = table.len().saturating_sub(1);

        let mut cursor = self.lo.clone();
        let mut segments = Vec::with_capacity(table.len());
        for (i, (symbol, weight)) in table.weights().enumerate() {
            let upper = if i == last {
                self.hi.clone()
            } else {
                &cursor + (&width * BigUint::from(weight)) / &denominator
            };
            segments.push((
                symbol,
                Interval {
                    lo: cursor,
                    hi: upper.clone(),
                    precision: self.precision,
                },
            ));
            cursor = upper;
        }

        Partition { segments }
    }

    fn units(&self) -> BigUint {
        if self.is_empty() {
            BigUint::zero()
        } else {
            &self.hi - &self.lo
        }
    }

    fn to_decimal(&self, units: &BigUint) -> BigDecimal {
        BigDecimal::new(
            BigInt::from(units.clone()),
            i64::from(self.precision.digits()),
        )
    }
}

/// Partition an interval according to a probability table.
pub fn partition<S: Symbol>(table: &ProbabilityTable<S>, interval: &Interval) -> Partition<S> {
    interval.partition(table)
}

/// Contiguous sub-intervals of an [`Interval`], one per symbol, in table
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<S: Symbol> {
    segments: Vec<(S, Interval)>,
}

impl<S: Symbol> Partition<S> {
    pub fn iter(&self) -> impl Iterator<Item = &(S, Interval)> {
        self.segments.iter()
    }

    /// The sub-interval assigned to `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&Interval> {
        self.segments
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, interval)| interval)
    }

    /// True when rounding left some symbol without room. Coding can only
    /// continue while every symbol still narrows the interval.
    pub fn has_empty_segment(&self) -> bool {
        self.segments.iter().any(|(_, interval)| interval.is_empty())
    }

    /// Take ownership of the sub-interval assigned to `symbol`.
    pub fn take(self, symbol: &S) -> Option<Interval> {
        self.segments
            .into_iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, interval)| interval)
    }

    /// The first symbol, in table order, whose sub-interval contains `value`.
    pub fn locate(&self, value: &BigDecimal) -> Option<(S, &Interval)> {
        self.segments
            .iter()
            .find(|(_, interval)| interval.contains(value))
            .map(|(s, interval)| (*s, interval))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::model::compute_table;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn table(prefix: &str, alphabet: &str) -> ProbabilityTable<char> {
        let alphabet = Alphabet::from_text(alphabet).unwrap();
        compute_table(&prefix.chars().collect::<Vec<_>>(), &alphabet).unwrap()
    }

    #[test]
    fn test_unit() {
        let unit = Interval::unit(Precision::new(4));
        assert_eq!(unit.lo(), dec("0"));
        assert_eq!(unit.hi(), dec("1"));
        assert_eq!(unit.width(), dec("1"));
        assert!(!unit.is_empty());
    }

    #[test]
    fn test_partition_bounds() {
        let unit = Interval::unit(Precision::new(4));
        let partition = unit.partition(&table("aab", "abc"));

        // 1/2, 1/3, 1/6
        let a = partition.get(&'a').unwrap();
        let b = partition.get(&'b').unwrap();
        let c = partition.get(&'c').unwrap();
        assert_eq!((a.lo(), a.hi()), (dec("0"), dec("0.5")));
        assert_eq!((b.lo(), b.hi()), (dec("0.5"), dec("0.8333")));
        assert_eq!((c.lo(), c.hi()), (dec("0.8333"), dec("1")));
    }

    #[test]
    fn test_partition_covers_interval_exactly() {
        let precision = Precision::new(12);
        let outer = Interval::unit(precision)
            .partition(&table("", "ab"))
            .take(&'b')
            .unwrap();
        let partition = partition(&table("abbbcdd", "abcdefg"), &outer);

        let segments: Vec<_> = partition.iter().collect();
        assert_eq!(segments.len(), 7);
        assert_eq!(segments.first().unwrap().1.lo(), outer.lo());
        assert_eq!(segments.last().unwrap().1.hi(), outer.hi());
        for pair in segments.windows(2) {
            assert!(pair[0].0 < pair[1].0, "segments out of table order");
            assert_eq!(pair[0].1.hi(), pair[1].1.lo(), "gap or overlap");
        }
        for (_, segment) in &segments {
            assert!(segment.is_within(&outer));
        }
    }

    #[test]
    fn test_locate_lower_bound_belongs_to_segment() {
        let partition = Interval::unit(Precision::new(2)).partition(&table("", "ab"));
        assert_eq!(partition.locate(&dec("0")).map(|(s, _)| s), Some('a'));
        assert_eq!(partition.locate(&dec("0.49")).map(|(s, _)| s), Some('a'));
        assert_eq!(partition.locate(&dec("0.5")).map(|(s, _)| s), Some('b'));
        assert_eq!(partition.locate(&dec("0.999")).map(|(s, _)| s), Some('b'));
        assert_eq!(partition.locate(&dec("1")), None);
    }

    #[test]
    fn test_tiny_precision_yields_empty_segments() {
        let partition = Interval::unit(Precision::new(0)).partition(&table("", "abc"));
        assert!(partition.has_empty_segment());
        assert!(partition.get(&'a').unwrap().is_empty());
        assert!(partition.get(&'b').unwrap().is_empty());
        assert!(!partition.get(&'c').unwrap().is_empty());
        assert_eq!(partition.locate(&dec("0.5")).map(|(s, _)| s), Some('c'));
    }

    #[test]
    fn test_midpoint() {
        let partition = Interval::unit(Precision::new(3)).partition(&table("a", "ab"));
        assert!(!partition.has_empty_segment());
        let b = partition.get(&'b').unwrap();
        assert_eq!((b.lo(), b.hi()), (dec("0.666"), dec("1")));
        assert_eq!(b.midpoint(), dec("0.8330"));
        assert!(b.contains(&b.midpoint()));
    }
}

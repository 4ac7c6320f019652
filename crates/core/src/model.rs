//! Validated symbol probability model.
//!
//! A `FrequencyModel` is the immutable input to the whole pipeline: an
//! insertion-ordered mapping from symbol to probability plus the radix
//! (alphabet size of the code, 2 = binary Huffman).
//!
//! # Validation
//!
//! Construction rejects bad input up front: radix outside 2..=36,
//! empty or duplicate symbols, probabilities outside (0, 1], and sums
//! that deviate from 1 by more than 1e-6 relative. Sums that pass the
//! check are still re-normalized so downstream math sees an exact unit
//! sum regardless of caller rounding.
//!
//! # Ordering
//!
//! Insertion order is preserved. The tree builder breaks frequency ties
//! by pool order, so the order symbols were supplied in is observable in
//! the final codewords.

use crate::error::{ModelError, Result};
use log::debug;

/// Smallest supported radix (binary).
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix; codeword digits are drawn from 0-9a-z.
pub const MAX_RADIX: u32 = 36;

/// Relative deviation from 1.0 tolerated in a probability sum.
const SUM_TOLERANCE: f64 = 1e-6;

/// An immutable symbol-to-probability mapping with its radix.
///
/// # Invariants
/// - at least one symbol, all symbols distinct
/// - every probability in (0, 1], sum exactly 1 after normalization
/// - radix in 2..=36
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    /// (symbol, probability) pairs in insertion order
    symbols: Vec<(char, f64)>,
    /// Number of children per internal tree node and distinct code digits
    radix: u32,
}

impl FrequencyModel {
    /// Build a model from a raw distribution.
    ///
    /// # Errors
    /// - `ModelError::InvalidRadix` if radix is outside 2..=36
    /// - `ModelError::EmptyAlphabet` if no symbols are supplied
    /// - `ModelError::DuplicateSymbol` if a symbol repeats
    /// - `ModelError::InvalidProbability` if a probability is outside (0, 1]
    /// - `ModelError::Unnormalized` if the sum strays from 1 beyond 1e-6
    pub fn new(symbols: Vec<(char, f64)>, radix: u32) -> Result<Self> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(ModelError::InvalidRadix(radix).into());
        }

        if symbols.is_empty() {
            return Err(ModelError::EmptyAlphabet.into());
        }

        for (i, &(symbol, probability)) in symbols.iter().enumerate() {
            if symbols[..i].iter().any(|&(seen, _)| seen == symbol) {
                return Err(ModelError::DuplicateSymbol(symbol).into());
            }
            if !(probability > 0.0 && probability <= 1.0) {
                return Err(ModelError::InvalidProbability {
                    symbol,
                    probability,
                }
                .into());
            }
        }

        let sum: f64 = symbols.iter().map(|&(_, p)| p).sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(ModelError::Unnormalized { sum }.into());
        }

        // Within tolerance, but divide through anyway so entropy and
        // average-length sums are computed against an exact unit total.
        let mut symbols = symbols;
        if sum != 1.0 {
            debug!("normalizing probability sum {} to 1", sum);
            for (_, p) in &mut symbols {
                *p /= sum;
            }
        }

        Ok(Self { symbols, radix })
    }

    /// The radix this model codes for.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet is empty (never true for a constructed model).
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate (symbol, probability) pairs in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.symbols.iter().copied()
    }

    /// Look up the probability of a symbol.
    pub fn probability(&self, symbol: char) -> Option<f64> {
        self.symbols
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, p)| p)
    }

    /// Entropy H = -sum(p * log_radix(p)), in radix-ary digits.
    ///
    /// The theoretical minimum average codeword length for this
    /// distribution at this radix.
    pub fn entropy(&self) -> f64 {
        let ln_radix = f64::from(self.radix).ln();
        -self
            .symbols
            .iter()
            .map(|&(_, p)| p * p.ln() / ln_radix)
            .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_valid_model() {
        let model =
            FrequencyModel::new(vec![('A', 0.5), ('B', 0.25), ('C', 0.25)], 2).unwrap();
        assert_eq!(model.len(), 3);
        assert_eq!(model.radix(), 2);
        assert_eq!(model.probability('B'), Some(0.25));
        assert_eq!(model.probability('Z'), None);
    }

    #[test]
    fn test_invalid_radix() {
        for radix in [0, 1, 37, 100] {
            let result = FrequencyModel::new(vec![('A', 1.0)], radix);
            assert!(matches!(
                result,
                Err(Error::Model(ModelError::InvalidRadix(r))) if r == radix
            ));
        }
    }

    #[test]
    fn test_empty_alphabet() {
        let result = FrequencyModel::new(vec![], 2);
        assert!(matches!(result, Err(Error::Model(ModelError::EmptyAlphabet))));
    }

    #[test]
    fn test_duplicate_symbol() {
        let result = FrequencyModel::new(vec![('A', 0.5), ('A', 0.5)], 2);
        assert!(matches!(
            result,
            Err(Error::Model(ModelError::DuplicateSymbol('A')))
        ));
    }

    #[test]
    fn test_invalid_probability() {
        for p in [0.0, -0.1, 1.5, f64::NAN] {
            let result = FrequencyModel::new(vec![('A', p), ('B', 0.5)], 2);
            assert!(matches!(
                result,
                Err(Error::Model(ModelError::InvalidProbability { symbol: 'A', .. }))
            ));
        }
    }

    #[test]
    fn test_unnormalized_sum_rejected() {
        let result = FrequencyModel::new(vec![('A', 0.5), ('B', 0.3)], 2);
        assert!(matches!(
            result,
            Err(Error::Model(ModelError::Unnormalized { .. }))
        ));
    }

    #[test]
    fn test_near_unit_sum_renormalized() {
        // Off by 1e-8: accepted, then divided through to exactly 1.
        let model =
            FrequencyModel::new(vec![('A', 0.5), ('B', 0.50000001)], 2).unwrap();
        let sum: f64 = model.symbols().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let model =
            FrequencyModel::new(vec![('Z', 0.25), ('A', 0.25), ('M', 0.5)], 2).unwrap();
        let order: Vec<char> = model.symbols().map(|(s, _)| s).collect();
        assert_eq!(order, vec!['Z', 'A', 'M']);
    }

    #[test]
    fn test_entropy_uniform_binary() {
        // Four equiprobable symbols at radix 2: H = log2(4) = 2 bits.
        let model = FrequencyModel::new(
            vec![('A', 0.25), ('B', 0.25), ('C', 0.25), ('D', 0.25)],
            2,
        )
        .unwrap();
        assert!((model.entropy() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_uniform_matching_radix() {
        // Four equiprobable symbols at radix 4: exactly one digit each.
        let model = FrequencyModel::new(
            vec![('A', 0.25), ('B', 0.25), ('C', 0.25), ('D', 0.25)],
            4,
        )
        .unwrap();
        assert!((model.entropy() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_skewed() {
        let model =
            FrequencyModel::new(vec![('A', 0.5), ('B', 0.25), ('C', 0.25)], 2).unwrap();
        assert!((model.entropy() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_single_symbol_is_zero() {
        let model = FrequencyModel::new(vec![('A', 1.0)], 2).unwrap();
        assert!(model.entropy().abs() < 1e-12);
    }
}

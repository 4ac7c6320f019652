//! Coding efficiency relative to the entropy bound.
//!
//! Compares the achieved code against the information-theoretic floor
//! for the model's distribution: entropy H (radix-ary digits), average
//! codeword length R, and their ratio as a percentage. H <= R always
//! holds for a prefix code, so efficiency never exceeds 100%.

use crate::code::CodeTable;
use crate::error::{AnalysisError, Result};
use crate::model::FrequencyModel;

/// Efficiency statistics for a (model, code table) pair.
#[derive(Debug, Clone, Copy)]
pub struct CodeStats {
    /// Entropy H in radix-ary digits: the minimum achievable R
    pub entropy: f64,

    /// Average codeword length R under the model's probabilities
    pub avg_len: f64,

    /// (H / R) * 100
    pub efficiency: f64,
}

/// Analyze how close the code comes to the entropy bound.
///
/// Placeholder leaves never reach the table, so only real symbols
/// contribute to either sum.
///
/// # Errors
/// `AnalysisError::DegenerateModel` if R computes to zero, which keeps
/// NaN and infinity out of the result.
pub fn analyze(model: &FrequencyModel, table: &CodeTable) -> Result<CodeStats> {
    let entropy = model.entropy();

    let avg_len: f64 = model
        .symbols()
        .map(|(symbol, p)| p * table.get(symbol).map_or(0, str::len) as f64)
        .sum();

    if avg_len == 0.0 {
        return Err(AnalysisError::DegenerateModel.into());
    }

    Ok(CodeStats {
        entropy,
        avg_len,
        efficiency: entropy / avg_len * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::CodeTree;

    fn stats(pairs: &[(char, f64)], radix: u32) -> CodeStats {
        let model = FrequencyModel::new(pairs.to_vec(), radix).unwrap();
        let table = CodeTable::assign(&CodeTree::build(&model));
        analyze(&model, &table).unwrap()
    }

    #[test]
    fn test_dyadic_distribution_is_optimal() {
        // Powers of two: Huffman meets the entropy bound exactly.
        let stats = stats(&[('A', 0.5), ('B', 0.25), ('C', 0.25)], 2);
        assert!((stats.entropy - 1.5).abs() < 1e-12);
        assert!((stats.avg_len - 1.5).abs() < 1e-12);
        assert!((stats.efficiency - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_never_exceeds_avg_len() {
        let stats = stats(&[('A', 0.4), ('B', 0.3), ('C', 0.2), ('D', 0.1)], 3);
        assert!(stats.entropy <= stats.avg_len + 1e-12);
        assert!(stats.efficiency <= 100.0 + 1e-9);
    }

    #[test]
    fn test_single_symbol_efficiency_is_zero() {
        // H = 0 but the mandated "0" codeword gives R = 1.
        let stats = stats(&[('A', 1.0)], 2);
        assert!(stats.entropy.abs() < 1e-12);
        assert!((stats.avg_len - 1.0).abs() < 1e-12);
        assert!(stats.efficiency.abs() < 1e-9);
    }

    #[test]
    fn test_uniform_at_matching_radix() {
        // Three equiprobable symbols at radix 3: one digit each, optimal.
        let stats = stats(
            &[('A', 1.0 / 3.0), ('B', 1.0 / 3.0), ('C', 1.0 / 3.0)],
            3,
        );
        assert!((stats.avg_len - 1.0).abs() < 1e-12);
        assert!((stats.efficiency - 100.0).abs() < 1e-9);
    }
}

//! Demo distribution and text generation.
//!
//! When `--demo N` is given we invent an N-symbol probability
//! distribution and a sample text drawn from it, all from a seeded RNG
//! so a run can be reproduced exactly with `--seed`.
//!
//! # Design
//!
//! Generated weights are uniform draws pushed away from zero, then
//! normalized; the text is sampled from the distribution itself so the
//! encoded output actually reflects the probabilities on screen.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Symbols handed out to generated distributions, in order.
const SYMBOL_POOL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of the generated sample text.
const DEMO_TEXT_LEN: usize = 40;

/// Largest demo alphabet we can name with the pool.
pub fn max_demo_symbols() -> usize {
    SYMBOL_POOL.len()
}

/// Generate a normalized random distribution over `count` symbols.
///
/// `count` is clamped to the symbol pool.
pub fn generate_distribution(seed: u64, count: usize) -> Vec<(char, f64)> {
    let count = count.clamp(1, SYMBOL_POOL.len());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // 0.05 floor keeps every symbol visible in the generated text
    let weights: Vec<f64> = (0..count).map(|_| rng.gen::<f64>() + 0.05).collect();
    let total: f64 = weights.iter().sum();

    SYMBOL_POOL
        .iter()
        .take(count)
        .zip(weights)
        .map(|(&symbol, w)| (char::from(symbol), w / total))
        .collect()
}

/// Sample a text from a distribution.
///
/// Uses a separate stream from the distribution draw so changing the
/// text length never changes the generated distribution.
pub fn generate_text(seed: u64, symbols: &[(char, f64)]) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    (0..DEMO_TEXT_LEN)
        .map(|_| {
            let mut roll: f64 = rng.gen();
            for &(symbol, p) in symbols {
                if roll < p {
                    return symbol;
                }
                roll -= p;
            }
            // rounding can leave a sliver past the last cumulative bound
            symbols[symbols.len() - 1].0
        })
        .collect()
}

//! Interactive input for the radix-huff application.
//!
//! Prompts for a distribution, a radix, and a text to encode, and
//! re-prompts on bad input instead of failing. The core library never
//! prompts; everything interactive lives here, and the core only ever
//! sees a cleaned-up distribution.
//!
//! # Normalization
//!
//! Probabilities that do not quite sum to 1 (beyond 1e-9) are
//! normalized here with a printed warning, so typing 0.33 three times
//! works the way a user expects.

use radix_huff_core::model::{MAX_RADIX, MIN_RADIX};
use std::io::{self, BufRead, Write};

/// Tolerance before the entered probability sum triggers normalization.
const SUM_WARN_TOLERANCE: f64 = 1e-9;

/// Prompt for a full symbol distribution.
///
/// Re-prompts on duplicate symbols and out-of-range probabilities;
/// normalizes (with a warning) if the sum strays from 1.
pub fn read_distribution(input: &mut impl BufRead) -> io::Result<Vec<(char, f64)>> {
    let count = loop {
        let line = prompt(input, "Enter number of symbols: ")?;
        match line.parse::<usize>() {
            Ok(n) if n >= 1 => break n,
            _ => println!("Invalid! Must be an integer >= 1."),
        }
    };

    let mut symbols: Vec<(char, f64)> = Vec::with_capacity(count);
    for _ in 0..count {
        let symbol = loop {
            let line = prompt(input, "Enter symbol character (e.g., A, B, etc.): ")?;
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    if symbols.iter().any(|&(seen, _)| seen == c) {
                        println!("Error: Symbol already exists!");
                    } else {
                        break c;
                    }
                }
                _ => println!("Error: Enter exactly one character."),
            }
        };

        let probability = loop {
            let line = prompt(input, &format!("Enter probability for {} (0-1): ", symbol))?;
            match line.parse::<f64>() {
                Ok(p) if p > 0.0 && p <= 1.0 => break p,
                _ => println!("Invalid probability! Must be between 0 and 1."),
            }
        };

        symbols.push((symbol, probability));
    }

    let total: f64 = symbols.iter().map(|&(_, p)| p).sum();
    if (total - 1.0).abs() > SUM_WARN_TOLERANCE {
        println!("Warning: Probabilities sum to {:.2}. Normalizing to 1.", total);
        for (_, p) in &mut symbols {
            *p /= total;
        }
    }

    Ok(symbols)
}

/// Prompt for the code radix.
pub fn read_radix(input: &mut impl BufRead) -> io::Result<u32> {
    loop {
        let line = prompt(
            input,
            "Enter alphabet size (2 for binary, 3 for ternary, etc.): ",
        )?;
        match line.parse::<u32>() {
            Ok(radix) if (MIN_RADIX..=MAX_RADIX).contains(&radix) => return Ok(radix),
            _ => println!("Invalid! Must be an integer between 2 and {}.", MAX_RADIX),
        }
    }
}

/// Prompt for the text to encode, restricted to the known symbols.
pub fn read_text(input: &mut impl BufRead, symbols: &[(char, f64)]) -> io::Result<String> {
    loop {
        let text = prompt(input, "Enter text to encode (use defined symbols): ")?;
        if text
            .chars()
            .all(|c| symbols.iter().any(|&(s, _)| s == c))
        {
            return Ok(text);
        }
        println!("Error: Text contains undefined symbols!");
    }
}

/// Print a prompt, flush, and read one trimmed line.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

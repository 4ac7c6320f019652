//! Configuration for the radix-huff application.
//!
//! Handles parsing command-line arguments. With no distribution flags
//! the tool falls back to interactive prompting, so it works with ZERO
//! arguments; `--demo` runs a randomized, seed-reproducible session
//! instead.

use std::process;

/// Complete configuration for a coding run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Distribution ===
    /// Inline distribution from --symbols (None = prompt or demo)
    pub symbols: Option<Vec<(char, f64)>>,

    /// Code radix (children per tree node, digit alphabet size)
    pub radix: u32,

    /// Text to encode from --text (None = prompt or demo-generated)
    pub text: Option<String>,

    // === Demo mode ===
    /// Number of symbols to generate (None = no demo)
    pub demo_symbols: Option<usize>,

    /// Seed for demo randomness (explicit or time-based)
    pub seed: u64,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If --seed is not provided, a time-based seed is chosen and
    /// printed by demo mode so runs stay reproducible.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut symbols: Option<Vec<(char, f64)>> = None;
        let mut radix: Option<u32> = None;
        let mut text: Option<String> = None;
        let mut demo_symbols: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut print_config = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--symbols" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--symbols requires a spec like A:0.5,B:0.5".to_string());
                    }
                    symbols = Some(parse_symbol_spec(&args[i])?);
                }
                "--radix" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--radix requires a number".to_string());
                    }
                    radix = Some(args[i].parse().map_err(|_| "invalid radix")?);
                }
                "--text" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--text requires a string".to_string());
                    }
                    text = Some(args[i].clone());
                }
                "--demo" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--demo requires a symbol count".to_string());
                    }
                    demo_symbols = Some(args[i].parse().map_err(|_| "invalid demo count")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        if symbols.is_some() && demo_symbols.is_some() {
            return Err("--symbols and --demo are mutually exclusive".to_string());
        }
        if symbols.is_some() && text.is_none() {
            return Err("--symbols requires --text".to_string());
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            symbols,
            radix: radix.unwrap_or(2),
            text,
            demo_symbols,
            seed,
            print_config,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match (&self.symbols, self.demo_symbols) {
            (Some(symbols), _) => println!("Distribution: {} symbols (inline)", symbols.len()),
            (None, Some(n)) => println!("Distribution: {} symbols (demo)", n),
            (None, None) => println!("Distribution: interactive"),
        }
        println!("Radix: {}", self.radix);
        println!("Seed: {}", self.seed);
        println!();
    }
}

/// Parse "A:0.5,B:0.25,C:0.25" into symbol/probability pairs.
///
/// Uniqueness, ranges, and the unit-sum check are left to the model
/// constructor; this only splits the syntax apart.
fn parse_symbol_spec(spec: &str) -> Result<Vec<(char, f64)>, String> {
    let mut pairs = Vec::new();
    for entry in spec.split(',') {
        let (symbol, probability) = entry
            .split_once(':')
            .ok_or_else(|| format!("bad entry {:?}: expected SYMBOL:PROB", entry))?;

        let mut chars = symbol.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(format!("bad symbol {:?}: must be one character", symbol)),
        };

        let probability: f64 = probability
            .parse()
            .map_err(|_| format!("bad probability {:?} for {:?}", probability, symbol))?;

        pairs.push((symbol, probability));
    }
    Ok(pairs)
}

fn print_help() {
    println!("radix-huff: n-ary Huffman coding over a symbol distribution");
    println!();
    println!("USAGE:");
    println!("    radix-huff [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --symbols <SPEC>    Inline distribution, e.g. A:0.5,B:0.25,C:0.25");
    println!("    --radix <N>         Code radix, 2-36 (default: 2)");
    println!("    --text <TEXT>       Text to encode (required with --symbols)");
    println!();
    println!("    --demo <N>          Generate an N-symbol distribution and text");
    println!("    --seed <N>          Random seed for demo mode");
    println!();
    println!("    --print-config      Print resolved configuration");
    println!("    --help, -h          Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    radix-huff                                        # Prompt for everything");
    println!("    radix-huff --demo 8 --radix 3 --seed 42           # Deterministic demo");
    println!("    radix-huff --symbols A:0.5,B:0.25,C:0.25 --text ABCBA");
    println!();
}

//! radix-huff: n-ary Huffman coding over a user-supplied distribution.
//!
//! The binary is the "surrounding application" the core library leaves
//! input handling to: it gathers a distribution, radix, and text
//! (interactively, from flags, or generated), runs the coding pipeline,
//! and prints the code table, the encoded/decoded text, and the
//! efficiency report.

mod config;
mod input;
mod input_gen;

use config::Config;
use log::debug;
use radix_huff_core::{
    analysis::{analyze, CodeStats},
    code::CodeTable,
    codec::{decode, encode},
    model::FrequencyModel,
    tree::CodeTree,
};
use std::io::{self, BufRead};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(error) = run(&config) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Huffman Coding ({}-ary) ===", config.radix);

    let stdin = io::stdin();
    let (symbols, radix, text) = gather_input(config, &mut stdin.lock())?;

    let model = FrequencyModel::new(symbols, radix)?;
    debug!("model: {} symbols, radix {}", model.len(), model.radix());

    let tree = CodeTree::build(&model);
    let table = CodeTable::assign(&tree);

    let encoded = encode(&text, &table)?;
    let decoded = decode(&encoded, &tree)?;
    let stats = analyze(&model, &table)?;

    print_results(&table, &encoded, &decoded, &stats);

    Ok(())
}

/// Resolve the distribution, radix, and text from flags, demo
/// generation, or interactive prompts.
fn gather_input(
    config: &Config,
    stdin: &mut impl BufRead,
) -> io::Result<(Vec<(char, f64)>, u32, String)> {
    if let Some(count) = config.demo_symbols {
        let count = count.min(input_gen::max_demo_symbols());
        println!("Demo mode: {} symbols, seed {}", count, config.seed);

        let symbols = input_gen::generate_distribution(config.seed, count);
        println!("Generated distribution:");
        for &(symbol, p) in &symbols {
            println!("  {} -> {:.4}", symbol, p);
        }

        let text = match &config.text {
            Some(text) => text.clone(),
            None => input_gen::generate_text(config.seed, &symbols),
        };
        return Ok((symbols, config.radix, text));
    }

    if let Some(symbols) = &config.symbols {
        // --symbols requires --text, enforced at parse time
        let text = config.text.clone().unwrap_or_default();
        return Ok((symbols.clone(), config.radix, text));
    }

    let symbols = input::read_distribution(stdin)?;
    let radix = input::read_radix(stdin)?;
    let text = input::read_text(stdin, &symbols)?;
    Ok((symbols, radix, text))
}

fn print_results(table: &CodeTable, encoded: &str, decoded: &str, stats: &CodeStats) {
    println!();
    println!("Results:");
    println!("Symbol codes:");
    for (symbol, code) in table.iter() {
        println!("  {} -> {}", symbol, code);
    }
    println!("Encoded text: {}", encoded);
    println!("Decoded text: {}", decoded);
    println!("Entropy (H): {:.4}", stats.entropy);
    println!("Average code length (R): {:.4}", stats.avg_len);
    println!("Coding efficiency (H/R): {:.2}%", stats.efficiency);
}

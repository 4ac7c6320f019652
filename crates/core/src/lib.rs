//! radix-huff-core: generalized n-ary Huffman coding
//!
//! This library builds a Huffman prefix code of any radix (2 = binary)
//! from a symbol probability distribution, assigns codewords, encodes
//! and decodes text against the code, and reports coding efficiency
//! against the entropy bound. Codewords stay symbolic digit strings;
//! nothing here packs bits or touches files.
//!
//! # Architecture
//!
//! The pipeline runs left to right over immutable values:
//! - `model`: validated symbol-to-probability mapping plus the radix
//! - `tree`: n-ary tree construction with zero-weight padding leaves
//! - `code`: prefix-free codeword assignment from root-to-leaf paths
//! - `codec`: encode/decode round-trip over the code
//! - `analysis`: entropy, average length, and efficiency
//! - `error`: structured failures for every stage
//!
//! # Design Principles
//!
//! - **No panics**: bad distributions, unknown symbols, and malformed
//!   digit streams all surface as typed errors
//! - **Deterministic**: frequency ties break by insertion order, so a
//!   given model always yields the same codewords
//! - **Build once, read anywhere**: model, tree, and table are
//!   immutable after construction and safe to share between readers

pub mod analysis;
pub mod code;
pub mod codec;
pub mod error;
pub mod model;
pub mod tree;

// Re-export commonly used types
pub use error::{Error, Result};

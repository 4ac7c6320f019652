//! Codeword assignment.
//!
//! Walks the completed tree and emits one radix-ary digit string per
//! real symbol. Codes are root-to-leaf paths, so no code can be a
//! prefix of another; placeholder leaves produce no entry.
//!
//! Digits are the characters 0-9a-z, one per child index, which is why
//! the radix is capped at 36.

use crate::tree::{CodeTree, Node};
use std::collections::BTreeMap;

/// Digit character for a child index.
pub(crate) fn digit_char(index: usize) -> char {
    char::from_digit(index as u32, 36).expect("child index below radix ceiling")
}

/// Numeric value of a digit character, if it is one.
pub(crate) fn digit_value(digit: char) -> Option<u32> {
    digit.to_digit(36)
}

/// A prefix-free mapping from symbol to codeword.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
    radix: u32,
}

impl CodeTable {
    /// Derive the code table from a built tree.
    ///
    /// Iterative depth-first walk with an explicit stack; deep trees
    /// from large skewed alphabets never touch the call stack.
    ///
    /// A root that is itself a leaf (single-symbol model) is assigned
    /// the codeword "0" rather than the empty path.
    pub fn assign(tree: &CodeTree) -> Self {
        let mut codes = BTreeMap::new();
        let mut stack: Vec<(&Node, String)> = vec![(tree.root(), String::new())];

        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    let code = if path.is_empty() {
                        // no merge ever happened; "0" keeps the code non-empty
                        "0".to_string()
                    } else {
                        path
                    };
                    codes.insert(*symbol, code);
                }
                Node::Pad => {}
                Node::Internal { children, .. } => {
                    for (index, child) in children.iter().enumerate() {
                        let mut next = path.clone();
                        next.push(digit_char(index));
                        stack.push((child, next));
                    }
                }
            }
        }

        CodeTable {
            codes,
            radix: tree.radix(),
        }
    }

    /// Codeword for a symbol, if it has one.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The radix the codewords are expressed in.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Iterate (symbol, codeword) pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(&s, c)| (s, c.as_str()))
    }
}

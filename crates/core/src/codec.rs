//! Encoding and decoding against a built code.
//!
//! Encoding is codeword concatenation; decoding is a digit-by-digit
//! walk of the tree, resetting to the root at every emitted symbol.
//! Both are single-pass and read-only, so a tree and table published
//! once can serve any number of concurrent callers.

use crate::code::{digit_value, CodeTable};
use crate::error::{CodecError, Result};
use crate::tree::{CodeTree, Node};

/// Encode a text as the concatenation of its symbols' codewords.
///
/// # Errors
/// `CodecError::UnknownSymbol` if a symbol has no entry in the table.
pub fn encode(text: &str, table: &CodeTable) -> Result<String> {
    let mut digits = String::new();
    for symbol in text.chars() {
        let code = table
            .get(symbol)
            .ok_or(CodecError::UnknownSymbol(symbol))?;
        digits.push_str(code);
    }
    Ok(digits)
}

/// Decode a digit string back into the text it encodes.
///
/// # Errors
/// - `CodecError::InvalidDigit` for a non-digit character, a digit at
///   or above the radix, or a branch occupied only by padding
/// - `CodecError::TruncatedStream` if the input ends mid-codeword
pub fn decode(digits: &str, tree: &CodeTree) -> Result<String> {
    let radix = tree.radix();
    let mut text = String::new();

    // Single-symbol tree: the root is the only leaf and its codeword is
    // "0", so the stream is a run of zeros, one symbol each.
    if let Node::Leaf { symbol, .. } = tree.root() {
        for (position, digit) in digits.chars().enumerate() {
            if digit != '0' {
                return Err(CodecError::InvalidDigit { digit, position }.into());
            }
            text.push(*symbol);
        }
        return Ok(text);
    }

    let mut node = tree.root();
    let mut depth = 0usize;
    let mut position = 0usize;

    for digit in digits.chars() {
        let index = digit_value(digit)
            .filter(|&value| value < radix)
            .ok_or(CodecError::InvalidDigit { digit, position })?;

        let next = match node {
            Node::Internal { children, .. } => children.get(index as usize),
            // walk resets to the root after every emit, so only
            // internal nodes are ever descended from
            _ => None,
        }
        .ok_or(CodecError::InvalidDigit { digit, position })?;

        match next {
            Node::Leaf { symbol, .. } => {
                text.push(*symbol);
                node = tree.root();
                depth = 0;
            }
            Node::Pad => {
                return Err(CodecError::InvalidDigit { digit, position }.into());
            }
            Node::Internal { .. } => {
                node = next;
                depth += 1;
            }
        }
        position += 1;
    }

    if depth > 0 {
        return Err(CodecError::TruncatedStream { position }.into());
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::FrequencyModel;

    fn pipeline(pairs: &[(char, f64)], radix: u32) -> (CodeTree, CodeTable) {
        let model = FrequencyModel::new(pairs.to_vec(), radix).unwrap();
        let tree = CodeTree::build(&model);
        let table = CodeTable::assign(&tree);
        (tree, table)
    }

    #[test]
    fn test_encode_concatenates_codewords() {
        let (_, table) = pipeline(&[('A', 0.5), ('B', 0.25), ('C', 0.25)], 2);
        assert_eq!(encode("ABC", &table).unwrap(), "01011");
        assert_eq!(encode("", &table).unwrap(), "");
    }

    #[test]
    fn test_round_trip() {
        let (tree, table) = pipeline(&[('A', 0.5), ('B', 0.25), ('C', 0.25)], 2);
        let text = "ABCCBAABAC";
        let digits = encode(text, &table).unwrap();
        assert_eq!(decode(&digits, &tree).unwrap(), text);
    }

    #[test]
    fn test_round_trip_ternary_with_padding() {
        let (tree, table) =
            pipeline(&[('A', 0.4), ('B', 0.3), ('C', 0.2), ('D', 0.1)], 3);
        let text = "DABCADBBCA";
        let digits = encode(text, &table).unwrap();
        assert_eq!(decode(&digits, &tree).unwrap(), text);
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let (_, table) = pipeline(&[('A', 0.5), ('B', 0.5)], 2);
        let result = encode("ABX", &table);
        assert!(matches!(
            result,
            Err(Error::Codec(CodecError::UnknownSymbol('X')))
        ));
    }

    #[test]
    fn test_decode_digit_above_radix() {
        let (tree, _) = pipeline(&[('A', 0.5), ('B', 0.5)], 2);
        let result = decode("02", &tree);
        assert!(matches!(
            result,
            Err(Error::Codec(CodecError::InvalidDigit {
                digit: '2',
                position: 1
            }))
        ));
    }

    #[test]
    fn test_decode_non_digit() {
        let (tree, _) = pipeline(&[('A', 0.5), ('B', 0.5)], 2);
        let result = decode("0!", &tree);
        assert!(matches!(
            result,
            Err(Error::Codec(CodecError::InvalidDigit {
                digit: '!',
                position: 1
            }))
        ));
    }

    #[test]
    fn test_decode_truncated() {
        let (tree, table) = pipeline(&[('A', 0.5), ('B', 0.25), ('C', 0.25)], 2);
        // "1" is a strict prefix of both "10" and "11".
        assert_eq!(table.get('B'), Some("10"));
        let result = decode("01", &tree);
        assert!(matches!(
            result,
            Err(Error::Codec(CodecError::TruncatedStream { position: 2 }))
        ));
    }

    #[test]
    fn test_decode_into_pad_branch() {
        let (tree, table) =
            pipeline(&[('A', 0.4), ('B', 0.3), ('C', 0.2), ('D', 0.1)], 3);
        // The pad sits on branch "10"; nothing encodes to it.
        assert_eq!(table.get('D'), Some("11"));
        let result = decode("10", &tree);
        assert!(matches!(
            result,
            Err(Error::Codec(CodecError::InvalidDigit {
                digit: '0',
                position: 1
            }))
        ));
    }

    #[test]
    fn test_decode_single_symbol_tree() {
        let (tree, table) = pipeline(&[('A', 1.0)], 2);
        let digits = encode("AAA", &table).unwrap();
        assert_eq!(digits, "000");
        assert_eq!(decode(&digits, &tree).unwrap(), "AAA");

        let result = decode("01", &tree);
        assert!(matches!(
            result,
            Err(Error::Codec(CodecError::InvalidDigit {
                digit: '1',
                position: 1
            }))
        ));
    }

    #[test]
    fn test_decode_empty_stream() {
        let (tree, _) = pipeline(&[('A', 0.5), ('B', 0.5)], 2);
        assert_eq!(decode("", &tree).unwrap(), "");
    }
}

//! n-ary code tree construction.
//!
//! Builds the Huffman tree bottom-up: the `radix` lightest nodes in the
//! pool merge into one internal node until a single root remains. For
//! the merges to come out even, the pool is first padded with
//! zero-weight placeholder leaves until `(N - 1) % (radix - 1) == 0`;
//! at radix 2 this always holds and no padding is added.
//!
//! # Determinism
//!
//! Each round stable-sorts the current pool by ascending weight, takes
//! the first `radix` nodes as the ordered children of the merge, and
//! appends the merged node at the tail. Stability means equal-weight
//! nodes keep their pool order, so the tree shape — and every codeword
//! derived from it — is reproducible for a given model.

use crate::model::FrequencyModel;
use log::{debug, trace};

/// A node of the code tree.
///
/// Built once, never mutated; internal nodes exclusively own their
/// ordered children, and the child position (0-based) is the digit the
/// code assigner emits for that branch.
#[derive(Debug, Clone)]
pub enum Node {
    /// A real symbol with its probability as weight
    Leaf { symbol: char, weight: f64 },

    /// Zero-weight placeholder satisfying the merge arithmetic;
    /// participates in tree shape but never receives a codeword
    Pad,

    /// A merge of exactly `radix` children, ordered; weight is their sum
    Internal { weight: f64, children: Vec<Node> },
}

impl Node {
    /// The weight this node contributes to a merge.
    pub fn weight(&self) -> f64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Pad => 0.0,
            Node::Internal { weight, .. } => *weight,
        }
    }
}

/// A completed code tree: the root plus the radix it was built for.
#[derive(Debug, Clone)]
pub struct CodeTree {
    root: Node,
    radix: u32,
}

impl CodeTree {
    /// Build the tree for a model.
    ///
    /// A single-symbol model yields a root that is itself a leaf; the
    /// code assigner handles that shape explicitly.
    pub fn build(model: &FrequencyModel) -> Self {
        let radix = model.radix();
        let mut nodes: Vec<Node> = model
            .symbols()
            .map(|(symbol, weight)| Node::Leaf { symbol, weight })
            .collect();

        // Every merge consumes `radix` nodes and produces one, so the
        // pool must shrink from N to 1 in steps of (radix - 1).
        let mut pads = 0usize;
        while (nodes.len() - 1) % (radix as usize - 1) != 0 {
            nodes.push(Node::Pad);
            pads += 1;
        }
        if pads > 0 {
            debug!(
                "padded {} symbols with {} placeholder leaves for radix {}",
                model.len(),
                pads,
                radix
            );
        }

        while nodes.len() > 1 {
            nodes.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
            let children: Vec<Node> = nodes.drain(..radix as usize).collect();
            let weight = children.iter().map(Node::weight).sum();
            trace!("merged {} nodes into weight {}", children.len(), weight);
            nodes.push(Node::Internal { weight, children });
        }

        let root = nodes
            .pop()
            .expect("a validated model always leaves one root");
        CodeTree { root, radix }
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The radix the tree was built for.
    pub fn radix(&self) -> u32 {
        self.radix
    }
}

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

use super::MinHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyInput;

impl Display for EmptyInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Can't build a Huffman tree without any symbols!")
    }
}

impl Error for EmptyInput {}

/// A symbol that doesn't appear in the text the tree was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSymbol {
    pub symbol: char,
}

impl Display for UnknownSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol {:?} has no code in this tree!", self.symbol)
    }
}

impl Error for UnknownSymbol {}

/// A character other than `0` or `1` in an encoded bit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBit {
    pub bit: char,
    pub position: usize,
}

impl Display for InvalidBit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Expected 0 or 1 at position {}, found {:?}!", self.position, self.bit)
    }
}

impl Error for InvalidBit {}

/// The bits don't lead to a symbol: they either follow a branch the tree doesn't have, or stop
/// part way through a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCode {
    pub position: usize,
}

impl Display for InvalidCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Bits from position {} don't form a valid code!", self.position)
    }
}

impl Error for InvalidCode {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum DecodeError {
    InvalidBit(InvalidBit),
    InvalidCode(InvalidCode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HuffmanNode {
    Leaf {
        symbol: char,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    const fn weight(&self) -> usize {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    fn collect_codes(&self, prefix: &mut String, codes: &mut BTreeMap<char, String>) {
        match self {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, prefix.clone());
            },
            HuffmanNode::Internal { left, right, .. } => {
                for (bit, child) in [('0', left), ('1', right)] {
                    prefix.push(bit);
                    child.collect_codes(prefix, codes);
                    prefix.pop();
                }
            },
        }
    }
}

/// A subtree waiting in the heap. Equal weights are ordered by when the subtree was created, so
/// building the same text always produces the same tree.
struct Pending {
    order: usize,
    node: HuffmanNode,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node.weight()
            .cmp(&other.node.weight())
            .then(self.order.cmp(&other.order))
    }
}

/// An optimal prefix code for the characters of a text. Frequent characters get shorter codes.
///
/// The tree is built by repeatedly merging the two lightest subtrees, the first removed from the
/// heap becoming the left child. Walking left appends a `0` to a code and walking right a `1`.
/// A text made of a single distinct character gets the code `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
    codes: BTreeMap<char, String>,
}

impl HuffmanTree {
    pub fn from_text(text: &str) -> Result<HuffmanTree, EmptyInput> {
        let mut frequencies = BTreeMap::new();
        for symbol in text.chars() {
            *frequencies.entry(symbol).or_insert(0) += 1;
        }
        HuffmanTree::from_frequencies(&frequencies)
    }

    pub fn from_frequencies(frequencies: &BTreeMap<char, usize>) -> Result<HuffmanTree, EmptyInput> {
        let mut heap: MinHeap<Pending> = frequencies.iter()
            .enumerate()
            .map(|(order, (&symbol, &weight))| Pending {
                order,
                node: HuffmanNode::Leaf { symbol, weight },
            })
            .collect();
        let mut order = heap.len();

        let root = loop {
            let first = heap.pop().ok_or(EmptyInput)?;
            let Some(second) = heap.pop() else {
                break first.node;
            };

            heap.push(Pending {
                order,
                node: HuffmanNode::Internal {
                    weight: first.node.weight() + second.node.weight(),
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            });
            order += 1;
        };

        let mut codes = BTreeMap::new();
        match &root {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, String::from("0"));
            },
            internal => internal.collect_codes(&mut String::new(), &mut codes),
        }

        Ok(HuffmanTree { root, codes })
    }

    /// The code of every symbol, as a string of `0`s and `1`s.
    pub fn codes(&self) -> &BTreeMap<char, String> {
        &self.codes
    }

    pub fn code_of(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// The number of occurrences of each symbol the tree was built from.
    pub fn frequencies(&self) -> BTreeMap<char, usize> {
        fn walk(node: &HuffmanNode, frequencies: &mut BTreeMap<char, usize>) {
            match node {
                HuffmanNode::Leaf { symbol, weight } => {
                    frequencies.insert(*symbol, *weight);
                },
                HuffmanNode::Internal { left, right, .. } => {
                    walk(left, frequencies);
                    walk(right, frequencies);
                },
            }
        }

        let mut frequencies = BTreeMap::new();
        walk(&self.root, &mut frequencies);
        frequencies
    }

    /// The total number of bits needed to encode the original text.
    pub fn encoded_len(&self) -> usize {
        self.frequencies()
            .iter()
            .map(|(symbol, weight)| weight * self.codes[symbol].len())
            .sum()
    }

    pub fn encode(&self, text: &str) -> Result<String, UnknownSymbol> {
        text.chars()
            .map(|symbol| self.code_of(symbol).ok_or(UnknownSymbol { symbol }))
            .collect()
    }

    pub fn decode(&self, bits: &str) -> Result<String, DecodeError> {
        let mut text = String::new();
        let mut node = &self.root;
        let mut code_start = 0;

        for (position, bit) in bits.chars().enumerate() {
            node = match (node, bit) {
                (HuffmanNode::Internal { left, .. }, '0') => &**left,
                (HuffmanNode::Internal { right, .. }, '1') => &**right,
                // A lone symbol is coded as a single 0 that never leaves the root.
                (HuffmanNode::Leaf { .. }, '0') => node,
                (_, '0' | '1') => return Err(InvalidCode { position: code_start }.into()),
                _ => return Err(InvalidBit { bit, position }.into()),
            };

            if let HuffmanNode::Leaf { symbol, .. } = node {
                text.push(*symbol);
                node = &self.root;
                code_start = position + 1;
            }
        }

        if code_start != bits.chars().count() {
            return Err(InvalidCode { position: code_start }.into());
        }
        Ok(text)
    }
}

impl Display for HuffmanTree {
    /// One `symbol: code` line per symbol.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (symbol, code) in &self.codes {
            writeln!(f, "{symbol:?}: {code}")?;
        }
        Ok(())
    }
}

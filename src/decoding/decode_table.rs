//! Lookup structures for the table driven decoder.
//!
//! The code tree is built from [SYMBOLS] and then flattened into a state
//! machine that consumes four bits at a time. A state is an internal node of
//! the tree, so the current state also tells how many bits of an unfinished
//! code have been read and whether those bits could still be EOS padding.
//!
//! Everything here is computed by `const fn`. A table that is not a complete
//! prefix code does not compile.

use crate::table::{SymbolEntry, EOS, NUM_SYMBOLS, SYMBOLS};

/// A complete binary tree with 257 leaves has 256 internal nodes.
pub(crate) const NUM_STATES: usize = NUM_SYMBOLS - 1;

/// Bits consumed per transition.
pub(crate) const NIBBLE_BITS: u32 = 4;

/// Longest run of EOS bits that may pad the last byte.
pub(crate) const MAX_PADDING_BITS: u8 = 7;

/// Marks an empty child slot. The root is never anybody's child.
const NO_CHILD: u16 = 0;
/// Set on a child slot that holds a symbol instead of a node index.
const LEAF: u16 = 0x8000;

struct CodeTree {
    children: [[u16; 2]; NUM_STATES],
    depth: [u8; NUM_STATES],
    all_ones: [bool; NUM_STATES],
    num_nodes: usize,
}

impl CodeTree {
    const fn build(symbols: &[SymbolEntry; NUM_SYMBOLS]) -> Self {
        let mut tree = CodeTree {
            children: [[NO_CHILD; 2]; NUM_STATES],
            depth: [0; NUM_STATES],
            all_ones: [false; NUM_STATES],
            num_nodes: 1,
        };
        tree.all_ones[0] = true;

        let mut symbol = 0;
        while symbol < NUM_SYMBOLS {
            let entry = symbols[symbol];
            let mut node = 0;
            let mut remaining = entry.length();
            while remaining > 1 {
                remaining -= 1;
                let bit = ((entry.code() >> remaining) & 1) as usize;
                let child = tree.children[node][bit];
                if child == NO_CHILD {
                    assert!(tree.num_nodes < NUM_STATES, "code tree is not complete");
                    let new_node = tree.num_nodes;
                    tree.num_nodes += 1;
                    tree.children[node][bit] = new_node as u16;
                    tree.depth[new_node] = tree.depth[node] + 1;
                    tree.all_ones[new_node] = tree.all_ones[node] && bit == 1;
                    node = new_node;
                } else {
                    assert!(child & LEAF == 0, "code is prefixed by a shorter code");
                    node = child as usize;
                }
            }
            let bit = (entry.code() & 1) as usize;
            assert!(
                tree.children[node][bit] == NO_CHILD,
                "code collides with another code"
            );
            tree.children[node][bit] = LEAF | symbol as u16;
            symbol += 1;
        }
        tree
    }
}

/// The outcome of feeding four bits to a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Transition {
    pub next_state: u8,
    /// Only meaningful if `flags` has [EMIT] set
    pub symbol: u8,
    pub flags: u8,
}

/// A code ended inside the nibble and `symbol` is its byte.
pub(crate) const EMIT: u8 = 0b01;
/// The nibble completed EOS or walked off the tree.
pub(crate) const FAIL: u8 = 0b10;

impl Transition {
    const EMPTY: Transition = Transition {
        next_state: 0,
        symbol: 0,
        flags: 0,
    };
}

pub(crate) struct DecodeTable {
    transitions: [[Transition; 1 << NIBBLE_BITS]; NUM_STATES],
    depth: [u8; NUM_STATES],
    eos_prefix: [bool; NUM_STATES],
}

impl DecodeTable {
    const fn build(tree: &CodeTree) -> Self {
        let mut table = DecodeTable {
            transitions: [[Transition::EMPTY; 1 << NIBBLE_BITS]; NUM_STATES],
            depth: [0; NUM_STATES],
            eos_prefix: [false; NUM_STATES],
        };

        let mut state = 0;
        while state < tree.num_nodes {
            table.depth[state] = tree.depth[state];
            table.eos_prefix[state] = tree.all_ones[state];

            let mut nibble = 0;
            while nibble < (1 << NIBBLE_BITS) {
                let mut transition = Transition::EMPTY;
                let mut node = state;
                let mut shift = NIBBLE_BITS;
                while shift > 0 {
                    shift -= 1;
                    let child = tree.children[node][(nibble >> shift) & 1];
                    if child == NO_CHILD || child == LEAF | EOS as u16 {
                        transition.flags |= FAIL;
                        break;
                    }
                    if child & LEAF != 0 {
                        // every code is at least 5 bits long
                        assert!(transition.flags & EMIT == 0, "two codes ended in one nibble");
                        transition.flags |= EMIT;
                        transition.symbol = (child & !LEAF) as u8;
                        node = 0;
                    } else {
                        node = child as usize;
                    }
                }
                transition.next_state = node as u8;
                table.transitions[state][nibble] = transition;
                nibble += 1;
            }
            state += 1;
        }
        table
    }

    #[inline(always)]
    pub(crate) fn transition(&self, state: u8, nibble: u8) -> Transition {
        self.transitions[state as usize][nibble as usize]
    }

    /// Number of bits of an unfinished code that lead to `state`.
    pub(crate) fn pending_bits(&self, state: u8) -> u8 {
        self.depth[state as usize]
    }

    /// Whether input may end in `state`: the pending bits are a short enough
    /// prefix of EOS. The root (no pending bits) always qualifies.
    pub(crate) fn is_valid_end(&self, state: u8) -> bool {
        self.eos_prefix[state as usize] && self.depth[state as usize] <= MAX_PADDING_BITS
    }
}

pub(crate) static DECODE_TABLE: DecodeTable = DecodeTable::build(&CodeTree::build(&SYMBOLS));

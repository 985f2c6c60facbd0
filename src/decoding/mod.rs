//! Structures and utilities used for decoding Huffman coded strings.
//!
//! Decoding runs a state machine over the input four bits at a time. The
//! states are the internal nodes of the code tree, so after the last input
//! byte the current state tells whether the leftover bits are valid EOS
//! padding. The machine is generated at compile time from
//! [HUFFMAN_TABLE](crate::table::HUFFMAN_TABLE).

pub mod errors;

pub(crate) mod bit_reader;
pub(crate) mod decode_table;
mod huffman_decoder;

pub use errors::HuffmanDecodeError;
pub use huffman_decoder::*;

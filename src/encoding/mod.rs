//! Huffman coding of strings with the static HPACK table.
pub(crate) mod bit_writer;
mod huffman_encoder;
pub use huffman_encoder::*;

//! A codec for the static Huffman code HPACK uses to compress header strings
//! (RFC 7541 Section 5.2 and Appendix B).
//!
//! ```
//! let encoded = hpack_huffman::encode(b"www.example.com");
//! assert_eq!(encoded, [0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff]);
//! assert_eq!(hpack_huffman::decode(&encoded).unwrap(), b"www.example.com");
//! ```
//!
//! Decoding input from a peer should be bounded with [decode_with_limit] or
//! [decode_into].
#![no_std]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

/// Emits a debug event when the `tracing` feature is enabled, nothing otherwise.
macro_rules! debug {
    ($($x:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($x)*);
    };
}

pub mod decoding;
pub mod encoding;
pub mod table;
mod tests;

pub use decoding::{
    decode, decode_bitwise, decode_into, decode_with_limit, decoded_len_upper_bound,
    HuffmanDecodeError,
};
pub use encoding::{encode, encode_into, encoded_len, is_worth_encoding};
pub use table::{lookup, SymbolEntry, EOS, HUFFMAN_TABLE, NUM_SYMBOLS};

/// Encode `data`, decode it again with both decoders and check nothing was
/// lost on the way.
///
/// # Panics
/// Panics if any of the checks fail.
#[cfg(any(test, feature = "fuzz_exports"))]
pub fn round_trip(data: &[u8]) {
    let encoded = encode(data);
    assert_eq!(encoded.len(), encoded_len(data));

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.as_slice(), data);
    assert_eq!(decode_bitwise(&encoded), Ok(decoded));
}

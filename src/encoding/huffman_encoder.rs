use super::bit_writer::BitWriter;
use crate::table::{EOS, HUFFMAN_TABLE};
use alloc::vec::Vec;

/// Exact number of bytes [encode] produces for `input`, padding included.
pub fn encoded_len(input: &[u8]) -> usize {
    let bits: usize = input
        .iter()
        .map(|&byte| HUFFMAN_TABLE[byte as usize].length() as usize)
        .sum();
    bits.div_ceil(8)
}

/// Whether the Huffman coded form of `input` is strictly shorter than
/// `input` itself.
pub fn is_worth_encoding(input: &[u8]) -> bool {
    encoded_len(input) < input.len()
}

/// Huffman code `input`.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(input, &mut out);
    out
}

/// Huffman code `input` and append the result to `out`.
///
/// The last byte is filled up with the leading bits of EOS. If the codes end
/// on a byte boundary nothing is added.
pub fn encode_into(input: &[u8], out: &mut Vec<u8>) {
    out.reserve(encoded_len(input));

    let mut writer = BitWriter::new(out);
    for &byte in input {
        let entry = HUFFMAN_TABLE[byte as usize];
        writer.write_bits(entry.code(), entry.length());
    }

    let padding = writer.bits_to_boundary();
    if padding > 0 {
        writer.write_bits(HUFFMAN_TABLE[EOS].leading_bits(padding), padding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_input() {
        assert!(encode(&[]).is_empty());
        assert_eq!(encoded_len(&[]), 0);
    }

    #[test]
    fn pads_with_eos_prefix() {
        // 'a' is 00011
        assert_eq!(encode(b"a"), vec![0b0001_1111]);
        // '0' is 00000
        assert_eq!(encode(b"0"), vec![0b0000_0111]);
    }

    #[test]
    fn no_padding_on_byte_boundary() {
        // eight 5 bit codes are exactly five bytes
        assert_eq!(encode(b"00000000"), vec![0; 5]);
    }

    #[test]
    fn encoded_len_matches() {
        let data = b"Mon, 21 Oct 2013 20:13:21 GMT";
        assert_eq!(encoded_len(data), encode(data).len());
        assert_eq!(encoded_len(data), 22);

        let all_bytes: Vec<u8> = (0..=255).collect();
        assert_eq!(encoded_len(&all_bytes), encode(&all_bytes).len());
    }

    #[test]
    fn encode_into_appends() {
        let mut out = vec![0x82];
        encode_into(b"a", &mut out);
        encode_into(b"0", &mut out);
        assert_eq!(out, vec![0x82, 0b0001_1111, 0b0000_0111]);
    }

    #[test]
    fn worth_encoding() {
        assert!(is_worth_encoding(b"www.example.com"));
        assert!(!is_worth_encoding(b""));
        // a single control byte grows to 13 bits or more
        assert!(!is_worth_encoding(&[0]));
        assert!(!is_worth_encoding(&[0xff, 0xfe, 0xfd]));
    }

    #[test]
    fn deterministic() {
        let data = b"custom-value";
        assert_eq!(encode(data), encode(data));
    }
}

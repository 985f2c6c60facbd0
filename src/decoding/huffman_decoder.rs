use super::bit_reader::BitReader;
use super::decode_table::{DECODE_TABLE, EMIT, FAIL, MAX_PADDING_BITS};
use super::errors::HuffmanDecodeError;
use crate::table::{EOS, HUFFMAN_TABLE, MAX_CODE_LENGTH, MIN_CODE_LENGTH};
use alloc::vec::Vec;

/// Largest number of bytes that `compressed_len` bytes of valid input can
/// decode to. Every code is at least [MIN_CODE_LENGTH] bits long.
pub fn decoded_len_upper_bound(compressed_len: usize) -> usize {
    compressed_len.saturating_mul(8) / MIN_CODE_LENGTH as usize
}

/// Decode a Huffman coded string.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, HuffmanDecodeError> {
    let mut out = Vec::new();
    decode_into(input, &mut out, None)?;
    Ok(out)
}

/// Decode a Huffman coded string that is expected to produce at most
/// `max_len` bytes. Fails with [HuffmanDecodeError::OutputTooLarge] as soon
/// as that would be exceeded, before the extra byte is produced.
pub fn decode_with_limit(input: &[u8], max_len: usize) -> Result<Vec<u8>, HuffmanDecodeError> {
    let mut out = Vec::new();
    decode_into(input, &mut out, Some(max_len))?;
    Ok(out)
}

/// Decode `input` and append the result to `out`, returning the number of
/// bytes appended.
///
/// `max_len` bounds the number of appended bytes. On error `out` is left as
/// it was before the call.
pub fn decode_into(
    input: &[u8],
    out: &mut Vec<u8>,
    max_len: Option<usize>,
) -> Result<usize, HuffmanDecodeError> {
    let start = out.len();
    let limit = max_len.unwrap_or(usize::MAX);
    out.reserve(usize::min(decoded_len_upper_bound(input.len()), limit));

    match decode_nibbles(input, out, limit) {
        Ok(()) => Ok(out.len() - start),
        Err(err) => {
            out.truncate(start);
            debug!(error = %err, input_len = input.len(), "huffman decoding failed");
            Err(err)
        }
    }
}

fn decode_nibbles(input: &[u8], out: &mut Vec<u8>, limit: usize) -> Result<(), HuffmanDecodeError> {
    let start = out.len();
    let mut state = 0;

    for (byte_offset, &byte) in input.iter().enumerate() {
        for nibble in [byte >> 4, byte & 0x0f] {
            let transition = DECODE_TABLE.transition(state, nibble);
            if transition.flags & FAIL != 0 {
                return Err(HuffmanDecodeError::InvalidCode { byte_offset });
            }
            if transition.flags & EMIT != 0 {
                if out.len() - start == limit {
                    return Err(HuffmanDecodeError::OutputTooLarge { limit });
                }
                out.push(transition.symbol);
            }
            state = transition.next_state;
        }
    }

    // whatever was read since the last complete code has to be EOS padding
    if !DECODE_TABLE.is_valid_end(state) {
        return Err(HuffmanDecodeError::InvalidPadding {
            padding_bits: DECODE_TABLE.pending_bits(state),
        });
    }
    Ok(())
}

/// Decode by reading one bit at a time and searching the table for a code
/// of the current length.
///
/// This is far slower than [decode] and exists as the reference the table
/// driven decoder is checked against. Both return the same result for every
/// input, errors included.
pub fn decode_bitwise(input: &[u8]) -> Result<Vec<u8>, HuffmanDecodeError> {
    let mut br = BitReader::new(input);
    let mut out = Vec::new();
    let mut code = 0u32;
    let mut code_len = 0u8;

    while let Ok(bit) = br.get_bits(1) {
        code = (code << 1) | bit;
        code_len += 1;
        let byte_offset = (br.bits_read() - 1) / 8;

        match find_symbol(code, code_len) {
            Some(EOS) => return Err(HuffmanDecodeError::InvalidCode { byte_offset }),
            Some(symbol) => {
                out.push(symbol as u8);
                code = 0;
                code_len = 0;
            }
            None if code_len == MAX_CODE_LENGTH => {
                return Err(HuffmanDecodeError::InvalidCode { byte_offset })
            }
            None => {}
        }
    }

    let eos = HUFFMAN_TABLE[EOS];
    if code_len > MAX_PADDING_BITS || code != eos.leading_bits(code_len) {
        return Err(HuffmanDecodeError::InvalidPadding {
            padding_bits: code_len,
        });
    }
    Ok(out)
}

fn find_symbol(code: u32, code_len: u8) -> Option<usize> {
    if code_len < MIN_CODE_LENGTH {
        return None;
    }
    HUFFMAN_TABLE
        .iter()
        .position(|entry| entry.length() == code_len && entry.code() == code)
}

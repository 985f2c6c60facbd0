//! Errors that might occur while decoding a Huffman coded string.

/// The compressed input was malformed, or decoding it would exceed the
/// caller's output limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HuffmanDecodeError {
    /// The bits read so far completed the EOS code, or matched no code at all.
    InvalidCode {
        /// Index of the input byte that holds the offending bit
        byte_offset: usize,
    },
    /// The input ended with bits that are not a prefix of EOS of at most
    /// 7 bits.
    InvalidPadding { padding_bits: u8 },
    /// More than `limit` bytes would have been decoded.
    OutputTooLarge { limit: usize },
}

impl core::error::Error for HuffmanDecodeError {}

impl core::fmt::Display for HuffmanDecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HuffmanDecodeError::InvalidCode { byte_offset } => {
                write!(
                    f,
                    "Invalid huffman code in byte {}: the bits match EOS or no code at all",
                    byte_offset,
                )
            }
            HuffmanDecodeError::InvalidPadding { padding_bits } => {
                write!(
                    f,
                    "Invalid padding: {} trailing bits are not a prefix of EOS of at most 7 bits",
                    padding_bits,
                )
            }
            HuffmanDecodeError::OutputTooLarge { limit } => {
                write!(f, "Decoded output would exceed the limit of {} bytes", limit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HuffmanDecodeError;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_problem() {
        let msg = HuffmanDecodeError::InvalidCode { byte_offset: 3 }.to_string();
        assert!(msg.contains("byte 3"), "{}", msg);

        let msg = HuffmanDecodeError::InvalidPadding { padding_bits: 9 }.to_string();
        assert!(msg.contains("9 trailing bits"), "{}", msg);

        let msg = HuffmanDecodeError::OutputTooLarge { limit: 16 }.to_string();
        assert!(msg.contains("16 bytes"), "{}", msg);
    }
}

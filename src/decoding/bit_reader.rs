/// Reads bits most significant first, the order HPACK packs them in.
pub struct BitReader<'s> {
    idx: usize, //index counts bits already read
    source: &'s [u8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GetBitsError {
    TooManyBits {
        num_requested_bits: usize,
        limit: u8,
    },
    NotEnoughRemainingBits {
        requested: usize,
        remaining: usize,
    },
}

impl core::error::Error for GetBitsError {}

impl core::fmt::Display for GetBitsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GetBitsError::TooManyBits {
                num_requested_bits,
                limit,
            } => {
                write!(
                    f,
                    "Cant serve this request. The reader is limited to {} bits, requested {} bits",
                    limit, num_requested_bits,
                )
            }
            GetBitsError::NotEnoughRemainingBits {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Can't read {} bits, only have {} bits left",
                    requested, remaining,
                )
            }
        }
    }
}

impl<'s> BitReader<'s> {
    pub fn new(source: &'s [u8]) -> BitReader<'s> {
        BitReader { idx: 0, source }
    }

    pub fn bits_left(&self) -> usize {
        self.source.len() * 8 - self.idx
    }

    pub fn bits_read(&self) -> usize {
        self.idx
    }

    /// Read `n` bits and return them right-justified, first bit read in the
    /// highest position.
    pub fn get_bits(&mut self, n: usize) -> Result<u32, GetBitsError> {
        if n > 32 {
            return Err(GetBitsError::TooManyBits {
                num_requested_bits: n,
                limit: 32,
            });
        }
        if self.bits_left() < n {
            return Err(GetBitsError::NotEnoughRemainingBits {
                requested: n,
                remaining: self.bits_left(),
            });
        }

        let mut value = 0u32;
        let mut wanted = n;
        while wanted > 0 {
            let byte = self.source[self.idx / 8];
            let bits_left_in_current_byte = 8 - (self.idx % 8);
            let take = usize::min(bits_left_in_current_byte, wanted);

            // drop the bits already read, then the ones we dont want yet
            let chunk = (byte << (8 - bits_left_in_current_byte)) >> (8 - take);
            value = (value << take) | u32::from(chunk);

            self.idx += take;
            wanted -= take;
        }

        Ok(value)
    }
}

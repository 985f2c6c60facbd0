use alloc::vec::Vec;

/// An interface for writing codes of up to 32 bits into a byte buffer, most
/// significant bit first.
pub(crate) struct BitWriter<'o> {
    /// The buffer complete bytes are appended to
    output: &'o mut Vec<u8>,
    /// Bits that do not fill a byte yet, in the lowest `bits_in_container` bits
    container: u64,
    bits_in_container: u32,
}

impl<'o> BitWriter<'o> {
    /// Initialize a new writer that appends to `output`. Bytes already in the
    /// buffer are left alone.
    pub fn new(output: &'o mut Vec<u8>) -> Self {
        Self {
            output,
            container: 0,
            bits_in_container: 0,
        }
    }

    /// Write the lowest `num_bits` of `bits`, starting with the most
    /// significant of them.
    ///
    /// # Panics
    /// Panics in debug builds if `num_bits` is larger than 32.
    #[inline]
    pub fn write_bits(&mut self, bits: u32, num_bits: u8) {
        debug_assert!(num_bits <= 32);
        let num_bits = u32::from(num_bits);
        let mask = (1u64 << num_bits) - 1;

        // at most 7 bits are held between calls, so this never overflows
        self.container = (self.container << num_bits) | (u64::from(bits) & mask);
        self.bits_in_container += num_bits;

        while self.bits_in_container >= 8 {
            self.bits_in_container -= 8;
            self.output.push((self.container >> self.bits_in_container) as u8);
        }
        self.container &= (1 << self.bits_in_container) - 1;
    }

    /// Number of bits needed to reach the next byte boundary.
    pub fn bits_to_boundary(&self) -> u8 {
        ((8 - self.bits_in_container) % 8) as u8
    }
}

//! The static Huffman code shared by every HPACK peer (RFC 7541 Appendix B).
//!
//! Index 0-255 is the byte value, index 256 is the end-of-string marker. The
//! EOS code is never emitted as a symbol; its leading bits pad the last byte
//! of an encoded string.
//!
//! <https://www.rfc-editor.org/rfc/rfc7541#appendix-B>

/// Number of entries in the table: 256 byte values plus EOS.
pub const NUM_SYMBOLS: usize = 257;
/// Symbol id of the end-of-string marker.
pub const EOS: usize = 256;
/// Length of the shortest code in the table.
pub const MIN_CODE_LENGTH: u8 = 5;
/// Length of the longest code in the table.
pub const MAX_CODE_LENGTH: u8 = 30;

/// A single code of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolEntry {
    /// The bitstring in the lower `length` bits
    code: u32,
    length: u8,
}

impl SymbolEntry {
    const fn new(code: u32, length: u8) -> Self {
        SymbolEntry { code, length }
    }

    /// The code, right-justified.
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Number of bits in the code.
    pub const fn length(&self) -> u8 {
        self.length
    }

    /// Returns the first `num_bits` bits of the code, right-justified.
    ///
    /// # Panics
    /// Panics if `num_bits` is longer than the code.
    pub const fn leading_bits(&self, num_bits: u8) -> u32 {
        assert!(num_bits <= self.length, "asked for more bits than the code has");
        if num_bits == 0 {
            0
        } else {
            self.code >> (self.length - num_bits)
        }
    }
}

/// Returns the table entry for `symbol`.
///
/// Symbol ids come from a byte value or from [EOS], so anything past [EOS]
/// is a bug in the caller.
///
/// # Panics
/// Panics if `symbol` is greater than [EOS].
pub fn lookup(symbol: usize) -> SymbolEntry {
    assert!(
        symbol < NUM_SYMBOLS,
        "symbol id {} is outside of 0..={}",
        symbol,
        EOS
    );
    HUFFMAN_TABLE[symbol]
}

/// The table every encoder and decoder in this crate works from.
pub static HUFFMAN_TABLE: [SymbolEntry; NUM_SYMBOLS] = SYMBOLS;

// Verified once at compile time, so a bad edit to the table fails the build.
const _: () = check_lengths(&SYMBOLS);

const fn check_lengths(symbols: &[SymbolEntry; NUM_SYMBOLS]) {
    let mut idx = 0;
    while idx < NUM_SYMBOLS {
        let entry = symbols[idx];
        assert!(entry.length >= MIN_CODE_LENGTH && entry.length <= MAX_CODE_LENGTH);
        assert!(entry.code >> entry.length == 0, "code does not fit its length");
        idx += 1;
    }
    let eos = symbols[EOS];
    assert!(eos.length == MAX_CODE_LENGTH && eos.code == (1 << MAX_CODE_LENGTH) - 1);
}

pub(crate) const SYMBOLS: [SymbolEntry; NUM_SYMBOLS] = [
    SymbolEntry::new(0x1ff8, 13), // 0
    SymbolEntry::new(0x7fffd8, 23), // 1
    SymbolEntry::new(0xfffffe2, 28), // 2
    SymbolEntry::new(0xfffffe3, 28), // 3
    SymbolEntry::new(0xfffffe4, 28), // 4
    SymbolEntry::new(0xfffffe5, 28), // 5
    SymbolEntry::new(0xfffffe6, 28), // 6
    SymbolEntry::new(0xfffffe7, 28), // 7
    SymbolEntry::new(0xfffffe8, 28), // 8
    SymbolEntry::new(0xffffea, 24), // 9
    SymbolEntry::new(0x3ffffffc, 30), // 10
    SymbolEntry::new(0xfffffe9, 28), // 11
    SymbolEntry::new(0xfffffea, 28), // 12
    SymbolEntry::new(0x3ffffffd, 30), // 13
    SymbolEntry::new(0xfffffeb, 28), // 14
    SymbolEntry::new(0xfffffec, 28), // 15
    SymbolEntry::new(0xfffffed, 28), // 16
    SymbolEntry::new(0xfffffee, 28), // 17
    SymbolEntry::new(0xfffffef, 28), // 18
    SymbolEntry::new(0xffffff0, 28), // 19
    SymbolEntry::new(0xffffff1, 28), // 20
    SymbolEntry::new(0xffffff2, 28), // 21
    SymbolEntry::new(0x3ffffffe, 30), // 22
    SymbolEntry::new(0xffffff3, 28), // 23
    SymbolEntry::new(0xffffff4, 28), // 24
    SymbolEntry::new(0xffffff5, 28), // 25
    SymbolEntry::new(0xffffff6, 28), // 26
    SymbolEntry::new(0xffffff7, 28), // 27
    SymbolEntry::new(0xffffff8, 28), // 28
    SymbolEntry::new(0xffffff9, 28), // 29
    SymbolEntry::new(0xffffffa, 28), // 30
    SymbolEntry::new(0xffffffb, 28), // 31
    SymbolEntry::new(0x14, 6), // 32 ' '
    SymbolEntry::new(0x3f8, 10), // 33 '!'
    SymbolEntry::new(0x3f9, 10), // 34 '"'
    SymbolEntry::new(0xffa, 12), // 35 '#'
    SymbolEntry::new(0x1ff9, 13), // 36 '$'
    SymbolEntry::new(0x15, 6), // 37 '%'
    SymbolEntry::new(0xf8, 8), // 38 '&'
    SymbolEntry::new(0x7fa, 11), // 39 "'"
    SymbolEntry::new(0x3fa, 10), // 40 '('
    SymbolEntry::new(0x3fb, 10), // 41 ')'
    SymbolEntry::new(0xf9, 8), // 42 '*'
    SymbolEntry::new(0x7fb, 11), // 43 '+'
    SymbolEntry::new(0xfa, 8), // 44 ','
    SymbolEntry::new(0x16, 6), // 45 '-'
    SymbolEntry::new(0x17, 6), // 46 '.'
    SymbolEntry::new(0x18, 6), // 47 '/'
    SymbolEntry::new(0x0, 5), // 48 '0'
    SymbolEntry::new(0x1, 5), // 49 '1'
    SymbolEntry::new(0x2, 5), // 50 '2'
    SymbolEntry::new(0x19, 6), // 51 '3'
    SymbolEntry::new(0x1a, 6), // 52 '4'
    SymbolEntry::new(0x1b, 6), // 53 '5'
    SymbolEntry::new(0x1c, 6), // 54 '6'
    SymbolEntry::new(0x1d, 6), // 55 '7'
    SymbolEntry::new(0x1e, 6), // 56 '8'
    SymbolEntry::new(0x1f, 6), // 57 '9'
    SymbolEntry::new(0x5c, 7), // 58 ':'
    SymbolEntry::new(0xfb, 8), // 59 ';'
    SymbolEntry::new(0x7ffc, 15), // 60 '<'
    SymbolEntry::new(0x20, 6), // 61 '='
    SymbolEntry::new(0xffb, 12), // 62 '>'
    SymbolEntry::new(0x3fc, 10), // 63 '?'
    SymbolEntry::new(0x1ffa, 13), // 64 '@'
    SymbolEntry::new(0x21, 6), // 65 'A'
    SymbolEntry::new(0x5d, 7), // 66 'B'
    SymbolEntry::new(0x5e, 7), // 67 'C'
    SymbolEntry::new(0x5f, 7), // 68 'D'
    SymbolEntry::new(0x60, 7), // 69 'E'
    SymbolEntry::new(0x61, 7), // 70 'F'
    SymbolEntry::new(0x62, 7), // 71 'G'
    SymbolEntry::new(0x63, 7), // 72 'H'
    SymbolEntry::new(0x64, 7), // 73 'I'
    SymbolEntry::new(0x65, 7), // 74 'J'
    SymbolEntry::new(0x66, 7), // 75 'K'
    SymbolEntry::new(0x67, 7), // 76 'L'
    SymbolEntry::new(0x68, 7), // 77 'M'
    SymbolEntry::new(0x69, 7), // 78 'N'
    SymbolEntry::new(0x6a, 7), // 79 'O'
    SymbolEntry::new(0x6b, 7), // 80 'P'
    SymbolEntry::new(0x6c, 7), // 81 'Q'
    SymbolEntry::new(0x6d, 7), // 82 'R'
    SymbolEntry::new(0x6e, 7), // 83 'S'
    SymbolEntry::new(0x6f, 7), // 84 'T'
    SymbolEntry::new(0x70, 7), // 85 'U'
    SymbolEntry::new(0x71, 7), // 86 'V'
    SymbolEntry::new(0x72, 7), // 87 'W'
    SymbolEntry::new(0xfc, 8), // 88 'X'
    SymbolEntry::new(0x73, 7), // 89 'Y'
    SymbolEntry::new(0xfd, 8), // 90 'Z'
    SymbolEntry::new(0x1ffb, 13), // 91 '['
    SymbolEntry::new(0x7fff0, 19), // 92 '\\'
    SymbolEntry::new(0x1ffc, 13), // 93 ']'
    SymbolEntry::new(0x3ffc, 14), // 94 '^'
    SymbolEntry::new(0x22, 6), // 95 '_'
    SymbolEntry::new(0x7ffd, 15), // 96 '`'
    SymbolEntry::new(0x3, 5), // 97 'a'
    SymbolEntry::new(0x23, 6), // 98 'b'
    SymbolEntry::new(0x4, 5), // 99 'c'
    SymbolEntry::new(0x24, 6), // 100 'd'
    SymbolEntry::new(0x5, 5), // 101 'e'
    SymbolEntry::new(0x25, 6), // 102 'f'
    SymbolEntry::new(0x26, 6), // 103 'g'
    SymbolEntry::new(0x27, 6), // 104 'h'
    SymbolEntry::new(0x6, 5), // 105 'i'
    SymbolEntry::new(0x74, 7), // 106 'j'
    SymbolEntry::new(0x75, 7), // 107 'k'
    SymbolEntry::new(0x28, 6), // 108 'l'
    SymbolEntry::new(0x29, 6), // 109 'm'
    SymbolEntry::new(0x2a, 6), // 110 'n'
    SymbolEntry::new(0x7, 5), // 111 'o'
    SymbolEntry::new(0x2b, 6), // 112 'p'
    SymbolEntry::new(0x76, 7), // 113 'q'
    SymbolEntry::new(0x2c, 6), // 114 'r'
    SymbolEntry::new(0x8, 5), // 115 's'
    SymbolEntry::new(0x9, 5), // 116 't'
    SymbolEntry::new(0x2d, 6), // 117 'u'
    SymbolEntry::new(0x77, 7), // 118 'v'
    SymbolEntry::new(0x78, 7), // 119 'w'
    SymbolEntry::new(0x79, 7), // 120 'x'
    SymbolEntry::new(0x7a, 7), // 121 'y'
    SymbolEntry::new(0x7b, 7), // 122 'z'
    SymbolEntry::new(0x7ffe, 15), // 123 '{'
    SymbolEntry::new(0x7fc, 11), // 124 '|'
    SymbolEntry::new(0x3ffd, 14), // 125 '}'
    SymbolEntry::new(0x1ffd, 13), // 126 '~'
    SymbolEntry::new(0xffffffc, 28), // 127
    SymbolEntry::new(0xfffe6, 20), // 128
    SymbolEntry::new(0x3fffd2, 22), // 129
    SymbolEntry::new(0xfffe7, 20), // 130
    SymbolEntry::new(0xfffe8, 20), // 131
    SymbolEntry::new(0x3fffd3, 22), // 132
    SymbolEntry::new(0x3fffd4, 22), // 133
    SymbolEntry::new(0x3fffd5, 22), // 134
    SymbolEntry::new(0x7fffd9, 23), // 135
    SymbolEntry::new(0x3fffd6, 22), // 136
    SymbolEntry::new(0x7fffda, 23), // 137
    SymbolEntry::new(0x7fffdb, 23), // 138
    SymbolEntry::new(0x7fffdc, 23), // 139
    SymbolEntry::new(0x7fffdd, 23), // 140
    SymbolEntry::new(0x7fffde, 23), // 141
    SymbolEntry::new(0xffffeb, 24), // 142
    SymbolEntry::new(0x7fffdf, 23), // 143
    SymbolEntry::new(0xffffec, 24), // 144
    SymbolEntry::new(0xffffed, 24), // 145
    SymbolEntry::new(0x3fffd7, 22), // 146
    SymbolEntry::new(0x7fffe0, 23), // 147
    SymbolEntry::new(0xffffee, 24), // 148
    SymbolEntry::new(0x7fffe1, 23), // 149
    SymbolEntry::new(0x7fffe2, 23), // 150
    SymbolEntry::new(0x7fffe3, 23), // 151
    SymbolEntry::new(0x7fffe4, 23), // 152
    SymbolEntry::new(0x1fffdc, 21), // 153
    SymbolEntry::new(0x3fffd8, 22), // 154
    SymbolEntry::new(0x7fffe5, 23), // 155
    SymbolEntry::new(0x3fffd9, 22), // 156
    SymbolEntry::new(0x7fffe6, 23), // 157
    SymbolEntry::new(0x7fffe7, 23), // 158
    SymbolEntry::new(0xffffef, 24), // 159
    SymbolEntry::new(0x3fffda, 22), // 160
    SymbolEntry::new(0x1fffdd, 21), // 161
    SymbolEntry::new(0xfffe9, 20), // 162
    SymbolEntry::new(0x3fffdb, 22), // 163
    SymbolEntry::new(0x3fffdc, 22), // 164
    SymbolEntry::new(0x7fffe8, 23), // 165
    SymbolEntry::new(0x7fffe9, 23), // 166
    SymbolEntry::new(0x1fffde, 21), // 167
    SymbolEntry::new(0x7fffea, 23), // 168
    SymbolEntry::new(0x3fffdd, 22), // 169
    SymbolEntry::new(0x3fffde, 22), // 170
    SymbolEntry::new(0xfffff0, 24), // 171
    SymbolEntry::new(0x1fffdf, 21), // 172
    SymbolEntry::new(0x3fffdf, 22), // 173
    SymbolEntry::new(0x7fffeb, 23), // 174
    SymbolEntry::new(0x7fffec, 23), // 175
    SymbolEntry::new(0x1fffe0, 21), // 176
    SymbolEntry::new(0x1fffe1, 21), // 177
    SymbolEntry::new(0x3fffe0, 22), // 178
    SymbolEntry::new(0x1fffe2, 21), // 179
    SymbolEntry::new(0x7fffed, 23), // 180
    SymbolEntry::new(0x3fffe1, 22), // 181
    SymbolEntry::new(0x7fffee, 23), // 182
    SymbolEntry::new(0x7fffef, 23), // 183
    SymbolEntry::new(0xfffea, 20), // 184
    SymbolEntry::new(0x3fffe2, 22), // 185
    SymbolEntry::new(0x3fffe3, 22), // 186
    SymbolEntry::new(0x3fffe4, 22), // 187
    SymbolEntry::new(0x7ffff0, 23), // 188
    SymbolEntry::new(0x3fffe5, 22), // 189
    SymbolEntry::new(0x3fffe6, 22), // 190
    SymbolEntry::new(0x7ffff1, 23), // 191
    SymbolEntry::new(0x3ffffe0, 26), // 192
    SymbolEntry::new(0x3ffffe1, 26), // 193
    SymbolEntry::new(0xfffeb, 20), // 194
    SymbolEntry::new(0x7fff1, 19), // 195
    SymbolEntry::new(0x3fffe7, 22), // 196
    SymbolEntry::new(0x7ffff2, 23), // 197
    SymbolEntry::new(0x3fffe8, 22), // 198
    SymbolEntry::new(0x1ffffec, 25), // 199
    SymbolEntry::new(0x3ffffe2, 26), // 200
    SymbolEntry::new(0x3ffffe3, 26), // 201
    SymbolEntry::new(0x3ffffe4, 26), // 202
    SymbolEntry::new(0x7ffffde, 27), // 203
    SymbolEntry::new(0x7ffffdf, 27), // 204
    SymbolEntry::new(0x3ffffe5, 26), // 205
    SymbolEntry::new(0xfffff1, 24), // 206
    SymbolEntry::new(0x1ffffed, 25), // 207
    SymbolEntry::new(0x7fff2, 19), // 208
    SymbolEntry::new(0x1fffe3, 21), // 209
    SymbolEntry::new(0x3ffffe6, 26), // 210
    SymbolEntry::new(0x7ffffe0, 27), // 211
    SymbolEntry::new(0x7ffffe1, 27), // 212
    SymbolEntry::new(0x3ffffe7, 26), // 213
    SymbolEntry::new(0x7ffffe2, 27), // 214
    SymbolEntry::new(0xfffff2, 24), // 215
    SymbolEntry::new(0x1fffe4, 21), // 216
    SymbolEntry::new(0x1fffe5, 21), // 217
    SymbolEntry::new(0x3ffffe8, 26), // 218
    SymbolEntry::new(0x3ffffe9, 26), // 219
    SymbolEntry::new(0xffffffd, 28), // 220
    SymbolEntry::new(0x7ffffe3, 27), // 221
    SymbolEntry::new(0x7ffffe4, 27), // 222
    SymbolEntry::new(0x7ffffe5, 27), // 223
    SymbolEntry::new(0xfffec, 20), // 224
    SymbolEntry::new(0xfffff3, 24), // 225
    SymbolEntry::new(0xfffed, 20), // 226
    SymbolEntry::new(0x1fffe6, 21), // 227
    SymbolEntry::new(0x3fffe9, 22), // 228
    SymbolEntry::new(0x1fffe7, 21), // 229
    SymbolEntry::new(0x1fffe8, 21), // 230
    SymbolEntry::new(0x7ffff3, 23), // 231
    SymbolEntry::new(0x3fffea, 22), // 232
    SymbolEntry::new(0x3fffeb, 22), // 233
    SymbolEntry::new(0x1ffffee, 25), // 234
    SymbolEntry::new(0x1ffffef, 25), // 235
    SymbolEntry::new(0xfffff4, 24), // 236
    SymbolEntry::new(0xfffff5, 24), // 237
    SymbolEntry::new(0x3ffffea, 26), // 238
    SymbolEntry::new(0x7ffff4, 23), // 239
    SymbolEntry::new(0x3ffffeb, 26), // 240
    SymbolEntry::new(0x7ffffe6, 27), // 241
    SymbolEntry::new(0x3ffffec, 26), // 242
    SymbolEntry::new(0x3ffffed, 26), // 243
    SymbolEntry::new(0x7ffffe7, 27), // 244
    SymbolEntry::new(0x7ffffe8, 27), // 245
    SymbolEntry::new(0x7ffffe9, 27), // 246
    SymbolEntry::new(0x7ffffea, 27), // 247
    SymbolEntry::new(0x7ffffeb, 27), // 248
    SymbolEntry::new(0xffffffe, 28), // 249
    SymbolEntry::new(0x7ffffec, 27), // 250
    SymbolEntry::new(0x7ffffed, 27), // 251
    SymbolEntry::new(0x7ffffee, 27), // 252
    SymbolEntry::new(0x7ffffef, 27), // 253
    SymbolEntry::new(0x7fffff0, 27), // 254
    SymbolEntry::new(0x3ffffee, 26), // 255
    SymbolEntry::new(0x3fffffff, 30), // 256 EOS
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_check_entries() {
        assert_eq!(lookup(b'0' as usize), SymbolEntry::new(0x0, 5));
        assert_eq!(lookup(b'a' as usize), SymbolEntry::new(0x3, 5));
        assert_eq!(lookup(b' ' as usize), SymbolEntry::new(0x14, 6));
        assert_eq!(lookup(b'w' as usize), SymbolEntry::new(0x78, 7));
        assert_eq!(lookup(0), SymbolEntry::new(0x1ff8, 13));
        assert_eq!(lookup(255), SymbolEntry::new(0x3ffffee, 26));
        assert_eq!(lookup(EOS), SymbolEntry::new(0x3fffffff, 30));
    }

    #[test]
    fn eos_leading_bits_are_ones() {
        let eos = lookup(EOS);
        assert_eq!(eos.leading_bits(0), 0);
        assert_eq!(eos.leading_bits(1), 0b1);
        assert_eq!(eos.leading_bits(7), 0b111_1111);
        assert_eq!(eos.leading_bits(30), 0x3fff_ffff);
    }

    #[test]
    fn leading_bits_of_short_code() {
        // '%' is 010101
        let entry = lookup(b'%' as usize);
        assert_eq!(entry.leading_bits(3), 0b010);
        assert_eq!(entry.leading_bits(6), 0b010101);
    }

    #[test]
    fn lengths_within_bounds() {
        let min = HUFFMAN_TABLE.iter().map(|e| e.length()).min().unwrap();
        let max = HUFFMAN_TABLE.iter().map(|e| e.length()).max().unwrap();
        assert_eq!(min, MIN_CODE_LENGTH);
        assert_eq!(max, MAX_CODE_LENGTH);
    }

    #[test]
    fn kraft_sum_is_exactly_one() {
        // sum of 2^-len over all codes, scaled by 2^30
        let sum: u64 = HUFFMAN_TABLE
            .iter()
            .map(|e| 1u64 << (MAX_CODE_LENGTH - e.length()))
            .sum();
        assert_eq!(sum, 1 << MAX_CODE_LENGTH);
    }

    #[test]
    fn no_code_is_prefix_of_another() {
        for (a, left) in HUFFMAN_TABLE.iter().enumerate() {
            for (b, right) in HUFFMAN_TABLE.iter().enumerate() {
                if a == b || left.length() > right.length() {
                    continue;
                }
                assert_ne!(
                    right.leading_bits(left.length()),
                    left.code(),
                    "code of {} is a prefix of the code of {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    #[should_panic]
    fn lookup_past_eos_panics() {
        lookup(NUM_SYMBOLS);
    }

    #[test]
    #[should_panic]
    fn leading_bits_past_length_panics() {
        lookup(b'0' as usize).leading_bits(6);
    }
}

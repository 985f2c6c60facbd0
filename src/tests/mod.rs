#[cfg(test)]
mod fuzz_regressions;

/// Header values of the kind HPACK sees in practice.
#[cfg(test)]
const SAMPLES: &[&[u8]] = &[
    b"",
    b"a",
    b"gzip",
    b"no-cache",
    b"custom-key",
    b"custom-value",
    b"private",
    b"www.example.com",
    b"https://www.example.com",
    b"Mon, 21 Oct 2013 20:13:21 GMT",
    b"text/html; charset=utf-8",
    b"application/grpc+proto",
    b"grpc-status",
    b"foo=ASDJKHQKBZXOQWEOPIUAXQWEOIU; max-age=3600; version=1",
];

#[test]
fn round_trip_samples() {
    for sample in SAMPLES {
        crate::round_trip(sample);
    }
}

#[test]
fn round_trip_every_byte() {
    let all_bytes: alloc::vec::Vec<u8> = (0..=255).collect();
    crate::round_trip(&all_bytes);
    for byte in 0..=255u8 {
        crate::round_trip(&[byte]);
        crate::round_trip(&[byte, byte, byte]);
    }
}

#[test]
fn round_trip_random() {
    use rand::{Rng, SeedableRng};

    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xDEADBEEF);
    for _ in 0..2000 {
        let len = rng.gen_range(0..64);
        let data: alloc::vec::Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        crate::round_trip(&data);

        let text: alloc::vec::Vec<u8> = (0..len).map(|_| rng.gen_range(b' '..=b'~')).collect();
        crate::round_trip(&text);
    }
}

#[test]
fn padding_never_exceeds_seven_bits() {
    use crate::table::HUFFMAN_TABLE;

    for sample in SAMPLES {
        let bits: usize = sample
            .iter()
            .map(|&b| HUFFMAN_TABLE[b as usize].length() as usize)
            .sum();
        let encoded = crate::encode(sample);
        let padding = encoded.len() * 8 - bits;
        assert!(padding < 8, "{} bits of padding", padding);
    }
}

#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate hpack_huffman;

fuzz_target!(|data: &[u8]| {
    let fast = hpack_huffman::decode(data);
    assert_eq!(fast, hpack_huffman::decode_bitwise(data));
    if let Ok(decoded) = fast {
        assert!(decoded.len() <= hpack_huffman::decoded_len_upper_bound(data.len()));
        // valid input is exactly what the encoder produces for its output
        assert_eq!(hpack_huffman::encode(&decoded), data);
    }
});

#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate hpack_huffman;
use hpack_huffman::round_trip;

fuzz_target!(|data: &[u8]| {
    round_trip(data);
});

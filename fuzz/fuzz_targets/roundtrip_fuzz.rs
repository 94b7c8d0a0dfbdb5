#![no_main]
use libfuzzer_sys::fuzz_target;
use yalz::{Params, compress_with, decompress};

fuzz_target!(|data: &[u8]| {
    // First two bytes steer the parameters, the rest is payload.
    let (searchlen, blocksize, payload) = match data {
        [a, b, rest @ ..] => (
            (*a as usize % 16) + 1,
            ((*b as usize + 1) * 512).min(1 << 16),
            rest,
        ),
        _ => (8, 1 << 16, data),
    };

    let params = Params {
        searchlen,
        blocksize,
    };
    let frame = compress_with(payload, params);
    let decoded = decompress(&frame).expect("own frame must decode");
    assert_eq!(decoded, payload);
});

#![no_main]
use libfuzzer_sys::fuzz_target;
use yalz::{Decompressor, compress};

fuzz_target!(|data: &[u8]| {
    // Feed a valid frame to the decoder in fuzz-chosen chunk sizes;
    // chunking must never change the decoded bytes.
    let (chunk, payload) = match data {
        [c, rest @ ..] => ((*c as usize % 64) + 1, rest),
        _ => return,
    };

    let frame = compress(payload);
    let mut decoder = Decompressor::new();
    let mut remaining = Vec::new();
    let mut decoded = None;

    for piece in frame.chunks(chunk) {
        let done = decoder.feed(piece, &mut remaining).expect("valid frame");
        if done && decoder.is_idle() {
            assert!(remaining.is_empty());
            decoded = Some(decoder.result().to_vec());
        }
    }
    assert_eq!(decoded.expect("frame completes").as_slice(), payload);
});

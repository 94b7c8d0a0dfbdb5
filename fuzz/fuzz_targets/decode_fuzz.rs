#![no_main]
use libfuzzer_sys::fuzz_target;
use yalz::decompress;

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic on arbitrary bytes — only return
    // errors. Mask the first byte so the declared frame length stays
    // within one VLQ byte; hostile lengths only exercise the allocator.
    let mut data = data.to_vec();
    if let Some(first) = data.first_mut() {
        *first &= 0x7F;
    }
    let _ = decompress(&data);
});

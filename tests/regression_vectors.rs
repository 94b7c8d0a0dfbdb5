// Byte-exact regression vectors for the default parameters
// (searchlen=8, blocksize=65536).
//
// The compressed form is a deterministic function of input and
// parameters; these vectors pin the wire layout down so encoder changes
// cannot silently alter the format.

use yalz::{DecodeError, Decompressor, compress, decompress};

fn assert_vector(input: &[u8], frame: &[u8]) {
    assert_eq!(compress(input), frame, "compressed bytes changed");
    assert_eq!(decompress(frame).unwrap(), input, "decode mismatch");
}

// ---------------------------------------------------------------------------
// Vectors
// ---------------------------------------------------------------------------

#[test]
fn empty() {
    assert_vector(b"", &[0x00]);
}

#[test]
fn short_literal_only() {
    // Fewer than 6 bytes can never match: header, one literal token.
    assert_vector(b"hello", b"\x05\x0bhello");
}

#[test]
fn no_repeats_literal_only() {
    assert_vector(b"foo bar baz", b"\x0b\x17foo bar baz");
}

#[test]
fn short_backref() {
    // "abcdef" twice: literal, then run 6 at offset 6.
    // Token VLQ: ((6 << 4) | (6 - 3)) << 1 = 198 -> C6 01.
    assert_vector(b"abcdefabcdef", b"\x0c\x0dabcdef\xc6\x01");
}

#[test]
fn overlapping_backref() {
    // Ten 'A's: literal 'A', then run 9 at offset 1.
    // Token VLQ: ((1 << 4) | (9 - 3)) << 1 = 44.
    assert_vector(b"AAAAAAAAAA", &[0x0A, 0x03, 0x41, 0x2C]);
}

#[test]
fn long_form_backref() {
    // "A" + 100 x "B": literal "AB", then run 99 at offset 1. The
    // biased run 96 exceeds the 4-bit short field, so the token is
    // vlq(offset << 5) = 0x20 followed by vlq(96) = 0x60.
    let mut input = vec![b'A'];
    input.extend(std::iter::repeat_n(b'B', 100));
    assert_vector(&input, &[0x65, 0x05, 0x41, 0x42, 0x20, 0x60]);
}

#[test]
fn multi_byte_header() {
    // 300 bytes of 0x07: header vlq(300) = AC 02, literal 0x07, then
    // run 299 at offset 1 in long form (offset VLQ 0x20, run VLQ 296).
    let input = vec![0x07u8; 300];
    let mut frame = vec![0xAC, 0x02, 0x03, 0x07, 0x20];
    frame.extend_from_slice(&[0xA8, 0x02]); // vlq(296)
    assert_vector(&input, &frame);
}

// ---------------------------------------------------------------------------
// Corruption
// ---------------------------------------------------------------------------

#[test]
fn corrupted_offset_is_rejected() {
    // Grow the back-reference offset beyond the bytes decoded so far.
    let mut frame = compress(b"abcdefabcdef");
    let n = frame.len();
    frame[n - 1] = 0x7F;
    assert!(matches!(
        decompress(&frame).unwrap_err(),
        DecodeError::Malformed(_)
    ));
}

#[test]
fn corrupted_length_is_rejected() {
    // Shrink the declared frame length below the literal token's size.
    let mut frame = compress(b"foo bar baz");
    frame[0] = 0x02;
    assert!(matches!(
        decompress(&frame).unwrap_err(),
        DecodeError::Malformed(_)
    ));
}

#[test]
fn corruption_fails_identically_when_streamed() {
    let mut frame = compress(b"abcdefabcdef");
    let n = frame.len();
    frame[n - 1] = 0x7F;

    let mut decoder = Decompressor::new();
    let mut remaining = Vec::new();
    let mut failed = false;
    for &byte in &frame {
        match decoder.feed(&[byte], &mut remaining) {
            Ok(_) => {}
            Err(DecodeError::Malformed(_)) => {
                failed = true;
                break;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert!(failed, "streamed decode accepted corrupt frame");
}

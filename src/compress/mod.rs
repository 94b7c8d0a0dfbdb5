// LZ77 frame compression.
//
// - `encoder` — match-finding compressor producing framed output
// - `decoder` — resumable streaming decoder with frame-boundary detection

pub mod decoder;
pub mod encoder;

pub use decoder::{DecodeError, Decompressor, decompress};
pub use encoder::{Compressor, compress, compress_with};

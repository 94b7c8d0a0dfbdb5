// Stream-level helpers: chunked compress/decompress over Read/Write.
//
// Compression frames each chunk independently, so decompression can
// stream frame by frame with bounded memory. Decompression feeds every
// buffer through the resumable decoder, draining completed frames and
// carrying bytes that belong to the next frame forward.

use std::io::{self, Read, Write};

use log::debug;

use crate::compress::decoder::{DecodeError, Decompressor};
use crate::compress::encoder::Compressor;
use crate::hash::config::Params;

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by [`compress_stream`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressStats {
    /// Uncompressed bytes consumed.
    pub bytes_in: u64,
    /// Compressed bytes written.
    pub bytes_out: u64,
    /// Frames emitted.
    pub frames: u64,
}

/// Statistics returned by [`decompress_stream`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DecompressStats {
    /// Compressed bytes consumed.
    pub bytes_in: u64,
    /// Uncompressed bytes written.
    pub bytes_out: u64,
    /// Frames decoded.
    pub frames: u64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for stream operations.
#[derive(Debug)]
pub enum StreamError {
    /// I/O error on the reader or writer.
    Io(io::Error),
    /// Frame decode error.
    Decode(DecodeError),
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Decode(e) => Some(e),
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<DecodeError> for StreamError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

// ---------------------------------------------------------------------------
// Chunk reading
// ---------------------------------------------------------------------------

/// Fill `buf` as far as the reader allows; a short count means EOF.
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

// ---------------------------------------------------------------------------
// compress_stream
// ---------------------------------------------------------------------------

/// Compress `reader` to `writer`, one frame per `chunk_size` bytes of
/// input. Dictionary allocations are reused across frames.
pub fn compress_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    params: Params,
    chunk_size: usize,
) -> Result<CompressStats, StreamError> {
    let chunk_size = chunk_size.max(1);
    let mut compressor = Compressor::new(params);
    let mut buf = vec![0u8; chunk_size];
    let mut stats = CompressStats::default();

    loop {
        let n = read_chunk(reader, &mut buf)?;
        if n == 0 {
            break;
        }
        let frame = compressor.frame(&buf[..n]);
        writer.write_all(&frame)?;
        stats.bytes_in += n as u64;
        stats.bytes_out += frame.len() as u64;
        stats.frames += 1;
        if n < chunk_size {
            break;
        }
    }

    debug!(
        "compress_stream: {} bytes in, {} bytes out, {} frames",
        stats.bytes_in, stats.bytes_out, stats.frames
    );
    Ok(stats)
}

// ---------------------------------------------------------------------------
// decompress_stream
// ---------------------------------------------------------------------------

/// Decompress a stream of frames from `reader` to `writer`.
///
/// Frame boundaries are detected by the decoder itself; the reader's
/// chunking does not need to line up with them. Fails with a truncated
/// error when the input ends inside a frame.
pub fn decompress_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    chunk_size: usize,
) -> Result<DecompressStats, StreamError> {
    let chunk_size = chunk_size.max(1);
    let mut decoder = Decompressor::new();
    let mut buf = vec![0u8; chunk_size];
    let mut stats = DecompressStats::default();

    loop {
        let n = read_chunk(reader, &mut buf)?;
        if n == 0 {
            break;
        }
        stats.bytes_in += n as u64;
        drain_chunk(&mut decoder, &buf[..n], writer, &mut stats)?;
        if n < chunk_size {
            break;
        }
    }

    if !decoder.is_idle() {
        return Err(StreamError::Decode(DecodeError::Truncated));
    }

    debug!(
        "decompress_stream: {} bytes in, {} bytes out, {} frames",
        stats.bytes_in, stats.bytes_out, stats.frames
    );
    Ok(stats)
}

/// Feed one input buffer, writing out every frame that completes in it.
fn drain_chunk<W: Write>(
    decoder: &mut Decompressor,
    chunk: &[u8],
    writer: &mut W,
    stats: &mut DecompressStats,
) -> Result<(), StreamError> {
    let mut remaining = Vec::new();
    let mut done = decoder.feed(chunk, &mut remaining)?;
    while done {
        let result = decoder.result();
        if !result.is_empty() {
            writer.write_all(result)?;
            stats.bytes_out += result.len() as u64;
            stats.frames += 1;
        }
        if remaining.is_empty() {
            break;
        }
        let pending = std::mem::take(&mut remaining);
        done = decoder.feed(&pending, &mut remaining)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roundtrip_stream(data: &[u8], params: Params, chunk_size: usize) {
        let mut compressed = Vec::new();
        let c_stats =
            compress_stream(&mut Cursor::new(data), &mut compressed, params, chunk_size).unwrap();
        assert_eq!(c_stats.bytes_in, data.len() as u64);
        assert_eq!(c_stats.bytes_out, compressed.len() as u64);

        let mut output = Vec::new();
        let d_stats =
            decompress_stream(&mut Cursor::new(&compressed), &mut output, chunk_size).unwrap();
        assert_eq!(output, data);
        assert_eq!(d_stats.frames, c_stats.frames);
        assert_eq!(d_stats.bytes_out, data.len() as u64);
    }

    #[test]
    fn single_frame_roundtrip() {
        roundtrip_stream(b"the quick brown fox jumps over the lazy dog", Params::default(), 1024);
    }

    #[test]
    fn empty_stream() {
        let mut compressed = Vec::new();
        let stats =
            compress_stream(&mut Cursor::new(&[]), &mut compressed, Params::default(), 1024)
                .unwrap();
        assert_eq!(stats.frames, 0);
        assert!(compressed.is_empty());

        let mut output = Vec::new();
        decompress_stream(&mut Cursor::new(&compressed), &mut output, 1024).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn multiple_frames() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 7) as u8).collect();
        // 512-byte chunks force many frames.
        roundtrip_stream(&data, Params::default(), 512);
    }

    #[test]
    fn decoder_chunking_independent_of_frames() {
        let data: Vec<u8> = b"abcdef".iter().copied().cycle().take(5000).collect();
        let mut compressed = Vec::new();
        compress_stream(&mut Cursor::new(&data), &mut compressed, Params::default(), 700).unwrap();

        // Decode with a chunk size that never lines up with frames.
        for chunk_size in [1, 3, 17, 4096] {
            let mut output = Vec::new();
            decompress_stream(&mut Cursor::new(&compressed), &mut output, chunk_size).unwrap();
            assert_eq!(output, data, "chunk_size {chunk_size}");
        }
    }

    #[test]
    fn small_memory_params() {
        let data: Vec<u8> = (0..3000u32).map(|i| (i % 11) as u8).collect();
        roundtrip_stream(&data, Params::small_memory(), 1000);
        roundtrip_stream(&data, Params::fast(), 1000);
    }

    #[test]
    fn truncated_stream_is_an_error() {
        let mut compressed = Vec::new();
        compress_stream(
            &mut Cursor::new(b"some reasonably long input data"),
            &mut compressed,
            Params::default(),
            1024,
        )
        .unwrap();
        compressed.truncate(compressed.len() - 1);

        let mut output = Vec::new();
        let err = decompress_stream(&mut Cursor::new(&compressed), &mut output, 8).unwrap_err();
        assert!(matches!(
            err,
            StreamError::Decode(DecodeError::Truncated)
        ));
    }

    #[test]
    fn corrupt_stream_is_an_error() {
        let mut compressed = Vec::new();
        compress_stream(
            &mut Cursor::new(&b"abcdefabcdef"[..]),
            &mut compressed,
            Params::default(),
            1024,
        )
        .unwrap();
        let n = compressed.len();
        compressed[n - 1] = 0x7F; // back-reference offset now out of range

        let mut output = Vec::new();
        let err = decompress_stream(&mut Cursor::new(&compressed), &mut output, 1024).unwrap_err();
        assert!(matches!(
            err,
            StreamError::Decode(DecodeError::Malformed(_))
        ));
    }
}

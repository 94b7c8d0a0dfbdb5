//! yalz: a self-contained LZ77 byte-stream compressor.
//!
//! Every frame carries its own uncompressed length, so the decoder
//! detects message boundaries in a continuous byte stream by itself —
//! no transport delimiters needed. Input may arrive in arbitrary
//! chunks; the decoder resumes mid-token across chunk boundaries.
//!
//! The crate provides:
//! - One-shot compression and decompression (`compress`, `decompress`)
//! - A resumable streaming decoder (`Decompressor`) for chunked input
//! - Chunked stream helpers over `Read`/`Write` (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use yalz::{Decompressor, compress};
//!
//! let data = b"hello hello hello hello";
//! let frame = compress(data);
//!
//! let mut decoder = Decompressor::new();
//! let mut remaining = Vec::new();
//! assert!(decoder.feed(&frame, &mut remaining).unwrap());
//! assert_eq!(decoder.result(), data);
//! assert!(remaining.is_empty());
//! ```

pub mod compress;
pub mod frame;
pub mod hash;
pub mod io;

#[cfg(feature = "cli")]
pub mod cli;

pub use compress::decoder::{DecodeError, Decompressor, decompress};
pub use compress::encoder::{Compressor, compress, compress_with};
pub use hash::config::Params;

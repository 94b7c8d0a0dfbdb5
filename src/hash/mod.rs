// Prefix hashing and match finding for the compressor.
//
// This module provides:
// - A circular buffer of past positions (`ring`)
// - The offset dictionary mapping prefix hashes to rings (`dict`)
// - Prefix packing, the profit function and the match finder (`matching`)
// - Tuning parameters and presets (`config`)

pub mod config;
pub mod dict;
pub mod matching;
pub mod ring;

// Wire format for compressed frames.
//
// A frame is a VLQ-encoded uncompressed length followed by tokens:
//
//   frame         := vlq(length) token*
//   token         := literal | backref
//   literal       := vlq((n << 1) | 1) byte{n}
//   short backref := vlq(((offset << 4) | (run - 3)) << 1)   run - 3 in 1..=15
//   long backref  := vlq(offset << 5) vlq(run - 3)
//
// The low bit of a token's first VLQ picks literal (1) or back-reference
// (0). Short back-references piggyback the run in the next four bits; a
// zero there means the run arrives in a second VLQ.

pub mod vlq;

/// Shortest back-reference worth emitting. Runs of 3 or fewer cost more
/// to encode than the literal bytes they replace.
pub const MIN_RUN: usize = 4;

/// Bias subtracted from the run before encoding; runs below [`MIN_RUN`]
/// do not exist on the wire.
pub const RUN_BIAS: usize = 3;

/// Width of the short-form run field, in bits.
pub const SHORT_RUN_BITS: u32 = 4;

/// First biased run value that no longer fits the short form.
pub const SHORT_RUN_LIMIT: usize = 1 << SHORT_RUN_BITS;

/// Low bit of a token's first VLQ: set for literal runs.
pub const TAG_LITERAL: usize = 1;

// Match finding over a dual-hash dictionary.
//
// Two dictionaries index 3-byte and 6-byte prefixes of every visited
// position. A probe walks each candidate ring newest-first, measures the
// common run against the current position and keeps the candidate with
// the highest net profit.

use super::config::Params;
use super::dict::OffsetsDict;

/// Minimum bytes needed at a position to compute both prefix hashes.
pub const HASH_WIDTH: usize = 6;

// ---------------------------------------------------------------------------
// Prefix packing
// ---------------------------------------------------------------------------

/// Hash the 3- and 6-byte prefixes at the start of `bytes` into 16-bit
/// keys reduced modulo `blocksize`.
///
/// The byte at offset 3 is deliberately not mixed in; the arithmetic was
/// tuned empirically for compression quality and is kept as-is.
pub fn pack_prefixes(bytes: &[u8], blocksize: usize) -> (u16, u16) {
    let packed3 = (u16::from(bytes[0]) | (u16::from(bytes[1]) << 8)) ^ u16::from(bytes[2]);
    let packed6 = packed3.wrapping_add((u16::from(bytes[4]) << 8) | u16::from(bytes[5]));
    (reduce(packed3, blocksize), reduce(packed6, blocksize))
}

#[inline]
fn reduce(packed: u16, blocksize: usize) -> u16 {
    (packed as usize % blocksize) as u16
}

// ---------------------------------------------------------------------------
// Profit
// ---------------------------------------------------------------------------

/// Net byte savings of a `(run, offset)` back-reference, or 0 when the
/// token would cost at least as much as the literal bytes it replaces.
///
/// The overhead tracks the token layout: two bytes minimum, plus one per
/// VLQ length step of the run and of the offset.
pub fn gains(run: usize, offset: usize) -> usize {
    let mut loss = 2;
    if run > 0x7F {
        loss += 1;
    }
    if run > 0x3FFF {
        loss += 1;
    }
    if run > 0x1F_FFFF {
        loss += 1;
    }
    if offset > 0x7F {
        loss += 1;
    }
    if offset > 0x3FFF {
        loss += 1;
    }
    if offset > 0x1F_FFFF {
        loss += 1;
    }
    run.saturating_sub(loss)
}

/// Length of the common prefix of two byte slices.
pub fn common_run(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

// ---------------------------------------------------------------------------
// Candidates
// ---------------------------------------------------------------------------

/// Best back-reference found for a position. The zero candidate means
/// "no profitable match".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Candidate {
    pub run: usize,
    pub offset: usize,
    pub gain: usize,
}

// ---------------------------------------------------------------------------
// Match finder
// ---------------------------------------------------------------------------

/// Dual-dictionary match finder over one frame's input.
pub struct MatchFinder {
    dict3: OffsetsDict,
    dict6: OffsetsDict,
    blocksize: usize,
}

impl MatchFinder {
    pub fn new(params: &Params) -> Self {
        Self {
            dict3: OffsetsDict::new(params.searchlen, params.blocksize),
            dict6: OffsetsDict::new(params.searchlen, params.blocksize),
            blocksize: params.blocksize,
        }
    }

    /// Probe both dictionaries at `pos`, then record the position in
    /// each. At least [`HASH_WIDTH`] bytes must remain at `pos`.
    ///
    /// The 6-byte dictionary is scanned first; the best candidate is
    /// replaced only on strictly higher gain, so its matches win over
    /// equally profitable 3-byte ones.
    pub fn best_match(&mut self, input: &[u8], pos: usize) -> Candidate {
        let (key3, key6) = pack_prefixes(&input[pos..], self.blocksize);
        let mut best = Candidate::default();
        probe(&mut self.dict6, key6, input, pos, &mut best);
        probe(&mut self.dict3, key3, input, pos, &mut best);
        best
    }

    /// Forget all recorded positions, keeping allocations for reuse.
    pub fn clear(&mut self) {
        self.dict3.clear();
        self.dict6.clear();
    }
}

/// Walk the ring under `key` newest-first, then record `pos` in it.
fn probe(dict: &mut OffsetsDict, key: u16, input: &[u8], pos: usize, best: &mut Candidate) {
    for p in dict.ring(key).iter_newest() {
        let offset = pos - p;
        let run = common_run(&input[pos..], &input[p..]);
        let gain = gains(run, offset);
        if gain > best.gain {
            *best = Candidate { run, offset, gain };
        }
    }
    dict.insert(key, pos);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

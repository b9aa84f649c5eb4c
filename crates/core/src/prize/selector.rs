//! Weighted prize draw over a wheel's segments.
//!
//! Randomness is caller-supplied: a fixed `random_value` reproduces a draw
//! exactly, and servers feed their own RNG (a client-supplied value would
//! let visitors pick their prize).

use rand::Rng;
use tracing::warn;

use crate::model::Segment;

/// Which candidate pool the winner was drawn from. Anything other than
/// `Available` means the wheel is misconfigured or sold out and the draw
/// fell through to a documented fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidatePool {
    /// Enabled segments with stock remaining.
    Available,
    /// Every enabled segment is out of stock; inventory was ignored so the
    /// spin still resolves.
    InventoryExhausted,
    /// Every segment is explicitly disabled; the first segment was returned
    /// as a last resort.
    AllDisabled,
}

/// A resolved spin: the winning segment, its index in the original segment
/// list (the index the rotation math needs), and the pool it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draw<'a> {
    pub segment: &'a Segment,
    pub segment_index: usize,
    pub pool: CandidatePool,
}

/// Pick the winning segment for `random_value` in `[0, 1)`.
///
/// Returns `None` only for an empty segment list. Disabled segments and
/// segments with non-positive weight never enter a draw; exhausted
/// inventory is ignored as a last resort rather than leaving the visitor
/// with a stuck spin (see [`CandidatePool`]).
pub fn select_winning_segment(segments: &[Segment], random_value: f64) -> Option<Draw<'_>> {
    if segments.is_empty() {
        return None;
    }

    let available: Vec<(usize, &Segment)> = segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| segment.weight > 0.0 && segment.is_available())
        .collect();
    if !available.is_empty() {
        let (segment_index, segment) = weighted_pick(&available, random_value);
        return Some(Draw {
            segment,
            segment_index,
            pool: CandidatePool::Available,
        });
    }

    let enabled: Vec<(usize, &Segment)> = segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| segment.weight > 0.0 && segment.is_enabled())
        .collect();
    if !enabled.is_empty() {
        warn!("all enabled segments out of inventory; drawing without stock check");
        let (segment_index, segment) = weighted_pick(&enabled, random_value);
        return Some(Draw {
            segment,
            segment_index,
            pool: CandidatePool::InventoryExhausted,
        });
    }

    // Mirrors the upstream behavior of never failing a spin outright; the
    // pool flag lets operators detect wheels configured this badly.
    warn!("all segments disabled; falling back to the first segment");
    Some(Draw {
        segment: &segments[0],
        segment_index: 0,
        pool: CandidatePool::AllDisabled,
    })
}

/// Same draw with the random value taken from `rng`.
pub fn draw_with_rng<'a, R: Rng + ?Sized>(
    segments: &'a [Segment],
    rng: &mut R,
) -> Option<Draw<'a>> {
    select_winning_segment(segments, rng.gen::<f64>())
}

/// Standard weighted-bag walk: scale `random_value` by the total weight and
/// subtract candidate weights in order until the threshold is spent. The
/// trailing return covers the float edge as `random_value` approaches 1.
fn weighted_pick<'a>(candidates: &[(usize, &'a Segment)], random_value: f64) -> (usize, &'a Segment) {
    if candidates.len() == 1 {
        return candidates[0];
    }
    let total_weight: f64 = candidates.iter().map(|(_, segment)| segment.weight).sum();
    let mut threshold = random_value * total_weight;
    for &(index, segment) in candidates {
        threshold -= segment.weight;
        if threshold <= 0.0 {
            return (index, segment);
        }
    }
    candidates[candidates.len() - 1]
}

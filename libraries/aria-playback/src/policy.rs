//! Auto-advance policy
//!
//! Decides what happens when the device reports a finished track. The
//! decision is a pure function of the advance mode and the queue state as it
//! stands when the event is processed, so it can be tested without hardware
//! and without a session. Randomness is injected through the `rng` argument.

use crate::types::AdvanceMode;
use rand::Rng;

/// What the session should do after a track finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceDecision {
    /// Seek to zero and resume the already-bound resource; no reload
    Replay,

    /// Move the cursor to the next track and load it
    Advance,

    /// Move the cursor to this index and load it
    JumpTo(usize),

    /// Clear playing intent, reset position, leave the cursor in place
    Stop,
}

/// Decide the follow-up action for a finished track.
///
/// - `LoopSingle` replays the same resource regardless of queue state.
/// - `Shuffle` picks a uniformly random index in `[0, queue_len)`; the
///   current track is not excluded from re-selection.
/// - `Sequential` advances while a next track exists, otherwise stops
///   without wrapping to the start.
pub fn decide<R: Rng + ?Sized>(
    mode: AdvanceMode,
    queue_len: usize,
    cursor: Option<usize>,
    rng: &mut R,
) -> AdvanceDecision {
    match mode {
        AdvanceMode::LoopSingle => AdvanceDecision::Replay,
        AdvanceMode::Shuffle => {
            if queue_len == 0 {
                AdvanceDecision::Stop
            } else {
                AdvanceDecision::JumpTo(rng.gen_range(0..queue_len))
            }
        }
        AdvanceMode::Sequential => match cursor {
            Some(cursor) if cursor + 1 < queue_len => AdvanceDecision::Advance,
            _ => AdvanceDecision::Stop,
        },
    }
}

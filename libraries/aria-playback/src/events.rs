//! Playback events
//!
//! Event-based communication for UI synchronization. The session appends
//! events as commands and device notifications are processed; the host
//! drains them with `PlayerSession::take_events` after each batch and
//! re-renders from the derived state.

use crate::types::AdvanceMode;
use aria_core::types::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playing intent changed
    StateChanged {
        /// Whether the session now intends to be audible
        playing: bool,
    },

    /// The current track changed (None when playback stopped entirely)
    TrackChanged {
        /// Id of the new current track
        track_id: Option<TrackId>,
    },

    /// Queue contents or cursor changed
    QueueChanged {
        /// New queue length
        length: usize,
        /// New cursor position
        cursor: Option<usize>,
    },

    /// Playback position or known duration changed
    PositionChanged {
        /// Current position in milliseconds
        position_ms: u64,
        /// Track duration in milliseconds, once known
        duration_ms: Option<u64>,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// New volume (0.0 - 1.0)
        volume: f32,
        /// Whether output is muted
        muted: bool,
    },

    /// The auto-advance mode was toggled
    AdvanceModeChanged {
        /// New advance mode
        mode: AdvanceMode,
    },

    /// A load or hardware error stopped playback
    Error {
        /// Human-readable error message
        message: String,
    },
}

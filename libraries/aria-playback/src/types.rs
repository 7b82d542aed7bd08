//! Core types for the playback engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Auto-advance mode
///
/// Governs what happens when the device reports that a track finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvanceMode {
    /// Play the queue in order, stop after the last track
    #[default]
    Sequential,

    /// Replay the current track indefinitely
    LoopSingle,

    /// Pick a random queue index after each track
    Shuffle,
}

impl AdvanceMode {
    /// Next mode in the user-facing toggle cycle.
    ///
    /// Sequential -> LoopSingle -> Shuffle -> Sequential, one direction only.
    pub fn cycle(self) -> Self {
        match self {
            AdvanceMode::Sequential => AdvanceMode::LoopSingle,
            AdvanceMode::LoopSingle => AdvanceMode::Shuffle,
            AdvanceMode::Shuffle => AdvanceMode::Sequential,
        }
    }
}

/// Configuration for a playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0.0 - 1.0, default: 0.75)
    pub volume: f32,

    /// Initial advance mode (default: Sequential)
    pub advance_mode: AdvanceMode,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 0.75,
            advance_mode: AdvanceMode::Sequential,
        }
    }
}

/// Live transport state mirrored from the output device.
///
/// The session republishes this state to UI collaborators; the device
/// controller is the only writer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportState {
    /// Current playback position
    pub position: Duration,

    /// Track duration, once the device has reported it
    pub duration: Option<Duration>,

    /// Volume (0.0 - 1.0)
    pub volume: f32,

    /// Whether output is muted; always true when volume is 0
    pub muted: bool,

    /// Whether a track payload is still being fetched or buffered
    pub buffering: bool,
}

impl TransportState {
    /// Transport state for a freshly constructed controller.
    pub fn new(volume: f32) -> Self {
        Self {
            position: Duration::ZERO,
            duration: None,
            volume,
            muted: volume == 0.0,
            buffering: false,
        }
    }
}

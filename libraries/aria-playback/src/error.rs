//! Error types for the playback engine

use crate::device::DeviceError;
use crate::loader::LoadError;
use thiserror::Error;

/// Playback errors
///
/// Invalid queue operations (next at end of queue, jump out of range) are
/// deliberately NOT errors; they are silent no-ops at the queue level.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Fetching the track payload failed
    #[error("resource load failed: {0}")]
    Load(#[from] LoadError),

    /// The audio device reported a failure
    #[error("audio device error: {0}")]
    Device(#[from] DeviceError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

//! Playable resource loading
//!
//! A [`TrackLoader`] turns a track id into the raw audio payload, usually by
//! fetching `GET /songs/{id}/play` from the backend. Loads are
//! supersede-on-arrival: every load issued by the controller carries a
//! generation ticket, and a completion whose generation no longer matches
//! the controller's latest is discarded, success or failure alike. The
//! bound resource therefore always reflects the last requested track, never
//! an earlier one that resolved late.

use aria_core::types::TrackId;
use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a [`TrackLoader`].
///
/// All loader failures are values returned to the session; they are never
/// thrown into hardware callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The payload could not be retrieved
    #[error("network error: {0}")]
    Network(String),

    /// The backend does not know this track
    #[error("track {0} not found")]
    NotFound(TrackId),

    /// The backend returned a format the device cannot play
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
}

/// Asynchronous source of track payloads.
#[async_trait]
pub trait TrackLoader: Send + Sync {
    /// Fetch the playable bytes for a track.
    async fn fetch(&self, track_id: TrackId) -> Result<Vec<u8>, LoadError>;
}

/// Ticket for an in-flight load.
///
/// Produced by `OutputController::begin_load`; the host performs the fetch
/// and hands the result back together with this ticket so stale completions
/// can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    /// Load generation; only the most recent generation may bind.
    pub generation: u64,

    /// Track whose payload is being fetched.
    pub track_id: TrackId,
}

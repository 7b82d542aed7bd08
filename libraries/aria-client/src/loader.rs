//! HTTP-backed track loader.

use crate::client::ApiClient;
use crate::error::ClientError;
use aria_core::types::TrackId;
use aria_playback::{LoadError, TrackLoader};
use async_trait::async_trait;
use std::sync::Arc;

/// [`TrackLoader`] that fetches song payloads from the Aria backend.
///
/// Maps the transport-level error taxonomy onto the loader's: missing
/// tracks and unplayable formats keep their identity, everything else is a
/// network failure. Errors are returned as values; nothing is thrown into
/// device callbacks.
pub struct HttpTrackLoader {
    client: Arc<ApiClient>,
}

impl HttpTrackLoader {
    /// Wrap a shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TrackLoader for HttpTrackLoader {
    async fn fetch(&self, track_id: TrackId) -> Result<Vec<u8>, LoadError> {
        self.client
            .fetch_song(track_id)
            .await
            .map_err(|err| match err {
                ClientError::NotFound(_) => LoadError::NotFound(track_id),
                ClientError::UnsupportedMedia(message) => LoadError::UnsupportedFormat(message),
                other => LoadError::Network(other.to_string()),
            })
    }
}

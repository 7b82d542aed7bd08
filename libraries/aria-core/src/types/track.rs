//! Track domain type

use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A song as listed by the backend catalog.
///
/// Immutable once fetched; the play queue references tracks by value but
/// never rewrites their metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: Option<String>,

    /// Album name
    pub album: Option<String>,

    /// Track duration in seconds, when the backend knows it
    pub duration: Option<f64>,

    /// Track number within the album
    pub track_number: Option<u32>,

    /// Embedded artwork bytes
    pub artwork: Option<Vec<u8>>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(id: TrackId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: None,
            album: None,
            duration: None,
            track_number: None,
            artwork: None,
        }
    }

    /// Get the track duration as a [`Duration`]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(Duration::from_secs_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_track() {
        let track = Track::new(TrackId::new(1), "Intro");
        assert_eq!(track.title, "Intro");
        assert!(track.artist.is_none());
        assert!(track.duration().is_none());
    }

    #[test]
    fn duration_conversion() {
        let mut track = Track::new(TrackId::new(1), "Intro");
        track.duration = Some(182.5);
        assert_eq!(track.duration().unwrap(), Duration::from_secs_f64(182.5));

        // Garbage durations from the backend are treated as unknown
        track.duration = Some(f64::NAN);
        assert!(track.duration().is_none());
        track.duration = Some(-3.0);
        assert!(track.duration().is_none());
    }
}

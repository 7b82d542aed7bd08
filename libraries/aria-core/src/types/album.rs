//! Album domain types

use crate::types::Track;
use serde::{Deserialize, Serialize};

/// An album as listed by `GET /albums`.
///
/// The backend keys albums by name rather than by a numeric id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Album name (the backend's key for album detail lookups)
    pub album_name: String,

    /// Album artist
    pub album_artist: Option<String>,

    /// Release year
    pub year: Option<u32>,

    /// Cover artwork bytes
    pub artwork: Option<Vec<u8>>,
}

/// Album detail as returned by `GET /albums/{name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumDetail {
    /// Songs on the album, in the order the backend returned them
    pub songs: Vec<Track>,
}

impl AlbumDetail {
    /// Songs sorted by track number (missing numbers sort first).
    ///
    /// The backend does not guarantee ordering; playback queues are built
    /// from this sorted view.
    pub fn songs_in_track_order(&self) -> Vec<Track> {
        let mut songs = self.songs.clone();
        songs.sort_by_key(|s| s.track_number.unwrap_or(0));
        songs
    }
}

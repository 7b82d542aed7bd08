//! Aria Player Core
//!
//! Shared domain types for the Aria music player client.
//!
//! This crate defines the records exchanged with the backend catalog
//! (tracks, albums, libraries, users) and the user preference model.
//! It carries no I/O and no playback state; the playback engine lives in
//! `aria-playback` and the HTTP client in `aria-client`.
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::{Track, TrackId};
//!
//! let track = Track::new(TrackId::new(42), "Holocene");
//! assert_eq!(track.id, TrackId::new(42));
//! assert!(track.artist.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

// Re-export commonly used types
pub use types::{
    Album, AlbumDetail, Library, LibraryId, Track, TrackId, User, UserId, UserPreferences,
};

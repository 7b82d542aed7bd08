//! Domain types shared across the Aria workspace

mod album;
mod ids;
mod library;
mod preferences;
mod track;
mod user;

pub use album::{Album, AlbumDetail};
pub use ids::{LibraryId, TrackId, UserId};
pub use library::Library;
pub use preferences::UserPreferences;
pub use track::Track;
pub use user::User;

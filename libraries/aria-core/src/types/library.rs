//! Library domain type

use crate::types::{LibraryId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A music library registered with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    /// Unique library identifier
    pub id: LibraryId,

    /// Display name
    pub name: String,

    /// Filesystem path on the server
    pub path: String,

    /// Owning user
    pub user_id: UserId,

    /// Whether other users may browse this library
    pub is_public: bool,

    /// When the library was created
    pub created: DateTime<Utc>,

    /// When the library was last updated
    pub updated: DateTime<Utc>,
}

//! User domain type

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// An authenticated user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name
    pub username: String,

    /// Contact email
    pub email: Option<String>,

    /// Display name
    pub nickname: Option<String>,
}

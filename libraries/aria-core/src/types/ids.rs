//! ID types for Aria entities
//!
//! The backend addresses every entity by a numeric row id; these newtypes
//! keep the different id spaces from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(i64);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner numeric id
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Library identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryId(i64);

impl LibraryId {
    /// Create a new library ID
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner numeric id
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for LibraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a new user ID
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner numeric id
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

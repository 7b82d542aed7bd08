//! User preference record
//!
//! Preferences are persisted server-side via `PUT /users/{id}/update_pref`.
//! The record is a plain struct with named optional fields; partial updates
//! go through [`UserPreferences::merge`] so that only the fields present in
//! the patch are overwritten.

use serde::{Deserialize, Serialize};

/// Server-persisted user preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Playback volume in `[0.0, 1.0]`
    pub volume: Option<f64>,

    /// Transcoding profile name (e.g. "opus-128")
    pub transcoding: Option<String>,

    /// UI theme name
    pub theme: Option<String>,

    /// Whether desktop notifications are enabled
    pub notifications: Option<bool>,
}

impl UserPreferences {
    /// Merge a partial update into this record.
    ///
    /// Fields absent from `patch` keep their current value.
    pub fn merge(&mut self, patch: &UserPreferences) {
        if let Some(volume) = patch.volume {
            self.volume = Some(volume);
        }
        if let Some(ref transcoding) = patch.transcoding {
            self.transcoding = Some(transcoding.clone());
        }
        if let Some(ref theme) = patch.theme {
            self.theme = Some(theme.clone());
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = Some(notifications);
        }
    }

    /// A patch that only sets the volume.
    pub fn volume_patch(volume: f64) -> Self {
        Self {
            volume: Some(volume),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_present_fields_only() {
        let mut prefs = UserPreferences {
            volume: Some(0.5),
            transcoding: Some("opus-128".to_string()),
            theme: Some("dark".to_string()),
            notifications: Some(true),
        };

        prefs.merge(&UserPreferences::volume_patch(0.8));

        assert_eq!(prefs.volume, Some(0.8));
        assert_eq!(prefs.transcoding.as_deref(), Some("opus-128"));
        assert_eq!(prefs.theme.as_deref(), Some("dark"));
        assert_eq!(prefs.notifications, Some(true));
    }

    #[test]
    fn merge_into_empty_record() {
        let mut prefs = UserPreferences::default();
        prefs.merge(&UserPreferences {
            theme: Some("light".to_string()),
            ..UserPreferences::default()
        });

        assert_eq!(prefs.theme.as_deref(), Some("light"));
        assert!(prefs.volume.is_none());
    }
}

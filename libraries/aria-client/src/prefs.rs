//! Fire-and-forget preference persistence.
//!
//! Volume (and other preference) changes are pushed to the backend as a
//! side effect of the corresponding player commands. Persistence failures
//! are logged and never surface into playback state; the backend being down
//! must not affect what the user hears.

use crate::client::ApiClient;
use aria_core::types::{UserId, UserPreferences};
use std::sync::Arc;
use tracing::{debug, warn};

/// Keeps a local copy of the user's preferences and syncs patches upstream.
pub struct PreferenceSync {
    client: Arc<ApiClient>,
    cached: UserPreferences,
}

impl PreferenceSync {
    /// Create a sync around a shared API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            cached: UserPreferences::default(),
        }
    }

    /// Seed the local copy, e.g. from the login response.
    pub fn load(&mut self, preferences: UserPreferences) {
        self.cached = preferences;
    }

    /// The current local copy.
    pub fn preferences(&self) -> &UserPreferences {
        &self.cached
    }

    /// Merge a patch locally and push the merged record upstream.
    ///
    /// The PUT runs on a spawned task; a failure is logged once and
    /// otherwise ignored.
    pub fn queue_update(&mut self, user_id: UserId, patch: &UserPreferences) {
        self.cached.merge(patch);

        let client = self.client.clone();
        let preferences = self.cached.clone();
        debug!(%user_id, "queueing preference update");

        tokio::spawn(async move {
            if let Err(err) = client.update_preferences(user_id, &preferences).await {
                warn!(%user_id, error = %err, "preference sync failed");
            }
        });
    }

    /// Convenience patch for the volume slider.
    pub fn queue_volume(&mut self, user_id: UserId, volume: f64) {
        self.queue_update(user_id, &UserPreferences::volume_patch(volume));
    }
}

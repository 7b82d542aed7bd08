//! Remote-backed player
//!
//! Glue between the synchronous playback session and the async world: load
//! requests queued by the session are dispatched onto spawned fetch tasks,
//! and completions are funnelled back through a channel onto the session's
//! single logical thread. The generation tickets inside the session make
//! overlapping fetches safe; whichever resolves last for a superseded
//! request is discarded.

use crate::prefs::PreferenceSync;
use aria_core::types::{Track, UserId};
use aria_playback::{
    AdvanceMode, AudioDevice, DeviceEvent, LoadError, LoadRequest, PlaybackConfig, PlaybackEvent,
    PlayerSession, TrackLoader,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

struct LoadCompletion {
    request: LoadRequest,
    result: Result<Vec<u8>, LoadError>,
}

/// A playback session wired to a remote track loader.
///
/// Owns the session exclusively; UI collaborators issue commands through
/// this type and re-render from the derived state after draining events.
pub struct RemotePlayer<D: AudioDevice> {
    session: PlayerSession<D>,
    loader: Arc<dyn TrackLoader>,
    prefs: Option<PreferenceSync>,
    user: Option<UserId>,

    completions_tx: mpsc::UnboundedSender<LoadCompletion>,
    completions_rx: mpsc::UnboundedReceiver<LoadCompletion>,
}

impl<D: AudioDevice> RemotePlayer<D> {
    /// Build a player around the one output device.
    ///
    /// `prefs` is optional: without it volume changes stay local.
    pub fn new(
        device: D,
        loader: Arc<dyn TrackLoader>,
        prefs: Option<PreferenceSync>,
        config: PlaybackConfig,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            session: PlayerSession::new(device, config),
            loader,
            prefs,
            user: None,
            completions_tx,
            completions_rx,
        }
    }

    // ===== Commands =====

    /// Replace the queue and start playing from `start_index`.
    pub fn play_queue(&mut self, tracks: Vec<Track>, start_index: usize) {
        self.session.play_queue(tracks, start_index);
        self.dispatch_loads();
    }

    /// Prepend a track and play it immediately.
    pub fn play_track_now(&mut self, track: Track) {
        self.session.play_track_now(track);
        self.dispatch_loads();
    }

    /// Toggle between play and pause.
    pub fn toggle_play_pause(&mut self) {
        self.session.toggle_play_pause();
    }

    /// Seek within the current track.
    pub fn seek(&mut self, position: Duration) {
        self.session.seek(position);
    }

    /// Set the volume and queue a preference sync for it.
    pub fn set_volume(&mut self, volume: f32) {
        self.session.set_volume(volume);

        if let (Some(prefs), Some(user)) = (self.prefs.as_mut(), self.user) {
            prefs.queue_volume(user, f64::from(self.session.volume()));
        }
    }

    /// Skip to the next queued track.
    pub fn skip_next(&mut self) {
        self.session.skip_next();
        self.dispatch_loads();
    }

    /// Skip to the previous queued track.
    pub fn skip_previous(&mut self) {
        self.session.skip_previous();
        self.dispatch_loads();
    }

    /// Jump to an arbitrary queue index.
    pub fn jump_to_queue_index(&mut self, index: usize) {
        self.session.jump_to_queue_index(index);
        self.dispatch_loads();
    }

    /// Empty the queue and stop playback.
    pub fn clear_queue(&mut self) {
        self.session.clear_queue();
    }

    /// Toggle the auto-advance mode.
    pub fn cycle_advance_mode(&mut self) -> AdvanceMode {
        self.session.cycle_advance_mode()
    }

    // ===== Event plumbing =====

    /// Process one hardware notification; auto-advance may queue a load.
    pub fn handle_device_event(&mut self, event: DeviceEvent) {
        self.session.handle_device_event(event);
        self.dispatch_loads();
    }

    /// Wait for the next fetch completion and apply it.
    ///
    /// Returns false when the player has been dropped mid-wait (channel
    /// closed), which cannot happen while `self` is alive.
    pub async fn pump(&mut self) -> bool {
        match self.completions_rx.recv().await {
            Some(completion) => {
                self.session
                    .finish_load(completion.request, completion.result);
                self.dispatch_loads();
                true
            }
            None => false,
        }
    }

    /// Apply any completions that have already arrived, without waiting.
    pub fn poll_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.session
                .finish_load(completion.request, completion.result);
            self.dispatch_loads();
        }
    }

    // ===== Auth lifecycle =====

    /// Track the authenticated-user context.
    ///
    /// Losing the user is the one global-teardown trigger: the session is
    /// reset to its initial state and the loaded resource released.
    pub fn set_user(&mut self, user: Option<UserId>) {
        match user {
            Some(id) => {
                self.user = Some(id);
            }
            None => {
                if self.user.take().is_some() {
                    info!("user context gone, tearing down playback");
                }
                self.session.reset();
            }
        }
    }

    // ===== State =====

    /// Read access to the underlying session state.
    pub fn session(&self) -> &PlayerSession<D> {
        &self.session
    }

    /// Drain pending UI events.
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        self.session.take_events()
    }

    fn dispatch_loads(&mut self) {
        while let Some(request) = self.session.take_load_request() {
            debug!(track_id = %request.track_id, generation = request.generation, "dispatching fetch");
            let loader = self.loader.clone();
            let tx = self.completions_tx.clone();

            tokio::spawn(async move {
                let result = loader.fetch(request.track_id).await;
                // The receiver only disappears when the player is dropped
                let _ = tx.send(LoadCompletion { request, result });
            });
        }
    }
}

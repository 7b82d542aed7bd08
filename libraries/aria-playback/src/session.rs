//! Playback session facade
//!
//! The single integration point for UI collaborators. The session owns the
//! play queue and the output controller, derives all UI-facing read state,
//! and exposes the command surface. It runs on one logical thread: commands,
//! load completions and device events are processed one at a time, and the
//! auto-advance policy always sees the queue as it stands at processing
//! time.
//!
//! Loading is asynchronous only at the fetch: a command that changes the
//! current track queues a [`LoadRequest`]; the host performs the fetch with
//! a [`crate::loader::TrackLoader`] and hands the result back through
//! [`PlayerSession::finish_load`]. Results for superseded requests are
//! discarded by the controller.

use crate::controller::{LoadOutcome, OutputController};
use crate::device::{AudioDevice, DeviceEvent};
use crate::error::PlaybackError;
use crate::events::PlaybackEvent;
use crate::loader::{LoadError, LoadRequest};
use crate::policy::{self, AdvanceDecision};
use crate::queue::PlayQueue;
use crate::types::{AdvanceMode, PlaybackConfig, TransportState};
use aria_core::types::Track;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Central playback session.
///
/// Composes the queue, the device controller and the advance policy into
/// the command surface the rest of the application calls.
pub struct PlayerSession<D: AudioDevice> {
    config: PlaybackConfig,
    queue: PlayQueue,
    controller: OutputController<D>,
    advance_mode: AdvanceMode,

    // Intent, not hardware readiness: true while a track is still loading
    // means "play as soon as ready".
    playing: bool,

    pending_load: Option<LoadRequest>,
    pending_events: Vec<PlaybackEvent>,
}

impl<D: AudioDevice> PlayerSession<D> {
    /// Create a session around the one output device.
    pub fn new(device: D, config: PlaybackConfig) -> Self {
        let controller = OutputController::new(device, config.volume);
        Self {
            advance_mode: config.advance_mode,
            config,
            queue: PlayQueue::new(),
            controller,
            playing: false,
            pending_load: None,
            pending_events: Vec::new(),
        }
    }

    // ===== Commands =====

    /// Replace the queue with `tracks` and start playing from `start_index`.
    ///
    /// An empty `tracks` stops playback and leaves the queue empty.
    pub fn play_queue(&mut self, tracks: Vec<Track>, start_index: usize) {
        self.queue.replace(tracks, start_index);
        self.emit_queue_changed();

        if self.queue.current().is_some() {
            self.request_load_of_current();
        } else {
            self.stop_and_release();
        }
    }

    /// Insert `track` at the front of the queue and play it now.
    ///
    /// Existing queue entries are preserved.
    pub fn play_track_now(&mut self, track: Track) {
        self.queue.prepend_and_select(track);
        self.emit_queue_changed();
        self.request_load_of_current();
    }

    /// Resume playback of the current track.
    ///
    /// No-op when nothing is selected. While the track is still loading this
    /// only records the intent; the controller starts the device once the
    /// payload binds. After a failed load nothing is bound, so playing again
    /// triggers a fresh load attempt.
    pub fn play(&mut self) {
        let Some(current_id) = self.queue.current().map(|t| t.id) else {
            return;
        };

        // The bound resource can fall out of sync with the cursor when a
        // load fails; repair by fetching the current track again.
        if !self.controller.transport().buffering
            && self.controller.loaded_track() != Some(current_id)
        {
            self.request_load_of_current();
            return;
        }

        self.set_playing(true);
        if !self.controller.transport().buffering {
            self.resume_device();
        }
    }

    /// Pause playback. Idempotent; never triggers auto-advance.
    pub fn pause(&mut self) {
        self.set_playing(false);
        self.controller.pause();
    }

    /// Toggle between play and pause.
    pub fn toggle_play_pause(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Seek within the current track.
    ///
    /// Clamped to the known duration; never triggers auto-advance.
    pub fn seek(&mut self, position: Duration) {
        self.controller.seek(position);
        self.emit_position();
    }

    /// Set volume (clamped to `[0, 1]`; zero forces mute).
    pub fn set_volume(&mut self, volume: f32) {
        self.controller.set_volume(volume);
        let transport = self.controller.transport();
        let event = PlaybackEvent::VolumeChanged {
            volume: transport.volume,
            muted: transport.muted,
        };
        self.emit(event);
    }

    /// Skip to the next queued track. No-op at the end of the queue.
    pub fn skip_next(&mut self) {
        if self.queue.advance() {
            self.request_load_of_current();
            self.emit_queue_changed();
        }
    }

    /// Skip to the previous queued track. No-op at the start of the queue.
    pub fn skip_previous(&mut self) {
        if self.queue.retreat() {
            self.request_load_of_current();
            self.emit_queue_changed();
        }
    }

    /// Jump to an arbitrary queue index. No-op when out of range.
    pub fn jump_to_queue_index(&mut self, index: usize) {
        if self.queue.select(index) {
            self.request_load_of_current();
            self.emit_queue_changed();
        }
    }

    /// Empty the queue and stop playback.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.emit_queue_changed();
        self.stop_and_release();
    }

    /// Advance-mode toggle: Sequential -> LoopSingle -> Shuffle -> ...
    pub fn cycle_advance_mode(&mut self) -> AdvanceMode {
        self.advance_mode = self.advance_mode.cycle();
        let mode = self.advance_mode;
        self.emit(PlaybackEvent::AdvanceModeChanged { mode });
        mode
    }

    // ===== Load seam =====

    /// Take the queued load request, if any.
    ///
    /// The host fetches the payload via a `TrackLoader` and reports back
    /// through [`Self::finish_load`]. A newer command may replace a request
    /// that was never taken; requests already in flight are superseded by
    /// generation instead.
    pub fn take_load_request(&mut self) -> Option<LoadRequest> {
        self.pending_load.take()
    }

    /// Deliver the result of a fetch started for `request`.
    pub fn finish_load(&mut self, request: LoadRequest, result: Result<Vec<u8>, LoadError>) {
        match self.controller.finish_load(&request, result, self.playing) {
            LoadOutcome::Completed => self.emit_position(),
            LoadOutcome::Stale => {}
            LoadOutcome::Failed(err) => self.fail(err),
        }
    }

    // ===== Device events =====

    /// Process one hardware notification.
    pub fn handle_device_event(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::Finished => self.handle_track_finished(),
            DeviceEvent::Error(err) => self.fail(err.into()),
            other => {
                self.controller.observe(&other);
                if matches!(
                    other,
                    DeviceEvent::Progress(_) | DeviceEvent::DurationKnown(_)
                ) {
                    self.emit_position();
                }
            }
        }
    }

    /// Runs exactly once per genuine hardware finish; user-initiated pause
    /// and seek never reach this path.
    fn handle_track_finished(&mut self) {
        let decision = policy::decide(
            self.advance_mode,
            self.queue.len(),
            self.queue.cursor(),
            &mut rand::thread_rng(),
        );
        debug!(mode = ?self.advance_mode, ?decision, "track finished");

        match decision {
            AdvanceDecision::Replay => {
                self.controller.seek(Duration::ZERO);
                self.resume_device();
            }
            AdvanceDecision::Advance => {
                if self.queue.advance() {
                    self.request_load_of_current();
                    self.emit_queue_changed();
                }
            }
            AdvanceDecision::JumpTo(index) => {
                if self.queue.select(index) {
                    self.request_load_of_current();
                    self.emit_queue_changed();
                }
            }
            AdvanceDecision::Stop => {
                // End of queue: intent off, position rewound, cursor stays
                // on the last track.
                self.set_playing(false);
                self.controller.pause();
                self.controller.seek(Duration::ZERO);
                self.emit_position();
            }
        }
    }

    // ===== Lifecycle =====

    /// Tear the session down to its configured initial state.
    ///
    /// Called when the authenticated-user context goes away: stops the
    /// device, releases the loaded resource, empties the queue and restores
    /// the configured volume and advance mode.
    pub fn reset(&mut self) {
        info!("resetting playback session");
        self.stop_and_release();
        self.queue.clear();
        self.advance_mode = self.config.advance_mode;
        self.controller.set_volume(self.config.volume);
        self.emit_queue_changed();

        let transport = self.controller.transport();
        let event = PlaybackEvent::VolumeChanged {
            volume: transport.volume,
            muted: transport.muted,
        };
        self.emit(event);
    }

    // ===== Derived state =====

    /// The track under the queue cursor.
    pub fn current_track(&self) -> Option<&Track> {
        self.queue.current()
    }

    /// Playing intent (true while loading means "play once ready").
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether a track payload is still being fetched or buffered.
    pub fn is_loading(&self) -> bool {
        self.controller.transport().buffering
    }

    /// Current playback position.
    pub fn position(&self) -> Duration {
        self.controller.transport().position
    }

    /// Duration of the current track, once the device has reported it.
    pub fn duration(&self) -> Option<Duration> {
        self.controller.transport().duration
    }

    /// Current volume (0.0 - 1.0).
    pub fn volume(&self) -> f32 {
        self.controller.transport().volume
    }

    /// Whether output is muted (always true at volume 0).
    pub fn is_muted(&self) -> bool {
        self.controller.transport().muted
    }

    /// Live transport state.
    pub fn transport(&self) -> &TransportState {
        self.controller.transport()
    }

    /// All queued tracks in play order.
    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Cursor into the queue.
    pub fn queue_index(&self) -> Option<usize> {
        self.queue.cursor()
    }

    /// Whether a next track exists in the queue.
    pub fn has_next(&self) -> bool {
        self.queue.has_next()
    }

    /// Whether a previous track exists in the queue.
    pub fn has_previous(&self) -> bool {
        self.queue.has_previous()
    }

    /// Current auto-advance mode.
    pub fn advance_mode(&self) -> AdvanceMode {
        self.advance_mode
    }

    /// Lifetime count of released resources (observability for hosts).
    pub fn resources_released(&self) -> usize {
        self.controller.resources_released()
    }

    /// Drain the pending UI events.
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internals =====

    fn request_load_of_current(&mut self) {
        let Some(track_id) = self.queue.current().map(|t| t.id) else {
            return;
        };

        let request = self.controller.begin_load(track_id);
        self.pending_load = Some(request);
        self.set_playing(true);
        self.emit(PlaybackEvent::TrackChanged {
            track_id: Some(track_id),
        });
    }

    fn resume_device(&mut self) {
        if let Err(err) = self.controller.resume() {
            self.fail(err);
        }
    }

    fn stop_and_release(&mut self) {
        self.set_playing(false);
        self.pending_load = None;
        self.controller.shutdown();
        self.emit(PlaybackEvent::TrackChanged { track_id: None });
    }

    /// Load or hardware failure: stop once, report once, keep the queue
    /// intact so the user can retry with a fresh play command.
    fn fail(&mut self, err: PlaybackError) {
        warn!(error = %err, "playback stopped on error");
        self.set_playing(false);
        self.controller.pause();
        self.emit(PlaybackEvent::Error {
            message: err.to_string(),
        });
    }

    fn set_playing(&mut self, playing: bool) {
        if self.playing != playing {
            self.playing = playing;
            self.emit(PlaybackEvent::StateChanged { playing });
        }
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    fn emit_queue_changed(&mut self) {
        let event = PlaybackEvent::QueueChanged {
            length: self.queue.len(),
            cursor: self.queue.cursor(),
        };
        self.emit(event);
    }

    fn emit_position(&mut self) {
        let transport = self.controller.transport();
        let event = PlaybackEvent::PositionChanged {
            position_ms: transport.position.as_millis() as u64,
            duration_ms: transport.duration.map(|d| d.as_millis() as u64),
        };
        self.emit(event);
    }
}

//! Output device controller
//!
//! Owns the one audio output unit, the live [`LoadedResource`], and the
//! transport state the session republishes. All device mutation funnels
//! through this type; UI collaborators never reach the device directly.

use crate::device::{AudioDevice, DeviceEvent};
use crate::error::PlaybackError;
use crate::loader::{LoadError, LoadRequest};
use crate::resource::{LoadedResource, ResourceSlot};
use crate::types::TransportState;
use aria_core::types::TrackId;
use std::time::Duration;
use tracing::{debug, warn};

/// Result of delivering a load completion to the controller.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The payload was bound and the transport reset
    Completed,

    /// A newer load superseded this one; the result was discarded
    Stale,

    /// The load failed; playing intent must be cleared by the caller
    Failed(PlaybackError),
}

/// Controller for the single hardware output unit.
pub struct OutputController<D: AudioDevice> {
    device: D,
    slot: ResourceSlot,
    transport: TransportState,

    // Monotonic ticket for supersede-on-arrival; only a completion carrying
    // the latest generation may bind.
    generation: u64,
}

impl<D: AudioDevice> OutputController<D> {
    /// Wrap a device, pushing the initial volume/mute state down to it.
    pub fn new(mut device: D, volume: f32) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        device.set_volume(volume);
        device.set_muted(volume == 0.0);

        Self {
            device,
            slot: ResourceSlot::new(),
            transport: TransportState::new(volume),
            generation: 0,
        }
    }

    /// Start a new load, superseding any load still in flight.
    pub fn begin_load(&mut self, track_id: TrackId) -> LoadRequest {
        self.generation += 1;
        self.transport.buffering = true;

        debug!(%track_id, generation = self.generation, "load requested");

        LoadRequest {
            generation: self.generation,
            track_id,
        }
    }

    /// Deliver a load completion.
    ///
    /// Completions for superseded generations are discarded without touching
    /// the bound resource or the transport. On success the previous resource
    /// is released, the new one bound, position reset to zero and duration
    /// reset to unknown; playback resumes when `play_intent` is set.
    pub fn finish_load(
        &mut self,
        request: &LoadRequest,
        result: Result<Vec<u8>, LoadError>,
        play_intent: bool,
    ) -> LoadOutcome {
        if request.generation != self.generation {
            debug!(
                track_id = %request.track_id,
                generation = request.generation,
                current = self.generation,
                "discarding superseded load result"
            );
            return LoadOutcome::Stale;
        }

        self.transport.buffering = false;

        let payload = match result {
            Ok(payload) => payload,
            Err(err) => {
                warn!(track_id = %request.track_id, error = %err, "track load failed");
                return LoadOutcome::Failed(err.into());
            }
        };

        // Release before bind: never more than one outstanding payload.
        self.device.unload();
        self.slot
            .bind(LoadedResource::new(request.track_id, payload));
        self.transport.position = Duration::ZERO;
        self.transport.duration = None;

        let resource = self.slot.current().expect("resource bound above");
        if let Err(err) = self.device.load(resource) {
            warn!(track_id = %request.track_id, error = %err, "device rejected payload");
            self.slot.release();
            return LoadOutcome::Failed(err.into());
        }

        if play_intent {
            if let Err(err) = self.device.play() {
                warn!(track_id = %request.track_id, error = %err, "device failed to start");
                return LoadOutcome::Failed(err.into());
            }
        }

        debug!(track_id = %request.track_id, bytes = self.slot.current().map_or(0, LoadedResource::len), "track bound");
        LoadOutcome::Completed
    }

    /// Start or resume playback. No-op when nothing is bound.
    pub fn resume(&mut self) -> Result<(), PlaybackError> {
        if self.slot.is_bound() {
            self.device.play()?;
        }
        Ok(())
    }

    /// Pause playback. Idempotent.
    pub fn pause(&mut self) {
        self.device.pause();
    }

    /// Seek within the bound track.
    ///
    /// The target is clamped to `[0, duration]` when the duration is known
    /// and accepted verbatim otherwise. The transport position updates
    /// optimistically, before the hardware confirms.
    pub fn seek(&mut self, position: Duration) {
        if !self.slot.is_bound() {
            return;
        }

        let target = match self.transport.duration {
            Some(duration) => position.min(duration),
            None => position,
        };

        self.transport.position = target;
        self.device.seek(target);
    }

    /// Set volume, clamped to `[0, 1]`.
    ///
    /// Zero volume forces mute so that "volume 0" and "muted" are always the
    /// same state; any positive volume unmutes.
    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        let muted = volume == 0.0;

        self.transport.volume = volume;
        self.transport.muted = muted;
        self.device.set_volume(volume);
        self.device.set_muted(muted);
    }

    /// Fold a transport-level device event into the mirrored state.
    ///
    /// `Finished` and `Error` carry no transport payload and are handled by
    /// the session.
    pub fn observe(&mut self, event: &DeviceEvent) {
        match event {
            DeviceEvent::Progress(position) => self.transport.position = *position,
            DeviceEvent::DurationKnown(duration) => self.transport.duration = Some(*duration),
            DeviceEvent::Buffering(buffering) => self.transport.buffering = *buffering,
            DeviceEvent::Finished | DeviceEvent::Error(_) => {}
        }
    }

    /// Stop output and release the bound resource.
    ///
    /// Also invalidates any load still in flight; its completion will be
    /// discarded as stale.
    pub fn shutdown(&mut self) {
        self.generation += 1;
        self.device.pause();
        self.device.unload();
        self.slot.release();
        self.transport.position = Duration::ZERO;
        self.transport.duration = None;
        self.transport.buffering = false;
    }

    /// Mirrored transport state.
    pub fn transport(&self) -> &TransportState {
        &self.transport
    }

    /// Track bound to the device, if any.
    pub fn loaded_track(&self) -> Option<TrackId> {
        self.slot.current().map(LoadedResource::track_id)
    }

    /// Lifetime count of released resources.
    pub fn resources_released(&self) -> usize {
        self.slot.released()
    }
}

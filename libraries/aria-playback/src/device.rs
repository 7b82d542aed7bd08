//! Audio output device abstraction
//!
//! Exactly one hardware output unit exists per session. The engine never
//! talks to audio hardware directly; platforms implement [`AudioDevice`]
//! (HTML audio element, native output, a test double) and deliver hardware
//! notifications to the session as [`DeviceEvent`] values.

use crate::resource::LoadedResource;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Hardware-level failures reported by the output device.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DeviceError {
    /// The bound payload could not be decoded
    #[error("decode failure: {0}")]
    Decode(String),

    /// The output unit failed while playing
    #[error("output failure: {0}")]
    Output(String),
}

/// Notifications emitted by the output device.
///
/// Delivered to the session one at a time on its single logical thread;
/// events are never processed concurrently with commands.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    /// Playback position moved
    Progress(Duration),

    /// The device determined the track duration
    DurationKnown(Duration),

    /// The device started (true) or finished (false) buffering
    Buffering(bool),

    /// The bound track played to its end
    Finished,

    /// Decoding or output failed mid-playback
    Error(DeviceError),
}

/// The single audio output unit owned by the device controller.
///
/// Command methods are synchronous and complete before returning; anything
/// the hardware does later arrives as a [`DeviceEvent`]. `play` and `pause`
/// are idempotent.
pub trait AudioDevice: Send {
    /// Bind a fetched payload as the device's source.
    fn load(&mut self, resource: &LoadedResource) -> Result<(), DeviceError>;

    /// Drop the bound source, if any.
    fn unload(&mut self);

    /// Start or resume playback of the bound source.
    fn play(&mut self) -> Result<(), DeviceError>;

    /// Pause playback. Harmless when already paused.
    fn pause(&mut self);

    /// Move the playhead.
    fn seek(&mut self, position: Duration);

    /// Set output volume (0.0 - 1.0).
    fn set_volume(&mut self, volume: f32);

    /// Mute or unmute output.
    fn set_muted(&mut self, muted: bool);
}

//! Aria Player - Playback Engine
//!
//! Client-side playback and queue engine for the Aria music player.
//!
//! This crate provides:
//! - An ordered play queue with a current-position cursor
//! - A controller for the single audio output unit, with an explicit
//!   acquire/release lifecycle for the loaded audio payload
//! - Supersede-on-arrival track loading (stale fetch results are discarded)
//! - Auto-advance policy (sequential / loop-single / shuffle)
//! - A session facade that derives all UI-facing state and emits
//!   [`PlaybackEvent`]s for re-rendering
//!
//! # Architecture
//!
//! `aria-playback` is platform-agnostic: audio output and payload fetching
//! are provided via the [`AudioDevice`] and [`TrackLoader`] traits. The
//! session runs on one logical thread; hardware notifications and fetch
//! completions are delivered to it as values, never concurrently.
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_playback::{AudioDevice, DeviceError, LoadedResource, PlaybackConfig, PlayerSession};
//! use aria_core::types::{Track, TrackId};
//! use std::time::Duration;
//!
//! struct MyDevice; // platform audio output
//! # impl AudioDevice for MyDevice {
//! #     fn load(&mut self, _: &LoadedResource) -> Result<(), DeviceError> { Ok(()) }
//! #     fn unload(&mut self) {}
//! #     fn play(&mut self) -> Result<(), DeviceError> { Ok(()) }
//! #     fn pause(&mut self) {}
//! #     fn seek(&mut self, _: Duration) {}
//! #     fn set_volume(&mut self, _: f32) {}
//! #     fn set_muted(&mut self, _: bool) {}
//! # }
//!
//! let mut session = PlayerSession::new(MyDevice, PlaybackConfig::default());
//!
//! let album = vec![
//!     Track::new(TrackId::new(1), "First"),
//!     Track::new(TrackId::new(2), "Second"),
//! ];
//! session.play_queue(album, 0);
//!
//! // The host fetches the payload and reports back:
//! if let Some(request) = session.take_load_request() {
//!     let payload = vec![0u8; 1024]; // loader.fetch(request.track_id).await
//!     session.finish_load(request, Ok(payload));
//! }
//! ```

mod controller;
mod device;
mod error;
mod events;
mod loader;
mod policy;
mod queue;
mod resource;
mod session;
pub mod types;

// Public exports
pub use controller::{LoadOutcome, OutputController};
pub use device::{AudioDevice, DeviceError, DeviceEvent};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use loader::{LoadError, LoadRequest, TrackLoader};
pub use policy::{decide, AdvanceDecision};
pub use queue::PlayQueue;
pub use resource::{LoadedResource, ResourceSlot};
pub use session::PlayerSession;
pub use types::{AdvanceMode, PlaybackConfig, TransportState};

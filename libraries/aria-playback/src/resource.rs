//! Loaded resource lifecycle
//!
//! The audio payload for the current track is held as an explicit handle
//! with an acquire/release contract: at most one resource is outstanding per
//! controller, and the previous handle is released no later than the moment
//! a new one is bound. Payloads are whole audio files, so keeping more than
//! one alive would double peak memory.

use aria_core::types::TrackId;

/// A fetched audio payload bound to a specific track.
#[derive(Debug)]
pub struct LoadedResource {
    track_id: TrackId,
    payload: Vec<u8>,
}

impl LoadedResource {
    /// Bind a payload to the track it was fetched for.
    pub fn new(track_id: TrackId, payload: Vec<u8>) -> Self {
        Self { track_id, payload }
    }

    /// Track this payload belongs to.
    pub fn track_id(&self) -> TrackId {
        self.track_id
    }

    /// Raw audio bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Check if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// Arena-of-one holder for the live [`LoadedResource`].
///
/// `bind` releases whatever was held before storing the new handle, so the
/// slot can never accumulate more than one outstanding resource.
#[derive(Debug, Default)]
pub struct ResourceSlot {
    current: Option<LoadedResource>,
    released: usize,
}

impl ResourceSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a new resource, releasing the previous one first.
    pub fn bind(&mut self, resource: LoadedResource) {
        if self.current.take().is_some() {
            self.released += 1;
        }
        self.current = Some(resource);
    }

    /// Release the held resource, if any.
    ///
    /// Returns true when a resource was actually released.
    pub fn release(&mut self) -> bool {
        if self.current.take().is_some() {
            self.released += 1;
            true
        } else {
            false
        }
    }

    /// The live resource, if one is bound.
    pub fn current(&self) -> Option<&LoadedResource> {
        self.current.as_ref()
    }

    /// Whether a resource is currently bound.
    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }

    /// How many resources have been released over the slot's lifetime.
    pub fn released(&self) -> usize {
        self.released
    }
}

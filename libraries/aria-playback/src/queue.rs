//! Play queue with a current-position cursor
//!
//! The queue is a flat ordered list of tracks plus a cursor identifying the
//! active entry. Duplicates are allowed. All mutation goes through the
//! operation set below; no caller may assign indices directly, which is what
//! keeps the cursor invariant:
//!
//! - cursor is `None` when nothing is selected (always the case when the
//!   queue is empty), or
//! - `cursor < tracks.len()`, never out of bounds, not even transiently.

use aria_core::types::Track;

/// Ordered play queue with a cursor into the active track.
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    tracks: Vec<Track>,
    cursor: Option<usize>,
}

impl PlayQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            cursor: None,
        }
    }

    /// Replace the whole queue and select a starting track.
    ///
    /// An empty `tracks` leaves the cursor unset. An out-of-range
    /// `start_index` clamps to the last track.
    pub fn replace(&mut self, tracks: Vec<Track>, start_index: usize) {
        self.tracks = tracks;
        self.cursor = if self.tracks.is_empty() {
            None
        } else {
            Some(start_index.min(self.tracks.len() - 1))
        };
    }

    /// Insert a track at the front of the queue and select it.
    ///
    /// Existing entries are preserved and shift down by one.
    pub fn prepend_and_select(&mut self, track: Track) {
        self.tracks.insert(0, track);
        self.cursor = Some(0);
    }

    /// Move the cursor to the next track.
    ///
    /// Returns false (and leaves the cursor alone) at the end of the queue.
    pub fn advance(&mut self) -> bool {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.tracks.len() => {
                self.cursor = Some(cursor + 1);
                true
            }
            _ => false,
        }
    }

    /// Move the cursor to the previous track.
    ///
    /// Returns false (and leaves the cursor alone) at the start of the queue.
    pub fn retreat(&mut self) -> bool {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                true
            }
            _ => false,
        }
    }

    /// Move the cursor to an arbitrary index.
    ///
    /// Returns false (and leaves the cursor alone) when `index` is out of
    /// range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tracks.len() {
            self.cursor = Some(index);
            true
        } else {
            false
        }
    }

    /// Empty the queue and unset the cursor.
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = None;
    }

    /// The track under the cursor, if any.
    pub fn current(&self) -> Option<&Track> {
        self.cursor.map(|c| &self.tracks[c])
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// All queued tracks in play order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks in the queue.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whether `advance` would move the cursor.
    pub fn has_next(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.tracks.len())
    }

    /// Whether `retreat` would move the cursor.
    pub fn has_previous(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }
}

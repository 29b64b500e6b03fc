//! Undo/redo stacks of full-surface snapshots.
//!
//! Every entry is the surface state at the end of one completed action. The
//! state before the first recorded action is kept separately as the baseline,
//! so undoing the first action has something to return to.
//!
//! ```text
//! baseline  [a1, a2, a3]  redo: []
//!   undo -> shows a2      [a1, a2]      redo: [s3]
//!   redo -> shows s3      [a1, a2, s3]  redo: []
//! ```
//!
//! `undo` moves the surface as it looked right before the call (`s3`) onto the
//! redo stack rather than the recorded entry, so an undo followed by a redo
//! always puts back exactly what was on screen.

use crate::draw::Snapshot;
use log::{debug, warn};
use std::collections::VecDeque;

/// History and Redo stacks plus the baseline they unwind to.
#[derive(Debug)]
pub struct History {
    baseline: Snapshot,
    entries: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    /// Maximum number of entries kept (0 = unlimited)
    limit: usize,
    /// The limit has already been reported once
    limit_warned: bool,
}

impl History {
    pub fn new(baseline: Snapshot, limit: usize) -> Self {
        Self {
            baseline,
            entries: VecDeque::new(),
            redo: Vec::new(),
            limit,
            limit_warned: false,
        }
    }

    /// Records the state at the end of an action and invalidates redo.
    ///
    /// When the entry limit is exceeded the oldest entry is folded into the
    /// baseline and can no longer be undone past.
    pub fn capture(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);
        if !self.redo.is_empty() {
            debug!("Discarding {} redo entries", self.redo.len());
            self.redo.clear();
        }

        if self.limit > 0 && self.entries.len() > self.limit {
            if let Some(oldest) = self.entries.pop_front() {
                if self.limit_warned {
                    debug!("Folding oldest undo entry into the baseline");
                } else {
                    warn!(
                        "Undo history limit ({}) reached; oldest entries now become the baseline ({} bytes per entry)",
                        self.limit,
                        oldest.byte_len()
                    );
                    self.limit_warned = true;
                }
                self.baseline = oldest;
            }
        }
    }

    /// Undoes the most recent action.
    ///
    /// `current` is the surface as it is right now; it is kept for redo. Returns
    /// the snapshot the surface should be restored to, or `None` (leaving both
    /// stacks untouched) when there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<&Snapshot> {
        self.entries.pop_back()?;
        self.redo.push(current);
        debug!(
            "Undo: {} entries left, {} redoable",
            self.entries.len(),
            self.redo.len()
        );
        Some(self.latest())
    }

    /// Re-applies the most recently undone action.
    ///
    /// Returns the snapshot to restore, or `None` when nothing was undone since
    /// the last capture.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let snapshot = self.redo.pop()?;
        self.entries.push_back(snapshot);
        debug!(
            "Redo: {} entries, {} redoable",
            self.entries.len(),
            self.redo.len()
        );
        self.entries.back()
    }

    /// Drops both stacks and starts over from `baseline`.
    pub fn reset(&mut self, baseline: Snapshot) {
        self.baseline = baseline;
        self.entries.clear();
        self.redo.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn baseline(&self) -> &Snapshot {
        &self.baseline
    }

    /// The state the surface was last recorded or restored to.
    pub fn latest(&self) -> &Snapshot {
        self.entries.back().unwrap_or(&self.baseline)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

//! Bounded snapshot history for single-step undo.
//!
//! A fixed-capacity stack of state snapshots. Pushing beyond capacity
//! drops the oldest snapshot, so memory stays bounded over an arbitrarily
//! long match while the most recent states remain undoable.
//!
//! Undo has a floor: popping a single-element history returns that element
//! without removing it. Once anything has been pushed, the history can
//! never be emptied again, and callers never have to handle a vanished
//! state mid-match.
//!
//! Backed by an `im::Vector` so cloning a history shares structure with
//! the original.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::rules::DEFAULT_HISTORY_CAPACITY;

/// Fixed-capacity, oldest-evicting stack of snapshots.
///
/// ## Example
///
/// ```
/// use rust_pingpong::core::BoundedHistory;
///
/// let mut history = BoundedHistory::new(2);
/// history.push(1);
/// history.push(2);
/// history.push(3); // evicts 1
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.pop(), Some(3));
/// assert_eq!(history.pop(), Some(2)); // floor: 2 stays in place
/// assert_eq!(history.last(), Some(&2));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundedHistory<T: Clone> {
    snapshots: Vector<T>,
    capacity: usize,
}

impl<T: Clone> BoundedHistory<T> {
    /// Create an empty history holding at most `capacity` snapshots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "History capacity must be at least 1");

        Self {
            snapshots: Vector::new(),
            capacity,
        }
    }

    /// Create an empty history with the default undo depth (16).
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }

    /// Append a snapshot, evicting the oldest one if the history is full.
    ///
    /// Never fails; the length never exceeds the capacity.
    pub fn push(&mut self, value: T) {
        if self.snapshots.len() >= self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(value);
    }

    /// Remove and return the most recent snapshot.
    ///
    /// With one snapshot left, returns a copy of it and leaves it in
    /// place: the earliest known state is sticky. Returns `None` only if
    /// nothing was ever pushed.
    pub fn pop(&mut self) -> Option<T> {
        if self.snapshots.len() <= 1 {
            return self.snapshots.front().cloned();
        }
        self.snapshots.pop_back()
    }

    /// The most recently pushed snapshot, or `None` before the first push.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.snapshots.back()
    }

    /// Number of snapshots currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the history holds no snapshots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Maximum number of snapshots held at once.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.snapshots.iter()
    }
}

impl<T: Clone> Default for BoundedHistory<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

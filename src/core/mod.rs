//! Core scoring types: sides, rules, frames, history.
//!
//! This module contains the match-rule logic. It performs no I/O and holds
//! no globals; callers own every value and sequence every transition.

pub mod frame;
pub mod history;
pub mod rules;
pub mod side;

pub use frame::{Frame, PointOutcome};
pub use history::BoundedHistory;
pub use rules::{
    DEFAULT_HISTORY_CAPACITY, DEUCE_SERVE_WINDOW, DEUCE_THRESHOLD, POINTS_TO_WIN, SERVE_WINDOW,
};
pub use side::{Side, SidePair};

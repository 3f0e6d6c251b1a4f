//! # rust-pingpong
//!
//! A table-tennis match scoring engine with bounded undo.
//!
//! ## Design Principles
//!
//! 1. **Values, Not Callbacks**: Every transition consumes a [`Frame`] and
//!    returns a new one. Round ends are reported as data
//!    ([`PointOutcome::round_ended`]), never as a callback.
//!
//! 2. **Explicit Ownership**: No global match state. The caller (or a
//!    [`MatchSession`]) owns the history and sequences every event.
//!
//! 3. **Bounded Memory**: Undo is backed by a fixed-capacity history that
//!    evicts its oldest snapshot, so a marathon match never grows the heap.
//!
//! ## Rules
//!
//! Standard table tennis: rounds to 11, deuce at 10-all switches the win
//! condition to lead-by-two, the serve passes every 2 points (every point
//! under deuce), and the side opening the serve alternates each round.
//!
//! ## Modules
//!
//! - `core`: Sides, rule constants, frame transitions, bounded history
//! - `session`: Event-driven driver owning one match's history

pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoundedHistory, Frame, PointOutcome, Side, SidePair,
    DEFAULT_HISTORY_CAPACITY, DEUCE_SERVE_WINDOW, DEUCE_THRESHOLD, POINTS_TO_WIN, SERVE_WINDOW,
};

pub use crate::session::{MatchEvent, MatchSession, Update};

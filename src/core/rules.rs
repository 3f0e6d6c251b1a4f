//! Fixed scoring rules.
//!
//! Standard table-tennis rules: rounds go to 11, deuce at 10-all switches
//! the win condition to lead-by-two, serve passes every 2 points (every
//! point under deuce). These are deliberately constants, not configuration.

/// Points needed to win a round outside of deuce.
pub const POINTS_TO_WIN: u8 = 11;

/// Both sides at this score puts the round into deuce.
pub const DEUCE_THRESHOLD: u8 = 10;

/// Points a side serves consecutively before the serve passes.
pub const SERVE_WINDOW: u8 = 2;

/// Serve window while the round is in deuce.
pub const DEUCE_SERVE_WINDOW: u8 = 1;

/// Undo depth kept by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 16;

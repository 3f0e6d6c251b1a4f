//! Match state snapshots and the transition rules between them.
//!
//! ## Frame
//!
//! One moment of a match as a plain value:
//! - Points and rounds won per side
//! - Which side serves, and where it is in the serve window
//! - Which side served first this round (decides serving after a round ends)
//! - Whether the round is in deuce
//!
//! ## Transitions
//!
//! Every operation is pure: it consumes a `Frame` and returns a new one.
//! Callers decide what to do with the previous value, typically pushing
//! the new frame onto a [`BoundedHistory`](super::history::BoundedHistory)
//! so the step can be undone.
//!
//! Scoring a point may end the round. When it does, [`Frame::add_point`]
//! also hands back the snapshot taken at the instant the winning point was
//! scored, before points reset for the next round, so the final score can
//! still be shown.

use serde::{Deserialize, Serialize};

use super::rules::{DEUCE_SERVE_WINDOW, DEUCE_THRESHOLD, POINTS_TO_WIN, SERVE_WINDOW};
use super::side::{Side, SidePair};

/// Result of scoring a point.
///
/// `next` is the state to continue the match from. When the point ended
/// the round, `round_ended` holds the frame at the winning score (points
/// not yet reset), and `next` is already reset for the following round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOutcome {
    /// State after the point, including any round rollover.
    pub next: Frame,

    /// Snapshot at the round-winning score, if the point ended the round.
    pub round_ended: Option<Frame>,
}

/// A value snapshot of one moment in the match.
///
/// Frames are small `Copy` values. Mutating operations take `self` and
/// return the successor frame; the original stays untouched wherever the
/// caller kept it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    /// Side that served the first point of the current round.
    pub round_serve: Side,

    /// Side currently serving.
    pub serve: Side,

    /// Serves made by the current server since the serve last passed.
    pub serves_in_window: u8,

    /// True once both sides have reached 10 in this round. Sticky until
    /// the round ends or the match resets.
    pub deuce: bool,

    /// Rounds (games) won per side.
    pub rounds: SidePair<u8>,

    /// Points in the current round per side.
    pub points: SidePair<u8>,
}

impl Frame {
    /// The state before the first point of a match: all counts zero,
    /// left side serving.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            round_serve: Side::Left,
            serve: Side::Left,
            serves_in_window: 0,
            deuce: false,
            rounds: SidePair::with_value(0),
            points: SidePair::with_value(0),
        }
    }

    // === Queries ===

    /// Whether this frame is in deuce, or should now enter it.
    ///
    /// Deuce is sticky: once set it stays set for the rest of the round.
    /// It is entered the moment both sides sit at exactly 10.
    #[must_use]
    pub fn check_deuce(&self) -> bool {
        self.deuce
            || (self.points[Side::Left] == DEUCE_THRESHOLD
                && self.points[Side::Right] == DEUCE_THRESHOLD)
    }

    /// Whether the current score ends the round.
    ///
    /// In deuce a lead of two or more wins. Outside deuce, a side at
    /// exactly 11 wins. Deuce has always armed before a side can pass 11
    /// without a two-point lead, so the non-deuce clause only ever fires
    /// at 11; it still checks rather than assumes.
    #[must_use]
    pub fn check_round_end(&self) -> bool {
        let left = self.points[Side::Left];
        let right = self.points[Side::Right];

        if self.deuce {
            left >= right + 2 || right >= left + 2
        } else {
            left == POINTS_TO_WIN || right == POINTS_TO_WIN
        }
    }

    /// Serves left before the serve passes to the other side.
    ///
    /// `None` if `serves_in_window` sits outside the active window, which
    /// cannot be produced by the transitions here.
    #[must_use]
    pub fn remaining_serves_in_window(&self) -> Option<u8> {
        let window = if self.deuce {
            DEUCE_SERVE_WINDOW
        } else {
            SERVE_WINDOW
        };

        window.checked_sub(self.serves_in_window)
    }

    // === Transitions ===

    /// Score a point for `side`.
    ///
    /// Increments the side's points, advances the serve rotation, refreshes
    /// the deuce flag, and rolls the round over if the point won it. On a
    /// round end the returned [`PointOutcome::round_ended`] carries the
    /// frame at the winning score; `next` has points cleared, the winner's
    /// round counter bumped, and the serve handed to the side that did not
    /// open the finished round.
    ///
    /// The left and right paths order the serve rotation and the deuce
    /// refresh differently: scoring left rotates the serve before deuce is
    /// refreshed, scoring right refreshes deuce first. At the 10-10
    /// transition the two orders disagree on which serve window that one
    /// rotation uses. The asymmetry is intentional and pinned by tests.
    #[must_use]
    pub fn add_point(mut self, side: Side) -> PointOutcome {
        self.points[side] += 1;
        let alert = self;

        match side {
            Side::Left => {
                self.advance_serve_window();
                self.deuce = self.check_deuce();
            }
            Side::Right => {
                self.deuce = self.check_deuce();
                self.advance_serve_window();
            }
        }

        if self.check_round_end() {
            self.points = SidePair::with_value(0);
            self.rounds[side] += 1;
            self.round_serve = self.round_serve.opposite();
            self.serve = self.round_serve;
            self.serves_in_window = 0;
            self.deuce = false;

            return PointOutcome {
                next: self,
                round_ended: Some(alert),
            };
        }

        PointOutcome {
            next: self,
            round_ended: None,
        }
    }

    /// Swap the two sides of the table.
    ///
    /// Serve, round-opening serve, rounds, and points all exchange sides
    /// in one step. Deuce and the serve-window count describe the round,
    /// not a side, and stay put. Applying this twice restores the frame
    /// exactly.
    #[must_use]
    pub fn change_side(mut self) -> Frame {
        self.serve = self.serve.opposite();
        self.round_serve = self.round_serve.opposite();
        self.rounds = self.rounds.swapped();
        self.points = self.points.swapped();
        self
    }

    /// Bump a side's round counter directly, bypassing point rules.
    ///
    /// For manual corrections from the scorekeeper; points, serve, and
    /// deuce are untouched.
    #[must_use]
    pub fn add_round(mut self, side: Side) -> Frame {
        self.rounds[side] += 1;
        self
    }

    /// Advance the serve rotation by one serve.
    ///
    /// Under deuce the serve passes every point. Otherwise it passes once
    /// the two-serve window is used up. The count resets to zero whenever
    /// the serve passes, so it never reaches the window bound at rest.
    fn advance_serve_window(&mut self) {
        self.serves_in_window += 1;

        if self.deuce {
            self.serve = self.serve.opposite();
            self.serves_in_window = 0;
            return;
        }

        if self.serves_in_window % SERVE_WINDOW != 0 {
            return;
        }

        self.serve = self.serve.opposite();
        self.serves_in_window = 0;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} (rounds {}-{}, {} serving)",
            self.points[Side::Left],
            self.points[Side::Right],
            self.rounds[Side::Left],
            self.rounds[Side::Right],
            self.serve,
        )
    }
}

//! Event-driven match session.
//!
//! `MatchSession` is the glue between a scorekeeping surface (buttons,
//! gestures, whatever) and the core types: it owns the frame history,
//! applies one [`MatchEvent`] at a time to the current frame, and returns
//! an [`Update`] describing what to show.
//!
//! ## Two-phase round-end rendering
//!
//! When a point ends a round, [`Update::round_ended`] carries the frame at
//! the winning score while [`Update::frame`] is already reset for the next
//! round. Callers render the winning score first, wait for the user to
//! acknowledge it, and then render `frame`. The session never calls back
//! into the caller; sequencing stays with the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{BoundedHistory, Frame, PointOutcome, Side, DEFAULT_HISTORY_CAPACITY};

/// A scorekeeper intent, one per user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A side won a rally.
    Point(Side),
    /// Manual round-counter correction for a side.
    AwardRound(Side),
    /// The players switched table sides.
    ChangeSides,
    /// Take back the last event.
    Undo,
    /// Start the match over.
    Reset,
}

/// What to render after applying an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Update {
    /// The frame the match continues from.
    pub frame: Frame,

    /// The frame at the round-winning score, when the event ended a round.
    /// Shown before `frame`, gated on user acknowledgment.
    pub round_ended: Option<Frame>,
}

/// One match worth of scoring state, with bounded undo.
///
/// Construct one session per match and feed it every user action. The
/// session pushes the initial frame on construction, so there is always a
/// current frame to render.
///
/// ## Example
///
/// ```
/// use rust_pingpong::{MatchEvent, MatchSession, Side};
///
/// let mut session = MatchSession::new();
///
/// let update = session.apply(MatchEvent::Point(Side::Left));
/// assert_eq!(update.frame.points[Side::Left], 1);
///
/// session.apply(MatchEvent::Undo);
/// assert_eq!(session.current().points[Side::Left], 0);
/// ```
#[derive(Clone, Debug)]
pub struct MatchSession {
    history: BoundedHistory<Frame>,
}

impl MatchSession {
    /// Create a session with the default undo depth.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a session keeping at most `capacity` undoable states.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut history = BoundedHistory::new(capacity);
        history.push(Frame::initial());
        Self { history }
    }

    /// The frame the match is currently at.
    #[must_use]
    pub fn current(&self) -> Frame {
        self.history.last().copied().unwrap_or_default()
    }

    /// Read access to the underlying history.
    #[must_use]
    pub fn history(&self) -> &BoundedHistory<Frame> {
        &self.history
    }

    /// Apply one event and return what to render.
    ///
    /// Every event except `Undo` pushes its resulting frame, making it the
    /// new undo target. `Undo` pops instead; at the undo floor it leaves
    /// the earliest kept state in place and is a no-op.
    pub fn apply(&mut self, event: MatchEvent) -> Update {
        let current = self.current();

        let update = match event {
            MatchEvent::Point(side) => {
                let PointOutcome { next, round_ended } = current.add_point(side);
                self.history.push(next);
                if let Some(alert) = round_ended {
                    info!(%side, score = %alert, "round ended");
                }
                Update { frame: next, round_ended }
            }
            MatchEvent::AwardRound(side) => {
                let next = current.add_round(side);
                self.history.push(next);
                Update { frame: next, round_ended: None }
            }
            MatchEvent::ChangeSides => {
                let next = current.change_side();
                self.history.push(next);
                Update { frame: next, round_ended: None }
            }
            MatchEvent::Undo => {
                self.history.pop();
                Update { frame: self.current(), round_ended: None }
            }
            MatchEvent::Reset => {
                let next = Frame::initial();
                self.history.push(next);
                Update { frame: next, round_ended: None }
            }
        };

        debug!(?event, frame = %update.frame, "applied event");
        update
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}

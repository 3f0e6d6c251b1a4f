//! Property-based tests for the scoring core.
//!
//! Random event sequences are driven through a `MatchSession`; the
//! invariants below must hold at every intermediate state.

use proptest::prelude::*;

use rust_pingpong::{
    Frame, MatchEvent, MatchSession, Side, DEUCE_SERVE_WINDOW, SERVE_WINDOW,
};

/// Strategy: any single scorekeeper event, weighted toward points.
fn event_strategy() -> impl Strategy<Value = MatchEvent> {
    prop_oneof![
        4 => prop_oneof![
            Just(MatchEvent::Point(Side::Left)),
            Just(MatchEvent::Point(Side::Right)),
        ],
        1 => prop_oneof![
            Just(MatchEvent::AwardRound(Side::Left)),
            Just(MatchEvent::AwardRound(Side::Right)),
            Just(MatchEvent::ChangeSides),
            Just(MatchEvent::Undo),
            Just(MatchEvent::Reset),
        ],
    ]
}

/// Strategy: a side to score.
fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Left), Just(Side::Right)]
}

proptest! {
    // The serve window count stays inside its bound: below 2 always,
    // at most 1 under deuce.
    #[test]
    fn serve_window_stays_bounded(events in prop::collection::vec(event_strategy(), 0..200)) {
        let mut session = MatchSession::new();
        for event in events {
            let update = session.apply(event);
            let frame = update.frame;
            prop_assert!(frame.serves_in_window < SERVE_WINDOW);
            if frame.deuce {
                prop_assert!(frame.serves_in_window <= DEUCE_SERVE_WINDOW);
            }
        }
    }

    // Every reachable frame sits inside an active serve window.
    #[test]
    fn remaining_serves_always_defined(events in prop::collection::vec(event_strategy(), 0..200)) {
        let mut session = MatchSession::new();
        for event in events {
            let update = session.apply(event);
            prop_assert!(update.frame.remaining_serves_in_window().is_some());
        }
    }

    // A live frame never satisfies the round-end condition: rounds that
    // end are rolled over within the same transition.
    #[test]
    fn live_frames_never_round_ended(events in prop::collection::vec(event_strategy(), 0..200)) {
        let mut session = MatchSession::new();
        for event in events {
            let update = session.apply(event);
            prop_assert!(!update.frame.check_round_end());
        }
    }

    // The history never exceeds its capacity and never empties.
    #[test]
    fn history_length_bounded(events in prop::collection::vec(event_strategy(), 0..200)) {
        let mut session = MatchSession::with_capacity(8);
        for event in events {
            session.apply(event);
            let len = session.history().len();
            prop_assert!(len >= 1);
            prop_assert!(len <= 8);
        }
    }

    // Swapping sides twice restores any reachable frame exactly.
    #[test]
    fn change_side_is_involution(events in prop::collection::vec(event_strategy(), 0..100)) {
        let mut session = MatchSession::new();
        for event in events {
            let frame = session.apply(event).frame;
            prop_assert_eq!(frame.change_side().change_side(), frame);
        }
    }

    // For pure point sequences, the points on the table equal the points
    // scored since the last round end; round ends reset the count and
    // move exactly one round counter by exactly one.
    #[test]
    fn point_bookkeeping(sides in prop::collection::vec(side_strategy(), 0..300)) {
        let mut frame = Frame::initial();
        let mut since_round_end = 0u32;

        let table_points =
            |f: &Frame| u32::from(f.points[Side::Left]) + u32::from(f.points[Side::Right]);

        for side in sides {
            let rounds_before = frame.rounds;
            let outcome = frame.add_point(side);

            if let Some(alert) = outcome.round_ended {
                prop_assert_eq!(table_points(&alert), since_round_end + 1);
                prop_assert_eq!(table_points(&outcome.next), 0);
                prop_assert_eq!(
                    outcome.next.rounds[side],
                    rounds_before[side] + 1
                );
                prop_assert_eq!(
                    outcome.next.rounds[side.opposite()],
                    rounds_before[side.opposite()]
                );
                since_round_end = 0;
            } else {
                since_round_end += 1;
                prop_assert_eq!(table_points(&outcome.next), since_round_end);
            }

            frame = outcome.next;
        }
    }

    // Deuce is monotonic within a round: it only clears when the round
    // ends.
    #[test]
    fn deuce_monotonic_within_round(sides in prop::collection::vec(side_strategy(), 0..300)) {
        let mut frame = Frame::initial();

        for side in sides {
            let was_deuce = frame.deuce;
            let outcome = frame.add_point(side);

            if outcome.round_ended.is_none() && was_deuce {
                prop_assert!(outcome.next.deuce);
            }
            if outcome.round_ended.is_some() {
                prop_assert!(!outcome.next.deuce);
            }

            frame = outcome.next;
        }
    }
}

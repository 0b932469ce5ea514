//! Session rule tests.
//!
//! These walk through whole turns the way a player would, with a frozen
//! clock so bonus points are exact.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use memorize::cards::CardId;
use memorize::core::{ManualClock, SessionConfig};
use memorize::session::{CardChange, GameSession, SessionEvent};

fn id(s: &str) -> CardId {
    s.parse().expect("valid card id")
}

fn abc_session() -> (GameSession<&'static str>, ManualClock) {
    let clock = ManualClock::new();
    let config = SessionConfig::new().with_pair_count(3).with_seed(2024);
    let game = GameSession::with_clock(config, clock.clone(), |i| ["A", "B", "C"][i]);
    (game, clock)
}

fn face_up_unmatched(game: &GameSession<&'static str>) -> usize {
    game.cards().iter().filter(|c| c.is_face_up() && !c.is_matched()).count()
}

/// A,A,B,B,C,C: choose A1, B1 (mismatch), A1 again, A2 (match).
#[test]
fn test_three_pair_walkthrough() {
    let (mut game, _) = abc_session();

    game.choose(&id("1A"));
    assert_eq!(game.pending_card().map(|c| c.id()), Some(id("1A")));
    assert!(game.card(&id("1A")).unwrap().is_face_up());

    game.choose(&id("2A"));
    assert_eq!(game.score(), 0);
    assert_eq!(game.pending_index(), None);
    assert!(game.card(&id("2A")).unwrap().is_face_up());
    assert!(!game.card(&id("1A")).unwrap().is_face_up());

    game.choose(&id("1A"));
    assert!(game.card(&id("1A")).unwrap().is_face_up());
    assert_eq!(game.pending_card().map(|c| c.id()), Some(id("1A")));

    game.choose(&id("1B"));
    assert!(game.score() >= 2);
    assert!(game.card(&id("1A")).unwrap().is_matched());
    assert!(game.card(&id("1B")).unwrap().is_matched());
    assert_eq!(face_up_unmatched(&game), 0);
}

#[test]
fn test_frozen_clock_match_awards_both_full_bonuses() {
    let (mut game, _) = abc_session();
    game.choose(&id("3B"));
    game.choose(&id("3A"));
    assert_eq!(game.score(), 2 + 6 + 6);
}

#[test]
fn test_bonus_accumulates_across_showings() {
    let (mut game, clock) = abc_session();

    game.choose(&id("1A"));
    clock.advance(Duration::from_secs(2));
    game.choose(&id("2A")); // 1A down after 2s

    clock.advance(Duration::from_secs(100)); // face-down time is free
    game.choose(&id("1A"));
    clock.advance(Duration::from_secs(1));
    game.choose(&id("1B"));

    // 1A used 3 of 6 seconds; 1B was never up.
    assert_eq!(game.score(), 2 + 3 + 6);
}

#[test]
fn test_mismatch_penalty_progression() {
    let (mut game, _) = abc_session();

    game.choose(&id("1A"));
    game.choose(&id("2A"));
    assert_eq!(game.score(), 0);

    game.choose(&id("1A"));
    game.choose(&id("3A"));
    assert_eq!(game.score(), -1);
}

#[test]
fn test_at_most_one_pending_card_between_calls() {
    let (mut game, _) = abc_session();
    let order = ["1A", "2A", "2B", "3A", "1B", "1A", "3B", "3A", "2A", "2B", "1B", "1A"];

    for name in order {
        game.choose(&id(name));
        assert!(face_up_unmatched(&game) <= 1, "after {name}");
        if let Some(index) = game.pending_index() {
            assert!(game.cards()[index].is_face_up());
            assert!(!game.cards()[index].is_matched());
        }
    }
}

#[test]
fn test_score_can_go_negative() {
    let (mut game, _) = abc_session();
    // Show every card once so all are seen.
    for name in ["1A", "2A", "3A", "1B", "2B", "3B"] {
        game.choose(&id(name));
    }
    let before = game.score();

    game.choose(&id("1A"));
    game.choose(&id("2A"));
    assert_eq!(game.score(), before - 2);
    assert!(game.score() < 0);
}

#[test]
fn test_shuffle_keeps_state() {
    let (mut game, _) = abc_session();
    game.choose(&id("1A"));
    game.choose(&id("1B"));
    game.choose(&id("2A"));

    let mut before: Vec<_> = game
        .cards()
        .iter()
        .map(|c| (c.id(), *c.content(), c.is_face_up(), c.is_matched()))
        .collect();
    let score = game.score();

    game.shuffle();

    let mut after: Vec<_> = game
        .cards()
        .iter()
        .map(|c| (c.id(), *c.content(), c.is_face_up(), c.is_matched()))
        .collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
    assert_eq!(game.score(), score);
    assert_eq!(game.pending_card().map(|c| c.id()), Some(id("2A")));
}

#[test]
fn test_reset() {
    let (mut game, _) = abc_session();
    game.choose(&id("1A"));
    game.choose(&id("1B"));
    game.choose(&id("2A"));

    game.reset();

    assert_eq!(game.score(), 0);
    assert_eq!(game.pending_index(), None);
    assert_eq!(face_up_unmatched(&game), 0);
    assert!(game.cards().iter().all(|c| !c.is_face_up() && !c.is_matched()));

    let mut contents: Vec<_> = game.cards().iter().map(|c| *c.content()).collect();
    contents.sort_unstable();
    assert_eq!(contents, vec!["A", "A", "B", "B", "C", "C"]);
}

#[test]
fn test_empty_session() {
    let clock = ManualClock::new();
    let mut game = GameSession::with_clock(SessionConfig::new().with_pair_count(0), clock, |_| 0u8);

    assert!(game.cards().is_empty());
    assert!(game.is_complete());

    game.choose(&id("1A"));
    game.shuffle();
    game.reset();
    assert_eq!(game.score(), 0);
}

#[test]
fn test_same_seed_same_table() {
    let (a, _) = abc_session();
    let (b, _) = abc_session();
    let ids_a: Vec<_> = a.cards().iter().map(|c| c.id()).collect();
    let ids_b: Vec<_> = b.cards().iter().map(|c| c.id()).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn test_subscribers_receive_notifications() {
    let (mut game, _) = abc_session();
    let received = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&received);
    let subscription = game.subscribe(move |n| {
        sink.borrow_mut().push((n.events.to_vec(), n.snapshot.score, n.snapshot.generation));
    });

    game.choose(&id("2A"));
    game.choose(&id("2A")); // ignored, nothing published
    game.choose(&id("2B"));
    game.shuffle();

    {
        let received = received.borrow();
        assert_eq!(received.len(), 3);
        assert_eq!(received[0].0, vec![SessionEvent::Flipped { id: id("2A") }]);
        assert_eq!(
            received[1].0,
            vec![
                SessionEvent::Flipped { id: id("2B") },
                SessionEvent::Matched {
                    first: id("2A"),
                    second: id("2B"),
                    points: 14,
                },
            ]
        );
        assert_eq!(received[1].1, 14);
        assert_eq!(received[2].0, vec![SessionEvent::Shuffled]);
        assert_eq!(received[2].2, 3);
    }

    assert!(game.unsubscribe(subscription));
    game.reset();
    assert_eq!(received.borrow().len(), 3);
    assert_eq!(game.generation(), 4);
}

#[test]
fn test_mismatch_notification_and_diff() {
    let (mut game, _) = abc_session();
    game.choose(&id("1A"));
    let before = game.snapshot();

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    game.subscribe(move |n| sink.borrow_mut().extend(n.events.iter().cloned()));

    game.choose(&id("3B"));
    let after = game.snapshot();

    assert_eq!(
        *events.borrow(),
        vec![
            SessionEvent::Flipped { id: id("3B") },
            SessionEvent::Mismatched {
                first: id("1A"),
                second: id("3B"),
                penalty: 0,
            },
        ]
    );

    let mut changes = after.diff(&before);
    changes.sort_by_key(|change| format!("{change:?}"));
    assert_eq!(
        changes,
        vec![CardChange::FaceDown(id("1A")), CardChange::FaceUp(id("3B"))]
    );
    assert_eq!(after.score_delta(&before), 0);
}

#[test]
fn test_snapshot_reports_bonus_fraction() {
    let (mut game, clock) = abc_session();
    game.choose(&id("1A"));
    clock.advance(Duration::from_secs(3));

    let snapshot = game.snapshot();
    assert_eq!(snapshot.card(&id("1A")).map(|v| v.bonus_remaining), Some(0.5));
    assert_eq!(snapshot.card(&id("1B")).map(|v| v.bonus_remaining), Some(1.0));
    assert_eq!(snapshot.pending().count(), 1);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"1A\""));
}

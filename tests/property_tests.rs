//! Randomized play.
//!
//! Drives sessions with arbitrary choice sequences and clock steps and checks
//! the rules that must hold no matter what the player does.

use std::collections::HashMap;
use std::time::Duration;

use memorize::cards::{CardId, Slot};
use memorize::core::{FaceDownPolicy, ManualClock, SessionConfig};
use memorize::session::GameSession;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Step {
    Choose { pair: u32, slot_b: bool },
    Wait(u64),
    Shuffle,
}

fn step(max_pair: u32) -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (1..=max_pair + 1, any::<bool>()).prop_map(|(pair, slot_b)| Step::Choose { pair, slot_b }),
        2 => (0u64..4000).prop_map(Step::Wait),
        1 => Just(Step::Shuffle),
    ]
}

fn policy() -> impl Strategy<Value = FaceDownPolicy> {
    prop_oneof![Just(FaceDownPolicy::SkipMatched), Just(FaceDownPolicy::All)]
}

proptest! {
    #[test]
    fn prop_rules_hold(
        pairs in 0usize..8,
        seed in any::<u64>(),
        policy in policy(),
        steps in prop::collection::vec(step(8), 0..80),
    ) {
        let clock = ManualClock::new();
        let config = SessionConfig::new()
            .with_pair_count(pairs)
            .with_seed(seed)
            .with_face_down_policy(policy);
        let mut game = GameSession::with_clock(config, clock.clone(), |i| i);

        let mut matched_before = 0;
        for step in steps {
            let score_before = game.score();
            match step {
                Step::Choose { pair, slot_b } => {
                    let slot = if slot_b { Slot::B } else { Slot::A };
                    game.choose(&CardId::new(pair, slot));
                }
                Step::Wait(ms) => clock.advance(Duration::from_millis(ms)),
                Step::Shuffle => game.shuffle(),
            }

            // At most one card face-up and unmatched.
            let pending: Vec<_> = game
                .cards()
                .iter()
                .enumerate()
                .filter(|(_, c)| c.is_face_up() && !c.is_matched())
                .map(|(i, _)| i)
                .collect();
            prop_assert!(pending.len() <= 1);
            if let Some(index) = game.pending_index() {
                prop_assert_eq!(pending, vec![index]);
            }

            // Matched cards come in whole pairs.
            let matched = game.cards().iter().filter(|c| c.is_matched()).count();
            prop_assert_eq!(matched % 2, 0);
            for card in game.cards().iter().filter(|c| c.is_matched()) {
                prop_assert!(game.card(&card.id().partner()).unwrap().is_matched());
            }

            // Score moves by a bounded amount per step.
            let delta = game.score() - score_before;
            if matched > matched_before {
                prop_assert!((2..=14).contains(&delta));
            } else {
                prop_assert!((-2..=0).contains(&delta));
            }
            matched_before = matched;
        }

        // Pairing survives any play.
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for card in game.cards() {
            *counts.entry(*card.content()).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), pairs);
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn prop_shuffle_preserves_card_states(
        pairs in 1usize..10,
        seed in any::<u64>(),
        choices in prop::collection::vec((1u32..10, any::<bool>()), 0..20),
    ) {
        let clock = ManualClock::new();
        let config = SessionConfig::new().with_pair_count(pairs).with_seed(seed);
        let mut game = GameSession::with_clock(config, clock, |i| i);
        for (pair, slot_b) in choices {
            game.choose(&CardId::new(pair, if slot_b { Slot::B } else { Slot::A }));
        }

        let states = |game: &GameSession<usize>| {
            let mut v: Vec<_> = game
                .cards()
                .iter()
                .map(|c| (*c.content(), c.is_face_up(), c.is_matched()))
                .collect();
            v.sort_unstable();
            v
        };

        let before = states(&game);
        let score = game.score();
        let pending = game.pending_card().map(|c| c.id());

        game.shuffle();

        prop_assert_eq!(states(&game), before);
        prop_assert_eq!(game.score(), score);
        prop_assert_eq!(game.pending_card().map(|c| c.id()), pending);
    }

    #[test]
    fn prop_reset_clears_table(
        pairs in 0usize..10,
        seed in any::<u64>(),
        choices in prop::collection::vec((1u32..10, any::<bool>()), 0..30),
    ) {
        let clock = ManualClock::new();
        let config = SessionConfig::new().with_pair_count(pairs).with_seed(seed);
        let mut game = GameSession::with_clock(config, clock, |i| i);
        for (pair, slot_b) in choices {
            game.choose(&CardId::new(pair, if slot_b { Slot::B } else { Slot::A }));
        }

        game.reset();

        prop_assert_eq!(game.score(), 0);
        prop_assert_eq!(game.pending_index(), None);
        prop_assert_eq!(game.cards().len(), pairs * 2);
        prop_assert!(game.cards().iter().all(|c| !c.is_face_up() && !c.is_matched() && !c.has_been_seen()));
    }
}

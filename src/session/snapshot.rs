//! Immutable views of a session.
//!
//! A `Snapshot` captures `(cards, score)` at one moment. Cards live in an
//! `im::Vector`, so a snapshot clones in O(1) and a renderer may keep the
//! previous one around to diff against.

use std::time::Duration;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// What a renderer needs to draw one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView<C> {
    pub id: CardId,
    pub content: C,
    pub is_face_up: bool,
    pub is_matched: bool,
    /// Bonus window fraction left at capture time; drives the countdown wedge.
    pub bonus_remaining: f64,
}

impl<C: Clone> CardView<C> {
    pub(crate) fn capture(card: &Card<C>, now: Duration) -> Self {
        Self {
            id: card.id(),
            content: card.content().clone(),
            is_face_up: card.is_face_up(),
            is_matched: card.is_matched(),
            bonus_remaining: card.bonus_remaining(now),
        }
    }
}

/// Per-card change between two snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardChange {
    FaceUp(CardId),
    FaceDown(CardId),
    Matched(CardId),
}

/// Immutable session state at one moment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<C: Clone> {
    /// Cards in table order.
    pub cards: Vector<CardView<C>>,
    pub score: i64,
    /// Incremented once per published state change.
    pub generation: u64,
}

impl<C: Clone> Snapshot<C> {
    /// Card view by id.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&CardView<C>> {
        self.cards.iter().find(|view| view.id == *id)
    }

    /// Cards face-up and waiting for a partner.
    pub fn pending(&self) -> impl Iterator<Item = &CardView<C>> {
        self.cards.iter().filter(|view| view.is_face_up && !view.is_matched)
    }

    #[must_use]
    pub fn score_delta(&self, older: &Snapshot<C>) -> i64 {
        self.score - older.score
    }

    /// Face and match changes since `older`, in current table order.
    ///
    /// Cards missing from `older` (a re-deal with new ids) are reported by
    /// their current state.
    #[must_use]
    pub fn diff(&self, older: &Snapshot<C>) -> Vec<CardChange> {
        let previous: FxHashMap<CardId, &CardView<C>> =
            older.cards.iter().map(|view| (view.id, view)).collect();

        let mut changes = Vec::new();
        for view in &self.cards {
            let (was_face_up, was_matched) = previous
                .get(&view.id)
                .map_or((false, false), |old| (old.is_face_up, old.is_matched));

            if view.is_matched && !was_matched {
                changes.push(CardChange::Matched(view.id));
            }
            if view.is_face_up != was_face_up {
                changes.push(if view.is_face_up {
                    CardChange::FaceUp(view.id)
                } else {
                    CardChange::FaceDown(view.id)
                });
            }
        }
        changes
    }
}

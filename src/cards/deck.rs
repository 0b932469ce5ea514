//! The deck: every card in a deal, in table order.
//!
//! `Deck` owns the cards and an id index for fast lookup. Cards are always
//! dealt in pairs and shuffled before anyone sees the order, so table
//! position never reveals which cards belong together.

use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::id::{CardId, Slot};
use crate::core::GameRng;

/// Ordered collection of cards with id lookup.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memorize::cards::Deck;
/// use memorize::core::GameRng;
///
/// let mut rng = GameRng::new(1);
/// let deck = Deck::new(3, Duration::from_secs(6), &mut rng, |pair| ["🐶", "🐱", "🐭"][pair]);
///
/// assert_eq!(deck.len(), 6);
/// assert_eq!(deck.iter().filter(|c| *c.content() == "🐱").count(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<Card<C>>", into = "Vec<Card<C>>")]
#[serde(bound(serialize = "C: Clone + Serialize", deserialize = "C: Deserialize<'de>"))]
pub struct Deck<C> {
    cards: Vec<Card<C>>,
    index: FxHashMap<CardId, usize>,
}

impl<C: Clone> Deck<C> {
    /// Deal `pair_count` pairs and shuffle them.
    ///
    /// `content_for_pair` is called once per pair index, in order. Both
    /// cards of a pair get the returned content; ids are `"{n}A"` and
    /// `"{n}B"` with `n` the 1-based pair number. Zero pairs is an empty deck.
    pub fn new<F>(pair_count: usize, bonus_time_limit: Duration, rng: &mut GameRng, mut content_for_pair: F) -> Self
    where
        F: FnMut(usize) -> C,
    {
        let mut cards = Vec::with_capacity(pair_count * 2);
        for pair_index in 0..pair_count {
            let content = content_for_pair(pair_index);
            for slot in Slot::BOTH {
                let id = CardId::for_pair_index(pair_index, slot);
                cards.push(Card::new(id, content.clone(), bonus_time_limit));
            }
        }

        let mut deck = Self::from_cards(cards);
        deck.shuffle(rng);
        deck
    }

    /// Deal one pair per entry of `contents` and shuffle.
    pub fn from_contents(contents: &[C], bonus_time_limit: Duration, rng: &mut GameRng) -> Self {
        Self::new(contents.len(), bonus_time_limit, rng, |pair_index| contents[pair_index].clone())
    }
}

impl<C> Deck<C> {
    fn from_cards(cards: Vec<Card<C>>) -> Self {
        let mut deck = Self {
            cards,
            index: FxHashMap::default(),
        };
        deck.reindex();
        deck
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (position, card) in self.cards.iter().enumerate() {
            self.index.insert(card.id(), position);
        }
    }

    /// Reorder the cards uniformly at random.
    ///
    /// Card state (orientation, match, timers) is untouched.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        self.reindex();
    }

    /// Table position of the card with this id.
    #[must_use]
    pub fn index_of(&self, id: &CardId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Card at a table position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card<C>> {
        self.cards.get(index)
    }

    /// Card with this id.
    #[must_use]
    pub fn find(&self, id: &CardId) -> Option<&Card<C>> {
        self.index_of(id).and_then(|i| self.cards.get(i))
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> &mut Card<C> {
        &mut self.cards[index]
    }

    /// All cards in table order.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card<C>> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Positions of face-up, unmatched cards.
    pub fn pending_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_pending())
            .map(|(i, _)| i)
    }
}

impl<C> From<Vec<Card<C>>> for Deck<C> {
    fn from(cards: Vec<Card<C>>) -> Self {
        Self::from_cards(cards)
    }
}

impl<C> From<Deck<C>> for Vec<Card<C>> {
    fn from(deck: Deck<C>) -> Self {
        deck.cards
    }
}

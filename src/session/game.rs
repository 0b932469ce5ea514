//! The game session: turn rules and scoring.
//!
//! ## Choosing a card
//!
//! - Unknown ids, face-up cards and matched cards are ignored.
//! - With no card pending, the chosen card becomes pending and every other
//!   card goes face-down (matched cards excepted, per `FaceDownPolicy`).
//! - With a card pending, the two are compared:
//!   - match: both are matched, score += 2 + both bonuses
//!   - mismatch: score -= 1 for each of the two already seen, then the
//!     pending card goes face-down
//! - Finally the chosen card goes face-up.
//!
//! Between calls at most one card is face-up and unmatched.
//!
//! ## Threading
//!
//! A session has a single owner. Calls are synchronous and never block;
//! callers with several input sources must funnel them through the owner.

use log::debug;
use smallvec::smallvec;

use super::events::{EventBatch, Notification, SessionEvent, Subscribers, SubscriptionId};
use super::snapshot::{CardView, Snapshot};
use crate::cards::{Card, CardId, Deck};
use crate::core::{Clock, FaceDownPolicy, GameRng, GameRngState, SessionConfig, SystemClock};

/// Points for any match, before bonuses.
pub const MATCH_POINTS: i64 = 2;

/// Points lost per already-seen card in a mismatch.
pub const SEEN_MISMATCH_PENALTY: i64 = 1;

/// A single game: the dealt cards, the score and the pending card.
///
/// ## Example
///
/// ```
/// use memorize::core::{ManualClock, SessionConfig};
/// use memorize::session::GameSession;
///
/// let config = SessionConfig::new().with_pair_count(2).with_seed(1);
/// let mut game = GameSession::with_clock(config, ManualClock::new(), |pair| ["🍎", "🍌"][pair]);
///
/// let first = game.cards()[0].id();
/// game.choose(&first);
/// game.choose(&first.partner());
///
/// // Matched instantly: 2 points plus the full 6-second bonus for each card.
/// assert_eq!(game.score(), 14);
/// ```
pub struct GameSession<C: Clone> {
    deck: Deck<C>,
    /// Content per pair, in pair order. Reset deals from this.
    contents: Vec<C>,
    score: i64,
    /// Table position of the one face-up card awaiting a partner.
    pending: Option<usize>,
    config: SessionConfig,
    rng: GameRng,
    clock: Box<dyn Clock>,
    subscribers: Subscribers<C>,
    generation: u64,
}

impl<C: Clone + PartialEq> GameSession<C> {
    /// Deal a new game timed by the system clock.
    ///
    /// `content_for_pair` is called once per pair index.
    pub fn new<F>(config: SessionConfig, content_for_pair: F) -> Self
    where
        F: FnMut(usize) -> C,
    {
        Self::with_clock(config, SystemClock::new(), content_for_pair)
    }

    /// Deal a new game timed by the given clock.
    pub fn with_clock<K, F>(config: SessionConfig, clock: K, content_for_pair: F) -> Self
    where
        K: Clock + 'static,
        F: FnMut(usize) -> C,
    {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let contents: Vec<C> = (0..config.pair_count).map(content_for_pair).collect();
        let deck = Deck::from_contents(&contents, config.bonus_time_limit, &mut rng);

        debug!(
            "[Session] dealt {} pairs with seed {}",
            contents.len(),
            rng.seed()
        );

        Self {
            deck,
            contents,
            score: 0,
            pending: None,
            config,
            rng,
            clock: Box::new(clock),
            subscribers: Subscribers::default(),
            generation: 0,
        }
    }

    /// Choose a card by id.
    ///
    /// Ignored when the id is unknown or the card is already face-up or
    /// matched; nothing is published in that case.
    pub fn choose(&mut self, id: &CardId) {
        let Some(chosen) = self.deck.index_of(id) else {
            debug!("[Chosen] {} ignored: not on the table", id);
            return;
        };
        let card = &self.deck.cards()[chosen];
        if card.is_face_up() || card.is_matched() {
            debug!("[Chosen] {} ignored: already face-up or matched", id);
            return;
        }

        let now = self.clock.now();
        let mut events: EventBatch = smallvec![SessionEvent::Flipped { id: *id }];
        debug!("[Chosen] {} => up", id);

        if let Some(pending) = self.pending {
            let pending_id = self.deck.cards()[pending].id();

            if self.deck.cards()[chosen].content() == self.deck.cards()[pending].content() {
                let points = MATCH_POINTS
                    + self.deck.cards()[chosen].bonus(now)
                    + self.deck.cards()[pending].bonus(now);
                self.deck.card_mut(chosen).set_matched(now);
                self.deck.card_mut(pending).set_matched(now);
                self.score += points;

                debug!("[Match] {} + {}: +{} => {}", pending_id, id, points, self.score);
                events.push(SessionEvent::Matched {
                    first: pending_id,
                    second: *id,
                    points,
                });
            } else {
                let penalty = [chosen, pending]
                    .iter()
                    .filter(|&&i| self.deck.cards()[i].has_been_seen())
                    .count() as i64
                    * SEEN_MISMATCH_PENALTY;
                self.score -= penalty;
                // Penalty reads `has_been_seen` before this flip marks it.
                self.deck.card_mut(pending).set_face_up(false, now);

                debug!("[Mismatch] {} + {}: -{} => {}", pending_id, id, penalty, self.score);
                events.push(SessionEvent::Mismatched {
                    first: pending_id,
                    second: *id,
                    penalty,
                });
            }
            self.set_pending(None);
        } else {
            self.set_pending(Some(chosen));
            let policy = self.config.face_down_policy;
            for index in 0..self.deck.len() {
                if index == chosen {
                    continue;
                }
                let card = self.deck.card_mut(index);
                if policy == FaceDownPolicy::SkipMatched && card.is_matched() {
                    continue;
                }
                card.set_face_up(false, now);
            }
        }

        self.deck.card_mut(chosen).set_face_up(true, now);

        if self.is_complete() {
            debug!("[Session] all pairs found, final score {}", self.score);
        }
        self.publish(events);
    }

    fn set_pending(&mut self, pending: Option<usize>) {
        debug!(
            "[Pending] change to {:?}",
            pending.map(|i| self.deck.cards()[i].id().to_string())
        );
        self.pending = pending;
    }

    /// Reorder the table. Score and card state are untouched.
    pub fn shuffle(&mut self) {
        let pending_id = self.pending_card().map(Card::id);
        self.deck.shuffle(&mut self.rng);
        self.pending = pending_id.and_then(|id| self.deck.index_of(&id));

        debug!("[Shuffled] {} cards", self.deck.len());
        self.publish(smallvec![SessionEvent::Shuffled]);
    }

    /// Start over: fresh deal of the same contents, score back to zero.
    ///
    /// Every card is rebuilt, so seen flags and bonus time are cleared too.
    pub fn reset(&mut self) {
        self.deck = Deck::from_contents(&self.contents, self.config.bonus_time_limit, &mut self.rng);
        self.score = 0;
        self.set_pending(None);

        debug!("[Reset] {} pairs re-dealt", self.contents.len());
        self.publish(smallvec![SessionEvent::Reset]);
    }
}

impl<C: Clone> GameSession<C> {
    /// Cards in table order.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        self.deck.cards()
    }

    /// Current score. May be negative.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Card by id.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card<C>> {
        self.deck.find(id)
    }

    /// Table position of the face-up card waiting for a partner.
    #[must_use]
    pub fn pending_index(&self) -> Option<usize> {
        self.pending
    }

    /// The face-up card waiting for a partner.
    #[must_use]
    pub fn pending_card(&self) -> Option<&Card<C>> {
        self.pending.and_then(|i| self.deck.get(i))
    }

    /// Bonus window fraction left for a card, right now.
    #[must_use]
    pub fn bonus_remaining(&self, id: &CardId) -> Option<f64> {
        let now = self.clock.now();
        self.deck.find(id).map(|card| card.bonus_remaining(now))
    }

    /// True once every card is matched. An empty table is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.deck.iter().all(Card::is_matched)
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Shuffle RNG state, for replaying the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Number of published changes so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Immutable view of the table and score, captured now.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<C> {
        let now = self.clock.now();
        Snapshot {
            cards: self.deck.iter().map(|card| CardView::capture(card, now)).collect(),
            score: self.score,
            generation: self.generation,
        }
    }

    /// Be told about every change from now on.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Notification<C>) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    /// Stop notifications. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    fn publish(&mut self, events: EventBatch) {
        self.generation += 1;
        if self.subscribers.is_empty() {
            return;
        }
        let notification = Notification {
            events,
            snapshot: self.snapshot(),
        };
        self.subscribers.notify(&notification);
    }
}

impl<C: Clone> std::fmt::Debug for GameSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("cards", &self.deck.len())
            .field("score", &self.score)
            .field("pending", &self.pending)
            .field("generation", &self.generation)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

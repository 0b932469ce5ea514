//! Change notifications.
//!
//! Presentation layers never observe the session's storage directly. They
//! subscribe, and after every mutating call that changed something each
//! subscriber receives one `Notification`: what happened, plus an immutable
//! snapshot of the table afterwards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::snapshot::Snapshot;
use crate::cards::CardId;

/// Something that happened during a mutating call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A chosen card was turned face-up.
    Flipped { id: CardId },
    /// Two cards matched. `points` includes both bonuses.
    Matched { first: CardId, second: CardId, points: i64 },
    /// Two cards did not match. `penalty` is 0, 1 or 2.
    Mismatched { first: CardId, second: CardId, penalty: i64 },
    /// The table was reordered.
    Shuffled,
    /// A fresh deal replaced the table and the score was cleared.
    Reset,
}

/// Events of a single call. A choice produces at most two.
pub type EventBatch = SmallVec<[SessionEvent; 2]>;

/// Delivered to subscribers after each state change.
#[derive(Clone, Debug)]
pub struct Notification<C: Clone> {
    pub events: EventBatch,
    pub snapshot: Snapshot<C>,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

type Callback<C> = Box<dyn FnMut(&Notification<C>)>;

/// Subscriber list, notified in subscription order.
pub(crate) struct Subscribers<C: Clone> {
    entries: Vec<(SubscriptionId, Callback<C>)>,
    next_id: u32,
}

impl<C: Clone> Default for Subscribers<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<C: Clone> Subscribers<C> {
    pub(crate) fn add(&mut self, callback: Callback<C>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, notification: &Notification<C>) {
        for (_, callback) in &mut self.entries {
            callback(notification);
        }
    }
}

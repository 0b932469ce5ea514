//! Game sessions: turn rules, scoring, snapshots and notifications.
//!
//! Presentation layers talk to `GameSession` only: `choose`, `shuffle`,
//! `reset` to act; `cards`, `score`, `snapshot` and `subscribe` to observe.

pub mod events;
pub mod game;
pub mod snapshot;

pub use events::{EventBatch, Notification, SessionEvent, SubscriptionId};
pub use game::{GameSession, MATCH_POINTS, SEEN_MISMATCH_PENALTY};
pub use snapshot::{CardChange, CardView, Snapshot};

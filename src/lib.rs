//! # memorize
//!
//! Game-state engine for a memory-matching card game.
//!
//! Cards are dealt in pairs and shuffled face-down. The player turns them
//! over two at a time looking for pairs. A match scores 2 points plus a
//! bonus for each card that decays the longer it sat face-up; a mismatch
//! costs a point for each of the two cards that had already been seen.
//!
//! ## Design Principles
//!
//! 1. **Rules only**: rendering, gestures, animation and layout belong to
//!    the presentation layer, which calls into `GameSession` and nothing else.
//!
//! 2. **Explicit transitions**: bonus timers start and stop inside the
//!    session's state changes, from clock reads taken there. No background
//!    timers.
//!
//! 3. **Snapshots, not shared state**: observers receive immutable
//!    `Snapshot`s through subscriptions.
//!
//! ## Modules
//!
//! - `core`: RNG, clocks, configuration
//! - `cards`: Card ids, cards with bonus timers, the deck
//! - `session`: Turn rules, scoring, snapshots, notifications
//! - `themes`: Named symbol pools and the theme catalog
//!
//! ## Example
//!
//! ```
//! use memorize::{SessionConfig, ThemeCatalog};
//!
//! let catalog = ThemeCatalog::default();
//! let theme = catalog.find("fruits").unwrap();
//! let mut game = catalog.instantiate_with(theme, SessionConfig::new().with_seed(7));
//!
//! let first = game.cards()[0].id();
//! game.choose(&first);
//! assert_eq!(game.pending_card().map(|c| c.id()), Some(first));
//! ```

pub mod cards;
pub mod core;
pub mod session;
pub mod themes;

// Re-export commonly used types
pub use crate::core::{
    Clock, FaceDownPolicy, GameRng, GameRngState, ManualClock, SessionConfig, SystemClock,
};

pub use crate::cards::{Card, CardId, Deck, ParseCardIdError, Slot};

pub use crate::session::{
    CardChange, CardView, GameSession, Notification, SessionEvent, Snapshot, SubscriptionId,
};

pub use crate::themes::{Theme, ThemeCatalog, ThemeColor, ThemeError, FALLBACK_SYMBOL};

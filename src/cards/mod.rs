//! Card system: ids, cards with bonus timers, and the deck.
//!
//! ## Key Types
//!
//! - `CardId`: `"{pair}{slot}"` identifier, unique within a deal
//! - `Card`: content plus face-up / matched / seen state and bonus timer
//! - `Deck`: the dealt cards in table order, with id lookup
//!
//! Content is generic. Anything `Clone + PartialEq` can sit on a card;
//! themes use emoji strings.

pub mod card;
pub mod deck;
pub mod id;

pub use card::Card;
pub use deck::Deck;
pub use id::{CardId, ParseCardIdError, Slot};

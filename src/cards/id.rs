//! Card identifiers.
//!
//! Every card in a deal has a unique `CardId`. The two cards of a pair share
//! a pair number and differ in their `Slot`, so `"3A"` and `"3B"` are the
//! two cards dealt for the third pair. Ids carry no content: two pairs that
//! happen to show the same symbol still have different ids.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which half of a pair a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// Both slots, in dealing order.
    pub const BOTH: [Slot; 2] = [Slot::A, Slot::B];

    /// The letter used in the textual id.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Slot::A => 'A',
            Slot::B => 'B',
        }
    }
}

/// Unique identifier for a card within a deal.
///
/// Renders and parses as `"{pair}{slot}"`, e.g. `"1A"`. Pair numbers are
/// 1-based.
///
/// ```
/// use memorize::cards::{CardId, Slot};
///
/// let id = CardId::for_pair_index(0, Slot::B);
/// assert_eq!(id.to_string(), "1B");
/// assert_eq!("1B".parse::<CardId>().unwrap(), id);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CardId {
    pair: u32,
    slot: Slot,
}

impl CardId {
    /// Create an id from a 1-based pair number.
    #[must_use]
    pub const fn new(pair: u32, slot: Slot) -> Self {
        Self { pair, slot }
    }

    /// Create an id from a 0-based pair index, as used while dealing.
    #[must_use]
    pub fn for_pair_index(pair_index: usize, slot: Slot) -> Self {
        let pair = u32::try_from(pair_index + 1).unwrap_or(u32::MAX);
        Self { pair, slot }
    }

    /// The 1-based pair number.
    #[must_use]
    pub const fn pair(self) -> u32 {
        self.pair
    }

    /// The slot within the pair.
    #[must_use]
    pub const fn slot(self) -> Slot {
        self.slot
    }

    /// The id of the other card in the same pair.
    #[must_use]
    pub const fn partner(self) -> Self {
        let slot = match self.slot {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        };
        Self { pair: self.pair, slot }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pair, self.slot.letter())
    }
}

/// Error returned when a string is not a valid card id.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid card id {0:?}: expected a pair number followed by A or B")]
pub struct ParseCardIdError(pub String);

impl FromStr for CardId {
    type Err = ParseCardIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardIdError(s.to_string());

        let slot = match s.chars().last() {
            Some('A') => Slot::A,
            Some('B') => Slot::B,
            _ => return Err(err()),
        };
        let digits = &s[..s.len() - 1];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let pair: u32 = digits.parse().map_err(|_| err())?;
        if pair == 0 {
            return Err(err());
        }

        Ok(Self { pair, slot })
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for CardId {
    type Error = ParseCardIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

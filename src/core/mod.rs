//! Core engine types: RNG, clocks, configuration.
//!
//! These are the building blocks the deck and session are parameterized by.

pub mod clock;
pub mod config;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{FaceDownPolicy, SessionConfig, DEFAULT_BONUS_TIME_LIMIT, DEFAULT_PAIR_COUNT};
pub use rng::{GameRng, GameRngState};

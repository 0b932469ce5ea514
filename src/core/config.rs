//! Session configuration.
//!
//! Presentation layers build a `SessionConfig` (usually from a theme) and
//! hand it to `GameSession::new`. Every field has a sensible default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of pairs dealt when nothing else is configured.
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Default window during which a face-up card still earns bonus points.
pub const DEFAULT_BONUS_TIME_LIMIT: Duration = Duration::from_secs(6);

/// Which cards are turned face-down when a new pair is started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaceDownPolicy {
    /// Every other card that is not matched goes face-down.
    /// Matched cards are left alone.
    #[default]
    SkipMatched,
    /// Every other card goes face-down, matched or not.
    ///
    /// This is the simplified historical rule. Matched cards are hidden by
    /// the presentation layer anyway, so play is unaffected, but their
    /// `has_been_seen` flag flips.
    All,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pairs to deal. Zero deals an empty table.
    pub pair_count: usize,

    /// Bonus window per card.
    pub bonus_time_limit: Duration,

    /// Shuffle seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Face-down rule when starting a new pair.
    pub face_down_policy: FaceDownPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            bonus_time_limit: DEFAULT_BONUS_TIME_LIMIT,
            seed: None,
            face_down_policy: FaceDownPolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the bonus window.
    #[must_use]
    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit = limit;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the face-down rule.
    #[must_use]
    pub fn with_face_down_policy(mut self, policy: FaceDownPolicy) -> Self {
        self.face_down_policy = policy;
        self
    }
}

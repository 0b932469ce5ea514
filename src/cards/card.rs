//! Cards and their bonus timers.
//!
//! A `Card` tracks orientation, match state, whether it has been seen, and
//! how long it has spent face-up while unmatched. The longer a card sits
//! face-up before its partner is found, the smaller its bonus.
//!
//! ## Timer transitions
//!
//! Timers are driven by explicit transition calls that receive the current
//! time; the card never reads a clock itself:
//!
//! - face-down -> face-up (unmatched, bonus left, no timer running): start
//! - face-up -> face-down, or becoming matched: fold elapsed time, stop
//!
//! ```
//! use std::time::Duration;
//! use memorize::cards::{Card, CardId, Slot};
//!
//! let card = Card::new(CardId::new(1, Slot::A), "🍎", Duration::from_secs(6));
//!
//! // Never shown: the whole window is still available.
//! assert_eq!(card.bonus_remaining(Duration::from_secs(60)), 1.0);
//! assert_eq!(card.bonus(Duration::from_secs(60)), 6);
//! ```

use std::fmt;
use std::time::Duration;

use log::trace;
use serde::{Deserialize, Serialize};

use super::id::CardId;

/// A single card in a deal.
///
/// Fields are read-only outside the crate; all mutation goes through the
/// session so the one-face-up-card rule holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card<C> {
    id: CardId,
    content: C,
    face_up: bool,
    matched: bool,
    seen: bool,

    /// When the running timer was started, if one is running.
    last_face_up: Option<Duration>,

    /// Face-up time accumulated by timers that have since stopped.
    past_face_up: Duration,

    bonus_time_limit: Duration,
}

impl<C> Card<C> {
    /// Create a face-down, unmatched, unseen card.
    #[must_use]
    pub fn new(id: CardId, content: C, bonus_time_limit: Duration) -> Self {
        Self {
            id,
            content,
            face_up: false,
            matched: false,
            seen: false,
            last_face_up: None,
            past_face_up: Duration::ZERO,
            bonus_time_limit,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// True once the card has been turned face-down after being shown.
    #[must_use]
    pub fn has_been_seen(&self) -> bool {
        self.seen
    }

    /// Face-up and waiting for a partner.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.face_up && !self.matched
    }

    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus_time_limit
    }

    /// Whether the bonus timer is currently running.
    #[must_use]
    pub fn is_timing(&self) -> bool {
        self.last_face_up.is_some()
    }

    /// Total face-up time while unmatched, including a running timer.
    #[must_use]
    pub fn face_up_duration(&self, now: Duration) -> Duration {
        match self.last_face_up {
            Some(started) => self.past_face_up + now.saturating_sub(started),
            None => self.past_face_up,
        }
    }

    /// Fraction of the bonus window still left, from 1.0 down to 0.0.
    ///
    /// Always 0.0 when the bonus window is zero.
    #[must_use]
    pub fn bonus_remaining(&self, now: Duration) -> f64 {
        let limit = self.bonus_time_limit.as_secs_f64();
        if limit > 0.0 {
            let used = self.face_up_duration(now).as_secs_f64();
            (limit - used).max(0.0) / limit
        } else {
            0.0
        }
    }

    /// Bonus points this card would earn if matched at `now`.
    ///
    /// Whole seconds of unused bonus window, truncated.
    #[must_use]
    pub fn bonus(&self, now: Duration) -> i64 {
        (self.bonus_time_limit.as_secs_f64() * self.bonus_remaining(now)).floor() as i64
    }

    /// Turn the card face-up or face-down.
    ///
    /// Starts or stops the bonus timer, and marks the card seen on a
    /// face-up to face-down edge. Returns whether orientation changed.
    pub(crate) fn set_face_up(&mut self, face_up: bool, now: Duration) -> bool {
        let was_face_up = self.face_up;
        self.face_up = face_up;

        if face_up {
            self.start_bonus_timer(now);
        } else {
            self.stop_bonus_timer(now);
        }

        if was_face_up && !face_up {
            self.seen = true;
        }

        was_face_up != face_up
    }

    /// Mark the card matched. Stops the bonus timer for good.
    pub(crate) fn set_matched(&mut self, now: Duration) {
        self.matched = true;
        self.stop_bonus_timer(now);
    }

    fn start_bonus_timer(&mut self, now: Duration) {
        if self.face_up && !self.matched && self.bonus_remaining(now) > 0.0 && self.last_face_up.is_none() {
            trace!("[Bonus] {} timer started at {:?}", self.id, now);
            self.last_face_up = Some(now);
        }
    }

    fn stop_bonus_timer(&mut self, now: Duration) {
        if self.last_face_up.is_some() {
            trace!("[Bonus] {} timer stopped at {:?}", self.id, now);
        }
        self.past_face_up = self.face_up_duration(now);
        self.last_face_up = None;
    }
}

/// Terminal width of a log line, counting emoji as two columns.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if u32::from(c) > 0x238C { 2 } else { 1 }).sum()
}

/// `"{id} {content} up"` or `"... dw"`; matched cards print as blanks of
/// the same width so logged rows stay aligned.
impl<C: fmt::Display> fmt::Display for Card<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = format!(
            "{} {} {}",
            self.id,
            self.content,
            if self.face_up { "up" } else { "dw" }
        );
        if self.matched {
            write!(f, "{}", " ".repeat(display_width(&info)))
        } else {
            f.write_str(&info)
        }
    }
}

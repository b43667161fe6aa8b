//! Stabilization of noisy recognizer output.

use core::time::Duration;

use tracing::{debug, trace};

use crate::card::Card;
use crate::options::CounterOptions;
use crate::recognition;

pub mod state;

pub use state::{DetectionPhase, DetectionState, Observation};

/// Turns a periodically sampled, noisy classification stream into confirmed
/// card events.
///
/// A card is confirmed once its streak of identical readings reaches the
/// stability threshold. Each streak confirms at most once, so a card that
/// stays in view is not applied again. A card identical to the previous
/// confirmation waits until the cooldown has elapsed; if it is still in
/// view after that, the next reading confirms it. A "no card" reading is
/// confirmed at once and drops any pending card.
///
/// Timestamps are supplied by the caller and only need to be monotonic.
/// Long gaps between readings neither confirm nor reset anything.
#[derive(Debug, Clone)]
pub struct DetectionStabilizer {
    state: DetectionState,
    phase: DetectionPhase,
    /// Most recent confirmation, kept for the cooldown check.
    last_confirmation: Option<(Card, Duration)>,
    /// Whether the current streak has already produced a confirmation.
    delivered: bool,
    stability_threshold: u32,
    cooldown: Duration,
}

impl DetectionStabilizer {
    /// Creates a stabilizer in the idle phase.
    #[must_use]
    pub fn new(options: &CounterOptions) -> Self {
        Self {
            state: DetectionState::default(),
            phase: DetectionPhase::Idle,
            last_confirmation: None,
            delivered: false,
            stability_threshold: options.stability_threshold.max(1),
            cooldown: options.cooldown,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> DetectionPhase {
        self.phase
    }

    /// Returns the tracked fields.
    #[must_use]
    pub const fn state(&self) -> &DetectionState {
        &self.state
    }

    /// Records a raw reading taken at `now`.
    ///
    /// Cards with illegal ranks are treated as "no card".
    pub fn observe(&mut self, raw: Option<Card>, now: Duration) -> DetectionPhase {
        let observation = Observation::from_raw(raw);
        trace!(?observation, ?now, "observation");

        if self.state.last_observation == Some(observation) {
            self.state.stability_streak = self.state.stability_streak.saturating_add(1);
        } else {
            self.state = DetectionState {
                last_observation: Some(observation),
                stability_streak: 1,
                confirmed_card: None,
                confirmed_at: None,
            };
            self.phase = DetectionPhase::Accumulating;
            self.delivered = false;
        }

        match observation {
            Observation::NoCard => self.phase = DetectionPhase::Confirmed,
            Observation::Card(card)
                if !self.delivered && self.state.stability_streak >= self.stability_threshold =>
            {
                if self.cooling_down(card, now) {
                    debug!(%card, "confirmation suppressed by cooldown");
                } else {
                    self.state.confirmed_card = Some(card);
                    self.state.confirmed_at = Some(now);
                    self.last_confirmation = Some((card, now));
                    self.delivered = true;
                    self.phase = DetectionPhase::Confirmed;
                    debug!(%card, ?now, "card confirmed");
                }
            }
            Observation::Card(_) => {}
        }

        self.phase
    }

    /// Parses a recognizer reply and records it as a reading taken at `now`.
    pub fn observe_reply(&mut self, reply: &str, now: Duration) -> DetectionPhase {
        self.observe(recognition::parse_reply(reply).card(), now)
    }

    /// Takes the confirmed card, if one is pending.
    ///
    /// Each confirmation is handed out at most once. Taking it returns the
    /// stabilizer to [`DetectionPhase::Accumulating`].
    pub fn poll_confirmed(&mut self) -> Option<Card> {
        let card = self.state.confirmed_card.take()?;
        self.state.confirmed_at = None;
        self.phase = DetectionPhase::Accumulating;
        Some(card)
    }

    /// Returns the confirmed card without consuming it.
    #[must_use]
    pub const fn peek_confirmed(&self) -> Option<Card> {
        self.state.confirmed_card
    }

    /// Forgets every reading, including the cooldown memory.
    pub fn reset(&mut self) {
        self.state = DetectionState::default();
        self.phase = DetectionPhase::Idle;
        self.last_confirmation = None;
        self.delivered = false;
    }

    fn cooling_down(&self, card: Card, now: Duration) -> bool {
        self.last_confirmation
            .is_some_and(|(last, at)| last == card && now.saturating_sub(at) < self.cooldown)
    }
}

impl Default for DetectionStabilizer {
    fn default() -> Self {
        Self::new(&CounterOptions::default())
    }
}

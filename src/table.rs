//! A single-seat table: the count, the current hand and the detection feed.

use core::time::Duration;

use tracing::debug;

use crate::card::Card;
use crate::detect::{DetectionPhase, DetectionStabilizer};
use crate::engine::{CountEngine, CountState};
use crate::error::InvalidCardError;
use crate::hand::Hand;
use crate::options::CounterOptions;
use crate::strategy::Recommendation;
use crate::sync::ObservationSlot;

/// Where an assigned card goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Appended to the player hand.
    Player,
    /// Replaces the dealer up-card.
    Dealer,
}

/// Glue between a front end and the counting core.
///
/// Owns one [`CountEngine`], one [`DetectionStabilizer`], the player hand and
/// the dealer up-card. Front ends read state through the accessors and
/// change it only through the methods below.
#[derive(Debug, Clone)]
pub struct Table {
    engine: CountEngine,
    detector: DetectionStabilizer,
    player_hand: Hand,
    dealer_up_card: Option<Card>,
}

impl Table {
    /// Creates a table with a fresh count and empty hands.
    #[must_use]
    pub fn new(options: CounterOptions) -> Self {
        Self {
            detector: DetectionStabilizer::new(&options),
            engine: CountEngine::new(options),
            player_hand: Hand::new(),
            dealer_up_card: None,
        }
    }

    /// Returns the count engine.
    #[must_use]
    pub const fn engine(&self) -> &CountEngine {
        &self.engine
    }

    /// Returns the detection stabilizer.
    #[must_use]
    pub const fn detector(&self) -> &DetectionStabilizer {
        &self.detector
    }

    /// Returns the current count.
    #[must_use]
    pub const fn count(&self) -> CountState {
        self.engine.state()
    }

    /// Returns the player hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer up-card.
    #[must_use]
    pub const fn dealer_up_card(&self) -> Option<Card> {
        self.dealer_up_card
    }

    /// Counts a card without placing it in either hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the card's rank is illegal.
    pub fn update_count(&mut self, card: Card) -> Result<CountState, InvalidCardError> {
        self.engine.update_count(card)
    }

    /// Counts a card and places it at `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the card's rank is illegal; nothing changes.
    pub fn assign(&mut self, target: Target, card: Card) -> Result<CountState, InvalidCardError> {
        let state = self.engine.update_count(card)?;
        match target {
            Target::Player => self.player_hand.add_card(card)?,
            Target::Dealer => self.dealer_up_card = Some(card),
        }
        debug!(%card, ?target, "card assigned");
        Ok(state)
    }

    /// Feeds one raw recognizer reading taken at `now`.
    pub fn observe(&mut self, raw: Option<Card>, now: Duration) -> DetectionPhase {
        self.detector.observe(raw, now)
    }

    /// Parses and feeds one recognizer reply taken at `now`.
    pub fn observe_reply(&mut self, reply: &str, now: Duration) -> DetectionPhase {
        self.detector.observe_reply(reply, now)
    }

    /// Feeds the newest reading waiting in `slot`, if any.
    pub fn drain(&mut self, slot: &ObservationSlot) -> Option<DetectionPhase> {
        slot.take()
            .map(|(observation, at)| self.detector.observe(observation.card(), at))
    }

    /// Moves a confirmed detection to `target`.
    ///
    /// Without a target the confirmation stays pending so the front end can
    /// ask where it belongs. Returns the card that was applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the confirmed card's rank is illegal.
    pub fn apply_detection(
        &mut self,
        target: Option<Target>,
    ) -> Result<Option<Card>, InvalidCardError> {
        let Some(target) = target else {
            return Ok(None);
        };
        let Some(card) = self.detector.poll_confirmed() else {
            return Ok(None);
        };
        self.assign(target, card)?;
        Ok(Some(card))
    }

    /// Clears both hands. The count carries over.
    pub fn new_hand(&mut self) {
        self.player_hand.clear();
        self.dealer_up_card = None;
        debug!("new hand");
    }

    /// Sets the decks-remaining estimate (clamped).
    pub fn set_decks_remaining(&mut self, value: f64) -> CountState {
        self.engine.set_decks_remaining(value)
    }

    /// Adds one deck step.
    pub fn increment_decks(&mut self) -> CountState {
        self.engine.increment_decks()
    }

    /// Removes one deck step.
    pub fn decrement_decks(&mut self) -> CountState {
        self.engine.decrement_decks()
    }

    /// Removes one deck step, wrapping to a full shoe at the floor.
    pub fn adjust_decks_cycle(&mut self) -> CountState {
        self.engine.adjust_decks_cycle()
    }

    /// Resets the count and the shoe size.
    pub fn reset_count(&mut self) -> CountState {
        self.engine.reset_count()
    }

    /// Value of the player hand.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.engine.hand_value(&self.player_hand)
    }

    /// Advice for the current hands at the current true count.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer up-card's rank is illegal.
    pub fn recommendation(&self) -> Result<Recommendation, InvalidCardError> {
        self.engine.recommend(&self.player_hand, self.dealer_up_card)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(CounterOptions::default())
    }
}

//! Running count, shoe penetration and strategy advice.

use tracing::{debug, warn};

use crate::card::Card;
use crate::error::InvalidCardError;
use crate::hand::Hand;
use crate::options::CounterOptions;
use crate::strategy::{self, Recommendation};

#[cfg(feature = "std")]
fn round(value: f64) -> f64 {
    value.round()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round(value: f64) -> f64 {
    libm::round(value)
}

/// Snapshot of the count.
///
/// The true count is derived on every read, so it can never fall out of
/// step with the running count or the decks remaining.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountState {
    running_count: i32,
    decks_remaining: f64,
}

impl CountState {
    /// Cumulative Hi-Lo sum since the last reset.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Estimated decks left in the shoe.
    #[must_use]
    pub const fn decks_remaining(&self) -> f64 {
        self.decks_remaining
    }

    /// Running count divided by decks remaining.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        f64::from(self.running_count) / self.decks_remaining
    }

    /// True count rounded to the nearest integer (halves away from zero).
    #[must_use]
    pub fn true_count_index(&self) -> i32 {
        round(self.true_count()) as i32
    }
}

/// Hi-Lo counter and recommendation calculator.
///
/// Every operation is synchronous and performs no I/O. Mutating operations
/// return the resulting [`CountState`].
#[derive(Debug, Clone)]
pub struct CountEngine {
    state: CountState,
    options: CounterOptions,
}

impl CountEngine {
    /// Creates an engine with a zero count and a full starting shoe.
    #[must_use]
    pub fn new(options: CounterOptions) -> Self {
        let decks = clamp_decks(options.starting_decks, &options);
        Self {
            state: CountState {
                running_count: 0,
                decks_remaining: decks,
            },
            options,
        }
    }

    /// Returns the engine options.
    #[must_use]
    pub const fn options(&self) -> &CounterOptions {
        &self.options
    }

    /// Returns the current count.
    #[must_use]
    pub const fn state(&self) -> CountState {
        self.state
    }

    /// Adds the Hi-Lo weight of `card` to the running count.
    ///
    /// # Errors
    ///
    /// Returns an error if the card's rank is illegal; the count is unchanged.
    pub fn update_count(&mut self, card: Card) -> Result<CountState, InvalidCardError> {
        let weight = card.hi_lo_weight().inspect_err(|err| {
            warn!(rank = card.rank, %err, "rejected card");
        })?;
        self.state.running_count += weight;
        debug!(
            %card,
            weight,
            running_count = self.state.running_count,
            true_count = self.state.true_count(),
            "count updated"
        );
        Ok(self.state)
    }

    /// Sets the decks-remaining estimate, clamped to the configured bounds.
    ///
    /// A NaN leaves the estimate unchanged.
    pub fn set_decks_remaining(&mut self, value: f64) -> CountState {
        if value.is_nan() {
            warn!("ignored NaN decks remaining");
            return self.state;
        }
        self.state.decks_remaining = clamp_decks(value, &self.options);
        debug!(
            decks_remaining = self.state.decks_remaining,
            true_count = self.state.true_count(),
            "decks remaining set"
        );
        self.state
    }

    /// Adds one step to the decks-remaining estimate, stopping at the maximum.
    pub fn increment_decks(&mut self) -> CountState {
        self.set_decks_remaining(self.state.decks_remaining + self.options.deck_step)
    }

    /// Removes one step from the decks-remaining estimate, stopping at the
    /// minimum.
    pub fn decrement_decks(&mut self) -> CountState {
        self.set_decks_remaining(self.state.decks_remaining - self.options.deck_step)
    }

    /// Removes one step; landing on the minimum starts a fresh shoe at the
    /// maximum instead.
    pub fn adjust_decks_cycle(&mut self) -> CountState {
        let decks = clamp_decks(
            self.state.decks_remaining - self.options.deck_step,
            &self.options,
        );
        let decks = if decks <= deck_floor(&self.options) {
            self.options.max_decks
        } else {
            decks
        };
        self.set_decks_remaining(decks)
    }

    /// Zeroes the running count and restores the starting shoe size.
    pub fn reset_count(&mut self) -> CountState {
        self.state = CountState {
            running_count: 0,
            decks_remaining: clamp_decks(self.options.starting_decks, &self.options),
        };
        debug!(decks_remaining = self.state.decks_remaining, "count reset");
        self.state
    }

    /// Value of `hand` with aces resolved.
    #[must_use]
    pub fn hand_value(&self, hand: &Hand) -> u8 {
        hand.value()
    }

    /// Recommends a play for `player_hand` against `dealer_up_card` at the
    /// current true count.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer up-card's rank is illegal.
    pub fn recommend(
        &self,
        player_hand: &Hand,
        dealer_up_card: Option<Card>,
    ) -> Result<Recommendation, InvalidCardError> {
        let Some(dealer) = dealer_up_card else {
            return Ok(Recommendation::NeedMoreInfo);
        };
        let dealer_value = dealer.dealer_value()?;
        if player_hand.is_empty() {
            return Ok(Recommendation::NeedMoreInfo);
        }

        Ok(strategy::decide(
            self.hand_value(player_hand),
            dealer_value,
            self.state.true_count(),
        ))
    }
}

impl Default for CountEngine {
    fn default() -> Self {
        Self::new(CounterOptions::default())
    }
}

/// Smallest estimate ever used: one card's worth of a deck.
const ONE_CARD: f64 = 1.0 / 52.0;

fn deck_floor(options: &CounterOptions) -> f64 {
    options.min_decks.max(ONE_CARD)
}

fn clamp_decks(value: f64, options: &CounterOptions) -> f64 {
    // Bounds come from options and may be inverted; f64::clamp would panic.
    value
        .max(deck_floor(options))
        .min(options.max_decks)
        .max(ONE_CARD)
}

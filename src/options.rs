//! Counter configuration options.

use core::time::Duration;

/// Configuration options for a [`CountEngine`](crate::CountEngine) and a
/// [`DetectionStabilizer`](crate::DetectionStabilizer).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcount::CounterOptions;
/// use core::time::Duration;
///
/// let options = CounterOptions::default()
///     .with_starting_decks(8.0)
///     .with_stability_threshold(3)
///     .with_cooldown(Duration::from_millis(1500));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CounterOptions {
    /// Shoe size restored by a count reset.
    pub starting_decks: f64,
    /// Lowest decks-remaining estimate.
    pub min_decks: f64,
    /// Highest decks-remaining estimate (a full shoe).
    pub max_decks: f64,
    /// Amount each deck adjustment moves the estimate.
    pub deck_step: f64,
    /// Identical consecutive readings needed to confirm a card.
    pub stability_threshold: u32,
    /// Window in which an identical card is not confirmed again.
    pub cooldown: Duration,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            starting_decks: 6.0,
            min_decks: 0.5,
            max_decks: 8.0,
            deck_step: 0.5,
            stability_threshold: 2,
            cooldown: Duration::from_secs(1),
        }
    }
}

impl CounterOptions {
    /// Sets the shoe size restored by a count reset.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::CounterOptions;
    ///
    /// let options = CounterOptions::default().with_starting_decks(2.0);
    /// assert_eq!(options.starting_decks, 2.0);
    /// ```
    #[must_use]
    pub const fn with_starting_decks(mut self, decks: f64) -> Self {
        self.starting_decks = decks;
        self
    }

    /// Sets the bounds of the decks-remaining estimate.
    ///
    /// The estimate never drops below one card (1/52 of a deck), whatever
    /// `min` is, so the true count stays finite.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::CounterOptions;
    ///
    /// let options = CounterOptions::default().with_deck_bounds(1.0, 6.0);
    /// assert_eq!(options.min_decks, 1.0);
    /// assert_eq!(options.max_decks, 6.0);
    /// ```
    #[must_use]
    pub const fn with_deck_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_decks = min;
        self.max_decks = max;
        self
    }

    /// Sets the deck adjustment step.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::CounterOptions;
    ///
    /// let options = CounterOptions::default().with_deck_step(0.25);
    /// assert_eq!(options.deck_step, 0.25);
    /// ```
    #[must_use]
    pub const fn with_deck_step(mut self, step: f64) -> Self {
        self.deck_step = step;
        self
    }

    /// Sets how many identical readings confirm a card.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::CounterOptions;
    ///
    /// let options = CounterOptions::default().with_stability_threshold(3);
    /// assert_eq!(options.stability_threshold, 3);
    /// ```
    #[must_use]
    pub const fn with_stability_threshold(mut self, readings: u32) -> Self {
        self.stability_threshold = readings;
        self
    }

    /// Sets the re-confirmation cooldown.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::CounterOptions;
    /// use core::time::Duration;
    ///
    /// let options = CounterOptions::default().with_cooldown(Duration::ZERO);
    /// assert_eq!(options.cooldown, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }
}

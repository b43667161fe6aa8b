//! Detection state types.

use core::time::Duration;

use crate::card::Card;

/// A single raw reading from the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observation {
    /// A card with a legal rank is in frame.
    Card(Card),
    /// Nothing recognizable is in frame.
    NoCard,
}

impl Observation {
    /// Converts a raw reading. Missing cards and illegal ranks both become
    /// [`Observation::NoCard`].
    #[must_use]
    pub const fn from_raw(raw: Option<Card>) -> Self {
        match raw {
            Some(card) if card.is_valid() => Self::Card(card),
            _ => Self::NoCard,
        }
    }

    /// Returns the observed card, if any.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Self::Card(card) => Some(card),
            Self::NoCard => None,
        }
    }
}

impl From<Option<Card>> for Observation {
    fn from(raw: Option<Card>) -> Self {
        Self::from_raw(raw)
    }
}

/// Detection phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionPhase {
    /// Nothing observed yet.
    #[default]
    Idle,
    /// A candidate is tracked but not confirmed.
    Accumulating,
    /// The tracked candidate has been confirmed.
    Confirmed,
}

/// Fields tracked between observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectionState {
    /// The candidate being tracked.
    pub last_observation: Option<Observation>,
    /// Consecutive identical readings of the candidate.
    pub stability_streak: u32,
    /// Confirmed card waiting to be consumed.
    pub confirmed_card: Option<Card>,
    /// Time at which `confirmed_card` was confirmed.
    pub confirmed_at: Option<Duration>,
}

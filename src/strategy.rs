//! Count-aware play recommendation.

use core::fmt;

/// Play advice for the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// The player hand is empty or the dealer up-card is unknown.
    NeedMoreInfo,
    /// Take another card.
    Hit,
    /// Take no more cards.
    Stand,
    /// Double the bet and take exactly one card.
    DoubleDown,
}

impl Recommendation {
    /// Text shown to the player.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NeedMoreInfo => "Need player and dealer cards",
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::DoubleDown => "Double Down",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision table for a player total against a dealer up-card value
/// (2-11, Ace = 11). First matching row wins.
///
/// Doubling on 9 is gated on the true count being at least 1.
#[must_use]
pub fn decide(total: u8, dealer_value: u8, true_count: f64) -> Recommendation {
    match total {
        0..=8 => Recommendation::Hit,
        9 if matches!(dealer_value, 3..=6) && true_count >= 1.0 => Recommendation::DoubleDown,
        9 => Recommendation::Hit,
        10 if dealer_value <= 9 => Recommendation::DoubleDown,
        10 => Recommendation::Hit,
        11 => Recommendation::DoubleDown,
        12 if matches!(dealer_value, 4..=6) => Recommendation::Stand,
        12 => Recommendation::Hit,
        13..=16 if dealer_value <= 6 => Recommendation::Stand,
        13..=16 => Recommendation::Hit,
        _ => Recommendation::Stand,
    }
}

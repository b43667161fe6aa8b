//! Card ranks and their counting values.

use core::fmt;
use core::str::FromStr;

use crate::error::InvalidCardError;

/// Rank symbols in display order, indexed by `rank - 1`.
const SYMBOLS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// A playing card, identified by rank only.
///
/// Suits never matter for counting or strategy, so they are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Ace.
    pub const ACE: Self = Self::new(1);
    /// Ten.
    pub const TEN: Self = Self::new(10);
    /// Jack.
    pub const JACK: Self = Self::new(11);
    /// Queen.
    pub const QUEEN: Self = Self::new(12);
    /// King.
    pub const KING: Self = Self::new(13);

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Engine operations
    /// reject values outside 1..=13 with [`InvalidCardError`].
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self { rank }
    }

    /// Creates a card, rejecting ranks outside 1..=13.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError::Rank`] for an illegal rank.
    pub const fn try_new(rank: u8) -> Result<Self, InvalidCardError> {
        Self::new(rank).validate()
    }

    /// Returns whether the rank is one of the 13 legal ranks.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self.rank, 1..=13)
    }

    /// Returns the card itself if its rank is legal.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError::Rank`] for an illegal rank.
    pub const fn validate(self) -> Result<Self, InvalidCardError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(InvalidCardError::Rank(self.rank))
        }
    }

    /// Hi-Lo weight: +1 for 2-6, 0 for 7-9, -1 for tens, faces and aces.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError::Rank`] for an illegal rank.
    pub const fn hi_lo_weight(self) -> Result<i32, InvalidCardError> {
        match self.rank {
            2..=6 => Ok(1),
            7..=9 => Ok(0),
            1 | 10..=13 => Ok(-1),
            _ => Err(InvalidCardError::Rank(self.rank)),
        }
    }

    /// Value of the card before any ace downgrade. Aces count 11.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError::Rank`] for an illegal rank.
    pub const fn hand_value(self) -> Result<u8, InvalidCardError> {
        match self.rank {
            1 => Ok(11),
            2..=10 => Ok(self.rank),
            11..=13 => Ok(10),
            _ => Err(InvalidCardError::Rank(self.rank)),
        }
    }

    /// Numeric value of a dealer up-card: faces are 10, an Ace is 11.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError::Rank`] for an illegal rank.
    pub const fn dealer_value(self) -> Result<u8, InvalidCardError> {
        self.hand_value()
    }

    /// Returns the rank symbol (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn symbol(self) -> Option<&'static str> {
        if self.is_valid() {
            Some(SYMBOLS[self.rank as usize - 1])
        } else {
            None
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => f.write_str(symbol),
            None => write!(f, "?{}", self.rank),
        }
    }
}

impl FromStr for Card {
    type Err = InvalidCardError;

    /// Parses a rank symbol. Letters are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SYMBOLS
            .iter()
            .position(|symbol| symbol.eq_ignore_ascii_case(s))
            .map(|index| Self::new(index as u8 + 1))
            .ok_or(InvalidCardError::Symbol)
    }
}

/// All 13 legal ranks, Ace first.
pub const ALL_RANKS: [Card; 13] = {
    let mut cards = [Card::ACE; 13];
    let mut i = 0;
    while i < 13 {
        cards[i] = Card::new(i as u8 + 1);
        i += 1;
    }
    cards
};

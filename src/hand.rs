//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::InvalidCardError;

/// Sums the cards, then downgrades aces from 11 to 1 one at a time while
/// the total is over 21. Totals above `u8::MAX` saturate.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.rank == 1 {
            aces += 1;
        }
        // Cards are validated on insertion.
        value += u32::from(card.hand_value().unwrap_or(0));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// The player's hand.
///
/// Only grows by appending or is reset as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds a hand from rank symbols such as `["A", "K"]`.
    ///
    /// # Errors
    ///
    /// Returns an error if any symbol is not a legal rank.
    pub fn from_symbols(symbols: &[&str]) -> Result<Self, InvalidCardError> {
        let cards = symbols
            .iter()
            .map(|symbol| symbol.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cards })
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the card's rank is illegal; the hand is unchanged.
    pub fn add_card(&mut self, card: Card) -> Result<(), InvalidCardError> {
        self.cards.push(card.validate()?);
        Ok(())
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

//! Error types for count and strategy operations.

use thiserror::Error;

/// A card that is not one of the 13 legal ranks.
///
/// This signals an integration error (a caller handed the engine something
/// that is not a card). Noisy recognizer output is never reported this way;
/// the detection path treats it as "no card" instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCardError {
    /// Rank outside 1..=13.
    #[error("invalid card rank {0}")]
    Rank(u8),
    /// String that is not a rank symbol.
    #[error("unrecognized card symbol")]
    Symbol,
}

//! Hi-Lo card counting and count-aware play advice for blackjack, with
//! optional `no_std` support.
//!
//! The crate provides a [`CountEngine`] that tracks the running count, the
//! decks remaining and the derived true count, and recommends hit, stand or
//! double down. A [`DetectionStabilizer`] turns a noisy stream of card
//! recognitions into confirmed card events, and a [`Table`] ties both to a
//! player hand and a dealer up-card.
//!
//! # Example
//!
//! ```
//! use bjcount::{Card, CounterOptions, Recommendation, Table, Target};
//!
//! let mut table = Table::new(CounterOptions::default());
//! table.assign(Target::Player, Card::new(5)).unwrap();
//! table.assign(Target::Player, Card::new(6)).unwrap();
//! table.assign(Target::Dealer, Card::KING).unwrap();
//! assert_eq!(table.count().running_count(), 1);
//! assert_eq!(table.recommendation(), Ok(Recommendation::DoubleDown));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod detect;
pub mod engine;
pub mod error;
pub mod hand;
pub mod options;
pub mod recognition;
pub mod strategy;
mod sync;
pub mod table;

// Re-export main types
pub use card::{ALL_RANKS, Card};
pub use detect::{DetectionPhase, DetectionStabilizer, DetectionState, Observation};
pub use engine::{CountEngine, CountState};
pub use error::InvalidCardError;
pub use hand::Hand;
pub use options::CounterOptions;
pub use strategy::Recommendation;
pub use sync::ObservationSlot;
pub use table::{Table, Target};

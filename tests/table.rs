//! Table integration tests.

#![allow(clippy::float_cmp, clippy::std_instead_of_alloc)]

use std::sync::Arc;
use std::thread;

use core::time::Duration;

use bjcount::{
    Card, CounterOptions, DetectionPhase, InvalidCardError, Observation, ObservationSlot,
    Recommendation, Table, Target,
};

fn secs(value: u64) -> Duration {
    Duration::from_secs(value)
}

#[test]
fn assign_counts_and_places_cards() {
    let mut table = Table::default();
    table.assign(Target::Player, Card::new(9)).unwrap();
    assert_eq!(table.recommendation(), Ok(Recommendation::NeedMoreInfo));

    let state = table.assign(Target::Dealer, Card::new(5)).unwrap();
    assert_eq!(state.running_count(), 1);
    assert_eq!(table.dealer_up_card(), Some(Card::new(5)));
    assert_eq!(table.player_value(), 9);
    assert_eq!(table.recommendation(), Ok(Recommendation::Hit));

    // Replacing the dealer card still counts it.
    table.assign(Target::Dealer, Card::KING).unwrap();
    assert_eq!(table.dealer_up_card(), Some(Card::KING));
    assert_eq!(table.count().running_count(), 0);
}

#[test]
fn assign_rejects_illegal_card_without_side_effects() {
    let mut table = Table::default();
    assert_eq!(
        table.assign(Target::Player, Card::new(0)),
        Err(InvalidCardError::Rank(0))
    );
    assert!(table.player_hand().is_empty());
    assert_eq!(table.count().running_count(), 0);
}

#[test]
fn new_hand_keeps_the_count() {
    let mut table = Table::default();
    table.assign(Target::Player, Card::new(4)).unwrap();
    table.assign(Target::Dealer, Card::new(6)).unwrap();
    table.update_count(Card::new(3)).unwrap();

    table.new_hand();
    assert!(table.player_hand().is_empty());
    assert_eq!(table.dealer_up_card(), None);
    assert_eq!(table.count().running_count(), 3);

    assert_eq!(table.reset_count().running_count(), 0);
}

#[test]
fn deck_controls_delegate_to_engine() {
    let mut table = Table::default();
    assert_eq!(table.increment_decks().decks_remaining(), 6.5);
    assert_eq!(table.decrement_decks().decks_remaining(), 6.0);
    assert_eq!(table.adjust_decks_cycle().decks_remaining(), 5.5);
    assert_eq!(table.set_decks_remaining(0.5).decks_remaining(), 0.5);
    assert_eq!(table.adjust_decks_cycle().decks_remaining(), 8.0);
}

#[test]
fn confirmed_detection_goes_where_the_caller_says() {
    let mut table = Table::default();
    table.observe_reply("5 of hearts", secs(0));
    assert_eq!(table.observe_reply("5 of hearts", secs(1)), DetectionPhase::Confirmed);

    // No target yet: the card waits.
    assert_eq!(table.apply_detection(None), Ok(None));
    assert_eq!(table.detector().peek_confirmed(), Some(Card::new(5)));

    assert_eq!(table.apply_detection(Some(Target::Player)), Ok(Some(Card::new(5))));
    assert_eq!(table.player_hand().cards(), [Card::new(5)]);
    assert_eq!(table.count().running_count(), 1);

    // Still in view: nothing new to apply.
    table.observe_reply("5 of hearts", secs(2));
    assert_eq!(table.apply_detection(Some(Target::Player)), Ok(None));

    table.observe(None, secs(3));
    table.observe(Some(Card::new(6)), secs(4));
    table.observe(Some(Card::new(6)), secs(5));
    assert_eq!(table.apply_detection(Some(Target::Dealer)), Ok(Some(Card::new(6))));
    assert_eq!(table.dealer_up_card(), Some(Card::new(6)));
    assert_eq!(table.count().running_count(), 2);
    assert_eq!(table.recommendation(), Ok(Recommendation::Hit));
}

#[test]
fn ace_totals_and_eleven() {
    let mut table = Table::new(CounterOptions::default());
    table.assign(Target::Player, Card::TEN).unwrap();
    table.assign(Target::Player, Card::ACE).unwrap();
    table.assign(Target::Dealer, Card::new(6)).unwrap();
    assert_eq!(table.player_value(), 21);
    assert_eq!(table.recommendation(), Ok(Recommendation::Stand));

    table.new_hand();
    table.assign(Target::Player, Card::TEN).unwrap();
    table.assign(Target::Player, Card::new(1)).unwrap();
    table.assign(Target::Player, Card::KING).unwrap();
    assert_eq!(table.player_value(), 21);

    table.new_hand();
    table.assign(Target::Player, Card::new(9)).unwrap();
    table.assign(Target::Player, Card::new(2)).unwrap();
    table.assign(Target::Dealer, Card::new(6)).unwrap();
    assert_eq!(table.recommendation(), Ok(Recommendation::DoubleDown));
}

#[test]
fn slot_keeps_only_the_newest_reading() {
    let slot = ObservationSlot::new();
    assert!(!slot.is_pending());
    assert_eq!(slot.publish(Observation::Card(Card::ACE), secs(0)), None);
    assert_eq!(
        slot.publish(Observation::NoCard, secs(1)),
        Some((Observation::Card(Card::ACE), secs(0)))
    );
    assert_eq!(slot.take(), Some((Observation::NoCard, secs(1))));
    assert_eq!(slot.take(), None);
}

#[test]
fn worker_thread_feeds_table_through_slot() {
    let slot = Arc::new(ObservationSlot::new());
    let mut table = Table::default();

    for tick in 0..2 {
        let producer = Arc::clone(&slot);
        thread::spawn(move || {
            producer.publish(Observation::Card(Card::QUEEN), secs(tick));
        })
        .join()
        .unwrap();

        assert!(table.drain(&slot).is_some());
    }
    assert_eq!(table.drain(&slot), None);

    assert_eq!(table.apply_detection(Some(Target::Dealer)), Ok(Some(Card::QUEEN)));
    assert_eq!(table.count().running_count(), -1);
}

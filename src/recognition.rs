//! Parsing of recognizer replies.
//!
//! The recognizer answers with a short phrase naming a rank and suit
//! ("7 of hearts", "King of spades") or a "no card" phrase ("No card
//! detected"). Anything without a legal rank parses as
//! [`Observation::NoCard`]; recognition noise is never an error.

use crate::card::Card;
use crate::detect::Observation;

const SUITS: [&str; 4] = ["hearts", "diamonds", "clubs", "spades"];

const RANK_WORDS: [(&str, u8); 13] = [
    ("ace", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("jack", 11),
    ("queen", 12),
    ("king", 13),
];

/// Parses a recognizer reply into an observation.
///
/// # Example
///
/// ```
/// use bjcount::{Card, Observation, recognition::parse_reply};
///
/// assert_eq!(parse_reply("King of spades"), Observation::Card(Card::KING));
/// assert_eq!(parse_reply("No card detected"), Observation::NoCard);
/// ```
#[must_use]
pub fn parse_reply(reply: &str) -> Observation {
    let words = || reply.split(|c: char| !c.is_ascii_alphanumeric()).filter(|w| !w.is_empty());

    if says_no_card(words()) {
        return Observation::NoCard;
    }

    // "<rank> of <suit>" first, then any rank word on its own.
    let mut previous: [Option<&str>; 2] = [None, None];
    for word in words() {
        if let [Some(rank), Some(of)] = previous {
            let is_suit = SUITS.iter().any(|suit| suit.eq_ignore_ascii_case(word));
            if is_suit && of.eq_ignore_ascii_case("of") {
                if let Some(card) = rank_from_word(rank) {
                    return Observation::Card(card);
                }
            }
        }
        previous = [previous[1], Some(word)];
    }

    // A lone "a" outside that pattern is the article, not an ace.
    words()
        .filter(|word| !word.eq_ignore_ascii_case("a"))
        .find_map(rank_from_word)
        .map_or(Observation::NoCard, Observation::Card)
}

fn says_no_card<'a>(words: impl Iterator<Item = &'a str>) -> bool {
    let mut after_no = None;
    for word in words {
        if word.eq_ignore_ascii_case("no") {
            after_no = Some(0);
            continue;
        }
        if let Some(distance) = after_no {
            if word.eq_ignore_ascii_case("card") || word.eq_ignore_ascii_case("cards") {
                return true;
            }
            after_no = (distance < 1).then_some(distance + 1);
        }
    }
    false
}

fn rank_from_word(word: &str) -> Option<Card> {
    if let Ok(card) = word.parse::<Card>() {
        return Some(card);
    }
    RANK_WORDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(word))
        .map(|&(_, rank)| Card::new(rank))
}

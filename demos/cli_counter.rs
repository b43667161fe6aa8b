//! CLI card counter.
//!
//! Cards are entered by hand, or replayed from a file of recognizer replies
//! (one reply per line) that a worker thread publishes once per second:
//!
//! ```text
//! cargo run --example cli_counter -- replies.txt
//! ```
//!
//! Set `RUST_LOG=bjcount=debug` to see engine events.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core
)]

use std::fs;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use bjcount::recognition::parse_reply;
use bjcount::{Card, CounterOptions, ObservationSlot, Table, Target};
use tracing_subscriber::EnvFilter;

const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Card counter CLI example (type 'h' for help, 'q' to quit)");

    let started = Instant::now();
    let slot = Arc::new(ObservationSlot::new());
    if let Some(path) = std::env::args().nth(1) {
        match fs::read_to_string(&path) {
            Ok(replies) => spawn_replay(replies, Arc::clone(&slot), started),
            Err(err) => println!("Cannot read {path}: {err}"),
        }
    }

    let mut table = Table::new(CounterOptions::default());
    let mut mode: Option<Target> = None;

    loop {
        if table.drain(&slot).is_some() {
            if let Some(card) = table.detector().peek_confirmed() {
                match table.apply_detection(mode) {
                    Ok(Some(card)) => println!("Detected {card}, added to {}.", target_name(mode)),
                    Ok(None) => println!("Detected {card}. Choose 'p' or 'd' to place it."),
                    Err(err) => println!("Detection error: {err}"),
                }
            }
        }

        print_table(&table, mode);
        let line = prompt_line("> ");
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let argument = words.next();

        match command {
            "" => {}
            "q" | "quit" => break,
            "h" | "help" => print_help(),
            "p" | "player" => mode = place(&mut table, Target::Player, argument, mode),
            "d" | "dealer" => mode = place(&mut table, Target::Dealer, argument, mode),
            "n" | "new" => {
                table.new_hand();
                println!("Started new hand.");
            }
            "r" | "reset" => {
                table.reset_count();
                println!("Reset count to 0.");
            }
            "+" | "up" => {
                table.increment_decks();
            }
            "-" | "down" => {
                table.decrement_decks();
            }
            "c" | "cycle" => {
                let state = table.adjust_decks_cycle();
                println!("Decks remaining: {:.1}", state.decks_remaining());
            }
            "s" | "see" => {
                let reply = line.split_once(' ').map_or("", |(_, rest)| rest);
                let observation = parse_reply(reply);
                slot.publish(observation, started.elapsed());
                println!("Recognizer: {observation:?}");
            }
            other => match other.parse::<Card>() {
                Ok(card) => {
                    if let Err(err) = table.update_count(card) {
                        println!("Count error: {err}");
                    }
                }
                Err(err) => println!("Unknown command ({err})."),
            },
        }
    }
}

/// Places a typed card, or switches detected cards to `target` when no card
/// is given.
fn place(
    table: &mut Table,
    target: Target,
    argument: Option<&str>,
    mode: Option<Target>,
) -> Option<Target> {
    let Some(symbol) = argument else {
        println!("Using camera for {}.", target_name(Some(target)));
        if let Ok(Some(card)) = table.apply_detection(Some(target)) {
            println!("Added detected {card}.");
        }
        return Some(target);
    };

    match symbol.parse::<Card>().map(|card| table.assign(target, card)) {
        Ok(Ok(_)) => {}
        Ok(Err(err)) | Err(err) => println!("Card error: {err}"),
    }
    mode
}

fn spawn_replay(replies: String, slot: Arc<ObservationSlot>, started: Instant) {
    thread::spawn(move || {
        for reply in replies.lines() {
            thread::sleep(SAMPLE_INTERVAL);
            slot.publish(parse_reply(reply), started.elapsed());
        }
    });
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_string()
}

fn print_table(table: &Table, mode: Option<Target>) {
    let count = table.count();
    println!(
        "\nRunning count: {} | True count: {:.1} | Decks remaining: {:.1}",
        count.running_count(),
        count.true_count(),
        count.decks_remaining()
    );

    let hand = table.player_hand();
    if hand.is_empty() {
        println!("Player: (empty)");
    } else {
        let cards = hand
            .cards()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("Player: {cards} (value {})", table.player_value());
    }
    match table.dealer_up_card() {
        Some(card) => println!("Dealer: {card}"),
        None => println!("Dealer: (none)"),
    }

    match table.recommendation() {
        Ok(advice) => println!("{}", colorize(&format!("Recommendation: {advice}"), "31")),
        Err(err) => println!("Recommendation error: {err}"),
    }
    println!(
        "Camera mode: {} | Detector: {:?}",
        target_name(mode),
        table.detector().phase()
    );
}

fn print_help() {
    println!("  <rank>        count a card without placing it (2-10, J, Q, K, A)");
    println!("  p [rank]      add a player card, or send detections to the player");
    println!("  d [rank]      set the dealer card, or send detections to the dealer");
    println!("  s <reply>     feed a recognizer reply, e.g. 's 7 of hearts'");
    println!("  n             new hand (count carries over)");
    println!("  r             reset count");
    println!("  + / -         adjust decks remaining");
    println!("  c             cycle decks remaining (wraps to a full shoe)");
    println!("  q             quit");
}

const fn target_name(target: Option<Target>) -> &'static str {
    match target {
        Some(Target::Player) => "player",
        Some(Target::Dealer) => "dealer",
        None => "none",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

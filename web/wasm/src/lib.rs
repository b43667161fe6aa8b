use core::time::Duration;

use bjcount::{Card, CountState, CounterOptions, DetectionPhase, Recommendation, Table, Target};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmCounter {
    table: Table,
    mode: Option<Target>,
}

#[wasm_bindgen]
impl WasmCounter {
    #[wasm_bindgen(constructor)]
    pub fn new(starting_decks: f64) -> Self {
        Self {
            table: Table::new(CounterOptions::default().with_starting_decks(starting_decks)),
            mode: None,
        }
    }

    pub fn count_card(&mut self, symbol: &str) -> Result<(), JsValue> {
        let card = parse_card(symbol)?;
        self.table.update_count(card).map(|_| ()).map_err(js_err)
    }

    pub fn add_player_card(&mut self, symbol: &str) -> Result<(), JsValue> {
        let card = parse_card(symbol)?;
        self.table
            .assign(Target::Player, card)
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn set_dealer_card(&mut self, symbol: &str) -> Result<(), JsValue> {
        let card = parse_card(symbol)?;
        self.table
            .assign(Target::Dealer, card)
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn new_hand(&mut self) {
        self.table.new_hand();
    }

    pub fn reset_count(&mut self) {
        self.table.reset_count();
    }

    pub fn set_decks_remaining(&mut self, value: f64) {
        self.table.set_decks_remaining(value);
    }

    pub fn increment_decks(&mut self) {
        self.table.increment_decks();
    }

    pub fn decrement_decks(&mut self) {
        self.table.decrement_decks();
    }

    pub fn adjust_decks_cycle(&mut self) {
        self.table.adjust_decks_cycle();
    }

    /// `mode` is "player", "dealer", or anything else for none.
    pub fn set_camera_mode(&mut self, mode: &str) {
        self.mode = match mode {
            "player" => Some(Target::Player),
            "dealer" => Some(Target::Dealer),
            _ => None,
        };
    }

    /// Feeds one recognizer reply. Returns the card applied, if any.
    pub fn observe_reply(&mut self, reply: &str, now_ms: f64) -> Result<Option<String>, JsValue> {
        self.table.observe_reply(reply, timestamp(now_ms));
        self.table
            .apply_detection(self.mode)
            .map(|card| card.map(|card| card.to_string()))
            .map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let count = self.table.count();
        let detector = self.table.detector();
        let snapshot = Snapshot {
            count: JsCount::from(count),
            player_cards: self
                .table
                .player_hand()
                .cards()
                .iter()
                .map(ToString::to_string)
                .collect(),
            player_value: self.table.player_value(),
            dealer_card: self.table.dealer_up_card().map(|card| card.to_string()),
            recommendation: self
                .table
                .recommendation()
                .map_or("", Recommendation::as_str),
            camera_mode: mode_to_str(self.mode),
            detection: phase_to_str(detector.phase()),
            pending_card: detector.peek_confirmed().map(|card| card.to_string()),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    count: JsCount,
    player_cards: Vec<String>,
    player_value: u8,
    dealer_card: Option<String>,
    recommendation: &'static str,
    camera_mode: &'static str,
    detection: &'static str,
    pending_card: Option<String>,
}

#[derive(Serialize)]
struct JsCount {
    running_count: i32,
    true_count: f64,
    decks_remaining: f64,
}

impl From<CountState> for JsCount {
    fn from(state: CountState) -> Self {
        Self {
            running_count: state.running_count(),
            true_count: state.true_count(),
            decks_remaining: state.decks_remaining(),
        }
    }
}

fn parse_card(symbol: &str) -> Result<Card, JsValue> {
    symbol.parse::<Card>().map_err(js_err)
}

fn timestamp(now_ms: f64) -> Duration {
    Duration::try_from_secs_f64(now_ms / 1000.0).unwrap_or_default()
}

fn mode_to_str(mode: Option<Target>) -> &'static str {
    match mode {
        Some(Target::Player) => "player",
        Some(Target::Dealer) => "dealer",
        None => "none",
    }
}

fn phase_to_str(phase: DetectionPhase) -> &'static str {
    match phase {
        DetectionPhase::Idle => "Idle",
        DetectionPhase::Accumulating => "Accumulating",
        DetectionPhase::Confirmed => "Confirmed",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

use oldmaid::{Card, Draw, Game, GameOptions, GameState, Outcome, Owner, Suit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn challenger_draw(&mut self, slot: u32) -> Result<JsValue, JsValue> {
        let draw = self.game.challenger_draw(slot as usize).map_err(js_err)?;
        to_js_value(&JsDraw::from(&draw))
    }

    pub fn dealer_draw(&mut self) -> Result<JsValue, JsValue> {
        let draw = self.game.dealer_draw().map_err(js_err)?;
        to_js_value(&JsDraw::from(&draw))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            outcome: outcome_to_str(self.game.outcome()),
            turns: self.game.turns() as u32,
            dealer_name: self.game.options().dealer_name.to_string(),
            dealt: cards_to_js(self.game.dealt_hand().cards()),
            challenger: cards_to_js(self.game.challenger_hand().cards()),
            dealer_cards: self.game.dealer_hand().len() as u32,
        };

        to_js_value(&snapshot)
    }
}

/// What the page may know: the challenger's own cards and only the size of
/// the dealer's hand.
#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    outcome: &'static str,
    turns: u32,
    dealer_name: String,
    dealt: Vec<JsCard>,
    challenger: Vec<JsCard>,
    dealer_cards: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    label: String,
}

#[derive(Serialize)]
struct JsDraw {
    taker: &'static str,
    slot: u32,
    card: JsCard,
    before_discard: Vec<JsCard>,
    discarded: Vec<JsCard>,
}

impl From<&Draw> for JsDraw {
    fn from(draw: &Draw) -> Self {
        Self {
            taker: owner_to_str(draw.taker),
            slot: draw.slot as u32,
            card: card_to_js(draw.card),
            before_discard: cards_to_js(&draw.before_discard),
            discarded: cards_to_js(&draw.discarded),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.symbol(),
        label: card.to_string(),
    }
}

fn cards_to_js(cards: &[Card]) -> Vec<JsCard> {
    cards.iter().copied().map(card_to_js).collect()
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
    }
}

fn owner_to_str(owner: Owner) -> &'static str {
    match owner {
        Owner::Dealer => "Dealer",
        Owner::Challenger => "Challenger",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::ChallengerTurn => "ChallengerTurn",
        GameState::DealerTurn => "DealerTurn",
        GameState::GameOver => "GameOver",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "InProgress",
        Outcome::ChallengerWins => "ChallengerWins",
        Outcome::DealerWins => "DealerWins",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

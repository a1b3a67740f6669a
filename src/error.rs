//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears more than once.
    #[error("card {0} appears more than once in the deck")]
    DuplicateCard(Card),
}

/// Errors that can occur while changing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is already held, either by this hand or by the other one.
    #[error("card {0} is already held")]
    DuplicateCard(Card),
}

/// Errors that can occur during a turn.
///
/// None of these are reachable through valid play; they signal a caller
/// driving the engine out of order or a broken hand invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The other player is on turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// The hand to draw from holds no cards.
    #[error("no cards left to draw from")]
    EmptyHand,
    /// The chosen slot does not exist in the hand being drawn from.
    #[error("slot {slot} is outside 1..={len}")]
    SlotOutOfRange {
        /// The 1-based slot that was asked for.
        slot: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// The drawn card could not be added to the receiving hand.
    #[error(transparent)]
    Hand(#[from] HandError),
}

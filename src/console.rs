//! The seam between the engine and whatever talks to the human player.

use crate::card::Card;
use crate::hand::Owner;
use crate::result::Draw;

/// Which moment of a turn a displayed hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The hand as dealt, before the opening pairs are discarded.
    Dealt,
    /// The hand at the start of a turn.
    Current,
    /// The hand with the drawn card added.
    Drawn,
    /// The hand after pairs were discarded and the rest shuffled.
    Reduced,
}

/// Input and output collaborator driven by [`Game::play`](crate::Game::play).
///
/// Implementations own all validation of user input; the engine trusts
/// what they return.
pub trait Console {
    /// Shows a hand to the player.
    fn display(&mut self, owner: Owner, view: View, cards: &[Card]);

    /// Asks which of the dealer's `n` cards to take.
    ///
    /// Must return a value in `1..=n`, asking again as often as needed.
    fn prompt_slot(&mut self, n: usize) -> usize;

    /// Waits until the player is ready to continue.
    fn acknowledge(&mut self);

    /// Reports a finished draw.
    fn drawn(&mut self, draw: &Draw) {
        let _ = draw;
    }
}

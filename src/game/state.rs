//! Game state types.

use crate::hand::Owner;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The challenger picks a card from the dealer.
    ChallengerTurn,
    /// The dealer picks a card from the challenger without looking.
    DealerTurn,
    /// One hand is empty.
    GameOver,
}

impl GameState {
    /// Returns the state in which `owner` is on turn.
    #[must_use]
    pub const fn turn_of(owner: Owner) -> Self {
        match owner {
            Owner::Challenger => Self::ChallengerTurn,
            Owner::Dealer => Self::DealerTurn,
        }
    }

    /// Returns the player on turn, or `None` once the game is over.
    #[must_use]
    pub const fn on_turn(self) -> Option<Owner> {
        match self {
            Self::ChallengerTurn => Some(Owner::Challenger),
            Self::DealerTurn => Some(Owner::Dealer),
            Self::GameOver => None,
        }
    }
}

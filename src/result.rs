//! Turn and game result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Owner;

/// Result of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both players still hold cards.
    InProgress,
    /// The challenger ran out of cards.
    ChallengerWins,
    /// The dealer ran out of cards.
    DealerWins,
}

impl Outcome {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Returns the winner, if there is one.
    #[must_use]
    pub const fn winner(self) -> Option<Owner> {
        match self {
            Self::InProgress => None,
            Self::ChallengerWins => Some(Owner::Challenger),
            Self::DealerWins => Some(Owner::Dealer),
        }
    }
}

/// Decides the outcome from the two hand sizes.
///
/// Whoever runs out of cards wins. The challenger is checked first, so two
/// empty hands count as a challenger win.
///
/// ```
/// use oldmaid::{Outcome, evaluate};
///
/// assert_eq!(evaluate(3, 0), Outcome::ChallengerWins);
/// assert_eq!(evaluate(0, 2), Outcome::DealerWins);
/// assert_eq!(evaluate(1, 1), Outcome::InProgress);
/// ```
#[must_use]
pub const fn evaluate(dealer_len: usize, challenger_len: usize) -> Outcome {
    if challenger_len == 0 {
        Outcome::ChallengerWins
    } else if dealer_len == 0 {
        Outcome::DealerWins
    } else {
        Outcome::InProgress
    }
}

/// Record of a single draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// The player who drew.
    pub taker: Owner,
    /// 1-based position the card was taken from.
    pub slot: usize,
    /// The card that changed hands.
    pub card: Card,
    /// The taker's hand right after the card was added, before pairs were
    /// discarded.
    pub before_discard: Vec<Card>,
    /// Cards the taker discarded as pairs.
    pub discarded: Vec<Card>,
}

impl Draw {
    /// Returns whether the drawn card completed a pair.
    #[must_use]
    pub fn paired(&self) -> bool {
        !self.discarded.is_empty()
    }
}

use crate::console::{Console, View};
use crate::error::TurnError;
use crate::hand::Owner;
use crate::random::RandomSource;
use crate::result::Outcome;

use super::{Game, GameState};

impl<R: RandomSource> Game<R> {
    /// Plays the game to the end through `console`.
    ///
    /// On the challenger's turn the console sees the challenger's hand, is
    /// asked for a slot among the dealer's cards, and then sees the hand
    /// again with the drawn card and after the discard. The dealer's turns
    /// are only reported. Each turn ends with an acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns an error only if a hand invariant breaks mid-game, which no
    /// sequence of valid slots can cause.
    pub fn play<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Outcome, TurnError> {
        loop {
            match self.state {
                GameState::ChallengerTurn => {
                    console.display(Owner::Challenger, View::Current, self.challenger.cards());
                    let slot = console.prompt_slot(self.dealer.len());
                    let draw = self.challenger_draw(slot)?;
                    console.drawn(&draw);
                    console.display(Owner::Challenger, View::Drawn, &draw.before_discard);
                    console.display(Owner::Challenger, View::Reduced, self.challenger.cards());
                    console.acknowledge();
                }
                GameState::DealerTurn => {
                    let draw = self.dealer_draw()?;
                    console.drawn(&draw);
                    console.acknowledge();
                }
                GameState::GameOver => {
                    let outcome = self.outcome();
                    log::info!("game over after {} draws: {outcome:?}", self.turns);
                    return Ok(outcome);
                }
            }
        }
    }
}

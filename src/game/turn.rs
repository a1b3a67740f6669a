use alloc::vec::Vec;

use crate::error::{HandError, TurnError};
use crate::hand::{Hand, Owner};
use crate::pairs;
use crate::random::RandomSource;
use crate::result::Draw;

use super::{Game, GameState};

/// Moves the card at `index` from `giver` to the end of `taker`, then
/// discards the taker's pairs.
fn transfer<R: RandomSource + ?Sized>(
    giver: &mut Hand,
    taker: &mut Hand,
    index: usize,
    rng: &mut R,
) -> Result<Draw, TurnError> {
    let len = giver.len();
    let card = giver
        .cards()
        .get(index)
        .copied()
        .ok_or(TurnError::SlotOutOfRange {
            slot: index + 1,
            len,
        })?;
    if taker.contains(&card) {
        return Err(HandError::DuplicateCard(card).into());
    }

    giver.take(index);
    taker.receive(card)?;
    let before_discard: Vec<_> = taker.cards().to_vec();
    let discarded = pairs::reduce(taker, rng);

    log::debug!(
        "{:?} took {card} from slot {} of {len}{}",
        taker.owner(),
        index + 1,
        if discarded.is_empty() { "" } else { " and paired it" }
    );

    Ok(Draw {
        taker: taker.owner(),
        slot: index + 1,
        card,
        before_discard,
        discarded,
    })
}

impl<R: RandomSource> Game<R> {
    fn ensure_turn(&self, owner: Owner) -> Result<(), TurnError> {
        match self.state.on_turn() {
            None => Err(TurnError::GameOver),
            Some(on_turn) if on_turn == owner => Ok(()),
            Some(_) => Err(TurnError::NotYourTurn),
        }
    }

    fn finish_turn(&mut self, owner: Owner) {
        self.turns += 1;
        self.state = if self.outcome().is_over() {
            GameState::GameOver
        } else {
            GameState::turn_of(owner.opponent())
        };
    }

    /// Challenger action: take the dealer's card at a 1-based slot.
    ///
    /// Slots count the dealer's cards in the order returned by
    /// [`dealer_hand`](Self::dealer_hand), which does not change between
    /// turns.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the challenger's turn, the game is over,
    /// or the slot is outside `1..=dealer_hand().len()`.
    pub fn challenger_draw(&mut self, slot: usize) -> Result<Draw, TurnError> {
        self.ensure_turn(Owner::Challenger)?;

        let len = self.dealer.len();
        if slot == 0 || slot > len {
            return Err(TurnError::SlotOutOfRange { slot, len });
        }

        let draw = transfer(
            &mut self.dealer,
            &mut self.challenger,
            slot - 1,
            &mut self.rng,
        )?;
        self.finish_turn(Owner::Challenger);

        Ok(draw)
    }

    /// Dealer action: take one of the challenger's cards at random.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn, the game is over, or
    /// the challenger has no cards.
    pub fn dealer_draw(&mut self) -> Result<Draw, TurnError> {
        self.ensure_turn(Owner::Dealer)?;

        if self.challenger.is_empty() {
            return Err(TurnError::EmptyHand);
        }
        let index = self.rng.below(self.challenger.len());

        let draw = transfer(
            &mut self.challenger,
            &mut self.dealer,
            index,
            &mut self.rng,
        )?;
        self.finish_turn(Owner::Dealer);

        Ok(draw)
    }
}

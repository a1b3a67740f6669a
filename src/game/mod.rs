//! Game engine and state management.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::{self, Deck};
use crate::error::HandError;
use crate::hand::{Hand, Owner};
use crate::options::GameOptions;
use crate::pairs;
use crate::random::{RandomSource, SeededRandom};
use crate::result::{Outcome, evaluate};

mod play;
pub mod state;
mod turn;

pub use state::GameState;

/// An Old Maid game between the dealer and one challenger.
///
/// The game owns both hands and the random source. Every draw goes through
/// [`challenger_draw`](Self::challenger_draw) or
/// [`dealer_draw`](Self::dealer_draw), or the whole game can be driven
/// through a [`Console`](crate::Console) with [`play`](Self::play).
#[derive(Debug, Clone)]
pub struct Game<R = SeededRandom> {
    /// Game options.
    options: GameOptions,
    /// Dealer's hand.
    dealer: Hand,
    /// Challenger's hand.
    challenger: Hand,
    /// Challenger's hand as dealt, before the opening discard.
    dealt: Hand,
    /// Current game state.
    state: GameState,
    /// Number of draws made so far.
    turns: usize,
    /// Random number generator.
    rng: R,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck is shuffled and dealt and both players discard their
    /// opening pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use oldmaid::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.dealt_hand().len(), 26);
    /// assert_eq!(game.state(), GameState::ChallengerTurn);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_random(options, SeededRandom::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Creates a new game drawing all randomness from `rng`.
    #[must_use]
    pub fn with_random(options: GameOptions, mut rng: R) -> Self {
        let mut deck = Deck::build();
        deck.shuffle(&mut rng);

        let (mut dealer, mut challenger) = deck::deal(deck);
        let dealt = challenger.clone();

        pairs::reduce(&mut dealer, &mut rng);
        pairs::reduce(&mut challenger, &mut rng);

        Self::assemble(options, dealer, challenger, dealt, rng)
    }

    /// Creates a game from explicit hands, in the given order.
    ///
    /// No pairs are discarded; the hands are used exactly as passed.
    ///
    /// # Errors
    ///
    /// Returns an error if a card appears twice, in one hand or across both.
    pub fn from_hands(
        options: GameOptions,
        dealer: &[Card],
        challenger: &[Card],
        rng: R,
    ) -> Result<Self, HandError> {
        let dealer = Hand::from_cards(Owner::Dealer, dealer)?;
        if let Some(&card) = challenger.iter().find(|card| dealer.contains(card)) {
            return Err(HandError::DuplicateCard(card));
        }
        let challenger = Hand::from_cards(Owner::Challenger, challenger)?;
        let dealt = challenger.clone();

        Ok(Self::assemble(options, dealer, challenger, dealt, rng))
    }

    fn assemble(
        options: GameOptions,
        dealer: Hand,
        challenger: Hand,
        dealt: Hand,
        rng: R,
    ) -> Self {
        let state = if evaluate(dealer.len(), challenger.len()).is_over() {
            GameState::GameOver
        } else {
            GameState::turn_of(options.first_turn)
        };

        Self {
            options,
            dealer,
            challenger,
            dealt,
            state,
            turns: 0,
            rng,
        }
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the result so far.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.dealer.len(), self.challenger.len())
    }

    /// Returns the number of draws made so far.
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the challenger's hand.
    pub const fn challenger_hand(&self) -> &Hand {
        &self.challenger
    }

    /// Returns the hand belonging to `owner`.
    pub const fn hand(&self, owner: Owner) -> &Hand {
        match owner {
            Owner::Dealer => &self.dealer,
            Owner::Challenger => &self.challenger,
        }
    }

    /// Returns the challenger's hand as it was dealt, before the opening
    /// pairs were discarded.
    pub const fn dealt_hand(&self) -> &Hand {
        &self.dealt
    }

    /// Returns every card still in play, dealer's first.
    pub fn cards_in_play(&self) -> Vec<Card> {
        self.dealer
            .cards()
            .iter()
            .chain(self.challenger.cards())
            .copied()
            .collect()
    }
}

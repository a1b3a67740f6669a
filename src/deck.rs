//! The Old Maid deck and dealing.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::hand::{Hand, Owner};
use crate::random::RandomSource;

/// The card taken out of the standard deck so that one queen is left
/// without a partner.
pub const ODD_CARD: Card = Card::new(Rank::Queen, Suit::Clubs);

/// Number of cards in an Old Maid deck.
pub const OLD_MAID_DECK_SIZE: usize = DECK_SIZE - 1;

/// An ordered pile of distinct cards. Cards are dealt from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 51-card Old Maid deck in suit-major, rank-minor order.
    ///
    /// ```
    /// use oldmaid::{Deck, ODD_CARD};
    ///
    /// let deck = Deck::build();
    /// assert_eq!(deck.len(), 51);
    /// assert!(!deck.cards().contains(&ODD_CARD));
    /// ```
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.retain(|&card| card != ODD_CARD);

        Self { cards }
    }

    /// Creates a deck from explicit cards. The last card is dealt first.
    ///
    /// # Errors
    ///
    /// Returns an error if a card appears twice.
    pub fn from_cards(cards: &[Card]) -> Result<Self, DeckError> {
        let mut deck = Vec::with_capacity(cards.len());
        for &card in cards {
            if deck.contains(&card) {
                return Err(DeckError::DuplicateCard(card));
            }
            deck.push(card);
        }
        Ok(Self { cards: deck })
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        rng.shuffle(self.cards.as_mut_slice());
    }

    /// Returns the cards in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Deals the whole deck into a dealer hand and a challenger hand.
///
/// Cards come off the end of the deck two at a time, the first to the
/// challenger and the second to the dealer. A single leftover card goes to
/// the challenger unless the challenger already holds more cards.
///
/// Returns `(dealer, challenger)`.
#[must_use]
pub fn deal(deck: Deck) -> (Hand, Hand) {
    let mut cards = deck.cards;
    let mut dealer = Hand::new(Owner::Dealer);
    let mut other = Hand::new(Owner::Challenger);

    while cards.len() > 1 {
        if let Some(card) = cards.pop() {
            other.push_unchecked(card);
        }
        if let Some(card) = cards.pop() {
            dealer.push_unchecked(card);
        }
    }

    if let Some(card) = cards.pop() {
        if dealer.len() >= other.len() {
            other.push_unchecked(card);
        } else {
            dealer.push_unchecked(card);
        }
    }

    log::debug!(
        "dealt {} cards to the dealer and {} to the challenger",
        dealer.len(),
        other.len()
    );

    (dealer, other)
}

//! Player hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;

/// Which side of the table a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The computer dealer.
    Dealer,
    /// The human player.
    Challenger,
}

impl Owner {
    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Dealer => Self::Challenger,
            Self::Challenger => Self::Dealer,
        }
    }
}

/// A player's hand.
///
/// A hand never holds the same card twice. Card order matters: it is the
/// order shown to the player and the order slots are counted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    owner: Owner,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(owner: Owner) -> Self {
        Self {
            owner,
            cards: Vec::new(),
        }
    }

    /// Creates a hand holding `cards` in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if a card appears twice.
    pub fn from_cards(owner: Owner, cards: &[Card]) -> Result<Self, HandError> {
        let mut hand = Self::new(owner);
        for &card in cards {
            hand.receive(card)?;
        }
        Ok(hand)
    }

    /// Returns the owner of the hand.
    #[must_use]
    pub const fn owner(&self) -> Owner {
        self.owner
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Adds a card to the end of the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand already holds the card.
    pub fn receive(&mut self, card: Card) -> Result<(), HandError> {
        if self.contains(&card) {
            return Err(HandError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes and returns the card at a 0-based position.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Pushes a card known to be absent from the hand.
    pub(crate) fn push_unchecked(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) const fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

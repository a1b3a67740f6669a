//! An Old Maid card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a 51-card deck between a
//! computer dealer and a human challenger, discards pairs, and runs the
//! draw-from-your-opponent turns until one player is out of cards.
//!
//! All randomness goes through a [`RandomSource`], so a seed (or a scripted
//! source in tests) fixes the whole game.
//!
//! # Example
//!
//! ```
//! use oldmaid::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! while game.state() != GameState::GameOver {
//!     match game.state() {
//!         GameState::ChallengerTurn => {
//!             game.challenger_draw(1).unwrap();
//!         }
//!         GameState::DealerTurn => {
//!             game.dealer_draw().unwrap();
//!         }
//!         GameState::GameOver => {}
//!     }
//! }
//! assert!(game.outcome().is_over());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pairs;
pub mod random;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{Console, View};
pub use deck::{Deck, ODD_CARD, OLD_MAID_DECK_SIZE, deal};
pub use error::{DeckError, HandError, TurnError};
pub use game::{Game, GameState};
pub use hand::{Hand, Owner};
pub use options::GameOptions;
pub use pairs::reduce;
pub use random::{RandomSource, SeededRandom};
pub use result::{Draw, Outcome, evaluate};

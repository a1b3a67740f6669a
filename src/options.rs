//! Game configuration options.

extern crate alloc;

use alloc::borrow::Cow;

use crate::hand::Owner;

/// Configuration options for an Old Maid game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use oldmaid::{GameOptions, Owner};
///
/// let options = GameOptions::default()
///     .with_dealer_name("Hal")
///     .with_first_turn(Owner::Dealer);
/// assert_eq!(options.dealer_name, "Hal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Name the dealer introduces itself with.
    pub dealer_name: Cow<'static, str>,
    /// Who draws first once the opening pairs are discarded.
    pub first_turn: Owner,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_name: Cow::Borrowed("Robot"),
            first_turn: Owner::Challenger,
        }
    }
}

impl GameOptions {
    /// Sets the dealer's name.
    ///
    /// # Example
    ///
    /// ```
    /// use oldmaid::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_name(String::from("Ada"));
    /// assert_eq!(options.dealer_name, "Ada");
    /// ```
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets who draws first.
    ///
    /// # Example
    ///
    /// ```
    /// use oldmaid::{GameOptions, Owner};
    ///
    /// let options = GameOptions::default().with_first_turn(Owner::Dealer);
    /// assert_eq!(options.first_turn, Owner::Dealer);
    /// ```
    #[must_use]
    pub const fn with_first_turn(mut self, owner: Owner) -> Self {
        self.first_turn = owner;
        self
    }
}

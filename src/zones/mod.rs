//! Card locations: the shared deck and each player's piles.

pub mod deck;
pub mod pile;

pub use deck::Deck;
pub use pile::Pile;

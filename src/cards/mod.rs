//! Cards and fair dealing.
//!
//! - `Card`: a word to act out, tagged with the theme it came from
//! - `FairShuffle`: the "no repeat until everything has appeared" sequencer
//! - `CardDeck`: a `FairShuffle` of cards with its own RNG stream
//! - `ThemeCatalog`: builds the card pool from selected themes

mod card;
mod deck;
mod fair;
mod themes;

pub use card::Card;
pub use deck::CardDeck;
pub use fair::FairShuffle;
pub use themes::{Theme, ThemeCatalog};

//! Deck, hand, and discard lifecycle.
//!
//! ## Key Types
//!
//! - `DeckState`: The three ordered piles of one combatant, with the
//!   draw/shuffle/play operations
//! - `DrawOutcome`: What a draw attempt did (drew, hand full, exhausted)

pub mod state;

pub use state::{DeckState, DrawOutcome, DEFAULT_MAX_HAND_SIZE};

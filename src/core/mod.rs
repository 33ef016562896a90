//! Core types shared across the combat engine.
//!
//! ## Key Types
//!
//! - `GameRng`: Seeded deterministic randomness for shuffles
//! - `Side`: Which combatant an operation refers to
//! - `CombatantState`: HP, armor, and the card piles of one combatant

pub mod combatant;
pub mod rng;

pub use combatant::{CombatantState, Side};
pub use rng::GameRng;

//! Card effect resolution.
//!
//! ## Key Types
//!
//! - `EffectResolver`: Applies a played card's effect to source/target state
//! - `TurnHolder`: Which of the (source, target) pair holds the turn

pub mod resolver;

pub use resolver::{EffectResolver, TurnHolder};

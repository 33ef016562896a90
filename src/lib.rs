//! # card-combat
//!
//! A deterministic combat core for a two-sided card battler: deck/hand/discard
//! lifecycle, card effect resolution, and Draw/Action/End turn sequencing.
//!
//! ## Design Principles
//!
//! 1. **Engine-Agnostic**: No rendering, input, or scheduling dependencies.
//!    The presentation layer reads [`CombatView`] snapshots and drained
//!    [`CombatEvent`]s, and calls back through a narrow request API.
//!
//! 2. **Deterministic**: All randomness flows through a seeded [`GameRng`].
//!    Same seed plus same request sequence produces the same combat.
//!
//! 3. **Explicit Ownership**: No global singletons. The orchestrator owns the
//!    session; collaborators receive references.
//!
//! ## Architecture
//!
//! - **Suspension Points**: The enemy turn runs as an explicit step function.
//!   [`CombatOrchestrator::step`] returns [`StepOutcome::Wait`] with the think
//!   delay; the caller re-enters after waiting. No timers or frames inside.
//!
//! - **Synchronous Events**: State changes are published to an event queue the
//!   caller drains after each request. Nothing fires across a scheduling
//!   boundary.
//!
//! ## Modules
//!
//! - `core`: RNG, combatant sides, HP/armor state
//! - `cards`: Card definitions, instances, and the catalog
//! - `deck`: Per-combatant deck/hand/discard lifecycle
//! - `effects`: Card effect resolution
//! - `combat`: Session, orchestrator, events, presentation views

pub mod cards;
pub mod combat;
pub mod core;
pub mod deck;
pub mod effects;

// Re-export commonly used types
pub use crate::core::{CombatantState, GameRng, Side};

pub use crate::cards::{
    CardCatalog, CardDefinition, CardId, CardInstance, CardType, InstanceId, InstanceIdGen, Rarity,
};

pub use crate::deck::{DeckState, DrawOutcome};

pub use crate::effects::{EffectResolver, TurnHolder};

pub use crate::combat::{
    CombatConfig, CombatEvent, CombatOrchestrator, CombatOutcome, CombatSession, CombatView,
    CombatantSpec, CombatantView, EventQueue, HandCardView, Phase, PlayError, SetupError,
    StepOutcome,
};

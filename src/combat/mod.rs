//! Combat orchestration: session state, the phase machine, and the
//! presentation boundary.
//!
//! ## Key Types
//!
//! - `CombatConfig` / `CombatantSpec`: Setup supplied by the catalog loader
//! - `CombatSession`: Turn/phase/budget state plus both combatants
//! - `CombatOrchestrator`: The Draw/Action/End state machine and request API
//! - `CombatEvent` / `EventQueue`: Synchronous notifications for the
//!   presentation collaborator
//! - `CombatView`: Read-only snapshot for rendering

pub mod config;
pub mod event;
pub mod orchestrator;
pub mod session;
pub mod view;

pub use config::{CombatConfig, CombatantSpec, DEFAULT_MAX_HP};
pub use event::{CombatEvent, EventQueue};
pub use orchestrator::{CombatOrchestrator, PlayError, SetupError, StepOutcome};
pub use session::{CombatOutcome, CombatSession, Phase};
pub use view::{CombatView, CombatantView, HandCardView};

//! Read-only snapshots for the presentation collaborator.
//!
//! The view is plain data: the renderer never touches the session directly.
//! It shows HP/armor and pile sizes for both sides, the player's ordered
//! hand with a per-card playability flag, and where the combat stands.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardType, InstanceId, Rarity};
use crate::combat::session::{CombatOutcome, Phase};

/// One card in the player's hand, ready to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCardView {
    /// Identity of this copy; pass back to `request_play_card`.
    pub instance: InstanceId,

    /// Catalog reference.
    pub card: CardId,

    pub name: String,
    pub card_type: CardType,
    pub value: i32,
    pub rarity: Rarity,
    pub description: String,

    /// Whether playing this card right now would be accepted.
    pub playable: bool,
}

/// Observable stats of one combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantView {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub armor: i32,
    pub deck_size: usize,
    pub hand_size: usize,
    pub discard_size: usize,
}

/// Snapshot of a combat for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatView {
    pub player: CombatantView,
    pub enemy: CombatantView,

    /// The player's hand in draw order.
    pub hand: Vec<HandCardView>,

    pub phase: Phase,
    pub turn: u32,
    pub player_turn: bool,
    pub active: bool,
    pub outcome: Option<CombatOutcome>,
}

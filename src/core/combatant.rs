//! Combatant identity and per-combatant combat state.
//!
//! `CombatantState` owns everything that belongs to one side of a combat:
//! HP, armor, and the three card piles ([`DeckState`]). The orchestrator
//! holds one per side and mutates them through deck operations and effect
//! resolution.

use serde::{Deserialize, Serialize};

use crate::deck::DeckState;

/// Which side of the combat an operation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// Get the opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Enemy => write!(f, "Enemy"),
        }
    }
}

/// The mutable combat state of one combatant.
///
/// ## HP and Armor
///
/// Armor absorbs damage before HP. HP is not floored during resolution and
/// may briefly go negative; the orchestrator's terminal check treats any
/// value at or below zero as defeat. Healing is clamped to `max_hp`, which
/// is an explicit per-combatant attribute supplied at setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantState {
    name: String,
    hp: i32,
    max_hp: i32,
    armor: i32,

    /// The combatant's deck, hand, and discard piles.
    pub deck: DeckState,
}

impl CombatantState {
    /// Create a combatant at full HP with no armor and empty piles.
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: i32, max_hand_size: usize) -> Self {
        Self {
            name: name.into(),
            hp: max_hp,
            max_hp,
            armor: 0,
            deck: DeckState::new(max_hand_size),
        }
    }

    /// Get the combatant's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get current HP.
    #[must_use]
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Get maximum HP.
    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Get current armor.
    #[must_use]
    pub fn armor(&self) -> i32 {
        self.armor
    }

    /// Check whether this combatant has been defeated.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Restore HP to the maximum and clear armor.
    ///
    /// Called at combat start so a reused combatant enters fresh.
    pub fn reset_vitals(&mut self) {
        self.hp = self.max_hp;
        self.armor = 0;
    }

    /// Apply damage, armor first.
    ///
    /// Armor absorbs `min(amount, armor)`; the remainder subtracts from HP
    /// with no floor. Returns the HP actually lost.
    pub fn apply_damage(&mut self, amount: i32) -> i32 {
        let absorbed = amount.min(self.armor).max(0);
        self.armor -= absorbed;

        let remainder = amount - absorbed;
        if remainder > 0 {
            self.hp -= remainder;
            remainder
        } else {
            0
        }
    }

    /// Add armor.
    pub fn add_armor(&mut self, amount: i32) {
        self.armor += amount;
    }

    /// Heal up to `max_hp`. Returns the HP actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.min(self.max_hp - self.hp).max(0);
        self.hp += healed;
        healed
    }
}

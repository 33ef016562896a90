//! Combat configuration and combatant setup data.
//!
//! `CombatConfig` carries the tunables the prototype exposed in the
//! inspector (actions per turn, hand size, enemy think time). The catalog
//! loader supplies a `CombatantSpec` per side before combat starts: display
//! name, maximum HP, and the card list the starting deck is built from.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::deck::DEFAULT_MAX_HAND_SIZE;

/// Default maximum HP for a combatant.
pub const DEFAULT_MAX_HP: i32 = 30;

/// Tunables for a combat.
///
/// ## Example
///
/// ```
/// use card_combat::combat::CombatConfig;
///
/// let config = CombatConfig::new()
///     .with_actions_per_turn(2)
///     .with_seed(42);
///
/// assert_eq!(config.actions_per_turn, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Plays allowed per turn before it auto-ends.
    pub actions_per_turn: u32,

    /// Hand capacity for both sides.
    pub max_hand_size: usize,

    /// Pacing delay between enemy plays.
    pub enemy_think_time: Duration,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            actions_per_turn: 1,
            max_hand_size: DEFAULT_MAX_HAND_SIZE,
            enemy_think_time: Duration::from_millis(1500),
            seed: None,
        }
    }
}

impl CombatConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the action budget per turn.
    #[must_use]
    pub fn with_actions_per_turn(mut self, actions: u32) -> Self {
        self.actions_per_turn = actions;
        self
    }

    /// Set the hand capacity.
    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    /// Set the enemy think delay.
    #[must_use]
    pub fn with_enemy_think_time(mut self, delay: Duration) -> Self {
        self.enemy_think_time = delay;
        self
    }

    /// Pin the RNG seed for a replayable combat.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Setup data for one combatant, supplied by the catalog loader.
///
/// The deck list references catalog entries; fresh instances are created
/// from it each time a combat starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantSpec {
    /// Display name.
    pub name: String,

    /// Maximum HP. Healing clamps against this.
    pub max_hp: i32,

    /// Starting deck as catalog references, in catalog order.
    pub deck: Vec<CardId>,
}

impl CombatantSpec {
    /// Create a spec with an empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>, max_hp: i32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            deck: Vec::new(),
        }
    }

    /// Set the deck list (builder pattern).
    #[must_use]
    pub fn with_deck(mut self, deck: Vec<CardId>) -> Self {
        self.deck = deck;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CombatConfig::default();

        assert_eq!(config.actions_per_turn, 1);
        assert_eq!(config.max_hand_size, 5);
        assert_eq!(config.enemy_think_time, Duration::from_millis(1500));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_builder() {
        let config = CombatConfig::new()
            .with_actions_per_turn(3)
            .with_max_hand_size(7)
            .with_enemy_think_time(Duration::from_millis(200))
            .with_seed(99);

        assert_eq!(config.actions_per_turn, 3);
        assert_eq!(config.max_hand_size, 7);
        assert_eq!(config.enemy_think_time, Duration::from_millis(200));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_default_max_hp_matches_prototype() {
        let spec = CombatantSpec::new("Hero", DEFAULT_MAX_HP);
        assert_eq!(spec.max_hp, 30);
    }

    #[test]
    fn test_combatant_spec_builder() {
        let spec = CombatantSpec::new("Goblin", 20)
            .with_deck(vec![CardId::new(1), CardId::new(1), CardId::new(2)]);

        assert_eq!(spec.name, "Goblin");
        assert_eq!(spec.max_hp, 20);
        assert_eq!(spec.deck.len(), 3);
    }

    #[test]
    fn test_config_serialization() {
        let config = CombatConfig::new().with_seed(7);

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CombatConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}

//! Combat session state.
//!
//! `CombatSession` is the data half of the orchestrator split: both
//! combatants, the turn/phase/budget counters, the activity flag, the
//! session RNG, and the instance-id allocator. The orchestrator owns the
//! session and is its only mutator; the presentation layer sees it through
//! read accessors and `CombatView` snapshots.

use serde::{Deserialize, Serialize};

use crate::cards::InstanceIdGen;
use crate::core::{CombatantState, GameRng, Side};

/// Phase within a single side's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The active side draws one card.
    Draw,
    /// The active side plays cards until done or out of actions.
    Action,
    /// Bookkeeping before control flips to the other side.
    End,
}

/// Terminal result of a combat, from the player's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

/// Full state of one combat.
pub struct CombatSession {
    /// The player-side combatant.
    pub player: CombatantState,

    /// The enemy-side combatant.
    pub enemy: CombatantState,

    /// Turn counter. Starts at 1 and increments each time control returns
    /// to the player.
    pub turn: u32,

    /// Whether the player holds the current turn.
    pub player_turn: bool,

    /// Current phase of the active side's turn.
    pub phase: Phase,

    /// Plays allowed per turn.
    pub actions_per_turn: u32,

    /// Plays remaining this turn.
    pub actions_remaining: u32,

    /// Session RNG driving shuffles.
    pub rng: GameRng,

    /// Instance-id allocator for this session.
    pub ids: InstanceIdGen,

    active: bool,
    outcome: Option<CombatOutcome>,
}

impl CombatSession {
    /// Create an inert session. `CombatOrchestrator::start_combat` brings
    /// it to life.
    #[must_use]
    pub fn new(
        player: CombatantState,
        enemy: CombatantState,
        actions_per_turn: u32,
        rng: GameRng,
    ) -> Self {
        Self {
            player,
            enemy,
            turn: 1,
            player_turn: true,
            phase: Phase::Draw,
            actions_per_turn,
            actions_remaining: actions_per_turn,
            rng,
            ids: InstanceIdGen::new(),
            active: false,
            outcome: None,
        }
    }

    /// Whether the combat is running (started and not yet decided).
    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }

    /// The terminal outcome, once the combat has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<CombatOutcome> {
        self.outcome
    }

    /// The side holding the current turn.
    #[must_use]
    pub fn active_side(&self) -> Side {
        if self.player_turn {
            Side::Player
        } else {
            Side::Enemy
        }
    }

    /// Get a combatant by side.
    #[must_use]
    pub fn combatant(&self, side: Side) -> &CombatantState {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    /// Get a combatant by side, mutably.
    pub fn combatant_mut(&mut self, side: Side) -> &mut CombatantState {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Split into (source, target, rng) with `source` on the given side.
    ///
    /// Effect resolution mutates both combatants and may shuffle, so the
    /// three borrows have to be handed out together.
    pub fn split_mut(
        &mut self,
        source: Side,
    ) -> (&mut CombatantState, &mut CombatantState, &mut GameRng) {
        match source {
            Side::Player => (&mut self.player, &mut self.enemy, &mut self.rng),
            Side::Enemy => (&mut self.enemy, &mut self.player, &mut self.rng),
        }
    }

    /// Mark the session as running again after (re)initialization.
    pub(crate) fn activate(&mut self) {
        self.active = true;
        self.outcome = None;
    }

    /// End the combat with the given outcome. No further phase transitions
    /// are processed afterwards.
    pub(crate) fn finish(&mut self, outcome: CombatOutcome) {
        self.active = false;
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> CombatSession {
        CombatSession::new(
            CombatantState::new("Hero", 30, 5),
            CombatantState::new("Goblin", 30, 5),
            1,
            GameRng::new(42),
        )
    }

    #[test]
    fn test_new_session_is_inert() {
        let s = session();

        assert!(!s.active());
        assert_eq!(s.outcome(), None);
        assert_eq!(s.turn, 1);
        assert!(s.player_turn);
        assert_eq!(s.phase, Phase::Draw);
    }

    #[test]
    fn test_active_side_follows_flag() {
        let mut s = session();

        assert_eq!(s.active_side(), Side::Player);
        s.player_turn = false;
        assert_eq!(s.active_side(), Side::Enemy);
    }

    #[test]
    fn test_combatant_lookup() {
        let s = session();

        assert_eq!(s.combatant(Side::Player).name(), "Hero");
        assert_eq!(s.combatant(Side::Enemy).name(), "Goblin");
    }

    #[test]
    fn test_split_mut_orients_source() {
        let mut s = session();

        {
            let (source, target, _) = s.split_mut(Side::Enemy);
            assert_eq!(source.name(), "Goblin");
            assert_eq!(target.name(), "Hero");
        }

        let (source, target, _) = s.split_mut(Side::Player);
        assert_eq!(source.name(), "Hero");
        assert_eq!(target.name(), "Goblin");
    }

    #[test]
    fn test_finish_deactivates() {
        let mut s = session();
        s.activate();
        assert!(s.active());

        s.finish(CombatOutcome::Victory);

        assert!(!s.active());
        assert_eq!(s.outcome(), Some(CombatOutcome::Victory));
    }
}

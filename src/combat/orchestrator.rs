//! The combat orchestrator: phase sequencing, the request API, and the
//! enemy turn driver.
//!
//! The orchestrator owns the session outright. All mutation flows through
//! it: it triggers draws on deck state, routes plays through one accounting
//! path for both sides, invokes the effect resolver, runs the terminal
//! check after every resolution, and publishes events for the presentation
//! layer.
//!
//! ## Turn shape
//!
//! Entering `Draw` draws exactly one card for the active side and resets
//! the action budget, then the phase moves to `Action`. `Action` ends on an
//! explicit request or automatically when the player spends the last
//! action. `End` flips control, bumps the turn counter when the player is
//! back up, and re-enters `Draw` synchronously.
//!
//! ## Enemy turns
//!
//! The enemy plays through [`CombatOrchestrator::step`], an explicit
//! suspension point. Each call performs at most one play and returns
//! [`StepOutcome::Wait`] with the think delay; the caller re-enters after
//! waiting. The driver checks the terminal condition before every step, so
//! a finished combat suppresses any remaining resumptions.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cards::{CardCatalog, CardDefinition, CardId, CardInstance, InstanceId};
use crate::combat::config::{CombatConfig, CombatantSpec};
use crate::combat::event::{CombatEvent, EventQueue};
use crate::combat::session::{CombatOutcome, CombatSession, Phase};
use crate::combat::view::{CombatView, CombatantView, HandCardView};
use crate::core::{CombatantState, GameRng, Side};
use crate::effects::{EffectResolver, TurnHolder};

/// Why a play or end-turn request was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("combat is not active")]
    CombatOver,

    #[error("it is not the player's turn")]
    NotPlayersTurn,

    #[error("cards can only be played during the action phase")]
    NotActionPhase,

    #[error("card {0} is not in the player's hand")]
    CardNotInHand(InstanceId),
}

/// Why a combat could not be set up.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{side} deck references unknown card {card}")]
    UnknownCard { side: Side, card: CardId },
}

/// What the caller should do after a `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Waiting on player input; nothing scheduled.
    Idle,

    /// Call `step` again after this delay.
    Wait(Duration),

    /// The combat has ended.
    Over(CombatOutcome),
}

/// The turn/phase state machine coordinating deck state and effect
/// resolution for one combat.
///
/// ## Example
///
/// ```
/// use card_combat::cards::{CardCatalog, CardType};
/// use card_combat::combat::{CombatConfig, CombatOrchestrator, CombatantSpec};
///
/// let mut catalog = CardCatalog::new();
/// let strike = catalog.register_auto("Strike", CardType::Damage, 6);
///
/// let player = CombatantSpec::new("Hero", 30).with_deck(vec![strike; 10]);
/// let enemy = CombatantSpec::new("Goblin", 20).with_deck(vec![strike; 10]);
///
/// let config = CombatConfig::new().with_seed(42);
/// let mut combat = CombatOrchestrator::new(catalog, config, player, enemy).unwrap();
/// combat.start_combat();
///
/// assert!(combat.session().active());
/// assert_eq!(combat.view().hand.len(), 5);
/// ```
pub struct CombatOrchestrator {
    config: CombatConfig,
    catalog: CardCatalog,
    player_spec: CombatantSpec,
    enemy_spec: CombatantSpec,
    session: CombatSession,
    events: EventQueue,

    /// Whether the enemy's initial think delay has elapsed this turn.
    enemy_thinking: bool,
}

impl CombatOrchestrator {
    /// Create an orchestrator with an inert session.
    ///
    /// Both deck lists are validated against the catalog here, so later
    /// lookups cannot miss.
    pub fn new(
        catalog: CardCatalog,
        config: CombatConfig,
        player_spec: CombatantSpec,
        enemy_spec: CombatantSpec,
    ) -> Result<Self, SetupError> {
        for (side, spec) in [(Side::Player, &player_spec), (Side::Enemy, &enemy_spec)] {
            if let Some(&card) = spec.deck.iter().find(|&&c| !catalog.contains(c)) {
                return Err(SetupError::UnknownCard { side, card });
            }
        }

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let session = CombatSession::new(
            CombatantState::new(
                player_spec.name.clone(),
                player_spec.max_hp,
                config.max_hand_size,
            ),
            CombatantState::new(
                enemy_spec.name.clone(),
                enemy_spec.max_hp,
                config.max_hand_size,
            ),
            config.actions_per_turn,
            rng,
        );

        Ok(Self {
            config,
            catalog,
            player_spec,
            enemy_spec,
            session,
            events: EventQueue::new(),
            enemy_thinking: false,
        })
    }

    /// Get the session (read-only).
    #[must_use]
    pub fn session(&self) -> &CombatSession {
        &self.session
    }

    /// Get the session mutably.
    ///
    /// Intended for setup adjustments and tests; normal play goes through
    /// the request API.
    pub fn session_mut(&mut self) -> &mut CombatSession {
        &mut self.session
    }

    /// Get the card catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// The terminal outcome, once decided.
    #[must_use]
    pub fn outcome(&self) -> Option<CombatOutcome> {
        self.session.outcome()
    }

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        self.events.drain()
    }

    /// Start (or restart) the combat.
    ///
    /// Resets vitals and counters, rebuilds both decks from their specs
    /// with fresh instances, draws starting hands, and runs the first Draw
    /// phase for the player.
    pub fn start_combat(&mut self) {
        info!(seed = self.session.rng.seed(), "starting new combat");

        self.session.player_turn = true;
        self.session.turn = 1;
        self.session.actions_remaining = self.session.actions_per_turn;
        self.session.phase = Phase::Draw;
        self.session.activate();
        self.enemy_thinking = false;

        self.session.player.reset_vitals();
        self.session.enemy.reset_vitals();

        let player_cards = Self::build_deck(&self.player_spec, &mut self.session);
        self.session
            .player
            .deck
            .start_new_combat(player_cards, &mut self.session.rng);

        let enemy_cards = Self::build_deck(&self.enemy_spec, &mut self.session);
        self.session
            .enemy
            .deck
            .start_new_combat(enemy_cards, &mut self.session.rng);

        self.events.publish(CombatEvent::CombatStarted);

        self.enter_draw_phase();
    }

    /// Instantiate a spec's deck list with fresh instance ids.
    fn build_deck(spec: &CombatantSpec, session: &mut CombatSession) -> Vec<CardInstance> {
        spec.deck
            .iter()
            .map(|&card| CardInstance::new(session.ids.allocate(), card))
            .collect()
    }

    /// Player request: play the given hand card.
    pub fn request_play_card(&mut self, id: InstanceId) -> Result<(), PlayError> {
        if !self.session.active() {
            warn!(instance = %id, "play rejected, combat is not active");
            return Err(PlayError::CombatOver);
        }
        if !self.session.player_turn {
            warn!(instance = %id, "play rejected, not the player's turn");
            return Err(PlayError::NotPlayersTurn);
        }
        if self.session.phase != Phase::Action {
            warn!(instance = %id, phase = ?self.session.phase, "play rejected, wrong phase");
            return Err(PlayError::NotActionPhase);
        }

        self.play_card(Side::Player, id)
    }

    /// Player request: end the turn.
    pub fn request_end_turn(&mut self) -> Result<(), PlayError> {
        if !self.session.active() {
            return Err(PlayError::CombatOver);
        }
        if !self.session.player_turn {
            return Err(PlayError::NotPlayersTurn);
        }
        if self.session.phase != Phase::Action {
            return Err(PlayError::NotActionPhase);
        }

        self.end_turn(Side::Player);
        Ok(())
    }

    /// Drive the enemy turn one step.
    ///
    /// Perform at most one enemy play, then report what the caller should
    /// do next. Safe to call at any time: during the player's turn it is a
    /// no-op returning [`StepOutcome::Idle`].
    pub fn step(&mut self) -> StepOutcome {
        if !self.session.active() {
            return match self.session.outcome() {
                Some(outcome) => StepOutcome::Over(outcome),
                None => StepOutcome::Idle,
            };
        }

        if self.session.player_turn || self.session.phase != Phase::Action {
            return StepOutcome::Idle;
        }

        if !self.enemy_thinking {
            self.enemy_thinking = true;
            debug!("enemy taking turn");
            return StepOutcome::Wait(self.config.enemy_think_time);
        }

        if self.session.actions_remaining > 0 {
            if let Some(card) = self.choose_enemy_card() {
                debug!(instance = %card, "enemy playing card");
                // The card came from the enemy hand, so this cannot fail.
                let _ = self.play_card(Side::Enemy, card);

                if let Some(outcome) = self.session.outcome() {
                    return StepOutcome::Over(outcome);
                }
                return StepOutcome::Wait(self.config.enemy_think_time);
            }
        }

        // Out of actions or out of cards.
        self.end_turn(Side::Enemy);
        StepOutcome::Idle
    }

    /// Enemy card selection: the first card in hand.
    fn choose_enemy_card(&self) -> Option<InstanceId> {
        self.session.enemy.deck.hand().first().map(|c| c.id)
    }

    /// Build a presentation snapshot.
    #[must_use]
    pub fn view(&self) -> CombatView {
        let s = &self.session;
        let playable = s.active() && s.player_turn && s.phase == Phase::Action;

        let hand = s
            .player
            .deck
            .hand()
            .iter()
            .map(|c| {
                let def = self.catalog.get_unchecked(c.card);
                HandCardView {
                    instance: c.id,
                    card: c.card,
                    name: def.name.clone(),
                    card_type: def.card_type,
                    value: def.value,
                    rarity: def.rarity,
                    description: def.description.clone(),
                    playable,
                }
            })
            .collect();

        CombatView {
            player: Self::combatant_view(&s.player),
            enemy: Self::combatant_view(&s.enemy),
            hand,
            phase: s.phase,
            turn: s.turn,
            player_turn: s.player_turn,
            active: s.active(),
            outcome: s.outcome(),
        }
    }

    fn combatant_view(c: &CombatantState) -> CombatantView {
        CombatantView {
            name: c.name().to_string(),
            hp: c.hp(),
            max_hp: c.max_hp(),
            armor: c.armor(),
            deck_size: c.deck.deck().len(),
            hand_size: c.deck.hand().len(),
            discard_size: c.deck.discard_pile().len(),
        }
    }

    // === Internal state machine ===

    /// Play one card for `side`: move it hand to discard, account for the
    /// action, resolve the effect, check for a decided combat, and auto-end
    /// the player's turn on an exhausted budget.
    fn play_card(&mut self, side: Side, id: InstanceId) -> Result<(), PlayError> {
        let Some(card_id) = self.session.combatant_mut(side).deck.play_card(id) else {
            return Err(PlayError::CardNotInHand(id));
        };

        let def = self.catalog.get_unchecked(card_id).clone();
        info!(side = %side, card = %def.name, "card played");

        self.events.publish(CombatEvent::CardPlayed {
            side,
            instance: id,
            card: card_id,
        });

        self.card_played(side);
        self.resolve(side, &def);
        self.events.publish(CombatEvent::StateChanged);
        self.check_game_end();

        if self.session.active()
            && side == Side::Player
            && self.session.player_turn
            && self.session.phase == Phase::Action
            && self.session.actions_remaining == 0
        {
            debug!("player out of actions, ending turn");
            self.end_turn(Side::Player);
        }

        Ok(())
    }

    /// Unified played-card accounting: a play by the side holding the turn
    /// spends one action, whoever initiated it.
    fn card_played(&mut self, side: Side) {
        if side == self.session.active_side() {
            self.session.actions_remaining = self.session.actions_remaining.saturating_sub(1);
            debug!(
                side = %side,
                remaining = self.session.actions_remaining,
                "action spent"
            );
        }
    }

    /// Resolve a played card's effect against (source, target).
    fn resolve(&mut self, side: Side, def: &CardDefinition) {
        let turn_holder = if self.session.active_side() == side {
            TurnHolder::Source
        } else {
            TurnHolder::Target
        };

        let (source, target, rng) = self.session.split_mut(side);
        EffectResolver::resolve(def, source, target, turn_holder, rng);
    }

    /// End-of-resolution terminal check. The player is checked first, so a
    /// mutual kill counts as a defeat.
    fn check_game_end(&mut self) {
        if !self.session.active() {
            return;
        }

        if self.session.player.is_defeated() {
            self.finish(CombatOutcome::Defeat);
        } else if self.session.enemy.is_defeated() {
            self.finish(CombatOutcome::Victory);
        }
    }

    fn finish(&mut self, outcome: CombatOutcome) {
        info!(?outcome, "combat over");
        self.session.finish(outcome);
        self.events.publish(CombatEvent::GameOver { outcome });
    }

    /// Run the End phase for `side` and cascade straight into the next
    /// side's Draw phase. End and the following Draw are processed
    /// synchronously; there is no scheduling boundary between turns.
    fn end_turn(&mut self, side: Side) {
        debug!(side = %side, "ending turn");

        self.session.phase = Phase::End;
        self.events.publish(CombatEvent::TurnEnded { side });

        self.session.player_turn = !self.session.player_turn;
        if self.session.player_turn {
            self.session.turn += 1;
        }

        self.events.publish(CombatEvent::TurnStarted {
            side: self.session.active_side(),
            turn: self.session.turn,
        });

        self.session.phase = Phase::Draw;
        self.enter_draw_phase();
    }

    /// Draw phase: the active side draws exactly one card, the action
    /// budget resets, and the phase moves to Action. An enemy turn arms
    /// the step driver.
    fn enter_draw_phase(&mut self) {
        let side = self.session.active_side();
        debug!(side = %side, turn = self.session.turn, "draw phase");

        {
            let (active, _, rng) = self.session.split_mut(side);
            active.deck.draw_card(rng);
        }

        self.session.phase = Phase::Action;
        self.session.actions_remaining = self.session.actions_per_turn;
        self.events.publish(CombatEvent::StateChanged);

        if side == Side::Enemy {
            self.enemy_thinking = false;
        }
    }
}

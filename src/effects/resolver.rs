//! Effect resolution - applying a played card to combatant state.
//!
//! The resolver is a dispatcher keyed on `CardType`. It receives the played
//! card's definition plus mutable source and target state and performs the
//! mutations; it never touches phases, budgets, or the event queue. The
//! orchestrator owns those and runs its terminal check after resolution,
//! which is why damage is allowed to push HP below zero here.

use tracing::debug;

use crate::cards::{CardDefinition, CardType};
use crate::core::{CombatantState, GameRng};

/// Which of the (source, target) pair currently holds the turn.
///
/// Most effects act on a fixed role (damage on the target, armor on the
/// source). ExtraAction acts on whoever is taking their turn, which is the
/// source for a normal play but not necessarily in general, so the caller
/// states it explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnHolder {
    Source,
    Target,
}

/// Resolves card effects on combatant state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve one played card.
    ///
    /// `source` is the side that played the card, `target` the opposing
    /// side. `rng` drives reshuffles triggered by draw effects.
    pub fn resolve(
        card: &CardDefinition,
        source: &mut CombatantState,
        target: &mut CombatantState,
        turn_holder: TurnHolder,
        rng: &mut GameRng,
    ) {
        debug!(
            card = %card.name,
            card_type = ?card.card_type,
            value = card.value,
            "resolving card effect"
        );

        match card.card_type {
            CardType::Damage => {
                let lost = target.apply_damage(card.value);
                debug!(target = %target.name(), lost, hp = target.hp(), "damage dealt");
            }

            CardType::Armor => {
                source.add_armor(card.value);
                debug!(source = %source.name(), armor = source.armor(), "armor gained");
            }

            CardType::Heal => {
                let healed = source.heal(card.value);
                debug!(source = %source.name(), healed, hp = source.hp(), "healed");
            }

            CardType::Draw => {
                for _ in 0..card.value {
                    source.deck.draw_card(rng);
                }
            }

            // Placeholder semantics carried over from the prototype: the
            // turn holder draws cards, no extra plays are granted.
            CardType::ExtraAction => {
                let holder = match turn_holder {
                    TurnHolder::Source => source,
                    TurnHolder::Target => target,
                };
                for _ in 0..card.value {
                    holder.deck.draw_card(rng);
                }
            }

            CardType::HeroPower => {
                target.apply_damage(card.value);
                source.add_armor(card.value / 2);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardInstance, InstanceIdGen};

    fn card(card_type: CardType, value: i32) -> CardDefinition {
        CardDefinition::new(CardId::new(1), "Test", card_type, value)
    }

    fn combatant(name: &str) -> CombatantState {
        CombatantState::new(name, 30, 5)
    }

    fn combatant_with_deck(name: &str, cards: usize) -> CombatantState {
        let mut c = combatant(name);
        let mut ids = InstanceIdGen::new();
        let mut rng = GameRng::new(42);
        let instances = (0..cards)
            .map(|i| CardInstance::new(ids.allocate(), CardId::new(i as u32)))
            .collect();
        c.deck.start_new_combat(instances, &mut rng);
        c
    }

    #[test]
    fn test_damage_hits_target() {
        let mut source = combatant("Hero");
        let mut target = combatant("Goblin");
        let mut rng = GameRng::new(42);

        EffectResolver::resolve(
            &card(CardType::Damage, 6),
            &mut source,
            &mut target,
            TurnHolder::Source,
            &mut rng,
        );

        assert_eq!(target.hp(), 24);
        assert_eq!(source.hp(), 30);
    }

    #[test]
    fn test_damage_consumes_armor_first() {
        let mut source = combatant("Hero");
        let mut target = combatant("Goblin");
        target.add_armor(4);
        let mut rng = GameRng::new(42);

        EffectResolver::resolve(
            &card(CardType::Damage, 6),
            &mut source,
            &mut target,
            TurnHolder::Source,
            &mut rng,
        );

        assert_eq!(target.armor(), 0);
        assert_eq!(target.hp(), 28);
    }

    #[test]
    fn test_armor_buffs_source() {
        let mut source = combatant("Hero");
        let mut target = combatant("Goblin");
        let mut rng = GameRng::new(42);

        EffectResolver::resolve(
            &card(CardType::Armor, 4),
            &mut source,
            &mut target,
            TurnHolder::Source,
            &mut rng,
        );

        assert_eq!(source.armor(), 4);
        assert_eq!(target.armor(), 0);
    }

    #[test]
    fn test_heal_restores_source_up_to_max() {
        let mut source = combatant("Hero");
        source.apply_damage(3);
        let mut target = combatant("Goblin");
        let mut rng = GameRng::new(42);

        EffectResolver::resolve(
            &card(CardType::Heal, 10),
            &mut source,
            &mut target,
            TurnHolder::Source,
            &mut rng,
        );

        assert_eq!(source.hp(), 30);
    }

    #[test]
    fn test_draw_respects_hand_cap_per_card() {
        // 8 in deck, hand starts at 5 (full). Each of the 3 draws is
        // independently absorbed.
        let mut source = combatant_with_deck("Hero", 13);
        let mut target = combatant("Goblin");
        let mut rng = GameRng::new(42);
        assert_eq!(source.deck.hand().len(), 5);

        EffectResolver::resolve(
            &card(CardType::Draw, 3),
            &mut source,
            &mut target,
            TurnHolder::Source,
            &mut rng,
        );

        assert_eq!(source.deck.hand().len(), 5);
        assert_eq!(source.deck.deck().len(), 8);
    }

    #[test]
    fn test_draw_fills_partial_hand() {
        let mut source = combatant_with_deck("Hero", 13);
        let mut target = combatant("Goblin");
        let mut rng = GameRng::new(42);

        let played = source.deck.hand()[0].id;
        source.deck.play_card(played);
        assert_eq!(source.deck.hand().len(), 4);

        EffectResolver::resolve(
            &card(CardType::Draw, 3),
            &mut source,
            &mut target,
            TurnHolder::Source,
            &mut rng,
        );

        assert_eq!(source.deck.hand().len(), 5);
    }

    #[test]
    fn test_extra_action_draws_for_turn_holder() {
        let mut source = combatant("Hero");
        let mut target = combatant_with_deck("Goblin", 13);
        let mut rng = GameRng::new(42);

        let played = target.deck.hand()[0].id;
        target.deck.play_card(played);
        assert_eq!(target.deck.hand().len(), 4);

        EffectResolver::resolve(
            &card(CardType::ExtraAction, 1),
            &mut source,
            &mut target,
            TurnHolder::Target,
            &mut rng,
        );

        assert_eq!(target.deck.hand().len(), 5);
        assert!(source.deck.hand().is_empty());
    }

    #[test]
    fn test_hero_power_is_damage_plus_half_armor() {
        let mut source = combatant("Hero");
        let mut target = combatant("Goblin");
        let mut rng = GameRng::new(42);

        EffectResolver::resolve(
            &card(CardType::HeroPower, 7),
            &mut source,
            &mut target,
            TurnHolder::Source,
            &mut rng,
        );

        assert_eq!(target.hp(), 23);
        // Integer division: 7 / 2 = 3.
        assert_eq!(source.armor(), 3);
    }
}

//! Deck lifecycle and state-arithmetic properties.
//!
//! Property-based coverage of the invariants the combat core rests on:
//! pile conservation, the hand cap, shuffle permutation, and the
//! armor-first damage arithmetic.

use card_combat::cards::{CardId, CardInstance, InstanceIdGen};
use card_combat::core::{CombatantState, GameRng};
use card_combat::deck::{DeckState, DrawOutcome};

use proptest::prelude::*;

fn instances(count: usize) -> Vec<CardInstance> {
    let mut ids = InstanceIdGen::new();
    (0..count)
        .map(|i| CardInstance::new(ids.allocate(), CardId::new(i as u32)))
        .collect()
}

#[test]
fn test_shuffle_same_seed_same_order() {
    let mut a = DeckState::new(0);
    let mut b = DeckState::new(0);

    a.start_new_combat(instances(20), &mut GameRng::new(9));
    b.start_new_combat(instances(20), &mut GameRng::new(9));

    assert_eq!(a.deck(), b.deck());
}

#[test]
fn test_reshuffle_only_when_deck_empty() {
    let mut state = DeckState::new(5);
    let mut rng = GameRng::new(42);

    state.start_new_combat(instances(7), &mut rng);
    assert_eq!(state.deck().len(), 2);

    // Put a card in the discard, then draw with the deck non-empty: the
    // discard must not be touched.
    let played = state.hand()[0].id;
    state.play_card(played);

    state.draw_card(&mut rng);
    assert_eq!(state.discard_pile().len(), 1);
    assert_eq!(state.deck().len(), 1);
}

proptest! {
    /// Every instance stays in exactly one pile through arbitrary
    /// draw/play sequences.
    #[test]
    fn prop_conservation(
        deck_size in 1usize..30,
        max_hand in 0usize..8,
        seed in any::<u64>(),
        ops in prop::collection::vec(0u8..2, 0..60),
    ) {
        let mut state = DeckState::new(max_hand);
        let mut rng = GameRng::new(seed);
        state.start_new_combat(instances(deck_size), &mut rng);

        for op in ops {
            match op {
                0 => {
                    state.draw_card(&mut rng);
                }
                _ => {
                    if let Some(card) = state.hand().first().copied() {
                        state.play_card(card.id);
                    }
                }
            }

            prop_assert_eq!(state.total_cards(), deck_size);
            prop_assert!(state.hand().len() <= max_hand);
        }
    }

    /// A draw never grows the hand past its capacity.
    #[test]
    fn prop_draw_never_overfills_hand(
        deck_size in 0usize..20,
        max_hand in 0usize..8,
        seed in any::<u64>(),
        draws in 0usize..30,
    ) {
        let mut state = DeckState::new(max_hand);
        let mut rng = GameRng::new(seed);
        state.start_new_combat(instances(deck_size), &mut rng);

        for _ in 0..draws {
            let at_cap = state.hand().len() >= max_hand;
            let outcome = state.draw_card(&mut rng);
            if at_cap {
                // A draw at the cap is absorbed, never taken.
                prop_assert_eq!(outcome, DrawOutcome::HandFull);
            }
            prop_assert!(state.hand().len() <= max_hand);
        }
    }

    /// Shuffling permutes the deck: same multiset of instances.
    #[test]
    fn prop_shuffle_is_permutation(
        deck_size in 0usize..40,
        seed in any::<u64>(),
    ) {
        let mut state = DeckState::new(0);
        let mut rng = GameRng::new(seed);
        state.start_new_combat(instances(deck_size), &mut rng);

        let mut before: Vec<_> = state.deck().iter().map(|c| c.id).collect();
        state.shuffle(&mut rng);
        let mut after: Vec<_> = state.deck().iter().map(|c| c.id).collect();

        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Armor-first damage arithmetic:
    /// `armor_after = max(0, armor - amount)` and
    /// `hp_after = hp - max(0, amount - armor)`.
    #[test]
    fn prop_damage_arithmetic(
        hp in 1i32..100,
        armor in 0i32..50,
        amount in 0i32..150,
    ) {
        let mut c = CombatantState::new("Target", hp, 5);
        c.add_armor(armor);

        c.apply_damage(amount);

        prop_assert_eq!(c.armor(), (armor - amount).max(0));
        prop_assert_eq!(c.hp(), hp - (amount - armor).max(0));
    }

    /// Healing is clamped to the combatant's maximum HP.
    #[test]
    fn prop_heal_clamped(
        max_hp in 1i32..100,
        damage in 0i32..100,
        heal in 0i32..200,
    ) {
        let mut c = CombatantState::new("Target", max_hp, 5);
        c.apply_damage(damage);

        c.heal(heal);

        prop_assert!(c.hp() <= max_hp);
    }
}

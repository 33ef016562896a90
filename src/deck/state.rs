//! Per-combatant deck, hand, and discard piles.
//!
//! `DeckState` owns the three ordered collections and the operations that
//! move cards between them. Every instance is in exactly one pile at any
//! time, so the total count across the piles stays equal to the deck size
//! the combat started with.
//!
//! Resource exhaustion (hand at capacity, nothing left to draw) is absorbed
//! and reported through `DrawOutcome`, never as an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::{CardId, CardInstance, InstanceId};
use crate::core::GameRng;

/// Default hand capacity.
pub const DEFAULT_MAX_HAND_SIZE: usize = 5;

/// Result of a draw attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// A card moved from the deck head into the hand.
    Drawn(InstanceId),
    /// The hand is at capacity; nothing moved.
    HandFull,
    /// Deck and discard are both empty; nothing moved.
    Exhausted,
}

/// The deck, hand, and discard piles of one combatant.
///
/// Pile order is significant: the deck head (index 0) is the next draw,
/// the hand preserves draw order for presentation, and the discard stacks
/// plays in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckState {
    deck: Vec<CardInstance>,
    hand: Vec<CardInstance>,
    discard: Vec<CardInstance>,
    max_hand_size: usize,
}

impl DeckState {
    /// Create empty piles with the given hand capacity.
    #[must_use]
    pub fn new(max_hand_size: usize) -> Self {
        Self {
            deck: Vec::new(),
            hand: Vec::new(),
            discard: Vec::new(),
            max_hand_size,
        }
    }

    /// Get the draw pile, head first.
    #[must_use]
    pub fn deck(&self) -> &[CardInstance] {
        &self.deck
    }

    /// Get the hand in draw order.
    #[must_use]
    pub fn hand(&self) -> &[CardInstance] {
        &self.hand
    }

    /// Get the discard pile in play order.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardInstance] {
        &self.discard
    }

    /// Get the hand capacity.
    #[must_use]
    pub fn max_hand_size(&self) -> usize {
        self.max_hand_size
    }

    /// Total cards across all three piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Find a card in hand by instance id.
    #[must_use]
    pub fn hand_card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Reset the piles for a new combat.
    ///
    /// Discards any prior instances, takes `cards` as the new deck in the
    /// given (catalog) order, shuffles, and draws the starting hand up to
    /// capacity.
    pub fn start_new_combat(&mut self, cards: Vec<CardInstance>, rng: &mut GameRng) {
        debug!(count = cards.len(), "starting new combat deck");
        self.deck = cards;
        self.hand.clear();
        self.discard.clear();

        self.shuffle(rng);

        for _ in 0..self.max_hand_size {
            self.draw_card(rng);
        }
    }

    /// Shuffle the draw pile in place.
    ///
    /// Fisher-Yates: each index swaps with a uniformly chosen index from
    /// itself to the end.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let n = self.deck.len();
        for i in 0..n {
            let j = rng.gen_range_usize(i..n);
            self.deck.swap(i, j);
        }
    }

    /// Draw the deck head into the hand.
    ///
    /// No-op if the hand is at capacity. If the deck is empty the discard
    /// is reshuffled into the deck first; if there is still nothing to
    /// draw, the attempt is absorbed.
    pub fn draw_card(&mut self, rng: &mut GameRng) -> DrawOutcome {
        if self.hand.len() >= self.max_hand_size {
            return DrawOutcome::HandFull;
        }

        if self.deck.is_empty() {
            self.reshuffle_discard(rng);
        }
        if self.deck.is_empty() {
            return DrawOutcome::Exhausted;
        }

        let card = self.deck.remove(0);
        self.hand.push(card);
        DrawOutcome::Drawn(card.id)
    }

    /// Play a card from the hand into the discard.
    ///
    /// Returns the played card's definition id, or `None` (logged, no state
    /// change) if the instance is not currently in hand.
    pub fn play_card(&mut self, id: InstanceId) -> Option<CardId> {
        let Some(pos) = self.hand.iter().position(|c| c.id == id) else {
            warn!(instance = id.raw(), "attempted to play a card that is not in hand");
            return None;
        };

        let card = self.hand.remove(pos);
        self.discard.push(card);
        Some(card.card)
    }

    /// Move the discard into the deck and shuffle.
    fn reshuffle_discard(&mut self, rng: &mut GameRng) {
        if self.discard.is_empty() {
            return;
        }

        debug!(count = self.discard.len(), "reshuffling discard into deck");
        self.deck.append(&mut self.discard);
        self.shuffle(rng);
    }
}

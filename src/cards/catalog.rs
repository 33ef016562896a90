//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores all card definitions available to a combat.
//! It provides fast lookup by `CardId` and supports iteration. The catalog
//! loader (an external collaborator) fills it before combat starts.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardType};

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use card_combat::cards::{CardCatalog, CardDefinition, CardId, CardType};
///
/// let mut catalog = CardCatalog::new();
///
/// let strike = CardDefinition::new(CardId::new(1), "Strike", CardType::Damage, 6);
/// catalog.register(strike);
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    next_id: u32,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Register a card with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(
        &mut self,
        name: impl Into<String>,
        card_type: CardType,
        value: i32,
    ) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;

        let card = CardDefinition::new(id, name, card_type, value);
        self.register(card);
        id
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// Use when the ID is known to be registered (e.g., after deck
    /// validation at setup).
    #[must_use]
    pub fn get_unchecked(&self, id: CardId) -> &CardDefinition {
        self.cards.get(&id).expect("Card not found in catalog")
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &CardDefinition> {
        self.cards
            .values()
            .filter(move |c| c.card_type == card_type)
    }
}

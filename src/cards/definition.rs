//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type.
//! For example, "Strike" is a Damage card with value 6 - these are part
//! of the definition and never change during a combat.
//!
//! Runtime identity (which physical copy is in which pile) is tracked
//! separately by `CardInstance`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// This identifies the "kind" of card (e.g., "Strike"), not a specific
/// copy in a combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card does when it resolves.
///
/// The effect resolver dispatches on this; `CardDefinition::value` scales
/// the effect (damage dealt, armor gained, cards drawn, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Deal `value` damage to the target, armor first.
    Damage,
    /// Grant the playing side `value` armor.
    Armor,
    /// Restore up to `value` HP to the playing side.
    Heal,
    /// Draw `value` cards, one at a time.
    Draw,
    /// Draw `value` cards for the side holding the turn.
    ExtraAction,
    /// Damage the target for `value`, then armor the playing side for
    /// `value / 2`.
    HeroPower,
}

/// Card rarity tier.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Static card definition.
///
/// Many instances may reference one definition through the catalog; the
/// definition itself is shared, read-only data.
///
/// ## Example
///
/// ```
/// use card_combat::cards::{CardDefinition, CardId, CardType, Rarity};
///
/// let strike = CardDefinition::new(CardId::new(1), "Strike", CardType::Damage, 6)
///     .with_rarity(Rarity::Common)
///     .with_description("Deal 6 damage.");
///
/// assert_eq!(strike.value, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// What the card does when resolved.
    pub card_type: CardType,

    /// Magnitude of the effect.
    pub value: i32,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Flavor/rules text for display.
    pub description: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType, value: i32) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            value,
            rarity: Rarity::default(),
            description: String::new(),
        }
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

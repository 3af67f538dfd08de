//! Equipped items and the flat bonuses they grant to effects.

use std::collections::BTreeMap;

use super::element::Element;

/// Equipment slots an actor can fill.
///
/// `Consumable` holds the currently active consumable buff (an elixir, a
/// charm) so it contributes bonuses the same way worn gear does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
    Trinket,
    Consumable,
}

/// Which effect category a bonus feeds into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BonusTag {
    /// All damage effects.
    Damage,
    /// Damage effects of one element only.
    ElementalDamage(Element),
    Healing,
    /// Mana restore and drain effects.
    Mana,
    /// Shield and absorption magnitude.
    Ward,
    /// Stat boosts and debuffs.
    StatChange,
    /// Flat mana points per regeneration tick.
    ManaRegen,
}

/// A flat bonus carried by an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemModifier {
    pub tag: BonusTag,
    pub amount: i32,
}

impl ItemModifier {
    pub const fn new(tag: BonusTag, amount: i32) -> Self {
        Self { tag, amount }
    }
}

/// An equipped item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: Vec<ItemModifier>,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            modifiers: Vec::new(),
        }
    }

    /// Builder: add a modifier.
    pub fn with_modifier(mut self, tag: BonusTag, amount: i32) -> Self {
        self.modifiers.push(ItemModifier::new(tag, amount));
        self
    }
}

/// Slot → item mapping for one actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Equipment {
    slots: BTreeMap<EquipmentSlot, Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equips `item`, returning whatever occupied the slot.
    pub fn equip(&mut self, slot: EquipmentSlot, item: Item) -> Option<Item> {
        self.slots.insert(slot, item)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slots.remove(&slot)
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    /// Sum of every equipped modifier matching any of `tags`.
    pub fn bonus(&self, tags: &[BonusTag]) -> i32 {
        self.slots
            .values()
            .flat_map(|item| item.modifiers.iter())
            .filter(|m| tags.contains(&m.tag))
            .map(|m| m.amount)
            .sum()
    }
}

use std::collections::BTreeMap;

/// Inventory and currency owned by the caller.
///
/// Only the acquisition validator touches it, to check and pay learn costs.
pub trait Inventory {
    fn has_item(&self, item: &str) -> bool;

    /// Removes one unit of `item`; false if none was held.
    fn remove_item(&mut self, item: &str) -> bool;

    fn has_gold(&self, amount: u32) -> bool;

    /// Deducts `amount`; false (and no change) if the balance is short.
    fn remove_gold(&mut self, amount: u32) -> bool;
}

/// Simple gold balance plus item counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Purse {
    pub gold: u32,
    pub items: BTreeMap<String, u32>,
}

impl Purse {
    pub fn new(gold: u32) -> Self {
        Self {
            gold,
            items: BTreeMap::new(),
        }
    }

    /// Builder: add `count` units of `item`.
    pub fn with_item(mut self, item: impl Into<String>, count: u32) -> Self {
        self.add_item(item, count);
        self
    }

    pub fn add_item(&mut self, item: impl Into<String>, count: u32) {
        *self.items.entry(item.into()).or_default() += count;
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn count(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }
}

impl Inventory for Purse {
    fn has_item(&self, item: &str) -> bool {
        self.count(item) > 0
    }

    fn remove_item(&mut self, item: &str) -> bool {
        match self.items.get_mut(item) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.items.remove(item);
                true
            }
            None => false,
        }
    }

    fn has_gold(&self, amount: u32) -> bool {
        self.gold >= amount
    }

    fn remove_gold(&mut self, amount: u32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_last_item_drops_entry() {
        let mut purse = Purse::new(0).with_item("scroll_of_fire", 1);
        assert!(purse.remove_item("scroll_of_fire"));
        assert!(!purse.has_item("scroll_of_fire"));
        assert!(!purse.remove_item("scroll_of_fire"));
        assert!(purse.items.is_empty());
    }

    #[test]
    fn gold_never_goes_negative() {
        let mut purse = Purse::new(50);
        assert!(!purse.remove_gold(60));
        assert_eq!(purse.gold, 50);
        assert!(purse.remove_gold(50));
        assert_eq!(purse.gold, 0);
    }
}

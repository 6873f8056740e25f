//! Player inventory: named stacks of food and gift items.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::item::{Item, ItemCategory};
use crate::save::StoredItem;

/// Servings in each starter stack.
const STARTER_QUANTITY: u32 = 5;
/// Fullness restored by any food rebuilt from a saved game.
const STORED_FOOD_FULLNESS: u32 = 30;
/// Happiness restored by any gift rebuilt from a saved game.
const STORED_GIFT_VALUE: u32 = 25;

/// The player's item stacks, keyed by item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    /// Stacks per item name.
    items: HashMap<String, Vec<Item>>,
}

impl Inventory {
    /// Creates an inventory seeded with the starter catalog.
    #[must_use]
    pub fn new() -> Self {
        let mut inventory = Self::empty();
        for item in Self::starter_catalog() {
            inventory.add_item(item);
        }
        inventory
    }

    /// Creates an inventory with nothing in it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Items every new player starts with.
    fn starter_catalog() -> [Item; 9] {
        [
            Item::food("Apple", 30, STARTER_QUANTITY),
            Item::food("Banana", 35, STARTER_QUANTITY),
            Item::food("Bread", 25, STARTER_QUANTITY),
            Item::food("Cheese", 15, STARTER_QUANTITY),
            Item::food("Coffee", 10, STARTER_QUANTITY),
            Item::gift("Collar", 25, STARTER_QUANTITY),
            Item::gift("Bowl", 30, STARTER_QUANTITY),
            Item::gift("Key Chain", 40, STARTER_QUANTITY),
            Item::gift("Portrait", 50, STARTER_QUANTITY),
        ]
    }

    /// Adds an item, merging quantity into an existing stack of the same name.
    pub fn add_item(&mut self, item: Item) {
        let stack = self.items.entry(item.name().to_string()).or_default();
        match stack.first_mut() {
            Some(existing) => existing.add_quantity(item.quantity()),
            None => stack.push(item),
        }
    }

    /// Returns all stacks, keyed by item name.
    #[must_use]
    pub fn items(&self) -> &HashMap<String, Vec<Item>> {
        &self.items
    }

    /// Returns the stacks for one item name, or an empty slice.
    #[must_use]
    pub fn items_by_name(&self, name: &str) -> &[Item] {
        self.items.get(name).map_or(&[], Vec::as_slice)
    }

    /// Returns all items in the named category ("Food" or "Gift").
    ///
    /// The label is matched case-insensitively; an unknown label yields
    /// an empty list.
    #[must_use]
    pub fn items_by_category(&self, category: &str) -> Vec<&Item> {
        let Some(wanted) = ItemCategory::parse(category) else {
            return Vec::new();
        };
        let mut matches = Vec::new();
        for stack in self.items.values() {
            if stack.first().is_some_and(|item| item.category() == wanted) {
                matches.extend(stack.iter());
            }
        }
        matches
    }

    /// Checks if any stack exists for the name.
    #[must_use]
    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Returns the total servings across all stacks of the name.
    #[must_use]
    pub fn total_quantity(&self, name: &str) -> u32 {
        self.items_by_name(name)
            .iter()
            .map(Item::quantity)
            .sum()
    }

    /// Consumes one serving of the named item.
    ///
    /// Returns `false` without changing anything when the item is out of
    /// stock. A stack that reaches zero is removed entirely.
    pub fn use_item(&mut self, name: &str) -> bool {
        let Some(stack) = self.items.get_mut(name) else {
            warn!("Cannot use '{name}': not in inventory");
            return false;
        };
        let Some(item) = stack.first_mut() else {
            warn!("Cannot use '{name}': not in inventory");
            return false;
        };
        item.decrease_quantity(1);
        if item.is_empty() {
            stack.remove(0);
        }
        if stack.is_empty() {
            self.items.remove(name);
        }
        true
    }

    /// Converts the inventory to its stored form for a saved game.
    #[must_use]
    pub fn to_stored_map(&self) -> HashMap<String, Vec<StoredItem>> {
        self.items
            .iter()
            .map(|(name, stack)| {
                (
                    name.clone(),
                    stack.iter().map(StoredItem::from_item).collect(),
                )
            })
            .collect()
    }

    /// Rebuilds an inventory from its stored form.
    ///
    /// Stored records keep only the category, so every food comes back
    /// restoring 30 fullness and every gift 25 happiness regardless of
    /// the magnitudes it had when saved. Existing save files rely on
    /// these values.
    #[must_use]
    pub fn from_stored_map(stored: &HashMap<String, Vec<StoredItem>>) -> Self {
        let mut inventory = Self::empty();
        for (name, stack) in stored {
            for record in stack {
                if record.quantity == 0 {
                    debug!("Skipping empty stored stack for '{name}'");
                    continue;
                }
                match ItemCategory::parse(&record.kind) {
                    Some(ItemCategory::Food) => inventory.add_item(Item::food(
                        name.clone(),
                        STORED_FOOD_FULLNESS,
                        record.quantity,
                    )),
                    Some(ItemCategory::Gift) => inventory.add_item(Item::gift(
                        name.clone(),
                        STORED_GIFT_VALUE,
                        record.quantity,
                    )),
                    None => {
                        warn!("Skipping stored item '{}' with unknown type '{}'", name, record.kind);
                    }
                }
            }
        }
        inventory
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    #[test]
    fn test_starter_inventory() {
        let inventory = Inventory::new();
        assert_eq!(inventory.items().len(), 9);
        assert_eq!(inventory.total_quantity("Apple"), 5);
        assert_eq!(inventory.total_quantity("Portrait"), 5);
        assert_eq!(inventory.items_by_category("Food").len(), 5);
        assert_eq!(inventory.items_by_category("Gift").len(), 4);
    }

    #[test]
    fn test_empty_inventory() {
        let inventory = Inventory::empty();
        assert!(inventory.items().is_empty());
        assert!(!inventory.has_item("Apple"));
        assert_eq!(inventory.total_quantity("Apple"), 0);
    }

    #[test]
    fn test_add_item_merges_quantity() {
        let mut inventory = Inventory::new();
        inventory.add_item(Item::food("Apple", 30, 3));

        assert_eq!(inventory.total_quantity("Apple"), 8);
        assert_eq!(inventory.items_by_name("Apple").len(), 1);
    }

    #[test]
    fn test_add_new_item() {
        let mut inventory = Inventory::empty();
        inventory.add_item(Item::gift("Ball", 28, 5));

        assert!(inventory.has_item("Ball"));
        assert_eq!(inventory.total_quantity("Ball"), 5);
    }

    #[test]
    fn test_items_by_name_missing() {
        let inventory = Inventory::new();
        assert!(inventory.items_by_name("Caviar").is_empty());
    }

    #[test]
    fn test_items_by_category_unknown_label() {
        let inventory = Inventory::new();
        assert!(inventory.items_by_category("Potion").is_empty());
        assert!(inventory.items_by_category("").is_empty());
    }

    #[test]
    fn test_items_by_category_case_insensitive() {
        let inventory = Inventory::new();
        assert_eq!(inventory.items_by_category("food").len(), 5);
        assert_eq!(inventory.items_by_category("GIFT").len(), 4);
    }

    #[test]
    fn test_use_item_consumes_stock() {
        let mut inventory = Inventory::empty();
        inventory.add_item(Item::food("Apple", 30, 2));

        assert!(inventory.use_item("Apple"));
        assert_eq!(inventory.total_quantity("Apple"), 1);

        assert!(inventory.use_item("Apple"));
        assert!(!inventory.has_item("Apple"));

        // Out of stock now
        assert!(!inventory.use_item("Apple"));
    }

    #[test]
    fn test_use_item_missing() {
        let mut inventory = Inventory::empty();
        assert!(!inventory.use_item("Apple"));
    }

    #[test]
    fn test_stored_round_trip_is_lossy() {
        let mut inventory = Inventory::empty();
        inventory.add_item(Item::food("Banana", 35, 4));
        inventory.add_item(Item::gift("Portrait", 50, 2));

        let stored = inventory.to_stored_map();
        let rebuilt = Inventory::from_stored_map(&stored);

        assert_eq!(rebuilt.total_quantity("Banana"), 4);
        assert_eq!(rebuilt.total_quantity("Portrait"), 2);

        // Magnitudes collapse to the stored defaults
        let banana = &rebuilt.items_by_name("Banana")[0];
        assert_eq!(banana.kind(), ItemKind::Food { fullness: 30 });
        let portrait = &rebuilt.items_by_name("Portrait")[0];
        assert_eq!(portrait.kind(), ItemKind::Gift { value: 25 });
    }

    #[test]
    fn test_from_stored_skips_unknown_kind() {
        let mut stored = HashMap::new();
        stored.insert(
            "Elixir".to_string(),
            vec![StoredItem {
                kind: "Potion".to_string(),
                quantity: 3,
            }],
        );

        let inventory = Inventory::from_stored_map(&stored);
        assert!(!inventory.has_item("Elixir"));
    }

    #[test]
    fn test_from_stored_skips_zero_quantity() {
        let mut stored = HashMap::new();
        stored.insert(
            "Apple".to_string(),
            vec![StoredItem {
                kind: "Food".to_string(),
                quantity: 0,
            }],
        );

        let inventory = Inventory::from_stored_map(&stored);
        assert!(!inventory.has_item("Apple"));
    }
}

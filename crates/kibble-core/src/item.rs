//! Consumable items (food and gifts) handed to the pet.

/// What an item does when used on the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Restores fullness by the given amount when eaten.
    Food {
        /// Fullness restored per serving
        fullness: u32,
    },
    /// Restores happiness by the given amount when given.
    Gift {
        /// Happiness restored per gift
        value: u32,
    },
}

/// Coarse item category, used for filtering and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    /// Edible items
    Food,
    /// Gift items
    Gift,
}

impl ItemCategory {
    /// Returns the display label for this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Gift => "Gift",
        }
    }

    /// Parses a category from its label, case-insensitively.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("Food") {
            Some(Self::Food)
        } else if label.eq_ignore_ascii_case("Gift") {
            Some(Self::Gift)
        } else {
            None
        }
    }

    /// Returns all categories.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Food, Self::Gift]
    }
}

/// A named stack of consumables in the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display name ("Apple", "Collar", ...)
    name: String,
    /// Remaining servings
    quantity: u32,
    /// Effect when used
    kind: ItemKind,
}

impl Item {
    /// Creates a food item.
    #[must_use]
    pub fn food(name: impl Into<String>, fullness: u32, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            kind: ItemKind::Food { fullness },
        }
    }

    /// Creates a gift item.
    #[must_use]
    pub fn gift(name: impl Into<String>, value: u32, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            kind: ItemKind::Gift { value },
        }
    }

    /// Returns the item's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the remaining quantity.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the item's effect kind.
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Returns the item's category.
    #[must_use]
    pub fn category(&self) -> ItemCategory {
        match self.kind {
            ItemKind::Food { .. } => ItemCategory::Food,
            ItemKind::Gift { .. } => ItemCategory::Gift,
        }
    }

    /// Adds servings to the stack.
    pub fn add_quantity(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_add(amount);
    }

    /// Removes servings from the stack, stopping at zero.
    pub fn decrease_quantity(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_sub(amount);
    }

    /// Checks if the stack is used up.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}

//! The player: score, inventory, and care actions routed to the pet.

use tracing::debug;

use crate::audio::{AudioPort, SoundEffect};
use crate::inventory::Inventory;
use crate::item::ItemCategory;
use crate::pet::Pet;

/// Score awarded for feeding.
const FEED_SCORE: i32 = 20;
/// Score awarded for gifting.
const GIFT_SCORE: i32 = 30;
/// Score charged for a vet visit.
const VET_SCORE: i32 = -50;
/// Score awarded for playing.
const PLAY_SCORE: i32 = 10;
/// Score awarded for exercising.
const EXERCISE_SCORE: i32 = 15;
/// Score awarded for bedtime.
const BED_SCORE: i32 = 5;
/// Health restored by a vet visit.
const VET_HEAL: f64 = 50.0;

/// The player's care score. Never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    /// Current score value.
    value: u32,
}

impl Score {
    /// Returns the current score.
    #[must_use]
    pub fn value(self) -> u32 {
        self.value
    }

    /// Applies a signed score change, flooring at zero.
    pub fn apply(&mut self, delta: i32) {
        if delta >= 0 {
            self.value = self.value.saturating_add(delta.unsigned_abs());
        } else {
            self.value = self.value.saturating_sub(delta.unsigned_abs());
        }
    }
}

/// A player caring for at most one pet.
#[derive(Debug)]
pub struct Player {
    /// The player's name.
    name: String,
    /// Care score.
    score: Score,
    /// Food and gift stacks.
    inventory: Inventory,
    /// The adopted pet, if any.
    pet: Option<Pet>,
    /// Where emitted sound effects go.
    audio: Box<dyn AudioPort>,
}

impl Player {
    /// Creates a player with the starter inventory and no pet.
    #[must_use]
    pub fn new(name: impl Into<String>, audio: Box<dyn AudioPort>) -> Self {
        Self::with_inventory(name, Inventory::new(), audio)
    }

    /// Creates a player with a specific inventory.
    #[must_use]
    pub fn with_inventory(
        name: impl Into<String>,
        inventory: Inventory,
        audio: Box<dyn AudioPort>,
    ) -> Self {
        Self {
            name: name.into(),
            score: Score::default(),
            inventory,
            pet: None,
            audio,
        }
    }

    /// Adopts a pet, replacing any current one.
    pub fn adopt(&mut self, pet: Pet) {
        self.pet = Some(pet);
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score.value()
    }

    /// Overwrites the score, for restoring a saved game.
    pub fn set_score(&mut self, score: u32) {
        self.score = Score { value: score };
    }

    /// Returns the adopted pet, if any.
    #[must_use]
    pub fn pet(&self) -> Option<&Pet> {
        self.pet.as_ref()
    }

    /// Returns the inventory.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns the inventory for modification.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Advances the pet by one simulation tick.
    pub fn tick_pet(&mut self) {
        if let Some(pet) = self.pet.as_mut() {
            pet.update_stats(self.audio.as_mut());
        }
    }

    /// Feeds the pet the named food from the inventory.
    ///
    /// Consumes one serving and awards score only when the pet actually
    /// eats: nothing happens if the pet refuses, the item is missing, or
    /// the item is not food.
    pub fn feed_pet(&mut self, food_name: &str) {
        let Some(pet) = self.pet.as_mut() else {
            return;
        };
        if pet.is_angry() || pet.is_sleeping() || pet.is_dead() {
            debug!("{} is not in the mood to eat", pet.name());
            return;
        }
        let Some(item) = self.inventory.items_by_name(food_name).first().cloned() else {
            debug!("No '{food_name}' in the inventory");
            return;
        };
        if item.category() != ItemCategory::Food {
            debug!("'{food_name}' is not food");
            return;
        }
        pet.feed(&item, self.audio.as_mut());
        self.inventory.use_item(food_name);
        self.score.apply(FEED_SCORE);
    }

    /// Gives the pet the named gift from the inventory.
    ///
    /// Gifts get through to angry pets, but not sleeping or dead ones.
    pub fn gift_pet(&mut self, gift_name: &str) {
        let Some(pet) = self.pet.as_mut() else {
            return;
        };
        if pet.is_sleeping() || pet.is_dead() {
            debug!("{} cannot receive gifts right now", pet.name());
            return;
        }
        let Some(item) = self.inventory.items_by_name(gift_name).first().cloned() else {
            debug!("No '{gift_name}' in the inventory");
            return;
        };
        if item.category() != ItemCategory::Gift {
            debug!("'{gift_name}' is not a gift");
            return;
        }
        pet.give_gift(&item, self.audio.as_mut());
        self.inventory.use_item(gift_name);
        self.score.apply(GIFT_SCORE);
    }

    /// Plays with the pet.
    pub fn play_with_pet(&mut self) {
        let Some(pet) = self.pet.as_mut() else {
            return;
        };
        if pet.is_dead() || pet.is_sleeping() {
            return;
        }
        pet.play(self.audio.as_mut());
        self.score.apply(PLAY_SCORE);
    }

    /// Exercises the pet.
    pub fn exercise_pet(&mut self) {
        let Some(pet) = self.pet.as_mut() else {
            return;
        };
        if pet.is_dead() || pet.is_sleeping() || pet.is_angry() {
            return;
        }
        pet.exercise(self.audio.as_mut());
        self.score.apply(EXERCISE_SCORE);
    }

    /// Takes the pet to the vet: restores health at a score cost.
    pub fn take_pet_to_vet(&mut self) {
        let Some(pet) = self.pet.as_mut() else {
            return;
        };
        if pet.is_dead() || pet.is_sleeping() || pet.is_angry() {
            return;
        }
        let healed = pet.health() + VET_HEAL;
        pet.set_health(healed);
        self.score.apply(VET_SCORE);
        self.audio.play_effect(SoundEffect::Vet);
    }

    /// Puts the pet to bed.
    pub fn put_pet_to_bed(&mut self) {
        let Some(pet) = self.pet.as_mut() else {
            return;
        };
        if pet.is_dead() || pet.is_sleeping() || pet.is_angry() {
            return;
        }
        pet.go_to_sleep();
        self.score.apply(BED_SCORE);
    }
}

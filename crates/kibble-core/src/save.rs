//! Saved-game snapshots: capturing and restoring a player session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::audio::AudioPort;
use crate::inventory::Inventory;
use crate::item::Item;
use crate::pet::Pet;
use crate::player::Player;
use crate::species::DepletionRates;

/// Stored form of one inventory stack.
///
/// Only the category and count survive a save; item magnitudes are
/// reassigned on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItem {
    /// Category label, "Food" or "Gift".
    #[serde(rename = "type")]
    pub kind: String,
    /// Remaining servings.
    pub quantity: u32,
}

impl StoredItem {
    /// Builds the stored record for an inventory item.
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self {
            kind: item.category().label().to_string(),
            quantity: item.quantity(),
        }
    }
}

/// Player half of a saved game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    /// Player name.
    pub name: String,
    /// Care score at save time.
    pub score: u32,
    /// Stored inventory stacks, keyed by item name.
    pub inventory: HashMap<String, Vec<StoredItem>>,
}

/// Pet stats at save time, whole numbers only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetStats {
    /// Health, truncated.
    pub health: i32,
    /// Sleep, truncated.
    pub sleep: i32,
    /// Fullness, truncated.
    pub fullness: i32,
    /// Happiness, truncated.
    pub happiness: i32,
    /// Fullness lost per tick.
    pub fullness_depletion_rate: f64,
    /// Happiness lost per tick.
    pub happiness_depletion_rate: f64,
    /// Sleep lost per tick.
    pub sleep_depletion_rate: f64,
}

/// Pet half of a saved game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetInfo {
    /// Species tag.
    pub pet_type: String,
    /// The pet's given name.
    pub name: String,
    /// Stats snapshot.
    pub stats: PetStats,
}

/// A complete saved game.
///
/// The JSON field names (`playerInfo`, `petType`, and so on) are fixed;
/// existing save files depend on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    /// Player snapshot.
    pub player_info: PlayerInfo,
    /// Pet snapshot.
    pub pet_info: PetInfo,
}

impl SavedGame {
    /// Snapshots a player and their pet.
    ///
    /// Returns `None` when no pet has been adopted; there is nothing
    /// worth saving without one.
    #[must_use]
    pub fn capture(player: &Player) -> Option<Self> {
        let pet = player.pet()?;
        let rates = pet.rates();
        Some(Self {
            player_info: PlayerInfo {
                name: player.name().to_string(),
                score: player.score(),
                inventory: player.inventory().to_stored_map(),
            },
            pet_info: PetInfo {
                pet_type: pet.species_tag().to_string(),
                name: pet.name().to_string(),
                stats: PetStats {
                    health: pet.health() as i32,
                    sleep: pet.sleep() as i32,
                    fullness: pet.fullness() as i32,
                    happiness: pet.happiness() as i32,
                    fullness_depletion_rate: rates.fullness,
                    happiness_depletion_rate: rates.happiness,
                    sleep_depletion_rate: rates.sleep,
                },
            },
        })
    }

    /// Returns the name this game saves under: the pet's name.
    #[must_use]
    pub fn save_name(&self) -> &str {
        &self.pet_info.name
    }

    /// Rebuilds a live player session from this snapshot.
    #[must_use]
    pub fn restore(&self, audio: Box<dyn AudioPort>) -> Player {
        let inventory = Inventory::from_stored_map(&self.player_info.inventory);
        let mut player = Player::with_inventory(self.player_info.name.clone(), inventory, audio);
        player.set_score(self.player_info.score);

        let stats = &self.pet_info.stats;
        let rates = DepletionRates::new(
            stats.fullness_depletion_rate,
            stats.happiness_depletion_rate,
            stats.sleep_depletion_rate,
        );
        player.adopt(Pet::with_stats(
            self.pet_info.pet_type.clone(),
            self.pet_info.name.clone(),
            f64::from(stats.health),
            f64::from(stats.fullness),
            f64::from(stats.happiness),
            f64::from(stats.sleep),
            rates,
        ));
        player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::item::ItemKind;
    use crate::species::Species;

    fn sample_player() -> Player {
        let mut player = Player::new("Alex", Box::new(NullAudio));
        player.adopt(Pet::from_species(Species::Mimitchi, "Chomper"));
        player.set_score(120);
        player
    }

    #[test]
    fn test_capture_without_pet_is_none() {
        let player = Player::new("Alex", Box::new(NullAudio));
        assert!(SavedGame::capture(&player).is_none());
    }

    #[test]
    fn test_capture_truncates_stats() {
        let mut player = Player::new("Alex", Box::new(NullAudio));
        player.adopt(Pet::with_stats(
            "Mimitchi",
            "Chomper",
            75.9,
            20.4,
            99.99,
            60.5,
            Species::Mimitchi.rates(),
        ));

        let saved = SavedGame::capture(&player).expect("pet adopted");
        assert_eq!(saved.pet_info.stats.health, 75);
        assert_eq!(saved.pet_info.stats.fullness, 20);
        assert_eq!(saved.pet_info.stats.happiness, 99);
        assert_eq!(saved.pet_info.stats.sleep, 60);
    }

    #[test]
    fn test_save_name_is_pet_name() {
        let saved = SavedGame::capture(&sample_player()).expect("pet adopted");
        assert_eq!(saved.save_name(), "Chomper");
    }

    #[test]
    fn test_json_uses_fixed_keys() {
        let saved = SavedGame::capture(&sample_player()).expect("pet adopted");
        let json = serde_json::to_string_pretty(&saved).expect("serializable");

        assert!(json.contains("\"playerInfo\""));
        assert!(json.contains("\"petInfo\""));
        assert!(json.contains("\"petType\""));
        assert!(json.contains("\"fullnessDepletionRate\""));
        assert!(json.contains("\"happinessDepletionRate\""));
        assert!(json.contains("\"sleepDepletionRate\""));
        assert!(json.contains("\"type\""));
        assert!(!json.contains("\"player_info\""));
    }

    #[test]
    fn test_round_trip_restores_session() {
        let saved = SavedGame::capture(&sample_player()).expect("pet adopted");
        let json = serde_json::to_string_pretty(&saved).expect("serializable");
        let reloaded: SavedGame = serde_json::from_str(&json).expect("parseable");
        assert_eq!(reloaded, saved);

        let player = reloaded.restore(Box::new(NullAudio));
        assert_eq!(player.name(), "Alex");
        assert_eq!(player.score(), 120);

        let pet = player.pet().expect("pet restored");
        assert_eq!(pet.name(), "Chomper");
        assert_eq!(pet.species_tag(), "Mimitchi");
        assert_eq!(pet.health(), 100.0);
        assert_eq!(pet.rates(), Species::Mimitchi.rates());
        assert!(!pet.is_dead());

        // Starter stacks survive by name and count
        assert_eq!(player.inventory().total_quantity("Apple"), 5);
        assert_eq!(player.inventory().total_quantity("Portrait"), 5);
    }

    #[test]
    fn test_restore_reassigns_item_magnitudes() {
        let saved = SavedGame::capture(&sample_player()).expect("pet adopted");
        let player = saved.restore(Box::new(NullAudio));

        // Banana was 35 fullness when saved; stored form keeps category only
        let banana = &player.inventory().items_by_name("Banana")[0];
        assert_eq!(banana.kind(), ItemKind::Food { fullness: 30 });
        let portrait = &player.inventory().items_by_name("Portrait")[0];
        assert_eq!(portrait.kind(), ItemKind::Gift { value: 25 });
    }
}

//! The game loop: periodic stat ticks, inventory replenishment, and the
//! game-over latch.

use std::time::Duration;

use tracing::{debug, info};

use crate::clock::{Clock, MonotonicClock, WallClock};
use crate::item::Item;
use crate::pet::Pet;
use crate::player::Player;

/// How often the pet's stats tick.
pub const STAT_TICK_INTERVAL: Duration = Duration::from_secs(5);
/// How often the inventory restocks.
pub const REPLENISH_INTERVAL: Duration = Duration::from_secs(300);

/// Foods a restock can deliver.
const REPLENISH_FOODS: [&str; 5] = ["Apple", "Bread", "Cheese", "Banana", "Carrot"];
/// Gifts a restock can deliver.
const REPLENISH_GIFTS: [&str; 4] = ["Toy", "Collar", "Ball", "Blanket"];
/// Stacks of each category delivered per restock.
const REPLENISH_PICKS: usize = 2;
/// Servings in each restocked stack.
const REPLENISH_QUANTITY: u32 = 5;
/// Fullness range for restocked foods.
const FOOD_FULLNESS_MIN: u32 = 20;
const FOOD_FULLNESS_MAX: u32 = 29;
/// Happiness range for restocked gifts.
const GIFT_VALUE_MIN: u32 = 25;
const GIFT_VALUE_MAX: u32 = 34;

/// Small linear-congruential RNG for restock rolls.
#[derive(Debug, Clone)]
pub struct ReplenishRng {
    state: u64,
}

impl ReplenishRng {
    /// Creates a new RNG with seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Gets the next random u64.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Gets a random u32 in range [min, max].
    pub fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        min + (self.next_u64() % u64::from(max - min + 1)) as u32
    }

    /// Chooses a random item from a slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = (self.next_u64() % items.len() as u64) as usize;
        items.get(index)
    }
}

/// Drives a player's session: ticks the pet on one cadence, restocks the
/// inventory on another, and latches game over once the pet dies.
///
/// The loop never blocks. Call [`update_game_logic`] from the frontend's
/// own loop; intervals that have elapsed since the last call fire once.
///
/// [`update_game_logic`]: GamePlayLoop::update_game_logic
#[derive(Debug)]
pub struct GamePlayLoop {
    /// The player whose session this is.
    player: Player,
    /// Clock for the stat tick cadence.
    stat_clock: Box<dyn Clock>,
    /// Clock for the restock cadence.
    wall_clock: Box<dyn Clock>,
    /// Reading when the stat tick last fired.
    last_stat_tick: Duration,
    /// Reading when the restock last fired.
    last_replenish: Duration,
    /// Restock roll source.
    rng: ReplenishRng,
    /// The loop has been constructed and is running.
    started: bool,
    /// The pet died; all updates stop.
    over: bool,
}

impl GamePlayLoop {
    /// Creates a running loop over the player using real clocks.
    #[must_use]
    pub fn new(player: Player) -> Self {
        let wall_clock = WallClock;
        let seed = wall_clock.now().as_nanos() as u64;
        Self::with_clocks(player, Box::new(MonotonicClock::new()), Box::new(wall_clock), seed)
    }

    /// Creates a running loop with caller-supplied clocks and seed.
    ///
    /// Both intervals measure from the clock readings taken here, so the
    /// first firings come one full interval after construction.
    #[must_use]
    pub fn with_clocks(
        player: Player,
        stat_clock: Box<dyn Clock>,
        wall_clock: Box<dyn Clock>,
        seed: u64,
    ) -> Self {
        let last_stat_tick = stat_clock.now();
        let last_replenish = wall_clock.now();
        Self {
            player,
            stat_clock,
            wall_clock,
            last_stat_tick,
            last_replenish,
            rng: ReplenishRng::new(seed),
            started: true,
            over: false,
        }
    }

    /// Runs any intervals that have elapsed since the last call.
    pub fn update_game_logic(&mut self) {
        if self.over {
            return;
        }

        let now = self.stat_clock.now();
        if now.saturating_sub(self.last_stat_tick) >= STAT_TICK_INTERVAL {
            self.player.tick_pet();
            self.check_pet_state();
            self.last_stat_tick = now;
        }

        let now = self.wall_clock.now();
        if now.saturating_sub(self.last_replenish) >= REPLENISH_INTERVAL {
            self.replenish_inventory();
            self.last_replenish = now;
        }
    }

    /// Latches game over if the pet has died.
    fn check_pet_state(&mut self) {
        if self.player.pet().is_some_and(Pet::is_dead) {
            self.over = true;
            info!("{} has died, game over", self.pet_name());
        }
    }

    fn pet_name(&self) -> &str {
        self.player.pet().map_or("the pet", Pet::name)
    }

    /// Restocks the inventory with random food and gift stacks.
    fn replenish_inventory(&mut self) {
        for _ in 0..REPLENISH_PICKS {
            if let Some(name) = self.rng.choose(&REPLENISH_FOODS).copied() {
                let fullness = self.rng.range_u32(FOOD_FULLNESS_MIN, FOOD_FULLNESS_MAX);
                self.player
                    .inventory_mut()
                    .add_item(Item::food(name, fullness, REPLENISH_QUANTITY));
                debug!("Restocked {REPLENISH_QUANTITY} x '{name}'");
            }
        }
        for _ in 0..REPLENISH_PICKS {
            if let Some(name) = self.rng.choose(&REPLENISH_GIFTS).copied() {
                let value = self.rng.range_u32(GIFT_VALUE_MIN, GIFT_VALUE_MAX);
                self.player
                    .inventory_mut()
                    .add_item(Item::gift(name, value, REPLENISH_QUANTITY));
                debug!("Restocked {REPLENISH_QUANTITY} x '{name}'");
            }
        }
    }

    /// Checks if the session has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.over
    }

    /// Checks if the session is running.
    #[must_use]
    pub fn is_game_started(&self) -> bool {
        self.started
    }

    /// Returns the player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the player for modification.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}

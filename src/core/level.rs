//! Level module - per-level configuration and item generation
//!
//! Generation contract:
//! 1. One kind per set, drawn with replacement from the configured subset;
//!    three items of that kind go into a flat pool.
//! 2. The pool is shuffled.
//! 3. Every (shelf, slot, layer) position up to grid capacity is enumerated,
//!    shuffled, and the first pool.len() positions are assigned one-to-one.
//!
//! Capacity shortfall is a configuration error handled by clamping the set
//! count at config sanitization, never at generation time.

use serde::{Deserialize, Serialize};

use crate::core::rng::SimpleRng;
use crate::types::{Item, ItemKind, Spot, MATCH_SIZE};

/// Countdown resource for a level: a click budget or a wall-clock budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Budget {
    /// Each accepted selection consumes one move
    Moves { limit: u32 },
    /// Time runs down on ticks; star cutoffs are absolute remaining seconds
    #[serde(rename_all = "camelCase")]
    Timed {
        limit_s: u32,
        three_star_s: u32,
        two_star_s: u32,
    },
}

/// Immutable per-level parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    pub level_number: u32,
    pub shelf_count: u8,
    pub slots_per_shelf: u8,
    pub layers_per_slot: u8,
    /// Item kinds in play; empty means all kinds
    pub kinds: Vec<ItemKind>,
    /// Number of pre-planned triplets to spawn
    pub total_sets: u32,
    pub budget: Budget,
}

impl LevelConfig {
    /// Total number of distinct grid positions
    pub fn capacity(&self) -> u32 {
        self.shelf_count as u32 * self.slots_per_shelf as u32 * self.layers_per_slot as u32
    }

    /// Number of items this level spawns after sanitization
    pub fn item_count(&self) -> u32 {
        self.sanitized_sets() * MATCH_SIZE as u32
    }

    /// Set count clamped so the grid can hold every spawned item
    pub fn sanitized_sets(&self) -> u32 {
        self.total_sets.min(self.capacity() / MATCH_SIZE as u32)
    }

    /// Normalize a config coming over the boundary: clamp the set count to
    /// grid capacity and fall back to the full kind roster when the subset
    /// is empty. Selection stays uniform either way.
    pub fn sanitized(mut self) -> Self {
        self.total_sets = self.sanitized_sets();
        if self.kinds.is_empty() {
            self.kinds = ItemKind::ALL.to_vec();
        }
        self
    }
}

/// Generate the positioned item multiset for a level.
///
/// The config must already be sanitized; the output is a fresh set the
/// caller hands to the session state. Every call reshuffles, so repeated
/// calls with the same config produce different (equally solvable) layouts.
pub fn generate(config: &LevelConfig, rng: &mut SimpleRng) -> Vec<Item> {
    debug_assert!(!config.kinds.is_empty());
    debug_assert_eq!(config.total_sets, config.sanitized_sets());

    // One kind per set, three copies each, into a flat pool
    let mut pool: Vec<ItemKind> = Vec::with_capacity(config.item_count() as usize);
    for _ in 0..config.total_sets {
        let kind = rng.pick(&config.kinds);
        for _ in 0..MATCH_SIZE {
            pool.push(kind);
        }
    }
    rng.shuffle(&mut pool);

    // Enumerate and shuffle all grid positions, then take pool.len() of them
    let mut spots: Vec<Spot> = Vec::with_capacity(config.capacity() as usize);
    for shelf in 0..config.shelf_count {
        for slot in 0..config.slots_per_shelf {
            for layer in 0..config.layers_per_slot {
                spots.push(Spot::new(shelf, slot, layer));
            }
        }
    }
    rng.shuffle(&mut spots);

    pool.into_iter()
        .zip(spots)
        .enumerate()
        .map(|(i, (kind, spot))| Item {
            id: i as u32 + 1,
            kind,
            spot,
        })
        .collect()
}

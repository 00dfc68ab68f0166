//! Core types shared across the engine
//! This module contains pure data types with no external dependencies
//! beyond serde derives for the config/snapshot boundary.

use serde::{Deserialize, Serialize};

/// Tray capacity (number of collected items held before a triplet clears)
pub const TRAY_CAPACITY: usize = 7;

/// Number of items removed per resolved match
pub const MATCH_SIZE: usize = 3;

/// Engine timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const MATCH_RESOLVE_MS: u32 = 250;
pub const SETTLE_MS: u32 = 400;

/// Moves refunded to the budget when a triplet resolves (move-limited levels)
pub const MATCH_MOVE_REFUND: u32 = 3;

/// Bonus budget increments (banked, applied at next level start)
pub const BONUS_MOVES: u32 = 5;
pub const BONUS_TIME_S: u32 = 10;

/// Star thresholds for move-limited levels, as remaining/limit ratios
/// (3 stars at >= 2/5, 2 stars at >= 1/5, else 1 star)
pub const THREE_STAR_NUMERATOR: u32 = 2;
pub const TWO_STAR_NUMERATOR: u32 = 1;
pub const STAR_RATIO_DENOMINATOR: u32 = 5;

/// Item kinds that can appear on shelves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Apple,
    Banana,
    Broccoli,
    Carrot,
    Cheese,
    Corn,
    Fish,
    Grape,
    Lemon,
    Mushroom,
    Pepper,
    Strawberry,
}

impl ItemKind {
    /// Every kind, in declaration order
    pub const ALL: [ItemKind; 12] = [
        ItemKind::Apple,
        ItemKind::Banana,
        ItemKind::Broccoli,
        ItemKind::Carrot,
        ItemKind::Cheese,
        ItemKind::Corn,
        ItemKind::Fish,
        ItemKind::Grape,
        ItemKind::Lemon,
        ItemKind::Mushroom,
        ItemKind::Pepper,
        ItemKind::Strawberry,
    ];

    /// Parse item kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "apple" => Some(ItemKind::Apple),
            "banana" => Some(ItemKind::Banana),
            "broccoli" => Some(ItemKind::Broccoli),
            "carrot" => Some(ItemKind::Carrot),
            "cheese" => Some(ItemKind::Cheese),
            "corn" => Some(ItemKind::Corn),
            "fish" => Some(ItemKind::Fish),
            "grape" => Some(ItemKind::Grape),
            "lemon" => Some(ItemKind::Lemon),
            "mushroom" => Some(ItemKind::Mushroom),
            "pepper" => Some(ItemKind::Pepper),
            "strawberry" => Some(ItemKind::Strawberry),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Apple => "apple",
            ItemKind::Banana => "banana",
            ItemKind::Broccoli => "broccoli",
            ItemKind::Carrot => "carrot",
            ItemKind::Cheese => "cheese",
            ItemKind::Corn => "corn",
            ItemKind::Fish => "fish",
            ItemKind::Grape => "grape",
            ItemKind::Lemon => "lemon",
            ItemKind::Mushroom => "mushroom",
            ItemKind::Pepper => "pepper",
            ItemKind::Strawberry => "strawberry",
        }
    }
}

/// Position of an item: a shelf, a slot on that shelf, and a depth layer
/// within the slot stack (layer 0 is furthest back, higher layers in front)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spot {
    pub shelf: u8,
    pub slot: u8,
    pub layer: u8,
}

impl Spot {
    pub fn new(shelf: u8, slot: u8, layer: u8) -> Self {
        Self { shelf, slot, layer }
    }

    /// Whether two spots belong to the same slot stack
    pub fn same_stack(&self, other: &Spot) -> bool {
        self.shelf == other.shelf && self.slot == other.slot
    }
}

/// A placed item. Position never changes after placement; items are only
/// ever removed (shelf -> tray, then tray -> gone on match).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    pub spot: Spot,
}

/// Player intents consumed from the surrounding UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Select the item with the given id
    Select(u32),
    Pause,
    Retry,
    /// Bank a fixed budget increment, applied at the next level start
    RequestBonus,
}

impl PlayerAction {
    /// Convert to string label (for logging/protocol)
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::Select(_) => "select",
            PlayerAction::Pause => "pause",
            PlayerAction::Retry => "retry",
            PlayerAction::RequestBonus => "requestBonus",
        }
    }
}

/// Terminal result of a level attempt, reported exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOutcome {
    pub won: bool,
    /// 1-3 on a win, 0 on a loss
    pub stars: u8,
}

impl GameOutcome {
    pub fn win(stars: u8) -> Self {
        Self { won: true, stars }
    }

    pub fn loss() -> Self {
        Self { won: false, stars: 0 }
    }
}

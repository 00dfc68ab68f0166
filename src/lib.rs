//! shelf-match - casual tile-matching puzzle engine
//!
//! Players tap front-layer items stacked on shelves, collect them into a
//! bounded tray, and clear triplets of matching items before a move or
//! time budget runs out. This crate is the engine only: level generation,
//! occlusion rules, the tray matcher, and session/win-loss orchestration.
//! Everything visual is a collaborator on the other side of the
//! config-in / snapshot-out boundary.
//!
//! # Module Structure
//!
//! - [`core::level`]: level configuration and randomized item generation
//! - [`core::shelf`]: the live item set and occlusion (blocking) rules
//! - [`core::tray`]: bounded holding area and triplet matcher
//! - [`core::session`]: session controller, budgets, win/loss and stars
//! - [`core::snapshot`]: read-only render state for the UI layer
//! - [`core::rng`]: deterministic shuffling for reproducible layouts
//!
//! # Example
//!
//! ```
//! use shelf_match::core::{Budget, GameSession, LevelConfig};
//! use shelf_match::types::{ItemKind, TICK_MS};
//!
//! let mut session = GameSession::new(12345);
//! session.start_level(LevelConfig {
//!     level_number: 1,
//!     shelf_count: 1,
//!     slots_per_shelf: 1,
//!     layers_per_slot: 3,
//!     kinds: vec![ItemKind::Apple],
//!     total_sets: 1,
//!     budget: Budget::Moves { limit: 3 },
//! });
//!
//! // Tick past the settle window, then play the whole stack
//! while !session.settled() {
//!     session.tick(TICK_MS);
//! }
//! loop {
//!     let Some(id) = session.shelf().unblocked().next().map(|i| i.id) else {
//!         break;
//!     };
//!     session.select_item(id);
//! }
//! while session.outcome().is_none() {
//!     session.tick(TICK_MS);
//! }
//! assert!(session.take_outcome().unwrap().won);
//! ```

pub mod core;
pub mod types;

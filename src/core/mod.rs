//! Core module - pure puzzle logic
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod level;
pub mod rng;
pub mod session;
pub mod shelf;
pub mod snapshot;
pub mod tray;

// Re-export commonly used types
pub use level::{generate, Budget, LevelConfig};
pub use rng::SimpleRng;
pub use session::GameSession;
pub use shelf::{is_covered, Shelf};
pub use snapshot::{BudgetView, SessionSnapshot, ShelfItemView, TrayItemView};
pub use tray::{MatchPhase, MatchResolved, Tray};

//! Snapshot module - read-only render state for the surrounding UI layer
//!
//! The UI never reaches into live session internals; it renders from a
//! `SessionSnapshot` value. `snapshot_into` reuses the receiver's buffers
//! so a per-frame snapshot does not reallocate.

use serde::{Deserialize, Serialize};

use crate::core::session::GameSession;
use crate::types::{GameOutcome, ItemKind, Spot};

/// A shelf item as the UI sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfItemView {
    pub id: u32,
    pub kind: ItemKind,
    pub spot: Spot,
    pub blocked: bool,
}

/// A tray entry as the UI sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrayItemView {
    pub id: u32,
    pub kind: ItemKind,
    /// True while this entry's kind is the one being resolved
    pub matching: bool,
}

/// Remaining budget in the level's flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetView {
    #[serde(rename_all = "camelCase")]
    Moves { left: u32, limit: u32 },
    #[serde(rename_all = "camelCase")]
    Timed { left_ms: u32, limit_ms: u32 },
}

/// Complete read-only view of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: u32,
    pub level_number: u32,
    pub started: bool,
    /// Initialization-complete flag: the post-start grace window elapsed
    pub settled: bool,
    pub paused: bool,
    pub items: Vec<ShelfItemView>,
    pub tray: Vec<TrayItemView>,
    pub budget: Option<BudgetView>,
    pub resolving: Option<ItemKind>,
    pub last_added: Option<ItemKind>,
    pub outcome: Option<GameOutcome>,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.session_id = 0;
        self.level_number = 0;
        self.started = false;
        self.settled = false;
        self.paused = false;
        self.items.clear();
        self.tray.clear();
        self.budget = None;
        self.resolving = None;
        self.last_added = None;
        self.outcome = None;
    }
}

impl GameSession {
    /// Fill a snapshot in place, reusing its buffers
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();

        out.session_id = self.session_id();
        out.level_number = self.config().map_or(0, |c| c.level_number);
        out.started = self.started();
        out.settled = self.settled();
        out.paused = self.paused();

        out.items.extend(self.shelf().items().iter().map(|item| ShelfItemView {
            id: item.id,
            kind: item.kind,
            spot: item.spot,
            blocked: self.shelf().is_blocked(item.id),
        }));

        let resolving = self.tray().resolving_kind();
        out.tray.extend(self.tray().items().iter().map(|item| TrayItemView {
            id: item.id,
            kind: item.kind,
            matching: resolving == Some(item.kind),
        }));

        out.budget = if self.started() {
            match (self.remaining_moves(), self.remaining_time_ms()) {
                (Some(left), _) => Some(BudgetView::Moves {
                    left,
                    limit: self.budget_limit(),
                }),
                (_, Some(left_ms)) => Some(BudgetView::Timed {
                    left_ms,
                    limit_ms: self.budget_limit(),
                }),
                _ => None,
            }
        } else {
            None
        };
        out.resolving = resolving;
        out.last_added = self.last_added();
        out.outcome = self.outcome();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::{Budget, LevelConfig};
    use crate::types::TICK_MS;

    fn config() -> LevelConfig {
        LevelConfig {
            level_number: 4,
            shelf_count: 1,
            slots_per_shelf: 1,
            layers_per_slot: 3,
            kinds: vec![ItemKind::Apple],
            total_sets: 1,
            budget: Budget::Moves { limit: 9 },
        }
    }

    #[test]
    fn test_idle_snapshot_is_blank() {
        let session = GameSession::new(1);
        let snap = session.snapshot();

        assert!(!snap.started);
        assert!(snap.items.is_empty());
        assert!(snap.budget.is_none());
        assert!(snap.outcome.is_none());
    }

    #[test]
    fn test_snapshot_reflects_level_state() {
        let mut session = GameSession::new(5);
        session.start_level(config());

        let snap = session.snapshot();
        assert!(snap.started);
        assert!(!snap.settled);
        assert_eq!(snap.session_id, 1);
        assert_eq!(snap.level_number, 4);
        assert_eq!(snap.items.len(), 3);
        assert_eq!(snap.budget, Some(BudgetView::Moves { left: 9, limit: 9 }));

        // Exactly the top of the single stack is unblocked
        let unblocked: Vec<&ShelfItemView> =
            snap.items.iter().filter(|item| !item.blocked).collect();
        assert_eq!(unblocked.len(), 1);
        assert_eq!(unblocked[0].spot.layer, 2);
    }

    #[test]
    fn test_snapshot_marks_matching_tray_entries() {
        let mut session = GameSession::new(5);
        session.start_level(config());
        while !session.settled() {
            session.tick(TICK_MS);
        }

        for _ in 0..3 {
            let id = session.shelf().unblocked().next().unwrap().id;
            session.select_item(id);
        }

        let snap = session.snapshot();
        assert_eq!(snap.resolving, Some(ItemKind::Apple));
        assert_eq!(snap.tray.len(), 3);
        assert!(snap.tray.iter().all(|entry| entry.matching));
        assert_eq!(snap.last_added, Some(ItemKind::Apple));
    }

    #[test]
    fn test_snapshot_into_reuses_buffers() {
        let mut session = GameSession::new(5);
        session.start_level(config());

        let mut snap = SessionSnapshot::default();
        session.snapshot_into(&mut snap);
        assert_eq!(snap.items.len(), 3);

        // A later, smaller state does not retain stale entries
        session.start_level(LevelConfig {
            layers_per_slot: 0,
            ..config()
        });
        session.snapshot_into(&mut snap);
        assert!(snap.items.is_empty());
        assert_eq!(snap.session_id, 2);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut session = GameSession::new(5);
        session.start_level(config());

        let json = serde_json::to_string(&session.snapshot()).unwrap();
        assert!(json.contains("\"sessionId\":1"));
        assert!(json.contains("\"levelNumber\":4"));
        assert!(json.contains("\"blocked\""));
    }
}

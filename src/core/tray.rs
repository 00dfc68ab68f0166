//! Tray module - bounded holding area and triplet matcher
//!
//! The tray is an ordered, bounded sequence of collected items. Whenever an
//! add brings some kind's count to three, the matcher enters Resolving and
//! a short fixed delay runs before the triplet is removed (the UI shows the
//! match during that window). One candidate kind resolves per cycle; if the
//! tray still holds another completed triplet afterwards, a new cycle is
//! armed immediately.
//!
//! Capacity enforcement is the caller's job: the session rejects a click
//! when the tray is full before `push` is ever reached.

use arrayvec::ArrayVec;

use crate::types::{Item, ItemKind, MATCH_RESOLVE_MS, MATCH_SIZE, TRAY_CAPACITY};

/// Matcher state: either waiting for adds or counting down a removal delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Idle,
    Resolving { kind: ItemKind, delay_ms: u32 },
}

/// Emitted when a resolution delay completes and the triplet is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResolved {
    pub kind: ItemKind,
    pub removed: [u32; MATCH_SIZE],
}

/// Bounded holding area for selected items awaiting a triplet match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tray {
    items: ArrayVec<Item, TRAY_CAPACITY>,
    phase: MatchPhase,
}

impl Tray {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
            phase: MatchPhase::Idle,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Kind currently being resolved, for UI highlighting
    pub fn resolving_kind(&self) -> Option<ItemKind> {
        match self.phase {
            MatchPhase::Resolving { kind, .. } => Some(kind),
            MatchPhase::Idle => None,
        }
    }

    pub fn count_of(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }

    /// Append an item. Returns false when the tray is already full (callers
    /// should have checked `is_full` and treated the click as a no-op).
    pub fn push(&mut self, item: Item) -> bool {
        if self.items.is_full() {
            return false;
        }
        self.items.push(item);

        // A triplet completed while another resolves waits its turn
        if self.phase == MatchPhase::Idle {
            self.arm_match();
        }
        true
    }

    /// Enter Resolving for the first kind (in tray order) with a full triplet
    fn arm_match(&mut self) {
        for item in &self.items {
            if self.count_of(item.kind) >= MATCH_SIZE {
                self.phase = MatchPhase::Resolving {
                    kind: item.kind,
                    delay_ms: MATCH_RESOLVE_MS,
                };
                return;
            }
        }
    }

    /// Advance the resolution delay. When it elapses, the first three items
    /// of the matched kind are removed (the rest keep their relative order)
    /// and the removal is reported.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<MatchResolved> {
        let MatchPhase::Resolving { kind, delay_ms } = self.phase else {
            return None;
        };

        let remaining = delay_ms.saturating_sub(elapsed_ms);
        if remaining > 0 {
            self.phase = MatchPhase::Resolving {
                kind,
                delay_ms: remaining,
            };
            return None;
        }

        let removed = self.remove_triplet(kind);
        self.phase = MatchPhase::Idle;

        // Another completed triplet may be waiting
        self.arm_match();

        Some(MatchResolved { kind, removed })
    }

    fn remove_triplet(&mut self, kind: ItemKind) -> [u32; MATCH_SIZE] {
        debug_assert!(self.count_of(kind) >= MATCH_SIZE);

        let mut removed = [0u32; MATCH_SIZE];
        for slot in &mut removed {
            // An armed match always has a full triplet present
            if let Some(idx) = self.items.iter().position(|item| item.kind == kind) {
                *slot = self.items.remove(idx).id;
            }
        }
        removed
    }
}

impl Default for Tray {
    fn default() -> Self {
        Self::new()
    }
}

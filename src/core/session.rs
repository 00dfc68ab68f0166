//! Session module - wires the generator, shelf, and tray matcher together
//!
//! The session exclusively owns all mutable level state. It is driven the
//! same way the rest of the engine is driven: player intents plus a fixed
//! `tick(elapsed_ms)` heartbeat. The match-resolution delay and the timed
//! countdown are plain millisecond timers inside this state, so starting a
//! new level replaces them wholesale and a stale delay can never touch a
//! superseded session. `session_id` lets external schedulers discard work
//! queued against an earlier attempt.

use crate::core::level::{generate, Budget, LevelConfig};
use crate::core::rng::SimpleRng;
use crate::core::shelf::Shelf;
use crate::core::tray::Tray;
use crate::types::{
    GameOutcome, Item, ItemKind, PlayerAction, BONUS_MOVES, BONUS_TIME_S, MATCH_MOVE_REFUND,
    SETTLE_MS, STAR_RATIO_DENOMINATOR, THREE_STAR_NUMERATOR, TWO_STAR_NUMERATOR,
};

/// Remaining budget, tracked in the level's own flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BudgetClock {
    Moves {
        left: u32,
        limit: u32,
    },
    Timed {
        left_ms: u32,
        limit_ms: u32,
        three_star_s: u32,
        two_star_s: u32,
    },
}

impl BudgetClock {
    /// Build the clock for a level, folding in banked bonus requests
    fn for_budget(budget: Budget, bonus_requests: u32) -> Self {
        match budget {
            Budget::Moves { limit } => {
                let limit = limit + bonus_requests * BONUS_MOVES;
                BudgetClock::Moves { left: limit, limit }
            }
            Budget::Timed {
                limit_s,
                three_star_s,
                two_star_s,
            } => {
                let limit_ms = (limit_s + bonus_requests * BONUS_TIME_S) * 1000;
                BudgetClock::Timed {
                    left_ms: limit_ms,
                    limit_ms,
                    three_star_s,
                    two_star_s,
                }
            }
        }
    }

    fn exhausted(&self) -> bool {
        match self {
            BudgetClock::Moves { left, .. } => *left == 0,
            BudgetClock::Timed { left_ms, .. } => *left_ms == 0,
        }
    }
}

/// Orchestrates one level attempt at a time
#[derive(Debug, Clone)]
pub struct GameSession {
    config: Option<LevelConfig>,
    rng: SimpleRng,
    shelf: Shelf,
    tray: Tray,
    clock: BudgetClock,
    /// Grace window after start; terminal checks are suppressed until it
    /// elapses so a freshly generated level is never judged mid-setup
    settle_ms: u32,
    started: bool,
    paused: bool,
    /// Monotonic attempt id (increments on every start/retry)
    session_id: u32,
    /// Bonus-budget requests banked for the next level start
    banked_bonus: u32,
    outcome: Option<GameOutcome>,
    /// Outcome not yet delivered to the caller (consumed by `take_outcome`)
    pending_report: Option<GameOutcome>,
    /// Kind of the most recently collected item (for match highlighting)
    last_added: Option<ItemKind>,
}

impl GameSession {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            config: None,
            rng: SimpleRng::new(seed),
            shelf: Shelf::new(Vec::new()),
            tray: Tray::new(),
            clock: BudgetClock::Moves { left: 0, limit: 0 },
            settle_ms: 0,
            started: false,
            paused: false,
            session_id: 0,
            banked_bonus: 0,
            outcome: None,
            pending_report: None,
            last_added: None,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Whether the post-start grace window has elapsed
    pub fn settled(&self) -> bool {
        self.started && self.settle_ms == 0
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn config(&self) -> Option<&LevelConfig> {
        self.config.as_ref()
    }

    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn last_added(&self) -> Option<ItemKind> {
        self.last_added
    }

    /// Remaining moves, for move-limited levels
    pub fn remaining_moves(&self) -> Option<u32> {
        match self.clock {
            BudgetClock::Moves { left, .. } => Some(left),
            BudgetClock::Timed { .. } => None,
        }
    }

    /// Remaining time in milliseconds, for timed levels
    pub fn remaining_time_ms(&self) -> Option<u32> {
        match self.clock {
            BudgetClock::Timed { left_ms, .. } => Some(left_ms),
            BudgetClock::Moves { .. } => None,
        }
    }

    /// Budget limit after bonus application (moves or milliseconds)
    pub fn budget_limit(&self) -> u32 {
        match self.clock {
            BudgetClock::Moves { limit, .. } => limit,
            BudgetClock::Timed { limit_ms, .. } => limit_ms,
        }
    }

    /// Take the terminal result if one is waiting. Yields a value exactly
    /// once per attempt; the surrounding layer polls this after ticking.
    pub fn take_outcome(&mut self) -> Option<GameOutcome> {
        self.pending_report.take()
    }

    /// Start a level: generate a fresh arrangement, reset the tray and the
    /// budget (plus any banked bonus), and arm the settle window.
    pub fn start_level(&mut self, config: LevelConfig) {
        let config = config.sanitized();
        let items = generate(&config, &mut self.rng);
        self.begin(config, items);
    }

    /// Start a level with a hand-authored layout instead of a generated
    /// one (tutorial and scripted levels). The layout must respect the
    /// one-item-per-spot invariant; everything else resets as usual.
    pub fn start_level_with_layout(&mut self, config: LevelConfig, items: Vec<Item>) {
        self.begin(config.sanitized(), items);
    }

    fn begin(&mut self, config: LevelConfig, items: Vec<Item>) {
        self.shelf = Shelf::new(items);
        self.tray = Tray::new();
        self.clock = BudgetClock::for_budget(config.budget, self.banked_bonus);
        self.banked_bonus = 0;
        self.settle_ms = SETTLE_MS;
        self.started = true;
        self.paused = false;
        self.session_id = self.session_id.wrapping_add(1);
        self.outcome = None;
        self.pending_report = None;
        self.last_added = None;
        self.config = Some(config);
    }

    /// Restart the current level with a fresh arrangement
    pub fn retry(&mut self) -> bool {
        let Some(config) = self.config.clone() else {
            return false;
        };
        self.start_level(config);
        true
    }

    /// Bank a fixed budget increment, applied at the next level start
    pub fn request_bonus(&mut self) {
        self.banked_bonus += 1;
    }

    /// Toggle pause. Paused sessions ignore ticks and selections.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.outcome.is_some() {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Player taps the item with the given id.
    ///
    /// Rejected (a silent no-op) when the session is idle, paused, or
    /// terminal, when the budget is exhausted, when the tray is full, or
    /// when the item is blocked or unknown. Selections ARE accepted while
    /// a match is resolving; a triplet completed in that window waits for
    /// the next resolution cycle.
    pub fn select_item(&mut self, id: u32) -> bool {
        if !self.started || self.paused || self.outcome.is_some() {
            return false;
        }
        if self.clock.exhausted() || self.tray.is_full() || self.shelf.is_blocked(id) {
            return false;
        }
        let Some(item) = self.shelf.remove(id) else {
            return false;
        };

        if let BudgetClock::Moves { left, .. } = &mut self.clock {
            *left -= 1;
        }
        self.tray.push(item);
        self.last_added = Some(item.kind);

        self.check_terminal();
        true
    }

    /// Fixed heartbeat: advances the settle window, the timed countdown,
    /// and the match-resolution delay, then re-evaluates terminal state.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.started || self.paused || self.outcome.is_some() {
            return;
        }

        // The settle window consumes ticks until it elapses
        if self.settle_ms > 0 {
            self.settle_ms = self.settle_ms.saturating_sub(elapsed_ms);
            if self.settle_ms == 0 {
                self.check_terminal();
            }
            return;
        }

        if let BudgetClock::Timed { left_ms, .. } = &mut self.clock {
            *left_ms = left_ms.saturating_sub(elapsed_ms);
        }

        if self.tray.tick(elapsed_ms).is_some() {
            // A cleared triplet hands its moves back (capped at the limit)
            if let BudgetClock::Moves { left, limit } = &mut self.clock {
                *left = (*left + MATCH_MOVE_REFUND).min(*limit);
            }
        }

        self.check_terminal();
    }

    /// Apply a player intent
    pub fn apply_action(&mut self, action: PlayerAction) -> bool {
        match action {
            PlayerAction::Select(id) => self.select_item(id),
            PlayerAction::Pause => self.toggle_pause(),
            PlayerAction::Retry => self.retry(),
            PlayerAction::RequestBonus => {
                self.request_bonus();
                true
            }
        }
    }

    /// Evaluate win/loss. Suppressed during the settle window; records the
    /// outcome at most once per attempt.
    fn check_terminal(&mut self) {
        if !self.started || self.outcome.is_some() || self.settle_ms > 0 {
            return;
        }

        if self.shelf.is_empty() && self.tray.is_empty() {
            self.finish(GameOutcome::win(self.stars_for_win()));
            return;
        }

        // Move budgets wait for an in-flight resolution (its refund may
        // revive the attempt); the timed countdown has no such reprieve.
        let dead = match self.clock {
            BudgetClock::Moves { left, .. } => left == 0 && self.tray.resolving_kind().is_none(),
            BudgetClock::Timed { left_ms, .. } => left_ms == 0,
        };
        if dead && !self.shelf.is_empty() {
            self.finish(GameOutcome::loss());
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.outcome = Some(outcome);
        self.pending_report = Some(outcome);
    }

    /// Star rating for a win, from the remaining budget
    fn stars_for_win(&self) -> u8 {
        match self.clock {
            BudgetClock::Moves { left, limit } => {
                if limit == 0 {
                    // Degenerate zero-item level; nothing was spent
                    return 3;
                }
                if left * STAR_RATIO_DENOMINATOR >= limit * THREE_STAR_NUMERATOR {
                    3
                } else if left * STAR_RATIO_DENOMINATOR >= limit * TWO_STAR_NUMERATOR {
                    2
                } else {
                    1
                }
            }
            BudgetClock::Timed {
                left_ms,
                three_star_s,
                two_star_s,
                ..
            } => {
                let left_s = left_ms / 1000;
                if left_s >= three_star_s {
                    3
                } else if left_s >= two_star_s {
                    2
                } else {
                    1
                }
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

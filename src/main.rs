//! Headless demo runner (default binary).
//!
//! Loads a level config from a JSON file (first argument) or falls back to
//! a built-in level, then autoplays it by always selecting some unblocked
//! item, printing a snapshot line per move and the final outcome.
//!
//! Usage: shelf-match [level.json] [seed]

use std::env;
use std::fs;

use anyhow::{Context, Result};

use shelf_match::core::{Budget, GameSession, LevelConfig, SessionSnapshot};
use shelf_match::types::{GameOutcome, ItemKind, TICK_MS, TRAY_CAPACITY};

fn default_level() -> LevelConfig {
    LevelConfig {
        level_number: 1,
        shelf_count: 3,
        slots_per_shelf: 4,
        layers_per_slot: 3,
        kinds: vec![
            ItemKind::Apple,
            ItemKind::Banana,
            ItemKind::Cheese,
            ItemKind::Fish,
            ItemKind::Grape,
        ],
        total_sets: 10,
        budget: Budget::Moves { limit: 45 },
    }
}

fn load_level(path: &str) -> Result<LevelConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("reading level file {path}"))?;
    let config: LevelConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing level file {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_level(&path)?,
        None => default_level(),
    };
    let seed: u32 = match args.next() {
        Some(s) => s.parse().context("seed must be an unsigned integer")?,
        None => 1,
    };

    let mut session = GameSession::new(seed);
    session.start_level(config);

    let mut snap = SessionSnapshot::default();
    let mut moves = 0usize;

    let outcome = loop {
        session.tick(TICK_MS);

        if let Some(outcome) = session.take_outcome() {
            break outcome;
        }
        if !session.settled() {
            continue;
        }

        match pick_item(&session) {
            Some(id) => {
                if session.select_item(id) {
                    moves += 1;
                    session.snapshot_into(&mut snap);
                    println!("{}", serde_json::to_string(&snap)?);
                }
            }
            None => {
                // Nothing playable; wait out a pending resolution, else
                // the bot has soft-locked the tray
                if session.tray().resolving_kind().is_none() {
                    println!("stuck: no productive move available");
                    break GameOutcome::loss();
                }
            }
        }
    };

    println!(
        "game over after {moves} moves: {} ({} stars)",
        if outcome.won { "won" } else { "lost" },
        outcome.stars
    );
    Ok(())
}

/// Tray-aware greedy pick: prefer kinds already collected, and never fill
/// the last tray slot with an item that completes nothing.
fn pick_item(session: &GameSession) -> Option<u32> {
    let tray = session.tray();
    let free = TRAY_CAPACITY - tray.len();
    if free == 0 {
        return None;
    }

    let mut best: Option<(usize, u32)> = None;
    for item in session.shelf().unblocked() {
        let held = tray.count_of(item.kind);
        if free == 1 && held < 2 {
            continue;
        }
        if best.map_or(true, |(score, _)| held > score) {
            best = Some((held, item.id));
        }
    }
    best.map(|(_, id)| id)
}

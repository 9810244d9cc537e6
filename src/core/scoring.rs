//! Scoring module - clear classification, bonuses, level and gravity
//!
//! All functions here are pure. A lock scores at the level in effect
//! *before* its clear; the recomputed level applies from the next action.

use crate::types::{
    ClearKind, BASE_GRAVITY_MS, GRAVITY_FLOOR_MS, GRAVITY_STEP_MS, LINES_PER_LEVEL, MAX_LEVEL,
};

/// Base points by rows cleared (index = rows) outside a T-spin.
const CLEAR_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Base points by rows cleared during a T-spin. Four-row clears never
/// consult this table: they are always scored as a tetris.
const TSPIN_SCORES: [u32; 4] = [0, 800, 1200, 1600];

/// Per-chain combo bonus, scaled by level.
const COMBO_STEP: u32 = 50;

/// The counters observers see. `level` starts at 1 and never exceeds
/// [`MAX_LEVEL`]; everything else only grows or resets with the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub back_to_back: u32,
    pub total_pieces: u32,
    pub drop_distance: u32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            combo: 0,
            max_combo: 0,
            back_to_back: 0,
            total_pieces: 0,
            drop_distance: 0,
        }
    }
}

/// Score breakdown for one lock's clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearScore {
    pub base: u32,
    pub combo_bonus: u32,
    pub back_to_back_bonus: u32,
}

impl ClearScore {
    pub fn total(&self) -> u32 {
        self.base + self.combo_bonus + self.back_to_back_bonus
    }
}

/// Label for a lock. Four rows are a tetris no matter how they were
/// spun in; a T-spin keeps its label down to zero rows.
pub fn classify_clear(rows: usize, tspin: bool) -> Option<ClearKind> {
    match rows {
        4 => Some(ClearKind::Tetris),
        _ if tspin => Some(ClearKind::TSpin),
        1 => Some(ClearKind::Single),
        2 => Some(ClearKind::Double),
        3 => Some(ClearKind::Triple),
        _ => None,
    }
}

/// Quads and T-spins extend the back-to-back streak.
pub fn qualifies_for_back_to_back(rows: usize, tspin: bool) -> bool {
    rows >= 4 || tspin
}

/// Next combo streak value: a clear extends it, a dry lock breaks it.
pub fn next_combo(combo: u32, rows: usize) -> u32 {
    if rows > 0 {
        combo + 1
    } else {
        0
    }
}

/// Next back-to-back streak value. A dry lock leaves the streak alone;
/// only a non-qualifying clear breaks it.
pub fn next_back_to_back(streak: u32, rows: usize, tspin: bool) -> u32 {
    if qualifies_for_back_to_back(rows, tspin) {
        streak + 1
    } else if rows > 0 {
        0
    } else {
        streak
    }
}

/// Score one clear. `combo` is the streak including this clear;
/// `streak_before` is the back-to-back streak before it. The bonus is
/// half the combined base and combo points, and only pays when the
/// previous streak was already alive.
pub fn score_clear(
    rows: usize,
    tspin: bool,
    level: u32,
    combo: u32,
    streak_before: u32,
) -> ClearScore {
    let table = if tspin && rows < 4 {
        TSPIN_SCORES[rows]
    } else {
        CLEAR_SCORES[rows]
    };
    let base = table * level;
    let combo_bonus = combo.saturating_sub(1) * COMBO_STEP * level;
    let back_to_back_bonus = if qualifies_for_back_to_back(rows, tspin) && streak_before > 0 {
        (base + combo_bonus) / 2
    } else {
        0
    };
    ClearScore {
        base,
        combo_bonus,
        back_to_back_bonus,
    }
}

/// One cell of soft drop.
pub fn soft_drop_points(level: u32) -> u32 {
    level
}

/// A hard drop pays double per cell travelled.
pub fn hard_drop_points(cells: u32, level: u32) -> u32 {
    2 * cells * level
}

/// Level derived from cumulative cleared lines, clamped at the cap.
pub fn level_for_lines(lines: u32) -> u32 {
    (lines / LINES_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Gravity interval for a level. Every level past the first shaves
/// [`GRAVITY_STEP_MS`] off the base, down to the floor.
pub fn gravity_interval_ms(level: u32) -> u32 {
    BASE_GRAVITY_MS
        .saturating_sub(level.saturating_sub(1) * GRAVITY_STEP_MS)
        .max(GRAVITY_FLOOR_MS)
}

//! Achievement catalog and unlock evaluation
//!
//! Unlocks are a bitmask over [`CATALOG`] indices. The engine evaluates
//! the catalog after every lock and appends freshly unlocked labels to
//! its pending list; acknowledging clears pending but never the mask.

use arrayvec::ArrayVec;

use crate::core::scoring::Metrics;
use crate::types::ClearKind;

/// Number of catalog entries, usable as an ArrayVec capacity.
pub const ACHIEVEMENT_COUNT: usize = 5;

/// One unlockable achievement.
pub struct Achievement {
    pub id: &'static str,
    pub label: &'static str,
    pub unlocked_when: fn(&Metrics, Option<ClearKind>) -> bool,
}

fn first_clear(metrics: &Metrics, _last: Option<ClearKind>) -> bool {
    metrics.lines >= 1
}

fn combo_fever(metrics: &Metrics, _last: Option<ClearKind>) -> bool {
    metrics.max_combo >= 5
}

fn tetris_slayer(_metrics: &Metrics, last: Option<ClearKind>) -> bool {
    last == Some(ClearKind::Tetris)
}

fn marathoner(metrics: &Metrics, _last: Option<ClearKind>) -> bool {
    metrics.lines >= 40
}

fn sky_high(metrics: &Metrics, _last: Option<ClearKind>) -> bool {
    metrics.score >= 50_000
}

pub const CATALOG: [Achievement; ACHIEVEMENT_COUNT] = [
    Achievement {
        id: "first-clear",
        label: "First Lines Cleared",
        unlocked_when: first_clear,
    },
    Achievement {
        id: "combo-fever",
        label: "Combo Fever (5 chain)",
        unlocked_when: combo_fever,
    },
    Achievement {
        id: "tetris-slayer",
        label: "Tetris Slayer (4 lines)",
        unlocked_when: tetris_slayer,
    },
    Achievement {
        id: "marathoner",
        label: "Marathoner (40 lines)",
        unlocked_when: marathoner,
    },
    Achievement {
        id: "sky-high",
        label: "Score 50k",
        unlocked_when: sky_high,
    },
];

/// Bits of catalog entries that just became true. Entries already in
/// `unlocked` are never reported again.
pub fn evaluate(metrics: &Metrics, last_clear: Option<ClearKind>, unlocked: u8) -> u8 {
    let mut newly = 0u8;
    for (i, entry) in CATALOG.iter().enumerate() {
        let bit = 1u8 << i;
        if unlocked & bit == 0 && (entry.unlocked_when)(metrics, last_clear) {
            newly |= bit;
        }
    }
    newly
}

/// Ids for every set bit of an unlock mask, in catalog order.
pub fn ids(unlocked: u8) -> ArrayVec<&'static str, ACHIEVEMENT_COUNT> {
    let mut out = ArrayVec::new();
    for (i, entry) in CATALOG.iter().enumerate() {
        if unlocked & (1u8 << i) != 0 {
            out.push(entry.id);
        }
    }
    out
}

//! Flat copy of everything observers may render or persist
//!
//! [`GameSnapshot`] owns plain data only, so a renderer thread or a test
//! can hold one without borrowing the engine. Buffers are meant to be
//! reused through `GameState::snapshot_into`.

use arrayvec::ArrayVec;

use crate::core::achievements::ACHIEVEMENT_COUNT;
use crate::core::piece::ActivePiece;
use crate::core::scoring::Metrics;
use crate::types::{Cell, ClearKind, PieceKind, Status, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Full board including the two hidden spawn rows at the top.
    pub grid: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActivePiece>,
    /// Cells the active piece would occupy after a hard drop.
    pub ghost: Option<[(i8, i8); 4]>,
    pub preview: [PieceKind; PREVIEW_LEN],
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub status: Status,
    pub metrics: Metrics,
    pub last_clear: Option<ClearKind>,
    /// Board rows emptied by the latest lock, ascending.
    pub cleared_rows: ArrayVec<i8, 4>,
    pub pending_achievements: ArrayVec<&'static str, ACHIEVEMENT_COUNT>,
    pub unlocked_achievements: ArrayVec<&'static str, ACHIEVEMENT_COUNT>,
    /// Effective best: the stored record or the live score, whichever
    /// is higher.
    pub high_score: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.ghost = None;
        self.preview = [PieceKind::I; PREVIEW_LEN];
        self.hold = None;
        self.can_hold = true;
        self.status = Status::Idle;
        self.metrics = Metrics::default();
        self.last_clear = None;
        self.cleared_rows.clear();
        self.pending_achievements.clear();
        self.unlocked_achievements.clear();
        self.high_score = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost: None,
            preview: [PieceKind::I; PREVIEW_LEN],
            hold: None,
            can_hold: true,
            status: Status::Idle,
            metrics: Metrics::default(),
            last_clear: None,
            cleared_rows: ArrayVec::new(),
            pending_achievements: ArrayVec::new(),
            unlocked_achievements: ArrayVec::new(),
            high_score: 0,
        }
    }
}

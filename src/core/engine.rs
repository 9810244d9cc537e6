//! Game state machine - every rule change flows through [`GameState::apply`]
//!
//! The engine owns the board, the active piece, the queue and all
//! counters. It has no clocks and no I/O: callers feed it [`Action`]s
//! and read the result through getters or [`GameState::snapshot_into`].
//! `apply` reports whether the action changed anything; rejected
//! actions are silent no-ops.

use arrayvec::ArrayVec;

use crate::core::achievements::{self, ACHIEVEMENT_COUNT, CATALOG};
use crate::core::bag::PieceQueue;
use crate::core::board::Board;
use crate::core::kicks;
use crate::core::piece::ActivePiece;
use crate::core::scoring::{self, Metrics};
use crate::core::snapshot::GameSnapshot;
use crate::types::{Action, ClearKind, PieceKind, Shift, Spin, Status};

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    queue: PieceQueue,
    hold: Option<PieceKind>,
    can_hold: bool,
    status: Status,
    metrics: Metrics,
    last_clear: Option<ClearKind>,
    cleared_rows: ArrayVec<i8, 4>,
    /// Bitmask over the achievement catalog.
    unlocked: u8,
    pending: ArrayVec<&'static str, ACHIEVEMENT_COUNT>,
    /// Best score hydrated from storage or folded in on reset.
    stored_high_score: u32,
}

impl GameState {
    /// New idle game seeded for the piece queue.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            queue: PieceQueue::new(seed),
            hold: None,
            can_hold: true,
            status: Status::Idle,
            metrics: Metrics::default(),
            last_clear: None,
            cleared_rows: ArrayVec::new(),
            unlocked: 0,
            pending: ArrayVec::new(),
            stored_high_score: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn hold_slot(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn last_clear(&self) -> Option<ClearKind> {
        self.last_clear
    }

    pub fn cleared_rows(&self) -> &[i8] {
        &self.cleared_rows
    }

    pub fn pending_achievements(&self) -> &[&'static str] {
        &self.pending
    }

    pub fn unlocked_achievements(&self) -> ArrayVec<&'static str, ACHIEVEMENT_COUNT> {
        achievements::ids(self.unlocked)
    }

    /// Effective best: the stored record or the live score, whichever
    /// is higher.
    pub fn high_score(&self) -> u32 {
        self.stored_high_score.max(self.metrics.score)
    }

    /// Cells the active piece would occupy after a hard drop.
    pub fn ghost_blocks(&self) -> Option<[(i8, i8); 4]> {
        let active = self.active?;
        let distance = active.drop_distance(&self.board);
        Some(active.offset(0, distance).blocks())
    }

    /// Apply one action. Returns whether the game state changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Start => self.start(),
            Action::Reset => self.reset(),
            Action::Pause => self.pause(),
            Action::Resume => self.resume(),
            Action::Tick => self.gravity_step(),
            Action::Move(dir) => self.shift(dir),
            Action::SoftDrop => self.soft_drop(),
            Action::HardDrop => self.hard_drop(),
            Action::Rotate(spin) => self.rotate(spin),
            Action::Hold => self.hold_piece(),
            Action::AckAchievements => self.acknowledge(),
            Action::HydrateHighScore(value) => self.hydrate_high_score(value),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (y, row) in out.grid.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.board.get(x as i8, y as i8).unwrap_or(None);
            }
        }
        out.active = self.active;
        out.ghost = self.ghost_blocks();
        out.preview = self.queue.preview();
        out.hold = self.hold;
        out.can_hold = self.can_hold;
        out.status = self.status;
        out.metrics = self.metrics;
        out.last_clear = self.last_clear;
        out.cleared_rows = self.cleared_rows.clone();
        out.pending_achievements = self.pending.clone();
        out.unlocked_achievements = self.unlocked_achievements();
        out.high_score = self.high_score();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Start is only legal from idle; a running or finished game must
    /// go through reset.
    fn start(&mut self) -> bool {
        if self.status != Status::Idle {
            return false;
        }
        self.begin_game();
        true
    }

    fn reset(&mut self) -> bool {
        if self.status == Status::Idle {
            return false;
        }
        self.begin_game();
        true
    }

    /// Wipe everything except the best score and start a fresh game.
    /// The queue keeps drawing from the same random stream.
    fn begin_game(&mut self) {
        self.stored_high_score = self.high_score();
        self.board.clear();
        self.queue.restart();
        self.hold = None;
        self.can_hold = true;
        self.metrics = Metrics::default();
        self.last_clear = None;
        self.cleared_rows.clear();
        self.unlocked = 0;
        self.pending.clear();
        self.active = None;
        self.status = Status::Running;
        self.spawn_next();
    }

    fn pause(&mut self) -> bool {
        if self.status != Status::Running {
            return false;
        }
        self.status = Status::Paused;
        true
    }

    fn resume(&mut self) -> bool {
        if self.status != Status::Paused {
            return false;
        }
        self.status = Status::Running;
        true
    }

    fn acknowledge(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        self.pending.clear();
        true
    }

    fn hydrate_high_score(&mut self, value: u32) -> bool {
        let changed = self.stored_high_score != value;
        self.stored_high_score = value;
        changed
    }

    /// The active piece, but only while the game is running. Gameplay
    /// actions fall through to a no-op in every other status.
    fn running_piece(&self) -> Option<ActivePiece> {
        if self.status != Status::Running {
            return None;
        }
        self.active
    }

    fn shift(&mut self, dir: Shift) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };
        let moved = active.offset(dir.dx(), 0);
        if moved.collides(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    fn rotate(&mut self, spin: Spin) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };
        let rotated = kicks::try_rotate(&active, spin, |x, y| self.board.is_blocked(x, y));
        match rotated {
            Some(piece) => {
                self.active = Some(piece);
                true
            }
            None => false,
        }
    }

    /// One cell of gravity; a grounded piece locks instead.
    fn gravity_step(&mut self) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };
        let dropped = active.offset(0, 1);
        if dropped.collides(&self.board) {
            self.lock(active, 0, 0);
        } else {
            self.active = Some(dropped);
        }
        true
    }

    /// One cell down for points; locks in place when already grounded.
    fn soft_drop(&mut self) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };
        let points = scoring::soft_drop_points(self.metrics.level);
        let dropped = active.offset(0, 1);
        if dropped.collides(&self.board) {
            self.lock(active, points, 1);
        } else {
            self.active = Some(dropped);
            self.metrics.score += points;
            self.metrics.drop_distance += 1;
        }
        true
    }

    /// Instant drop and lock. A piece already on the ground is left
    /// alone so the drop never doubles as a plain lock.
    fn hard_drop(&mut self) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };
        let distance = active.drop_distance(&self.board);
        if distance == 0 {
            return false;
        }
        let points = scoring::hard_drop_points(distance as u32, self.metrics.level);
        self.lock(active.offset(0, distance), points, distance as u32);
        true
    }

    /// Stash the active piece. The replacement comes from the hold
    /// slot, or from the queue the first time. Spawns at the top and
    /// does not count as a new piece.
    fn hold_piece(&mut self) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };
        if !self.can_hold {
            return false;
        }
        let incoming = match self.hold {
            Some(stored) => stored,
            None => self.queue.draw(),
        };
        self.hold = Some(active.kind);
        self.can_hold = false;
        let fresh = ActivePiece::spawn(incoming);
        if fresh.collides(&self.board) {
            self.active = None;
            self.status = Status::Over;
            return true;
        }
        self.active = Some(fresh);
        true
    }

    /// Lock `piece` where it stands, settle the board, score the lock
    /// and bring in the next piece. `drop_points` and `drop_cells`
    /// credit the drop that forced the lock.
    fn lock(&mut self, piece: ActivePiece, drop_points: u32, drop_cells: u32) {
        // The corner probe reads the board before the merge.
        let tspin = self.is_t_spin(&piece);
        self.board.merge_blocks(&piece.blocks(), piece.kind);
        self.active = None;

        let cleared = self.board.clear_full_rows();
        let rows = cleared.len();

        // This lock scores at the pre-clear level; the new level takes
        // effect from the next action.
        let level = self.metrics.level;
        let combo = scoring::next_combo(self.metrics.combo, rows);
        let clear_score =
            scoring::score_clear(rows, tspin, level, combo, self.metrics.back_to_back);

        self.metrics.score += clear_score.total() + drop_points;
        self.metrics.drop_distance += drop_cells;
        self.metrics.combo = combo;
        self.metrics.max_combo = self.metrics.max_combo.max(combo);
        self.metrics.back_to_back =
            scoring::next_back_to_back(self.metrics.back_to_back, rows, tspin);
        self.metrics.lines += rows as u32;
        self.metrics.level = scoring::level_for_lines(self.metrics.lines);

        self.last_clear = scoring::classify_clear(rows, tspin);
        self.cleared_rows = cleared;

        self.unlock_achievements();
        self.spawn_next();
    }

    /// Three of the four cells diagonal to a T's center must be filled.
    /// Off-board counts as filled, in every direction.
    fn is_t_spin(&self, piece: &ActivePiece) -> bool {
        if piece.kind != PieceKind::T {
            return false;
        }
        const CORNERS: [(i8, i8); 4] = [(0, 0), (2, 0), (0, -2), (2, -2)];
        let filled = CORNERS
            .iter()
            .filter(|&&(dx, dy)| {
                self.board
                    .get(piece.x + dx, piece.y + dy)
                    .map_or(true, |cell| cell.is_some())
            })
            .count();
        filled >= 3
    }

    /// Spawn the piece at the head of the queue. A blocked spawn ends
    /// the game and leaves the head on the queue.
    fn spawn_next(&mut self) {
        let piece = ActivePiece::spawn(self.queue.next_kind());
        if piece.collides(&self.board) {
            self.active = None;
            self.can_hold = false;
            self.status = Status::Over;
            return;
        }
        self.queue.draw();
        self.active = Some(piece);
        self.can_hold = true;
        self.metrics.total_pieces += 1;
    }

    fn unlock_achievements(&mut self) {
        let newly = achievements::evaluate(&self.metrics, self.last_clear, self.unlocked);
        if newly == 0 {
            return;
        }
        self.unlocked |= newly;
        for (i, entry) in CATALOG.iter().enumerate() {
            if newly & (1 << i) != 0 {
                self.pending.push(entry.label);
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

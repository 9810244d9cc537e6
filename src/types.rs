//! Shared types and constants
//! Pure data with no external dependencies; everything else builds on this.

/// Board dimensions. Rows 0 and 1 are hidden spawn rows above the
/// visible playfield; row 21 is the floor.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 22;
pub const VISIBLE_HEIGHT: u8 = 20;
pub const HIDDEN_ROWS: u8 = 2;

/// Canonical spawn anchor: horizontally centered, one row below the
/// hidden top.
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 1;

/// Queue lookahead: the materialized queue never drops below this
/// between actions.
pub const QUEUE_MIN_LOOKAHEAD: usize = 6;
/// Upcoming pieces exposed to observers.
pub const PREVIEW_LEN: usize = 5;

/// Frame cadence of the terminal loop (milliseconds).
pub const TICK_MS: u32 = 16;

/// Gravity interval: BASE - (level - 1) * STEP, clamped at FLOOR.
pub const BASE_GRAVITY_MS: u32 = 900;
pub const GRAVITY_STEP_MS: u32 = 60;
pub const GRAVITY_FLOOR_MS: u32 = 80;

/// Level progression.
pub const MAX_LEVEL: u32 = 20;
pub const LINES_PER_LEVEL: u32 = 10;

/// Delay before pending achievement toasts are acknowledged (milliseconds).
pub const ACHIEVEMENT_ACK_MS: u32 = 2500;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in bag order before shuffling.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Single-letter display name.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Rotation states. R0 is the spawn orientation; the index advances
/// clockwise through the shape catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// Numeric index 0-3.
    pub fn index(&self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R1 => 1,
            Rotation::R2 => 2,
            Rotation::R3 => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::R0,
            1 => Rotation::R1,
            2 => Rotation::R2,
            _ => Rotation::R3,
        }
    }

    /// Target state after a rotation action: CW is +1, CCW is +3,
    /// a half turn is +2 (all mod 4).
    pub fn turned(&self, spin: Spin) -> Self {
        let step = match spin {
            Spin::Cw => 1,
            Spin::Half => 2,
            Spin::Ccw => 3,
        };
        Rotation::from_index(self.index() + step)
    }
}

/// Rotation request direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Cw,
    Ccw,
    Half,
}

/// Horizontal move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Left,
    Right,
}

impl Shift {
    /// Column delta: left is -1, right is +1.
    pub fn dx(&self) -> i8 {
        match self {
            Shift::Left => -1,
            Shift::Right => 1,
        }
    }
}

/// Game lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    Paused,
    Over,
}

/// Classification of the most recent line clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearKind {
    Single,
    Double,
    Triple,
    Tetris,
    TSpin,
}

impl ClearKind {
    /// Display label for the side-panel callout.
    pub fn label(&self) -> &'static str {
        match self {
            ClearKind::Single => "SINGLE",
            ClearKind::Double => "DOUBLE",
            ClearKind::Triple => "TRIPLE",
            ClearKind::Tetris => "TETRIS!",
            ClearKind::TSpin => "T-SPIN!",
        }
    }
}

/// Everything the state machine can be asked to do. Timer-driven
/// actions (`Tick`, `AckAchievements`) arrive through the same dispatch
/// as key-driven ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Reset,
    Pause,
    Resume,
    Tick,
    Move(Shift),
    SoftDrop,
    HardDrop,
    Rotate(Spin),
    Hold,
    AckAchievements,
    HydrateHighScore(u32),
}

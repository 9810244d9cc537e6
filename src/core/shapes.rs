//! Shape catalog - the seven tetromino kinds and their rotation states
//!
//! Every shape is four block offsets relative to the piece anchor,
//! x right-positive, y down-positive (negative y reaches into the hidden
//! rows above the playfield). Rotation state indices advance R0 -> R1 ->
//! R2 -> R3; the offsets below are the authoritative catalog, not derived
//! at runtime.

use crate::types::{PieceKind, Rotation};

/// Offset of a single block relative to the piece anchor.
pub type BlockOffset = (i8, i8);

/// One rotation state: four block offsets.
pub type PieceShape = [BlockOffset; 4];

/// All four rotation states of the I piece.
const I_SHAPES: [PieceShape; 4] = [
    [(-2, 0), (-1, 0), (0, 0), (1, 0)],
    [(0, 2), (0, 1), (0, 0), (0, -1)],
    [(2, 0), (1, 0), (0, 0), (-1, 0)],
    [(0, -2), (0, -1), (0, 0), (0, 1)],
];

/// O occupies the same four cells in every state.
const O_SHAPES: [PieceShape; 4] = [
    [(0, 0), (1, 0), (0, -1), (1, -1)],
    [(0, 0), (1, 0), (0, -1), (1, -1)],
    [(0, 0), (1, 0), (0, -1), (1, -1)],
    [(0, 0), (1, 0), (0, -1), (1, -1)],
];

const T_SHAPES: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (1, 0), (0, -1)],
    [(0, 1), (0, 0), (0, -1), (-1, 0)],
    [(1, 0), (0, 0), (-1, 0), (0, 1)],
    [(0, -1), (0, 0), (0, 1), (1, 0)],
];

const S_SHAPES: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (0, -1), (1, -1)],
    [(0, 1), (0, 0), (-1, 0), (-1, -1)],
    [(1, 0), (0, 0), (0, 1), (-1, 1)],
    [(0, -1), (0, 0), (1, 0), (1, 1)],
];

const Z_SHAPES: [PieceShape; 4] = [
    [(-1, -1), (0, -1), (0, 0), (1, 0)],
    [(-1, 1), (-1, 0), (0, 0), (0, -1)],
    [(1, 1), (0, 1), (0, 0), (-1, 0)],
    [(1, -1), (1, 0), (0, 0), (0, 1)],
];

const J_SHAPES: [PieceShape; 4] = [
    [(-1, -1), (-1, 0), (0, 0), (1, 0)],
    [(-1, 1), (0, 1), (0, 0), (0, -1)],
    [(1, 1), (1, 0), (0, 0), (-1, 0)],
    [(1, -1), (0, -1), (0, 0), (0, 1)],
];

const L_SHAPES: [PieceShape; 4] = [
    [(-1, 0), (0, 0), (1, 0), (1, -1)],
    [(0, 1), (0, 0), (0, -1), (-1, -1)],
    [(1, 0), (0, 0), (-1, 0), (-1, 1)],
    [(0, -1), (0, 0), (0, 1), (1, 1)],
];

/// Look up the shape for a piece kind in a given rotation state.
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let states = match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    };
    states[rotation.index()]
}

/// Shape at spawn orientation.
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    shape(kind, Rotation::R0)
}

//! Active piece - the falling tetromino and its board geometry
//!
//! Collision legality lives here (via `Board::is_blocked`): one predicate
//! backs movement, rotation, spawning and drop-distance projection.

use crate::core::board::Board;
use crate::core::shapes::{shape, PieceShape};
use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// The falling piece: kind, rotation state, anchor position, and whether
/// the current position was produced by a rotation (kick flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub kicked: bool,
}

impl ActivePiece {
    /// A fresh piece at the canonical spawn anchor, rotation 0.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::R0,
            x: SPAWN_X,
            y: SPAWN_Y,
            kicked: false,
        }
    }

    /// Relative block offsets for the current rotation state.
    pub fn shape(&self) -> PieceShape {
        shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four blocks.
    pub fn blocks(&self) -> [(i8, i8); 4] {
        let mut out = self.shape();
        for block in &mut out {
            block.0 += self.x;
            block.1 += self.y;
        }
        out
    }

    /// The same piece translated by (dx, dy). Keeps the kick flag.
    pub fn offset(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// True if any block lands on an illegal cell.
    pub fn collides(&self, board: &Board) -> bool {
        self.blocks().iter().any(|&(x, y)| board.is_blocked(x, y))
    }

    /// How many rows this piece can fall before resting. 0 means it is
    /// already grounded.
    pub fn drop_distance(&self, board: &Board) -> i8 {
        let mut distance = 0;
        while !self.offset(0, distance + 1).collides(board) {
            distance += 1;
        }
        distance
    }
}

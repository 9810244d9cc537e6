//! Rotation resolver - wall-kick tables and ordered candidate testing
//!
//! Kick offsets are (dx, dy), x right-positive, y down-positive, applied
//! to the anchor after the rotation state changes. Candidates are tried
//! in table order; the first legal one wins. O pieces and half turns get
//! the identity offset as their only candidate, so O always rotates in
//! place and a blocked half turn simply no-ops.

use crate::core::piece::ActivePiece;
use crate::types::{PieceKind, Rotation, Spin};

/// Five ordered candidate offsets per adjacent-state transition.
pub type KickList = [(i8, i8); 5];

/// Sole candidate for O pieces and half turns.
const IDENTITY: [(i8, i8); 1] = [(0, 0)];

/// Shared table for J, L, S, T and Z.
const JLSTZ_KICKS: [KickList; 8] = [
    // 0->1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 1->0
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1->2
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2->1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 2->3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 3->2
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 3->0
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0->3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// Wide-kick table for the I piece.
const I_KICKS: [KickList; 8] = [
    // 0->1
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 1->0
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 1->2
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2->1
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 2->3
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 3->2
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 3->0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 0->3
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

/// Table row for an adjacent transition; half turns have none.
fn transition_index(from: Rotation, to: Rotation) -> Option<usize> {
    match (from.index(), to.index()) {
        (0, 1) => Some(0),
        (1, 0) => Some(1),
        (1, 2) => Some(2),
        (2, 1) => Some(3),
        (2, 3) => Some(4),
        (3, 2) => Some(5),
        (3, 0) => Some(6),
        (0, 3) => Some(7),
        _ => None,
    }
}

/// The ordered candidate offsets for rotating `kind` from one state to
/// another.
pub fn kick_candidates(kind: PieceKind, from: Rotation, to: Rotation) -> &'static [(i8, i8)] {
    if kind == PieceKind::O {
        return &IDENTITY;
    }
    match transition_index(from, to) {
        Some(idx) => match kind {
            PieceKind::I => &I_KICKS[idx],
            _ => &JLSTZ_KICKS[idx],
        },
        None => &IDENTITY,
    }
}

/// Try to rotate a piece, testing each kick candidate in order through
/// the caller's cell-legality predicate. Returns the rotated piece
/// (kick flag set) or None if every candidate collides.
pub fn try_rotate(
    piece: &ActivePiece,
    spin: Spin,
    blocked: impl Fn(i8, i8) -> bool,
) -> Option<ActivePiece> {
    let to = piece.rotation.turned(spin);

    for &(dx, dy) in kick_candidates(piece.kind, piece.rotation, to) {
        let candidate = ActivePiece {
            kind: piece.kind,
            rotation: to,
            x: piece.x + dx,
            y: piece.y + dy,
            kicked: true,
        };
        if candidate.blocks().iter().all(|&(x, y)| !blocked(x, y)) {
            return Some(candidate);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Board;
    use crate::types::Spin;

    fn piece(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> ActivePiece {
        ActivePiece {
            kind,
            rotation,
            x,
            y,
            kicked: false,
        }
    }

    #[test]
    fn candidate_tables_match_the_rotation_system() {
        let t = kick_candidates(PieceKind::T, Rotation::R0, Rotation::R1);
        assert_eq!(t, &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]);
        let t_back = kick_candidates(PieceKind::S, Rotation::R1, Rotation::R0);
        assert_eq!(t_back, &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)]);
        let i = kick_candidates(PieceKind::I, Rotation::R0, Rotation::R1);
        assert_eq!(i, &[(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)]);
        let i_down = kick_candidates(PieceKind::I, Rotation::R2, Rotation::R3);
        assert_eq!(i_down, &[(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)]);
    }

    #[test]
    fn o_and_half_turns_get_identity_only() {
        assert_eq!(
            kick_candidates(PieceKind::O, Rotation::R0, Rotation::R1),
            &[(0, 0)]
        );
        assert_eq!(
            kick_candidates(PieceKind::T, Rotation::R0, Rotation::R2),
            &[(0, 0)]
        );
        assert_eq!(
            kick_candidates(PieceKind::I, Rotation::R1, Rotation::R3),
            &[(0, 0)]
        );
    }

    #[test]
    fn unobstructed_rotation_takes_the_identity_offset() {
        let board = Board::new();
        let t = piece(PieceKind::T, Rotation::R0, 4, 5);
        let rotated = try_rotate(&t, Spin::Cw, |x, y| board.is_blocked(x, y)).unwrap();
        assert_eq!(rotated.rotation, Rotation::R1);
        assert_eq!((rotated.x, rotated.y), (4, 5));
        assert!(rotated.kicked);
    }

    #[test]
    fn obstructed_rotation_falls_through_to_a_kick() {
        let mut board = Board::new();
        // Block the identity target of T 0->1 (the (0, 1) block).
        board.set(4, 6, Some(PieceKind::Z));
        let t = piece(PieceKind::T, Rotation::R0, 4, 5);
        let rotated = try_rotate(&t, Spin::Cw, |x, y| board.is_blocked(x, y)).unwrap();
        assert_eq!(rotated.rotation, Rotation::R1);
        // Second candidate (-1, 0) shifts the anchor one column left.
        assert_eq!((rotated.x, rotated.y), (3, 5));
    }

    #[test]
    fn i_piece_uses_its_wide_kicks() {
        let mut board = Board::new();
        // Target R1 reaches down to (4, 7); block it.
        board.set(4, 7, Some(PieceKind::J));
        let i = piece(PieceKind::I, Rotation::R0, 4, 5);
        let rotated = try_rotate(&i, Spin::Cw, |x, y| board.is_blocked(x, y)).unwrap();
        assert_eq!((rotated.x, rotated.y), (2, 5));
    }

    #[test]
    fn rotation_with_no_legal_candidate_is_rejected() {
        let board = Board::new();
        // T hugging the left wall in R3: every 3->0 candidate pushes the
        // left arm into the wall.
        let t = piece(PieceKind::T, Rotation::R3, 0, 5);
        assert!(!t.collides(&board));
        assert!(try_rotate(&t, Spin::Cw, |x, y| board.is_blocked(x, y)).is_none());
    }

    #[test]
    fn half_turn_succeeds_in_place_or_not_at_all() {
        let mut board = Board::new();
        let t = piece(PieceKind::T, Rotation::R0, 4, 5);
        let turned = try_rotate(&t, Spin::Half, |x, y| board.is_blocked(x, y)).unwrap();
        assert_eq!(turned.rotation, Rotation::R2);
        assert_eq!((turned.x, turned.y), (4, 5));

        // Block the R2 down-stem and the half turn no-ops.
        board.set(4, 6, Some(PieceKind::L));
        assert!(try_rotate(&t, Spin::Half, |x, y| board.is_blocked(x, y)).is_none());
    }

    #[test]
    fn o_rotation_always_succeeds_in_place() {
        let board = Board::new();
        let o = piece(PieceKind::O, Rotation::R0, 0, 21);
        let rotated = try_rotate(&o, Spin::Cw, |x, y| board.is_blocked(x, y)).unwrap();
        assert_eq!(rotated.rotation, Rotation::R1);
        assert_eq!((rotated.x, rotated.y), (0, 21));
        assert_eq!(rotated.blocks(), o.blocks());
    }
}

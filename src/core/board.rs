//! Board module - the 10x22 playfield grid
//!
//! Flat-array storage, row-major, for cache locality and zero allocation.
//! Rows 0..1 are the hidden spawn rows; rows 2..21 are visible. (x, y)
//! coordinates are signed so callers can probe above the top: y < 0 is
//! legal air for collision purposes and silently ignored on writes.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The playfield - 10 columns x 22 rows in a flat array.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index for in-bounds (x, y); None outside the grid.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Cell at (x, y); None when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set a cell. Out-of-bounds writes are dropped (returns false);
    /// this is what lets pieces lock while partly above the top.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Is (x, y) within bounds and filled?
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// The cell half of the collision rule: a block may not sit in this
    /// position. Columns outside [0, 10) and rows past the floor always
    /// block; rows above the top never do.
    pub fn is_blocked(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 {
            return true;
        }
        if y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.is_occupied(x, y)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Write a locked piece's blocks into the grid. Blocks above the top
    /// fall off; everything in bounds is recorded.
    pub fn merge_blocks(&mut self, blocks: &[(i8, i8); 4], kind: PieceKind) {
        for &(x, y) in blocks {
            self.set(x, y, Some(kind));
        }
    }

    /// Remove all full rows, compact everything above downward, and refill
    /// the top with empty rows so the board keeps exactly 22 rows.
    /// Returns the cleared row indices in top-to-bottom order.
    pub fn clear_full_rows(&mut self) -> ArrayVec<i8, 4> {
        let mut cleared_rows: ArrayVec<i8, 4> = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Two-pointer compaction, scanning bottom to top.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y as i8);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Freshly exposed rows at the top become empty.
        for y in 0..write_y {
            let start = y * width;
            let end = start + width;
            for cell in &mut self.cells[start..end] {
                *cell = None;
            }
        }

        cleared_rows.reverse();
        cleared_rows
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Fill a whole row with the given kind, leaving out the listed
    /// columns. Board setup shorthand for scenario tests.
    pub fn fill_row(&mut self, y: i8, kind: PieceKind, gaps: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            if !gaps.contains(&x) {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Number of occupied cells, over the whole grid.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

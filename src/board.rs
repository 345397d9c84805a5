//! Game board representation and collision checks
//!
//! A 10x20 grid of cells. Coordinates are (x, y) with x increasing
//! rightward and y increasing downward; row 0 is the top. Cells above the
//! board (y < 0) are never stored but count as free space, which lets a
//! piece sit partly off the top right after spawning.

use crate::tetromino::TetrominoType;

/// Standard board dimensions
pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 20;

/// A cell on the board - either empty or filled by a locked piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(TetrominoType),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Grid stored as [row][col]
    cells: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
        }
    }

    /// Get the cell at (x, y), or None if the coordinate is off the board
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || x >= BOARD_WIDTH || y < 0 || y >= BOARD_HEIGHT {
            return None;
        }
        Some(self.cells[y as usize][x as usize])
    }

    /// Check whether every given cell is somewhere a piece may occupy:
    /// in bounds horizontally, not below the floor, and not overlapping a
    /// locked cell. Rows above the board never collide.
    pub fn is_legal(&self, cells: &[(i32, i32)]) -> bool {
        cells.iter().all(|&(x, y)| {
            x >= 0
                && x < BOARD_WIDTH
                && y < BOARD_HEIGHT
                && (y < 0 || self.cells[y as usize][x as usize].is_empty())
        })
    }

    /// Write a piece's cells into the board. Cells still above the board
    /// are dropped without being recorded; the engine treats such a lock as
    /// the game-over trigger, not this method.
    pub fn lock(&mut self, cells: &[(i32, i32)], kind: TetrominoType) {
        for &(x, y) in cells {
            if x >= 0 && x < BOARD_WIDTH && y >= 0 && y < BOARD_HEIGHT {
                self.cells[y as usize][x as usize] = Cell::Filled(kind);
            }
        }
    }

    /// Remove every full row, shifting rows above it down, and return the
    /// number of rows removed. Scans bottom to top and re-examines a row
    /// index after clearing it, since new content shifts into it; this
    /// handles multiple, possibly non-contiguous, full rows in one call.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT - 1;
        while y >= 0 {
            if self.is_row_full(y as usize) {
                cleared += 1;
                for row in (1..=y as usize).rev() {
                    self.cells[row] = self.cells[row - 1];
                }
                self.cells[0] = [Cell::Empty; BOARD_WIDTH as usize];
            } else {
                y -= 1;
            }
        }
        cleared
    }

    fn is_row_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(|cell| cell.is_filled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32, kind: TetrominoType) {
        let cells: Vec<_> = (0..BOARD_WIDTH).map(|x| (x, y)).collect();
        board.lock(&cells, kind);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                assert_eq!(board.get(x, y), Some(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, -1), None);
        assert_eq!(board.get(BOARD_WIDTH, 0), None);
        assert_eq!(board.get(0, BOARD_HEIGHT), None);
    }

    #[test]
    fn test_is_legal_bounds() {
        let board = Board::new();
        assert!(board.is_legal(&[(0, 0), (9, 19)]));
        // Above the board is fine as long as x stays in bounds
        assert!(board.is_legal(&[(3, -1), (3, -4)]));
        assert!(!board.is_legal(&[(-1, 5)]));
        assert!(!board.is_legal(&[(BOARD_WIDTH, 5)]));
        assert!(!board.is_legal(&[(5, BOARD_HEIGHT)]));
    }

    #[test]
    fn test_is_legal_collision() {
        let mut board = Board::new();
        board.lock(&[(4, 10)], TetrominoType::T);
        assert!(!board.is_legal(&[(4, 10)]));
        assert!(board.is_legal(&[(4, 9), (3, 10)]));
    }

    #[test]
    fn test_lock_drops_cells_above_board() {
        let mut board = Board::new();
        board.lock(&[(3, -1), (3, 0)], TetrominoType::Line);
        assert_eq!(board.get(3, 0), Some(Cell::Filled(TetrominoType::Line)));
        // The y = -1 cell is simply not recorded anywhere
        for y in 1..BOARD_HEIGHT {
            assert_eq!(board.get(3, y), Some(Cell::Empty));
        }
    }

    #[test]
    fn test_clear_on_empty_board() {
        let mut board = Board::new();
        assert_eq!(board.clear_full_lines(), 0);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_clear_bottom_two_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 18, TetrominoType::S);
        fill_row(&mut board, 19, TetrominoType::Z);
        // A partial row above, to verify the shift distance
        board.lock(&[(2, 17), (7, 17)], TetrominoType::T);

        assert_eq!(board.clear_full_lines(), 2);
        assert_eq!(board.get(2, 19), Some(Cell::Filled(TetrominoType::T)));
        assert_eq!(board.get(7, 19), Some(Cell::Filled(TetrominoType::T)));
        assert_eq!(board.get(2, 17), Some(Cell::Empty));
        assert_eq!(board.get(0, 18), Some(Cell::Empty));
    }

    #[test]
    fn test_clear_non_contiguous_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 5, TetrominoType::L);
        fill_row(&mut board, 7, TetrominoType::J);
        board.lock(&[(0, 6)], TetrominoType::T);
        board.lock(&[(9, 4)], TetrominoType::S);

        assert_eq!(board.clear_full_lines(), 2);
        // Row 6 content lands on row 7, row 4 content lands on row 6
        assert_eq!(board.get(0, 7), Some(Cell::Filled(TetrominoType::T)));
        assert_eq!(board.get(9, 6), Some(Cell::Filled(TetrominoType::S)));
        assert_eq!(board.get(0, 5), Some(Cell::Empty));
        assert_eq!(board.get(9, 4), Some(Cell::Empty));
    }

    #[test]
    fn test_clear_full_board() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT {
            fill_row(&mut board, y, TetrominoType::Square);
        }
        assert_eq!(board.clear_full_lines(), BOARD_HEIGHT as usize);
        assert_eq!(board, Board::new());
    }
}

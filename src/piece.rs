//! Active falling piece logic
//!
//! The piece carries its own copy of the cell offsets. Rotation rewrites
//! that copy in place rather than looking the orientation up from the
//! catalog, so successive rotations compose naturally.

use crate::board::{BOARD_WIDTH, Board};
use crate::tetromino::TetrominoType;

/// The currently falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    /// The type of tetromino
    pub kind: TetrominoType,
    /// Anchor position on the board; the offsets are relative to this
    pub x: i32,
    pub y: i32,
    offsets: [(i32, i32); 4],
}

impl ActivePiece {
    /// Create a piece at the spawn position, top center. No legality check
    /// happens here; the engine verifies the spawn cells immediately after.
    pub fn spawn(kind: TetrominoType) -> Self {
        Self {
            kind,
            x: BOARD_WIDTH / 2 - 2,
            y: 0,
            offsets: kind.shape(),
        }
    }

    /// Absolute board cells of all 4 blocks
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.offsets.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Try to move by (dx, dy), returns true if the move was applied
    pub fn try_move(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        let moved = self
            .offsets
            .map(|(ox, oy)| (self.x + ox + dx, self.y + oy + dy));
        if board.is_legal(&moved) {
            self.x += dx;
            self.y += dy;
            true
        } else {
            false
        }
    }

    /// Try to rotate 90 degrees about the offset origin, returns true if
    /// applied. There are no wall kicks: if the rotated cells are illegal
    /// the piece keeps its previous offsets untouched.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = self.offsets.map(|(dx, dy)| (dy, -dx));
        let cells = rotated.map(|(dx, dy)| (self.x + dx, self.y + dy));
        if board.is_legal(&cells) {
            self.offsets = rotated;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub fn offsets(&self) -> [(i32, i32); 4] {
        self.offsets
    }
}

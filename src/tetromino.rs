//! Tetromino definitions and shapes
//!
//! The seven classic pieces, each defined by four cell offsets from the
//! piece anchor plus a display color. Only the canonical orientation is
//! stored here; rotation is a transform applied to a live copy of the
//! offsets on the falling piece.

/// The 7 tetromino types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    Square,
    Line,
    Z,
    S,
    T,
    L,
    J,
}

impl TetrominoType {
    /// All types, in catalog order
    pub const ALL: [TetrominoType; 7] = [
        TetrominoType::Square,
        TetrominoType::Line,
        TetrominoType::Z,
        TetrominoType::S,
        TetrominoType::T,
        TetrominoType::L,
        TetrominoType::J,
    ];

    /// Canonical shape as 4 (dx, dy) offsets from the anchor.
    /// x increases rightward, y increases downward.
    pub const fn shape(self) -> [(i32, i32); 4] {
        match self {
            TetrominoType::Square => [(0, 0), (0, 1), (1, 0), (1, 1)],
            TetrominoType::Line => [(0, 0), (0, 1), (0, 2), (0, 3)],
            TetrominoType::Z => [(0, 0), (0, 1), (1, 1), (1, 2)],
            TetrominoType::S => [(0, 1), (0, 2), (1, 0), (1, 1)],
            TetrominoType::T => [(0, 0), (0, 1), (0, 2), (1, 1)],
            TetrominoType::L => [(0, 0), (1, 0), (2, 0), (2, 1)],
            TetrominoType::J => [(0, 1), (1, 1), (2, 0), (2, 1)],
        }
    }

    /// Display color as an 8-bit RGB triple
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            TetrominoType::Square => (255, 255, 0),
            TetrominoType::Line => (0, 255, 255),
            TetrominoType::Z => (255, 0, 0),
            TetrominoType::S => (0, 255, 0),
            TetrominoType::T => (255, 0, 255),
            TetrominoType::L => (255, 128, 0),
            TetrominoType::J => (0, 0, 255),
        }
    }
}

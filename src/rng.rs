//! Piece selection sources
//!
//! The engine never touches an entropy source directly; it draws the next
//! type through `PieceSource`. The real game uses a seedable ChaCha stream,
//! tests script the exact sequence they need.

use crate::tetromino::TetrominoType;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of next-piece draws
pub trait PieceSource {
    fn next_type(&mut self) -> TetrominoType;
}

/// Uniform random source backed by a seeded ChaCha stream
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSource for RandomSource {
    fn next_type(&mut self) -> TetrominoType {
        TetrominoType::ALL[self.rng.gen_range(0..TetrominoType::ALL.len())]
    }
}

/// Replays a fixed sequence of types, cycling once exhausted
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct ScriptedSource {
    sequence: Vec<TetrominoType>,
    pos: usize,
}

#[allow(dead_code)]
impl ScriptedSource {
    /// Panics on an empty sequence; a source must always produce a type.
    pub fn new(sequence: Vec<TetrominoType>) -> Self {
        assert!(!sequence.is_empty());
        Self { sequence, pos: 0 }
    }
}

impl PieceSource for ScriptedSource {
    fn next_type(&mut self) -> TetrominoType {
        let kind = self.sequence[self.pos % self.sequence.len()];
        self.pos += 1;
        kind
    }
}

//! Core game state machine
//!
//! The engine owns the whole game state and is driven entirely from
//! outside: a timer calls `tick` at the fall interval, player input calls
//! `command`. Both are synchronous and never block; anything the driver
//! needs to react to (cleared lines, a new fall interval, game over) comes
//! back as signals from `tick`. The engine holds no timer of its own, so a
//! headless test harness can drive it exactly like the real host.

use crate::board::{Board, Cell};
use crate::piece::ActivePiece;
use crate::rng::PieceSource;
use crate::score::Score;
use crate::tetromino::TetrominoType;
use std::time::Duration;

/// Player commands the engine accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    /// Single-step soft drop, not an instant drop
    Down,
    Rotate,
    TogglePause,
}

/// State transitions reported to the driver after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    LinesCleared(usize),
    /// The level went up; the tick timer must be rescheduled at this interval
    LevelChanged(Duration),
    GameOver,
}

/// The game engine: board, falling piece, lookahead, and score
pub struct GameEngine {
    board: Board,
    current: ActivePiece,
    next: TetrominoType,
    score: Score,
    paused: bool,
    game_over: bool,
    source: Box<dyn PieceSource>,
}

impl GameEngine {
    /// Create an engine and start its first game
    pub fn new(source: Box<dyn PieceSource>) -> Self {
        let mut engine = Self {
            board: Board::new(),
            // Placeholder state, replaced by new_game before anyone sees it
            current: ActivePiece::spawn(TetrominoType::Square),
            next: TetrominoType::Square,
            score: Score::new(),
            paused: false,
            game_over: false,
            source,
        };
        engine.new_game();
        engine
    }

    /// Discard all state and start over: empty board, score 0, level 1,
    /// fresh lookahead, running. Valid in any state, including game over.
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.score = Score::new();
        self.paused = false;
        self.game_over = false;
        self.next = self.source.next_type();
        self.spawn_next();
        if !self.board.is_legal(&self.current.cells()) {
            self.game_over = true;
        }
        tracing::info!("new game started");
    }

    /// Promote the lookahead to the falling piece and draw a new lookahead.
    /// The caller checks spawn legality; a blocked spawn means game over.
    fn spawn_next(&mut self) {
        let kind = self.next;
        self.next = self.source.next_type();
        self.current = ActivePiece::spawn(kind);
    }

    /// Advance the game by one gravity step. Called by the external timer
    /// at the current fall interval; a no-op while paused or after game
    /// over. Returns the transitions the driver has to act on.
    pub fn tick(&mut self) -> Vec<Signal> {
        let mut signals = Vec::new();
        if self.paused || self.game_over {
            return signals;
        }

        if self.current.try_move(&self.board, 0, 1) {
            return signals;
        }

        // The piece is resting on the floor or the stack: lock it, clear
        // lines, score, and bring in the next piece.
        self.board.lock(&self.current.cells(), self.current.kind);
        let cleared = self.board.clear_full_lines();
        if cleared > 0 {
            tracing::debug!(cleared, "lines cleared");
            signals.push(Signal::LinesCleared(cleared));
        }
        if self.score.on_lines_cleared(cleared as u32) {
            tracing::info!(level = self.score.level, "level up");
            signals.push(Signal::LevelChanged(self.score.fall_interval()));
        }

        self.spawn_next();
        if !self.board.is_legal(&self.current.cells()) {
            self.game_over = true;
            tracing::info!(score = self.score.points, "game over");
            signals.push(Signal::GameOver);
        }
        signals
    }

    /// Apply a player command. Everything is ignored after game over;
    /// while paused only the pause toggle itself gets through.
    pub fn command(&mut self, mv: Move) {
        if self.game_over {
            return;
        }
        match mv {
            Move::TogglePause => self.paused = !self.paused,
            _ if self.paused => {}
            Move::Left => {
                self.current.try_move(&self.board, -1, 0);
            }
            Move::Right => {
                self.current.try_move(&self.board, 1, 0);
            }
            Move::Down => {
                self.current.try_move(&self.board, 0, 1);
            }
            Move::Rotate => {
                self.current.try_rotate(&self.board);
            }
        }
    }

    /// Locked cell at (x, y), or None for an out-of-range coordinate
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.board.get(x, y)
    }

    /// The falling piece's type and absolute cells
    pub fn current_piece(&self) -> (TetrominoType, [(i32, i32); 4]) {
        (self.current.kind, self.current.cells())
    }

    /// The lookahead type shown to the player
    pub fn next_kind(&self) -> TetrominoType {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score.points
    }

    pub fn level(&self) -> u32 {
        self.score.level
    }

    /// Desired time between ticks at the current level
    pub fn fall_interval(&self) -> Duration {
        self.score.fall_interval()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

//! Score and level tracking
//!
//! Scoring is line-clears only: each cleared row is worth 100 times the
//! current level. Crossing `level * LEVEL_THRESHOLD` points raises the
//! level, which shortens the fall interval; the driver owns the actual
//! timer and is told to reschedule through the engine's signals.

use std::time::Duration;

/// Points required per level before advancing
pub const LEVEL_THRESHOLD: u32 = 5000;
/// Levels stop increasing here so the fall interval stays bounded
pub const MAX_LEVEL: u32 = 10;
/// Fall interval at level 1; divided by the level thereafter
pub const BASE_INTERVAL: Duration = Duration::from_millis(500);

/// Score and level state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Current score, saturating instead of wrapping
    pub points: u32,
    /// Current level, 1 through MAX_LEVEL
    pub level: u32,
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl Score {
    pub fn new() -> Self {
        Self { points: 0, level: 1 }
    }

    /// Record a line clear of `lines` rows (0 is a valid no-op) and apply
    /// the level-up rule. Returns true when the level changed, meaning the
    /// fall interval is now different.
    pub fn on_lines_cleared(&mut self, lines: u32) -> bool {
        self.points = self.points.saturating_add(lines * 100 * self.level);

        if self.points >= self.level * LEVEL_THRESHOLD && self.level < MAX_LEVEL {
            self.level += 1;
            return true;
        }
        false
    }

    /// Time between automatic falls at the current level
    pub fn fall_interval(&self) -> Duration {
        BASE_INTERVAL / self.level
    }
}

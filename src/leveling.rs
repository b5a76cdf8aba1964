use serde::Serialize;

/// Each 20 awarded points move progress by one percentage point.
pub const POINTS_PER_PERCENT: f64 = 20.0;

pub const SEED_LEVEL: u32 = 5;
pub const SEED_PROGRESS: f64 = 62.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    pub progress_to_next_level: f64,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self {
            level: SEED_LEVEL,
            progress_to_next_level: SEED_PROGRESS,
        }
    }
}

impl LevelProgress {
    /// Applies an award and returns the new level if it crossed 100%.
    ///
    /// Overflow past 100 carries into the next level. The threshold is
    /// checked once per award, so a single award raises the level by at
    /// most one.
    pub fn advance(&mut self, points: i64) -> Option<u32> {
        let candidate = self.progress_to_next_level + points as f64 / POINTS_PER_PERCENT;
        if candidate >= 100.0 {
            self.level = self.level.saturating_add(1);
            self.progress_to_next_level = candidate - 100.0;
            Some(self.level)
        } else {
            self.progress_to_next_level = candidate;
            None
        }
    }

    pub fn next_level(&self) -> u32 {
        self.level.saturating_add(1)
    }

    pub fn rounded_percent(&self) -> i64 {
        round_half_up(self.progress_to_next_level)
    }

    pub fn points_to_next_level(&self) -> i64 {
        round_half_up((100.0 - self.progress_to_next_level) * POINTS_PER_PERCENT)
    }
}

/// Halves round toward positive infinity, so -2.5 becomes -2.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

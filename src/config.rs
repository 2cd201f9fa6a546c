use std::time::Duration;

pub const DEFAULT_WIDTH: i32 = 32;
pub const DEFAULT_HEIGHT: i32 = 16;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
pub const DEFAULT_INITIAL_SCORE: u32 = 5;

/// Session parameters, fixed for the lifetime of a game.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Grid columns, border ring included.
    pub width: i32,
    /// Grid rows, border ring included.
    pub height: i32,
    /// Delay between game updates.
    pub tick_interval_ms: u64,
    /// Score the player starts with.
    pub initial_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            initial_score: DEFAULT_INITIAL_SCORE,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.width < 10 || self.width > 100 {
            return Err("Grid width must be between 10 and 100".to_string());
        }
        if self.height < 10 || self.height > 100 {
            return Err("Grid height must be between 10 and 100".to_string());
        }
        if self.tick_interval_ms > 5000 {
            return Err("Tick interval must be at most 5000ms".to_string());
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

use anyhow::{ensure, Result};
use serde::Deserialize;

/// Tuning knobs for a game session, read from `dna_island.toml`.
///
/// Every section and field is optional; missing values fall back to the
/// defaults the game ships with.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub timer: TimerConfig,
    pub puzzle: PuzzleConfig,
    pub difficulty: DifficultyConfig,
    pub world: WorldConfig,
    /// Fixed RNG seed, for reproducible prompt sequences.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimerConfig {
    pub limit_secs: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig { limit_secs: 90 }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Slots at level 1 with no streak bonus.
    pub base_slots: u32,
    pub slots_per_level: u32,
    /// Tokens available per base for one attempt.
    pub palette_quota: u32,
    /// Max distance on each axis between a dropped token and its slot.
    pub drop_tolerance: i32,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            base_slots: 4,
            slots_per_level: 2,
            palette_quota: 5,
            drop_tolerance: 40,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DifficultyConfig {
    pub max_win_level: u32,
    pub bonus_cap: Option<u32>,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        DifficultyConfig {
            max_win_level: 3,
            bonus_cap: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub move_step: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig { move_step: 20 }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.timer.limit_secs > 0, "timer.limit_secs must be at least 1");
        ensure!(self.puzzle.base_slots > 0, "puzzle.base_slots must be at least 1");
        ensure!(
            self.puzzle.palette_quota > 0,
            "puzzle.palette_quota must be at least 1"
        );
        ensure!(
            self.puzzle.drop_tolerance > 0,
            "puzzle.drop_tolerance must be positive"
        );
        ensure!(
            self.difficulty.max_win_level > 0,
            "difficulty.max_win_level must be at least 1"
        );
        ensure!(self.world.move_step > 0, "world.move_step must be positive");
        Ok(())
    }
}

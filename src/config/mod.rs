pub mod loader;
pub mod types;

pub use loader::{load_config, load_or_default};
pub use types::{DifficultyConfig, GameConfig, PuzzleConfig, TimerConfig, WorldConfig};

//! DNA Island: walk the island, reach the lab, pair the bases before time runs out.
//!
//! The engine is input-agnostic. Adapters turn key presses, mouse drags and
//! timer deliveries into [`GameEvent`]s and hand them to
//! [`SceneController::dispatch`] together with the [`GameState`].

pub mod config;
pub mod difficulty;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod puzzle;
pub mod scene;
pub mod timer;

pub use config::GameConfig;
pub use event::{Direction, GameEvent};
pub use scene::{GameState, Scene, SceneController};

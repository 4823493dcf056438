pub mod controller;
pub mod state;

pub use controller::SceneController;
pub use state::{Drag, GameState, LabState, Notice};

use crate::puzzle::Base;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Hub,
    Forest,
    Lab,
    Win,
}

impl Scene {
    pub fn title(self) -> &'static str {
        match self {
            Scene::Hub => "Island Hub",
            Scene::Forest => "DNA Forest",
            Scene::Lab => "DNA Lab",
            Scene::Win => "Victory",
        }
    }

    /// Scenes where the player walks around the map.
    pub fn is_overworld(self) -> bool {
        matches!(self, Scene::Hub | Scene::Forest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Spawn(Base),
    Submit,
    ExitToHub,
    Restart,
}

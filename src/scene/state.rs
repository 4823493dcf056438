use super::Scene;
use crate::difficulty::DifficultyModel;
use crate::geometry::Point;
use crate::puzzle::{PuzzleSession, TokenId};
use crate::timer::TimerController;

/// Last gameplay outcome, shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Solved { level: u32 },
    Mismatch { matched: usize, total: usize },
    TimedOut { level: u32 },
}

/// A token being dragged, with the pointer's offset into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    pub token: TokenId,
    pub grab_dx: i32,
    pub grab_dy: i32,
}

/// Everything owned by one visit to the lab. Dropped as a unit on exit.
#[derive(Debug)]
pub struct LabState {
    pub session: u64,
    pub puzzle: PuzzleSession,
    pub timer: TimerController,
    pub drag: Option<Drag>,
}

#[derive(Debug)]
pub struct GameState {
    pub scene: Scene,
    pub level: u32,
    pub difficulty: DifficultyModel,
    /// Player origin; only present on the overworld.
    pub player: Option<Point>,
    pub lab: Option<LabState>,
    pub notice: Option<Notice>,
    lab_visits: u64,
}

impl GameState {
    pub fn new(difficulty: DifficultyModel) -> Self {
        GameState {
            scene: Scene::Hub,
            level: 1,
            difficulty,
            player: Some(crate::layout::PLAYER_SPAWN),
            lab: None,
            notice: None,
            lab_visits: 0,
        }
    }

    /// Hands out a fresh id for the next lab visit.
    pub(crate) fn next_lab_session(&mut self) -> u64 {
        self.lab_visits += 1;
        self.lab_visits
    }

    /// The lab, if `session` is still the one running.
    pub fn live_lab(&mut self, session: u64) -> Option<&mut LabState> {
        self.lab.as_mut().filter(|lab| lab.session == session)
    }
}

use crate::geometry::Point;
use crate::scene::ButtonId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self, step: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -step),
            Direction::Down => (0, step),
            Direction::Left => (-step, 0),
            Direction::Right => (step, 0),
        }
    }
}

/// Everything the game reacts to. Input adapters and the scheduler both
/// feed this one type into [`SceneController::dispatch`](crate::scene::SceneController::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Move(Direction),
    DragStart(Point),
    DragMove(Point),
    DragEnd(Point),
    ButtonPress(ButtonId),
    /// Carries the id of the lab visit whose timer scheduled it.
    TimerTick { session: u64 },
    TimerExpired { session: u64 },
}

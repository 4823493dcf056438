use rand::rngs::StdRng;
use rand::SeedableRng;

use super::state::{Drag, GameState, LabState, Notice};
use super::{ButtonId, Scene};
use crate::config::GameConfig;
use crate::difficulty::DifficultyModel;
use crate::event::{Direction, GameEvent};
use crate::geometry::Point;
use crate::layout;
use crate::puzzle::{PuzzleSession, Verdict};
use crate::timer::{Scheduler, TickOutcome, TimerController};

/// Drives scene transitions and routes events into the active scene.
pub struct SceneController {
    config: GameConfig,
    rng: StdRng,
}

impl SceneController {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        SceneController { config, rng }
    }

    /// Initial state: level 1 in the hub.
    pub fn new_game(&self) -> GameState {
        GameState::new(DifficultyModel::with_cap(self.config.difficulty.bonus_cap))
    }

    pub fn dispatch(
        &mut self,
        state: &mut GameState,
        event: GameEvent,
        scheduler: &mut dyn Scheduler,
    ) {
        match event {
            GameEvent::Move(direction) => self.on_movement_input(state, direction, scheduler),
            GameEvent::DragStart(at) => drag_start(state, at),
            GameEvent::DragMove(at) => drag_move(state, at),
            GameEvent::DragEnd(at) => drag_end(state, at),
            GameEvent::ButtonPress(id) => self.on_button(state, id, scheduler),
            GameEvent::TimerTick { session } => self.on_timer_tick(state, session, scheduler),
            GameEvent::TimerExpired { session } => {
                match state.live_lab(session) {
                    Some(lab) if lab.timer.is_running() => lab.timer.stop(),
                    _ => {
                        tracing::debug!(session, "stale expiry ignored");
                        return;
                    }
                }
                self.on_timeout(state, scheduler);
            }
        }
    }

    pub fn enter_hub(&mut self, state: &mut GameState) {
        if state.scene == Scene::Hub {
            return;
        }
        self.teardown(state);
        state.scene = Scene::Hub;
        state.player = Some(layout::PLAYER_SPAWN);
        tracing::info!("entered hub");
    }

    pub fn enter_forest(&mut self, state: &mut GameState) {
        if state.scene == Scene::Forest {
            return;
        }
        self.teardown(state);
        state.scene = Scene::Forest;
        state.player = Some(layout::PLAYER_SPAWN);
        tracing::info!("entered forest");
    }

    /// Builds a fresh puzzle and timer. Past the last level this is the win
    /// screen instead.
    pub fn enter_lab(&mut self, state: &mut GameState, scheduler: &mut dyn Scheduler) {
        if state.level > self.config.difficulty.max_win_level {
            self.enter_win(state);
            return;
        }
        self.teardown(state);

        let session = state.next_lab_session();
        let bonus = state.difficulty.bonus();
        let puzzle = PuzzleSession::generate(&self.config.puzzle, state.level, bonus, &mut self.rng);
        tracing::info!(
            session,
            level = state.level,
            bonus,
            slots = puzzle.slots().len(),
            "entered lab"
        );

        let mut timer = TimerController::new(session);
        let first = timer.start(self.config.timer.limit_secs, scheduler);
        debug_assert_ne!(first, TickOutcome::Expired, "timer limit must be positive");

        state.scene = Scene::Lab;
        state.player = None;
        state.lab = Some(LabState {
            session,
            puzzle,
            timer,
            drag: None,
        });
    }

    pub fn enter_win(&mut self, state: &mut GameState) {
        self.teardown(state);
        state.scene = Scene::Win;
        state.player = None;
        tracing::info!(level = state.level, "game won");
    }

    /// Back to level 1 in the hub. The streak carries over.
    pub fn restart(&mut self, state: &mut GameState) {
        state.level = 1;
        state.notice = None;
        self.enter_hub(state);
    }

    pub fn on_movement_input(
        &mut self,
        state: &mut GameState,
        direction: Direction,
        scheduler: &mut dyn Scheduler,
    ) {
        if !state.scene.is_overworld() {
            return;
        }
        let Some(player) = state.player else {
            return;
        };
        let (dx, dy) = direction.delta(self.config.world.move_step);
        let moved = layout::clamp_player(player.offset(dx, dy));
        state.player = Some(moved);

        let body = layout::player_bounds(moved);
        match state.scene {
            Scene::Hub if body.overlaps(&layout::HUB_ENTRANCE) => self.enter_forest(state),
            Scene::Forest if body.overlaps(&layout::LAB_DOOR) => self.enter_lab(state, scheduler),
            _ => {}
        }
    }

    fn on_button(&mut self, state: &mut GameState, id: ButtonId, scheduler: &mut dyn Scheduler) {
        match (state.scene, id) {
            (Scene::Forest | Scene::Lab, ButtonId::ExitToHub) => self.enter_hub(state),
            (Scene::Lab, ButtonId::Spawn(base)) => {
                if let Some(lab) = state.lab.as_mut() {
                    lab.puzzle.place(base);
                }
            }
            (Scene::Lab, ButtonId::Submit) => self.submit(state, scheduler),
            (Scene::Win, ButtonId::Restart) => self.restart(state),
            (scene, id) => tracing::debug!(?scene, ?id, "button not available here"),
        }
    }

    fn submit(&mut self, state: &mut GameState, scheduler: &mut dyn Scheduler) {
        let Some(lab) = state.lab.as_mut() else {
            tracing::debug!("submit without a live puzzle ignored");
            return;
        };
        lab.timer.stop();
        let report = lab.puzzle.submit();
        let total = report.marks.len();

        match report.verdict {
            Verdict::Correct => {
                state.difficulty.record_outcome(true);
                state.notice = Some(Notice::Solved { level: state.level });
                state.level += 1;
            }
            Verdict::Incorrect => {
                state.difficulty.record_outcome(false);
                state.notice = Some(Notice::Mismatch {
                    matched: report.matched(),
                    total,
                });
            }
        }
        tracing::info!(
            verdict = ?report.verdict,
            matched = report.matched(),
            total,
            level = state.level,
            streak = state.difficulty.streak(),
            "puzzle submitted"
        );
        self.enter_lab(state, scheduler);
    }

    fn on_timer_tick(&mut self, state: &mut GameState, session: u64, scheduler: &mut dyn Scheduler) {
        let Some(lab) = state.live_lab(session) else {
            tracing::trace!(session, "stale tick ignored");
            return;
        };
        if lab.timer.tick(scheduler) == TickOutcome::Expired {
            self.on_timeout(state, scheduler);
        }
    }

    fn on_timeout(&mut self, state: &mut GameState, scheduler: &mut dyn Scheduler) {
        state.difficulty.record_outcome(false);
        state.level = state.level.saturating_sub(1).max(1);
        state.notice = Some(Notice::TimedOut { level: state.level });
        tracing::info!(
            level = state.level,
            streak = state.difficulty.streak(),
            "lab timer expired"
        );
        self.enter_lab(state, scheduler);
    }

    /// Stops the outgoing lab's timer and drops its puzzle.
    fn teardown(&mut self, state: &mut GameState) {
        if let Some(mut lab) = state.lab.take() {
            lab.timer.stop();
            tracing::debug!(session = lab.session, "lab torn down");
        }
    }
}

fn drag_start(state: &mut GameState, at: Point) {
    let Some(lab) = state.lab.as_mut() else {
        return;
    };
    lab.drag = lab.puzzle.token_at(at).and_then(|id| {
        let token = lab.puzzle.token(id)?;
        Some(Drag {
            token: id,
            grab_dx: at.x - token.position.x,
            grab_dy: at.y - token.position.y,
        })
    });
}

fn drag_move(state: &mut GameState, at: Point) {
    let Some(lab) = state.lab.as_mut() else {
        return;
    };
    if let Some(drag) = lab.drag {
        lab.puzzle
            .move_token(drag.token, at.offset(-drag.grab_dx, -drag.grab_dy));
    }
}

fn drag_end(state: &mut GameState, at: Point) {
    drag_move(state, at);
    let Some(lab) = state.lab.as_mut() else {
        return;
    };
    if let Some(drag) = lab.drag.take() {
        if let Some(slot) = lab.puzzle.assign(drag.token) {
            tracing::debug!(slot, "token placed");
        }
    }
}

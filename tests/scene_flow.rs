// Scenario tests: the whole game driven through `SceneController::dispatch`
// with a seeded RNG and a virtual clock.

use std::time::Duration;

use dna_island::config::GameConfig;
use dna_island::layout;
use dna_island::puzzle::Base;
use dna_island::scene::{ButtonId, Notice};
use dna_island::timer::{EventQueue, VirtualClock};
use dna_island::{Direction, GameEvent, GameState, Scene, SceneController};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Defaults, with enough palette to solve puzzles where one base repeats often.
fn roomy() -> GameConfig {
    let mut config = GameConfig::default();
    config.puzzle.palette_quota = 16;
    config
}

struct Harness {
    controller: SceneController,
    state: GameState,
    queue: EventQueue<VirtualClock>,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    fn with_config(config: GameConfig) -> Self {
        let controller = SceneController::with_rng(config, StdRng::seed_from_u64(42));
        let state = controller.new_game();
        Harness {
            controller,
            state,
            queue: EventQueue::new(VirtualClock::default()),
        }
    }

    fn send(&mut self, event: GameEvent) {
        self.controller
            .dispatch(&mut self.state, event, &mut self.queue);
    }

    fn press(&mut self, id: ButtonId) {
        self.send(GameEvent::ButtonPress(id));
    }

    fn walk(&mut self, direction: Direction, steps: usize) {
        for _ in 0..steps {
            self.send(GameEvent::Move(direction));
        }
    }

    /// Advances the virtual clock one second at a time, delivering due events.
    fn wait_secs(&mut self, secs: u64) {
        for _ in 0..secs {
            self.queue.clock_mut().advance(Duration::from_secs(1));
            while let Some(event) = self.queue.pop_due() {
                self.send(event);
            }
        }
    }

    fn enter_lab(&mut self) {
        self.controller.enter_lab(&mut self.state, &mut self.queue);
    }

    fn session(&self) -> u64 {
        self.state.lab.as_ref().expect("lab is live").session
    }

    fn slot_count(&self) -> usize {
        self.state.lab.as_ref().map_or(0, |lab| lab.puzzle.slots().len())
    }

    /// Drags the right answer onto every slot, spawning from the palette.
    fn solve(&mut self) {
        let answers: Vec<_> = self
            .state
            .lab
            .as_ref()
            .expect("lab is live")
            .puzzle
            .slots()
            .iter()
            .map(|slot| (slot.required(), slot.position))
            .collect();
        for (base, at) in answers {
            self.press(ButtonId::Spawn(base));
            self.send(GameEvent::DragStart(layout::TOKEN_SPAWN.offset(1, 1)));
            self.send(GameEvent::DragEnd(at.offset(1, 1)));
        }
    }
}

#[test]
fn walking_from_hub_to_lab_builds_a_puzzle() {
    let mut h = Harness::new();
    h.walk(Direction::Up, 15);
    assert_eq!(h.state.scene, Scene::Forest);

    h.walk(Direction::Right, 28);
    assert_eq!(h.state.scene, Scene::Forest);
    h.walk(Direction::Up, 15);
    assert_eq!(h.state.scene, Scene::Lab);
    assert_eq!(h.slot_count(), 4);
    assert_eq!(h.state.lab.as_ref().unwrap().timer.displayed(), 90);

    // Further key presses do nothing while the puzzle is up.
    h.walk(Direction::Down, 3);
    assert_eq!(h.state.scene, Scene::Lab);
}

#[test]
fn level_two_with_streak_three_has_nine_slots() {
    let mut h = Harness::new();
    h.state.level = 2;
    for _ in 0..3 {
        h.state.difficulty.record_outcome(true);
    }
    h.enter_lab();
    assert_eq!(h.slot_count(), 9);
}

#[test]
fn solving_the_first_puzzle_levels_up() {
    let mut h = Harness::with_config(roomy());
    h.enter_lab();
    let first = h.session();

    h.solve();
    h.press(ButtonId::Submit);

    assert_eq!(h.state.scene, Scene::Lab);
    assert_eq!(h.state.level, 2);
    assert_eq!(h.state.difficulty.streak(), 1);
    assert_eq!(h.state.notice, Some(Notice::Solved { level: 1 }));
    assert_ne!(h.session(), first);
    assert_eq!(h.slot_count(), 4 + 2 + 1);
}

#[test]
fn wrong_submission_keeps_the_level_and_drops_the_streak() {
    let mut h = Harness::new();
    h.state.level = 2;
    h.state.difficulty.record_outcome(true);
    h.enter_lab();

    h.press(ButtonId::Spawn(Base::A));
    h.press(ButtonId::Submit);

    assert_eq!(h.state.scene, Scene::Lab);
    assert_eq!(h.state.level, 2);
    assert_eq!(h.state.difficulty.streak(), 0);
    assert!(matches!(
        h.state.notice,
        Some(Notice::Mismatch { matched: 0, total: 7 })
    ));
    let lab = h.state.lab.as_ref().unwrap();
    assert!(lab.puzzle.tokens().is_empty());
    assert_eq!(lab.puzzle.palette().remaining(Base::A), 5);
}

#[test]
fn clearing_the_last_level_wins() {
    let mut h = Harness::with_config(roomy());
    h.state.level = 3;
    h.enter_lab();
    h.solve();
    h.press(ButtonId::Submit);

    assert_eq!(h.state.level, 4);
    assert_eq!(h.state.scene, Scene::Win);
    assert!(h.state.lab.is_none());
}

#[test]
fn lab_entry_past_the_last_level_goes_straight_to_win() {
    let mut h = Harness::new();
    h.state.level = 4;
    h.enter_lab();
    assert_eq!(h.state.scene, Scene::Win);
    assert!(h.state.lab.is_none());
    assert!(h.queue.is_empty());
}

#[test]
fn restart_returns_to_hub_at_level_one() {
    let mut h = Harness::new();
    h.state.level = 4;
    h.enter_lab();
    h.walk(Direction::Up, 5);
    h.press(ButtonId::Submit);
    assert_eq!(h.state.scene, Scene::Win);

    h.press(ButtonId::Restart);
    assert_eq!(h.state.scene, Scene::Hub);
    assert_eq!(h.state.level, 1);
    assert_eq!(h.state.player, Some(layout::PLAYER_SPAWN));
}

#[test]
fn timeout_at_level_one_stays_at_level_one() {
    let mut h = Harness::new();
    h.enter_lab();
    let first = h.session();

    h.wait_secs(89);
    assert_eq!(h.session(), first);
    assert_eq!(h.state.lab.as_ref().unwrap().timer.displayed(), 1);

    h.wait_secs(1);
    assert_eq!(h.state.scene, Scene::Lab);
    assert_ne!(h.session(), first);
    assert_eq!(h.state.level, 1);
    assert_eq!(h.state.difficulty.streak(), 0);
    assert_eq!(h.state.notice, Some(Notice::TimedOut { level: 1 }));
    assert_eq!(h.state.lab.as_ref().unwrap().timer.displayed(), 90);
}

#[test]
fn timeout_drops_a_level_and_the_streak() {
    let mut h = Harness::new();
    h.state.level = 3;
    h.state.difficulty.record_outcome(true);
    h.state.difficulty.record_outcome(true);
    h.enter_lab();

    h.wait_secs(90);
    assert_eq!(h.state.level, 2);
    assert_eq!(h.state.difficulty.streak(), 1);
    assert_eq!(h.slot_count(), 4 + 2 + 1);
}

#[test]
fn leaving_the_lab_silences_its_timer() {
    let mut h = Harness::new();
    h.enter_lab();
    h.wait_secs(10);
    h.press(ButtonId::ExitToHub);
    assert_eq!(h.state.scene, Scene::Hub);

    h.wait_secs(200);
    assert_eq!(h.state.scene, Scene::Hub);
    assert_eq!(h.state.level, 1);
    assert!(h.queue.is_empty());
}

#[test]
fn stale_timer_events_do_not_touch_the_new_puzzle() {
    let mut h = Harness::new();
    h.state.level = 2;
    h.enter_lab();
    let old = h.session();
    h.press(ButtonId::Submit);
    let fresh = h.session();
    assert_ne!(old, fresh);

    h.send(GameEvent::TimerExpired { session: old });
    h.send(GameEvent::TimerTick { session: old });
    assert_eq!(h.session(), fresh);
    assert_eq!(h.state.level, 2);
    assert_eq!(h.state.lab.as_ref().unwrap().timer.displayed(), 90);
}

#[test]
fn external_expiry_for_the_live_session_counts_as_timeout() {
    let mut h = Harness::new();
    h.state.level = 2;
    h.enter_lab();
    let session = h.session();

    h.send(GameEvent::TimerExpired { session });
    assert_eq!(h.state.level, 1);
    assert_ne!(h.session(), session);

    // The expired session's leftover tick is ignored.
    h.wait_secs(1);
    assert_eq!(h.state.level, 1);
}

#[test]
fn submit_outside_the_lab_is_ignored() {
    let mut h = Harness::new();
    h.press(ButtonId::Submit);
    h.press(ButtonId::Spawn(Base::G));
    assert_eq!(h.state.scene, Scene::Hub);
    assert_eq!(h.state.difficulty.streak(), 0);
    assert!(h.state.notice.is_none());
}

#[test]
fn bonus_cap_bounds_puzzle_growth() {
    let mut config = roomy();
    config.difficulty.bonus_cap = Some(1);
    config.difficulty.max_win_level = 10;
    let mut h = Harness::with_config(config);
    h.enter_lab();
    for _ in 0..3 {
        h.solve();
        h.press(ButtonId::Submit);
    }
    assert_eq!(h.state.level, 4);
    assert_eq!(h.state.difficulty.streak(), 3);
    assert_eq!(h.slot_count(), 4 + 3 * 2 + 1);
}

use std::time::Duration;

use super::scheduler::Scheduler;
use crate::event::GameEvent;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was stopped; nothing happened.
    Idle,
    /// Showed this many seconds and scheduled the next tick.
    Counting(u32),
    /// Reached zero. Reported once per `start`.
    Expired,
}

/// Countdown for one lab visit, one tick per second.
#[derive(Debug, Clone)]
pub struct TimerController {
    session: u64,
    remaining: u32,
    displayed: u32,
    running: bool,
}

impl TimerController {
    pub fn new(session: u64) -> Self {
        TimerController {
            session,
            remaining: 0,
            displayed: 0,
            running: false,
        }
    }

    /// Resets to `limit` and runs the first tick straight away.
    pub fn start(&mut self, limit: u32, scheduler: &mut dyn Scheduler) -> TickOutcome {
        self.remaining = limit;
        self.displayed = limit;
        self.running = true;
        self.tick(scheduler)
    }

    pub fn tick(&mut self, scheduler: &mut dyn Scheduler) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.displayed = self.remaining;
        if self.remaining > 0 {
            self.remaining -= 1;
            scheduler.schedule(
                TICK_INTERVAL,
                GameEvent::TimerTick {
                    session: self.session,
                },
            );
            TickOutcome::Counting(self.displayed)
        } else {
            self.running = false;
            TickOutcome::Expired
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left as last shown on screen.
    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

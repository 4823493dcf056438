use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::event::GameEvent;

/// Something that can deliver an event later.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, event: GameEvent);
}

pub trait Clock {
    /// Time since the clock was created.
    fn now(&self) -> Duration;
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
}

impl VirtualClock {
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

/// Pending events ordered by due time, then by scheduling order.
pub struct EventQueue<C> {
    clock: C,
    pending: BTreeMap<(Duration, u64), GameEvent>,
    seq: u64,
}

impl<C: Clock> EventQueue<C> {
    pub fn new(clock: C) -> Self {
        EventQueue {
            clock,
            pending: BTreeMap::new(),
            seq: 0,
        }
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns the earliest event that is due.
    pub fn pop_due(&mut self) -> Option<GameEvent> {
        let now = self.clock.now();
        let (&(due, _), _) = self.pending.first_key_value()?;
        if due > now {
            return None;
        }
        self.pending.pop_first().map(|(_, event)| event)
    }

    /// How long until the next event is due, if any is pending.
    pub fn time_to_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.pending
            .keys()
            .next()
            .map(|&(due, _)| due.saturating_sub(now))
    }
}

impl<C: Clock> Scheduler for EventQueue<C> {
    fn schedule(&mut self, delay: Duration, event: GameEvent) {
        let due = self.clock.now() + delay;
        self.pending.insert((due, self.seq), event);
        self.seq += 1;
    }
}

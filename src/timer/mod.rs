pub mod controller;
pub mod scheduler;

pub use controller::{TickOutcome, TimerController, TICK_INTERVAL};
pub use scheduler::{Clock, EventQueue, Scheduler, SystemClock, VirtualClock};

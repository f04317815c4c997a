//! Timer scheduler
//!
//! Holds fire-and-forget timers and hands back the ones that are due. Time
//! comes from a [`Clock`] so tests can step it by hand instead of sleeping.

use slotmap::{new_key_type, SlotMap};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

new_key_type! {
    pub struct TimerId;
}

/// Source of monotonic milliseconds
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Hand-stepped clock. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

struct Timer<T> {
    deadline: u64,
    seq: u64,
    task: T,
}

/// Deadline queue of pending tasks
pub struct TimerScheduler<T> {
    timers: SlotMap<TimerId, Timer<T>>,
    clock: Box<dyn Clock>,
    next_seq: u64,
}

impl<T> TimerScheduler<T> {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            timers: SlotMap::with_key(),
            clock,
            next_seq: 0,
        }
    }

    pub fn now(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Queue `task` to become due `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: u64, task: T) -> TimerId {
        let deadline = self.now() + delay_ms;
        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::trace!(deadline, seq, "timer scheduled");
        self.timers.insert(Timer {
            deadline,
            seq,
            task,
        })
    }

    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.timers.remove(id).map(|timer| timer.task)
    }

    /// Remove and return every task whose deadline has passed, in deadline order
    pub fn take_due(&mut self) -> Vec<T> {
        let now = self.now();
        let mut due: Vec<(TimerId, u64, u64)> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= now)
            .map(|(id, timer)| (id, timer.deadline, timer.seq))
            .collect();
        due.sort_unstable_by_key(|&(_, deadline, seq)| (deadline, seq));
        due.into_iter()
            .filter_map(|(id, _, _)| self.timers.remove(id))
            .map(|timer| timer.task)
            .collect()
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.values().map(|timer| timer.deadline).min()
    }

    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }
}

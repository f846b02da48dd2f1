//! Virtual-clock timer queue with cancellable handles.
//!
//! The page never sleeps. The host reports the current time and the
//! scheduler releases every task whose deadline has passed, in deadline
//! order, advancing its clock to each deadline as it goes. Tasks scheduled
//! while draining are released in the same pass if they fall due before the
//! target time.
//!
//! Every scheduled task returns a [`TimerHandle`]. Cancelling a handle
//! removes the task outright; a cancelled task never fires.

use std::collections::{BTreeMap, HashMap};

/// Handle to a scheduled task, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Deadline-ordered queue of deferred tasks.
///
/// Ties are released in scheduling order.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_seq: u64,
    queue: BTreeMap<(u64, u64), T>,
    deadlines: HashMap<u64, u64>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.now_ms
    }

    /// Number of tasks still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deadline of the earliest waiting task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Schedules `task` to fire `delay_ms` after the current time.
    pub fn schedule(&mut self, delay_ms: u64, task: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        let due = self.now_ms.saturating_add(delay_ms);
        self.queue.insert((due, seq), task);
        self.deadlines.insert(seq, due);
        TimerHandle(seq)
    }

    /// Cancels a task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.deadlines
            .remove(&handle.0)
            .and_then(|due| self.queue.remove(&(due, handle.0)))
            .is_some()
    }

    /// Whether the task behind `handle` is still waiting.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    /// Releases the earliest task due at or before `until`.
    ///
    /// The clock moves to the task's deadline, never backwards.
    pub fn pop_due(&mut self, until: u64) -> Option<T> {
        let (&(due, seq), _) = self.queue.iter().next()?;
        if due > until {
            return None;
        }
        self.deadlines.remove(&seq);
        self.now_ms = self.now_ms.max(due);
        self.queue.remove(&(due, seq))
    }

    /// Moves the clock forward to `now_ms` without releasing anything.
    ///
    /// Call after draining with [`Scheduler::pop_due`].
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(s: &mut Scheduler<&'static str>, until: u64) -> Vec<&'static str> {
        let mut fired = vec![];
        while let Some(task) = s.pop_due(until) {
            fired.push(task);
        }
        s.set_now(until);
        fired
    }

    #[test]
    fn releases_in_deadline_order() {
        let mut s = Scheduler::new();
        s.schedule(300, "exit");
        s.schedule(100, "enter");
        s.schedule(5000, "expire");

        assert_eq!(drain(&mut s, 299), vec!["enter"]);
        assert_eq!(s.now(), 299);
        assert_eq!(drain(&mut s, 5000), vec!["exit", "expire"]);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn ties_keep_scheduling_order() {
        let mut s = Scheduler::new();
        s.schedule(10, "a");
        s.schedule(10, "b");
        assert_eq!(drain(&mut s, 10), vec!["a", "b"]);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut s = Scheduler::new();
        let handle = s.schedule(100, "gone");
        s.schedule(200, "kept");

        assert!(s.cancel(handle));
        assert!(!s.cancel(handle));
        assert!(!s.is_pending(handle));
        assert_eq!(drain(&mut s, 1000), vec!["kept"]);
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let mut s = Scheduler::new();
        let handle = s.schedule(5, "x");
        assert_eq!(drain(&mut s, 5), vec!["x"]);
        assert!(!s.cancel(handle));
    }

    #[test]
    fn delays_are_relative_to_clock() {
        let mut s = Scheduler::new();
        s.set_now(1_000);
        s.schedule(500, "later");
        assert_eq!(s.next_deadline(), Some(1_500));
        assert!(drain(&mut s, 1_499).is_empty());
        assert_eq!(drain(&mut s, 1_500), vec!["later"]);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut s: Scheduler<()> = Scheduler::new();
        s.set_now(50);
        s.set_now(10);
        assert_eq!(s.now(), 50);
    }
}

//! Simulated clock and transition scheduler.
//!
//! All demo transitions are synchronous except timed phases, which are
//! queued here and fired by [`Scheduler::advance`]. There is no wall-clock
//! timer anywhere: the host drives the clock (per frame or per test step),
//! so delayed phases are exactly reproducible.
//!
//! # Stale tasks
//!
//! A queued task may outlive the state it targets (the user reset the demo,
//! or selected a different operation, before the deadline). The scheduler
//! itself only orders and fires tasks; staleness is decided by the payload's
//! generation token at delivery time, so cancellation needs no bookkeeping
//! here beyond dropping the fired task.

/// Simulated time, in milliseconds.
pub type Millis = u64;

/// Generation counter used to invalidate stale scheduled tasks. Bumped by
/// the owning state machine on reset or teardown.
pub type Generation = u64;

struct Entry<T> {
    due: Millis,
    /// Insertion sequence, to keep same-deadline tasks FIFO.
    seq: u64,
    task: T,
}

/// Ordered task queue over a simulated millisecond clock.
pub struct Scheduler<T> {
    now: Millis,
    next_seq: u64,
    tasks: Vec<Entry<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            tasks: Vec::new(),
        }
    }

    /// Current simulated time.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Number of tasks not yet fired.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Queue `task` to fire `delay` milliseconds from now.
    pub fn schedule(&mut self, delay: Millis, task: T) {
        let entry = Entry {
            due: self.now + delay,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.tasks.push(entry);
    }

    /// Advance the clock by `dt` and return every task whose deadline has
    /// been reached, in deadline order (FIFO among equal deadlines).
    pub fn advance(&mut self, dt: Millis) -> Vec<T> {
        self.now += dt;
        let now = self.now;
        let mut due: Vec<Entry<T>> = Vec::new();
        let mut remaining: Vec<Entry<T>> = Vec::new();
        for entry in self.tasks.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.tasks = remaining;
        due.sort_by_key(|e| (e.due, e.seq));
        due.into_iter().map(|e| e.task).collect()
    }

    /// Drop every queued task without firing it.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

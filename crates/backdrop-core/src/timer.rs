//! Virtual timers for time-driven sequences.
//!
//! Sequencers own a [`TimerQueue`] instead of registering host callbacks, and
//! the host advances it with the current elapsed time. Clearing a timer is
//! the cancellation handle: once cleared (or the queue is dropped) it can
//! never fire again.

use std::fmt;
use std::time::Duration;

/// Handle returned when arming a timer; pass it to [`TimerQueue::clear`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug)]
struct Timer {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
    next_id: u64,
    now: Duration,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time of the last fired timer or settled advance.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.arm(delay, None)
    }

    /// Fires every `period` until cleared. A zero period is raised to 1 ms so
    /// a single advance cannot spin forever.
    pub fn set_interval(&mut self, period: Duration) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.arm(period, Some(period))
    }

    fn arm(&mut self, delay: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due: self.now.saturating_add(delay),
            period,
        });
        id
    }

    /// Returns whether the timer was still pending.
    pub fn clear(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn clear_all(&mut self) {
        self.timers.clear();
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending deadline; ties go to the timer armed first.
    pub fn next_due(&self) -> Option<(TimerId, Duration)> {
        self.timers
            .iter()
            .min_by_key(|t| (t.due, t.id))
            .map(|t| (t.id, t.due))
    }

    /// Fire the earliest timer due at or before `until`, moving `now` to its
    /// deadline. Intervals are re-armed one period later; timeouts are removed.
    ///
    /// Call repeatedly until it returns `None`, handling each id in between,
    /// then [`settle`](Self::settle) at `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let (idx, _) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))?;
        let timer = self.timers[idx];
        self.now = self.now.max(timer.due);
        match timer.period {
            Some(period) => self.timers[idx].due = timer.due.saturating_add(period),
            None => {
                self.timers.swap_remove(idx);
            }
        }
        Some(timer.id)
    }

    /// Move `now` forward after all due timers have been handled. Time never
    /// runs backwards.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

/// Host callback that may run at most once.
#[derive(Default)]
pub struct CompletionHook(Option<Box<dyn FnOnce()>>);

impl CompletionHook {
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(callback)))
    }

    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }

    /// Run the callback if it has not run yet. Returns whether it ran.
    pub fn fire(&mut self) -> bool {
        match self.0.take() {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }

    /// Drop the callback without running it.
    pub fn disarm(&mut self) {
        self.0 = None;
    }
}

impl fmt::Debug for CompletionHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompletionHook")
            .field(&if self.is_armed() { "armed" } else { "spent" })
            .finish()
    }
}

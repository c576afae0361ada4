//! Interval timers
//!
//! `setInterval` for the page script. Timers never fire on their own: the
//! host calls [`Timers::run_due`] from its loop, and the clock is a type
//! parameter so tests can step virtual time instead of sleeping.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Timer handle
pub type TimerId = u32;

/// Returned by a timer task after each run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerControl {
    /// Keep the interval running
    Continue,
    /// Cancel the interval (`clearInterval` from inside the callback)
    Stop,
}

/// Source of "now" for the timer queue
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

/// Wall clock
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock advanced by hand; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Task run on every interval tick
pub type TimerTask<V> = Box<dyn FnMut(&mut V) -> TimerControl>;

struct Timer<V> {
    id: TimerId,
    interval: Duration,
    due: Duration,
    task: TimerTask<V>,
}

/// Interval timer queue over a view type `V`
pub struct Timers<V, C = MonotonicClock> {
    clock: C,
    timers: Vec<Timer<V>>,
    next_id: TimerId,
}

impl<V, C: Clock> Timers<V, C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            timers: Vec::new(),
            next_id: 1,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Schedule `task` every `interval` (at least 1 ms), first run one
    /// interval from now
    pub fn set_interval<F>(&mut self, interval: Duration, task: F) -> TimerId
    where
        F: FnMut(&mut V) -> TimerControl + 'static,
    {
        let interval = interval.max(Duration::from_millis(1));
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            interval,
            due: self.clock.now() + interval,
            task: Box::new(task),
        });
        id
    }

    /// Cancel a timer; returns false if it was not pending
    pub fn clear(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Check if there are pending timers
    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Get time until next timer fires
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.timers
            .iter()
            .map(|t| t.due.saturating_sub(now))
            .min()
    }

    /// Run every tick whose deadline has passed, earliest first.
    ///
    /// A timer that fell several intervals behind runs once per missed
    /// interval. Returns the number of task runs.
    pub fn run_due(&mut self, view: &mut V) -> usize {
        let now = self.clock.now();
        let mut runs = 0;

        while let Some(idx) = self.next_due(now) {
            let timer = &mut self.timers[idx];
            let control = (timer.task)(view);
            runs += 1;
            match control {
                TimerControl::Continue => timer.due += timer.interval,
                TimerControl::Stop => {
                    let id = self.timers.remove(idx).id;
                    tracing::trace!(timer = id, "interval stopped");
                }
            }
        }
        runs
    }

    fn next_due(&self, now: Duration) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(idx, _)| idx)
    }
}

impl<V> Timers<V, ManualClock> {
    /// Advance virtual time and run whatever became due
    pub fn advance(&mut self, view: &mut V, by: Duration) -> usize {
        self.clock.advance(by);
        self.run_due(view)
    }

    /// Step virtual time from deadline to deadline until no timer is left
    /// or `max_runs` task runs happened. Returns the number of runs.
    pub fn run_until_idle(&mut self, view: &mut V, max_runs: usize) -> usize {
        let mut runs = 0;
        while runs < max_runs {
            let Some(wait) = self.time_until_next() else {
                break;
            };
            self.clock.advance(wait);
            runs += self.run_due(view);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual() -> Timers<Vec<u32>, ManualClock> {
        Timers::new(ManualClock::new())
    }

    #[test]
    fn test_set_and_clear() {
        let mut timers = manual();
        let id1 = timers.set_interval(Duration::from_millis(100), |_| TimerControl::Continue);
        let id2 = timers.set_interval(Duration::from_millis(200), |_| TimerControl::Continue);
        assert!(timers.has_pending());

        assert!(timers.clear(id1));
        assert!(!timers.clear(id1));
        assert!(timers.has_pending()); // Still has id2

        timers.clear(id2);
        assert!(!timers.has_pending());
    }

    #[test]
    fn test_interval_fires_each_period() {
        let mut timers = manual();
        let mut log = Vec::new();
        timers.set_interval(Duration::from_millis(30), |log: &mut Vec<u32>| {
            log.push(1);
            TimerControl::Continue
        });

        assert_eq!(timers.advance(&mut log, Duration::from_millis(29)), 0);
        assert_eq!(timers.advance(&mut log, Duration::from_millis(1)), 1);
        assert_eq!(timers.advance(&mut log, Duration::from_millis(90)), 3);
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn test_stop_cancels_interval() {
        let mut timers = manual();
        let mut log = Vec::new();
        let mut remaining = 3;
        timers.set_interval(Duration::from_millis(10), move |log: &mut Vec<u32>| {
            log.push(remaining);
            remaining -= 1;
            if remaining == 0 { TimerControl::Stop } else { TimerControl::Continue }
        });

        let runs = timers.run_until_idle(&mut log, 100);
        assert_eq!(runs, 3);
        assert_eq!(log, vec![3, 2, 1]);
        assert!(!timers.has_pending());
        assert_eq!(timers.clock().now(), Duration::from_millis(30));
    }

    #[test]
    fn test_runs_in_deadline_order() {
        let mut timers = manual();
        let mut log = Vec::new();
        timers.set_interval(Duration::from_millis(20), |log: &mut Vec<u32>| {
            log.push(20);
            TimerControl::Continue
        });
        timers.set_interval(Duration::from_millis(15), |log: &mut Vec<u32>| {
            log.push(15);
            TimerControl::Continue
        });

        timers.advance(&mut log, Duration::from_millis(40));
        assert_eq!(log, vec![15, 20, 15, 20]);
    }

    #[test]
    fn test_time_until_next() {
        let mut timers = manual();
        assert_eq!(timers.time_until_next(), None);
        timers.set_interval(Duration::from_millis(30), |_| TimerControl::Continue);
        timers.clock().advance(Duration::from_millis(12));
        assert_eq!(timers.time_until_next(), Some(Duration::from_millis(18)));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut timers = manual();
        let mut log = Vec::new();
        timers.set_interval(Duration::ZERO, |log: &mut Vec<u32>| {
            log.push(0);
            TimerControl::Stop
        });
        assert_eq!(timers.run_due(&mut log), 0);
        assert_eq!(timers.advance(&mut log, Duration::from_millis(1)), 1);
    }
}

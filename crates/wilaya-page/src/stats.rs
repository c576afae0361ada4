//! Stat counters
//!
//! Every stat display counts up from zero to its target over a fixed
//! number of ticks, whatever the magnitude of the target.

use crate::format::{format_grouped, parse_int_prefix};
use crate::timers::{Clock, TimerControl, Timers};
use crate::{DocumentView, PageConfig};
use tracing::{debug, trace};
use wilaya_dom::NodeId;

/// Outcome of one counter tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTick {
    /// Value to display while still counting
    Progress(i64),
    /// Final value; the counter is finished
    Done(i64),
}

impl StatTick {
    pub fn value(self) -> i64 {
        match self {
            Self::Progress(v) | Self::Done(v) => v,
        }
    }
}

/// Running state of one counter
#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    current: f64,
    target: i64,
    increment: f64,
}

impl StatCounter {
    /// Counter reaching `target` in about `steps` ticks
    pub fn new(target: i64, steps: u32) -> Self {
        Self {
            current: 0.0,
            target,
            increment: target as f64 / f64::from(steps.max(1)),
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Add one increment. Reaching or passing the target yields the exact
    /// target; anything before that yields the floor of the running value.
    pub fn tick(&mut self) -> StatTick {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            StatTick::Done(self.target)
        } else {
            StatTick::Progress(self.current.floor() as i64)
        }
    }
}

/// Target of a stat display: the target attribute when set and non-empty,
/// otherwise the element's own text
pub fn read_target<V: DocumentView>(view: &V, node: NodeId, config: &PageConfig) -> Option<i64> {
    let raw = view
        .get_attribute(node, &config.stat_target_attr)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| view.text_content(node));
    parse_int_prefix(&raw)
}

/// Start one counter per stat display; returns the number started.
///
/// Displays without a numeric target keep their text.
pub fn animate_stats<V, C>(view: &mut V, timers: &mut Timers<V, C>, config: &PageConfig) -> usize
where
    V: DocumentView,
    C: Clock,
{
    let mut started = 0;
    for node in view.elements_by_class_name(&config.stat_class) {
        let Some(target) = read_target(view, node, config) else {
            debug!(%node, "stat display has no numeric target; left static");
            continue;
        };

        let mut counter = StatCounter::new(target, config.animation_steps);
        timers.set_interval(config.tick_interval(), move |view: &mut V| {
            let tick = counter.tick();
            let text = format_grouped(tick.value());
            if let Err(err) = view.set_text_content(node, &text) {
                debug!(%node, %err, "stat display went away; stopping counter");
                return TimerControl::Stop;
            }
            match tick {
                StatTick::Progress(_) => TimerControl::Continue,
                StatTick::Done(value) => {
                    trace!(%node, value, "stat counter finished");
                    TimerControl::Stop
                }
            }
        });
        started += 1;
    }
    started
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(counter: &mut StatCounter) -> Vec<StatTick> {
        let mut ticks = Vec::new();
        loop {
            let tick = counter.tick();
            ticks.push(tick);
            if matches!(tick, StatTick::Done(_)) {
                return ticks;
            }
            assert!(ticks.len() < 1000, "counter never finished");
        }
    }

    #[test]
    fn test_counter_reaches_exact_target() {
        let mut counter = StatCounter::new(1000, 50);
        let ticks = run(&mut counter);

        assert_eq!(ticks.last(), Some(&StatTick::Done(1000)));
        let progress: Vec<i64> = ticks[..ticks.len() - 1].iter().map(|t| t.value()).collect();
        assert!(progress.windows(2).all(|w| w[0] <= w[1]));
        assert!(progress.iter().all(|&v| v < 1000));
        assert!((49..=51).contains(&ticks.len()));
    }

    #[test]
    fn test_small_target_floors() {
        let mut counter = StatCounter::new(5, 50);
        let first = counter.tick();
        assert_eq!(first, StatTick::Progress(0));
        assert!(counter.current() > 0.0);
        assert_eq!(run(&mut counter).last(), Some(&StatTick::Done(5)));
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut counter = StatCounter::new(0, 50);
        assert_eq!(counter.tick(), StatTick::Done(0));
    }

    #[test]
    fn test_negative_target_finishes_on_first_tick() {
        let mut counter = StatCounter::new(-300, 50);
        assert_eq!(counter.tick(), StatTick::Done(-300));
    }

    #[test]
    fn test_tick_count_independent_of_magnitude() {
        let small = run(&mut StatCounter::new(69, 50)).len();
        let large = run(&mut StatCounter::new(2_500_000, 50)).len();
        assert!(small.abs_diff(large) <= 1);
    }
}

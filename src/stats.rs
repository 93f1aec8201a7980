// ABOUTME: Statistics module for the exchange-site library
// ABOUTME: Counts the figures in the statistics strip up from zero to their targets

use crate::content::Statistic;
use crate::timeline::{TimerHandle, Timeline};
use crate::utils::format_arabic_number;
use log::debug;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterConfig {
    /// Time for a counter to go from zero to its target
    pub duration: Duration,
    /// Interval between displayed updates
    pub frame: Duration,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            frame: Duration::from_millis(16),
        }
    }
}

/// A single animated figure.
///
/// Each frame adds `target * frame / duration` to the shown value, which is
/// floored for display and clamped to `target` on the frame that reaches it.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    pub label: String,
    pub target: u64,
    frames: u64,
    finished: bool,
    handle: Option<TimerHandle>,
}

impl StatCounter {
    fn new(statistic: Statistic) -> Self {
        Self {
            label: statistic.label,
            target: statistic.target,
            frames: 0,
            finished: false,
            handle: None,
        }
    }

    fn value_after(&self, frames: u64, config: &CounterConfig) -> u64 {
        let elapsed = frames as u128 * config.frame.as_millis().max(1);
        let duration = config.duration.as_millis();
        if duration == 0 || elapsed >= duration {
            return self.target;
        }
        (self.target as u128 * elapsed / duration) as u64
    }

    /// Value currently displayed
    pub fn value(&self, config: &CounterConfig) -> u64 {
        if self.finished {
            self.target
        } else {
            self.value_after(self.frames, config)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// All counters on the page, each driven by its own frame timer
#[derive(Debug)]
pub struct StatCounters {
    config: CounterConfig,
    counters: Vec<StatCounter>,
    timeline: Timeline<usize>,
}

impl StatCounters {
    pub fn new(statistics: Vec<Statistic>, config: CounterConfig) -> Self {
        Self {
            config,
            counters: statistics.into_iter().map(StatCounter::new).collect(),
            timeline: Timeline::new(),
        }
    }

    /// Start every counter that has not started yet; a counter only ever animates once
    pub fn start(&mut self) {
        for (i, counter) in self.counters.iter_mut().enumerate() {
            if counter.handle.is_none() && !counter.finished {
                counter.handle = Some(self.timeline.schedule_every(self.config.frame, i));
            }
        }
    }

    /// Let `elapsed` of simulated time pass, stepping each running counter once per frame
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.timeline.now() + elapsed;
        while let Some((handle, i)) = self.timeline.pop_due(until) {
            let Some(counter) = self.counters.get_mut(i) else {
                self.timeline.cancel(handle);
                continue;
            };
            counter.frames += 1;
            if counter.value_after(counter.frames, &self.config) >= counter.target {
                counter.finished = true;
                counter.handle = None;
                self.timeline.cancel(handle);
                debug!("Counter '{}' reached {}", counter.label, counter.target);
            }
        }
        self.timeline.settle(until);
    }

    pub fn counters(&self) -> &[StatCounter] {
        &self.counters
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Displayed values, formatted for the page
    pub fn display_values(&self) -> Vec<String> {
        self.counters
            .iter()
            .map(|counter| format_arabic_number(counter.value(&self.config)))
            .collect()
    }

    pub fn is_animating(&self) -> bool {
        self.counters.iter().any(|counter| counter.handle.is_some())
    }

    pub fn now(&self) -> Duration {
        self.timeline.now()
    }
}

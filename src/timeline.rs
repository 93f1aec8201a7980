// ABOUTME: Timeline module for the exchange-site library
// ABOUTME: Provides cancellable one-shot and repeating timers on a simulated clock

use log::trace;
use std::time::Duration;

/// Handle returned when a task is scheduled; used to cancel it later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    handle: TimerHandle,
    deadline: Duration,
    // Arm order, used to break deadline ties
    seq: u64,
    period: Option<Duration>,
    task: T,
}

/// A set of scheduled tasks driven by explicit calls instead of the wall clock.
///
/// Time only moves when the owner pops due tasks or settles the clock, so
/// callers can replay any sequence of timer firings deterministically. Tasks
/// are popped one at a time in deadline order, which lets the owner mutate the
/// timeline (schedule or cancel) between firings.
#[derive(Debug)]
pub struct Timeline<T> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            entries: Vec::new(),
        }
    }
}

impl<T: Clone> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time since the timeline was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a task to fire once after `delay`
    pub fn schedule_once(&mut self, delay: Duration, task: T) -> TimerHandle {
        self.insert(delay, None, task)
    }

    /// Schedule a task to fire every `period`, starting one period from now
    pub fn schedule_every(&mut self, period: Duration, task: T) -> TimerHandle {
        let period = period.max(Duration::from_millis(1));
        self.insert(period, Some(period), task)
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.entries.push(Entry {
            handle,
            deadline: self.now + delay,
            seq,
            period,
            task,
        });
        trace!("Scheduled timer {:?} at {:?}", handle, self.now + delay);
        handle
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Cancel a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        let removed = self.entries.len() != before;
        if removed {
            trace!("Cancelled timer {:?}", handle);
        }
        removed
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    /// Number of tasks still scheduled
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Deadline of the earliest scheduled task
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Pop the earliest task due at or before `until`, moving the clock to its deadline.
    ///
    /// Repeating tasks are re-armed one period after the deadline they fired at.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, T)> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= until)
            .min_by_key(|(_, entry)| (entry.deadline, entry.seq))
            .map(|(i, _)| i)?;

        let deadline = self.entries[position].deadline;
        if deadline > self.now {
            self.now = deadline;
        }

        match self.entries[position].period {
            Some(period) => {
                let seq = self.bump_seq();
                let entry = &mut self.entries[position];
                entry.deadline = deadline + period;
                entry.seq = seq;
                Some((entry.handle, entry.task.clone()))
            }
            None => {
                let entry = self.entries.remove(position);
                Some((entry.handle, entry.task))
            }
        }
    }

    /// Move the clock forward to `until` once every due task has been popped
    pub fn settle(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }
}

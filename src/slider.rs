// ABOUTME: Hero slider module for the exchange-site library
// ABOUTME: Cycles slides on a timer with click, hover and cooldown based pausing

use crate::errors::{Result, SiteError};
use crate::timeline::{TimerHandle, Timeline};
use log::{debug, info, warn};
use std::fmt;
use std::time::Duration;

/// Timing settings for the slide coordinator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub advance_interval: Duration,
    pub pause_cooldown: Duration,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            advance_interval: Duration::from_millis(5000),
            pause_cooldown: Duration::from_millis(10000),
        }
    }
}

/// A slide or indicator handle. The coordinator only ever flips `active`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub label: String,
    pub active: bool,
}

impl Panel {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAdvance {
    Running,
    Paused,
}

/// Delivered to subscribers whenever the active slide changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveChange {
    pub previous: Option<usize>,
    pub current: usize,
    pub at: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ActiveHandler = Box<dyn FnMut(&ActiveChange) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SliderTask {
    Advance,
    CooldownExpired,
}

/// Owns the slide index, the auto-advance timer and the pause cooldown.
///
/// All timers live on an internal [`Timeline`], so the host drives time by
/// calling [`SlideCoordinator::advance`]. Callbacks run strictly one after
/// another, which means a `go_to` always lands before any later tick.
pub struct SlideCoordinator {
    config: SliderConfig,
    slides: Vec<Panel>,
    indicators: Vec<Panel>,
    current_index: usize,
    rendered_index: Option<usize>,
    auto_advance: AutoAdvance,
    timeline: Timeline<SliderTask>,
    timer_handle: Option<TimerHandle>,
    pause_cooldown_handle: Option<TimerHandle>,
    subscribers: Vec<(SubscriptionId, ActiveHandler)>,
    next_subscription: u64,
}

impl fmt::Debug for SlideCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideCoordinator")
            .field("slides", &self.slides.len())
            .field("indicators", &self.indicators.len())
            .field("current_index", &self.current_index)
            .field("auto_advance", &self.auto_advance)
            .field("timer_handle", &self.timer_handle)
            .field("pause_cooldown_handle", &self.pause_cooldown_handle)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl SlideCoordinator {
    /// Build a coordinator over the given slides and optional indicators.
    ///
    /// Indicators may be empty; otherwise they must pair 1:1 with the slides.
    /// With no slides the coordinator is inert: it never starts a timer and
    /// rejects every `go_to`.
    pub fn initialize(
        slides: Vec<Panel>,
        indicators: Vec<Panel>,
        config: SliderConfig,
    ) -> Result<Self> {
        if !indicators.is_empty() && indicators.len() != slides.len() {
            warn!(
                "Refusing slider with {} slides and {} indicators",
                slides.len(),
                indicators.len()
            );
            return Err(SiteError::ConfigurationError {
                slides: slides.len(),
                indicators: indicators.len(),
            });
        }

        let mut coordinator = Self {
            config,
            slides,
            indicators,
            current_index: 0,
            rendered_index: None,
            auto_advance: AutoAdvance::Running,
            timeline: Timeline::new(),
            timer_handle: None,
            pause_cooldown_handle: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        coordinator.render();

        info!(
            "Slider initialized with {} slides and {} indicators",
            coordinator.slides.len(),
            coordinator.indicators.len()
        );
        Ok(coordinator)
    }

    /// Start the repeating advance timer. Restarting replaces the old timer.
    pub fn start(&mut self) {
        if self.slides.is_empty() {
            debug!("Slider has no slides, auto-advance not started");
            return;
        }
        if let Some(handle) = self.timer_handle.take() {
            self.timeline.cancel(handle);
        }
        self.timer_handle = Some(
            self.timeline
                .schedule_every(self.config.advance_interval, SliderTask::Advance),
        );
        debug!(
            "Auto-advance started every {:?}",
            self.config.advance_interval
        );
    }

    /// Jump to a slide on explicit request, then pause with cooldown
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.slides.len() {
            return Err(SiteError::IndexOutOfRangeError {
                index,
                len: self.slides.len(),
            });
        }
        self.current_index = index;
        self.render();
        self.pause();
        Ok(())
    }

    /// Pause auto-advance and (re)start the cooldown; the last pause wins
    pub fn pause(&mut self) {
        self.auto_advance = AutoAdvance::Paused;
        self.cancel_cooldown();
        self.pause_cooldown_handle = Some(
            self.timeline
                .schedule_once(self.config.pause_cooldown, SliderTask::CooldownExpired),
        );
        debug!("Auto-advance paused for {:?}", self.config.pause_cooldown);
    }

    /// Resume auto-advance now, dropping any pending cooldown
    pub fn resume_immediate(&mut self) {
        self.cancel_cooldown();
        self.auto_advance = AutoAdvance::Running;
        debug!("Auto-advance resumed");
    }

    /// Pause with no cooldown; stays paused until resumed or a new `go_to`
    pub fn suspend_immediate(&mut self) {
        self.cancel_cooldown();
        self.auto_advance = AutoAdvance::Paused;
        debug!("Auto-advance suspended");
    }

    fn cancel_cooldown(&mut self) {
        if let Some(handle) = self.pause_cooldown_handle.take() {
            self.timeline.cancel(handle);
        }
    }

    /// Mark exactly the slide and indicator at the current index as active
    pub fn render(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        let current = self.current_index;
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.active = i == current;
        }
        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            indicator.active = i == current;
        }

        if self.rendered_index != Some(current) {
            let change = ActiveChange {
                previous: self.rendered_index,
                current,
                at: self.timeline.now(),
            };
            self.rendered_index = Some(current);
            for (_, handler) in self.subscribers.iter_mut() {
                handler(&change);
            }
        }
    }

    /// Register a handler called on every change of the active slide
    pub fn on_active_changed<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&ActiveChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Let `elapsed` of simulated time pass, firing due timers in order
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.timeline.now() + elapsed;
        while let Some((handle, task)) = self.timeline.pop_due(until) {
            match task {
                SliderTask::Advance => self.tick(),
                SliderTask::CooldownExpired => {
                    if self.pause_cooldown_handle == Some(handle) {
                        self.pause_cooldown_handle = None;
                        self.auto_advance = AutoAdvance::Running;
                        debug!("Cooldown expired, auto-advance resumed");
                    }
                }
            }
        }
        self.timeline.settle(until);
    }

    fn tick(&mut self) {
        if self.auto_advance != AutoAdvance::Running || self.slides.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.slides.len();
        self.render();
    }

    /// Cancel both timers; nothing fires afterwards until `start` is called again
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.timer_handle.take() {
            self.timeline.cancel(handle);
        }
        self.cancel_cooldown();
        debug!("Slider timers released");
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        self.auto_advance
    }

    pub fn is_running(&self) -> bool {
        self.auto_advance == AutoAdvance::Running
    }

    pub fn is_started(&self) -> bool {
        self.timer_handle.is_some()
    }

    pub fn has_pending_cooldown(&self) -> bool {
        self.pause_cooldown_handle.is_some()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Panel] {
        &self.slides
    }

    pub fn indicators(&self) -> &[Panel] {
        &self.indicators
    }

    /// Simulated time elapsed since initialization
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Time left until the next scheduled timer, if any
    pub fn time_to_next_timer(&self) -> Option<Duration> {
        self.timeline
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(self.timeline.now()))
    }
}

impl Drop for SlideCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn panels(prefix: &str, count: usize) -> Vec<Panel> {
        (0..count)
            .map(|i| Panel::new(format!("{}-{}", prefix, i)))
            .collect()
    }

    fn active_count(panels: &[Panel]) -> usize {
        panels.iter().filter(|p| p.active).count()
    }

    #[test]
    fn test_initial_render_marks_first_slide() {
        let slider =
            SlideCoordinator::initialize(panels("slide", 3), panels("dot", 3), SliderConfig::default())
                .unwrap();
        assert!(slider.slides()[0].active);
        assert!(slider.indicators()[0].active);
        assert_eq!(active_count(slider.slides()), 1);
        assert_eq!(active_count(slider.indicators()), 1);
    }

    #[test]
    fn test_ticks_ignored_while_suspended() {
        let mut slider =
            SlideCoordinator::initialize(panels("slide", 3), Vec::new(), SliderConfig::default())
                .unwrap();
        slider.start();
        slider.suspend_immediate();
        slider.advance(Duration::from_millis(60_000));

        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.auto_advance(), AutoAdvance::Paused);
        assert!(!slider.has_pending_cooldown());
    }

    #[test]
    fn test_restart_does_not_double_the_interval() {
        let mut slider =
            SlideCoordinator::initialize(panels("slide", 5), Vec::new(), SliderConfig::default())
                .unwrap();
        slider.start();
        slider.start();
        slider.advance(Duration::from_millis(5000));
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn test_shutdown_stops_all_callbacks() {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = changes.clone();

        let mut slider =
            SlideCoordinator::initialize(panels("slide", 3), Vec::new(), SliderConfig::default())
                .unwrap();
        slider.on_active_changed(move |change| sink.lock().unwrap().push(change.current));
        slider.start();
        slider.pause();
        slider.shutdown();
        slider.advance(Duration::from_millis(60_000));

        assert!(changes.lock().unwrap().is_empty());
        assert!(!slider.is_started());
        assert!(!slider.has_pending_cooldown());
        // The cooldown was cancelled, so the pause is never lifted
        assert_eq!(slider.auto_advance(), AutoAdvance::Paused);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Arc::new(Mutex::new(0));
        let sink = count.clone();

        let mut slider =
            SlideCoordinator::initialize(panels("slide", 2), Vec::new(), SliderConfig::default())
                .unwrap();
        let id = slider.on_active_changed(move |_| *sink.lock().unwrap() += 1);
        slider.go_to(1).unwrap();
        assert!(slider.unsubscribe(id));
        slider.go_to(0).unwrap();

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(!slider.unsubscribe(id));
    }
}

use exchange_site::{
    ActiveChange, AutoAdvance, Panel, SiteError, SlideCoordinator, SliderConfig,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn panels(prefix: &str, count: usize) -> Vec<Panel> {
    (0..count)
        .map(|i| Panel::new(format!("{}-{}", prefix, i)))
        .collect()
}

fn slider(slides: usize, indicators: usize) -> SlideCoordinator {
    SlideCoordinator::initialize(
        panels("slide", slides),
        panels("dot", indicators),
        SliderConfig::default(),
    )
    .expect("Failed to initialize slider")
}

fn record_changes(slider: &mut SlideCoordinator) -> Arc<Mutex<Vec<ActiveChange>>> {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    slider.on_active_changed(move |change| sink.lock().unwrap().push(*change));
    changes
}

fn assert_single_active(slider: &SlideCoordinator) {
    let active: Vec<usize> = slider
        .slides()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.active)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(active, vec![slider.current_index()]);

    if !slider.indicators().is_empty() {
        let active: Vec<usize> = slider
            .indicators()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![slider.current_index()]);
    }
}

#[test]
fn test_ticks_cycle_modulo_slide_count() {
    for n in 1..=6 {
        let mut slider = slider(n, n);
        slider.start();
        for k in 1..=20u64 {
            slider.advance(ms(5000));
            assert_eq!(slider.current_index(), (k as usize) % n, "n={} k={}", n, k);
            assert_single_active(&slider);
        }
    }
}

#[test]
fn test_four_slides_four_ticks() {
    let mut slider = slider(4, 4);
    let changes = record_changes(&mut slider);
    slider.start();
    slider.advance(ms(20_000));

    let sequence: Vec<usize> = changes.lock().unwrap().iter().map(|c| c.current).collect();
    assert_eq!(sequence, vec![1, 2, 3, 0]);

    let times: Vec<Duration> = changes.lock().unwrap().iter().map(|c| c.at).collect();
    assert_eq!(times, vec![ms(5000), ms(10_000), ms(15_000), ms(20_000)]);
}

#[test]
fn test_no_advance_before_interval() {
    let mut slider = slider(3, 0);
    slider.start();
    slider.advance(ms(4999));
    assert_eq!(slider.current_index(), 0);
    slider.advance(ms(1));
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn test_go_to_sets_index_and_pauses() {
    let mut slider = slider(4, 4);
    slider.start();
    slider.advance(ms(1000));

    slider.go_to(2).unwrap();
    assert_eq!(slider.current_index(), 2);
    assert_eq!(slider.auto_advance(), AutoAdvance::Paused);
    assert!(slider.has_pending_cooldown());
    assert_single_active(&slider);
}

#[test]
fn test_go_to_out_of_range_changes_nothing() {
    let mut slider = slider(4, 4);
    let changes = record_changes(&mut slider);
    slider.start();
    slider.advance(ms(5000));

    let result = slider.go_to(4);
    assert!(matches!(
        result,
        Err(SiteError::IndexOutOfRangeError { index: 4, len: 4 })
    ));
    assert_eq!(slider.current_index(), 1);
    assert_eq!(slider.auto_advance(), AutoAdvance::Running);
    assert!(!slider.has_pending_cooldown());
    assert_eq!(changes.lock().unwrap().len(), 1);
}

#[test]
fn test_pause_resumes_after_exactly_cooldown() {
    let mut slider = slider(3, 0);
    slider.pause();

    slider.advance(ms(9999));
    assert_eq!(slider.auto_advance(), AutoAdvance::Paused);
    slider.advance(ms(1));
    assert_eq!(slider.auto_advance(), AutoAdvance::Running);
    assert!(!slider.has_pending_cooldown());
}

#[test]
fn test_repeated_pause_restarts_cooldown() {
    let mut slider = slider(3, 0);
    slider.pause();
    slider.advance(ms(6000));
    slider.pause();

    slider.advance(ms(6000));
    assert_eq!(slider.auto_advance(), AutoAdvance::Paused);
    slider.advance(ms(4000));
    assert_eq!(slider.auto_advance(), AutoAdvance::Running);
}

#[test]
fn test_go_to_resume_and_tie_with_tick() {
    let mut slider = slider(4, 4);
    slider.start();
    slider.go_to(2).unwrap();

    // The tick at 5000 is skipped while paused
    slider.advance(ms(5000));
    assert_eq!(slider.current_index(), 2);

    // At 10000 the cooldown was armed before the re-armed tick, so it lifts first
    slider.advance(ms(5000));
    assert_eq!(slider.auto_advance(), AutoAdvance::Running);
    assert_eq!(slider.current_index(), 3);
}

#[test]
fn test_hover_suspends_until_leave() {
    let mut slider = slider(3, 3);
    slider.start();
    slider.go_to(1).unwrap();
    slider.suspend_immediate();
    assert!(!slider.has_pending_cooldown());

    slider.advance(ms(30_000));
    assert_eq!(slider.current_index(), 1);
    assert_eq!(slider.auto_advance(), AutoAdvance::Paused);

    slider.resume_immediate();
    assert_eq!(slider.auto_advance(), AutoAdvance::Running);
    slider.advance(ms(5000));
    assert_eq!(slider.current_index(), 2);
}

#[test]
fn test_resume_cancels_pending_cooldown() {
    let mut slider = slider(3, 0);
    slider.pause();
    slider.resume_immediate();
    assert!(!slider.has_pending_cooldown());

    slider.suspend_immediate();
    slider.advance(ms(20_000));
    assert_eq!(slider.auto_advance(), AutoAdvance::Paused);
}

#[test]
fn test_render_is_idempotent() {
    let mut slider = slider(3, 3);
    let changes = record_changes(&mut slider);
    slider.go_to(2).unwrap();

    let before = (slider.slides().to_vec(), slider.indicators().to_vec());
    slider.render();
    slider.render();
    assert_eq!(before, (slider.slides().to_vec(), slider.indicators().to_vec()));
    assert_eq!(changes.lock().unwrap().len(), 1);
    assert_single_active(&slider);
}

#[test]
fn test_indicator_count_mismatch_is_rejected() {
    let result = SlideCoordinator::initialize(
        panels("slide", 4),
        panels("dot", 3),
        SliderConfig::default(),
    );
    assert!(matches!(
        result,
        Err(SiteError::ConfigurationError {
            slides: 4,
            indicators: 3
        })
    ));
}

#[test]
fn test_indicators_are_optional() {
    let mut slider = slider(4, 0);
    assert!(slider.indicators().is_empty());
    slider.start();
    slider.advance(ms(5000));
    assert_eq!(slider.current_index(), 1);
    assert_single_active(&slider);
}

#[test]
fn test_empty_slider_is_inert() {
    let mut slider = slider(0, 0);
    slider.start();
    assert!(!slider.is_started());
    slider.advance(ms(60_000));
    assert_eq!(slider.current_index(), 0);
    assert!(matches!(
        slider.go_to(0),
        Err(SiteError::IndexOutOfRangeError { index: 0, len: 0 })
    ));
    assert!(SlideCoordinator::initialize(Vec::new(), panels("dot", 2), SliderConfig::default())
        .is_err());
}

#[test]
fn test_custom_timings() {
    let config = SliderConfig {
        advance_interval: ms(1000),
        pause_cooldown: ms(2500),
    };
    let mut slider =
        SlideCoordinator::initialize(panels("slide", 2), Vec::new(), config).unwrap();
    slider.start();
    slider.advance(ms(1000));
    assert_eq!(slider.current_index(), 1);
    assert_eq!(slider.time_to_next_timer(), Some(ms(1000)));

    slider.pause();
    slider.advance(ms(2499));
    assert!(!slider.is_running());
    slider.advance(ms(1));
    assert!(slider.is_running());
}

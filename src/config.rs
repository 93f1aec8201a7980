// ABOUTME: Configuration module for the exchange-site library
// ABOUTME: Provides timing and layout settings with environment variable overrides

use crate::errors::{Result, SiteError};
use crate::navigation::NavConfig;
use crate::slider::SliderConfig;
use crate::stats::CounterConfig;
use std::env;
use std::time::Duration;

/// Global configuration for the site
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub slide_interval_ms: u64,
    pub slide_cooldown_ms: u64,
    pub mobile_breakpoint_px: u32,
    pub sidebar_breakpoint_px: u32,
    pub toast_duration_ms: u64,
    pub contact_latency_ms: u64,
    pub login_latency_ms: u64,
    pub redirect_delay_ms: u64,
    pub stat_animation_ms: u64,
    pub stat_frame_ms: u64,
    pub nav_offset_px: f64,
    pub scrolled_threshold_px: f64,
    pub admin_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            slide_interval_ms: 5000,
            slide_cooldown_ms: 10000,
            mobile_breakpoint_px: 768,
            sidebar_breakpoint_px: 1024,
            toast_duration_ms: 5000,
            contact_latency_ms: 2000,
            login_latency_ms: 1000,
            redirect_delay_ms: 1000,
            stat_animation_ms: 2000,
            stat_frame_ms: 16,
            nav_offset_px: 100.0,
            scrolled_threshold_px: 100.0,
            admin_page: "admin.html".to_string(),
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(default)
}

impl SiteConfig {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            slide_interval_ms: env_u64("SLIDE_INTERVAL_MS", defaults.slide_interval_ms),
            slide_cooldown_ms: env_u64("SLIDE_COOLDOWN_MS", defaults.slide_cooldown_ms),
            mobile_breakpoint_px: env_u32("MOBILE_BREAKPOINT_PX", defaults.mobile_breakpoint_px),
            sidebar_breakpoint_px: defaults.sidebar_breakpoint_px,
            toast_duration_ms: env_u64("TOAST_DURATION_MS", defaults.toast_duration_ms),
            contact_latency_ms: env_u64("CONTACT_LATENCY_MS", defaults.contact_latency_ms),
            login_latency_ms: env_u64("LOGIN_LATENCY_MS", defaults.login_latency_ms),
            redirect_delay_ms: env_u64("REDIRECT_DELAY_MS", defaults.redirect_delay_ms),
            stat_animation_ms: env_u64("STAT_ANIMATION_MS", defaults.stat_animation_ms),
            stat_frame_ms: defaults.stat_frame_ms,
            nav_offset_px: defaults.nav_offset_px,
            scrolled_threshold_px: defaults.scrolled_threshold_px,
            admin_page: env::var("ADMIN_PAGE").unwrap_or(defaults.admin_page),
        }
    }

    /// Reject settings that would make a timer fire continuously
    pub fn validate(&self) -> Result<()> {
        if self.slide_interval_ms == 0 {
            return Err(SiteError::ConfigError(
                "slide interval must be greater than zero".to_string(),
            ));
        }
        if self.toast_duration_ms == 0 {
            return Err(SiteError::ConfigError(
                "toast duration must be greater than zero".to_string(),
            ));
        }
        if self.stat_frame_ms == 0 {
            return Err(SiteError::ConfigError(
                "statistics frame interval must be greater than zero".to_string(),
            ));
        }
        if self.admin_page.trim().is_empty() {
            return Err(SiteError::ConfigError(
                "admin page must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the slider configuration derived from this config
    pub fn get_slider_config(&self) -> SliderConfig {
        SliderConfig {
            advance_interval: Duration::from_millis(self.slide_interval_ms),
            pause_cooldown: Duration::from_millis(self.slide_cooldown_ms),
        }
    }

    /// Get the navigation configuration derived from this config
    pub fn get_nav_config(&self) -> NavConfig {
        NavConfig {
            section_offset: self.nav_offset_px,
            scrolled_threshold: self.scrolled_threshold_px,
            parallax_factor: 0.5,
        }
    }

    /// Get the statistics counter configuration derived from this config
    pub fn get_counter_config(&self) -> CounterConfig {
        CounterConfig {
            duration: Duration::from_millis(self.stat_animation_ms),
            frame: Duration::from_millis(self.stat_frame_ms),
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

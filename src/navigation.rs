// ABOUTME: Navigation module for the exchange-site library
// ABOUTME: Tracks the section under the viewport and the navbar scroll state

use crate::errors::{Result, SiteError};
use log::debug;

/// Layout of one page section, in pixels from the top of the document
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    /// How far above a section's top it already counts as current
    pub section_offset: f64,
    /// Scroll position above which the navbar switches to its compact style
    pub scrolled_threshold: f64,
    pub parallax_factor: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            section_offset: 100.0,
            scrolled_threshold: 100.0,
            parallax_factor: 0.5,
        }
    }
}

/// Result of processing a scroll event
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollUpdate {
    pub active_section: Option<String>,
    pub navbar_scrolled: bool,
    pub parallax_offset: f64,
    /// Whether the active link changed compared to the previous scroll
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct NavigationTracker {
    config: NavConfig,
    sections: Vec<Section>,
    active: Option<String>,
    navbar_scrolled: bool,
    mobile_menu_open: bool,
}

impl NavigationTracker {
    pub fn new(sections: Vec<Section>, config: NavConfig) -> Self {
        Self {
            config,
            sections,
            active: None,
            navbar_scrolled: false,
            mobile_menu_open: false,
        }
    }

    /// Recompute the active link, navbar style and parallax offset for scroll position `y`
    pub fn handle_scroll(&mut self, y: f64) -> ScrollUpdate {
        let current = self.section_at(y).map(|s| s.id.clone());
        let changed = current != self.active;
        if changed {
            debug!("Active section {:?} -> {:?}", self.active, current);
        }
        self.active = current;
        self.navbar_scrolled = y > self.config.scrolled_threshold;

        ScrollUpdate {
            active_section: self.active.clone(),
            navbar_scrolled: self.navbar_scrolled,
            parallax_offset: y * self.config.parallax_factor,
            changed,
        }
    }

    /// Section considered current at scroll position `y`; later sections win ties
    pub fn section_at(&self, y: f64) -> Option<&Section> {
        self.sections
            .iter()
            .filter(|section| {
                let top = section.top - self.config.section_offset;
                y >= top && y < top + section.height
            })
            .last()
    }

    /// Mark a link active after it was clicked
    pub fn select(&mut self, id: &str) -> Result<()> {
        let section = self.find(id)?;
        self.active = Some(section.id.clone());
        Ok(())
    }

    /// Scroll position that puts a section right below a header of `header_height`
    pub fn scroll_target(&self, id: &str, header_height: f64) -> Result<f64> {
        let section = self.find(id)?;
        Ok(section.top - header_height)
    }

    fn find(&self, id: &str) -> Result<&Section> {
        let id = id.trim_start_matches('#');
        self.sections
            .iter()
            .find(|section| section.id == id)
            .ok_or_else(|| SiteError::SectionNotFound(id.to_string()))
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> NavigationTracker {
        NavigationTracker::new(
            vec![
                Section::new("home", 0.0, 600.0),
                Section::new("rates", 600.0, 400.0),
                Section::new("news", 1000.0, 500.0),
            ],
            NavConfig::default(),
        )
    }

    #[test]
    fn test_section_offset_applies_before_top() {
        let mut nav = tracker();
        assert_eq!(nav.handle_scroll(499.0).active_section.as_deref(), Some("home"));
        assert_eq!(nav.handle_scroll(500.0).active_section.as_deref(), Some("rates"));
        assert!(!nav.handle_scroll(500.0).changed);
        assert_eq!(nav.handle_scroll(900.0).active_section.as_deref(), Some("news"));
    }

    #[test]
    fn test_no_section_clears_active_link() {
        let mut nav = tracker();
        nav.handle_scroll(100.0);
        let update = nav.handle_scroll(5000.0);
        assert_eq!(update.active_section, None);
        assert!(update.changed);
    }

    #[test]
    fn test_scroll_target_strips_hash() {
        let nav = tracker();
        assert_eq!(nav.scroll_target("#news", 80.0).unwrap(), 920.0);
        assert!(matches!(
            nav.scroll_target("missing", 80.0),
            Err(SiteError::SectionNotFound(_))
        ));
    }
}

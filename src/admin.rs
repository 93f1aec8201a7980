// ABOUTME: Admin dashboard module for the exchange-site library
// ABOUTME: Tracks the active section, tab, sidebar and modal of the admin panel

use crate::content::{Activity, AdminArticle, AdminUser, DataSource, MediaItem, RateRecord};
use crate::errors::{Result, SiteError};
use crate::notifications::{Notifier, ToastId, ToastKind};
use log::{debug, info};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    Content,
    News,
    Rates,
    Media,
    AppSettings,
    Users,
    Settings,
}

impl AdminSection {
    pub const ALL: [AdminSection; 8] = [
        AdminSection::Dashboard,
        AdminSection::Content,
        AdminSection::News,
        AdminSection::Rates,
        AdminSection::Media,
        AdminSection::AppSettings,
        AdminSection::Users,
        AdminSection::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "dashboard",
            AdminSection::Content => "content",
            AdminSection::News => "news",
            AdminSection::Rates => "rates",
            AdminSection::Media => "media",
            AdminSection::AppSettings => "app-settings",
            AdminSection::Users => "users",
            AdminSection::Settings => "settings",
        }
    }

    /// Page title shown in the dashboard header
    pub fn title(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "لوحة المعلومات",
            AdminSection::Content => "إدارة المحتوى",
            AdminSection::News => "إدارة الأخبار",
            AdminSection::Rates => "أسعار الصرف",
            AdminSection::Media => "إدارة الوسائط",
            AdminSection::AppSettings => "إعدادات التطبيق",
            AdminSection::Users => "إدارة المستخدمين",
            AdminSection::Settings => "الإعدادات العامة",
        }
    }
}

impl fmt::Display for AdminSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AdminSection {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        AdminSection::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

/// Data loaded when a section becomes active
#[derive(Debug, Clone, PartialEq)]
pub enum SectionData {
    Dashboard(Vec<Activity>),
    News(Vec<AdminArticle>),
    Rates(Vec<RateRecord>),
    Media(Vec<MediaItem>),
    Users(Vec<AdminUser>),
    Static,
}

#[derive(Debug)]
pub struct AdminPanel {
    source: Arc<dyn DataSource>,
    section: AdminSection,
    active_tab: Option<String>,
    sidebar_open: bool,
    sidebar_breakpoint: u32,
    open_modal: Option<String>,
    notifier: Notifier,
}

impl AdminPanel {
    /// Open the panel on the dashboard; the sidebar starts open on wide screens
    pub fn new(source: Arc<dyn DataSource>, viewport_width: u32, sidebar_breakpoint: u32) -> Self {
        Self {
            source,
            section: AdminSection::Dashboard,
            active_tab: None,
            sidebar_open: viewport_width > sidebar_breakpoint,
            sidebar_breakpoint,
            open_modal: None,
            notifier: Notifier::new(Duration::from_millis(5000)),
        }
    }

    /// Activate a section by id and load its data
    pub fn switch_section(&mut self, id: &str) -> Result<SectionData> {
        let section = id.parse::<AdminSection>()?;
        self.section = section;
        info!("Admin section switched to {}", section);
        Ok(self.load_section_data())
    }

    pub fn load_section_data(&self) -> SectionData {
        match self.section {
            AdminSection::Dashboard => SectionData::Dashboard(self.source.fetch_recent_activity()),
            AdminSection::News => SectionData::News(self.source.fetch_admin_news()),
            AdminSection::Rates => SectionData::Rates(self.source.fetch_rate_records()),
            AdminSection::Media => SectionData::Media(self.source.fetch_media()),
            AdminSection::Users => SectionData::Users(self.source.fetch_users()),
            AdminSection::Content | AdminSection::AppSettings | AdminSection::Settings => {
                SectionData::Static
            }
        }
    }

    pub fn switch_tab(&mut self, id: &str) {
        debug!("Admin tab switched to {}", id);
        self.active_tab = Some(id.to_string());
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn handle_resize(&mut self, width: u32) {
        self.sidebar_open = width > self.sidebar_breakpoint;
    }

    pub fn open_modal(&mut self, id: &str) {
        self.open_modal = Some(id.to_string());
    }

    /// Close the given modal if it is the open one
    pub fn close_modal(&mut self, id: &str) -> bool {
        if self.open_modal.as_deref() == Some(id) {
            self.open_modal = None;
            return true;
        }
        false
    }

    /// Escape closes whichever modal is open
    pub fn escape(&mut self) -> Option<String> {
        self.open_modal.take()
    }

    pub fn notify(&mut self, message: &str, kind: ToastKind, duration: Duration) -> ToastId {
        self.notifier.show_for(message, kind, duration)
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.notifier.advance(elapsed);
    }

    pub fn section(&self) -> AdminSection {
        self.section
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.active_tab.as_deref()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn open_modal_id(&self) -> Option<&str> {
        self.open_modal.as_deref()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MockDataSource;

    fn panel(width: u32) -> AdminPanel {
        AdminPanel::new(Arc::new(MockDataSource), width, 1024)
    }

    #[test]
    fn test_section_ids_round_trip_through_from_str() {
        for section in AdminSection::ALL {
            assert_eq!(section.id().parse::<AdminSection>().unwrap(), section);
        }
        assert!(matches!(
            "reports".parse::<AdminSection>(),
            Err(SiteError::UnknownSection(_))
        ));
    }

    #[test]
    fn test_switch_section_loads_data() {
        let mut admin = panel(1280);
        match admin.switch_section("users").unwrap() {
            SectionData::Users(users) => assert_eq!(users.len(), 2),
            other => panic!("unexpected data: {:?}", other),
        }
        assert_eq!(admin.section().title(), "إدارة المستخدمين");
        assert_eq!(admin.switch_section("settings").unwrap(), SectionData::Static);
    }

    #[test]
    fn test_unknown_section_keeps_current() {
        let mut admin = panel(1280);
        admin.switch_section("rates").unwrap();
        assert!(admin.switch_section("nope").is_err());
        assert_eq!(admin.section(), AdminSection::Rates);
    }

    #[test]
    fn test_sidebar_follows_breakpoint() {
        let mut admin = panel(800);
        assert!(!admin.sidebar_open());
        admin.handle_resize(1025);
        assert!(admin.sidebar_open());
        admin.handle_resize(1024);
        assert!(!admin.sidebar_open());
        assert!(admin.toggle_sidebar());
    }

    #[test]
    fn test_modals() {
        let mut admin = panel(1280);
        admin.open_modal("addNewsModal");
        assert!(!admin.close_modal("otherModal"));
        assert_eq!(admin.escape().as_deref(), Some("addNewsModal"));
        assert_eq!(admin.escape(), None);
    }
}

// ABOUTME: Website shell for the exchange-site library
// ABOUTME: Owns the slider, navigation, toasts, counters and loaded data, and dispatches user events

use crate::config::SiteConfig;
use crate::content::{strings, DataSource, ExchangeRate, HeroSlide, NewsArticle};
use crate::errors::{Result, SiteError};
use crate::forms::{ContactForm, ContactReceipt, Credentials};
use crate::navigation::{NavigationTracker, ScrollUpdate, Section};
use crate::notifications::{Notifier, ToastKind};
use crate::slider::{Panel, SlideCoordinator};
use crate::stats::StatCounters;
use crate::timeline::Timeline;
use chrono::{DateTime, Local};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;

/// Input delivered by the hosting page
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    SelectSlide(usize),
    PointerEnter,
    PointerLeave,
    Resize { width: u32 },
    Scroll { y: f64 },
    NavClick { section: String, header_height: f64 },
    ToggleMobileMenu,
    RefreshRates,
    SubmitContact(ContactForm),
    OpenAdminLogin,
    CloseAdminLogin,
    /// A click on the dimmed backdrop around an open modal
    ClickOutsideModal,
    SubmitLogin { username: String, password: String },
    Escape,
    ReadArticle(u32),
}

/// What the page should do in response to an event, beyond its own state changes
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    ScrollTo(f64),
    Scrolled(ScrollUpdate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Home,
    Page(String),
}

#[derive(Debug, Clone)]
enum SiteTask {
    ContactDelivered(ContactForm),
    LoginChecked(bool),
    Redirect(String),
}

/// Sections of the public home page, top to bottom
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("home", 0.0, 700.0),
        Section::new("rates", 700.0, 600.0),
        Section::new("services", 1300.0, 500.0),
        Section::new("news", 1800.0, 700.0),
        Section::new("contact", 2500.0, 600.0),
    ]
}

/// The public site, owned by the host and passed around by reference
#[derive(Debug)]
pub struct Website {
    config: SiteConfig,
    source: Arc<dyn DataSource>,
    credentials: Credentials,
    slider: SlideCoordinator,
    navigation: NavigationTracker,
    notifier: Notifier,
    counters: StatCounters,
    timeline: Timeline<SiteTask>,
    hero_slides: Vec<HeroSlide>,
    news: Vec<NewsArticle>,
    rates: Vec<ExchangeRate>,
    rates_updated_at: Option<DateTime<Local>>,
    contact_pending: bool,
    login_pending: bool,
    login_modal_open: bool,
    receipts: Vec<ContactReceipt>,
    location: Location,
}

impl Website {
    /// Build the site, load its data and start the hero slider
    pub fn new(config: SiteConfig, source: Arc<dyn DataSource>) -> Result<Self> {
        config.validate()?;

        let hero_slides = source.hero_slides();
        let slides = hero_slides
            .iter()
            .map(|slide| Panel::new(slide.title.clone()))
            .collect();
        let indicators = (0..hero_slides.len())
            .map(|i| Panel::new(format!("slider-dot-{}", i)))
            .collect();

        let mut slider =
            SlideCoordinator::initialize(slides, indicators, config.get_slider_config())?;
        slider.start();

        let mut counters = StatCounters::new(source.statistics(), config.get_counter_config());
        counters.start();

        let mut site = Self {
            navigation: NavigationTracker::new(default_sections(), config.get_nav_config()),
            notifier: Notifier::new(config.toast_duration()),
            counters,
            credentials: Credentials::placeholder(),
            config,
            source,
            slider,
            timeline: Timeline::new(),
            hero_slides,
            news: Vec::new(),
            rates: Vec::new(),
            rates_updated_at: None,
            contact_pending: false,
            login_pending: false,
            login_modal_open: false,
            receipts: Vec::new(),
            location: Location::Home,
        };
        site.load_initial_data();
        Ok(site)
    }

    /// Replace the credentials accepted by the admin login
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    fn load_initial_data(&mut self) {
        self.news = self.source.fetch_news();
        info!("Loaded {} news articles", self.news.len());
        self.load_rates();
    }

    fn load_rates(&mut self) {
        self.rates = self.source.fetch_rates();
        self.rates_updated_at = Some(Local::now());
        info!("Loaded {} exchange rates", self.rates.len());
    }

    /// Reload the rates table and stamp the update time
    pub fn refresh_rates(&mut self) {
        self.load_rates();
        self.notifier.show(strings::RATES_REFRESHED, ToastKind::Success);
    }

    /// Dispatch one user event
    pub fn handle(&mut self, event: SiteEvent) -> Result<Effect> {
        debug!("Handling {:?}", event);
        match event {
            SiteEvent::SelectSlide(index) => self.slider.go_to(index)?,
            SiteEvent::PointerEnter => self.slider.suspend_immediate(),
            SiteEvent::PointerLeave => self.slider.resume_immediate(),
            SiteEvent::Resize { width } => self.handle_resize(width),
            SiteEvent::Scroll { y } => {
                return Ok(Effect::Scrolled(self.navigation.handle_scroll(y)));
            }
            SiteEvent::NavClick {
                section,
                header_height,
            } => {
                let target = self.navigation.scroll_target(&section, header_height)?;
                self.navigation.select(&section)?;
                return Ok(Effect::ScrollTo(target));
            }
            SiteEvent::ToggleMobileMenu => {
                self.navigation.toggle_mobile_menu();
            }
            SiteEvent::RefreshRates => self.refresh_rates(),
            SiteEvent::SubmitContact(form) => self.submit_contact(form)?,
            SiteEvent::OpenAdminLogin => self.login_modal_open = true,
            SiteEvent::CloseAdminLogin | SiteEvent::ClickOutsideModal | SiteEvent::Escape => {
                self.login_modal_open = false
            }
            SiteEvent::SubmitLogin { username, password } => self.submit_login(&username, &password),
            SiteEvent::ReadArticle(id) => {
                info!("Reading article {}", id);
                self.notifier
                    .show(strings::ARTICLE_UNAVAILABLE, ToastKind::Info);
            }
        }
        Ok(Effect::None)
    }

    fn handle_resize(&mut self, width: u32) {
        if width < self.config.mobile_breakpoint_px {
            self.slider.pause();
        } else {
            self.slider.resume_immediate();
        }
    }

    fn submit_contact(&mut self, form: ContactForm) -> Result<()> {
        if self.contact_pending {
            return Err(SiteError::ValidationError(
                "a message is already being sent".to_string(),
            ));
        }
        if let Err(e) = form.validate() {
            warn!("Rejected contact form: {}", e);
            self.notifier.show(strings::CONTACT_FAILED, ToastKind::Error);
            return Err(e);
        }
        self.contact_pending = true;
        self.timeline.schedule_once(
            Duration::from_millis(self.config.contact_latency_ms),
            SiteTask::ContactDelivered(form),
        );
        Ok(())
    }

    fn submit_login(&mut self, username: &str, password: &str) {
        if self.login_pending {
            return;
        }
        self.login_pending = true;
        let accepted = self.credentials.check(username, password);
        self.timeline.schedule_once(
            Duration::from_millis(self.config.login_latency_ms),
            SiteTask::LoginChecked(accepted),
        );
    }

    /// Let `elapsed` of simulated time pass for every timer the site owns.
    ///
    /// Each site task runs at its own deadline, after the slider, toasts and
    /// counters have been brought up to that same instant.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.timeline.now() + elapsed;
        while let Some(deadline) = self.timeline.next_deadline().filter(|d| *d <= until) {
            self.advance_components_to(deadline);
            match self.timeline.pop_due(deadline) {
                Some((_, task)) => self.run_task(task),
                None => break,
            }
        }
        self.advance_components_to(until);
        self.timeline.settle(until);
    }

    fn advance_components_to(&mut self, at: Duration) {
        self.slider.advance(at.saturating_sub(self.slider.now()));
        self.notifier.advance(at.saturating_sub(self.notifier.now()));
        self.counters.advance(at.saturating_sub(self.counters.now()));
    }

    fn run_task(&mut self, task: SiteTask) {
        match task {
            SiteTask::ContactDelivered(form) => {
                self.contact_pending = false;
                let receipt = ContactReceipt::new(form);
                info!("Contact message accepted: {}", receipt.reference);
                self.receipts.push(receipt);
                self.notifier.show(strings::CONTACT_SENT, ToastKind::Success);
            }
            SiteTask::LoginChecked(true) => {
                self.login_pending = false;
                self.login_modal_open = false;
                self.notifier.show(strings::LOGIN_SUCCESS, ToastKind::Success);
                self.timeline.schedule_once(
                    Duration::from_millis(self.config.redirect_delay_ms),
                    SiteTask::Redirect(self.config.admin_page.clone()),
                );
            }
            SiteTask::LoginChecked(false) => {
                self.login_pending = false;
                self.notifier.show(strings::LOGIN_FAILED, ToastKind::Error);
            }
            SiteTask::Redirect(page) => {
                info!("Navigating to {}", page);
                self.location = Location::Page(page);
            }
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn slider(&self) -> &SlideCoordinator {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut SlideCoordinator {
        &mut self.slider
    }

    pub fn navigation(&self) -> &NavigationTracker {
        &self.navigation
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn counters(&self) -> &StatCounters {
        &self.counters
    }

    pub fn hero_slides(&self) -> &[HeroSlide] {
        &self.hero_slides
    }

    pub fn news(&self) -> &[NewsArticle] {
        &self.news
    }

    pub fn rates(&self) -> &[ExchangeRate] {
        &self.rates
    }

    pub fn rates_updated_at(&self) -> Option<DateTime<Local>> {
        self.rates_updated_at
    }

    pub fn contact_pending(&self) -> bool {
        self.contact_pending
    }

    pub fn login_pending(&self) -> bool {
        self.login_pending
    }

    pub fn login_modal_open(&self) -> bool {
        self.login_modal_open
    }

    pub fn receipts(&self) -> &[ContactReceipt] {
        &self.receipts
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Simulated time since the site was created
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }
}

// ABOUTME: Library module for the exchange-site program.
// ABOUTME: Contains the hero slider, navigation, statistics, content, forms, admin panel and HTML rendering.

// Reexport modules
pub mod admin;
pub mod config;
pub mod content;
pub mod errors;
pub mod forms;
pub mod html;
pub mod navigation;
pub mod notifications;
pub mod script;
pub mod site;
pub mod slider;
pub mod stats;
pub mod timeline;
pub mod utils;

// Reexport common types and functions
pub use admin::{AdminPanel, AdminSection, SectionData};
pub use config::SiteConfig;
pub use content::{DataSource, MockDataSource};
pub use errors::{Result, SiteError};
pub use html::{render_admin_page, render_home_page, write_html_to_file};
pub use navigation::{NavigationTracker, Section};
pub use notifications::{Notifier, ToastKind};
pub use site::{SiteEvent, Website};
pub use slider::{ActiveChange, AutoAdvance, Panel, SlideCoordinator, SliderConfig};
pub use stats::{CounterConfig, StatCounter, StatCounters};
pub use timeline::{TimerHandle, Timeline};

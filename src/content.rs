// ABOUTME: Content module for the exchange-site library
// ABOUTME: Defines the site's data types and a mock data source with hardcoded tables

use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use std::fmt;

/// User-facing strings shown by the site
pub mod strings {
    pub const RATES_REFRESHED: &str = "تم تحديث الأسعار بنجاح";
    pub const CONTACT_SENT: &str = "تم إرسال رسالتك بنجاح. سنتواصل معك قريباً";
    pub const CONTACT_FAILED: &str = "حدث خطأ في إرسال الرسالة. يرجى المحاولة مرة أخرى";
    pub const LOGIN_SUCCESS: &str = "تم تسجيل الدخول بنجاح";
    pub const LOGIN_FAILED: &str = "اسم المستخدم أو كلمة المرور غير صحيحة";
    pub const ARTICLE_UNAVAILABLE: &str = "ميزة قراءة المقال الكامل قيد التطوير";
    pub const READ_MORE: &str = "اقرأ المزيد";
    pub const REFRESH: &str = "تحديث";
    pub const SENDING: &str = "جاري الإرسال...";
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub image: String,
    pub date: NaiveDate,
    pub read_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateTrend {
    Positive,
    Negative,
}

impl RateTrend {
    pub fn css_class(&self) -> &'static str {
        match self {
            RateTrend::Positive => "positive",
            RateTrend::Negative => "negative",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            RateTrend::Positive => "up",
            RateTrend::Negative => "down",
        }
    }
}

/// Public exchange rate row with buy/sell prices in Sana'a and Aden
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub currency: String,
    pub flag: String,
    pub sanaa_buy: String,
    pub sanaa_sell: String,
    pub aden_buy: String,
    pub aden_sell: String,
    pub change: String,
    pub trend: RateTrend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStatus {
    Published,
    Draft,
    Archived,
}

impl PublishStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PublishStatus::Published => "منشور",
            PublishStatus::Draft => "مسودة",
            PublishStatus::Archived => "مؤرشف",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            PublishStatus::Published => "bg-green-100 text-green-800",
            PublishStatus::Draft => "bg-yellow-100 text-yellow-800",
            PublishStatus::Archived => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminArticle {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: String,
    pub status: PublishStatus,
}

/// Editable rate record shown in the admin dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct RateRecord {
    pub id: u32,
    pub currency: String,
    pub flag: String,
    pub sanaa_buy: f64,
    pub sanaa_sell: f64,
    pub aden_buy: f64,
    pub aden_sell: f64,
    pub last_update: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: u32,
    pub name: String,
    pub kind: MediaKind,
    pub size: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Editor,
    Viewer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "مدير",
            UserRole::Editor => "محرر",
            UserRole::Viewer => "مستخدم",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            UserRole::Admin => "bg-red-100 text-red-800",
            UserRole::Editor => "bg-blue-100 text-blue-800",
            UserRole::Viewer => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Disabled,
}

impl UserStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "نشط",
            UserStatus::Disabled => "معطل",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub last_login: String,
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: u32,
    pub kind: String,
    pub title: String,
    pub time: String,
    pub icon: String,
    pub color: String,
}

/// One figure in the statistics strip, counted up from zero when the page loads
#[derive(Debug, Clone, PartialEq)]
pub struct Statistic {
    pub label: String,
    pub target: u64,
}

/// Where the site and the dashboard get their data from
pub trait DataSource: fmt::Debug + Send + Sync {
    fn hero_slides(&self) -> Vec<HeroSlide>;
    fn fetch_news(&self) -> Vec<NewsArticle>;
    fn fetch_rates(&self) -> Vec<ExchangeRate>;
    fn fetch_admin_news(&self) -> Vec<AdminArticle>;
    fn fetch_rate_records(&self) -> Vec<RateRecord>;
    fn fetch_media(&self) -> Vec<MediaItem>;
    fn fetch_users(&self) -> Vec<AdminUser>;
    fn fetch_recent_activity(&self) -> Vec<Activity>;
    fn statistics(&self) -> Vec<Statistic>;
}

/// Data source backed by hardcoded tables
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataSource;

const UNSPLASH: &str = "https://images.unsplash.com";

fn photo(id: &str, width: u32) -> String {
    format!(
        "{}/photo-{}?ixlib=rb-4.0.3&auto=format&fit=crop&w={}&q=80",
        UNSPLASH, id, width
    )
}

fn rate(
    currency: &str,
    flag: &str,
    prices: [&str; 4],
    change: &str,
    trend: RateTrend,
) -> ExchangeRate {
    ExchangeRate {
        currency: currency.to_string(),
        flag: flag.to_string(),
        sanaa_buy: prices[0].to_string(),
        sanaa_sell: prices[1].to_string(),
        aden_buy: prices[2].to_string(),
        aden_sell: prices[3].to_string(),
        change: change.to_string(),
        trend,
    }
}

impl DataSource for MockDataSource {
    fn hero_slides(&self) -> Vec<HeroSlide> {
        [
            ("خدمات صرافة موثوقة", "أسعار صرف تنافسية يومياً", "1560472354-b33ff0c44a43"),
            ("تحويلات سريعة وآمنة", "حوّل أموالك داخل اليمن وخارجه", "1556742049-0cfed4f6a45d"),
            ("تطبيق واصل كاش", "خدماتنا في متناول يدك", "1512941937669-90a1b58e7e9c"),
        ]
        .into_iter()
        .map(|(title, subtitle, image)| HeroSlide {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            image: photo(image, 1920),
        })
        .collect()
    }

    fn fetch_news(&self) -> Vec<NewsArticle> {
        let today = Local::now().date_naive();
        vec![
            NewsArticle {
                id: 1,
                title: "تحديث أسعار الصرف لهذا الأسبوع".to_string(),
                excerpt: "نعلن عن تحديث أسعار صرف العملات الأجنبية مقابل الريال اليمني لهذا الأسبوع..."
                    .to_string(),
                category: "تحديثات الأسعار".to_string(),
                image: photo("1611974789855-9c2a0a7236a3", 500),
                date: today,
                read_time: "3 دقائق".to_string(),
            },
            NewsArticle {
                id: 2,
                title: "إطلاق خدمة التحويلات السريعة".to_string(),
                excerpt: "نفخر بإعلان إطلاق خدمة التحويلات السريعة الجديدة التي تتيح لعملائنا..."
                    .to_string(),
                category: "أخبار عامة".to_string(),
                image: photo("1556742049-0cfed4f6a45d", 500),
                date: today - ChronoDuration::days(1),
                read_time: "5 دقائق".to_string(),
            },
            NewsArticle {
                id: 3,
                title: "تطبيق واصل كاش متاح الآن".to_string(),
                excerpt: "يسعدنا أن نعلن عن توفر تطبيق واصل كاش على متاجر التطبيقات..."
                    .to_string(),
                category: "إعلانات".to_string(),
                image: photo("1512941937669-90a1b58e7e9c", 500),
                date: today - ChronoDuration::days(2),
                read_time: "4 دقائق".to_string(),
            },
        ]
    }

    fn fetch_rates(&self) -> Vec<ExchangeRate> {
        vec![
            rate(
                "الدولار الأمريكي",
                "🇺🇸",
                ["530.00", "535.00", "1,520.00", "1,525.00"],
                "+0.5%",
                RateTrend::Positive,
            ),
            rate(
                "الريال السعودي",
                "🇸🇦",
                ["141.00", "143.00", "405.00", "407.00"],
                "+0.2%",
                RateTrend::Positive,
            ),
            rate(
                "اليورو",
                "🇪🇺",
                ["580.00", "585.00", "1,650.00", "1,655.00"],
                "-0.3%",
                RateTrend::Negative,
            ),
            rate(
                "الجنيه الإسترليني",
                "🇬🇧",
                ["670.00", "675.00", "1,900.00", "1,905.00"],
                "+0.1%",
                RateTrend::Positive,
            ),
        ]
    }

    fn fetch_admin_news(&self) -> Vec<AdminArticle> {
        [
            (
                1,
                "تحديث أسعار الصرف لهذا الأسبوع",
                "نعلن عن تحديث أسعار صرف العملات الأجنبية...",
                "تحديثات الأسعار",
                "2024-01-15",
                PublishStatus::Published,
            ),
            (
                2,
                "إطلاق خدمة التحويلات السريعة",
                "نفخر بإعلان إطلاق خدمة التحويلات السريعة...",
                "أخبار عامة",
                "2024-01-14",
                PublishStatus::Published,
            ),
            (
                3,
                "تطبيق واصل كاش متاح الآن",
                "يسعدنا أن نعلن عن توفر تطبيق واصل كاش...",
                "إعلانات",
                "2024-01-13",
                PublishStatus::Draft,
            ),
        ]
        .into_iter()
        .map(|(id, title, excerpt, category, date, status)| AdminArticle {
            id,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            status,
        })
        .collect()
    }

    fn fetch_rate_records(&self) -> Vec<RateRecord> {
        vec![
            RateRecord {
                id: 1,
                currency: "الدولار الأمريكي".to_string(),
                flag: "🇺🇸".to_string(),
                sanaa_buy: 530.0,
                sanaa_sell: 535.0,
                aden_buy: 1520.0,
                aden_sell: 1525.0,
                last_update: "2024-01-15 10:30".to_string(),
            },
            RateRecord {
                id: 2,
                currency: "الريال السعودي".to_string(),
                flag: "🇸🇦".to_string(),
                sanaa_buy: 141.0,
                sanaa_sell: 143.0,
                aden_buy: 405.0,
                aden_sell: 407.0,
                last_update: "2024-01-15 10:30".to_string(),
            },
        ]
    }

    fn fetch_media(&self) -> Vec<MediaItem> {
        vec![
            MediaItem {
                id: 1,
                name: "hero-image-1.jpg".to_string(),
                kind: MediaKind::Image,
                size: "2.5 MB".to_string(),
                url: photo("1560472354-b33ff0c44a43", 300),
            },
            MediaItem {
                id: 2,
                name: "company-logo.png".to_string(),
                kind: MediaKind::Image,
                size: "156 KB".to_string(),
                url: photo("1551288049-bebda4e38f71", 300),
            },
            MediaItem {
                id: 3,
                name: "presentation.pdf".to_string(),
                kind: MediaKind::Document,
                size: "4.2 MB".to_string(),
                url: "#".to_string(),
            },
        ]
    }

    fn fetch_users(&self) -> Vec<AdminUser> {
        vec![
            AdminUser {
                id: 1,
                name: "أحمد محمد".to_string(),
                username: "ahmed".to_string(),
                email: "ahmed@example.com".to_string(),
                role: UserRole::Admin,
                last_login: "2024-01-15 09:30".to_string(),
                status: UserStatus::Active,
            },
            AdminUser {
                id: 2,
                name: "فاطمة علي".to_string(),
                username: "fatima".to_string(),
                email: "fatima@example.com".to_string(),
                role: UserRole::Editor,
                last_login: "2024-01-14 16:45".to_string(),
                status: UserStatus::Active,
            },
        ]
    }

    fn fetch_recent_activity(&self) -> Vec<Activity> {
        [
            (1, "user_login", "تسجيل دخول مستخدم جديد", "منذ 5 دقائق", "fas fa-user", "bg-blue-500"),
            (2, "rate_update", "تحديث أسعار الصرف", "منذ 15 دقيقة", "fas fa-chart-line", "bg-green-500"),
            (3, "news_published", "نشر خبر جديد", "منذ 30 دقيقة", "fas fa-newspaper", "bg-yellow-500"),
            (4, "app_download", "تحميل جديد للتطبيق", "منذ ساعة", "fas fa-mobile-alt", "bg-purple-500"),
        ]
        .into_iter()
        .map(|(id, kind, title, time, icon, color)| Activity {
            id,
            kind: kind.to_string(),
            title: title.to_string(),
            time: time.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        })
        .collect()
    }

    fn statistics(&self) -> Vec<Statistic> {
        [
            ("سنوات من الخبرة", 15),
            ("عميل راضٍ", 50_000),
            ("فرعاً ووكيلاً", 120),
            ("عملة متداولة", 25),
        ]
        .into_iter()
        .map(|(label, target)| Statistic {
            label: label.to_string(),
            target,
        })
        .collect()
    }
}

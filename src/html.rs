// ABOUTME: HTML generation module for the exchange-site library
// ABOUTME: Renders the home page, the admin page and their reusable fragments

use crate::admin::{AdminPanel, AdminSection, SectionData};
use crate::content::{
    strings, Activity, AdminArticle, AdminUser, ExchangeRate, HeroSlide, MediaItem, MediaKind,
    NewsArticle, RateRecord,
};
use crate::errors::Result;
use crate::notifications::Toast;
use crate::site::Website;
use crate::slider::SlideCoordinator;
use crate::stats::StatCounters;
use crate::utils::{self, escape_html};
use log::info;
use std::fs;
use std::path::Path;

fn active_class(base: &str, active: bool) -> String {
    if active {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

fn document_head(html_doc: &mut String, title: &str) {
    html_doc.push_str("<!DOCTYPE html>\n<html lang=\"ar\" dir=\"rtl\">\n<head>\n");
    html_doc.push_str("<meta charset=\"UTF-8\">\n");
    html_doc.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html_doc.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html_doc.push_str("</head>\n");
}

/// Hero slider markup reflecting the coordinator's current active flags
pub fn hero_slider(slides: &[HeroSlide], slider: &SlideCoordinator) -> String {
    let mut html = String::from("<section id=\"home\" class=\"hero-slider\">\n");

    for (slide, panel) in slides.iter().zip(slider.slides()) {
        html.push_str(&format!(
            "<div class=\"{}\" style=\"background-image: url('{}')\">\n<h1>{}</h1>\n<p>{}</p>\n</div>\n",
            active_class("slide", panel.active),
            escape_html(&slide.image),
            escape_html(&slide.title),
            escape_html(&slide.subtitle),
        ));
    }

    html.push_str("<div class=\"slider-dots\">\n");
    for (i, dot) in slider.indicators().iter().enumerate() {
        html.push_str(&format!(
            "<button class=\"{}\" data-slide=\"{}\"></button>\n",
            active_class("slider-dot", dot.active),
            i
        ));
    }
    html.push_str("</div>\n</section>\n");
    html
}

pub fn news_card(article: &NewsArticle) -> String {
    format!(
        r##"<div class="news-card hover-lift">
<img src="{image}" alt="{title}" class="news-image" loading="lazy">
<div class="news-content">
<span class="news-category">{category}</span>
<h3 class="news-title">{title}</h3>
<p class="news-excerpt">{excerpt}</p>
<div class="news-meta">
<span>{date}</span>
<a href="#" class="read-more" data-article="{id}">{read_more}</a>
</div>
</div>
</div>
"##,
        image = escape_html(&article.image),
        title = escape_html(&article.title),
        category = escape_html(&article.category),
        excerpt = escape_html(&article.excerpt),
        date = article.date.format("%Y-%m-%d"),
        id = article.id,
        read_more = strings::READ_MORE,
    )
}

/// Placeholder cards shown while news is loading
pub fn loading_cards(count: usize) -> String {
    let card = concat!(
        "<div class=\"news-card loading\">\n",
        "<div class=\"w-full h-48 bg-gray-200 animate-pulse\"></div>\n",
        "<div class=\"news-content\">\n",
        "<div class=\"w-20 h-6 bg-gray-200 animate-pulse rounded mb-4\"></div>\n",
        "<div class=\"w-full h-6 bg-gray-200 animate-pulse rounded mb-2\"></div>\n",
        "<div class=\"w-full h-16 bg-gray-200 animate-pulse rounded\"></div>\n",
        "</div>\n</div>\n",
    );
    card.repeat(count)
}

pub fn rate_row(rate: &ExchangeRate) -> String {
    format!(
        r#"<tr class="hover:bg-gray-50 transition-colors">
<td class="font-medium"><span class="mr-2">{flag}</span>{currency}</td>
<td class="font-mono">{sanaa_buy}</td>
<td class="font-mono">{sanaa_sell}</td>
<td class="font-mono">{aden_buy}</td>
<td class="font-mono">{aden_sell}</td>
<td><span class="rate-change {trend}"><i class="fas fa-arrow-{arrow}"></i>{change}</span></td>
</tr>
"#,
        flag = escape_html(&rate.flag),
        currency = escape_html(&rate.currency),
        sanaa_buy = escape_html(&rate.sanaa_buy),
        sanaa_sell = escape_html(&rate.sanaa_sell),
        aden_buy = escape_html(&rate.aden_buy),
        aden_sell = escape_html(&rate.aden_sell),
        trend = rate.trend.css_class(),
        arrow = rate.trend.arrow(),
        change = escape_html(&rate.change),
    )
}

/// Placeholder rows shown while rates are loading
pub fn rates_loading_rows() -> String {
    let mut html = String::new();
    for _ in 0..4 {
        html.push_str("<tr class=\"animate-pulse\">");
        for width in ["w-32", "w-16", "w-16", "w-16", "w-16", "w-12"] {
            html.push_str(&format!(
                "<td><div class=\"h-4 bg-gray-200 rounded {}\"></div></td>",
                width
            ));
        }
        html.push_str("</tr>\n");
    }
    html
}

pub fn toast(toast: &Toast) -> String {
    format!(
        "<div class=\"message {}\"><i class=\"fas fa-{}\"></i><span>{}</span></div>\n",
        toast.kind.css_class(),
        toast.kind.icon(),
        escape_html(&toast.message)
    )
}

/// Statistics strip; each number carries its final value in `data-target`
pub fn stat_counters(counters: &StatCounters) -> String {
    let mut html = String::from("<section class=\"stats\">\n");
    for (counter, value) in counters.counters().iter().zip(counters.display_values()) {
        html.push_str(&format!(
            "<div class=\"stat-item\"><div class=\"stat-number\" data-target=\"{}\">{}</div><div class=\"stat-label\">{}</div></div>\n",
            counter.target,
            value,
            escape_html(&counter.label)
        ));
    }
    html.push_str("</section>\n");
    html
}

/// Render the public home page from the site's current state
pub fn render_home_page(site: &Website) -> String {
    info!("Rendering home page");
    let mut html_doc = String::new();
    document_head(&mut html_doc, "أبو حذيفة للصرافة");
    html_doc.push_str("<body>\n");

    // Navigation
    let nav = site.navigation();
    html_doc.push_str(&format!(
        "<nav class=\"{}\">\n",
        if nav.navbar_scrolled() { "scrolled" } else { "" }
    ));
    for section in nav.sections() {
        html_doc.push_str(&format!(
            "<a href=\"#{id}\" class=\"{class}\">{id}</a>\n",
            id = escape_html(&section.id),
            class = active_class("nav-link", nav.active() == Some(section.id.as_str())),
        ));
    }
    html_doc.push_str(&format!(
        "<div id=\"mobileMenu\" class=\"{}\"></div>\n</nav>\n",
        if nav.mobile_menu_open() { "" } else { "hidden" }
    ));

    html_doc.push_str(&hero_slider(site.hero_slides(), site.slider()));
    html_doc.push_str(&stat_counters(site.counters()));

    // Rates
    html_doc.push_str("<section id=\"rates\">\n<table>\n<tbody id=\"ratesTableBody\">\n");
    if site.rates().is_empty() {
        html_doc.push_str(&rates_loading_rows());
    }
    for rate in site.rates() {
        html_doc.push_str(&rate_row(rate));
    }
    html_doc.push_str("</tbody>\n</table>\n");
    if let Some(updated) = site.rates_updated_at() {
        html_doc.push_str(&format!(
            "<span id=\"lastUpdateTime\">{}</span>\n",
            updated.format("%H:%M")
        ));
    }
    html_doc.push_str(&format!(
        "<button id=\"refreshBtn\">{}</button>\n</section>\n",
        strings::REFRESH
    ));

    // News
    html_doc.push_str("<section id=\"news\">\n<div id=\"newsContainer\">\n");
    if site.news().is_empty() {
        html_doc.push_str(&loading_cards(3));
    }
    for article in site.news() {
        html_doc.push_str(&news_card(article));
    }
    html_doc.push_str("</div>\n</section>\n");

    // Contact
    html_doc.push_str("<section id=\"contact\">\n<form class=\"contact-form\">\n");
    for field in ["name", "phone", "email", "subject"] {
        html_doc.push_str(&format!("<input name=\"{}\">\n", field));
    }
    html_doc.push_str("<textarea name=\"message\"></textarea>\n");
    if site.contact_pending() {
        html_doc.push_str(&format!(
            "<button class=\"submit-btn\" disabled>{}</button>\n",
            strings::SENDING
        ));
    } else {
        html_doc.push_str("<button class=\"submit-btn\">إرسال</button>\n");
    }
    html_doc.push_str("</form>\n</section>\n");

    // Admin login modal
    html_doc.push_str(&format!(
        "<div id=\"adminLoginModal\" class=\"{}\"></div>\n",
        active_class("modal", site.login_modal_open())
    ));

    html_doc.push_str("<div id=\"messageContainer\">\n");
    for t in site.notifier().visible() {
        html_doc.push_str(&toast(t));
    }
    html_doc.push_str("</div>\n</body>\n</html>");

    html_doc
}

fn activity_item(activity: &Activity) -> String {
    format!(
        "<div class=\"activity-item\"><div class=\"activity-icon {}\"><i class=\"{}\"></i></div><div class=\"activity-content\"><div class=\"activity-title\">{}</div><div class=\"activity-time\">{}</div></div></div>\n",
        escape_html(&activity.color),
        escape_html(&activity.icon),
        escape_html(&activity.title),
        escape_html(&activity.time),
    )
}

fn admin_news_row(article: &AdminArticle) -> String {
    format!(
        "<tr><td><div class=\"font-medium\">{}</div><div class=\"text-sm\">{}</div></td><td>{}</td><td>{}</td><td><span class=\"{}\">{}</span></td></tr>\n",
        escape_html(&article.title),
        escape_html(&utils::truncate_chars(&article.excerpt, 50)),
        escape_html(&article.category),
        escape_html(&article.date),
        article.status.badge_class(),
        article.status.label(),
    )
}

fn rate_editor_row(record: &RateRecord) -> String {
    let mut row = format!(
        "<tr data-rate=\"{}\"><td><span class=\"mr-2\">{}</span>{}</td>",
        record.id,
        escape_html(&record.flag),
        escape_html(&record.currency)
    );
    for (field, value) in [
        ("sanaa_buy", record.sanaa_buy),
        ("sanaa_sell", record.sanaa_sell),
        ("aden_buy", record.aden_buy),
        ("aden_sell", record.aden_sell),
    ] {
        row.push_str(&format!(
            "<td><input type=\"number\" name=\"{}\" value=\"{:.2}\"></td>",
            field, value
        ));
    }
    row.push_str(&format!("<td>{}</td></tr>\n", escape_html(&record.last_update)));
    row
}

fn media_item(item: &MediaItem) -> String {
    let preview = match item.kind {
        MediaKind::Image => format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(&item.url),
            escape_html(&item.name)
        ),
        MediaKind::Video => "<i class=\"fas fa-video\"></i>".to_string(),
        MediaKind::Document => "<i class=\"fas fa-file\"></i>".to_string(),
    };
    format!(
        "<div class=\"media-item\" data-media=\"{}\"><div class=\"media-preview\">{}</div><div class=\"media-info\"><div class=\"media-name\">{}</div><div class=\"media-size\">{}</div></div></div>\n",
        item.id,
        preview,
        escape_html(&item.name),
        escape_html(&item.size)
    )
}

fn user_row(user: &AdminUser) -> String {
    let initial = user.name.chars().next().map(String::from).unwrap_or_default();
    format!(
        "<tr><td><div class=\"avatar\">{}</div><div class=\"font-medium\">{}</div><div class=\"text-sm\">@{}</div></td><td>{}</td><td><span class=\"{}\">{}</span></td><td>{}</td><td>{}</td></tr>\n",
        escape_html(&initial),
        escape_html(&user.name),
        escape_html(&user.username),
        escape_html(&user.email),
        user.role.badge_class(),
        user.role.label(),
        escape_html(&user.last_login),
        user.status.label(),
    )
}

/// Render the admin dashboard with the data of its active section
pub fn render_admin_page(panel: &AdminPanel, data: &SectionData) -> String {
    info!("Rendering admin page for section {}", panel.section());
    let mut html_doc = String::new();
    document_head(&mut html_doc, panel.section().title());
    html_doc.push_str("<body>\n");

    html_doc.push_str(&format!(
        "<aside id=\"adminSidebar\" class=\"{}\">\n",
        if panel.sidebar_open() { "open" } else { "" }
    ));
    for section in AdminSection::ALL {
        html_doc.push_str(&format!(
            "<a href=\"#\" class=\"{}\" data-section=\"{}\">{}</a>\n",
            active_class("nav-item", section == panel.section()),
            section.id(),
            section.title()
        ));
    }
    html_doc.push_str("</aside>\n<main id=\"adminMain\">\n");
    html_doc.push_str(&format!(
        "<h1 id=\"pageTitle\">{}</h1>\n",
        panel.section().title()
    ));
    html_doc.push_str(&format!(
        "<div id=\"{}-section\" class=\"content-section active\">\n",
        panel.section().id()
    ));

    match data {
        SectionData::Dashboard(activities) => {
            html_doc.push_str("<div id=\"recentActivity\">\n");
            for activity in activities {
                html_doc.push_str(&activity_item(activity));
            }
            html_doc.push_str("</div>\n");
        }
        SectionData::News(articles) => {
            html_doc.push_str("<table><tbody id=\"newsTableBody\">\n");
            for article in articles {
                html_doc.push_str(&admin_news_row(article));
            }
            html_doc.push_str("</tbody></table>\n");
        }
        SectionData::Rates(records) => {
            html_doc.push_str("<table><tbody id=\"ratesEditorBody\">\n");
            for record in records {
                html_doc.push_str(&rate_editor_row(record));
            }
            html_doc.push_str("</tbody></table>\n");
        }
        SectionData::Media(items) => {
            html_doc.push_str("<div id=\"mediaGrid\">\n");
            for item in items {
                html_doc.push_str(&media_item(item));
            }
            html_doc.push_str("</div>\n");
        }
        SectionData::Users(users) => {
            html_doc.push_str("<table><tbody id=\"usersTableBody\">\n");
            for user in users {
                html_doc.push_str(&user_row(user));
            }
            html_doc.push_str("</tbody></table>\n");
        }
        SectionData::Static => {}
    }

    html_doc.push_str("</div>\n");
    for t in panel.notifier().visible() {
        html_doc.push_str(&toast(t));
    }
    html_doc.push_str("</main>\n</body>\n</html>");
    html_doc
}

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    // Ensure parent directory exists
    utils::ensure_parent_directory_exists(output_path)?;

    fs::write(output_path, html_content)?;

    Ok(())
}

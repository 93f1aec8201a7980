// ABOUTME: Event script parsing for the exchange-site library
// ABOUTME: Turns "<ms>:<kind>[:<arg>]" entries and interactive commands into site events

use crate::errors::{Result, SiteError};
use crate::forms::ContactForm;
use crate::site::SiteEvent;
use std::time::Duration;

/// A site event scheduled at an offset from the start of a simulation
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedEvent {
    pub at: Duration,
    pub event: SiteEvent,
}

fn parse_arg<T: std::str::FromStr>(kind: &str, arg: Option<&str>) -> Result<T> {
    let arg = arg.ok_or_else(|| SiteError::ScriptError(format!("'{}' needs an argument", kind)))?;
    arg.trim()
        .parse::<T>()
        .map_err(|_| SiteError::ScriptError(format!("invalid argument for '{}': {}", kind, arg)))
}

const DEFAULT_HEADER_HEIGHT: f64 = 80.0;

/// Split a `|`-separated argument into between `min` and `max` fields
fn parse_fields<'a>(
    kind: &str,
    arg: Option<&'a str>,
    min: usize,
    max: usize,
) -> Result<Vec<&'a str>> {
    let arg = arg.ok_or_else(|| SiteError::ScriptError(format!("'{}' needs an argument", kind)))?;
    let fields: Vec<&str> = arg.split('|').map(str::trim).collect();
    if fields.len() < min || fields.len() > max {
        return Err(SiteError::ScriptError(format!(
            "'{}' takes {} to {} '|'-separated fields, got '{}'",
            kind, min, max, arg
        )));
    }
    Ok(fields)
}

fn parse_nav(kind: &str, arg: Option<&str>) -> Result<SiteEvent> {
    let fields = parse_fields(kind, arg, 1, 2)?;
    let header_height = match fields.get(1) {
        Some(height) => parse_arg(kind, Some(*height))?,
        None => DEFAULT_HEADER_HEIGHT,
    };
    Ok(SiteEvent::NavClick {
        section: fields[0].to_string(),
        header_height,
    })
}

fn parse_login(kind: &str, arg: Option<&str>) -> Result<SiteEvent> {
    let fields = parse_fields(kind, arg, 2, 2)?;
    Ok(SiteEvent::SubmitLogin {
        username: fields[0].to_string(),
        password: fields[1].to_string(),
    })
}

/// `name|email|message[|phone[|subject]]`
fn parse_contact(kind: &str, arg: Option<&str>) -> Result<SiteEvent> {
    let fields = parse_fields(kind, arg, 3, 5)?;
    let field = |i: usize| fields.get(i).map(|f| f.to_string()).unwrap_or_default();
    Ok(SiteEvent::SubmitContact(ContactForm {
        name: field(0),
        email: field(1),
        message: field(2),
        phone: field(3),
        subject: field(4),
    }))
}

/// Parse one command such as `select 2`, `enter`, `login admin|admin123` or `nav #news`
pub fn parse_command(kind: &str, arg: Option<&str>) -> Result<SiteEvent> {
    let kind = kind.trim();
    Ok(match kind {
        "select" => SiteEvent::SelectSlide(parse_arg(kind, arg)?),
        "enter" => SiteEvent::PointerEnter,
        "leave" => SiteEvent::PointerLeave,
        "resize" => SiteEvent::Resize {
            width: parse_arg(kind, arg)?,
        },
        "scroll" => SiteEvent::Scroll {
            y: parse_arg(kind, arg)?,
        },
        "nav" => parse_nav(kind, arg)?,
        "refresh" => SiteEvent::RefreshRates,
        "menu" => SiteEvent::ToggleMobileMenu,
        "contact" => parse_contact(kind, arg)?,
        "open-login" => SiteEvent::OpenAdminLogin,
        "close-login" => SiteEvent::CloseAdminLogin,
        "outside-click" => SiteEvent::ClickOutsideModal,
        "login" => parse_login(kind, arg)?,
        "read" => SiteEvent::ReadArticle(parse_arg(kind, arg)?),
        "escape" => SiteEvent::Escape,
        other => {
            return Err(SiteError::ScriptError(format!(
                "unknown event kind: {}",
                other
            )))
        }
    })
}

/// Parse a line typed in interactive mode, e.g. `select 2`; everything after the
/// command word is its argument
pub fn parse_line(line: &str) -> Result<SiteEvent> {
    let line = line.trim();
    if line.is_empty() {
        return Err(SiteError::ScriptError("empty command".to_string()));
    }
    match line.split_once(char::is_whitespace) {
        Some((kind, rest)) => parse_command(kind, Some(rest.trim())),
        None => parse_command(line, None),
    }
}

impl std::str::FromStr for ScriptedEvent {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');
        let at = parts
            .next()
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .ok_or_else(|| SiteError::ScriptError(format!("missing time offset in '{}'", s)))?;
        let kind = parts
            .next()
            .ok_or_else(|| SiteError::ScriptError(format!("missing event kind in '{}'", s)))?;

        Ok(Self {
            at: Duration::from_millis(at),
            event: parse_command(kind, parts.next())?,
        })
    }
}

/// Parse and order a list of scripted events by time; ties keep their given order
pub fn parse_script(entries: &[String]) -> Result<Vec<ScriptedEvent>> {
    let mut events = entries
        .iter()
        .map(|entry| entry.parse::<ScriptedEvent>())
        .collect::<Result<Vec<_>>>()?;
    events.sort_by_key(|event| event.at);
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scripted_event() {
        let event: ScriptedEvent = "2000:select:2".parse().unwrap();
        assert_eq!(event.at, Duration::from_millis(2000));
        assert_eq!(event.event, SiteEvent::SelectSlide(2));

        let event: ScriptedEvent = "0:enter".parse().unwrap();
        assert_eq!(event.event, SiteEvent::PointerEnter);
    }

    #[test]
    fn test_parse_errors() {
        assert!("abc:enter".parse::<ScriptedEvent>().is_err());
        assert!("100".parse::<ScriptedEvent>().is_err());
        assert!("100:select".parse::<ScriptedEvent>().is_err());
        assert!("100:select:x".parse::<ScriptedEvent>().is_err());
        assert!("100:dance".parse::<ScriptedEvent>().is_err());
    }

    #[test]
    fn test_parse_script_sorts_stably() {
        let entries = vec![
            "3000:leave".to_string(),
            "1000:enter".to_string(),
            "1000:select:1".to_string(),
        ];
        let events = parse_script(&entries).unwrap();
        assert_eq!(events[0].event, SiteEvent::PointerEnter);
        assert_eq!(events[1].event, SiteEvent::SelectSlide(1));
        assert_eq!(events[2].event, SiteEvent::PointerLeave);
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("resize 600").unwrap(),
            SiteEvent::Resize { width: 600 }
        );
        assert!(parse_line("   ").is_err());
    }

    #[test]
    fn test_parse_login_and_modal_commands() {
        assert_eq!(
            parse_line("login admin|admin123").unwrap(),
            SiteEvent::SubmitLogin {
                username: "admin".to_string(),
                password: "admin123".to_string(),
            }
        );
        assert_eq!(parse_line("open-login").unwrap(), SiteEvent::OpenAdminLogin);
        assert_eq!(
            parse_line("outside-click").unwrap(),
            SiteEvent::ClickOutsideModal
        );
        assert!(parse_line("login admin").is_err());
    }

    #[test]
    fn test_parse_contact_keeps_spaces_and_colons() {
        let event: ScriptedEvent = "500:contact:Ali|ali@example.com|Rates at 10:30?"
            .parse()
            .unwrap();
        match event.event {
            SiteEvent::SubmitContact(form) => {
                assert_eq!(form.name, "Ali");
                assert_eq!(form.email, "ali@example.com");
                assert_eq!(form.message, "Rates at 10:30?");
                assert!(form.phone.is_empty());
            }
            other => panic!("unexpected event: {:?}", other),
        }

        match parse_line("contact Ali|ali@example.com|Hello there|777 1|transfer").unwrap() {
            SiteEvent::SubmitContact(form) => {
                assert_eq!(form.message, "Hello there");
                assert_eq!(form.phone, "777 1");
                assert_eq!(form.subject, "transfer");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_parse_nav_and_read() {
        assert_eq!(
            parse_line("nav #news").unwrap(),
            SiteEvent::NavClick {
                section: "#news".to_string(),
                header_height: 80.0,
            }
        );
        assert_eq!(
            "100:nav:rates|64".parse::<ScriptedEvent>().unwrap().event,
            SiteEvent::NavClick {
                section: "rates".to_string(),
                header_height: 64.0,
            }
        );
        assert_eq!(parse_line("read 3").unwrap(), SiteEvent::ReadArticle(3));
        assert!(parse_line("read").is_err());
    }
}

//! Country discovery from the guidelines landing page
//!
//! The landing page links every country card as
//! `<a class="card-icon__overlay" href="/en-us/guidelines/<code>/sms">`.
//! The code is the fourth `/`-separated part of the href.

use scraper::{Html, Selector};
use std::sync::LazyLock;

static CARD_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a.card-icon__overlay[href]")
        .expect("Failed to parse card link selector - this is a bug")
});

/// Collects country codes linked from the landing page, first-seen order
pub fn discover_country_codes(document: &Html) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();

    for link in document.select(&CARD_LINK_SELECTOR) {
        let Some(code) = link.value().attr("href").and_then(code_from_href) else {
            continue;
        };
        if !codes.iter().any(|known| known == code) {
            codes.push(code.to_string());
        }
    }

    codes
}

/// Picks the code out of a card href; needs at least five path parts
fn code_from_href(href: &str) -> Option<&str> {
    let parts: Vec<&str> = href.split('/').collect();
    if parts.len() < 5 {
        return None;
    }
    Some(parts[3]).filter(|code| !code.is_empty())
}

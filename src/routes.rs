//! Page routing table and per-page metadata.

use crate::i18n::{LocaleView, TextDirection};
use serde::Serialize;

/// The site's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Home,
    About,
    Training,
    Contact,
    Pricing,
    Privacy,
    Accessibility,
    NotFound,
}

impl Page {
    /// Every routable page (the not-found page has no path of its own).
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Training,
        Page::Contact,
        Page::Pricing,
        Page::Privacy,
        Page::Accessibility,
    ];

    /// Path relative to the base path.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Page::Home => Some("/"),
            Page::About => Some("/about"),
            Page::Training => Some("/training"),
            Page::Contact => Some("/contact"),
            Page::Pricing => Some("/pricing"),
            Page::Privacy => Some("/privacy"),
            Page::Accessibility => Some("/accessibility"),
            Page::NotFound => None,
        }
    }

    /// Content key of the page's title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Page::Home => "common.nav.home",
            Page::About => "about.title",
            Page::Training => "training.title",
            Page::Contact => "contact.title",
            Page::Pricing => "common.nav.pricing",
            Page::Privacy => "privacy.title",
            Page::Accessibility => "accessibility.title",
            Page::NotFound => "common.notFound.title",
        }
    }

    /// Match a request path against the routing table.
    ///
    /// `base_path` (e.g. `"/Motiv8-React"`) is stripped first; trailing
    /// slashes are ignored. Anything unmatched, including paths outside the
    /// base path, is `NotFound`.
    pub fn from_path(path: &str, base_path: &str) -> Page {
        let Some(relative) = strip_base(path, base_path) else {
            return Page::NotFound;
        };
        let relative = relative.trim_end_matches('/');
        let relative = if relative.is_empty() { "/" } else { relative };

        Page::ALL
            .into_iter()
            .find(|page| page.path() == Some(relative))
            .unwrap_or(Page::NotFound)
    }
}

fn strip_base<'a>(path: &'a str, base_path: &str) -> Option<&'a str> {
    if base_path.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base_path)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

/// Document metadata for a page in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: Page,
    /// `"<page title> | <brand>"`
    pub title: String,
    pub description: String,
    pub lang: &'static str,
    pub dir: TextDirection,
}

impl PageMeta {
    pub fn new(page: Page, view: &LocaleView<'_>) -> Self {
        let brand = view.text("common.brandName");
        let page_title = view.text(page.title_key());
        let title = if page_title.is_empty() {
            brand
        } else {
            format!("{} | {}", page_title, brand)
        };

        Self {
            page,
            title,
            description: view.text("home.hero.subtitle"),
            lang: view.lang(),
            dir: view.direction(),
        }
    }
}

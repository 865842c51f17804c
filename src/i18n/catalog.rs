//! Resolved content catalog.
//!
//! The catalog resolves the raw tree once per enabled locale at startup and
//! keeps the results immutable. Rendering code reads from it by dotted key
//! path through a [`LocaleView`], which carries the active locale explicitly
//! instead of relying on a process-wide "current language".

use crate::error::ContentError;
use crate::i18n::{resolve, ContentNode, Locale, LookupMetrics, ResolvedContent, TextDirection};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info};

/// Per-locale resolved content trees.
#[derive(Debug)]
pub struct Catalog {
    trees: HashMap<Locale, ResolvedContent>,
    default_locale: Locale,
    metrics: LookupMetrics,
}

/// Result of a key path lookup.
///
/// A miss is not an error: it carries the key path so that rendering shows
/// the key instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Value),
    Missing(String),
}

impl Lookup<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// The node found, or the key path as a string.
    pub fn into_value(self) -> Value {
        match self {
            Lookup::Found(value) => value.clone(),
            Lookup::Missing(key_path) => Value::String(key_path),
        }
    }
}

impl Catalog {
    /// Resolve `tree` for every enabled locale.
    ///
    /// # Errors
    /// Fails with the first [`ContentError::MissingTranslation`] found, so a
    /// content defect stops startup instead of surfacing during rendering.
    pub fn build(tree: &ContentNode, default_locale: Locale) -> Result<Self, ContentError> {
        let mut trees = HashMap::new();
        for locale in Locale::enabled() {
            let resolved = resolve(tree, locale)?;
            info!("Resolved content for locale '{}'", locale);
            trees.insert(locale, resolved);
        }

        Ok(Self {
            trees,
            default_locale,
            metrics: LookupMetrics::new(),
        })
    }

    /// The locale a fresh session starts in.
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Locales the catalog holds trees for, in registry order.
    pub fn locales(&self) -> Vec<Locale> {
        Locale::enabled()
            .into_iter()
            .filter(|locale| self.trees.contains_key(locale))
            .collect()
    }

    /// The whole resolved tree for `locale`.
    pub fn tree(&self, locale: Locale) -> Option<&ResolvedContent> {
        self.trees.get(&locale)
    }

    /// Look up `key_path` (e.g. `"home.hero.title"`) in `locale`'s tree.
    ///
    /// Path segments address object keys, or array indices when the current
    /// node is an array (`"home.meet.sections.0.title"`).
    pub fn get(&self, locale: Locale, key_path: &str) -> Lookup<'_> {
        match self.tree(locale).and_then(|root| walk(root, key_path)) {
            Some(value) => {
                self.metrics.record_hit();
                Lookup::Found(value)
            }
            None => {
                debug!("Content lookup miss: '{}' ({})", key_path, locale);
                self.metrics.record_miss();
                Lookup::Missing(key_path.to_string())
            }
        }
    }

    /// Look up `key_path` as display text.
    ///
    /// Strings and numbers are rendered as text; anything else (a miss, an
    /// object or an array) yields the key path.
    pub fn text(&self, locale: Locale, key_path: &str) -> String {
        as_text(self.get(locale, key_path), key_path)
    }

    /// Like [`text`](Self::text), but not counted in the lookup metrics.
    ///
    /// For messages the service composes itself (validation errors, dialog
    /// titles), so the metrics only reflect rendering lookups.
    pub fn message(&self, locale: Locale, key_path: &str) -> String {
        let lookup = match self.tree(locale).and_then(|root| walk(root, key_path)) {
            Some(value) => Lookup::Found(value),
            None => Lookup::Missing(key_path.to_string()),
        };
        as_text(lookup, key_path)
    }

    pub fn view(&self, locale: Locale) -> LocaleView<'_> {
        LocaleView {
            catalog: self,
            locale,
        }
    }

    /// A view in the configured default locale; nothing is remembered
    /// between sessions.
    pub fn default_view(&self) -> LocaleView<'_> {
        self.view(self.default_locale)
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }
}

fn as_text(lookup: Lookup<'_>, key_path: &str) -> String {
    match lookup {
        Lookup::Found(Value::String(s)) => s.clone(),
        Lookup::Found(Value::Number(n)) => n.to_string(),
        _ => key_path.to_string(),
    }
}

fn walk<'a>(root: &'a Value, key_path: &str) -> Option<&'a Value> {
    if key_path.is_empty() {
        return None;
    }
    key_path.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Read access to the catalog in one active locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleView<'a> {
    catalog: &'a Catalog,
    locale: Locale,
}

impl<'a> LocaleView<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Document direction for the active locale.
    pub fn direction(&self) -> TextDirection {
        self.locale.direction()
    }

    /// Value for the document's `lang` attribute.
    pub fn lang(&self) -> &'static str {
        self.locale.code()
    }

    pub fn get(&self, key_path: &str) -> Lookup<'a> {
        self.catalog.get(self.locale, key_path)
    }

    pub fn text(&self, key_path: &str) -> String {
        self.catalog.text(self.locale, key_path)
    }

    /// Uncounted text lookup, see [`Catalog::message`].
    pub fn message(&self, key_path: &str) -> String {
        self.catalog.message(self.locale, key_path)
    }

    /// Switch the active locale; every later lookup through the returned
    /// view uses `locale`.
    pub fn switch(self, locale: Locale) -> LocaleView<'a> {
        if locale != self.locale {
            info!("Switching locale {} -> {}", self.locale, locale);
            self.catalog.metrics.record_locale_switch();
        }
        LocaleView {
            catalog: self.catalog,
            locale,
        }
    }
}

//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry is a lazily initialized singleton (`OnceLock`). Content
//! parsing consults it to decide which object keys name locale variants, so
//! adding a locale here is enough for leaves to pick it up.

use serde::Serialize;
use std::sync::OnceLock;

/// Writing direction of a locale, applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Configuration for a supported locale.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "he")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Hebrew")
    pub name: &'static str,

    /// Native name shown in the language switcher (e.g., "English", "עברית")
    pub native_name: &'static str,

    /// Text direction of the language
    pub direction: TextDirection,

    /// Whether a fresh load starts in this locale (exactly one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Whether `code` names any registered locale, enabled or not.
    ///
    /// Content parsing uses this to classify translation leaves, so a leaf
    /// carrying a disabled locale's variant still parses as a leaf.
    pub fn is_locale_code(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if zero or several locales are flagged as default (a
    /// configuration error in `default_locales`).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }
}

/// Hebrew is the site's home language; English is the alternate.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            direction: TextDirection::Ltr,
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "he",
            name: "Hebrew",
            native_name: "עברית",
            direction: TextDirection::Rtl,
            is_default: true,
            enabled: true,
        },
    ]
}

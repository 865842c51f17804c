//! Locale type: a language code validated against the registry.

use crate::error::ContentError;
use crate::i18n::{LocaleConfig, LocaleRegistry, TextDirection};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated, enabled locale.
///
/// Only constructible through the registry (or the constants below), so
/// holding a `Locale` means its configuration exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "en", "he")
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };

    pub const HEBREW: Locale = Locale { code: "he" };

    /// Create a Locale from a language code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered and enabled
    /// * `Err(ContentError::UnknownLocale)` for unregistered codes
    /// * `Err(ContentError::DisabledLocale)` for registered but disabled codes
    pub fn from_code(code: &str) -> Result<Locale, ContentError> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => Err(ContentError::DisabledLocale(code.to_string())),
            None => Err(ContentError::UnknownLocale(code.to_string())),
        }
    }

    /// The locale a fresh load starts in.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// All enabled locales, in registry order.
    pub fn enabled() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a Locale built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be registered")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// `Rtl` for Hebrew, `Ltr` otherwise.
    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Locale {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Locale::ENGLISH.code(), "en");
        assert_eq!(Locale::HEBREW.code(), "he");
        assert_eq!(Locale::HEBREW.name(), "Hebrew");
        assert_eq!(Locale::ENGLISH.native_name(), "English");
    }

    #[test]
    fn test_from_code_valid() {
        assert_eq!(Locale::from_code("he").unwrap(), Locale::HEBREW);
        assert_eq!(Locale::from_code("en").unwrap(), Locale::ENGLISH);
    }

    #[test]
    fn test_from_code_unknown() {
        let err = Locale::from_code("fr").unwrap_err();
        assert!(matches!(err, ContentError::UnknownLocale(code) if code == "fr"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code("").is_err());
    }

    #[test]
    fn test_from_str_parses() {
        let locale: Locale = "en".parse().unwrap();
        assert_eq!(locale, Locale::ENGLISH);
    }

    #[test]
    fn test_default_locale_is_hebrew() {
        assert_eq!(Locale::default_locale(), Locale::HEBREW);
    }

    #[test]
    fn test_enabled_lists_both() {
        let enabled = Locale::enabled();
        assert_eq!(enabled, vec![Locale::ENGLISH, Locale::HEBREW]);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Locale::HEBREW.direction(), TextDirection::Rtl);
        assert_eq!(Locale::ENGLISH.direction(), TextDirection::Ltr);
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(Locale::HEBREW.to_string(), "he");
        assert_eq!(serde_json::to_string(&Locale::ENGLISH).unwrap(), "\"en\"");
    }
}

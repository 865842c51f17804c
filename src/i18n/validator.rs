//! Content quality validation.
//!
//! Walks every translation leaf and checks that each locale variant exists
//! and that the variants agree on elements that must not change between
//! languages (URLs, e-mail addresses, numbers, `{{placeholders}}`).

use crate::i18n::{ContentNode, Locale, TranslationLeaf};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Defects that stop the catalog from building
    pub errors: Vec<String>,

    /// Suspicious differences between locale variants
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator for bilingual content.
pub struct ContentValidator;

// Regex patterns for extraction (cached for performance)
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl ContentValidator {
    /// Validate every translation leaf of `tree`.
    ///
    /// Missing variants are errors. Empty variants and mismatched URLs,
    /// e-mail addresses, numbers or placeholders are warnings.
    pub fn validate(tree: &ContentNode) -> ValidationReport {
        let mut report = ValidationReport::new();
        tree.visit_leaves(&mut |path, leaf| Self::validate_leaf(path, leaf, &mut report));
        report
    }

    fn validate_leaf(path: &str, leaf: &TranslationLeaf, report: &mut ValidationReport) {
        for locale in leaf.missing_locales() {
            report
                .errors
                .push(format!("{}: missing '{}' translation", path, locale));
        }

        for (code, text) in leaf.variants() {
            if text.trim().is_empty() {
                report
                    .warnings
                    .push(format!("{}: '{}' translation is empty", path, code));
            }
        }

        // Compare every other variant against the first enabled one present.
        let present: Vec<(Locale, &str)> = Locale::enabled()
            .into_iter()
            .filter_map(|locale| leaf.get(locale).map(|text| (locale, text)))
            .collect();
        let Some(((base_locale, base), rest)) = present.split_first() else {
            return;
        };

        for (locale, text) in rest {
            let checks: [(&str, fn(&str) -> Vec<String>); 4] = [
                ("URL", Self::extract_urls),
                ("E-mail", Self::extract_emails),
                ("Number", Self::extract_numbers),
                ("Placeholder", Self::extract_placeholders),
            ];
            for (label, extract) in checks {
                let expected = extract(base);
                let actual = extract(text);
                if expected != actual {
                    report.warnings.push(format!(
                        "{}: {} mismatch: '{}' has {:?}, '{}' has {:?}",
                        path, label, base_locale, expected, locale, actual
                    ));
                }
            }
        }
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract all e-mail addresses from text
    fn extract_emails(text: &str) -> Vec<String> {
        let regex = EMAIL_REGEX
            .get_or_init(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract digit runs (prices, years, phone numbers), sorted so that
    /// word order differences between languages do not matter.
    fn extract_numbers(text: &str) -> Vec<String> {
        let regex = NUMBER_REGEX.get_or_init(|| Regex::new(r"\d+").unwrap());

        let mut numbers: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        numbers.sort();
        numbers
    }

    /// Extract `{{name}}` interpolation placeholders, sorted
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").unwrap());

        let mut names: Vec<String> = regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect();
        names.sort();
        names
    }
}

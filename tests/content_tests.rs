//! Integration tests for the bundled site content
//!
//! These tests load the real namespace documents shipped with the crate and
//! check that they resolve cleanly in every locale.

use motiv8_site::{
    build_catalog,
    config::Config,
    error::ContentError,
    i18n::{loader, resolve, Catalog, ContentNode, ContentValidator, Locale, Lookup},
};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

// ==================== Test Helpers ====================

fn content_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("content")
}

fn bundled_catalog() -> Catalog {
    let tree = loader::load_bundled().expect("bundled content parses");
    Catalog::build(&tree, Locale::HEBREW).expect("bundled content resolves")
}

fn test_config(content_dir: Option<PathBuf>) -> Config {
    Config {
        content_dir,
        default_locale: Locale::HEBREW,
        base_path: "/Motiv8-React".to_string(),
        port: 8080,
        submit_delay: Duration::ZERO,
        emailjs_api_url: "http://localhost".to_string(),
        emailjs_service_id: None,
        emailjs_template_id: None,
        emailjs_public_key: None,
    }
}

// ==================== Bundled Content Tests ====================

#[test]
fn test_bundled_content_has_every_namespace() {
    let tree = loader::load_bundled().unwrap();
    let ContentNode::Object(namespaces) = tree else {
        panic!("root should be an object");
    };
    for namespace in loader::NAMESPACES {
        assert!(namespaces.contains_key(*namespace), "missing {namespace}");
    }
}

#[test]
fn test_bundled_content_validates_cleanly() {
    let tree = loader::load_bundled().unwrap();
    let report = ContentValidator::validate(&tree);
    assert!(report.errors.is_empty(), "{:?}", report.errors);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert!(tree.leaf_count() > 100);
}

#[test]
fn test_bundled_catalog_resolves_both_locales() {
    let catalog = bundled_catalog();
    assert_eq!(catalog.locales(), vec![Locale::ENGLISH, Locale::HEBREW]);
    assert_eq!(catalog.text(Locale::ENGLISH, "common.brandName"), "Motiv8");
    assert_eq!(catalog.text(Locale::HEBREW, "common.brandName"), "מוטיב8");
    assert_eq!(catalog.text(Locale::HEBREW, "common.nav.home"), "בית");
}

#[test]
fn test_bundled_arrays_keep_shape() {
    let catalog = bundled_catalog();
    for locale in [Locale::ENGLISH, Locale::HEBREW] {
        let Lookup::Found(Value::Array(plans)) = catalog.get(locale, "pricing.plans") else {
            panic!("pricing.plans should be an array");
        };
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[1]["id"], "premium");
        assert_eq!(plans[1]["popular"], true);
        assert_eq!(plans[1]["price"]["monthly"], "450");
    }
    assert_eq!(
        catalog.text(Locale::ENGLISH, "training.options.0.features.1"),
        "Personal program"
    );
    assert_eq!(catalog.text(Locale::HEBREW, "about.history.timeline.0.year"), "2019");
}

#[test]
fn test_bundled_plain_strings_pass_through() {
    let catalog = bundled_catalog();
    for locale in [Locale::ENGLISH, Locale::HEBREW] {
        assert_eq!(catalog.text(locale, "training.hours.weekdays.time"), "06:00 - 23:00");
        assert_eq!(catalog.text(locale, "contact.methods.email.value"), "info@motiv8.co.il");
    }
    assert_eq!(catalog.text(Locale::HEBREW, "training.hours.saturday.time"), "סגור");
}

#[test]
fn test_lookup_miss_shows_key_path() {
    let catalog = bundled_catalog();
    let view = catalog.default_view();
    assert_eq!(view.text("home.hero.missing"), "home.hero.missing");
    assert_eq!(view.text("home.hero"), "home.hero");
    // A subtree is found, even though it has no text of its own.
    assert_eq!(catalog.metrics().misses(), 1);
    assert_eq!(catalog.metrics().hits(), 1);
}

#[test]
fn test_locale_switch_changes_every_lookup() {
    let catalog = bundled_catalog();
    let view = catalog.default_view();
    assert_eq!(view.text("modals.form.title"), "הצטרפות למוטיב8");

    let view = view.switch(Locale::ENGLISH);
    assert_eq!(view.text("modals.form.title"), "Join Motiv8");
    assert_eq!(view.text("common.send"), "Send");
    assert_eq!(catalog.metrics().locale_switches(), 1);
}

// ==================== Resolution Examples ====================

#[test]
fn test_brand_resolves_per_locale() {
    let tree = ContentNode::from_value(json!({ "brand": {"en": "Motiv8", "he": "מוטיב8"} })).unwrap();
    assert_eq!(resolve(&tree, Locale::ENGLISH).unwrap()["brand"], "Motiv8");
    assert_eq!(resolve(&tree, Locale::HEBREW).unwrap()["brand"], "מוטיב8");
}

#[test]
fn test_mixed_array_resolves_in_order() {
    let tree = ContentNode::from_value(json!(["Intro", {"en": "Step", "he": "שלב"}])).unwrap();
    assert_eq!(resolve(&tree, Locale::ENGLISH).unwrap(), json!(["Intro", "Step"]));
    assert_eq!(resolve(&tree, Locale::HEBREW).unwrap(), json!(["Intro", "שלב"]));
}

// ==================== Directory Loading Tests ====================

/// Copy the shipped namespace files into a temp directory.
fn copy_content(temp_dir: &TempDir) {
    for namespace in loader::NAMESPACES {
        let file = format!("{}.json", namespace);
        std::fs::copy(content_dir().join(&file), temp_dir.path().join(&file))
            .expect("Failed to copy content file");
    }
}

#[test]
fn test_load_dir_matches_bundled() {
    let temp_dir = TempDir::new().unwrap();
    copy_content(&temp_dir);
    let from_dir = loader::load_dir(temp_dir.path()).unwrap();
    assert_eq!(from_dir, loader::load_bundled().unwrap());
}

#[test]
fn test_build_catalog_from_directory() {
    let temp_dir = TempDir::new().unwrap();
    copy_content(&temp_dir);
    let catalog = build_catalog(&test_config(Some(temp_dir.path().to_path_buf()))).unwrap();
    assert_eq!(catalog.default_locale(), Locale::HEBREW);
    assert_eq!(catalog.text(Locale::ENGLISH, "pricing.toggle.mo"), "month");
}

#[test]
fn test_build_catalog_bundled() {
    let catalog = build_catalog(&test_config(None)).unwrap();
    assert_eq!(catalog.text(Locale::ENGLISH, "privacy.title"), "Privacy Policy");
}

#[test]
fn test_missing_translation_stops_startup() {
    let temp_dir = TempDir::new().unwrap();
    copy_content(&temp_dir);
    std::fs::write(
        temp_dir.path().join("privacy.json"),
        r#"{"title": {"en": "Privacy Policy"}, "content": {"en": "x", "he": "y"}}"#,
    )
    .unwrap();

    let err = build_catalog(&test_config(Some(temp_dir.path().to_path_buf()))).unwrap_err();
    let source = err.downcast_ref::<ContentError>().expect("content error");
    assert!(matches!(
        source,
        ContentError::MissingTranslation { path, locale } if path == "privacy.title" && locale == "he"
    ));
}

#[test]
fn test_malformed_namespace_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    copy_content(&temp_dir);
    std::fs::write(temp_dir.path().join("modals.json"), "{ not json").unwrap();

    let err = loader::load_dir(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ContentError::Malformed { ref namespace, .. } if namespace == "modals"));
}

#[test]
fn test_missing_namespace_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    copy_content(&temp_dir);
    std::fs::remove_file(temp_dir.path().join("pricing.json")).unwrap();

    let err = loader::load_dir(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ContentError::Io { ref path, .. } if path.ends_with("pricing.json")));
}

//! Internationalization (i18n) module for bilingual site content.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales, the default
//!   locale and text direction
//! - `locale`: Type-safe `Locale` validated against the registry
//! - `content`: Tagged content grammar parsed from the namespace JSON
//! - `localizer`: Resolves the bilingual tree for one locale
//! - `loader`: Loads and merges the namespace documents
//! - `catalog`: Eagerly resolved trees, key path lookups and `LocaleView`
//! - `validator`: Content quality validation
//! - `metrics`: Lookup observability
//!
//! # Example
//!
//! ```rust,ignore
//! use motiv8_site::i18n::{loader, Catalog, Locale};
//!
//! let tree = loader::load_bundled()?;
//! let catalog = Catalog::build(&tree, Locale::default_locale())?;
//!
//! let view = catalog.default_view();
//! assert_eq!(view.lang(), "he");
//! let title = view.switch(Locale::ENGLISH).text("home.hero.title");
//! ```

mod catalog;
mod content;
pub mod loader;
mod locale;
mod localizer;
mod metrics;
mod registry;
mod validator;

pub use catalog::{Catalog, LocaleView, Lookup};
pub use content::{ContentNode, TranslationLeaf};
pub use locale::Locale;
pub use localizer::{resolve, ResolvedContent};
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LocaleConfig, LocaleRegistry, TextDirection};
pub use validator::{ContentValidator, ValidationReport};

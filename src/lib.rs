//! Motiv8 site content service.
//!
//! Loads the bilingual (Hebrew/English) site content, resolves it per locale
//! at startup and serves it, together with page metadata and the contact
//! form boundary, over HTTP.

pub mod carousel;
pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod server;

use anyhow::{Context, Result};
use config::Config;
use i18n::{loader, Catalog, ContentNode, ContentValidator};
use tracing::{info, warn};

/// Load the raw content tree configured in `config`.
pub fn load_content(config: &Config) -> Result<ContentNode> {
    let tree = match &config.content_dir {
        Some(dir) => {
            info!("Loading content from {}", dir.display());
            loader::load_dir(dir)
                .with_context(|| format!("Failed to load content from {}", dir.display()))?
        }
        None => {
            info!("Loading bundled content");
            loader::load_bundled().context("Failed to load bundled content")?
        }
    };
    Ok(tree)
}

/// Load, validate and resolve the site content.
///
/// Validation warnings are logged; a missing translation stops startup.
pub fn build_catalog(config: &Config) -> Result<Catalog> {
    let tree = load_content(config)?;

    let report = ContentValidator::validate(&tree);
    for warning in &report.warnings {
        warn!("Content: {}", warning);
    }

    let catalog = Catalog::build(&tree, config.default_locale)
        .context("Failed to resolve site content")?;
    info!(
        "Content ready: {} locales, {} translation leaves, default '{}'",
        catalog.locales().len(),
        tree.leaf_count(),
        catalog.default_locale()
    );
    Ok(catalog)
}

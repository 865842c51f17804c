//! Content check binary - loads and validates the site content without serving it
//!
//! Usage:
//!   cargo run --bin check-content              # Check the bundled content
//!   cargo run --bin check-content -- content/  # Check a content directory
//!
//! Exits with status 1 when the content has errors (missing translations,
//! malformed JSON, missing namespaces).

use anyhow::{Context, Result};
use motiv8_site::i18n::{loader, Catalog, ContentValidator, Locale};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("motiv8_site=warn".parse()?)
                .add_directive("check_content=info".parse()?),
        )
        .init();

    let dir = std::env::args().nth(1).map(PathBuf::from);
    let tree = match &dir {
        Some(dir) => loader::load_dir(dir)
            .with_context(|| format!("Failed to load content from {}", dir.display()))?,
        None => loader::load_bundled().context("Failed to load bundled content")?,
    };
    info!("Loaded {} translation leaves", tree.leaf_count());

    let report = ContentValidator::validate(&tree);

    println!("\n{}", "=".repeat(60));
    println!(
        "CONTENT CHECK: {}",
        dir.as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "bundled".to_string())
    );
    println!("{}", "=".repeat(60));
    println!("Translation leaves: {}", tree.leaf_count());
    for error in &report.errors {
        println!("ERROR   {}", error);
    }
    for warning in &report.warnings {
        println!("WARNING {}", warning);
    }

    // Resolution is the authoritative check; the validator only explains it.
    if let Err(e) = Catalog::build(&tree, Locale::default_locale()) {
        println!("ERROR   {}", e);
        return Ok(ExitCode::FAILURE);
    }

    if report.has_errors() {
        return Ok(ExitCode::FAILURE);
    }

    println!(
        "\nOK: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );
    Ok(ExitCode::SUCCESS)
}

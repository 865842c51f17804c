use crate::contact::DEFAULT_EMAILJS_API_URL;
use crate::i18n::Locale;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Content
    /// Directory of `<namespace>.json` files; bundled content when unset
    pub content_dir: Option<PathBuf>,
    pub default_locale: Locale,

    // Routing / server
    pub base_path: String,
    pub port: u16,

    // Contact submissions
    pub submit_delay: Duration,
    pub emailjs_api_url: String,
    pub emailjs_service_id: Option<String>,
    pub emailjs_template_id: Option<String>,
    pub emailjs_public_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_locale = match std::env::var("DEFAULT_LOCALE") {
            Ok(code) => Locale::from_code(&code).context("Invalid DEFAULT_LOCALE")?,
            Err(_) => Locale::default_locale(),
        };

        Ok(Self {
            // Content
            content_dir: std::env::var("CONTENT_DIR").ok().map(PathBuf::from),
            default_locale,

            // Routing / server
            base_path: normalize_base_path(
                &std::env::var("BASE_PATH").unwrap_or_else(|_| "/Motiv8-React".to_string()),
            ),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Contact submissions
            submit_delay: Duration::from_millis(
                std::env::var("SUBMIT_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1500),
            ),
            emailjs_api_url: std::env::var("EMAILJS_API_URL")
                .unwrap_or_else(|_| DEFAULT_EMAILJS_API_URL.to_string()),
            emailjs_service_id: non_empty_var("EMAILJS_SERVICE_ID"),
            emailjs_template_id: non_empty_var("EMAILJS_TEMPLATE_ID"),
            emailjs_public_key: non_empty_var("EMAILJS_PUBLIC_KEY"),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// `"Motiv8-React/"` -> `"/Motiv8-React"`, `"/"` -> `""`.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

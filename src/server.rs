//! HTTP API serving localized content, page metadata and contact requests.

use crate::contact::{submit_form, ContactForm, ContactFormData, FormStatus, Submitter};
use crate::i18n::{Catalog, Locale, LocaleRegistry, LocaleView, MetricsReport};
use crate::routes::{Page, PageMeta};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared state of all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub submitter: Arc<Submitter>,
    pub client: reqwest::Client,
    pub base_path: String,
}

impl AppState {
    pub fn new(catalog: Catalog, submitter: Submitter, base_path: impl Into<String>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            submitter: Arc::new(submitter),
            client: reqwest::Client::new(),
            base_path: base_path.into(),
        }
    }

    /// View in `lang`, or in the default locale when no language is given.
    fn view(&self, lang: Option<&str>) -> Result<LocaleView<'_>, (StatusCode, String)> {
        match lang {
            Some(code) => Ok(self.catalog.view(parse_locale(code)?)),
            None => Ok(self.catalog.default_view()),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/locales", get(list_locales))
        .route("/api/content/:locale", get(get_content))
        .route("/api/content/:locale/*key", get(lookup_content))
        .route("/api/pages", get(get_page))
        .route("/api/contact", post(submit_contact))
        .route("/api/metrics", get(get_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn parse_locale(code: &str) -> Result<Locale, (StatusCode, String)> {
    Locale::from_code(code).map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))
}

// ============================================================
// Health
// ============================================================

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// ============================================================
// Locales and content
// ============================================================

#[derive(Debug, Serialize)]
struct LocaleInfo {
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    dir: &'static str,
    is_default: bool,
}

async fn list_locales(State(state): State<AppState>) -> Json<Vec<LocaleInfo>> {
    let default_locale = state.catalog.default_locale();
    let locales = LocaleRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|config| LocaleInfo {
            code: config.code,
            name: config.name,
            native_name: config.native_name,
            dir: config.direction.as_str(),
            is_default: config.code == default_locale.code(),
        })
        .collect();
    Json(locales)
}

async fn get_content(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let locale = parse_locale(&locale)?;
    state
        .catalog
        .tree(locale)
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("No content for '{}'", locale)))
}

#[derive(Debug, Serialize)]
struct LookupResponse {
    key: String,
    found: bool,
    value: Value,
}

/// Key paths may use dots or slashes: `home.hero.title` == `home/hero/title`.
async fn lookup_content(
    State(state): State<AppState>,
    Path((locale, key)): Path<(String, String)>,
) -> Result<Json<LookupResponse>, (StatusCode, String)> {
    let locale = parse_locale(&locale)?;
    let key = key.trim_matches('/').replace('/', ".");
    let lookup = state.catalog.get(locale, &key);

    Ok(Json(LookupResponse {
        found: lookup.is_found(),
        value: lookup.into_value(),
        key,
    }))
}

// ============================================================
// Pages
// ============================================================

#[derive(Debug, Deserialize)]
struct PageQuery {
    path: Option<String>,
    lang: Option<String>,
}

async fn get_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageMeta>, (StatusCode, String)> {
    let view = state.view(query.lang.as_deref())?;
    let path = query.path.unwrap_or_else(|| format!("{}/", state.base_path));
    let page = Page::from_path(&path, &state.base_path);
    Ok(Json(PageMeta::new(page, &view)))
}

// ============================================================
// Contact
// ============================================================

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

#[derive(Debug, Serialize)]
struct ContactResponse {
    status: FormStatus,
    /// Field name -> localized error message
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    errors: BTreeMap<String, String>,
    /// Localized title/message for the outcome dialog
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

async fn submit_contact(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    Json(data): Json<ContactFormData>,
) -> Result<(StatusCode, Json<ContactResponse>), (StatusCode, String)> {
    let view = state.view(query.lang.as_deref())?;
    let mut form = ContactForm::with_data(data);

    let status = submit_form(&mut form, &state.submitter, &state.client).await;
    let (code, outcome) = match status {
        FormStatus::Success => (StatusCode::OK, Some("modals.form.success")),
        FormStatus::Error => (StatusCode::BAD_GATEWAY, Some("modals.form.error")),
        _ => (StatusCode::UNPROCESSABLE_ENTITY, None),
    };

    let errors = form
        .errors()
        .iter()
        .map(|(field, key)| (field.name().to_string(), view.message(key)))
        .collect::<BTreeMap<_, _>>();
    if !errors.is_empty() {
        warn!("Rejected contact request with {} invalid fields", errors.len());
    }

    Ok((
        code,
        Json(ContactResponse {
            status,
            errors,
            title: outcome.map(|prefix| view.message(&format!("{}.title", prefix))),
            message: outcome.map(|prefix| view.message(&format!("{}.message", prefix))),
        }),
    ))
}

// ============================================================
// Metrics
// ============================================================

#[derive(Debug, Serialize)]
struct MetricsResponse {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: MetricsReport,
}

async fn get_metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        generated_at: Utc::now(),
        report: state.catalog.metrics().report(),
    })
}

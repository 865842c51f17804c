//! Contact submission boundary.
//!
//! Two transports: a simulated relay that waits a fixed delay and succeeds,
//! and the EmailJS relay reached over HTTP. Either way the caller only sees
//! success or failure; there are no retries and no timeout.

use crate::config::Config;
use crate::contact::ContactFormData;
use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS credentials and endpoint.
#[derive(Debug, Clone)]
pub struct EmailRelay {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// EmailJS send request
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Variables available to the e-mail template
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateParams<'a> {
    full_name: &'a str,
    plan: &'a str,
    phone: &'a str,
    email: &'a str,
    contact_method: &'a str,
}

impl<'a> TemplateParams<'a> {
    fn from_form(form: &'a ContactFormData) -> Self {
        Self {
            full_name: &form.full_name,
            plan: non_empty_or(&form.plan, "Not selected"),
            phone: &form.phone,
            email: non_empty_or(&form.email, "Not provided"),
            contact_method: form.contact_method.as_str(),
        }
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Where contact requests go.
#[derive(Debug, Clone)]
pub enum Submitter {
    /// Wait `delay`, log the request and report success
    Simulated { delay: Duration },
    EmailRelay(EmailRelay),
}

impl Submitter {
    /// The EmailJS relay when it is fully configured, otherwise the
    /// simulated relay.
    pub fn from_config(config: &Config) -> Self {
        match (
            &config.emailjs_service_id,
            &config.emailjs_template_id,
            &config.emailjs_public_key,
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => {
                Submitter::EmailRelay(EmailRelay {
                    api_url: config.emailjs_api_url.clone(),
                    service_id: service_id.clone(),
                    template_id: template_id.clone(),
                    public_key: public_key.clone(),
                })
            }
            _ => {
                info!("EmailJS is not configured, contact submissions are simulated");
                Submitter::Simulated {
                    delay: config.submit_delay,
                }
            }
        }
    }

    /// Deliver one contact request.
    pub async fn submit(&self, client: &reqwest::Client, form: &ContactFormData) -> Result<()> {
        match self {
            Submitter::Simulated { delay } => {
                tokio::time::sleep(*delay).await;
                info!(
                    "Contact request from {} ({}) recorded",
                    form.full_name,
                    form.contact_method.as_str()
                );
                Ok(())
            }
            Submitter::EmailRelay(relay) => relay.send(client, form).await,
        }
    }
}

impl EmailRelay {
    async fn send(&self, client: &reqwest::Client, form: &ContactFormData) -> Result<()> {
        let request = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams::from_form(form),
        };

        let response = client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to EmailJS")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("EmailJS rejected contact request ({}): {}", status, body);
            anyhow::bail!("EmailJS API error ({}): {}", status, body);
        }

        info!("Contact request e-mailed for {}", form.full_name);
        Ok(())
    }
}

//! Lead-capture contact form.
//!
//! - `form`: form data, validation and the submission status machine
//! - `submit`: delivery of a validated request (simulated or EmailJS)

mod form;
mod submit;

pub use form::{
    format_plan_label, ContactForm, ContactFormData, ContactMethod, Field, FieldErrors,
    FormStatus, ERROR_INVALID_EMAIL, ERROR_INVALID_PHONE, ERROR_REQUIRED,
};
pub use submit::{EmailRelay, Submitter, DEFAULT_EMAILJS_API_URL};

use tracing::error;

/// Validate and submit an open form, leaving it in its final status.
///
/// Invalid forms stay `Idle` with their field errors set and are never sent.
pub async fn submit_form(
    form: &mut ContactForm,
    submitter: &Submitter,
    client: &reqwest::Client,
) -> FormStatus {
    let Some(data) = form.begin_submit() else {
        return form.status();
    };

    match submitter.submit(client, &data).await {
        Ok(()) => form.finish_submit(true),
        Err(e) => {
            error!("Contact submission failed: {:#}", e);
            form.finish_submit(false);
        }
    }
    form.status()
}

//! Lead-capture form: data, validation and submission status.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// How the prospect wants to be contacted back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Whatsapp,
    Call,
    Email,
}

impl ContactMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Whatsapp => "whatsapp",
            ContactMethod::Call => "call",
            ContactMethod::Email => "email",
        }
    }
}

/// A contact request as entered in the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub contact_method: ContactMethod,
}

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Phone,
    Email,
}

impl Field {
    /// Name of the field in form payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }
}

/// Field errors, each given as the content key of its message.
pub type FieldErrors = BTreeMap<Field, &'static str>;

pub const ERROR_REQUIRED: &str = "modals.form.errors.required";
pub const ERROR_INVALID_PHONE: &str = "modals.form.errors.invalidPhone";
pub const ERROR_INVALID_EMAIL: &str = "modals.form.errors.invalidEmail";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

impl ContactFormData {
    /// Check the form, returning every failing field.
    ///
    /// - full name: required
    /// - phone: required, 9 or 10 digits once separators are stripped
    /// - email: optional, but must look like an address when given
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.full_name.trim().is_empty() {
            errors.insert(Field::FullName, ERROR_REQUIRED);
        }

        if self.phone.trim().is_empty() {
            errors.insert(Field::Phone, ERROR_REQUIRED);
        } else {
            let digits = self.phone.chars().filter(char::is_ascii_digit).count();
            if !(9..=10).contains(&digits) {
                errors.insert(Field::Phone, ERROR_INVALID_PHONE);
            }
        }

        let email_regex =
            EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
        if !self.email.is_empty() && !email_regex.is_match(&self.email) {
            errors.insert(Field::Email, ERROR_INVALID_EMAIL);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Plan description shown in the form: `"<name> - <price> / <period>"`.
///
/// The period is only shown with a price, and the price only when given.
pub fn format_plan_label(name: &str, price: Option<&str>, period: Option<&str>) -> String {
    match (price, period) {
        (Some(price), Some(period)) => format!("{} - {} / {}", name, price, period),
        (Some(price), None) => format!("{} - {}", name, price),
        (None, _) => name.to_string(),
    }
}

/// Submission status of an open form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// An open contact form: its data, field errors and status.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub data: ContactFormData,
    errors: FieldErrors,
    status: FormStatus,
}

impl ContactForm {
    /// A form filled in with `data`, not yet validated.
    pub fn with_data(data: ContactFormData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Open (or reopen) the form for a plan; status and errors are reset and
    /// whatever the user already typed is kept.
    pub fn open(&mut self, plan_label: impl Into<String>) {
        self.data.plan = plan_label.into();
        self.errors.clear();
        self.status = FormStatus::Idle;
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Editing a field clears that field's error.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FullName => self.data.full_name = value,
            Field::Phone => self.data.phone = value,
            Field::Email => self.data.email = value,
        }
        self.errors.remove(&field);
    }

    /// Validate and, when valid, move to `Submitting`.
    ///
    /// Returns the data to hand to the submitter, or `None` when validation
    /// failed (the errors are then available through [`errors`](Self::errors))
    /// or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactFormData> {
        if self.status == FormStatus::Submitting {
            return None;
        }
        match self.data.validate() {
            Ok(()) => {
                self.errors.clear();
                self.status = FormStatus::Submitting;
                Some(self.data.clone())
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Record the outcome of the in-flight submission.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if self.status == FormStatus::Submitting {
            self.status = if succeeded {
                FormStatus::Success
            } else {
                FormStatus::Error
            };
        }
    }

    /// Leave the error state and return to the filled-in form.
    pub fn retry(&mut self) {
        if self.status == FormStatus::Error {
            self.status = FormStatus::Idle;
        }
    }
}

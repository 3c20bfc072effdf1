//! Contact form validation and its transient status line.
//!
//! Validation is the terminal step: nothing is sent anywhere. A valid
//! submission shows a success message and resets the form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::event::Action;
use crate::schedule::{Pending, Task, TaskHandle, Timers};

/// Shown after a valid submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

static EMAIL: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Form control names read on submit.
pub const FIELD_NAMES: [&str; 4] = ["name", "email", "subject", "message"];

/// Values of the form's named fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// Collect the named fields from `(name, value)` form entries in document
    /// order. A repeated name keeps its last value, unknown names are ignored
    /// and absent ones stay empty.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut fields = Self::default();
        for (name, value) in entries {
            let slot = match name.as_str() {
                "name" => &mut fields.name,
                "email" => &mut fields.email,
                "subject" => &mut fields.subject,
                "message" => &mut fields.message,
                _ => continue,
            };
            *slot = value;
        }
        fields
    }
}

/// Why a submission was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Status styling, appended to the `form-status` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Success,
}

impl StatusKind {
    #[must_use]
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.as_ref().is_ok_and(|re| re.is_match(email))
}

/// Check required fields, then the email shape.
///
/// # Errors
///
/// [`ContactError::MissingFields`] if any field is empty,
/// [`ContactError::InvalidEmail`] if the email is malformed.
pub fn validate(fields: &ContactFields) -> Result<(), ContactError> {
    let required = [&fields.name, &fields.email, &fields.subject, &fields.message];
    if required.iter().any(|value| value.is_empty()) {
        return Err(ContactError::MissingFields);
    }
    if !is_valid_email(&fields.email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}

pub struct ContactForm {
    status_ms: u32,
    clear: Pending,
}

impl ContactForm {
    #[must_use]
    pub fn new(status_ms: u32) -> Self {
        Self { status_ms, clear: Pending::default() }
    }

    /// Validate a submission and show the outcome for `status_ms`.
    ///
    /// A newer status replaces the pending clear of an older one.
    pub fn submit(&mut self, fields: &ContactFields, timers: &mut Timers) -> Vec<Action> {
        let outcome = validate(fields);
        let (message, kind) = match &outcome {
            Ok(()) => (SUCCESS_MESSAGE.to_owned(), StatusKind::Success),
            Err(err) => (err.to_string(), StatusKind::Error),
        };
        log::debug!("contact: submit -> {}", kind.as_class());

        let handle = timers.allocate();
        let mut actions = Vec::new();
        actions.extend(self.clear.arm(handle).map(Action::Cancel));
        actions.push(Action::ShowFormStatus { message, kind });
        if outcome.is_ok() {
            actions.push(Action::ResetForm);
        }
        actions.push(Action::Schedule { handle, task: Task::ClearFormStatus, delay_ms: self.status_ms, repeat: false });
        actions
    }

    pub fn timer_fired(&mut self, handle: TaskHandle) -> Vec<Action> {
        if self.clear.settle(handle) {
            vec![Action::ClearFormStatus]
        } else {
            Vec::new()
        }
    }
}

use serde::Serialize;
use thiserror::Error;

use crate::notification::Severity;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<ContactField>),
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn validate(draft: &ContactDraft) -> Result<ContactSubmission, ValidationError> {
    let name = draft.name.trim();
    let email = draft.email.trim();
    let message = draft.message.trim();

    let missing: Vec<ContactField> = [
        (ContactField::Name, name),
        (ContactField::Email, email),
        (ContactField::Message, message),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormOutcome {
    pub severity: Severity,
    pub message: &'static str,
    pub clear_fields: bool,
    pub result: Result<ContactSubmission, ValidationError>,
}

/// Nothing is transmitted; the outcome only drives the notification and
/// whether the form resets.
pub fn submit(draft: &ContactDraft) -> FormOutcome {
    match validate(draft) {
        Ok(submission) => FormOutcome {
            severity: Severity::Success,
            message: SUCCESS_MESSAGE,
            clear_fields: true,
            result: Ok(submission),
        },
        Err(error) => FormOutcome {
            severity: Severity::Error,
            message: MISSING_FIELDS_MESSAGE,
            clear_fields: false,
            result: Err(error),
        },
    }
}

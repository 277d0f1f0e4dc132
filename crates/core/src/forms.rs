//! Form validation for the Contact and Customer Care pages.
//!
//! Each form is a raw, all-strings input struct with a `validate` method that
//! either produces a typed, trimmed value or a [`FieldErrors`] map holding
//! one message per invalid field.

use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Email, IssueType};

/// Minimum length of a contact message, after trimming.
pub const MIN_CONTACT_MESSAGE_CHARS: usize = 10;
/// Minimum length of an issue description, after trimming.
pub const MIN_ISSUE_DESCRIPTION_CHARS: usize = 20;

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any earlier one for the same field.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// The error for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Raw Contact page input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns all field errors at once if any field is invalid.
    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", "Name is required");
        }

        let email = if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
            None
        } else {
            Email::parse(&self.email)
                .inspect_err(|_| errors.insert("email", "Please enter a valid email address"))
                .ok()
        };

        let subject = self.subject.trim();
        if subject.is_empty() {
            errors.insert("subject", "Subject is required");
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.insert("message", "Message is required");
        } else if message.chars().count() < MIN_CONTACT_MESSAGE_CHARS {
            errors.insert(
                "message",
                format!("Message must be at least {MIN_CONTACT_MESSAGE_CHARS} characters"),
            );
        }

        match email {
            Some(email) => errors.into_result(|| ContactMessage {
                name: name.to_owned(),
                email,
                subject: subject.to_owned(),
                message: message.to_owned(),
            }),
            None => Err(errors),
        }
    }
}

/// Raw Customer Care issue report input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReportForm {
    pub issue_type: Option<IssueType>,
    pub order_id: String,
    pub description: String,
}

/// A validated issue report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReport {
    pub issue_type: IssueType,
    pub order_id: String,
    pub description: String,
}

impl IssueReportForm {
    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns all field errors at once if any field is invalid.
    pub fn validate(&self) -> Result<IssueReport, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.issue_type.is_none() {
            errors.insert("issue_type", "Please select an issue type");
        }

        let order_id = self.order_id.trim();
        if order_id.is_empty() {
            errors.insert("order_id", "Order ID is required");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.insert("description", "Description is required");
        } else if description.chars().count() < MIN_ISSUE_DESCRIPTION_CHARS {
            errors.insert(
                "description",
                format!("Description must be at least {MIN_ISSUE_DESCRIPTION_CHARS} characters"),
            );
        }

        match self.issue_type {
            Some(issue_type) => errors.into_result(|| IssueReport {
                issue_type,
                order_id: order_id.to_owned(),
                description: description.to_owned(),
            }),
            None => Err(errors),
        }
    }
}

/// Validate a live-chat message, returning it trimmed.
///
/// # Errors
///
/// Returns a `message` field error if the input is blank.
pub fn validate_chat_message(input: &str) -> Result<String, FieldErrors> {
    let message = input.trim();
    let mut errors = FieldErrors::new();
    if message.is_empty() {
        errors.insert("message", "Please enter a message");
    }
    errors.into_result(|| message.to_owned())
}

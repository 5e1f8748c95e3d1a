//! # Input Validation
//!
//! Two kinds of rules decide whether an operator's input is accepted:
//!
//! - **Predicates** ([`is_valid_identifier`], [`has_email_shape`], [`min_digits`],
//!   [`is_present`]): pure `&str -> bool` checks.
//! - **Field rules** ([`FieldRule`]): a prompt, optional length bounds and an optional
//!   predicate. [`FieldRule::check`] applies them in a fixed order and reports
//!   *why* a value was rejected, because the UI reacts differently to each reason:
//!
//! | Rejection | UI reaction |
//! |-----------|-------------|
//! | [`FieldRejection::TooShort`] / [`FieldRejection::TooLong`] | re-prompt |
//! | [`FieldRejection::Required`] | re-prompt |
//! | [`FieldRejection::Invalid`] | show the rule's error, offer to return to the menu |
//!
//! Length is measured in characters, not bytes, so `"José Antônio"` is 12 long.

mod fields;
mod identifier;

pub use fields::{has_email_shape, is_present, min_digits};
pub use identifier::{is_valid_identifier, normalize_identifier};

use std::fmt;

pub const DEFAULT_ERROR: &str = "Invalid input. Try again.";

/// Why [`FieldRule::check`] refused a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRejection {
    TooShort(usize),
    TooLong(usize),
    /// Empty value for a field without a predicate.
    Required,
    /// The predicate refused the value; carries the rule's error message.
    Invalid(String),
}

impl FieldRejection {
    /// Whether the operator should be offered a way back to the menu.
    pub fn offers_opt_out(&self) -> bool {
        matches!(self, FieldRejection::Invalid(_))
    }
}

impl fmt::Display for FieldRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRejection::TooShort(min) => {
                write!(f, "The value must have at least {} characters.", min)
            }
            FieldRejection::TooLong(max) => {
                write!(f, "The value must have at most {} characters.", max)
            }
            FieldRejection::Required => write!(f, "This field is required. Try again."),
            FieldRejection::Invalid(message) => write!(f, "{}", message),
        }
    }
}

/// Acceptance rule for one prompted field.
pub struct FieldRule<'a> {
    pub prompt: String,
    validator: Option<&'a dyn Fn(&str) -> bool>,
    error: String,
    min_len: Option<usize>,
    max_len: Option<usize>,
}

impl<'a> FieldRule<'a> {
    /// A required field with no format check.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            validator: None,
            error: DEFAULT_ERROR.to_string(),
            min_len: None,
            max_len: None,
        }
    }

    pub fn with_validator(
        mut self,
        validator: &'a dyn Fn(&str) -> bool,
        error: impl Into<String>,
    ) -> Self {
        self.validator = Some(validator);
        self.error = error.into();
        self
    }

    pub fn with_bounds(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = Some(min_len);
        self.max_len = Some(max_len);
        self
    }

    /// Length bounds first, then the predicate (or presence if there is none).
    pub fn check(&self, value: &str) -> Result<(), FieldRejection> {
        let len = value.chars().count();
        if let Some(min) = self.min_len {
            if len < min {
                return Err(FieldRejection::TooShort(min));
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                return Err(FieldRejection::TooLong(max));
            }
        }

        match self.validator {
            Some(validator) if validator(value) => Ok(()),
            Some(_) => Err(FieldRejection::Invalid(self.error.clone())),
            None if value.is_empty() => Err(FieldRejection::Required),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for FieldRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("prompt", &self.prompt)
            .field("has_validator", &self.validator.is_some())
            .field("error", &self.error)
            .field("min_len", &self.min_len)
            .field("max_len", &self.max_len)
            .finish()
    }
}

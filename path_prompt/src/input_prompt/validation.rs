// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Shown when a validator rejects an answer without saying why.
pub const DEFAULT_VALIDATION_ERROR_MSG: &str = "You must provide a valid value";

/// The verdict of a validator.
///
/// Validators can return anything that converts into this, so `bool`, `String`, and
/// `&str` all work. A string is always a rejection, and it carries the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid,
    InvalidWithMessage(String),
}

impl Validation {
    #[must_use]
    pub fn is_valid(&self) -> bool { matches!(self, Validation::Valid) }

    /// The message to show for a rejection, or [None] if the answer was accepted. An
    /// empty message falls back to [`DEFAULT_VALIDATION_ERROR_MSG`].
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            Validation::Valid => None,
            Validation::InvalidWithMessage(msg) if !msg.is_empty() => Some(msg.clone()),
            Validation::Invalid | Validation::InvalidWithMessage(_) => {
                Some(DEFAULT_VALIDATION_ERROR_MSG.to_string())
            }
        }
    }
}

impl From<bool> for Validation {
    fn from(is_valid: bool) -> Self {
        if is_valid {
            Validation::Valid
        } else {
            Validation::Invalid
        }
    }
}

impl From<String> for Validation {
    fn from(msg: String) -> Self { Validation::InvalidWithMessage(msg) }
}

impl From<&str> for Validation {
    fn from(msg: &str) -> Self { Validation::InvalidWithMessage(msg.to_string()) }
}

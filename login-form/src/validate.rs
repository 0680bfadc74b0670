//! Field validators. Pure functions, no I/O.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::text;

// `[0-9]` rather than `\d`: the regex crate's `\d` is Unicode-aware.
static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[0-9]{10}$").expect("valid regex"));
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", text::MOBILE_EMPTY)]
    MobileEmpty,
    #[error("{}", text::MOBILE_FORMAT)]
    MobileFormat,
    #[error("{}", text::CODE_EMPTY)]
    CodeEmpty,
    #[error("{}", text::CODE_FORMAT)]
    CodeFormat,
    #[error("{}", text::CODE_MISMATCH)]
    CodeMismatch,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MobileEmpty => text::MOBILE_EMPTY,
            ValidationError::MobileFormat => text::MOBILE_FORMAT,
            ValidationError::CodeEmpty => text::CODE_EMPTY,
            ValidationError::CodeFormat => text::CODE_FORMAT,
            ValidationError::CodeMismatch => text::CODE_MISMATCH,
        }
    }
}

/// Mainland China mobile number: 11 digits starting with `1`.
pub fn validate_mobile(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MobileEmpty);
    }
    if !MOBILE_RE.is_match(value) {
        return Err(ValidationError::MobileFormat);
    }
    Ok(())
}

/// Exactly six digits.
pub fn validate_code(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::CodeEmpty);
    }
    if !CODE_RE.is_match(value) {
        return Err(ValidationError::CodeFormat);
    }
    Ok(())
}

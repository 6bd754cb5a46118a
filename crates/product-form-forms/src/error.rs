//! Errors raised outside of field validation.
//!
//! Validation failures are not errors in this sense: they are collected into
//! a [`FormErrors`](crate::FormErrors) map and shown next to the controls.

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Unknown form field: {0}")]
	UnknownField(String),
	#[error("Unknown category: {0}")]
	UnknownCategory(String),
	#[error("Invalid product record: {0}")]
	InvalidRecord(#[from] serde_json::Error),
}

pub type FormResult<T> = Result<T, FormError>;

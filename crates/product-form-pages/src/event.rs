//! Normalized form events.
//!
//! Whatever control raised it, a change arrives at the form as a
//! [`FieldChange`]: the control's `name` and its raw string value. Submits
//! arrive as a [`SubmitEvent`] the form can mark as handled.

use std::cell::Cell;

/// A control changed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
	/// `name` attribute of the control that changed
	pub field_name: String,
	/// Value exactly as the control reported it
	pub raw_value: String,
}

impl FieldChange {
	pub fn new(field_name: impl Into<String>, raw_value: impl Into<String>) -> Self {
		Self {
			field_name: field_name.into(),
			raw_value: raw_value.into(),
		}
	}
}

/// A submit request.
///
/// Mirrors the part of a DOM submit event the form cares about: whether the
/// default browser submission has been suppressed.
#[derive(Debug, Default)]
pub struct SubmitEvent {
	default_prevented: Cell<bool>,
}

impl SubmitEvent {
	pub fn new() -> Self {
		Self::default()
	}

	/// Suppress the default submission behaviour.
	pub fn prevent_default(&self) {
		self.default_prevented.set(true);
	}

	pub fn default_prevented(&self) -> bool {
		self.default_prevented.get()
	}
}

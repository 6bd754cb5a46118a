//! The product form controller.
//!
//! [`ProductForm`] is the single writer of the form's state: the record being
//! edited, the error map from the last submit attempt and the submission
//! status. Each lives in a [`Signal`], so a mounted view re-renders whenever
//! one of them is written.
//!
//! ```text
//! Editing ──submit──▶ validate ──errors──▶ Rejected (errors shown) ──▶ Editing
//!                         │
//!                         └──no errors──▶ handler(record) ──▶ Editing
//! ```
//!
//! The record is never reset after a successful submit.

use crate::event::{FieldChange, SubmitEvent};
use crate::form::props::{FormSettings, ProductFormProps, SubmitFuture, SubmitHandler};
use crate::reactive::{ReadSignal, Signal};
use product_form_forms::{
	Category, FormErrors, FormMetadata, FormResult, ProductField, ProductRecord, validate,
};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Whether an asynchronous submission is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
	#[default]
	Idle,
	/// The submit control is disabled and submit attempts are ignored.
	Submitting,
}

/// Result of [`ProductForm::submit`].
#[derive(Debug)]
#[must_use]
pub enum SubmitOutcome {
	/// Validation failed; the handler was not called.
	Rejected(FormErrors),
	/// The synchronous handler ran to completion.
	Submitted,
	/// The asynchronous handler was called and its future must be driven.
	Pending(PendingSubmission),
	/// A submission was already in flight; nothing happened.
	Busy,
}

impl SubmitOutcome {
	/// Returns `true` if the handler was invoked.
	pub fn is_accepted(&self) -> bool {
		matches!(self, SubmitOutcome::Submitted | SubmitOutcome::Pending(_))
	}
}

/// Form controller for a [`ProductRecord`].
///
/// Cloning yields another handle to the same state.
///
/// # Examples
///
/// ```
/// use product_form_pages::form::{ProductForm, ProductFormProps, SubmitHandler, SubmitOutcome};
/// use product_form_pages::{FieldChange, SubmitEvent};
///
/// let form = ProductForm::new(ProductFormProps::new(SubmitHandler::new(|_| {})));
/// form.handle_change(&FieldChange::new("name", "Widget")).unwrap();
///
/// let outcome = form.submit(&SubmitEvent::new());
/// assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
/// assert!(form.errors().contains(product_form_forms::ProductField::Id));
/// ```
#[derive(Debug, Clone)]
pub struct ProductForm {
	record: Signal<ProductRecord>,
	errors: Signal<FormErrors>,
	status: Signal<SubmitStatus>,
	on_submit: SubmitHandler,
	settings: FormSettings,
}

impl ProductForm {
	pub fn new(props: ProductFormProps) -> Self {
		let record = props.initial_data.unwrap_or_default();
		if !record.category.is_empty()
			&& let Err(err) = record.category.parse::<Category>()
		{
			tracing::warn!(error = %err, "Initial product data has an unlisted category");
		}

		Self {
			record: Signal::new(record),
			errors: Signal::new(FormErrors::new()),
			status: Signal::new(SubmitStatus::Idle),
			on_submit: props.on_submit,
			settings: props.settings,
		}
	}

	/// Current record.
	pub fn record(&self) -> ProductRecord {
		self.record.get()
	}

	/// Errors from the last submit attempt.
	pub fn errors(&self) -> FormErrors {
		self.errors.get()
	}

	pub fn status(&self) -> SubmitStatus {
		self.status.get()
	}

	pub fn settings(&self) -> &FormSettings {
		&self.settings
	}

	pub fn record_signal(&self) -> ReadSignal<ProductRecord> {
		self.record.read_only()
	}

	pub fn errors_signal(&self) -> ReadSignal<FormErrors> {
		self.errors.read_only()
	}

	pub fn status_signal(&self) -> ReadSignal<SubmitStatus> {
		self.status.read_only()
	}

	/// Render-ready description of the current state.
	pub fn metadata(&self) -> FormMetadata {
		self.record
			.with(|record| self.errors.with(|errors| FormMetadata::from_record(record, errors)))
	}

	/// Store a raw control value into `field`.
	///
	/// Does not validate; errors from the last submit stay as they are.
	pub fn set_field(&self, field: ProductField, raw: &str) {
		tracing::debug!(field = field.name(), "Product form field changed");
		self.record.update(|record| record.apply_change(field, raw));
	}

	/// Apply a normalized change event.
	///
	/// # Errors
	///
	/// Returns [`FormError::UnknownField`](product_form_forms::FormError::UnknownField)
	/// if the event names a field the form does not have; the record is left
	/// untouched.
	pub fn handle_change(&self, change: &FieldChange) -> FormResult<()> {
		let field: ProductField = change.field_name.parse()?;
		self.set_field(field, &change.raw_value);
		Ok(())
	}

	/// Handle a submit request.
	///
	/// Always suppresses the event's default behaviour. While an asynchronous
	/// submission is in flight the attempt is ignored entirely. Otherwise the
	/// current record is validated, the error map is replaced with the result
	/// and, if it is empty, the handler receives a copy of the record.
	pub fn submit(&self, event: &SubmitEvent) -> SubmitOutcome {
		event.prevent_default();

		if self.status() == SubmitStatus::Submitting {
			tracing::warn!("Product form submit ignored: a submission is in flight");
			return SubmitOutcome::Busy;
		}

		let record = self.record();
		let errors = validate(&record);
		self.errors.set(errors.clone());

		if !errors.is_empty() {
			tracing::warn!(
				fields = ?errors.fields().map(ProductField::name).collect::<Vec<_>>(),
				"Product form rejected"
			);
			return SubmitOutcome::Rejected(errors);
		}

		tracing::info!(id = record.id, name = %record.name, "Product form submitted");
		match &self.on_submit {
			SubmitHandler::Sync(callback) => {
				callback.call(record);
				SubmitOutcome::Submitted
			}
			SubmitHandler::Async(callback) => {
				let guard = SubmittingGuard::engage(self.status.clone());
				SubmitOutcome::Pending(PendingSubmission {
					future: callback.call(record),
					guard: Some(guard),
				})
			}
		}
	}
}

/// Holds the form in [`SubmitStatus::Submitting`] until dropped.
struct SubmittingGuard {
	status: Signal<SubmitStatus>,
}

impl SubmittingGuard {
	fn engage(status: Signal<SubmitStatus>) -> Self {
		status.set(SubmitStatus::Submitting);
		Self { status }
	}
}

impl Drop for SubmittingGuard {
	fn drop(&mut self) {
		self.status.set(SubmitStatus::Idle);
	}
}

/// An asynchronous submission in flight.
///
/// Completes when the handler's future completes. The form returns to
/// [`SubmitStatus::Idle`] at that point, or when this value is dropped
/// before completion.
#[must_use = "the submission only progresses while this future is polled"]
pub struct PendingSubmission {
	future: SubmitFuture,
	guard: Option<SubmittingGuard>,
}

impl Future for PendingSubmission {
	type Output = ();

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
		match self.future.as_mut().poll(cx) {
			Poll::Ready(()) => {
				self.guard = None;
				Poll::Ready(())
			}
			Poll::Pending => Poll::Pending,
		}
	}
}

impl fmt::Debug for PendingSubmission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PendingSubmission")
			.field("finished", &self.guard.is_none())
			.finish()
	}
}

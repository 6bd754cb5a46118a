//! Construction parameters for the product form.

use crate::callback::Callback;
use product_form_forms::ProductRecord;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Future returned by an asynchronous submission handler.
pub type SubmitFuture = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Receives the validated record on a successful submit.
///
/// A synchronous handler runs to completion inside the submit call. An
/// asynchronous handler returns a future; the form stays in the submitting
/// state until that future completes.
#[derive(Debug, Clone)]
pub enum SubmitHandler {
	Sync(Callback<ProductRecord>),
	Async(Callback<ProductRecord, SubmitFuture>),
}

#[cfg(not(target_arch = "wasm32"))]
impl SubmitHandler {
	/// Wraps a synchronous handler.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(ProductRecord) + Send + Sync + 'static,
	{
		Self::Sync(Callback::new(f))
	}

	/// Wraps an asynchronous handler.
	///
	/// # Examples
	///
	/// ```
	/// use product_form_pages::form::SubmitHandler;
	///
	/// let handler = SubmitHandler::new_async(|record| async move {
	///     let _ = record.name;
	/// });
	/// assert!(handler.is_async());
	/// ```
	pub fn new_async<F, Fut>(f: F) -> Self
	where
		F: Fn(ProductRecord) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = ()> + 'static,
	{
		Self::Async(Callback::new(move |record| {
			Box::pin(f(record)) as SubmitFuture
		}))
	}
}

#[cfg(target_arch = "wasm32")]
impl SubmitHandler {
	/// Wraps a synchronous handler.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(ProductRecord) + 'static,
	{
		Self::Sync(Callback::new(f))
	}

	/// Wraps an asynchronous handler.
	pub fn new_async<F, Fut>(f: F) -> Self
	where
		F: Fn(ProductRecord) -> Fut + 'static,
		Fut: Future<Output = ()> + 'static,
	{
		Self::Async(Callback::new(move |record| {
			Box::pin(f(record)) as SubmitFuture
		}))
	}
}

impl SubmitHandler {
	pub fn is_async(&self) -> bool {
		matches!(self, SubmitHandler::Async(_))
	}
}

impl From<Callback<ProductRecord>> for SubmitHandler {
	fn from(callback: Callback<ProductRecord>) -> Self {
		SubmitHandler::Sync(callback)
	}
}

impl From<Callback<ProductRecord, SubmitFuture>> for SubmitHandler {
	fn from(callback: Callback<ProductRecord, SubmitFuture>) -> Self {
		SubmitHandler::Async(callback)
	}
}

/// Presentation settings.
///
/// Every key is optional when deserializing, so a settings file only needs
/// to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
	/// Heading above the form
	pub title: String,
	pub submit_label: String,
	/// Submit button text while an asynchronous submission is in flight
	pub submitting_label: String,
	/// Disabled first option of the category select
	pub category_placeholder: String,
	/// `id` of the `<form>` element
	pub form_id: String,
}

impl Default for FormSettings {
	fn default() -> Self {
		Self {
			title: "Add Product".to_string(),
			submit_label: "Submit".to_string(),
			submitting_label: "Submitting...".to_string(),
			category_placeholder: "Select a category".to_string(),
			form_id: "product-form".to_string(),
		}
	}
}

/// Everything [`ProductForm::new`](crate::form::ProductForm::new) needs.
///
/// # Examples
///
/// ```
/// use product_form_pages::form::{ProductFormProps, SubmitHandler};
/// use product_form_forms::ProductRecord;
///
/// let props = ProductFormProps::new(SubmitHandler::new(|_record| {}))
///     .initial_data(ProductRecord { id: 7, ..ProductRecord::default() });
/// assert_eq!(props.initial_data.as_ref().map(|r| r.id), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct ProductFormProps {
	pub on_submit: SubmitHandler,
	/// Record to edit; a blank record when `None`
	pub initial_data: Option<ProductRecord>,
	pub settings: FormSettings,
}

impl ProductFormProps {
	pub fn new(on_submit: impl Into<SubmitHandler>) -> Self {
		Self {
			on_submit: on_submit.into(),
			initial_data: None,
			settings: FormSettings::default(),
		}
	}

	pub fn initial_data(mut self, record: ProductRecord) -> Self {
		self.initial_data = Some(record);
		self
	}

	pub fn settings(mut self, settings: FormSettings) -> Self {
		self.settings = settings;
		self
	}
}

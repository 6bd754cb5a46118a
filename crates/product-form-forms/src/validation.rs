//! Client-side validation of a [`ProductRecord`].
//!
//! Every rule runs on every pass, so a single submit attempt reports all
//! failing fields at once. Validation is a pure function of the record; the
//! caller decides what to do with the resulting [`FormErrors`].

use crate::field::ProductField;
use crate::record::ProductRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// A failed validation rule.
///
/// The `Display` text is the message shown beneath the offending control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("Product ID is required.")]
	IdRequired,
	#[error("Product Name is required.")]
	NameRequired,
	#[error("Description is required.")]
	DescriptionRequired,
	#[error("Category is required.")]
	CategoryRequired,
	#[error("Expiration Date is required.")]
	ExpireDateRequired,
	#[error("Price must be greater than 0.")]
	PriceNotPositive,
	#[error("Quantity cannot be negative.")]
	QuantityNegative,
}

impl ValidationError {
	/// The field this error is reported against.
	pub fn field(self) -> ProductField {
		match self {
			ValidationError::IdRequired => ProductField::Id,
			ValidationError::NameRequired => ProductField::Name,
			ValidationError::DescriptionRequired => ProductField::Description,
			ValidationError::CategoryRequired => ProductField::Category,
			ValidationError::ExpireDateRequired => ProductField::ExpireDate,
			ValidationError::PriceNotPositive => ProductField::Price,
			ValidationError::QuantityNegative => ProductField::Quantity,
		}
	}
}

/// Per-field validation failures from one validation pass.
///
/// Only failing fields are present. Iteration follows form order.
/// Serializes as a `{ "fieldName": "message" }` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
	errors: BTreeMap<ProductField, ValidationError>,
}

impl FormErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}

	pub fn contains(&self, field: ProductField) -> bool {
		self.errors.contains_key(&field)
	}

	pub fn get(&self, field: ProductField) -> Option<ValidationError> {
		self.errors.get(&field).copied()
	}

	/// Message to display beneath `field`, if it failed.
	pub fn message(&self, field: ProductField) -> Option<String> {
		self.get(field).map(|error| error.to_string())
	}

	pub fn fields(&self) -> impl Iterator<Item = ProductField> + '_ {
		self.errors.keys().copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = (ProductField, ValidationError)> + '_ {
		self.errors.iter().map(|(field, error)| (*field, *error))
	}

	fn push(&mut self, error: ValidationError) {
		self.errors.insert(error.field(), error);
	}
}

impl FromIterator<ValidationError> for FormErrors {
	fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
		let mut errors = FormErrors::new();
		for error in iter {
			errors.push(error);
		}
		errors
	}
}

impl Serialize for FormErrors {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.errors.len()))?;
		for (field, error) in &self.errors {
			map.serialize_entry(field.name(), &error.to_string())?;
		}
		map.end()
	}
}

/// Validate a record.
///
/// # Examples
///
/// ```
/// use product_form_forms::{ProductField, ProductRecord, ValidationError, validate};
///
/// let mut record = ProductRecord::default();
/// record.price = -1.0;
///
/// let errors = validate(&record);
/// assert_eq!(errors.len(), 6);
/// assert_eq!(errors.get(ProductField::Price), Some(ValidationError::PriceNotPositive));
/// assert!(!errors.contains(ProductField::Quantity));
/// ```
pub fn validate(record: &ProductRecord) -> FormErrors {
	let mut errors = FormErrors::new();

	if record.id == 0 {
		errors.push(ValidationError::IdRequired);
	}
	if record.name.is_empty() {
		errors.push(ValidationError::NameRequired);
	}
	if record.description.is_empty() {
		errors.push(ValidationError::DescriptionRequired);
	}
	if record.category.is_empty() {
		errors.push(ValidationError::CategoryRequired);
	}
	if record.expire_date.is_empty() {
		errors.push(ValidationError::ExpireDateRequired);
	}
	if record.price.is_nan() || record.price <= 0.0 {
		errors.push(ValidationError::PriceNotPositive);
	}
	if record.quantity < 0 {
		errors.push(ValidationError::QuantityNegative);
	}

	errors
}

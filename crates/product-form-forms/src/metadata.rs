//! Serializable description of the product form.
//!
//! Renderers work from [`FormMetadata`] rather than from the record and the
//! error map directly: it is plain data, so the same description can be
//! rendered on the server or shipped to a client as JSON.
//!
//! ```
//! use product_form_forms::{FormMetadata, ProductRecord, validate};
//!
//! let record = ProductRecord::default();
//! let metadata = FormMetadata::from_record(&record, &validate(&record));
//!
//! let json = serde_json::to_string(&metadata).unwrap();
//! assert!(json.contains("\"expireDate\""));
//! ```

use crate::field::{Category, ProductField, Widget};
use crate::record::ProductRecord;
use crate::validation::FormErrors;
use serde::{Deserialize, Serialize};

/// One `<option>` of a select widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
	pub value: String,
	pub label: String,
}

/// Everything needed to render a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
	/// Control name (`id` / `name` attribute)
	pub name: String,
	pub label: String,
	pub required: bool,
	pub widget: Widget,
	pub placeholder: Option<String>,
	/// Options for select widgets, empty otherwise
	#[serde(default)]
	pub choices: Vec<Choice>,
	/// Current display value
	pub value: String,
	/// Validation message, if the field failed the last validation pass
	pub error: Option<String>,
}

impl FieldMetadata {
	pub fn from_field(field: ProductField, record: &ProductRecord, errors: &FormErrors) -> Self {
		let choices = match field.widget() {
			Widget::Select => category_choices(&record.category),
			_ => Vec::new(),
		};

		Self {
			name: field.name().to_string(),
			label: field.label().to_string(),
			required: true,
			widget: field.widget(),
			placeholder: field.placeholder().map(str::to_string),
			choices,
			value: record.display_value(field),
			error: errors.message(field),
		}
	}

	pub fn has_error(&self) -> bool {
		self.error.is_some()
	}
}

/// The five categories, followed by `current` when it is none of them so the
/// select can still show the stored value.
fn category_choices(current: &str) -> Vec<Choice> {
	let mut choices: Vec<Choice> = Category::ALL
		.into_iter()
		.map(|category| Choice {
			value: category.value().to_string(),
			label: category.label().to_string(),
		})
		.collect();

	if !current.is_empty() && current.parse::<Category>().is_err() {
		choices.push(Choice {
			value: current.to_string(),
			label: current.to_string(),
		});
	}
	choices
}

/// Form-level metadata: the fields in form order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormMetadata {
	pub fields: Vec<FieldMetadata>,
}

impl FormMetadata {
	pub fn from_record(record: &ProductRecord, errors: &FormErrors) -> Self {
		Self {
			fields: ProductField::ALL
				.into_iter()
				.map(|field| FieldMetadata::from_field(field, record, errors))
				.collect(),
		}
	}

	pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
		self.fields.iter().find(|field| field.name == name)
	}

	pub fn is_valid(&self) -> bool {
		self.fields.iter().all(|field| !field.has_error())
	}
}

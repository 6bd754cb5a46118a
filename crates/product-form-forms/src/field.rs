//! Field descriptors for the product form.

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven inputs of the product form.
///
/// Variants are declared in form order, so the derived `Ord` sorts fields the
/// way they appear on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductField {
	Id,
	Name,
	Description,
	Category,
	ExpireDate,
	Price,
	Quantity,
}

impl ProductField {
	/// All fields in form order.
	pub const ALL: [ProductField; 7] = [
		ProductField::Id,
		ProductField::Name,
		ProductField::Description,
		ProductField::Category,
		ProductField::ExpireDate,
		ProductField::Price,
		ProductField::Quantity,
	];

	/// Control name, also used as the `id` and `name` HTML attributes.
	///
	/// # Examples
	///
	/// ```
	/// use product_form_forms::ProductField;
	///
	/// assert_eq!(ProductField::ExpireDate.name(), "expireDate");
	/// assert_eq!(ProductField::Id.name(), "id");
	/// ```
	pub fn name(self) -> &'static str {
		match self {
			ProductField::Id => "id",
			ProductField::Name => "name",
			ProductField::Description => "description",
			ProductField::Category => "category",
			ProductField::ExpireDate => "expireDate",
			ProductField::Price => "price",
			ProductField::Quantity => "quantity",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			ProductField::Id => "Product ID",
			ProductField::Name => "Product Name",
			ProductField::Description => "Description",
			ProductField::Category => "Category",
			ProductField::ExpireDate => "Expiration Date",
			ProductField::Price => "Price",
			ProductField::Quantity => "Quantity",
		}
	}

	pub fn placeholder(self) -> Option<&'static str> {
		match self {
			ProductField::Id => Some("Enter Product ID"),
			ProductField::Name => Some("Enter Product Name"),
			ProductField::Description => Some("Enter Product Description"),
			ProductField::Price => Some("Enter Product Price"),
			ProductField::Quantity => Some("Enter Product Quantity"),
			ProductField::Category | ProductField::ExpireDate => None,
		}
	}

	pub fn widget(self) -> Widget {
		match self {
			ProductField::Id => Widget::NumberInput { min: None },
			ProductField::Name => Widget::TextInput,
			ProductField::Description => Widget::Textarea { rows: 4 },
			ProductField::Category => Widget::Select,
			ProductField::ExpireDate => Widget::DateInput,
			ProductField::Price | ProductField::Quantity => Widget::NumberInput { min: Some(0) },
		}
	}

	/// Whether raw input for this field is coerced to a number.
	pub fn is_numeric(self) -> bool {
		matches!(
			self,
			ProductField::Id | ProductField::Price | ProductField::Quantity
		)
	}
}

impl fmt::Display for ProductField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for ProductField {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ProductField::ALL
			.into_iter()
			.find(|field| field.name() == s)
			.ok_or_else(|| FormError::UnknownField(s.to_string()))
	}
}

/// Input control used to edit a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
	NumberInput { min: Option<i64> },
	TextInput,
	Textarea { rows: u32 },
	Select,
	DateInput,
}

impl Widget {
	/// The `type` attribute for `<input>` based widgets.
	///
	/// Returns `None` for widgets rendered with their own element
	/// (`<textarea>`, `<select>`).
	pub fn input_type(self) -> Option<&'static str> {
		match self {
			Widget::NumberInput { .. } => Some("number"),
			Widget::TextInput => Some("text"),
			Widget::DateInput => Some("date"),
			Widget::Textarea { .. } | Widget::Select => None,
		}
	}
}

/// Product categories offered by the category select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
	Electronics,
	Fashion,
	Home,
	Books,
	Foods,
}

impl Category {
	pub const ALL: [Category; 5] = [
		Category::Electronics,
		Category::Fashion,
		Category::Home,
		Category::Books,
		Category::Foods,
	];

	/// Value stored in [`ProductRecord::category`](crate::ProductRecord::category).
	pub fn value(self) -> &'static str {
		match self {
			Category::Electronics => "electronics",
			Category::Fashion => "fashion",
			Category::Home => "home",
			Category::Books => "books",
			Category::Foods => "foods",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Category::Electronics => "Electronics",
			Category::Fashion => "Fashion",
			Category::Home => "Home",
			Category::Books => "Books",
			Category::Foods => "Foods",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.value())
	}
}

impl FromStr for Category {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Category::ALL
			.into_iter()
			.find(|category| category.value() == s)
			.ok_or_else(|| FormError::UnknownCategory(s.to_string()))
	}
}

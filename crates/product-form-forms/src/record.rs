use crate::coerce::{coerce_integer, coerce_number};
use crate::error::FormResult;
use crate::field::ProductField;
use serde::{Deserialize, Serialize};

/// Product data collected by the form.
///
/// `Default` is the zero record a blank form starts from: numbers are `0`
/// and strings are empty. Every field is required when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
	pub id: i64,
	pub name: String,
	pub description: String,
	pub category: String,
	/// ISO `YYYY-MM-DD` date as produced by a date control.
	pub expire_date: String,
	pub price: f64,
	pub quantity: i64,
}

impl ProductRecord {
	/// Parse a record from its JSON form.
	///
	/// # Examples
	///
	/// ```
	/// use product_form_forms::ProductRecord;
	///
	/// let record = ProductRecord::from_json(
	///     r#"{"id":7,"name":"X","description":"Y","category":"books",
	///         "expireDate":"2025-01-01","price":10,"quantity":2}"#,
	/// ).unwrap();
	/// assert_eq!(record.id, 7);
	/// assert_eq!(record.expire_date, "2025-01-01");
	///
	/// assert!(ProductRecord::from_json(r#"{"id":7}"#).is_err());
	/// ```
	pub fn from_json(json: &str) -> FormResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Store a raw control value into `field`.
	///
	/// Numeric fields are coerced (see [`coerce_number`]); text fields are
	/// stored verbatim. No other field is touched.
	pub fn apply_change(&mut self, field: ProductField, raw: &str) {
		match field {
			ProductField::Id => self.id = coerce_integer(raw),
			ProductField::Name => self.name = raw.to_string(),
			ProductField::Description => self.description = raw.to_string(),
			ProductField::Category => self.category = raw.to_string(),
			ProductField::ExpireDate => self.expire_date = raw.to_string(),
			ProductField::Price => self.price = coerce_number(raw),
			ProductField::Quantity => self.quantity = coerce_integer(raw),
		}
	}

	/// Value shown in the control bound to `field`.
	///
	/// Numeric fields holding zero display as an empty control rather than a
	/// literal `0`.
	///
	/// # Examples
	///
	/// ```
	/// use product_form_forms::{ProductField, ProductRecord};
	///
	/// let mut record = ProductRecord::default();
	/// assert_eq!(record.display_value(ProductField::Price), "");
	///
	/// record.price = 12.5;
	/// record.quantity = 3;
	/// assert_eq!(record.display_value(ProductField::Price), "12.5");
	/// assert_eq!(record.display_value(ProductField::Quantity), "3");
	/// ```
	pub fn display_value(&self, field: ProductField) -> String {
		match field {
			ProductField::Id => display_integer(self.id),
			ProductField::Name => self.name.clone(),
			ProductField::Description => self.description.clone(),
			ProductField::Category => self.category.clone(),
			ProductField::ExpireDate => self.expire_date.clone(),
			ProductField::Price => {
				if self.price == 0.0 {
					String::new()
				} else {
					self.price.to_string()
				}
			}
			ProductField::Quantity => display_integer(self.quantity),
		}
	}
}

fn display_integer(value: i64) -> String {
	if value == 0 {
		String::new()
	} else {
		value.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FormError;
	use rstest::{fixture, rstest};

	#[fixture]
	fn filled() -> ProductRecord {
		ProductRecord {
			id: 7,
			name: "X".to_string(),
			description: "Y".to_string(),
			category: "books".to_string(),
			expire_date: "2025-01-01".to_string(),
			price: 10.0,
			quantity: 2,
		}
	}

	#[rstest]
	fn test_default_is_zero_record() {
		let record = ProductRecord::default();
		assert_eq!(record.id, 0);
		assert_eq!(record.price, 0.0);
		assert_eq!(record.quantity, 0);
		assert!(record.name.is_empty());
		assert!(record.description.is_empty());
		assert!(record.category.is_empty());
		assert!(record.expire_date.is_empty());
	}

	#[rstest]
	#[case("", 0.0)]
	#[case("12.5", 12.5)]
	#[case("abc", 0.0)]
	fn test_price_change_is_coerced(
		filled: ProductRecord,
		#[case] raw: &str,
		#[case] expected: f64,
	) {
		let mut record = filled.clone();
		record.apply_change(ProductField::Price, raw);
		assert_eq!(record.price, expected);

		record.price = filled.price;
		assert_eq!(record, filled);
	}

	#[rstest]
	fn test_text_change_is_verbatim(filled: ProductRecord) {
		let mut record = filled.clone();
		record.apply_change(ProductField::Name, "  Widget <b> ");
		assert_eq!(record.name, "  Widget <b> ");
		assert_eq!(record.description, filled.description);
		assert_eq!(record.price, filled.price);
	}

	#[rstest]
	fn test_integer_fields_are_coerced(mut filled: ProductRecord) {
		filled.apply_change(ProductField::Id, "15");
		filled.apply_change(ProductField::Quantity, "-2");
		assert_eq!(filled.id, 15);
		assert_eq!(filled.quantity, -2);

		filled.apply_change(ProductField::Id, "");
		assert_eq!(filled.id, 0);
	}

	#[rstest]
	fn test_json_round_trip_uses_camel_case(filled: ProductRecord) {
		let json = serde_json::to_value(&filled).unwrap();
		assert_eq!(json["expireDate"], "2025-01-01");
		assert!(json.get("expire_date").is_none());

		let back: ProductRecord = serde_json::from_value(json).unwrap();
		assert_eq!(back, filled);
	}

	#[rstest]
	fn test_missing_field_is_rejected() {
		let err = ProductRecord::from_json(
			r#"{"id":1,"name":"a","description":"b","category":"home","price":1,"quantity":1}"#,
		)
		.unwrap_err();
		assert!(matches!(err, FormError::InvalidRecord(_)));
		assert!(err.to_string().contains("expireDate"));
	}

	#[rstest]
	fn test_display_values(filled: ProductRecord) {
		assert_eq!(filled.display_value(ProductField::Id), "7");
		assert_eq!(filled.display_value(ProductField::Price), "10");
		assert_eq!(filled.display_value(ProductField::Category), "books");

		let blank = ProductRecord::default();
		for field in [ProductField::Id, ProductField::Price, ProductField::Quantity] {
			assert_eq!(blank.display_value(field), "");
		}
	}
}

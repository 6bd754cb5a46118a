//! Numeric coercion for raw control values.
//!
//! Number controls hand over whatever text the user typed. The form never
//! rejects that text: anything that does not parse as a finite number
//! becomes zero, and the validation pass decides whether zero is acceptable.

/// Coerce a raw control value into a number.
///
/// Surrounding whitespace is ignored. Empty input, unparsable input and
/// non-finite results (`NaN`, `inf`) all coerce to `0.0`.
///
/// # Examples
///
/// ```
/// use product_form_forms::coerce_number;
///
/// assert_eq!(coerce_number("12.5"), 12.5);
/// assert_eq!(coerce_number(" 3 "), 3.0);
/// assert_eq!(coerce_number(""), 0.0);
/// assert_eq!(coerce_number("abc"), 0.0);
/// ```
pub fn coerce_number(raw: &str) -> f64 {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return 0.0;
	}

	match trimmed.parse::<f64>() {
		Ok(value) if value.is_finite() => value,
		_ => 0.0,
	}
}

/// Coerce a raw control value into a whole number.
///
/// Uses [`coerce_number`] and rounds fractions away from zero, so a nonzero
/// entry never becomes `0` and a negative entry stays negative. Values beyond
/// the `i64` range saturate.
///
/// # Examples
///
/// ```
/// use product_form_forms::coerce_integer;
///
/// assert_eq!(coerce_integer("7"), 7);
/// assert_eq!(coerce_integer("12.9"), 13);
/// assert_eq!(coerce_integer("0.5"), 1);
/// assert_eq!(coerce_integer("-0.5"), -1);
/// assert_eq!(coerce_integer("seven"), 0);
/// ```
pub fn coerce_integer(raw: &str) -> i64 {
	let value = coerce_number(raw);
	if value < 0.0 {
		value.floor() as i64
	} else {
		value.ceil() as i64
	}
}

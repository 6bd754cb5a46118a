//! Product form processing and validation
//!
//! This crate holds everything about the product form that does not depend on
//! a rendering target:
//! - The [`ProductRecord`] being edited and its zero-valued default
//! - Field descriptors ([`ProductField`], [`Widget`], [`Category`])
//! - Raw input coercion for numeric controls
//! - The validation pass producing a [`FormErrors`] map
//! - Serializable [`FormMetadata`] describing the form for renderers
//!
//! ## Example
//!
//! ```
//! use product_form_forms::{ProductField, ProductRecord, validate};
//!
//! let mut record = ProductRecord::default();
//! record.apply_change(ProductField::Price, "12.5");
//! assert_eq!(record.price, 12.5);
//!
//! let errors = validate(&record);
//! assert!(errors.contains(ProductField::Name));
//! assert!(!errors.contains(ProductField::Price));
//! ```

pub mod coerce;
pub mod error;
pub mod field;
pub mod metadata;
pub mod record;
pub mod validation;

pub use coerce::{coerce_integer, coerce_number};
pub use error::{FormError, FormResult};
pub use field::{Category, ProductField, Widget};
pub use metadata::{Choice, FieldMetadata, FormMetadata};
pub use record::ProductRecord;
pub use validation::{FormErrors, ValidationError, validate};

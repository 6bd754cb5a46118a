//! Product Form Pages - reactive product form component
//!
//! Renders the product form, keeps its state in observable cells and runs
//! the submit flow. The same component renders on the server to an HTML
//! string and, on `wasm32`, mounts into the browser.
//!
//! ## Architecture
//!
//! - [`reactive`]: Observable state cells ([`Signal`])
//! - [`callback`]: Cloneable callbacks handed in by the host
//! - [`event`]: Normalized change and submit events
//! - [`view`]: View tree with escaped HTML rendering
//! - [`component`]: The [`Component`] trait
//! - [`form`](mod@form): The product form controller and its markup
//! - [`ssr`]: Server-side rendering to complete documents
//! - `mount`: Browser mounting (`wasm32` only)
//!
//! ## Example
//!
//! ```
//! use product_form_pages::{FieldChange, SsrRenderer, SubmitEvent};
//! use product_form_pages::form::{ProductForm, ProductFormProps, SubmitHandler, SubmitOutcome};
//!
//! let form = ProductForm::new(ProductFormProps::new(SubmitHandler::new(|record| {
//!     assert_eq!(record.price, 12.5);
//! })));
//!
//! for (name, value) in [
//!     ("id", "1"),
//!     ("name", "Widget"),
//!     ("description", "A widget"),
//!     ("category", "home"),
//!     ("expireDate", "2030-01-01"),
//!     ("price", "12.5"),
//!     ("quantity", "3"),
//! ] {
//!     form.handle_change(&FieldChange::new(name, value)).unwrap();
//! }
//!
//! assert!(matches!(form.submit(&SubmitEvent::new()), SubmitOutcome::Submitted));
//!
//! let html = SsrRenderer::new().render(&form);
//! assert!(html.contains("value=\"Widget\""));
//! ```

pub mod callback;
pub mod component;
pub mod event;
pub mod form;
#[cfg(target_arch = "wasm32")]
pub mod mount;
pub mod reactive;
pub mod ssr;
pub mod view;

pub use callback::Callback;
pub use component::Component;
pub use event::{FieldChange, SubmitEvent};
pub use form::{
	FormSettings, PendingSubmission, ProductForm, ProductFormProps, SubmitHandler, SubmitOutcome,
	SubmitStatus,
};
#[cfg(target_arch = "wasm32")]
pub use mount::{MountError, MountHandle, mount, mount_to_id};
pub use reactive::{ReadSignal, Signal, Subscription};
pub use ssr::{SsrOptions, SsrRenderer};
pub use view::{ElementView, IntoView, View};

pub use product_form_forms::{FormErrors, ProductField, ProductRecord};

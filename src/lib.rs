//! # Product Form
//!
//! A product data entry form: seven labelled controls bound to a
//! [`ProductRecord`](forms::ProductRecord), client-side validation on
//! submit, and a caller-supplied submission handler that receives the
//! validated record.
//!
//! ## Crates
//!
//! - [`forms`]: record model, raw input coercion, validation, form metadata
//! - [`pages`]: reactive form controller, HTML rendering, browser mounting
//!
//! This crate adds the [`HostPage`] that wires the form to a handler, TOML
//! [`settings`] and [`logging`] initialisation.
//!
//! ## Example
//!
//! ```
//! use product_form::{AppSettings, HostPage, init_logging};
//!
//! let settings = AppSettings::from_toml_str(r#"
//!     [page]
//!     title = "Inventory"
//! "#).unwrap();
//! init_logging(&settings.logging);
//!
//! let page = HostPage::new(None, &settings);
//! let html = page.render_document();
//! assert!(html.contains("<title>Inventory</title>"));
//! assert!(html.contains("Select a category"));
//! ```

pub mod host;
pub mod logging;
pub mod settings;

pub use product_form_forms as forms;
pub use product_form_pages as pages;

pub use host::HostPage;
pub use logging::init_logging;
pub use settings::{AppSettings, LoggingSettings, PageSettings, SettingsError};

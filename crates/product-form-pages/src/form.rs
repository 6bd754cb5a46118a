//! The product form component.
//!
//! ## Architecture
//!
//! ```text
//!  host                      ProductForm                    view
//! ┌──────────────┐  props   ┌────────────────────┐ render  ┌─────────┐
//! │ on_submit    │────────▶│ record: Signal      │───────▶│ <form>  │
//! │ initial_data │         │ errors: Signal      │         │         │
//! └──────────────┘         │ status: Signal      │◀───────│ events  │
//!        ▲                  └────────────────────┘ change/ └─────────┘
//!        └──── record ─────────────┘             submit
//! ```
//!
//! - [`props`]: construction parameters and presentation settings
//! - [`controller`]: state, field changes and the submit flow
//! - [`rendering`]: markup for the current state

pub mod controller;
pub mod props;
pub mod rendering;

pub use controller::{PendingSubmission, ProductForm, SubmitOutcome, SubmitStatus};
pub use props::{FormSettings, ProductFormProps, SubmitFuture, SubmitHandler};
pub use rendering::{render_field, render_form};

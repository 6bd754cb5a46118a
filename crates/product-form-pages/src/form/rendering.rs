//! Markup for the product form.
//!
//! Rendering is a pure function of [`FormMetadata`], the presentation
//! settings and the submission status. The produced structure:
//!
//! ```text
//! form#product-form.product-form
//! ├── h1.form-title
//! ├── div.form-field            (one per field, in form order)
//! │   ├── label[for] "<label> " span.required "*"
//! │   ├── input | textarea | select   (.form-control, .is-invalid on error)
//! │   └── p.field-error#<name>-error  (only when the field has an error)
//! └── div.form-actions
//!     └── button[type=submit]   (disabled while submitting)
//! ```

use crate::component::Component;
use crate::form::controller::{ProductForm, SubmitStatus};
use crate::form::props::FormSettings;
use crate::view::{ElementView, IntoView, View};
use product_form_forms::{FieldMetadata, FormMetadata, Widget};

/// Render the whole form.
pub fn render_form(metadata: &FormMetadata, settings: &FormSettings, status: SubmitStatus) -> View {
	let submitting = status == SubmitStatus::Submitting;
	let button_label = if submitting {
		settings.submitting_label.clone()
	} else {
		settings.submit_label.clone()
	};

	ElementView::new("form")
		.id(settings.form_id.clone())
		.class("product-form")
		.attr("aria-busy", if submitting { "true" } else { "false" })
		.child(
			ElementView::new("h1")
				.class("form-title")
				.child(settings.title.clone()),
		)
		.children(
			metadata
				.fields
				.iter()
				.map(|field| render_field(field, settings)),
		)
		.child(
			ElementView::new("div").class("form-actions").child(
				ElementView::new("button")
					.attr("type", "submit")
					.class("submit-button")
					.bool_attr("disabled", submitting)
					.child(button_label),
			),
		)
		.into_view()
}

/// Render one labelled control and its error message.
pub fn render_field(field: &FieldMetadata, settings: &FormSettings) -> View {
	let label = ElementView::new("label")
		.attr("for", field.name.clone())
		.child(format!("{} ", field.label))
		.child(
			ElementView::new("span")
				.class("required")
				.attr("aria-hidden", "true")
				.child("*"),
		);

	let error = field.error.clone().map(|message| {
		ElementView::new("p")
			.id(error_id(field))
			.class("field-error")
			.attr("role", "alert")
			.child(message)
	});

	ElementView::new("div")
		.class("form-field")
		.child(label)
		.child(render_control(field, settings))
		.child(error)
		.into_view()
}

fn render_control(field: &FieldMetadata, settings: &FormSettings) -> ElementView {
	let control = match &field.widget {
		Widget::Textarea { rows } => ElementView::new("textarea")
			.attr("rows", rows.to_string())
			.child(field.value.clone()),
		Widget::Select => render_select(field, settings),
		widget @ (Widget::NumberInput { .. } | Widget::TextInput | Widget::DateInput) => {
			let input = ElementView::new("input")
				.attr("type", widget.input_type().unwrap_or("text"))
				.attr("value", field.value.clone());
			match widget {
				Widget::NumberInput { min } => input.opt_attr("min", min.map(|m| m.to_string())),
				_ => input,
			}
		}
	};

	let control = control
		.id(field.name.clone())
		.attr("name", field.name.clone())
		.class(if field.has_error() {
			"form-control is-invalid"
		} else {
			"form-control"
		})
		.opt_attr("placeholder", field.placeholder.clone())
		.bool_attr("required", field.required);

	if field.has_error() {
		control
			.attr("aria-invalid", "true")
			.attr("aria-describedby", error_id(field))
	} else {
		control
	}
}

fn render_select(field: &FieldMetadata, settings: &FormSettings) -> ElementView {
	let placeholder = ElementView::new("option")
		.attr("value", "")
		.bool_attr("disabled", true)
		.bool_attr("selected", field.value.is_empty())
		.child(settings.category_placeholder.clone());

	ElementView::new("select").child(placeholder).children(
		field.choices.iter().map(|choice| {
			ElementView::new("option")
				.attr("value", choice.value.clone())
				.bool_attr("selected", choice.value == field.value)
				.child(choice.label.clone())
		}),
	)
}

fn error_id(field: &FieldMetadata) -> String {
	format!("{}-error", field.name)
}

impl ProductForm {
	/// Render the current state.
	pub fn view(&self) -> View {
		render_form(&self.metadata(), self.settings(), self.status())
	}
}

impl Component for ProductForm {
	fn render(&self) -> View {
		self.view()
	}

	fn name() -> &'static str {
		"ProductForm"
	}
}

//! The host page.
//!
//! Composes the product form with a submission handler and renders the
//! complete document. The default handler logs the submitted record.

use crate::settings::AppSettings;
use product_form_pages::form::{ProductForm, ProductFormProps, SubmitHandler};
use product_form_pages::{ProductRecord, SsrOptions, SsrRenderer};

/// Page hosting a single product form.
#[derive(Debug, Clone)]
pub struct HostPage {
	form: ProductForm,
	renderer: SsrRenderer,
}

impl HostPage {
	/// Host page whose handler logs each submitted record.
	pub fn new(initial_data: Option<ProductRecord>, settings: &AppSettings) -> Self {
		Self::with_handler(initial_data, settings, SubmitHandler::new(log_submission))
	}

	/// Host page with a caller-supplied handler.
	///
	/// The handler is called as is; failures inside it are the handler's own
	/// business.
	pub fn with_handler(
		initial_data: Option<ProductRecord>,
		settings: &AppSettings,
		on_submit: SubmitHandler,
	) -> Self {
		let mut props = ProductFormProps::new(on_submit).settings(settings.form.clone());
		props.initial_data = initial_data;

		let options = SsrOptions::new()
			.lang(settings.page.lang.clone())
			.title(settings.page.title.clone());

		Self {
			form: ProductForm::new(props),
			renderer: SsrRenderer::with_options(options),
		}
	}

	pub fn form(&self) -> &ProductForm {
		&self.form
	}

	/// Render the page as a complete HTML document.
	pub fn render_document(&self) -> String {
		self.renderer.render_page(&self.form)
	}
}

fn log_submission(record: ProductRecord) {
	tracing::info!(record = ?record, "Form Data");
}

#[cfg(test)]
mod tests {
	use super::*;
	use product_form_pages::{FieldChange, SubmitEvent, SubmitOutcome};
	use rstest::rstest;

	#[rstest]
	fn test_default_handler_accepts_valid_record() {
		let record = ProductRecord {
			id: 1,
			name: "Widget".to_string(),
			description: "A widget".to_string(),
			category: "home".to_string(),
			expire_date: "2030-01-01".to_string(),
			price: 2.5,
			quantity: 1,
		};
		let page = HostPage::new(Some(record.clone()), &AppSettings::default());

		assert!(matches!(
			page.form().submit(&SubmitEvent::new()),
			SubmitOutcome::Submitted
		));
		assert_eq!(page.form().record(), record);
	}

	#[rstest]
	fn test_document_reflects_edits() {
		let page = HostPage::new(None, &AppSettings::default());
		page.form()
			.handle_change(&FieldChange::new("name", "Lamp"))
			.unwrap();

		let html = page.render_document();
		assert!(html.contains("<title>Product Form</title>"));
		assert!(html.contains("value=\"Lamp\""));
	}
}

//! Server-side rendering of the product form.

use product_form_pages::form::{FormSettings, ProductForm, ProductFormProps, SubmitHandler};
use product_form_pages::{
	Component, ElementView, FieldChange, ProductRecord, SsrOptions, SsrRenderer, SubmitEvent,
	View,
};
use rstest::rstest;

fn form(initial: Option<ProductRecord>) -> ProductForm {
	let props = ProductFormProps::new(SubmitHandler::new(|_| {}));
	ProductForm::new(match initial {
		Some(record) => props.initial_data(record),
		None => props,
	})
}

fn options(view: &View) -> Vec<(String, bool, bool)> {
	let select = view.find_by_id("category").unwrap();
	select
		.child_views()
		.iter()
		.filter_map(|child| match child {
			View::Element(option) => Some((
				option.get_attr("value").unwrap_or_default().to_string(),
				option.has_attr("selected"),
				option.has_attr("disabled"),
			)),
			_ => None,
		})
		.collect()
}

#[rstest]
fn test_blank_form_renders_empty_numeric_controls() {
	let view = form(None).render();
	for name in ["id", "price", "quantity"] {
		assert_eq!(view.find_by_id(name).unwrap().get_attr("value"), Some(""));
	}
	assert!(view.find(&|el: &ElementView| el.has_attr("aria-invalid")).is_none());
}

#[rstest]
fn test_category_select_offers_five_choices_after_placeholder() {
	let view = form(None).render();
	assert_eq!(
		options(&view),
		vec![
			(String::new(), true, true),
			("electronics".to_string(), false, false),
			("fashion".to_string(), false, false),
			("home".to_string(), false, false),
			("books".to_string(), false, false),
			("foods".to_string(), false, false),
		]
	);

	let select = view.find_by_id("category").unwrap();
	let placeholder = match &select.child_views()[0] {
		View::Element(option) => option.text_content(),
		other => panic!("expected option, got {other:?}"),
	};
	assert_eq!(placeholder, "Select a category");
}

#[rstest]
fn test_initial_data_is_rendered() {
	let record = ProductRecord {
		id: 7,
		name: "X".to_string(),
		description: "Y".to_string(),
		category: "books".to_string(),
		expire_date: "2025-01-01".to_string(),
		price: 10.0,
		quantity: 2,
	};
	let view = form(Some(record)).render();

	assert_eq!(view.find_by_id("id").unwrap().get_attr("value"), Some("7"));
	assert_eq!(view.find_by_id("name").unwrap().get_attr("value"), Some("X"));
	assert_eq!(view.find_by_id("description").unwrap().text_content(), "Y");
	assert_eq!(
		view.find_by_id("expireDate").unwrap().get_attr("value"),
		Some("2025-01-01")
	);
	assert_eq!(view.find_by_id("price").unwrap().get_attr("value"), Some("10"));
	assert_eq!(view.find_by_id("quantity").unwrap().get_attr("value"), Some("2"));

	let selected: Vec<_> = options(&view)
		.into_iter()
		.filter(|(_, selected, _)| *selected)
		.map(|(value, _, _)| value)
		.collect();
	assert_eq!(selected, vec!["books"]);
}

#[rstest]
fn test_unlisted_initial_category_stays_selected() {
	let record = ProductRecord {
		category: "toys".to_string(),
		..ProductRecord::default()
	};
	let form = form(Some(record));
	let view = form.render();

	let selected: Vec<_> = options(&view)
		.into_iter()
		.filter(|(_, selected, _)| *selected)
		.map(|(value, _, _)| value)
		.collect();
	assert_eq!(selected, vec!["toys"]);
	assert_eq!(form.record().category, "toys");
}

#[rstest]
fn test_description_leading_newline_survives_markup() {
	let form = form(None);
	form.handle_change(&FieldChange::new("description", "\nSecond line"))
		.unwrap();

	let html = form.render().render_to_string();
	assert!(html.contains("placeholder=\"Enter Product Description\" required>\n\nSecond line</textarea>"));
}

#[rstest]
fn test_errors_render_beneath_controls_after_submit() {
	let form = form(None);
	form.handle_change(&FieldChange::new("quantity", "-2")).unwrap();
	let _ = form.submit(&SubmitEvent::new());

	let html = form.render().render_to_string();
	assert!(html.contains(
		"<p id=\"quantity-error\" class=\"field-error\" role=\"alert\">Quantity cannot be negative.</p>"
	));
	assert!(html.contains("Product ID is required."));

	let quantity = form.render();
	let control = quantity.find_by_id("quantity").unwrap();
	assert_eq!(control.get_attr("class"), Some("form-control is-invalid"));
	assert_eq!(control.get_attr("value"), Some("-2"));
}

#[rstest]
fn test_user_text_is_escaped() {
	let form = form(None);
	form.handle_change(&FieldChange::new("name", "<b>\"bold\"</b>"))
		.unwrap();
	form.handle_change(&FieldChange::new("description", "<script>"))
		.unwrap();

	let html = form.render().render_to_string();
	assert!(html.contains("value=\"&lt;b&gt;&quot;bold&quot;&lt;/b&gt;\""));
	assert!(html.contains("&lt;script&gt;</textarea>"));
	assert!(!html.contains("<script>"));
}

#[rstest]
fn test_settings_drive_presentation() {
	let settings = FormSettings {
		title: "Edit Product".to_string(),
		submit_label: "Save".to_string(),
		form_id: "edit-form".to_string(),
		..FormSettings::default()
	};
	let form = ProductForm::new(ProductFormProps::new(SubmitHandler::new(|_| {})).settings(settings));

	let view = form.render();
	let root = view.find_by_id("edit-form").unwrap();
	assert_eq!(root.tag_name(), "form");
	assert!(root.text_content().starts_with("Edit Product"));
	assert!(root.text_content().ends_with("Save"));
}

#[rstest]
fn test_full_document() {
	let renderer = SsrRenderer::with_options(SsrOptions::new().title("Add Product"));
	let html = renderer.render_page(&form(None));

	assert!(html.starts_with("<!DOCTYPE html>"));
	assert!(html.contains("<title>Add Product</title>"));
	assert!(html.contains("<div id=\"app\"><form id=\"product-form\" class=\"product-form\""));
	assert_eq!(ProductForm::name(), "ProductForm");
}

//! Server-side rendering.
//!
//! [`SsrRenderer`] turns a [`Component`] into an HTML fragment or into a full
//! document whose body holds the fragment inside `<div id="app">`, the
//! element [`mount`](crate::mount) later takes over in the browser.

use crate::component::Component;
use crate::view::{View, html_escape};

/// Options for SSR rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsrOptions {
	/// `lang` attribute of the `<html>` element.
	pub lang: String,
	/// Document `<title>`; omitted when `None`.
	pub title: Option<String>,
}

impl Default for SsrOptions {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			title: None,
		}
	}
}

impl SsrOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}
}

/// Renders components to HTML strings.
#[derive(Debug, Clone, Default)]
pub struct SsrRenderer {
	options: SsrOptions,
}

impl SsrRenderer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_options(options: SsrOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &SsrOptions {
		&self.options
	}

	/// Renders a component to an HTML fragment.
	pub fn render<C: Component>(&self, component: &C) -> String {
		tracing::debug!(component = C::name(), "Rendering component");
		self.render_view(&component.render())
	}

	/// Renders a view to an HTML fragment.
	pub fn render_view(&self, view: &View) -> String {
		view.render_to_string()
	}

	/// Renders a component as a complete HTML document.
	pub fn render_page<C: Component>(&self, component: &C) -> String {
		let content = self.render(component);
		self.wrap_in_html(&content)
	}

	/// Wraps pre-rendered content in a complete HTML document.
	pub fn wrap_in_html(&self, content: &str) -> String {
		let mut html = String::with_capacity(content.len() + 256);

		html.push_str("<!DOCTYPE html>\n");
		html.push_str(&format!(
			"<html lang=\"{}\">\n",
			html_escape(&self.options.lang)
		));

		html.push_str("<head>\n");
		html.push_str("<meta charset=\"UTF-8\">\n");
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
		);
		if let Some(ref title) = self.options.title {
			html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
		}
		html.push_str("</head>\n");

		html.push_str("<body>\n");
		html.push_str("<div id=\"app\">");
		html.push_str(content);
		html.push_str("</div>\n");
		html.push_str("</body>\n");
		html.push_str("</html>\n");

		html
	}
}

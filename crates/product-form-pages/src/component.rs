//! Component trait definition.

use crate::view::View;

/// A renderable UI unit.
///
/// # Example
///
/// ```
/// use product_form_pages::{Component, View};
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn render(&self) -> View {
///         View::element("p")
///             .class("greeting")
///             .child(format!("Hello, {}!", self.name))
///             .into()
///     }
///
///     fn name() -> &'static str {
///         "Greeting"
///     }
/// }
///
/// let html = Greeting { name: "World".into() }.render().render_to_string();
/// assert_eq!(html, "<p class=\"greeting\">Hello, World!</p>");
/// ```
pub trait Component: 'static {
	/// Renders the current state.
	fn render(&self) -> View;

	/// Component name, used in logs.
	fn name() -> &'static str
	where
		Self: Sized;
}

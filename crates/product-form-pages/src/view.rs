//! View tree and HTML rendering.
//!
//! Components describe their markup as a [`View`]; the tree is rendered to
//! HTML with [`View::render_to_string`], both for server-side rendering and
//! for repainting a mounted form in the browser.

use std::borrow::Cow;

/// Renderable content.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
	/// An element.
	Element(ElementView),
	/// A text node (escaped when rendered).
	Text(Cow<'static, str>),
	/// Several views without a wrapper element.
	Fragment(Vec<View>),
	/// Renders nothing.
	Empty,
}

/// Value of an element attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// `name="value"`
	Text(Cow<'static, str>),
	/// Boolean attribute rendered as a bare `name`.
	Flag,
}

/// An element in the view tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, AttrValue)>,
	children: Vec<View>,
	is_void: bool,
}

impl ElementView {
	/// Creates an element with the given tag.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds a `name="value"` attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), AttrValue::Text(value.into())));
		self
	}

	/// Adds a boolean attribute when `enabled` is true.
	pub fn bool_attr(mut self, name: impl Into<Cow<'static, str>>, enabled: bool) -> Self {
		if enabled {
			self.attrs.push((name.into(), AttrValue::Flag));
		}
		self
	}

	/// Adds an attribute when `value` is `Some`.
	pub fn opt_attr(
		self,
		name: impl Into<Cow<'static, str>>,
		value: Option<impl Into<Cow<'static, str>>>,
	) -> Self {
		match value {
			Some(value) => self.attr(name, value),
			None => self,
		}
	}

	pub fn id(self, id: impl Into<Cow<'static, str>>) -> Self {
		self.attr("id", id)
	}

	pub fn class(self, class: impl Into<Cow<'static, str>>) -> Self {
		self.attr("class", class)
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds several child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	pub fn attrs(&self) -> &[(Cow<'static, str>, AttrValue)] {
		&self.attrs
	}

	/// Value of attribute `name`; boolean attributes yield `""`.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(attr, _)| attr == name)
			.map(|(_, value)| match value {
				AttrValue::Text(text) => text.as_ref(),
				AttrValue::Flag => "",
			})
	}

	pub fn has_attr(&self, name: &str) -> bool {
		self.get_attr(name).is_some()
	}

	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Whether the HTML parser drops a newline right after the start tag.
	fn strips_leading_newline(&self) -> bool {
		matches!(self.tag_name(), "textarea" | "pre" | "listing")
	}

	/// Concatenated text of all descendant text nodes.
	pub fn text_content(&self) -> String {
		let mut text = String::new();
		for child in &self.children {
			child.collect_text(&mut text);
		}
		text
	}
}

impl View {
	/// Creates an element builder.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	pub fn empty() -> Self {
		Self::Empty
	}

	/// Finds the first element (depth-first) whose `id` attribute is `id`.
	pub fn find_by_id(&self, id: &str) -> Option<&ElementView> {
		self.find(&|el: &ElementView| el.get_attr("id") == Some(id))
	}

	/// Finds the first element (depth-first) matching `predicate`.
	pub fn find(&self, predicate: &dyn Fn(&ElementView) -> bool) -> Option<&ElementView> {
		match self {
			View::Element(el) => {
				if predicate(el) {
					return Some(el);
				}
				el.children.iter().find_map(|child| child.find(predicate))
			}
			View::Fragment(children) => children.iter().find_map(|child| child.find(predicate)),
			View::Text(_) | View::Empty => None,
		}
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					if let AttrValue::Text(value) = value {
						output.push_str("=\"");
						output.push_str(&html_escape(value));
						output.push('"');
					}
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					if el.strips_leading_newline() && el.text_content().starts_with('\n') {
						output.push('\n');
					}
					for child in el.child_views() {
						child.render_into(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => output.push_str(&html_escape(text)),
			View::Fragment(children) => {
				for child in children {
					child.render_into(output);
				}
			}
			View::Empty => {}
		}
	}

	fn collect_text(&self, text: &mut String) {
		match self {
			View::Element(el) => {
				for child in &el.children {
					child.collect_text(text);
				}
			}
			View::Text(t) => text.push_str(t),
			View::Fragment(children) => {
				for child in children {
					child.collect_text(text);
				}
			}
			View::Empty => {}
		}
	}
}

/// Conversion into a [`View`].
pub trait IntoView {
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl From<ElementView> for View {
	fn from(el: ElementView) -> Self {
		View::Element(el)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::Fragment(self.into_iter().map(|v| v.into_view()).collect())
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

/// Escapes HTML special characters.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

//! Browser mounting (WASM only).
//!
//! [`mount`] paints a [`ProductForm`] into a DOM element and wires the
//! element's events to the controller:
//!
//! - `input` / `change` from any control become a [`FieldChange`]
//! - `submit` becomes a [`SubmitEvent`]; the browser default is prevented
//!   and a pending asynchronous submission is driven with
//!   [`wasm_bindgen_futures::spawn_local`]
//!
//! Listeners are attached once to the mount root, so repainting the form
//! does not detach them. The form is repainted whenever the error map or
//! the submission status changes. Record writes do not repaint: the
//! controls already show what the user typed.

use crate::event::{FieldChange, SubmitEvent};
use crate::form::{ProductForm, SubmitOutcome};
use crate::reactive::Subscription;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Error type for mounting the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
	#[error("Window object not available")]
	NoWindow,
	#[error("Document object not available")]
	NoDocument,
	#[error("Mount root #{0} not found")]
	RootNotFound(String),
	#[error("Failed to attach `{0}` listener")]
	ListenerFailed(&'static str),
}

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Keeps a mounted form wired up.
///
/// Dropping the handle removes the event listeners and stops repainting.
/// Call [`MountHandle::forget`] to keep the form mounted for the lifetime
/// of the page.
pub struct MountHandle {
	root: web_sys::Element,
	listeners: Vec<(&'static str, Listener)>,
	_subscriptions: Vec<Subscription>,
}

impl MountHandle {
	/// Keeps the form mounted for the rest of the page's life.
	pub fn forget(self) {
		std::mem::forget(self);
	}
}

impl std::fmt::Debug for MountHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MountHandle")
			.field("listeners", &self.listeners.len())
			.finish()
	}
}

impl Drop for MountHandle {
	fn drop(&mut self) {
		for (event_type, listener) in &self.listeners {
			let _ = self
				.root
				.remove_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref());
		}
	}
}

/// Mount `form` into the element with the given `id`.
pub fn mount_to_id(form: &ProductForm, id: &str) -> Result<MountHandle, MountError> {
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let document = window.document().ok_or(MountError::NoDocument)?;
	let root = document
		.get_element_by_id(id)
		.ok_or_else(|| MountError::RootNotFound(id.to_string()))?;
	mount(form, root)
}

/// Mount `form` into `root`, replacing its content.
pub fn mount(form: &ProductForm, root: web_sys::Element) -> Result<MountHandle, MountError> {
	paint(form, &root);

	let mut handle = MountHandle {
		root: root.clone(),
		listeners: Vec::new(),
		_subscriptions: vec![
			form.errors_signal().subscribe({
				let form = form.clone();
				let root = root.clone();
				move |_| paint(&form, &root)
			}),
			form.status_signal().subscribe({
				let form = form.clone();
				let root = root.clone();
				move |_| paint(&form, &root)
			}),
		],
	};

	for event_type in ["input", "change"] {
		let form = form.clone();
		let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
			let Some(change) = field_change_from_event(&event) else {
				return;
			};
			if let Err(err) = form.handle_change(&change) {
				tracing::warn!(error = %err, "Ignoring change event");
			}
		}) as Box<dyn FnMut(_)>);
		attach(&mut handle, event_type, listener)?;
	}

	let submit = {
		let form = form.clone();
		Closure::wrap(Box::new(move |event: web_sys::Event| {
			event.prevent_default();
			if let SubmitOutcome::Pending(pending) = form.submit(&SubmitEvent::new()) {
				wasm_bindgen_futures::spawn_local(pending);
			}
		}) as Box<dyn FnMut(_)>)
	};
	attach(&mut handle, "submit", submit)?;

	tracing::debug!(listeners = handle.listeners.len(), "Product form mounted");
	Ok(handle)
}

fn attach(
	handle: &mut MountHandle,
	event_type: &'static str,
	listener: Listener,
) -> Result<(), MountError> {
	handle
		.root
		.add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref())
		.map_err(|_| MountError::ListenerFailed(event_type))?;
	handle.listeners.push((event_type, listener));
	Ok(())
}

fn paint(form: &ProductForm, root: &web_sys::Element) {
	root.set_inner_html(&form.view().render_to_string());
}

/// Normalize an event raised by an input, textarea or select.
fn field_change_from_event(event: &web_sys::Event) -> Option<FieldChange> {
	let target = event.target()?;
	if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
		return Some(FieldChange::new(input.name(), input.value()));
	}
	if let Some(textarea) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
		return Some(FieldChange::new(textarea.name(), textarea.value()));
	}
	if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
		return Some(FieldChange::new(select.name(), select.value()));
	}
	None
}

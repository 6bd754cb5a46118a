//! Cloneable callback wrapper.
//!
//! [`Callback`] is how a host hands behaviour to a component: the product
//! form receives its submission handler as a `Callback<ProductRecord>` (or a
//! `Callback<ProductRecord, SubmitFuture>` for asynchronous handlers).
//!
//! ## Example
//!
//! ```
//! use product_form_pages::Callback;
//!
//! let double = Callback::new(|x: i32| x * 2);
//! let same = double.clone();
//! assert_eq!(same.call(21), 42);
//! ```

use std::sync::Arc;

/// A cloneable callback.
///
/// The function is stored behind an `Arc`, so clones share it.
///
/// ## Type Parameters
///
/// - `Args`: The argument the callback receives
/// - `Ret`: The return type of the callback (defaults to `()`)
#[cfg(target_arch = "wasm32")]
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + 'static>,
}

/// A cloneable callback (server-side version).
///
/// Requires `Send + Sync` so hosts can build callbacks on any thread.
#[cfg(not(target_arch = "wasm32"))]
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

#[cfg(target_arch = "wasm32")]
impl<Args, Ret> Callback<Args, Ret> {
	/// Wraps `f`.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Arc::new(f) }
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl<Args, Ret> Callback<Args, Ret> {
	/// Wraps `f`.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Calls the callback with `args`.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}

	/// Returns `true` if both handles wrap the same function.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::Mutex;

	#[rstest]
	fn test_callback_returns_value() {
		let callback = Callback::new(|_: i32| 42);
		assert_eq!(callback.call(0), 42);
	}

	#[rstest]
	fn test_clones_share_function() {
		let callback1 = Callback::new(|x: i32| x * 2);
		let callback2 = callback1.clone();

		assert_eq!(callback2.call(5), 10);
		assert!(callback1.ptr_eq(&callback2));
		assert!(!callback1.ptr_eq(&Callback::new(|x: i32| x * 2)));
	}

	#[rstest]
	fn test_callback_with_captured_state() {
		let received = Arc::new(Mutex::new(Vec::new()));
		let callback = Callback::new({
			let received = Arc::clone(&received);
			move |name: String| received.lock().unwrap().push(name)
		});

		callback.call("a".to_string());
		callback.call("b".to_string());

		assert_eq!(*received.lock().unwrap(), vec!["a", "b"]);
	}

	#[rstest]
	fn test_callback_debug() {
		let callback = Callback::new(|_: ()| {});
		assert!(format!("{:?}", callback).contains("Callback"));
	}
}

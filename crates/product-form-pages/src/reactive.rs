//! Observable state cells
//!
//! A [`Signal`] owns one value and notifies its subscribers every time the
//! value is written. Component state lives in signals; whatever renders the
//! component subscribes and re-renders on change.
//!
//! Signals follow a single-writer contract: the component that creates a
//! signal keeps the writable handle and hands out [`ReadSignal`] views to
//! everyone else.
//!
//! ## Example
//!
//! ```
//! use product_form_pages::reactive::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let count = Signal::new(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let _subscription = count.subscribe({
//!     let seen = seen.clone();
//!     move |value: &i32| seen.set(*value)
//! });
//!
//! count.set(42);
//! assert_eq!(seen.get(), 42);
//! ```
//!
//! Subscribers run synchronously, in subscription order, after each write.
//! Signals are single-threaded; they are meant to live on the UI thread.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Unique identifier for a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
	/// Create a new unique NodeId
	pub fn new() -> Self {
		static COUNTER: AtomicUsize = AtomicUsize::new(0);
		Self(COUNTER.fetch_add(1, Ordering::Relaxed))
	}
}

impl Default for NodeId {
	fn default() -> Self {
		Self::new()
	}
}

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct SignalInner<T> {
	id: NodeId,
	value: RefCell<T>,
	subscribers: RefCell<Vec<(usize, Subscriber<T>)>>,
	next_subscriber: Cell<usize>,
}

/// A writable, observable state cell.
///
/// Cloning a `Signal` clones the handle, not the value: all clones read and
/// write the same cell.
pub struct Signal<T> {
	inner: Rc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("id", &self.inner.id)
			.field("value", &*self.inner.value.borrow())
			.finish()
	}
}

impl<T: Clone + 'static> Signal<T> {
	/// Create a signal holding `value`.
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(SignalInner {
				id: NodeId::new(),
				value: RefCell::new(value),
				subscribers: RefCell::new(Vec::new()),
				next_subscriber: Cell::new(0),
			}),
		}
	}

	/// Identifier of this signal.
	pub fn id(&self) -> NodeId {
		self.inner.id
	}

	/// Returns a clone of the current value.
	pub fn get(&self) -> T {
		self.inner.value.borrow().clone()
	}

	/// Runs `f` against the current value without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.inner.value.borrow())
	}

	/// Replaces the value and notifies subscribers.
	pub fn set(&self, value: T) {
		*self.inner.value.borrow_mut() = value;
		self.notify();
	}

	/// Mutates the value in place and notifies subscribers.
	pub fn update(&self, f: impl FnOnce(&mut T)) {
		f(&mut self.inner.value.borrow_mut());
		self.notify();
	}

	/// Registers `f` to run after every write.
	///
	/// The subscriber stays registered until the returned [`Subscription`]
	/// is dropped.
	pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
		let key = self.inner.next_subscriber.get();
		self.inner.next_subscriber.set(key + 1);
		self.inner.subscribers.borrow_mut().push((key, Rc::new(f)));

		let weak: Weak<SignalInner<T>> = Rc::downgrade(&self.inner);
		Subscription {
			cancel: Some(Box::new(move || {
				if let Some(inner) = weak.upgrade() {
					inner.subscribers.borrow_mut().retain(|(k, _)| *k != key);
				}
			})),
		}
	}

	/// Number of registered subscribers.
	pub fn subscriber_count(&self) -> usize {
		self.inner.subscribers.borrow().len()
	}

	/// Read-only view of this signal.
	pub fn read_only(&self) -> ReadSignal<T> {
		ReadSignal {
			signal: self.clone(),
		}
	}

	fn notify(&self) {
		// Snapshot both the value and the subscriber list so subscribers may
		// read, write or (un)subscribe this signal without a borrow conflict.
		let subscribers: Vec<Subscriber<T>> = self
			.inner
			.subscribers
			.borrow()
			.iter()
			.map(|(_, subscriber)| Rc::clone(subscriber))
			.collect();
		if subscribers.is_empty() {
			return;
		}

		let snapshot = self.get();
		for subscriber in subscribers {
			subscriber(&snapshot);
		}
	}
}

/// Read-only handle to a [`Signal`].
pub struct ReadSignal<T> {
	signal: Signal<T>,
}

impl<T> Clone for ReadSignal<T> {
	fn clone(&self) -> Self {
		Self {
			signal: self.signal.clone(),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for ReadSignal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ReadSignal").field(&self.signal).finish()
	}
}

impl<T: Clone + 'static> ReadSignal<T> {
	/// Identifier of the underlying signal.
	pub fn id(&self) -> NodeId {
		self.signal.id()
	}

	/// Returns a clone of the current value.
	pub fn get(&self) -> T {
		self.signal.get()
	}

	/// Runs `f` against the current value without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		self.signal.with(f)
	}

	/// Registers `f` to run after every write to the underlying signal.
	pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Subscription {
		self.signal.subscribe(f)
	}
}

/// Handle keeping a subscriber registered.
///
/// Dropping the handle unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
	cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Keeps the subscriber registered for the lifetime of the signal.
	pub fn detach(mut self) {
		self.cancel = None;
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.cancel.is_some())
			.finish()
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_node_id_uniqueness() {
		let id1 = NodeId::new();
		let id2 = NodeId::new();
		assert_ne!(id1, id2);
		assert_ne!(Signal::new(()).id(), Signal::new(()).id());
	}

	#[rstest]
	fn test_get_set_update() {
		let signal = Signal::new(String::from("a"));
		assert_eq!(signal.get(), "a");

		signal.set("b".to_string());
		assert_eq!(signal.get(), "b");

		signal.update(|s| s.push('c'));
		assert_eq!(signal.with(|s| s.len()), 2);
	}

	#[rstest]
	fn test_clones_share_state() {
		let a = Signal::new(1);
		let b = a.clone();
		b.set(2);
		assert_eq!(a.get(), 2);
		assert_eq!(a.id(), b.id());
	}

	#[rstest]
	fn test_subscribers_run_in_order() {
		let signal = Signal::new(0);
		let log = Rc::new(RefCell::new(Vec::new()));

		let _first = signal.subscribe({
			let log = log.clone();
			move |v: &i32| log.borrow_mut().push(("first", *v))
		});
		let _second = signal.subscribe({
			let log = log.clone();
			move |v: &i32| log.borrow_mut().push(("second", *v))
		});

		signal.set(5);
		assert_eq!(*log.borrow(), vec![("first", 5), ("second", 5)]);
	}

	#[rstest]
	fn test_drop_unsubscribes() {
		let signal = Signal::new(0);
		let hits = Rc::new(Cell::new(0));

		let subscription = signal.subscribe({
			let hits = hits.clone();
			move |_: &i32| hits.set(hits.get() + 1)
		});
		signal.set(1);
		assert_eq!(signal.subscriber_count(), 1);

		drop(subscription);
		signal.set(2);
		assert_eq!(hits.get(), 1);
		assert_eq!(signal.subscriber_count(), 0);
	}

	#[rstest]
	fn test_detach_keeps_subscriber() {
		let signal = Signal::new(0);
		let hits = Rc::new(Cell::new(0));

		signal
			.subscribe({
				let hits = hits.clone();
				move |_: &i32| hits.set(hits.get() + 1)
			})
			.detach();

		signal.set(1);
		signal.set(2);
		assert_eq!(hits.get(), 2);
	}

	#[rstest]
	fn test_subscriber_may_read_and_write_signal() {
		let signal = Signal::new(0);
		let echo = signal.clone();
		let _clamp = signal.subscribe(move |v: &i32| {
			if *v > 10 {
				echo.set(10);
			}
		});

		signal.set(50);
		assert_eq!(signal.get(), 10);
	}

	#[rstest]
	fn test_read_only_view_observes_writes() {
		let signal = Signal::new(vec![1]);
		let view = signal.read_only();
		let seen = Rc::new(RefCell::new(Vec::new()));

		let _sub = view.subscribe({
			let seen = seen.clone();
			move |v: &Vec<i32>| seen.borrow_mut().push(v.len())
		});

		signal.update(|v| v.push(2));
		assert_eq!(view.get(), vec![1, 2]);
		assert_eq!(*seen.borrow(), vec![2]);
		assert_eq!(view.id(), signal.id());
	}

	#[rstest]
	fn test_subscription_outliving_signal() {
		let signal = Signal::new(0);
		let subscription = signal.subscribe(|_: &i32| {});
		drop(signal);
		drop(subscription);
	}
}

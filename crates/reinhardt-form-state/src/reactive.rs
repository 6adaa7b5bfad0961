//! Signal - subscribable state cell
//!
//! `Signal<T>` holds a value and notifies subscribers whenever it is written.
//! [`Signal::select`] narrows a subscription to a derived slice of the value
//! so a subscriber only hears about the changes it cares about.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use reinhardt_form_state::Signal;
//!
//! let pair = Signal::new((0, 0));
//! let hits = Rc::new(Cell::new(0));
//!
//! let counter = hits.clone();
//! let subscription = pair.select(|p| p.0, move |_| counter.set(counter.get() + 1));
//!
//! pair.update(|p| p.1 += 1); // second slot only: no notification
//! pair.update(|p| p.0 += 1);
//! assert_eq!(hits.get(), 1);
//!
//! drop(subscription);
//! pair.update(|p| p.0 += 1);
//! assert_eq!(hits.get(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct SignalInner<T> {
	value: RefCell<T>,
	subscribers: RefCell<Vec<(usize, Subscriber<T>)>>,
	next_id: Cell<usize>,
	notifying: Cell<bool>,
	pending: Cell<bool>,
}

/// Clears the `notifying` flag even if a subscriber panics.
struct NotifyGuard<'a>(&'a Cell<bool>);

impl Drop for NotifyGuard<'_> {
	fn drop(&mut self) {
		self.0.set(false);
	}
}

/// A shared value with change notification.
///
/// Clones share the same value and subscriber list. Signals are `!Send`:
/// they live on the single event loop that drives the form.
///
/// A write made by a subscriber while a notification is running is stored
/// at once, but its notification is folded into the running one: the round
/// stops and restarts with the current value. Every subscriber's last
/// delivery is therefore the value the signal ends up holding.
pub struct Signal<T: 'static> {
	inner: Rc<SignalInner<T>>,
}

impl<T: Clone + 'static> Signal<T> {
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(SignalInner {
				value: RefCell::new(value),
				subscribers: RefCell::new(Vec::new()),
				next_id: Cell::new(0),
				notifying: Cell::new(false),
				pending: Cell::new(false),
			}),
		}
	}

	/// Current value (cloned).
	pub fn get(&self) -> T {
		self.inner.value.borrow().clone()
	}

	/// Read the current value without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.inner.value.borrow())
	}

	/// Replace the value and notify subscribers.
	pub fn set(&self, value: T) {
		*self.inner.value.borrow_mut() = value;
		self.notify();
	}

	/// Mutate the value in place and notify subscribers.
	pub fn update(&self, f: impl FnOnce(&mut T)) {
		f(&mut self.inner.value.borrow_mut());
		self.notify();
	}

	/// Call `callback` after every write.
	///
	/// The subscription lasts until the returned [`Subscription`] is dropped.
	pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
		let id = self.inner.next_id.get();
		self.inner.next_id.set(id + 1);
		self.inner
			.subscribers
			.borrow_mut()
			.push((id, Rc::new(callback)));

		let weak: Weak<SignalInner<T>> = Rc::downgrade(&self.inner);
		Subscription {
			unsubscribe: Some(Box::new(move || {
				if let Some(inner) = weak.upgrade() {
					inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
				}
			})),
		}
	}

	/// Call `callback` only when `selector`'s output changes.
	pub fn select<U, F, C>(&self, selector: F, callback: C) -> Subscription
	where
		U: PartialEq + Clone + 'static,
		F: Fn(&T) -> U + 'static,
		C: Fn(&U) + 'static,
	{
		let last = RefCell::new(self.with(&selector));
		self.subscribe(move |value| {
			let next = selector(value);
			if *last.borrow() == next {
				return;
			}
			last.replace(next.clone());
			callback(&next);
		})
	}

	pub fn subscriber_count(&self) -> usize {
		self.inner.subscribers.borrow().len()
	}

	fn notify(&self) {
		let inner = &self.inner;
		if inner.notifying.get() {
			inner.pending.set(true);
			return;
		}
		inner.notifying.set(true);
		let _guard = NotifyGuard(&inner.notifying);

		loop {
			inner.pending.set(false);
			// Snapshot both so subscribers may read or write this signal.
			let snapshot = self.get();
			let subscribers: Vec<Subscriber<T>> = inner
				.subscribers
				.borrow()
				.iter()
				.map(|(_, s)| Rc::clone(s))
				.collect();
			for subscriber in subscribers {
				subscriber(&snapshot);
				if inner.pending.get() {
					break;
				}
			}
			if !inner.pending.get() {
				break;
			}
		}
	}
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.inner.value.borrow())
			.field("subscribers", &self.inner.subscribers.borrow().len())
			.finish()
	}
}

/// Handle that keeps a subscription alive. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
	unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Keep the subscription for the rest of the signal's life.
	pub fn detach(mut self) {
		self.unsubscribe = None;
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(unsubscribe) = self.unsubscribe.take() {
			unsubscribe();
		}
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.unsubscribe.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_set_and_get() {
		let signal = Signal::new(1);
		signal.set(2);
		assert_eq!(signal.get(), 2);
		signal.update(|v| *v *= 10);
		assert_eq!(signal.get(), 20);
	}

	#[rstest]
	fn test_clones_share_value() {
		let a = Signal::new(String::from("x"));
		let b = a.clone();
		b.set("y".to_string());
		assert_eq!(a.get(), "y");
	}

	#[rstest]
	fn test_subscriber_sees_every_write() {
		// Arrange
		let signal = Signal::new(0);
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();
		let _subscription = signal.subscribe(move |v| sink.borrow_mut().push(*v));

		// Act
		signal.set(1);
		signal.set(1);
		signal.set(2);

		// Assert
		assert_eq!(*seen.borrow(), vec![1, 1, 2]);
	}

	#[rstest]
	fn test_drop_unsubscribes() {
		let signal = Signal::new(0);
		let subscription = signal.subscribe(|_| {});
		assert_eq!(signal.subscriber_count(), 1);
		drop(subscription);
		assert_eq!(signal.subscriber_count(), 0);
	}

	#[rstest]
	fn test_detach_keeps_subscriber() {
		let signal = Signal::new(0);
		signal.subscribe(|_| {}).detach();
		assert_eq!(signal.subscriber_count(), 1);
	}

	#[rstest]
	fn test_subscriber_may_write_back() {
		// Arrange
		let signal = Signal::new(0);
		let inner = signal.clone();
		let _subscription = signal.subscribe(move |v| {
			if *v < 3 {
				inner.set(v + 1);
			}
		});

		// Act
		signal.set(1);

		// Assert
		assert_eq!(signal.get(), 3);
	}

	#[rstest]
	fn test_later_subscriber_last_sees_written_back_value() {
		// Arrange
		let signal = Signal::new((0, 0));
		let writer = signal.clone();
		let _first = signal.select(
			|v| v.0,
			move |first| {
				if *first == 1 {
					writer.update(|v| v.1 = 10);
				}
			},
		);
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();
		let _second = signal.select(|v| v.1, move |second| sink.borrow_mut().push(*second));

		// Act
		signal.update(|v| v.0 = 1);

		// Assert
		assert_eq!(signal.get(), (1, 10));
		assert_eq!(*seen.borrow(), vec![10]);
	}

	#[rstest]
	fn test_plain_subscriber_ends_on_current_value() {
		// Arrange
		let signal = Signal::new(0);
		let writer = signal.clone();
		let _bump = signal.subscribe(move |v| {
			if *v == 1 {
				writer.set(2);
			}
		});
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();
		let _record = signal.subscribe(move |v| sink.borrow_mut().push(*v));

		// Act
		signal.set(1);

		// Assert
		assert_eq!(seen.borrow().last(), Some(&2));
		assert!(!seen.borrow().contains(&1));
	}

	#[rstest]
	fn test_select_skips_unchanged_slice() {
		let signal = Signal::new((String::from("a"), 0));
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		let _subscription = signal.select(|v| v.0.clone(), move |_| counter.set(counter.get() + 1));

		signal.update(|v| v.1 = 5);
		signal.update(|v| v.0 = "b".to_string());
		signal.update(|v| v.1 = 6);

		assert_eq!(hits.get(), 1);
	}
}

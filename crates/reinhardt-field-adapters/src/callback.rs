//! Callback type used for primitive event handlers.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use reinhardt_field_adapters::Callback;
//!
//! let clicks = Rc::new(Cell::new(0));
//! let on_click: Callback<()> = Callback::new({
//!     let clicks = clicks.clone();
//!     move |()| clicks.set(clicks.get() + 1)
//! });
//!
//! let copy = on_click.clone();
//! on_click.call(());
//! copy.call(());
//! assert_eq!(clicks.get(), 2);
//! ```

use std::fmt;
use std::rc::Rc;

/// A cloneable event handler.
///
/// `Callback` wraps a function in an `Rc`, so copies handed to several
/// primitives all call the same closure. Form state is single-threaded, so
/// no `Send + Sync` bound is required.
pub struct Callback<Args, Ret = ()> {
	inner: Rc<dyn Fn(Args) -> Ret + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Rc::new(f) }
	}

	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}

	/// Whether two callbacks wrap the same closure.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

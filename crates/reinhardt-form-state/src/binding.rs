//! Per-field live bindings
//!
//! [`FieldHandle`] is the value/notifier/validation triple an adapter reads
//! and invokes. [`FieldBinding`] is a handle that also owns the field's
//! registration: dropping it unregisters the field's rule.

use std::fmt;
use std::ops::Deref;

use crate::control::FormControl;
use crate::rules::EventKind;
use crate::schema::{FieldKey, FormValues};
use crate::validation::ValidationState;
use crate::value::FieldType;

/// Cloneable handle to one field of a form.
pub struct FieldHandle<S: FormValues, T> {
	control: FormControl<S>,
	key: FieldKey<S, T>,
}

impl<S: FormValues, T: FieldType> FieldHandle<S, T> {
	pub(crate) fn new(control: FormControl<S>, key: FieldKey<S, T>) -> Self {
		Self { control, key }
	}

	pub fn name(&self) -> &'static str {
		self.key.name()
	}

	pub fn key(&self) -> FieldKey<S, T> {
		self.key
	}

	pub fn control(&self) -> &FormControl<S> {
		&self.control
	}

	/// Current value of the field.
	pub fn value(&self) -> T {
		self.control
			.get_value(self.name())
			.and_then(|value| T::from_field_value(&value))
			.unwrap_or_default()
	}

	/// Change notifier: write `value` as a user edit.
	pub fn set_value(&self, value: T) {
		self.control
			.handle_event(self.name(), Some(value.into_field_value()), EventKind::Change);
	}

	/// Blur notifier: mark the field touched.
	pub fn on_blur(&self) {
		self.control.handle_event(self.name(), None, EventKind::Blur);
	}

	pub fn validation_state(&self) -> ValidationState {
		self.control.validation_state(self.name())
	}

	pub fn is_dirty(&self) -> bool {
		self.control.is_dirty(self.name())
	}

	pub fn is_touched(&self) -> bool {
		self.control.is_touched(self.name())
	}
}

impl<S: FormValues, T> Clone for FieldHandle<S, T> {
	fn clone(&self) -> Self {
		Self {
			control: self.control.clone(),
			key: self.key,
		}
	}
}

impl<S: FormValues, T> fmt::Debug for FieldHandle<S, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldHandle")
			.field("name", &self.key.name())
			.finish()
	}
}

/// Releases a field registration when dropped.
pub struct RegistrationGuard {
	release: Option<Box<dyn FnOnce()>>,
}

impl RegistrationGuard {
	pub(crate) fn new(release: impl FnOnce() + 'static) -> Self {
		Self {
			release: Some(Box::new(release)),
		}
	}
}

impl Drop for RegistrationGuard {
	fn drop(&mut self) {
		if let Some(release) = self.release.take() {
			release();
		}
	}
}

impl fmt::Debug for RegistrationGuard {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("RegistrationGuard")
	}
}

/// A registered field. Derefs to its [`FieldHandle`].
///
/// Dropping the binding (the adapter unmounting) unregisters the rule.
pub struct FieldBinding<S: FormValues, T> {
	handle: FieldHandle<S, T>,
	_guard: RegistrationGuard,
}

impl<S: FormValues, T: FieldType> FieldBinding<S, T> {
	pub(crate) fn new(handle: FieldHandle<S, T>, guard: RegistrationGuard) -> Self {
		Self {
			handle,
			_guard: guard,
		}
	}

	/// A handle that does not keep the registration alive, for callbacks.
	pub fn handle(&self) -> FieldHandle<S, T> {
		self.handle.clone()
	}
}

impl<S: FormValues, T> fmt::Debug for FieldBinding<S, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldBinding")
			.field("name", &self.handle.key.name())
			.finish()
	}
}

impl<S: FormValues, T> Deref for FieldBinding<S, T> {
	type Target = FieldHandle<S, T>;

	fn deref(&self) -> &Self::Target {
		&self.handle
	}
}

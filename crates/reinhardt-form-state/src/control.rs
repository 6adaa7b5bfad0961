//! Form control: the store every field binding reads and writes
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  register   ┌──────────────────────────┐
//! │ FieldBinding │ ──────────► │       FormControl<S>      │
//! │  (adapter)   │ ◄────────── │ values / rules / errors   │
//! └──────────────┘  value,     │ touched / submit flags    │
//!                   state      └────────────┬─────────────┘
//!                                           │ publish
//!                               ┌───────────▼───────────┐
//!                               │ Signal<Values>        │
//!                               │ Signal<FormState>     │
//!                               └───────────────────────┘
//! ```
//!
//! Every write runs in the same order: store the value and bookkeeping,
//! validate if the configured mode asks for it, publish the new snapshots,
//! then run the field's `on_change` / `on_blur` hook. No `RefCell` borrow is
//! held while user predicates, hooks or subscribers run, so a hook may freely
//! read or write other fields.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::rc::{Rc, Weak};

use indexmap::IndexSet;

use crate::binding::{FieldBinding, FieldHandle, RegistrationGuard};
use crate::config::FormConfig;
use crate::error::{FormError, FormResult, SubmitError};
use crate::reactive::{Signal, Subscription};
use crate::rules::{EventKind, FieldEvent, ValidationRule};
use crate::schema::{FieldDescriptor, FieldKey, FormSchema, FormValues, Values};
use crate::state::FormState;
use crate::validation::{FieldError, FieldErrors, ValidationState, validate_field};
use crate::value::{FieldType, FieldValue};

/// Options for [`FormControl::set_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetValueOptions {
	/// Validate the field (and its `deps`) after writing
	pub should_validate: bool,
	/// Mark the field as touched
	pub should_touch: bool,
}

impl SetValueOptions {
	pub fn validate() -> Self {
		Self {
			should_validate: true,
			..Self::default()
		}
	}
}

struct Store<S> {
	defaults: Values,
	values: Values,
	rules: HashMap<String, ValidationRule<S>>,
	mounts: HashMap<String, usize>,
	errors: FieldErrors,
	touched: IndexSet<String>,
	is_submitting: bool,
	is_submitted: bool,
	is_submit_successful: bool,
	submit_count: u32,
}

pub(crate) struct ControlInner<S> {
	schema: FormSchema,
	config: FormConfig,
	store: RefCell<Store<S>>,
	values: Signal<Values>,
	state: Signal<FormState>,
}

/// Binding context for one form with typed values `S`.
///
/// Cheap to clone; clones share the same store.
pub struct FormControl<S> {
	inner: Rc<ControlInner<S>>,
}

impl<S: FormValues> Clone for FormControl<S> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<S: FormValues> fmt::Debug for FormControl<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let store = self.inner.store.borrow();
		f.debug_struct("FormControl")
			.field("values", &store.values)
			.field("errors", &store.errors)
			.field("registered", &store.mounts.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl<S: FormValues> FormControl<S> {
	/// Create a form with default configuration.
	///
	/// # Errors
	///
	/// Fails when `S::schema()` is invalid or `defaults` does not fit it.
	pub fn new(defaults: S) -> FormResult<Self> {
		Self::with_config(defaults, FormConfig::default())
	}

	pub fn with_config(defaults: S, config: FormConfig) -> FormResult<Self> {
		let schema = S::schema()?;
		let values = Values::from_typed(&defaults, &schema)?;
		let store = Store {
			defaults: values.clone(),
			values: values.clone(),
			rules: HashMap::new(),
			mounts: HashMap::new(),
			errors: FieldErrors::new(),
			touched: IndexSet::new(),
			is_submitting: false,
			is_submitted: false,
			is_submit_successful: false,
			submit_count: 0,
		};
		let control = Self {
			inner: Rc::new(ControlInner {
				schema,
				config,
				store: RefCell::new(store),
				values: Signal::new(values),
				state: Signal::new(FormState::default()),
			}),
		};
		let state = control.compute_state();
		control.inner.state.set(state);
		Ok(control)
	}

	pub fn schema(&self) -> &FormSchema {
		&self.inner.schema
	}

	pub fn config(&self) -> &FormConfig {
		&self.inner.config
	}

	/// Bind a field: attach `rule` and return its live binding.
	///
	/// Registering an already registered field replaces its rule. The rule is
	/// dropped again once every binding for the field has been dropped.
	///
	/// # Errors
	///
	/// [`FormError::UnknownField`] when the name is not in the schema,
	/// [`FormError::KindMismatch`] when `T` does not fit the declared kind.
	pub fn register<T: FieldType>(
		&self,
		key: FieldKey<S, T>,
		rule: ValidationRule<S>,
	) -> FormResult<FieldBinding<S, T>> {
		let name = key.name();
		self.check_kind::<T>(name)?;

		{
			let mut store = self.inner.store.borrow_mut();
			store.rules.insert(name.to_string(), rule);
			*store.mounts.entry(name.to_string()).or_insert(0) += 1;
		}
		tracing::debug!(field = %name, "field registered");
		self.publish();

		let weak = Rc::downgrade(&self.inner);
		let field_name = name.to_string();
		let guard = RegistrationGuard::new(move || release(&weak, &field_name));
		Ok(FieldBinding::new(FieldHandle::new(self.clone(), key), guard))
	}

	/// A handle to a field without registering rules for it.
	pub fn field<T: FieldType>(&self, key: FieldKey<S, T>) -> FormResult<FieldHandle<S, T>> {
		self.check_kind::<T>(key.name())?;
		Ok(FieldHandle::new(self.clone(), key))
	}

	/// The rule currently registered for `name`.
	///
	/// When several bindings share a field this is the rule of the latest
	/// registration, which is the one validation runs.
	pub fn rule(&self, name: &str) -> Option<ValidationRule<S>> {
		self.inner.store.borrow().rules.get(name).cloned()
	}

	pub fn is_registered(&self, name: &str) -> bool {
		self.inner.store.borrow().mounts.contains_key(name)
	}

	pub fn get_value(&self, name: &str) -> Option<FieldValue> {
		self.inner.store.borrow().values.get(name).cloned()
	}

	/// Write a field's value from code.
	///
	/// Unlike a change event this never runs the field's `on_change` hook.
	pub fn set_value(
		&self,
		name: &str,
		value: impl Into<FieldValue>,
		options: SetValueOptions,
	) -> FormResult<()> {
		let value = value.into();
		let field = self.descriptor(name)?;
		if !field.kind.accepts(&value) {
			return Err(FormError::InvalidValue {
				field: name.to_string(),
				message: format!("{value:?} does not fit a {} field", field.kind),
			});
		}

		{
			let mut store = self.inner.store.borrow_mut();
			store.values.insert(name, value);
			if options.should_touch {
				store.touched.insert(name.to_string());
			}
		}
		if options.should_validate {
			self.validate_with_deps(name);
		}
		self.publish();
		Ok(())
	}

	/// Apply a user event to a field.
	///
	/// `value` is the new value for change events and `None` for blur.
	pub(crate) fn handle_event(&self, name: &str, value: Option<FieldValue>, kind: EventKind) {
		let Some(field) = self.inner.schema.field(name) else {
			tracing::warn!(field = %name, "event for unknown field ignored");
			return;
		};

		let (touched_before, submitted, hook) = {
			let mut store = self.inner.store.borrow_mut();
			if let Some(value) = value {
				if !field.kind.accepts(&value) {
					tracing::warn!(field = %name, value = ?value, "value rejected by field kind");
					return;
				}
				store.values.insert(name, value);
			}
			let touched_before = store.touched.contains(name);
			if kind == EventKind::Blur {
				store.touched.insert(name.to_string());
			}
			let hook = store.rules.get(name).and_then(|rule| match kind {
				EventKind::Change => rule.on_change.clone(),
				EventKind::Blur => rule.on_blur.clone(),
			});
			(touched_before, store.is_submitted, hook)
		};
		tracing::debug!(field = %name, event = ?kind, "field event");

		if self
			.inner
			.config
			.should_validate(kind, touched_before, submitted)
		{
			self.validate_with_deps(name);
		}
		self.publish();

		if let Some(hook) = hook
			&& let Some(value) = self.get_value(name)
		{
			let event = FieldEvent {
				name: name.to_string(),
				kind,
				value,
			};
			hook(&event, self);
		}
	}

	/// Validate one field, or every registered field when `name` is `None`.
	///
	/// Returns whether the validated fields are all valid.
	pub fn trigger(&self, name: Option<&str>) -> FormResult<bool> {
		let valid = match name {
			Some(name) => {
				self.descriptor(name)?;
				self.validate_fields(&[name.to_string()])
			}
			None => {
				let names = self.registered_names();
				self.validate_fields(&names)
			}
		};
		self.publish();
		Ok(valid)
	}

	/// Record an error on a field by hand, for example one returned by a
	/// server.
	pub fn set_error(&self, name: &str, error: FieldError) -> FormResult<()> {
		self.descriptor(name)?;
		self.inner
			.store
			.borrow_mut()
			.errors
			.insert(name.to_string(), error);
		self.publish();
		Ok(())
	}

	/// Clear one field's error, or every error when `name` is `None`.
	pub fn clear_errors(&self, name: Option<&str>) {
		{
			let mut store = self.inner.store.borrow_mut();
			match name {
				Some(name) => {
					store.errors.shift_remove(name);
				}
				None => store.errors.clear(),
			}
		}
		self.publish();
	}

	pub fn errors(&self) -> FieldErrors {
		self.inner.store.borrow().errors.clone()
	}

	pub fn validation_state(&self, name: &str) -> ValidationState {
		ValidationState::from_error(self.inner.store.borrow().errors.get(name))
	}

	pub fn is_dirty(&self, name: &str) -> bool {
		let store = self.inner.store.borrow();
		store.values.get(name) != store.defaults.get(name)
	}

	pub fn is_touched(&self, name: &str) -> bool {
		self.inner.store.borrow().touched.contains(name)
	}

	/// Restore defaults and clear errors, touched flags and submit state.
	///
	/// With `Some(values)` those become the new defaults.
	pub fn reset(&self, values: Option<S>) -> FormResult<()> {
		let new_defaults = values
			.map(|v| Values::from_typed(&v, &self.inner.schema))
			.transpose()?;
		{
			let mut store = self.inner.store.borrow_mut();
			if let Some(defaults) = new_defaults {
				store.defaults = defaults;
			}
			store.values = store.defaults.clone();
			store.errors.clear();
			store.touched.clear();
			store.is_submitting = false;
			store.is_submitted = false;
			store.is_submit_successful = false;
			store.submit_count = 0;
		}
		tracing::debug!("form reset");
		self.publish();
		Ok(())
	}

	/// Untyped snapshot of every value.
	pub fn values(&self) -> Values {
		self.inner.store.borrow().values.clone()
	}

	/// Typed snapshot of every value.
	pub fn get_values(&self) -> FormResult<S> {
		self.values().to_typed()
	}

	pub fn form_state(&self) -> FormState {
		self.inner.state.get()
	}

	/// Call `callback` whenever the selected slice of [`FormState`] changes.
	pub fn subscribe_state<U, F, C>(&self, selector: F, callback: C) -> Subscription
	where
		U: PartialEq + Clone + 'static,
		F: Fn(&FormState) -> U + 'static,
		C: Fn(&U) + 'static,
	{
		self.inner.state.select(selector, callback)
	}

	/// Call `callback` whenever the named field's value changes.
	pub fn watch<C>(&self, name: &str, callback: C) -> Subscription
	where
		C: Fn(&FieldValue) + 'static,
	{
		let name = name.to_string();
		self.inner.values.select(
			move |values| values.get(&name).cloned(),
			move |value| {
				if let Some(value) = value {
					callback(value);
				}
			},
		)
	}

	/// Call `callback` whenever any value changes.
	pub fn watch_all<C>(&self, callback: C) -> Subscription
	where
		C: Fn(&Values) + 'static,
	{
		self.inner
			.values
			.select(|values: &Values| values.clone(), callback)
	}

	/// Validate every registered field and run `on_valid` with the typed
	/// values, or `on_invalid` with the errors.
	///
	/// # Errors
	///
	/// [`SubmitError::Invalid`] when validation fails,
	/// [`SubmitError::Form`] when the values cannot be converted to `S`,
	/// [`SubmitError::Handler`] when `on_valid` fails.
	pub fn handle_submit<E, V, I>(&self, on_valid: V, on_invalid: I) -> Result<(), SubmitError<E>>
	where
		V: FnOnce(S) -> Result<(), E>,
		I: FnOnce(&FieldErrors),
	{
		let result = match self.begin_submit() {
			Ok(values) => on_valid(values).map_err(SubmitError::Handler),
			Err(err) => {
				if let SubmitError::Invalid(errors) = &err {
					on_invalid(errors);
				}
				Err(err)
			}
		};
		self.finish_submit(result.is_ok());
		result
	}

	/// Like [`handle_submit`](Self::handle_submit) with an asynchronous
	/// handler. `is_submitting` stays set until the handler completes.
	pub async fn handle_submit_async<E, V, Fut>(&self, on_valid: V) -> Result<(), SubmitError<E>>
	where
		V: FnOnce(S) -> Fut,
		Fut: Future<Output = Result<(), E>>,
	{
		let result = match self.begin_submit() {
			Ok(values) => on_valid(values).await.map_err(SubmitError::Handler),
			Err(err) => Err(err),
		};
		self.finish_submit(result.is_ok());
		result
	}

	fn begin_submit<E>(&self) -> Result<S, SubmitError<E>> {
		self.inner.store.borrow_mut().is_submitting = true;
		self.publish();

		let names = self.registered_names();
		self.validate_fields(&names);
		let errors = self.errors();
		if !errors.is_empty() {
			return Err(SubmitError::Invalid(errors));
		}
		Ok(self.get_values()?)
	}

	fn finish_submit(&self, successful: bool) {
		let count = {
			let mut store = self.inner.store.borrow_mut();
			store.is_submitting = false;
			store.is_submitted = true;
			store.is_submit_successful = successful;
			store.submit_count += 1;
			store.submit_count
		};
		tracing::info!(successful, submit_count = count, "form submitted");
		self.publish();
	}

	fn descriptor(&self, name: &str) -> FormResult<&FieldDescriptor> {
		self.inner
			.schema
			.field(name)
			.ok_or_else(|| FormError::UnknownField(name.to_string()))
	}

	fn check_kind<T: FieldType>(&self, name: &str) -> FormResult<()> {
		let field = self.descriptor(name)?;
		if T::accepts_kind(&field.kind) {
			Ok(())
		} else {
			Err(FormError::KindMismatch {
				field: name.to_string(),
				declared: field.kind.clone(),
				requested: T::TYPE_NAME,
			})
		}
	}

	fn registered_names(&self) -> Vec<String> {
		let store = self.inner.store.borrow();
		self.inner
			.schema
			.names()
			.filter(|name| store.mounts.contains_key(*name))
			.map(str::to_string)
			.collect()
	}

	fn validate_with_deps(&self, name: &str) {
		let deps = self
			.inner
			.store
			.borrow()
			.rules
			.get(name)
			.map(|rule| rule.deps.clone())
			.unwrap_or_default();
		let mut names = vec![name.to_string()];
		names.extend(deps.into_iter().filter(|dep| dep != name));
		self.validate_fields(&names);
	}

	/// Run each field's rule and record the outcome. Fields without a rule
	/// keep whatever error they have.
	fn validate_fields(&self, names: &[String]) -> bool {
		let criteria = self.inner.config.criteria_mode;
		let mut valid = true;
		for name in names {
			let (rule, value, values) = {
				let store = self.inner.store.borrow();
				let Some(rule) = store.rules.get(name).cloned() else {
					valid &= !store.errors.contains_key(name);
					continue;
				};
				let Some(value) = store.values.get(name).cloned() else {
					continue;
				};
				(rule, value, store.values.clone())
			};

			let outcome = validate_field(&rule, &value, &values, criteria);
			tracing::debug!(
				field = %name,
				valid = outcome.is_none(),
				"field validated"
			);

			let mut store = self.inner.store.borrow_mut();
			match outcome {
				Some(error) => {
					valid = false;
					store.errors.insert(name.clone(), error);
				}
				None => {
					store.errors.shift_remove(name);
				}
			}
		}
		valid
	}

	/// Whether every registered field would pass, without recording errors.
	fn silently_valid(&self) -> bool {
		let (checks, values) = {
			let store = self.inner.store.borrow();
			if !store.errors.is_empty() {
				return false;
			}
			let checks: Vec<_> = store
				.rules
				.iter()
				.filter(|(_, rule)| rule.has_constraints())
				.filter_map(|(name, rule)| {
					store
						.values
						.get(name)
						.map(|value| (rule.clone(), value.clone()))
				})
				.collect();
			(checks, store.values.clone())
		};
		let criteria = self.inner.config.criteria_mode;
		checks
			.iter()
			.all(|(rule, value)| validate_field(rule, value, &values, criteria).is_none())
	}

	fn compute_state(&self) -> FormState {
		let is_valid = self.silently_valid();
		let store = self.inner.store.borrow();
		let dirty_fields: IndexSet<String> = store
			.values
			.iter()
			.filter(|(name, value)| store.defaults.get(name) != Some(*value))
			.map(|(name, _)| name.to_string())
			.collect();
		FormState {
			is_dirty: !dirty_fields.is_empty(),
			dirty_fields,
			touched_fields: store.touched.clone(),
			is_submitting: store.is_submitting,
			is_submitted: store.is_submitted,
			is_submit_successful: store.is_submit_successful,
			submit_count: store.submit_count,
			is_valid,
			errors: store.errors.clone(),
		}
	}

	/// Push fresh snapshots to subscribers. The state is computed after the
	/// values round, so writes made by value watchers are part of it.
	fn publish(&self) {
		self.inner.values.set(self.values());
		self.inner.state.set(self.compute_state());
	}
}

/// Drop one registration of `name`; called when a binding is dropped.
fn release<S: FormValues>(inner: &Weak<ControlInner<S>>, name: &str) {
	let Some(inner) = inner.upgrade() else {
		return;
	};
	let control = FormControl { inner };
	{
		let mut store = control.inner.store.borrow_mut();
		let remaining = match store.mounts.get_mut(name) {
			Some(count) => {
				*count = count.saturating_sub(1);
				*count
			}
			None => return,
		};
		if remaining > 0 {
			return;
		}
		store.mounts.remove(name);
		store.rules.remove(name);
		if control.inner.config.should_unregister {
			if let Some(default) = store.defaults.get(name).cloned() {
				store.values.insert(name, default);
			}
			store.errors.shift_remove(name);
			store.touched.shift_remove(name);
		}
	}
	tracing::debug!(field = %name, "field unregistered");
	control.publish();
}

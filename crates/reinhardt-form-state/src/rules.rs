//! Validation rules attached to a field when it is registered
//!
//! A [`ValidationRule`] is the configuration bag an adapter hands to
//! [`FormControl::register`](crate::FormControl::register). Constraint options
//! are [`RuleValue`]s: either a bare value or a value paired with the message
//! to show when the constraint fails. The bare value is what a native input
//! attribute needs; the full rule is what the validator needs.
//!
//! ```
//! use reinhardt_form_state::RuleValue;
//!
//! let min_length = RuleValue::with_message(10usize, "too short");
//! assert_eq!(*min_length.value(), 10);
//! assert_eq!(min_length.message(), Some("too short"));
//!
//! let max_length: RuleValue<usize> = 64.into();
//! assert_eq!(max_length.message(), None);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::control::FormControl;
use crate::schema::Values;
use crate::value::FieldValue;

/// A constraint value, optionally paired with its failure message.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleValue<T> {
	Simple(T),
	WithMessage { value: T, message: String },
}

impl<T> RuleValue<T> {
	pub fn with_message(value: T, message: impl Into<String>) -> Self {
		RuleValue::WithMessage {
			value,
			message: message.into(),
		}
	}

	/// The bare constraint value.
	pub fn value(&self) -> &T {
		match self {
			RuleValue::Simple(value) | RuleValue::WithMessage { value, .. } => value,
		}
	}

	/// The configured failure message, if any.
	pub fn message(&self) -> Option<&str> {
		match self {
			RuleValue::Simple(_) => None,
			RuleValue::WithMessage { message, .. } => Some(message),
		}
	}
}

impl<T> From<T> for RuleValue<T> {
	fn from(value: T) -> Self {
		RuleValue::Simple(value)
	}
}

/// A compiled regular expression used by the `pattern` rule.
#[derive(Clone)]
pub struct Pattern(regex::Regex);

impl Pattern {
	pub fn new(pattern: &str) -> Result<Self, regex::Error> {
		regex::Regex::new(pattern).map(Self)
	}

	/// Canonical source text of the expression.
	pub fn as_str(&self) -> &str {
		self.0.as_str()
	}

	pub fn is_match(&self, value: &str) -> bool {
		self.0.is_match(value)
	}
}

impl fmt::Debug for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Pattern").field(&self.as_str()).finish()
	}
}

impl fmt::Display for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PartialEq for Pattern {
	fn eq(&self, other: &Self) -> bool {
		self.as_str() == other.as_str()
	}
}

impl From<regex::Regex> for Pattern {
	fn from(regex: regex::Regex) -> Self {
		Self(regex)
	}
}

/// Custom predicate: `Ok(())` when valid, `Err(message)` otherwise.
pub type ValidateFn = Rc<dyn Fn(&FieldValue, &Values) -> Result<(), String>>;

/// Custom validation: one predicate, or several named ones run in order.
#[derive(Clone)]
pub enum Validate {
	Single(ValidateFn),
	Named(Vec<(String, ValidateFn)>),
}

impl fmt::Debug for Validate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Validate::Single(_) => f.write_str("Validate::Single(<function>)"),
			Validate::Named(named) => f
				.debug_tuple("Validate::Named")
				.field(&named.iter().map(|(name, _)| name).collect::<Vec<_>>())
				.finish(),
		}
	}
}

/// Which field event a hook is reacting to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
	Change,
	Blur,
}

/// Payload handed to `on_change` / `on_blur` hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEvent {
	pub name: String,
	pub kind: EventKind,
	/// Value of the field after the event was applied
	pub value: FieldValue,
}

/// Side-effect hook run after the form's own bookkeeping for an event.
///
/// The hook receives the form control so it can update dependent fields.
pub type FieldHook<S> = Rc<dyn Fn(&FieldEvent, &FormControl<S>)>;

/// Configuration bag registered with a field.
pub struct ValidationRule<S> {
	pub required: Option<RuleValue<bool>>,
	pub min: Option<RuleValue<f64>>,
	pub max: Option<RuleValue<f64>>,
	pub min_length: Option<RuleValue<usize>>,
	pub max_length: Option<RuleValue<usize>>,
	pub pattern: Option<RuleValue<Pattern>>,
	pub validate: Option<Validate>,
	/// Fields re-validated whenever this one is validated
	pub deps: Vec<String>,
	/// Disabled fields are never validated
	pub disabled: bool,
	pub on_change: Option<FieldHook<S>>,
	pub on_blur: Option<FieldHook<S>>,
}

impl<S> ValidationRule<S> {
	pub fn new() -> Self {
		Self {
			required: None,
			min: None,
			max: None,
			min_length: None,
			max_length: None,
			pattern: None,
			validate: None,
			deps: Vec::new(),
			disabled: false,
			on_change: None,
			on_blur: None,
		}
	}

	pub fn required(mut self, rule: impl Into<RuleValue<bool>>) -> Self {
		self.required = Some(rule.into());
		self
	}

	pub fn min(mut self, rule: impl Into<RuleValue<f64>>) -> Self {
		self.min = Some(rule.into());
		self
	}

	pub fn max(mut self, rule: impl Into<RuleValue<f64>>) -> Self {
		self.max = Some(rule.into());
		self
	}

	pub fn min_length(mut self, rule: impl Into<RuleValue<usize>>) -> Self {
		self.min_length = Some(rule.into());
		self
	}

	pub fn max_length(mut self, rule: impl Into<RuleValue<usize>>) -> Self {
		self.max_length = Some(rule.into());
		self
	}

	pub fn pattern(mut self, rule: impl Into<RuleValue<Pattern>>) -> Self {
		self.pattern = Some(rule.into());
		self
	}

	/// Replace the custom validation with a single predicate.
	pub fn validate<F>(mut self, f: F) -> Self
	where
		F: Fn(&FieldValue, &Values) -> Result<(), String> + 'static,
	{
		self.validate = Some(Validate::Single(Rc::new(f)));
		self
	}

	/// Append a named predicate. A previously set single predicate is kept
	/// and runs first, under the name `validate`.
	pub fn validate_named<F>(mut self, name: impl Into<String>, f: F) -> Self
	where
		F: Fn(&FieldValue, &Values) -> Result<(), String> + 'static,
	{
		let entry: (String, ValidateFn) = (name.into(), Rc::new(f));
		self.validate = Some(match self.validate.take() {
			None => Validate::Named(vec![entry]),
			Some(Validate::Single(single)) => {
				Validate::Named(vec![("validate".to_string(), single), entry])
			}
			Some(Validate::Named(mut named)) => {
				named.push(entry);
				Validate::Named(named)
			}
		});
		self
	}

	pub fn deps<I, N>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = N>,
		N: Into<String>,
	{
		self.deps.extend(names.into_iter().map(Into::into));
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	pub fn on_change<F>(mut self, f: F) -> Self
	where
		F: Fn(&FieldEvent, &FormControl<S>) + 'static,
	{
		self.on_change = Some(Rc::new(f));
		self
	}

	pub fn on_blur<F>(mut self, f: F) -> Self
	where
		F: Fn(&FieldEvent, &FormControl<S>) + 'static,
	{
		self.on_blur = Some(Rc::new(f));
		self
	}

	/// Whether `required` is configured and truthy.
	pub fn is_required(&self) -> bool {
		self.required.as_ref().is_some_and(|r| *r.value())
	}

	/// Whether running this rule could ever produce an error.
	pub fn has_constraints(&self) -> bool {
		!self.disabled
			&& (self.is_required()
				|| self.min.is_some()
				|| self.max.is_some()
				|| self.min_length.is_some()
				|| self.max_length.is_some()
				|| self.pattern.is_some()
				|| self.validate.is_some())
	}
}

impl<S> Default for ValidationRule<S> {
	fn default() -> Self {
		Self::new()
	}
}

impl<S> Clone for ValidationRule<S> {
	fn clone(&self) -> Self {
		Self {
			required: self.required.clone(),
			min: self.min.clone(),
			max: self.max.clone(),
			min_length: self.min_length.clone(),
			max_length: self.max_length.clone(),
			pattern: self.pattern.clone(),
			validate: self.validate.clone(),
			deps: self.deps.clone(),
			disabled: self.disabled,
			on_change: self.on_change.clone(),
			on_blur: self.on_blur.clone(),
		}
	}
}

impl<S> fmt::Debug for ValidationRule<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ValidationRule")
			.field("required", &self.required)
			.field("min", &self.min)
			.field("max", &self.max)
			.field("min_length", &self.min_length)
			.field("max_length", &self.max_length)
			.field("pattern", &self.pattern)
			.field("validate", &self.validate)
			.field("deps", &self.deps)
			.field("disabled", &self.disabled)
			.field("on_change", &self.on_change.as_ref().map(|_| "<function>"))
			.field("on_blur", &self.on_blur.as_ref().map(|_| "<function>"))
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct NoForm;

	#[rstest]
	fn test_rule_value_projections() {
		let simple: RuleValue<f64> = 3.0.into();
		let with_message = RuleValue::with_message(5.0, "too small");

		assert_eq!(*simple.value(), 3.0);
		assert_eq!(simple.message(), None);
		assert_eq!(*with_message.value(), 5.0);
		assert_eq!(with_message.message(), Some("too small"));
	}

	#[rstest]
	fn test_pattern_keeps_source_text() {
		let pattern = Pattern::new(r"^\d{5}$").unwrap();
		assert_eq!(pattern.as_str(), r"^\d{5}$");
		assert!(pattern.is_match("12345"));
		assert!(!pattern.is_match("1234"));
	}

	#[rstest]
	#[case(None, false)]
	#[case(Some(RuleValue::Simple(false)), false)]
	#[case(Some(RuleValue::Simple(true)), true)]
	#[case(Some(RuleValue::with_message(true, "needed")), true)]
	fn test_is_required(#[case] required: Option<RuleValue<bool>>, #[case] expected: bool) {
		let mut rule = ValidationRule::<NoForm>::new();
		rule.required = required;
		assert_eq!(rule.is_required(), expected);
	}

	#[rstest]
	fn test_validate_named_keeps_single_predicate_first() {
		// Arrange
		let rule = ValidationRule::<NoForm>::new()
			.validate(|_, _| Ok(()))
			.validate_named("not_admin", |_, _| Ok(()));

		// Act
		let Some(Validate::Named(named)) = rule.validate else {
			panic!("expected named validators");
		};

		// Assert
		let names: Vec<_> = named.iter().map(|(name, _)| name.as_str()).collect();
		assert_eq!(names, vec!["validate", "not_admin"]);
	}

	#[rstest]
	fn test_disabled_rule_has_no_constraints() {
		let rule = ValidationRule::<NoForm>::new().required(true).disabled(true);
		assert!(!rule.has_constraints());
	}
}

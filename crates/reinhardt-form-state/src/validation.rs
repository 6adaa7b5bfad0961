//! The rule engine
//!
//! [`validate_field`] checks one field value against its [`ValidationRule`].
//! Rules run in a fixed order: `required`, `min`/`max`, `min_length`/
//! `max_length`, `pattern`, then custom `validate` predicates. A value that is
//! empty and not required skips the constraint checks; custom predicates
//! still run.

use std::fmt;

use indexmap::IndexMap;

use crate::config::CriteriaMode;
use crate::rules::{RuleValue, Validate, ValidationRule};
use crate::schema::Values;
use crate::value::FieldValue;

/// Which rule produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	Required,
	Min,
	Max,
	MinLength,
	MaxLength,
	Pattern,
	Validate,
	/// Set by the page through `FormControl::set_error`
	Manual,
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ErrorKind::Required => "required",
			ErrorKind::Min => "min",
			ErrorKind::Max => "max",
			ErrorKind::MinLength => "min_length",
			ErrorKind::MaxLength => "max_length",
			ErrorKind::Pattern => "pattern",
			ErrorKind::Validate => "validate",
			ErrorKind::Manual => "manual",
		};
		f.write_str(name)
	}
}

/// The error recorded against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
	/// The first failing rule
	pub kind: ErrorKind,
	pub message: String,
	/// Name of the failing predicate for named `validate` lists
	pub validator: Option<String>,
	/// Every failing rule, filled only with [`CriteriaMode::All`]
	pub types: Vec<(ErrorKind, String)>,
}

impl FieldError {
	pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			message: message.into(),
			validator: None,
			types: Vec::new(),
		}
	}

	pub fn manual(message: impl Into<String>) -> Self {
		Self::new(ErrorKind::Manual, message)
	}
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

/// Errors keyed by field name, in the order they were recorded.
pub type FieldErrors = IndexMap<String, FieldError>;

/// What an adapter reads to decide whether to show an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationState {
	pub invalid: bool,
	pub message: Option<String>,
}

impl ValidationState {
	pub fn valid() -> Self {
		Self::default()
	}

	pub fn from_error(error: Option<&FieldError>) -> Self {
		match error {
			Some(error) => Self {
				invalid: true,
				message: Some(error.message.clone()),
			},
			None => Self::valid(),
		}
	}

	/// The message to display, present only while the field is invalid.
	pub fn error_message(&self) -> Option<&str> {
		if self.invalid {
			self.message.as_deref()
		} else {
			None
		}
	}
}

struct Failure {
	kind: ErrorKind,
	message: String,
	validator: Option<String>,
}

fn message_or<T>(rule: &RuleValue<T>, default: impl FnOnce() -> String) -> String {
	rule.message().map(str::to_string).unwrap_or_else(default)
}

/// Check `value` against `rule`.
///
/// Returns `None` when the value passes or the rule is disabled.
pub fn validate_field<S>(
	rule: &ValidationRule<S>,
	value: &FieldValue,
	values: &Values,
	criteria: CriteriaMode,
) -> Option<FieldError> {
	if rule.disabled {
		return None;
	}

	let collect_all = criteria == CriteriaMode::All;
	let mut failures: Vec<Failure> = Vec::new();
	let mut fail = |kind: ErrorKind, message: String, validator: Option<String>| {
		failures.push(Failure {
			kind,
			message,
			validator,
		});
		!collect_all
	};

	'checks: {
		let empty = value.is_empty();
		if let Some(required) = &rule.required
			&& *required.value()
			&& empty
			&& fail(
				ErrorKind::Required,
				message_or(required, || "This field is required.".to_string()),
				None,
			) {
			break 'checks;
		}

		if !empty && let Some(text) = value.as_text() {
			if let Ok(number) = text.trim().parse::<f64>() {
				if let Some(min) = &rule.min
					&& number < *min.value()
					&& fail(
						ErrorKind::Min,
						message_or(min, || {
							format!(
								"Ensure this value is greater than or equal to {}.",
								min.value()
							)
						}),
						None,
					) {
					break 'checks;
				}
				if let Some(max) = &rule.max
					&& number > *max.value()
					&& fail(
						ErrorKind::Max,
						message_or(max, || {
							format!("Ensure this value is less than or equal to {}.", max.value())
						}),
						None,
					) {
					break 'checks;
				}
			}

			let length = text.chars().count();
			if let Some(min_length) = &rule.min_length
				&& length < *min_length.value()
				&& fail(
					ErrorKind::MinLength,
					message_or(min_length, || {
						format!(
							"Ensure this value has at least {} characters (it has {}).",
							min_length.value(),
							length
						)
					}),
					None,
				) {
				break 'checks;
			}
			if let Some(max_length) = &rule.max_length
				&& length > *max_length.value()
				&& fail(
					ErrorKind::MaxLength,
					message_or(max_length, || {
						format!(
							"Ensure this value has at most {} characters (it has {}).",
							max_length.value(),
							length
						)
					}),
					None,
				) {
				break 'checks;
			}

			if let Some(pattern) = &rule.pattern
				&& !pattern.value().is_match(text)
				&& fail(
					ErrorKind::Pattern,
					message_or(pattern, || "Enter a valid value.".to_string()),
					None,
				) {
				break 'checks;
			}
		}

		match &rule.validate {
			None => {}
			Some(Validate::Single(predicate)) => {
				if let Err(message) = predicate(value, values) {
					fail(ErrorKind::Validate, message, None);
				}
			}
			Some(Validate::Named(predicates)) => {
				for (name, predicate) in predicates {
					if let Err(message) = predicate(value, values)
						&& fail(ErrorKind::Validate, message, Some(name.clone()))
					{
						break 'checks;
					}
				}
			}
		}
	}

	let mut failures = failures.into_iter();
	let first = failures.next()?;
	let mut error = FieldError {
		kind: first.kind,
		message: first.message.clone(),
		validator: first.validator,
		types: Vec::new(),
	};
	if collect_all {
		error.types.push((first.kind, first.message));
		error
			.types
			.extend(failures.map(|failure| (failure.kind, failure.message)));
	}
	Some(error)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::Pattern;
	use rstest::rstest;

	struct NoForm;

	fn rule() -> ValidationRule<NoForm> {
		ValidationRule::new()
	}

	fn check(rule: &ValidationRule<NoForm>, value: impl Into<FieldValue>) -> Option<FieldError> {
		validate_field(rule, &value.into(), &Values::default(), CriteriaMode::FirstError)
	}

	#[rstest]
	fn test_required_uses_default_message() {
		let error = check(&rule().required(true), "").unwrap();
		assert_eq!(error.kind, ErrorKind::Required);
		assert_eq!(error.message, "This field is required.");
	}

	#[rstest]
	fn test_required_unchecked_checkbox_fails() {
		let error = check(&rule().required(RuleValue::with_message(true, "Accept the terms")), false);
		assert_eq!(error.map(|e| e.message), Some("Accept the terms".to_string()));
	}

	#[rstest]
	#[case("", Some(ErrorKind::Required))]
	#[case("  ", None)]
	#[case("x", None)]
	fn test_required_only_rejects_empty_string(
		#[case] input: &str,
		#[case] expected: Option<ErrorKind>,
	) {
		let outcome = check(&rule().required(true), input);
		assert_eq!(outcome.map(|e| e.kind), expected);
	}

	#[rstest]
	fn test_required_false_allows_empty() {
		assert_eq!(check(&rule().required(false), ""), None);
	}

	#[rstest]
	#[case("4", Some(ErrorKind::Min))]
	#[case("5", None)]
	#[case("10", None)]
	#[case("11", Some(ErrorKind::Max))]
	#[case("abc", None)]
	fn test_min_max_only_apply_to_numbers(
		#[case] input: &str,
		#[case] expected: Option<ErrorKind>,
	) {
		let rule = rule().min(5.0).max(10.0);
		assert_eq!(check(&rule, input).map(|e| e.kind), expected);
	}

	#[rstest]
	fn test_min_default_message_formats_integral_bound() {
		let error = check(&rule().min(18.0), "17").unwrap();
		assert_eq!(error.message, "Ensure this value is greater than or equal to 18.");
	}

	#[rstest]
	fn test_min_length_counts_characters() {
		// Arrange
		let rule = rule().min_length(3usize);

		// Act
		let multibyte = check(&rule, "日本語");
		let short = check(&rule, "ab").unwrap();

		// Assert
		assert_eq!(multibyte, None);
		assert_eq!(
			short.message,
			"Ensure this value has at least 3 characters (it has 2)."
		);
	}

	#[rstest]
	fn test_min_length_message_from_rule() {
		let rule = rule().min_length(RuleValue::with_message(10usize, "too short"));
		assert_eq!(check(&rule, "abc").map(|e| e.message), Some("too short".to_string()));
	}

	#[rstest]
	fn test_pattern_mismatch() {
		let rule = rule().pattern(Pattern::new(r"^\d{5}$").unwrap());
		assert_eq!(check(&rule, "1234").map(|e| e.kind), Some(ErrorKind::Pattern));
		assert_eq!(check(&rule, "12345"), None);
	}

	#[rstest]
	fn test_empty_optional_value_skips_constraints() {
		let rule = rule()
			.min_length(3usize)
			.pattern(Pattern::new("^x").unwrap());
		assert_eq!(check(&rule, ""), None);
	}

	#[rstest]
	fn test_validate_runs_on_empty_value() {
		let rule = rule().validate(|value, _| {
			if value.is_empty() {
				Err("Pick something".to_string())
			} else {
				Ok(())
			}
		});
		assert_eq!(check(&rule, "").map(|e| e.message), Some("Pick something".to_string()));
	}

	#[rstest]
	fn test_named_validator_reports_its_name() {
		let rule = rule()
			.validate_named("lowercase", |value, _| match value.as_text() {
				Some(text) if text.to_lowercase() == text => Ok(()),
				_ => Err("Use lowercase".to_string()),
			})
			.validate_named("not_admin", |value, _| {
				if value.as_text() == Some("admin") {
					Err("Reserved name".to_string())
				} else {
					Ok(())
				}
			});

		let error = check(&rule, "admin").unwrap();

		assert_eq!(error.kind, ErrorKind::Validate);
		assert_eq!(error.validator.as_deref(), Some("not_admin"));
	}

	#[rstest]
	fn test_rules_run_in_order() {
		// Arrange
		let rule = rule()
			.min_length(RuleValue::with_message(5usize, "length"))
			.pattern(RuleValue::with_message(Pattern::new("^z").unwrap(), "pattern"))
			.validate(|_, _| Err("custom".to_string()));

		// Act
		let first = check(&rule, "abc").unwrap();
		let all = validate_field(
			&rule,
			&FieldValue::from("abc"),
			&Values::default(),
			CriteriaMode::All,
		)
		.unwrap();

		// Assert
		assert_eq!(first.message, "length");
		assert!(first.types.is_empty());
		assert_eq!(all.message, "length");
		assert_eq!(
			all.types,
			vec![
				(ErrorKind::MinLength, "length".to_string()),
				(ErrorKind::Pattern, "pattern".to_string()),
				(ErrorKind::Validate, "custom".to_string()),
			]
		);
	}

	#[rstest]
	fn test_disabled_rule_never_fails() {
		let rule = rule().required(true).disabled(true);
		assert_eq!(check(&rule, ""), None);
	}

	#[rstest]
	fn test_validation_state_hides_message_when_valid() {
		let state = ValidationState {
			invalid: false,
			message: Some("stale".to_string()),
		};
		assert_eq!(state.error_message(), None);
		let invalid = ValidationState::from_error(Some(&FieldError::manual("taken")));
		assert_eq!(invalid.error_message(), Some("taken"));
	}
}

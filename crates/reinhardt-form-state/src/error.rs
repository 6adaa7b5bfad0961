//! Error types for form-state management

use crate::validation::FieldErrors;
use crate::value::FieldKind;

/// Errors raised while building a form or binding fields to it.
///
/// Validation failures are not errors in this sense: they are recorded on
/// the form as [`FieldError`](crate::FieldError)s and surface through
/// [`SubmitError::Invalid`] at submit time.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Unknown field: {0}")]
	UnknownField(String),

	#[error("Field '{field}' is declared as {declared} but was bound as {requested}")]
	KindMismatch {
		field: String,
		declared: FieldKind,
		requested: &'static str,
	},

	#[error("Invalid schema: {0}")]
	InvalidSchema(String),

	#[error("Invalid value for '{field}': {message}")]
	InvalidValue { field: String, message: String },

	#[error("Failed to convert form values: {0}")]
	Deserialize(#[from] serde_json::Error),

	#[error("Invalid form configuration: {0}")]
	Config(String),
}

pub type FormResult<T> = Result<T, FormError>;

/// Outcome of a failed submit.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError<E> {
	/// One or more fields failed validation; the success path was not run.
	#[error("Form has {} invalid field(s)", .0.len())]
	Invalid(FieldErrors),

	/// The values passed validation but could not be converted into the
	/// typed form values.
	#[error(transparent)]
	Form(#[from] FormError),

	/// The submit handler itself reported a failure.
	#[error("Submit handler failed: {0}")]
	Handler(E),
}

impl<E> SubmitError<E> {
	/// Field errors when the submit was rejected by validation.
	pub fn field_errors(&self) -> Option<&FieldErrors> {
		match self {
			SubmitError::Invalid(errors) => Some(errors),
			_ => None,
		}
	}
}

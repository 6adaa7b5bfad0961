//! Adapter misconfiguration errors

use reinhardt_form_state::FormError;

/// Errors raised when an adapter is mounted.
///
/// These are programming errors in the page: they are reported once, at
/// mount time, and never while the user is editing.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
	/// The form rejected the binding (unknown field or kind mismatch)
	#[error(transparent)]
	Form(#[from] FormError),

	#[error("Duplicate option value '{value}' for field '{field}'")]
	DuplicateOption { field: String, value: String },

	#[error("Duplicate radio id '{id}' for field '{field}'")]
	DuplicateRadioId { field: String, id: String },
}

pub type AdapterResult<T> = Result<T, AdapterError>;

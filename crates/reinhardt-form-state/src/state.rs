//! Whole-form aggregate state

use indexmap::IndexSet;

use crate::validation::FieldErrors;

/// Snapshot of the form's aggregate flags.
///
/// Adapters only read this; it is republished by the control after every
/// write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
	/// Any field differs from its default
	pub is_dirty: bool,
	pub dirty_fields: IndexSet<String>,
	pub touched_fields: IndexSet<String>,
	pub is_submitting: bool,
	pub is_submitted: bool,
	pub is_submit_successful: bool,
	pub submit_count: u32,
	/// No recorded errors and every registered field passes its rules
	pub is_valid: bool,
	pub errors: FieldErrors,
}

impl FormState {
	pub fn is_field_dirty(&self, name: &str) -> bool {
		self.dirty_fields.contains(name)
	}

	pub fn is_field_touched(&self, name: &str) -> bool {
		self.touched_fields.contains(name)
	}
}

//! Option lists for selectable controls

use std::collections::HashSet;

use crate::error::{AdapterError, AdapterResult};

/// One `{label, value}` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
	pub label: String,
	pub value: String,
	pub disabled: bool,
	/// Shown under the entry by choice lists
	pub help_text: Option<String>,
}

impl SelectOption {
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
			disabled: false,
			help_text: None,
		}
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}
}

impl<L: Into<String>, V: Into<String>> From<(L, V)> for SelectOption {
	fn from((label, value): (L, V)) -> Self {
		Self::new(label, value)
	}
}

/// Ordered option entries. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionList {
	options: Vec<SelectOption>,
}

impl OptionList {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, option: impl Into<SelectOption>) {
		self.options.push(option.into());
	}

	pub fn with(mut self, option: impl Into<SelectOption>) -> Self {
		self.push(option);
		self
	}

	pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
		self.options.iter()
	}

	pub fn len(&self) -> usize {
		self.options.len()
	}

	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	pub fn contains_value(&self, value: &str) -> bool {
		self.options.iter().any(|o| o.value == value)
	}

	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.options.iter().map(|o| o.value.as_str())
	}

	/// Reject lists where two entries share a value.
	pub fn ensure_unique(&self, field: &str) -> AdapterResult<()> {
		let mut seen = HashSet::with_capacity(self.options.len());
		for option in &self.options {
			if !seen.insert(option.value.as_str()) {
				return Err(AdapterError::DuplicateOption {
					field: field.to_string(),
					value: option.value.clone(),
				});
			}
		}
		Ok(())
	}

	pub fn into_vec(self) -> Vec<SelectOption> {
		self.options
	}
}

impl<O: Into<SelectOption>> FromIterator<O> for OptionList {
	fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
		Self {
			options: iter.into_iter().map(Into::into).collect(),
		}
	}
}

impl<'a> IntoIterator for &'a OptionList {
	type Item = &'a SelectOption;
	type IntoIter = std::slice::Iter<'a, SelectOption>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// One radio in a radio group.
///
/// `id` is both the value written to the field when the radio is chosen and
/// the rendering key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
	pub id: String,
	pub label: String,
	pub help_text: Option<String>,
	pub disabled: bool,
}

impl RadioOption {
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			help_text: None,
			disabled: false,
		}
	}

	pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

/// Reject radio lists where two entries share an id.
pub fn ensure_unique_ids(field: &str, options: &[RadioOption]) -> AdapterResult<()> {
	let mut seen = HashSet::with_capacity(options.len());
	for option in options {
		if !seen.insert(option.id.as_str()) {
			return Err(AdapterError::DuplicateRadioId {
				field: field.to_string(),
				id: option.id.clone(),
			});
		}
	}
	Ok(())
}

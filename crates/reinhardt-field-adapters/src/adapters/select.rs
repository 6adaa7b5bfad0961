//! Select adapter
//!
//! Binds a single-valued string field to a dropdown. The selected option's
//! value is forwarded to the form unchanged.

use reinhardt_form_state::{FieldBinding, FieldKey, FormControl, FormValues, ValidationRule};

use super::{FieldAdapter, rule_setters};
use crate::callback::Callback;
use crate::error::AdapterResult;
use crate::merge::{Overrides, apply, apply_opt, default_label, merge_overrides};
use crate::options::{OptionList, SelectOption};
use crate::primitives::SelectProps;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectDisplay {
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub help_text: Option<String>,
	pub disabled: Option<bool>,
	pub label_inline: Option<bool>,
}

impl Overrides<SelectProps> for SelectDisplay {
	fn apply_to(&self, props: &mut SelectProps) {
		apply(&mut props.label, &self.label);
		apply_opt(&mut props.placeholder, &self.placeholder);
		apply_opt(&mut props.help_text, &self.help_text);
		apply(&mut props.disabled, &self.disabled);
		apply(&mut props.label_inline, &self.label_inline);
	}
}

/// Builder for a dropdown bound to a string field.
pub struct Select<S: FormValues> {
	control: FormControl<S>,
	key: FieldKey<S, String>,
	options: OptionList,
	rule: ValidationRule<S>,
	display: SelectDisplay,
}

impl<S: FormValues> Select<S> {
	pub fn new(control: &FormControl<S>, key: FieldKey<S, String>) -> Self {
		Self {
			control: control.clone(),
			key,
			options: OptionList::new(),
			rule: ValidationRule::new(),
			display: SelectDisplay::default(),
		}
	}

	pub fn options(mut self, options: impl IntoIterator<Item = impl Into<SelectOption>>) -> Self {
		self.options = options.into_iter().collect();
		self
	}

	pub fn option(mut self, option: impl Into<SelectOption>) -> Self {
		self.options.push(option);
		self
	}

	rule_setters!();

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.display.label = Some(label.into());
		self
	}

	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.display.placeholder = Some(placeholder.into());
		self
	}

	pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
		self.display.help_text = Some(help_text.into());
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.display.disabled = Some(disabled);
		self
	}

	pub fn label_inline(mut self, label_inline: bool) -> Self {
		self.display.label_inline = Some(label_inline);
		self
	}

	/// Bind the field.
	///
	/// # Errors
	///
	/// [`AdapterError::DuplicateOption`](crate::AdapterError::DuplicateOption)
	/// when two options share a value, or a form error for a bad key.
	pub fn mount(self) -> AdapterResult<MountedSelect<S>> {
		self.options.ensure_unique(self.key.name())?;
		let mut rule = self.rule;
		if self.display.disabled == Some(true) {
			rule.disabled = true;
		}
		let binding = self.control.register(self.key, rule)?;
		tracing::debug!(
			field = %self.key.name(),
			options = self.options.len(),
			"select mounted"
		);
		Ok(MountedSelect {
			binding,
			options: self.options,
			display: self.display,
		})
	}
}

/// A mounted dropdown. Dropping it unmounts the field.
pub struct MountedSelect<S: FormValues> {
	binding: FieldBinding<S, String>,
	options: OptionList,
	display: SelectDisplay,
}

impl<S: FormValues> MountedSelect<S> {
	pub fn binding(&self) -> &FieldBinding<S, String> {
		&self.binding
	}

	pub fn options(&self) -> &OptionList {
		&self.options
	}
}

impl<S: FormValues> FieldAdapter for MountedSelect<S> {
	type Props = SelectProps;

	fn name(&self) -> &'static str {
		self.binding.name()
	}

	fn render(&self) -> SelectProps {
		let name = self.binding.name();
		let change = self.binding.handle();
		let blur = self.binding.handle();
		let computed = SelectProps {
			name: name.to_string(),
			label: default_label(name),
			options: self.options.clone().into_vec(),
			value: self.binding.value(),
			required_indicator: self
				.binding
				.control()
				.rule(name)
				.is_some_and(|rule| rule.is_required()),
			error: self
				.binding
				.validation_state()
				.error_message()
				.map(str::to_string),
			on_change: Some(Callback::new(move |value: String| change.set_value(value))),
			on_blur: Some(Callback::new(move |()| blur.on_blur())),
			..SelectProps::default()
		};
		merge_overrides(computed, &self.display)
	}
}

//! Checkbox adapter
//!
//! `checked` always comes from the binding; the primitive never keeps its
//! own copy.

use reinhardt_form_state::{FieldBinding, FieldKey, FormControl, FormValues, ValidationRule};

use super::{FieldAdapter, rule_setters};
use crate::callback::Callback;
use crate::error::AdapterResult;
use crate::merge::{Overrides, apply, apply_opt, default_label, merge_overrides};
use crate::primitives::CheckboxProps;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckboxDisplay {
	pub label: Option<String>,
	pub help_text: Option<String>,
	pub disabled: Option<bool>,
}

impl Overrides<CheckboxProps> for CheckboxDisplay {
	fn apply_to(&self, props: &mut CheckboxProps) {
		apply(&mut props.label, &self.label);
		apply_opt(&mut props.help_text, &self.help_text);
		apply(&mut props.disabled, &self.disabled);
	}
}

/// Builder for a checkbox bound to a boolean field.
pub struct Checkbox<S: FormValues> {
	control: FormControl<S>,
	key: FieldKey<S, bool>,
	rule: ValidationRule<S>,
	display: CheckboxDisplay,
}

impl<S: FormValues> Checkbox<S> {
	pub fn new(control: &FormControl<S>, key: FieldKey<S, bool>) -> Self {
		Self {
			control: control.clone(),
			key,
			rule: ValidationRule::new(),
			display: CheckboxDisplay::default(),
		}
	}

	rule_setters!();

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.display.label = Some(label.into());
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

	pub fn mount(self) -> AdapterResult<MountedCheckbox<S>> {
		let mut rule = self.rule;
		if self.display.disabled == Some(true) {
			rule.disabled = true;
		}
		let binding = self.control.register(self.key, rule)?;
		tracing::debug!(field = %self.key.name(), "checkbox mounted");
		Ok(MountedCheckbox {
			binding,
			display: self.display,
		})
	}
}

/// A mounted checkbox. Dropping it unmounts the field.
pub struct MountedCheckbox<S: FormValues> {
	binding: FieldBinding<S, bool>,
	display: CheckboxDisplay,
}

impl<S: FormValues> MountedCheckbox<S> {
	pub fn binding(&self) -> &FieldBinding<S, bool> {
		&self.binding
	}
}

impl<S: FormValues> FieldAdapter for MountedCheckbox<S> {
	type Props = CheckboxProps;

	fn name(&self) -> &'static str {
		self.binding.name()
	}

	fn render(&self) -> CheckboxProps {
		let name = self.binding.name();
		let change = self.binding.handle();
		let blur = self.binding.handle();
		let computed = CheckboxProps {
			name: name.to_string(),
			label: default_label(name),
			checked: self.binding.value(),
			error: self
				.binding
				.validation_state()
				.error_message()
				.map(str::to_string),
			on_change: Some(Callback::new(move |checked: bool| change.set_value(checked))),
			on_blur: Some(Callback::new(move |()| blur.on_blur())),
			..CheckboxProps::default()
		};
		merge_overrides(computed, &self.display)
	}
}

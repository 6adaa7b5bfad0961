//! RadioGroup adapter
//!
//! Renders one radio per [`RadioOption`]. A radio is checked exactly when the
//! field's value equals its id. Each radio reports `(checked, id)`; only the
//! id is written to the field.

use reinhardt_form_state::{FieldBinding, FieldKey, FormControl, FormValues, ValidationRule};

use super::{FieldAdapter, rule_setters};
use crate::callback::Callback;
use crate::error::AdapterResult;
use crate::merge::{Overrides, apply, default_label, merge_overrides};
use crate::options::{RadioOption, ensure_unique_ids};
use crate::primitives::{Direction, RadioButtonProps, RadioGroupProps};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadioGroupDisplay {
	pub title: Option<String>,
	pub direction: Option<Direction>,
	/// Disables every radio in the group
	pub disabled: Option<bool>,
}

impl Overrides<RadioGroupProps> for RadioGroupDisplay {
	fn apply_to(&self, props: &mut RadioGroupProps) {
		apply(&mut props.title, &self.title);
		apply(&mut props.direction, &self.direction);
		if self.disabled == Some(true) {
			for button in &mut props.buttons {
				button.disabled = true;
			}
		}
	}
}

/// Builder for a radio group bound to a string field.
pub struct RadioGroup<S: FormValues> {
	control: FormControl<S>,
	key: FieldKey<S, String>,
	options: Vec<RadioOption>,
	rule: ValidationRule<S>,
	display: RadioGroupDisplay,
}

impl<S: FormValues> RadioGroup<S> {
	pub fn new(control: &FormControl<S>, key: FieldKey<S, String>) -> Self {
		Self {
			control: control.clone(),
			key,
			options: Vec::new(),
			rule: ValidationRule::new(),
			display: RadioGroupDisplay::default(),
		}
	}

	pub fn options(mut self, options: impl IntoIterator<Item = RadioOption>) -> Self {
		self.options = options.into_iter().collect();
		self
	}

	pub fn option(mut self, option: RadioOption) -> Self {
		self.options.push(option);
		self
	}

	rule_setters!();

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.display.title = Some(title.into());
		self
	}

	pub fn horizontal(mut self) -> Self {
		self.display.direction = Some(Direction::Horizontal);
		self
	}

	pub fn direction(mut self, direction: Direction) -> Self {
		self.display.direction = Some(direction);
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.display.disabled = Some(disabled);
		self
	}

	/// Bind the field.
	///
	/// # Errors
	///
	/// [`AdapterError::DuplicateRadioId`](crate::AdapterError::DuplicateRadioId)
	/// when two radios share an id, or a form error for a bad key.
	pub fn mount(self) -> AdapterResult<MountedRadioGroup<S>> {
		ensure_unique_ids(self.key.name(), &self.options)?;
		let mut rule = self.rule;
		if self.display.disabled == Some(true) {
			rule.disabled = true;
		}
		let binding = self.control.register(self.key, rule)?;
		tracing::debug!(
			field = %self.key.name(),
			radios = self.options.len(),
			"radio group mounted"
		);
		Ok(MountedRadioGroup {
			binding,
			options: self.options,
			display: self.display,
		})
	}
}

/// A mounted radio group. Dropping it unmounts the field.
pub struct MountedRadioGroup<S: FormValues> {
	binding: FieldBinding<S, String>,
	options: Vec<RadioOption>,
	display: RadioGroupDisplay,
}

impl<S: FormValues> MountedRadioGroup<S> {
	pub fn binding(&self) -> &FieldBinding<S, String> {
		&self.binding
	}

	pub fn options(&self) -> &[RadioOption] {
		&self.options
	}
}

impl<S: FormValues> FieldAdapter for MountedRadioGroup<S> {
	type Props = RadioGroupProps;

	fn name(&self) -> &'static str {
		self.binding.name()
	}

	fn render(&self) -> RadioGroupProps {
		let name = self.binding.name();
		let value = self.binding.value();
		let change = self.binding.handle();
		let on_change: Callback<(bool, String)> =
			Callback::new(move |(_checked, id): (bool, String)| change.set_value(id));
		let blur = self.binding.handle();
		let on_blur: Callback<()> = Callback::new(move |()| blur.on_blur());

		let buttons = self
			.options
			.iter()
			.map(|option| RadioButtonProps {
				id: option.id.clone(),
				name: name.to_string(),
				label: option.label.clone(),
				help_text: option.help_text.clone(),
				checked: value == option.id,
				disabled: option.disabled,
				on_change: Some(on_change.clone()),
				on_blur: Some(on_blur.clone()),
			})
			.collect();

		let computed = RadioGroupProps {
			name: name.to_string(),
			title: default_label(name),
			direction: Direction::Vertical,
			buttons,
			error: self
				.binding
				.validation_state()
				.error_message()
				.map(str::to_string),
		};
		merge_overrides(computed, &self.display)
	}
}

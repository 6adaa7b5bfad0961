//! SingleChoiceList adapter
//!
//! Drives a multi-select capable choice list as a single-valued field.
//! Multiple selection is always off. The field value `v` is shown as the
//! selection `[v]`, and a reported selection writes its first element.

use reinhardt_form_state::{FieldBinding, FieldKey, FormControl, FormValues, ValidationRule};

use super::{FieldAdapter, rule_setters};
use crate::callback::Callback;
use crate::error::AdapterResult;
use crate::merge::{Overrides, apply, default_label, merge_overrides};
use crate::options::{OptionList, SelectOption};
use crate::primitives::ChoiceListProps;

/// Display settings. There is deliberately no `allow_multiple` here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingleChoiceListDisplay {
	pub title: Option<String>,
	pub disabled: Option<bool>,
}

impl Overrides<ChoiceListProps> for SingleChoiceListDisplay {
	fn apply_to(&self, props: &mut ChoiceListProps) {
		apply(&mut props.title, &self.title);
		apply(&mut props.disabled, &self.disabled);
	}
}

/// Builder for a single-valued choice list bound to a string field.
pub struct SingleChoiceList<S: FormValues> {
	control: FormControl<S>,
	key: FieldKey<S, String>,
	choices: OptionList,
	rule: ValidationRule<S>,
	display: SingleChoiceListDisplay,
}

impl<S: FormValues> SingleChoiceList<S> {
	pub fn new(control: &FormControl<S>, key: FieldKey<S, String>) -> Self {
		Self {
			control: control.clone(),
			key,
			choices: OptionList::new(),
			rule: ValidationRule::new(),
			display: SingleChoiceListDisplay::default(),
		}
	}

	pub fn choices(mut self, choices: impl IntoIterator<Item = impl Into<SelectOption>>) -> Self {
		self.choices = choices.into_iter().collect();
		self
	}

	pub fn choice(mut self, choice: impl Into<SelectOption>) -> Self {
		self.choices.push(choice);
		self
	}

	rule_setters!();

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.display.title = Some(title.into());
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.display.disabled = Some(disabled);
		self
	}

	pub fn mount(self) -> AdapterResult<MountedSingleChoiceList<S>> {
		self.choices.ensure_unique(self.key.name())?;
		let mut rule = self.rule;
		if self.display.disabled == Some(true) {
			rule.disabled = true;
		}
		let binding = self.control.register(self.key, rule)?;
		tracing::debug!(
			field = %self.key.name(),
			choices = self.choices.len(),
			"single choice list mounted"
		);
		Ok(MountedSingleChoiceList {
			binding,
			choices: self.choices,
			display: self.display,
		})
	}
}

/// A mounted single choice list. Dropping it unmounts the field.
pub struct MountedSingleChoiceList<S: FormValues> {
	binding: FieldBinding<S, String>,
	choices: OptionList,
	display: SingleChoiceListDisplay,
}

impl<S: FormValues> MountedSingleChoiceList<S> {
	pub fn binding(&self) -> &FieldBinding<S, String> {
		&self.binding
	}
}

impl<S: FormValues> FieldAdapter for MountedSingleChoiceList<S> {
	type Props = ChoiceListProps;

	fn name(&self) -> &'static str {
		self.binding.name()
	}

	fn render(&self) -> ChoiceListProps {
		let name = self.binding.name();
		let change = self.binding.handle();
		let computed = ChoiceListProps {
			name: name.to_string(),
			title: default_label(name),
			choices: self.choices.clone().into_vec(),
			selected: vec![self.binding.value()],
			allow_multiple: false,
			disabled: false,
			error: self
				.binding
				.validation_state()
				.error_message()
				.map(str::to_string),
			on_change: Some(Callback::new(move |selection: Vec<String>| {
				match selection.into_iter().next() {
					Some(first) => change.set_value(first),
					None => tracing::warn!(
						field = %change.name(),
						"empty choice selection ignored"
					),
				}
			})),
		};
		merge_overrides(computed, &self.display)
	}
}

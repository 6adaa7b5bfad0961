//! TextField adapter
//!
//! Binds a string field (text or numeric-as-string) to a [`TextInputProps`].
//! Constraint rules are projected twice: the bare value becomes a native
//! input attribute, the full rule (with its message) goes to the form.

use reinhardt_form_state::{
	FieldBinding, FieldKey, FieldKind, FormControl, FormValues, Pattern, RuleValue, ValidationRule,
};

use super::{FieldAdapter, rule_setters};
use crate::callback::Callback;
use crate::error::AdapterResult;
use crate::merge::{Overrides, apply, apply_opt, default_label, merge_overrides};
use crate::primitives::{InputMode, InputType, TextInputProps};

/// Display settings a caller may set on a text field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFieldDisplay {
	pub label: Option<String>,
	pub placeholder: Option<String>,
	pub autocomplete: Option<String>,
	pub input_mode: Option<InputMode>,
	pub input_type: Option<InputType>,
	pub help_text: Option<String>,
	pub disabled: Option<bool>,
	pub multiline: Option<u32>,
	pub prefix: Option<String>,
	pub suffix: Option<String>,
	pub clear_button: Option<bool>,
}

impl Overrides<TextInputProps> for TextFieldDisplay {
	fn apply_to(&self, props: &mut TextInputProps) {
		apply(&mut props.label, &self.label);
		apply_opt(&mut props.placeholder, &self.placeholder);
		apply_opt(&mut props.autocomplete, &self.autocomplete);
		apply_opt(&mut props.input_mode, &self.input_mode);
		apply(&mut props.input_type, &self.input_type);
		apply_opt(&mut props.help_text, &self.help_text);
		apply(&mut props.disabled, &self.disabled);
		apply_opt(&mut props.multiline, &self.multiline);
		apply_opt(&mut props.prefix, &self.prefix);
		apply_opt(&mut props.suffix, &self.suffix);
		apply(&mut props.clear_button, &self.clear_button);
	}
}

/// Builder for a text field bound to `key`.
pub struct TextField<S: FormValues> {
	control: FormControl<S>,
	key: FieldKey<S, String>,
	rule: ValidationRule<S>,
	display: TextFieldDisplay,
}

impl<S: FormValues> TextField<S> {
	pub fn new(control: &FormControl<S>, key: FieldKey<S, String>) -> Self {
		Self {
			control: control.clone(),
			key,
			rule: ValidationRule::new(),
			display: TextFieldDisplay::default(),
		}
	}

	rule_setters!();

	pub fn min(mut self, rule: impl Into<RuleValue<f64>>) -> Self {
		self.rule = self.rule.min(rule);
		self
	}

	pub fn max(mut self, rule: impl Into<RuleValue<f64>>) -> Self {
		self.rule = self.rule.max(rule);
		self
	}

	pub fn min_length(mut self, rule: impl Into<RuleValue<usize>>) -> Self {
		self.rule = self.rule.min_length(rule);
		self
	}

	pub fn max_length(mut self, rule: impl Into<RuleValue<usize>>) -> Self {
		self.rule = self.rule.max_length(rule);
		self
	}

	pub fn pattern(mut self, rule: impl Into<RuleValue<Pattern>>) -> Self {
		self.rule = self.rule.pattern(rule);
		self
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.display.label = Some(label.into());
		self
	}

	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.display.placeholder = Some(placeholder.into());
		self
	}

	pub fn autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
		self.display.autocomplete = Some(autocomplete.into());
		self
	}

	pub fn input_mode(mut self, mode: InputMode) -> Self {
		self.display.input_mode = Some(mode);
		self
	}

	pub fn input_type(mut self, input_type: InputType) -> Self {
		self.display.input_type = Some(input_type);
		self
	}

	pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
		self.display.help_text = Some(help_text.into());
		self
	}

	/// Disabled fields are also skipped by validation.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.display.disabled = Some(disabled);
		self
	}

	pub fn multiline(mut self, rows: u32) -> Self {
		self.display.multiline = Some(rows);
		self
	}

	pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
		self.display.prefix = Some(prefix.into());
		self
	}

	pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
		self.display.suffix = Some(suffix.into());
		self
	}

	pub fn clear_button(mut self, clear_button: bool) -> Self {
		self.display.clear_button = Some(clear_button);
		self
	}

	/// Bind the field and register its rules.
	pub fn mount(self) -> AdapterResult<MountedTextField<S>> {
		let mut rule = self.rule;
		if self.display.disabled == Some(true) {
			rule.disabled = true;
		}
		let numeric = matches!(
			self.control.schema().field(self.key.name()).map(|f| &f.kind),
			Some(FieldKind::Numeric)
		);
		let binding = self.control.register(self.key, rule)?;
		tracing::debug!(field = %self.key.name(), "text field mounted");
		Ok(MountedTextField {
			binding,
			display: self.display,
			numeric,
		})
	}
}

/// A mounted text field. Dropping it unmounts the field.
pub struct MountedTextField<S: FormValues> {
	binding: FieldBinding<S, String>,
	display: TextFieldDisplay,
	numeric: bool,
}

impl<S: FormValues> MountedTextField<S> {
	pub fn binding(&self) -> &FieldBinding<S, String> {
		&self.binding
	}

	/// The rule the form validates this field with. Native constraint
	/// attributes are projected from it on every render.
	pub fn rule(&self) -> ValidationRule<S> {
		self.binding
			.control()
			.rule(self.binding.name())
			.unwrap_or_default()
	}
}

impl<S: FormValues> FieldAdapter for MountedTextField<S> {
	type Props = TextInputProps;

	fn name(&self) -> &'static str {
		self.binding.name()
	}

	fn render(&self) -> TextInputProps {
		let name = self.binding.name();
		let change = self.binding.handle();
		let blur = self.binding.handle();
		let rule = self.rule();
		let computed = TextInputProps {
			name: name.to_string(),
			label: default_label(name),
			value: self.binding.value(),
			input_type: if self.numeric {
				InputType::Number
			} else {
				InputType::Text
			},
			input_mode: self.numeric.then_some(InputMode::Decimal),
			required: rule.is_required(),
			min: rule.min.as_ref().map(|r| *r.value()),
			max: rule.max.as_ref().map(|r| *r.value()),
			min_length: rule.min_length.as_ref().map(|r| *r.value()),
			max_length: rule.max_length.as_ref().map(|r| *r.value()),
			pattern: rule
				.pattern
				.as_ref()
				.map(|r| r.value().as_str().to_string()),
			error: self
				.binding
				.validation_state()
				.error_message()
				.map(str::to_string),
			on_change: Some(Callback::new(move |value: String| change.set_value(value))),
			on_blur: Some(Callback::new(move |()| blur.on_blur())),
			..TextInputProps::default()
		};
		merge_overrides(computed, &self.display)
	}
}

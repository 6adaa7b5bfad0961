//! Field adapters
//!
//! Each adapter is built in two steps. A builder (`TextField`, `Checkbox`,
//! `Select`, `RadioGroup`, `SingleChoiceList`) collects the field key, the
//! rule bag and the display settings; `mount()` registers the field with the
//! form and returns the mounted adapter. The mounted adapter holds no state
//! of its own: every [`FieldAdapter::render`] reads the binding again and
//! produces fresh primitive props.
//!
//! Caller `on_change` / `on_blur` / `validate` hooks are never attached to
//! the primitive. They are registered with the form as part of the rule, so
//! the form's bookkeeping always runs before them.

use crate::primitives::RenderHtml;

/// A mounted adapter.
pub trait FieldAdapter {
	type Props: RenderHtml;

	/// Name of the bound field.
	fn name(&self) -> &'static str;

	/// Props for the primitive, computed from the binding's current state.
	fn render(&self) -> Self::Props;

	fn render_html(&self) -> String {
		self.render().render_html()
	}
}

/// Rule-bag setters shared by every adapter builder.
macro_rules! rule_setters {
	() => {
		/// Replace the whole rule bag.
		pub fn rules(mut self, rule: ::reinhardt_form_state::ValidationRule<S>) -> Self {
			self.rule = rule;
			self
		}

		pub fn required(
			mut self,
			rule: impl Into<::reinhardt_form_state::RuleValue<bool>>,
		) -> Self {
			self.rule = self.rule.required(rule);
			self
		}

		/// Custom predicate, registered with the form's rule engine.
		pub fn validate<F>(mut self, f: F) -> Self
		where
			F: Fn(
					&::reinhardt_form_state::FieldValue,
					&::reinhardt_form_state::Values,
				) -> Result<(), String>
				+ 'static,
		{
			self.rule = self.rule.validate(f);
			self
		}

		/// Side effect run after the form has recorded a change.
		pub fn on_change<F>(mut self, f: F) -> Self
		where
			F: Fn(
					&::reinhardt_form_state::FieldEvent,
					&::reinhardt_form_state::FormControl<S>,
				) + 'static,
		{
			self.rule = self.rule.on_change(f);
			self
		}

		/// Side effect run after the form's own blur bookkeeping.
		pub fn on_blur<F>(mut self, f: F) -> Self
		where
			F: Fn(
					&::reinhardt_form_state::FieldEvent,
					&::reinhardt_form_state::FormControl<S>,
				) + 'static,
		{
			self.rule = self.rule.on_blur(f);
			self
		}
	};
}

pub(crate) use rule_setters;

pub mod checkbox;
pub mod radio_group;
pub mod select;
pub mod single_choice_list;
pub mod text_field;

pub use checkbox::{Checkbox, CheckboxDisplay, MountedCheckbox};
pub use radio_group::{MountedRadioGroup, RadioGroup, RadioGroupDisplay};
pub use select::{MountedSelect, Select, SelectDisplay};
pub use single_choice_list::{MountedSingleChoiceList, SingleChoiceList, SingleChoiceListDisplay};
pub use text_field::{MountedTextField, TextField, TextFieldDisplay};

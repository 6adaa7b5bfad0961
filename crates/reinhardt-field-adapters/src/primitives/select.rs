//! Dropdown primitive

use super::html::{
	RenderHtml, html_escape, push_attr, push_flag, push_help_and_error, push_label,
};
use crate::callback::Callback;
use crate::options::SelectOption;

/// Props of a stateless single-value dropdown.
#[derive(Debug, Clone, Default)]
pub struct SelectProps {
	pub name: String,
	pub label: String,
	pub options: Vec<SelectOption>,
	pub value: String,
	/// Rendered as a leading disabled option
	pub placeholder: Option<String>,
	pub help_text: Option<String>,
	pub disabled: bool,
	pub label_inline: bool,
	pub required_indicator: bool,
	pub error: Option<String>,
	pub on_change: Option<Callback<String>>,
	pub on_blur: Option<Callback<()>>,
}

impl SelectProps {
	/// Simulate the user picking the option with `value`.
	///
	/// Returns false when no enabled option has that value.
	pub fn choose(&self, value: &str) -> bool {
		if self.disabled {
			return false;
		}
		let Some(option) = self
			.options
			.iter()
			.find(|o| o.value == value && !o.disabled)
		else {
			return false;
		};
		if let Some(on_change) = &self.on_change {
			on_change.call(option.value.clone());
		}
		true
	}

	pub fn blur(&self) {
		if let Some(on_blur) = &self.on_blur {
			on_blur.call(());
		}
	}

	/// Label of the selected option, if the value matches one.
	pub fn selected_label(&self) -> Option<&str> {
		self.options
			.iter()
			.find(|o| o.value == self.value)
			.map(|o| o.label.as_str())
	}
}

impl RenderHtml for SelectProps {
	fn render_html(&self) -> String {
		let class = if self.label_inline {
			r#"<div class="field select label-inline">"#
		} else {
			r#"<div class="field select">"#
		};
		let mut html = String::from(class);
		push_label(&mut html, &self.name, &self.label, self.required_indicator);

		html.push_str("<select");
		push_attr(&mut html, "id", &self.name);
		push_attr(&mut html, "name", &self.name);
		push_flag(&mut html, "required", self.required_indicator);
		push_flag(&mut html, "disabled", self.disabled);
		if self.error.is_some() {
			push_attr(&mut html, "aria-invalid", "true");
		}
		html.push('>');

		if let Some(placeholder) = &self.placeholder {
			html.push_str(r#"<option value="" disabled"#);
			push_flag(&mut html, "selected", !self.options.iter().any(|o| o.value == self.value));
			html.push('>');
			html.push_str(&html_escape(placeholder));
			html.push_str("</option>");
		}

		for option in &self.options {
			html.push_str("<option");
			push_attr(&mut html, "value", &option.value);
			push_flag(&mut html, "selected", option.value == self.value);
			push_flag(&mut html, "disabled", option.disabled);
			html.push('>');
			html.push_str(&html_escape(&option.label));
			html.push_str("</option>");
		}

		html.push_str("</select>");
		push_help_and_error(&mut html, self.help_text.as_deref(), self.error.as_deref());
		html.push_str("</div>");
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::RefCell;
	use std::rc::Rc;

	fn props(value: &str) -> SelectProps {
		SelectProps {
			name: "sel".to_string(),
			label: "Select label".to_string(),
			options: vec![SelectOption::new("A", "a"), SelectOption::new("B", "b")],
			value: value.to_string(),
			..Default::default()
		}
	}

	#[rstest]
	fn test_render_marks_selected_option() {
		let html = props("b").render_html();
		assert!(html.contains(r#"<option value="a">A</option><option value="b" selected>B</option>"#));
	}

	#[rstest]
	#[case("", true)]
	#[case("a", false)]
	fn test_placeholder_selected_only_without_value(#[case] value: &str, #[case] selected: bool) {
		let props = SelectProps {
			placeholder: Some("Pick one".to_string()),
			..props(value)
		};

		let html = props.render_html();

		let expected = if selected {
			r#"<option value="" disabled selected>Pick one</option>"#
		} else {
			r#"<option value="" disabled>Pick one</option>"#
		};
		assert!(html.contains(expected));
	}

	#[rstest]
	fn test_choose_forwards_value() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();
		let props = SelectProps {
			on_change: Some(Callback::new(move |v| sink.borrow_mut().push(v))),
			..props("b")
		};

		assert!(props.choose("a"));
		assert!(!props.choose("z"));

		assert_eq!(*seen.borrow(), vec!["a".to_string()]);
	}

	#[rstest]
	fn test_selected_label() {
		assert_eq!(props("b").selected_label(), Some("B"));
		assert_eq!(props("x").selected_label(), None);
	}
}

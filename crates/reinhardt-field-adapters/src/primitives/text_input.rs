//! Text input primitive

use std::fmt;

use super::html::{
	RenderHtml, html_escape, push_attr, push_flag, push_help_and_error, push_label, push_opt_attr,
};
use crate::callback::Callback;

/// The `type` attribute of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
	#[default]
	Text,
	Email,
	Number,
	Password,
	Search,
	Tel,
	Url,
}

impl InputType {
	pub fn as_str(&self) -> &'static str {
		match self {
			InputType::Text => "text",
			InputType::Email => "email",
			InputType::Number => "number",
			InputType::Password => "password",
			InputType::Search => "search",
			InputType::Tel => "tel",
			InputType::Url => "url",
		}
	}
}

impl fmt::Display for InputType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Virtual keyboard hint (`inputmode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
	None,
	Text,
	Decimal,
	Numeric,
	Tel,
	Search,
	Email,
	Url,
}

impl InputMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			InputMode::None => "none",
			InputMode::Text => "text",
			InputMode::Decimal => "decimal",
			InputMode::Numeric => "numeric",
			InputMode::Tel => "tel",
			InputMode::Search => "search",
			InputMode::Email => "email",
			InputMode::Url => "url",
		}
	}
}

impl fmt::Display for InputMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Props of a stateless text input.
#[derive(Debug, Clone, Default)]
pub struct TextInputProps {
	pub name: String,
	pub label: String,
	pub value: String,
	pub input_type: InputType,
	pub placeholder: Option<String>,
	pub autocomplete: Option<String>,
	pub input_mode: Option<InputMode>,
	pub help_text: Option<String>,
	pub disabled: bool,
	/// Render a textarea with this many rows
	pub multiline: Option<u32>,
	pub prefix: Option<String>,
	pub suffix: Option<String>,
	pub clear_button: bool,
	// Native constraint attributes
	pub required: bool,
	pub min: Option<f64>,
	pub max: Option<f64>,
	pub min_length: Option<usize>,
	pub max_length: Option<usize>,
	pub pattern: Option<String>,
	pub error: Option<String>,
	pub on_change: Option<Callback<String>>,
	pub on_blur: Option<Callback<()>>,
}

impl TextInputProps {
	/// Simulate the user typing `value` into the input.
	pub fn input(&self, value: impl Into<String>) {
		if self.disabled {
			return;
		}
		if let Some(on_change) = &self.on_change {
			on_change.call(value.into());
		}
	}

	/// Simulate focus leaving the input.
	pub fn blur(&self) {
		if let Some(on_blur) = &self.on_blur {
			on_blur.call(());
		}
	}

	/// Simulate pressing the clear button, when one is shown.
	pub fn clear(&self) {
		if self.clear_button {
			self.input(String::new());
		}
	}
}

impl RenderHtml for TextInputProps {
	fn render_html(&self) -> String {
		let mut html = String::from(r#"<div class="field text-field">"#);
		push_label(&mut html, &self.name, &self.label, self.required);

		if let Some(prefix) = &self.prefix {
			html.push_str(r#"<span class="field-prefix">"#);
			html.push_str(&html_escape(prefix));
			html.push_str("</span>");
		}

		let rows = self.multiline.filter(|rows| *rows > 0);
		if rows.is_some() {
			html.push_str("<textarea");
		} else {
			html.push_str("<input");
			push_attr(&mut html, "type", self.input_type.as_str());
		}
		push_attr(&mut html, "id", &self.name);
		push_attr(&mut html, "name", &self.name);
		if rows.is_none() {
			push_attr(&mut html, "value", &self.value);
		}
		push_opt_attr(&mut html, "rows", rows);
		push_opt_attr(&mut html, "placeholder", self.placeholder.as_deref());
		push_opt_attr(&mut html, "autocomplete", self.autocomplete.as_deref());
		push_opt_attr(&mut html, "inputmode", self.input_mode.map(|m| m.as_str()));
		push_flag(&mut html, "required", self.required);
		push_opt_attr(&mut html, "min", self.min);
		push_opt_attr(&mut html, "max", self.max);
		push_opt_attr(&mut html, "minlength", self.min_length);
		push_opt_attr(&mut html, "maxlength", self.max_length);
		push_opt_attr(&mut html, "pattern", self.pattern.as_deref());
		push_flag(&mut html, "disabled", self.disabled);
		if self.error.is_some() {
			push_attr(&mut html, "aria-invalid", "true");
		}
		if rows.is_some() {
			html.push('>');
			html.push_str(&html_escape(&self.value));
			html.push_str("</textarea>");
		} else {
			html.push_str(" />");
		}

		if let Some(suffix) = &self.suffix {
			html.push_str(r#"<span class="field-suffix">"#);
			html.push_str(&html_escape(suffix));
			html.push_str("</span>");
		}
		if self.clear_button && !self.value.is_empty() {
			html.push_str(r#"<button type="button" class="field-clear">Clear</button>"#);
		}

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

	fn props() -> TextInputProps {
		TextInputProps {
			name: "store".to_string(),
			label: "Store name".to_string(),
			value: "Jaded Pixel".to_string(),
			..Default::default()
		}
	}

	#[rstest]
	fn test_render_basic_input() {
		let html = props().render_html();
		assert_eq!(
			html,
			concat!(
				r#"<div class="field text-field">"#,
				r#"<label for="store">Store name</label>"#,
				r#"<input type="text" id="store" name="store" value="Jaded Pixel" />"#,
				"</div>"
			)
		);
	}

	#[rstest]
	fn test_render_constraints_and_error() {
		// Arrange
		let props = TextInputProps {
			required: true,
			min_length: Some(10),
			pattern: Some(r"^\w+$".to_string()),
			error: Some("too short".to_string()),
			..props()
		};

		// Act
		let html = props.render_html();

		// Assert
		assert!(html.contains(r#" required minlength="10" pattern="^\w+$""#));
		assert!(html.contains(r#"aria-invalid="true""#));
		assert!(html.contains(r#"<p class="field-error" role="alert">too short</p>"#));
	}

	#[rstest]
	fn test_render_multiline_as_textarea() {
		let props = TextInputProps {
			multiline: Some(4),
			value: "a < b".to_string(),
			..props()
		};
		let html = props.render_html();
		assert!(html.contains(r#"<textarea id="store" name="store" rows="4">a &lt; b</textarea>"#));
	}

	#[rstest]
	fn test_disabled_input_ignores_typing() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();
		let props = TextInputProps {
			disabled: true,
			on_change: Some(Callback::new(move |v| sink.borrow_mut().push(v))),
			..props()
		};

		props.input("x");

		assert!(seen.borrow().is_empty());
	}

	#[rstest]
	fn test_clear_sends_empty_value() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();
		let props = TextInputProps {
			clear_button: true,
			on_change: Some(Callback::new(move |v| sink.borrow_mut().push(v))),
			..props()
		};

		props.clear();

		assert_eq!(*seen.borrow(), vec![String::new()]);
	}
}

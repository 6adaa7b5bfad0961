//! Checkbox primitive

use super::html::{RenderHtml, html_escape, push_attr, push_flag, push_help_and_error};
use crate::callback::Callback;

/// Props of a stateless checkbox.
#[derive(Debug, Clone, Default)]
pub struct CheckboxProps {
	pub name: String,
	pub label: String,
	pub checked: bool,
	pub help_text: Option<String>,
	pub disabled: bool,
	pub error: Option<String>,
	pub on_change: Option<Callback<bool>>,
	pub on_blur: Option<Callback<()>>,
}

impl CheckboxProps {
	/// Simulate a click: reports the inverted checked state.
	pub fn toggle(&self) {
		if self.disabled {
			return;
		}
		if let Some(on_change) = &self.on_change {
			on_change.call(!self.checked);
		}
	}

	pub fn blur(&self) {
		if let Some(on_blur) = &self.on_blur {
			on_blur.call(());
		}
	}
}

impl RenderHtml for CheckboxProps {
	fn render_html(&self) -> String {
		let mut html = String::from(r#"<div class="field checkbox">"#);
		html.push_str("<label");
		push_attr(&mut html, "for", &self.name);
		html.push_str("><input");
		push_attr(&mut html, "type", "checkbox");
		push_attr(&mut html, "id", &self.name);
		push_attr(&mut html, "name", &self.name);
		push_flag(&mut html, "checked", self.checked);
		push_flag(&mut html, "disabled", self.disabled);
		if self.error.is_some() {
			push_attr(&mut html, "aria-invalid", "true");
		}
		html.push_str(" /> ");
		html.push_str(&html_escape(&self.label));
		html.push_str("</label>");
		push_help_and_error(&mut html, self.help_text.as_deref(), self.error.as_deref());
		html.push_str("</div>");
		html
	}
}

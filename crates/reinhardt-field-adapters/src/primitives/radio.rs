//! Radio button and radio group primitives

use super::html::{RenderHtml, html_escape, push_attr, push_flag, push_help_and_error};
use crate::callback::Callback;

/// Props of one radio button.
///
/// `on_change` receives `(checked, id)`.
#[derive(Debug, Clone, Default)]
pub struct RadioButtonProps {
	pub id: String,
	pub name: String,
	pub label: String,
	pub help_text: Option<String>,
	pub checked: bool,
	pub disabled: bool,
	pub on_change: Option<Callback<(bool, String)>>,
	pub on_blur: Option<Callback<()>>,
}

impl RadioButtonProps {
	/// Simulate a click. A radio that is already checked, or disabled,
	/// reports nothing.
	pub fn click(&self) {
		if self.disabled || self.checked {
			return;
		}
		if let Some(on_change) = &self.on_change {
			on_change.call((true, self.id.clone()));
		}
	}

	pub fn blur(&self) {
		if let Some(on_blur) = &self.on_blur {
			on_blur.call(());
		}
	}
}

impl RenderHtml for RadioButtonProps {
	fn render_html(&self) -> String {
		let mut html = String::from("<div");
		push_attr(&mut html, "class", "radio");
		push_attr(&mut html, "data-key", &self.id);
		html.push_str("><label");
		push_attr(&mut html, "for", &self.id);
		html.push_str("><input");
		push_attr(&mut html, "type", "radio");
		push_attr(&mut html, "id", &self.id);
		push_attr(&mut html, "name", &self.name);
		push_attr(&mut html, "value", &self.id);
		push_flag(&mut html, "checked", self.checked);
		push_flag(&mut html, "disabled", self.disabled);
		html.push_str(" /> ");
		html.push_str(&html_escape(&self.label));
		html.push_str("</label>");
		push_help_and_error(&mut html, self.help_text.as_deref(), None);
		html.push_str("</div>");
		html
	}
}

/// Layout direction of a radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
	#[default]
	Vertical,
	Horizontal,
}

impl Direction {
	pub fn as_str(&self) -> &'static str {
		match self {
			Direction::Vertical => "vertical",
			Direction::Horizontal => "horizontal",
		}
	}
}

/// Props of an ordered group of mutually exclusive radios.
#[derive(Debug, Clone, Default)]
pub struct RadioGroupProps {
	pub name: String,
	pub title: String,
	pub direction: Direction,
	pub buttons: Vec<RadioButtonProps>,
	pub error: Option<String>,
}

impl RadioGroupProps {
	/// Simulate a click on the radio with `id`. Returns false when there is
	/// no such radio.
	pub fn click(&self, id: &str) -> bool {
		match self.buttons.iter().find(|b| b.id == id) {
			Some(button) => {
				button.click();
				true
			}
			None => false,
		}
	}

	/// Id of the checked radio, if any.
	pub fn checked_id(&self) -> Option<&str> {
		self.buttons
			.iter()
			.find(|b| b.checked)
			.map(|b| b.id.as_str())
	}
}

impl RenderHtml for RadioGroupProps {
	fn render_html(&self) -> String {
		let mut html = String::from("<fieldset");
		push_attr(&mut html, "class", &format!("field radio-group {}", self.direction.as_str()));
		if self.error.is_some() {
			push_attr(&mut html, "aria-invalid", "true");
		}
		html.push('>');
		if !self.title.is_empty() {
			html.push_str("<legend>");
			html.push_str(&html_escape(&self.title));
			html.push_str("</legend>");
		}
		for button in &self.buttons {
			html.push_str(&button.render_html());
		}
		push_help_and_error(&mut html, None, self.error.as_deref());
		html.push_str("</fieldset>");
		html
	}
}

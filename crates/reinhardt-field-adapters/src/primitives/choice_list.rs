//! Choice list primitive
//!
//! A list of choices that reports its selection as a list of values. With
//! `allow_multiple` it behaves like a group of checkboxes, otherwise like a
//! group of radios.

use super::html::{RenderHtml, html_escape, push_attr, push_flag, push_help_and_error};
use crate::callback::Callback;
use crate::options::SelectOption;

#[derive(Debug, Clone, Default)]
pub struct ChoiceListProps {
	pub name: String,
	pub title: String,
	pub choices: Vec<SelectOption>,
	pub selected: Vec<String>,
	pub allow_multiple: bool,
	pub disabled: bool,
	pub error: Option<String>,
	pub on_change: Option<Callback<Vec<String>>>,
}

impl ChoiceListProps {
	/// Simulate a click on the choice with `value`.
	///
	/// Single-select lists report `[value]`; multi-select lists report the
	/// selection with `value` toggled. Returns false for unknown or disabled
	/// choices.
	pub fn click(&self, value: &str) -> bool {
		if self.disabled || !self.choices.iter().any(|c| c.value == value && !c.disabled) {
			return false;
		}
		let next = if self.allow_multiple {
			let mut next: Vec<String> = self
				.selected
				.iter()
				.filter(|v| v.as_str() != value)
				.cloned()
				.collect();
			if next.len() == self.selected.len() {
				next.push(value.to_string());
			}
			next
		} else {
			vec![value.to_string()]
		};
		self.report(next);
		true
	}

	/// Report an arbitrary selection, as a host would on a programmatic change.
	pub fn report(&self, selection: Vec<String>) {
		if let Some(on_change) = &self.on_change {
			on_change.call(selection);
		}
	}

	pub fn is_selected(&self, value: &str) -> bool {
		self.selected.iter().any(|v| v == value)
	}
}

impl RenderHtml for ChoiceListProps {
	fn render_html(&self) -> String {
		let input_type = if self.allow_multiple { "checkbox" } else { "radio" };
		let mut html = String::from("<fieldset");
		push_attr(&mut html, "class", "field choice-list");
		if self.error.is_some() {
			push_attr(&mut html, "aria-invalid", "true");
		}
		html.push('>');
		if !self.title.is_empty() {
			html.push_str("<legend>");
			html.push_str(&html_escape(&self.title));
			html.push_str("</legend>");
		}
		html.push_str("<ul>");
		for (i, choice) in self.choices.iter().enumerate() {
			let input_id = format!("{}_{}", self.name, i);
			html.push_str("<li><label");
			push_attr(&mut html, "for", &input_id);
			html.push_str("><input");
			push_attr(&mut html, "type", input_type);
			push_attr(&mut html, "id", &input_id);
			push_attr(&mut html, "name", &self.name);
			push_attr(&mut html, "value", &choice.value);
			push_flag(&mut html, "checked", self.is_selected(&choice.value));
			push_flag(&mut html, "disabled", self.disabled || choice.disabled);
			html.push_str(" /> ");
			html.push_str(&html_escape(&choice.label));
			html.push_str("</label>");
			push_help_and_error(&mut html, choice.help_text.as_deref(), None);
			html.push_str("</li>");
		}
		html.push_str("</ul>");
		push_help_and_error(&mut html, None, self.error.as_deref());
		html.push_str("</fieldset>");
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::RefCell;
	use std::rc::Rc;

	fn props(allow_multiple: bool, selected: &[&str]) -> (ChoiceListProps, Rc<RefCell<Vec<Vec<String>>>>) {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();
		let props = ChoiceListProps {
			name: "choice".to_string(),
			title: "Choices".to_string(),
			choices: vec![SelectOption::new("A", "a"), SelectOption::new("B", "b")],
			selected: selected.iter().map(|s| s.to_string()).collect(),
			allow_multiple,
			on_change: Some(Callback::new(move |v| sink.borrow_mut().push(v))),
			..Default::default()
		};
		(props, seen)
	}

	#[rstest]
	fn test_single_click_reports_one_value() {
		let (props, seen) = props(false, &["a"]);

		assert!(props.click("b"));

		assert_eq!(*seen.borrow(), vec![vec!["b".to_string()]]);
	}

	#[rstest]
	#[case(&["a"], "b", &["a", "b"])]
	#[case(&["a", "b"], "a", &["b"])]
	fn test_multiple_click_toggles(
		#[case] selected: &[&str],
		#[case] clicked: &str,
		#[case] expected: &[&str],
	) {
		let (props, seen) = props(true, selected);

		props.click(clicked);

		let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
		assert_eq!(*seen.borrow(), vec![expected]);
	}

	#[rstest]
	fn test_render_single_as_radios() {
		let (props, _) = props(false, &["b"]);

		let html = props.render_html();

		assert!(html.contains(r#"<input type="radio" id="choice_1" name="choice" value="b" checked />"#));
		assert!(html.contains("<legend>Choices</legend>"));
	}
}

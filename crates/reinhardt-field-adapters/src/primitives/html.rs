//! HTML helpers shared by the primitive renderers

/// Escape text for use in element content and attribute values.
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Rendering of props as plain HTML.
pub trait RenderHtml {
	fn render_html(&self) -> String;
}

pub(crate) fn push_attr(html: &mut String, key: &str, value: &str) {
	html.push_str(&format!(r#" {}="{}""#, key, html_escape(value)));
}

pub(crate) fn push_opt_attr<T: ToString>(html: &mut String, key: &str, value: Option<T>) {
	if let Some(value) = value {
		push_attr(html, key, &value.to_string());
	}
}

pub(crate) fn push_flag(html: &mut String, key: &str, on: bool) {
	if on {
		html.push(' ');
		html.push_str(key);
	}
}

pub(crate) fn push_label(html: &mut String, for_id: &str, label: &str, required: bool) {
	if label.is_empty() {
		return;
	}
	html.push_str("<label");
	push_attr(html, "for", for_id);
	html.push('>');
	html.push_str(&html_escape(label));
	if required {
		html.push_str(r#"<span class="required-indicator">*</span>"#);
	}
	html.push_str("</label>");
}

pub(crate) fn push_help_and_error(
	html: &mut String,
	help_text: Option<&str>,
	error: Option<&str>,
) {
	if let Some(help) = help_text {
		html.push_str(r#"<p class="field-help">"#);
		html.push_str(&html_escape(help));
		html.push_str("</p>");
	}
	if let Some(error) = error {
		html.push_str(r#"<p class="field-error" role="alert">"#);
		html.push_str(&html_escape(error));
		html.push_str("</p>");
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("plain", "plain")]
	#[case("<b>", "&lt;b&gt;")]
	#[case(r#"say "hi" & 'bye'"#, "say &quot;hi&quot; &amp; &#x27;bye&#x27;")]
	fn test_html_escape(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(html_escape(input), expected);
	}

	#[rstest]
	fn test_label_marks_required() {
		let mut html = String::new();
		push_label(&mut html, "email", "Email", true);
		assert_eq!(
			html,
			r#"<label for="email">Email<span class="required-indicator">*</span></label>"#
		);
	}

	#[rstest]
	fn test_empty_label_renders_nothing() {
		let mut html = String::new();
		push_label(&mut html, "email", "", false);
		assert!(html.is_empty());
	}
}

//! Field values and value kinds
//!
//! Every field in a form holds a [`FieldValue`]. Strings, enumerated strings
//! and numeric-as-string fields hold [`FieldValue::Text`]; boolean fields hold
//! [`FieldValue::Bool`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// The value type a schema declares for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
	/// Free-form text
	Text,
	/// Checked / unchecked
	Boolean,
	/// One of a fixed set of strings. An empty list accepts any string.
	Enumerated(Vec<String>),
	/// A number kept in its textual form, as typed by the user
	Numeric,
}

impl FieldKind {
	/// Returns true when `value` may be stored in a field of this kind.
	///
	/// Enumerated fields also accept the empty string, meaning "nothing
	/// selected yet".
	pub fn accepts(&self, value: &FieldValue) -> bool {
		match (self, value) {
			(FieldKind::Text | FieldKind::Numeric, FieldValue::Text(_)) => true,
			(FieldKind::Boolean, FieldValue::Bool(_)) => true,
			(FieldKind::Enumerated(allowed), FieldValue::Text(s)) => {
				allowed.is_empty() || s.is_empty() || allowed.iter().any(|a| a == s)
			}
			_ => false,
		}
	}

	/// Convert a JSON value into a field value of this kind.
	///
	/// Numeric fields also accept JSON numbers, which are kept as text.
	pub fn value_from_json(&self, value: &serde_json::Value) -> Option<FieldValue> {
		let converted = match (self, value) {
			(FieldKind::Boolean, serde_json::Value::Bool(b)) => FieldValue::Bool(*b),
			(FieldKind::Numeric, serde_json::Value::Number(n)) => FieldValue::Text(n.to_string()),
			(FieldKind::Boolean, _) => return None,
			(_, serde_json::Value::String(s)) => FieldValue::Text(s.clone()),
			_ => return None,
		};
		self.accepts(&converted).then_some(converted)
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldKind::Text => f.write_str("text"),
			FieldKind::Boolean => f.write_str("boolean"),
			FieldKind::Enumerated(_) => f.write_str("enumerated"),
			FieldKind::Numeric => f.write_str("numeric"),
		}
	}
}

/// The current value of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
	Bool(bool),
	Text(String),
}

impl FieldValue {
	/// Text content, if this is a text value.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			FieldValue::Text(s) => Some(s),
			FieldValue::Bool(_) => None,
		}
	}

	/// Boolean content, if this is a boolean value.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			FieldValue::Bool(b) => Some(*b),
			FieldValue::Text(_) => None,
		}
	}

	/// Whether the value counts as "not provided" for a `required` rule.
	///
	/// An unchecked checkbox is empty, as is the empty string. Whitespace
	/// counts as a value.
	pub fn is_empty(&self) -> bool {
		match self {
			FieldValue::Bool(b) => !b,
			FieldValue::Text(s) => s.is_empty(),
		}
	}

	pub fn to_json(&self) -> serde_json::Value {
		match self {
			FieldValue::Bool(b) => serde_json::Value::Bool(*b),
			FieldValue::Text(s) => serde_json::Value::String(s.clone()),
		}
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldValue::Bool(b) => write!(f, "{b}"),
			FieldValue::Text(s) => f.write_str(s),
		}
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		FieldValue::Bool(value)
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::Text(value)
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::Text(value.to_string())
	}
}

/// Rust types an adapter can bind a field as.
///
/// Implemented for `String` (text, enumerated and numeric fields) and `bool`
/// (boolean fields).
pub trait FieldType: Clone + Default + PartialEq + fmt::Debug + 'static {
	/// Name used in kind-mismatch errors
	const TYPE_NAME: &'static str;

	fn accepts_kind(kind: &FieldKind) -> bool;

	fn from_field_value(value: &FieldValue) -> Option<Self>;

	fn into_field_value(self) -> FieldValue;
}

impl FieldType for String {
	const TYPE_NAME: &'static str = "string";

	fn accepts_kind(kind: &FieldKind) -> bool {
		!matches!(kind, FieldKind::Boolean)
	}

	fn from_field_value(value: &FieldValue) -> Option<Self> {
		value.as_text().map(str::to_string)
	}

	fn into_field_value(self) -> FieldValue {
		FieldValue::Text(self)
	}
}

impl FieldType for bool {
	const TYPE_NAME: &'static str = "boolean";

	fn accepts_kind(kind: &FieldKind) -> bool {
		matches!(kind, FieldKind::Boolean)
	}

	fn from_field_value(value: &FieldValue) -> Option<Self> {
		value.as_bool()
	}

	fn into_field_value(self) -> FieldValue {
		FieldValue::Bool(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(FieldValue::Bool(false), true)]
	#[case(FieldValue::Bool(true), false)]
	#[case(FieldValue::Text(String::new()), true)]
	#[case(FieldValue::Text("   ".to_string()), false)]
	#[case(FieldValue::Text("a".to_string()), false)]
	fn test_is_empty(#[case] value: FieldValue, #[case] expected: bool) {
		assert_eq!(value.is_empty(), expected);
	}

	#[rstest]
	fn test_enumerated_accepts_members_and_empty() {
		// Arrange
		let kind = FieldKind::Enumerated(vec!["a".to_string(), "b".to_string()]);

		// Act & Assert
		assert!(kind.accepts(&FieldValue::from("a")));
		assert!(kind.accepts(&FieldValue::from("")));
		assert!(!kind.accepts(&FieldValue::from("c")));
		assert!(!kind.accepts(&FieldValue::Bool(true)));
	}

	#[rstest]
	fn test_open_enumeration_accepts_any_string() {
		let kind = FieldKind::Enumerated(Vec::new());
		assert!(kind.accepts(&FieldValue::from("anything")));
	}

	#[rstest]
	fn test_numeric_from_json_number() {
		let kind = FieldKind::Numeric;
		assert_eq!(
			kind.value_from_json(&json!(42)),
			Some(FieldValue::from("42"))
		);
		assert_eq!(
			kind.value_from_json(&json!("3.5")),
			Some(FieldValue::from("3.5"))
		);
		assert_eq!(kind.value_from_json(&json!(true)), None);
	}

	#[rstest]
	fn test_boolean_rejects_strings() {
		assert_eq!(FieldKind::Boolean.value_from_json(&json!("true")), None);
		assert_eq!(
			FieldKind::Boolean.value_from_json(&json!(true)),
			Some(FieldValue::Bool(true))
		);
	}

	#[rstest]
	fn test_field_type_kinds() {
		assert!(String::accepts_kind(&FieldKind::Numeric));
		assert!(String::accepts_kind(&FieldKind::Enumerated(Vec::new())));
		assert!(!String::accepts_kind(&FieldKind::Boolean));
		assert!(bool::accepts_kind(&FieldKind::Boolean));
		assert!(!bool::accepts_kind(&FieldKind::Text));
	}
}

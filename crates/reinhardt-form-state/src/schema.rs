//! Form schemas, typed field keys and value maps
//!
//! A page declares its form once as a plain struct implementing
//! [`FormValues`]. The struct's [`FormSchema`] names every field and its
//! [`FieldKind`]; [`FieldKey`] tokens refer to individual fields with their
//! Rust value type, so an adapter can only be bound to a field of the right
//! type.
//!
//! ## Example
//!
//! ```
//! use reinhardt_form_state::{FieldKey, FormResult, FormSchema, FormValues};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Newsletter {
//!     email: String,
//!     subscribe: bool,
//! }
//!
//! impl FormValues for Newsletter {
//!     fn schema() -> FormResult<FormSchema> {
//!         FormSchema::builder().text("email").boolean("subscribe").build()
//!     }
//! }
//!
//! const EMAIL: FieldKey<Newsletter, String> = FieldKey::new("email");
//! assert_eq!(EMAIL.name(), "email");
//! ```

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{FormError, FormResult};
use crate::value::{FieldKind, FieldValue};

/// Name and kind of one declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
	pub name: String,
	pub kind: FieldKind,
}

/// Ordered, immutable set of typed fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSchema {
	fields: Vec<FieldDescriptor>,
}

impl FormSchema {
	pub fn builder() -> FormSchemaBuilder {
		FormSchemaBuilder::default()
	}

	/// Fields in declaration order.
	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields.iter().find(|f| f.name == name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.field(name).is_some()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Field names in declaration order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|f| f.name.as_str())
	}
}

/// Builder for [`FormSchema`].
///
/// Errors (empty or duplicate names) are collected and reported by
/// [`build`](Self::build).
#[derive(Debug, Default)]
pub struct FormSchemaBuilder {
	fields: Vec<FieldDescriptor>,
	errors: Vec<String>,
}

impl FormSchemaBuilder {
	pub fn text(self, name: impl Into<String>) -> Self {
		self.field(name, FieldKind::Text)
	}

	pub fn boolean(self, name: impl Into<String>) -> Self {
		self.field(name, FieldKind::Boolean)
	}

	/// An enumerated string field restricted to `allowed`.
	pub fn enumerated<I, V>(self, name: impl Into<String>, allowed: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<String>,
	{
		let allowed = allowed.into_iter().map(Into::into).collect();
		self.field(name, FieldKind::Enumerated(allowed))
	}

	pub fn numeric(self, name: impl Into<String>) -> Self {
		self.field(name, FieldKind::Numeric)
	}

	pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
		let name = name.into();
		if name.is_empty() {
			self.errors.push("field name must not be empty".to_string());
		} else if self.fields.iter().any(|f| f.name == name) {
			self.errors.push(format!("duplicate field '{name}'"));
		} else {
			self.fields.push(FieldDescriptor { name, kind });
		}
		self
	}

	pub fn build(self) -> FormResult<FormSchema> {
		if !self.errors.is_empty() {
			return Err(FormError::InvalidSchema(self.errors.join("; ")));
		}
		Ok(FormSchema {
			fields: self.fields,
		})
	}
}

/// A typed form: the struct a page declares its fields with.
///
/// Conversion between the struct and the untyped [`Values`] map goes through
/// `serde_json`, so field names in the schema must match the serialized
/// struct field names.
pub trait FormValues: Serialize + DeserializeOwned + 'static {
	fn schema() -> FormResult<FormSchema>;
}

/// Statically typed reference to one field of `S` holding a `T`.
///
/// The name is checked against `S::schema()` when the key is bound.
pub struct FieldKey<S, T> {
	name: &'static str,
	_marker: PhantomData<fn() -> (S, T)>,
}

impl<S, T> FieldKey<S, T> {
	pub const fn new(name: &'static str) -> Self {
		Self {
			name,
			_marker: PhantomData,
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl<S, T> Clone for FieldKey<S, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<S, T> Copy for FieldKey<S, T> {}

impl<S, T> fmt::Debug for FieldKey<S, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("FieldKey").field(&self.name).finish()
	}
}

/// Untyped snapshot of every field's value, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Values(IndexMap<String, FieldValue>);

impl Values {
	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.0.get(name)
	}

	pub fn text(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(FieldValue::as_text)
	}

	pub fn bool(&self, name: &str) -> Option<bool> {
		self.get(name).and_then(FieldValue::as_bool)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub(crate) fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
		self.0.insert(name.into(), value);
	}

	/// Serialize typed values into a map covering every schema field.
	pub fn from_typed<S: Serialize>(values: &S, schema: &FormSchema) -> FormResult<Self> {
		let json = serde_json::to_value(values)?;
		let serde_json::Value::Object(object) = json else {
			return Err(FormError::InvalidSchema(
				"form values must serialize to an object".to_string(),
			));
		};

		let mut map = IndexMap::with_capacity(schema.len());
		for field in schema.fields() {
			let raw = object
				.get(&field.name)
				.ok_or_else(|| FormError::InvalidValue {
					field: field.name.clone(),
					message: "missing from form values".to_string(),
				})?;
			let value = field
				.kind
				.value_from_json(raw)
				.ok_or_else(|| FormError::InvalidValue {
					field: field.name.clone(),
					message: format!("{raw} is not a valid {} value", field.kind),
				})?;
			map.insert(field.name.clone(), value);
		}
		Ok(Self(map))
	}

	/// Deserialize the map back into the typed form values.
	pub fn to_typed<S: DeserializeOwned>(&self) -> FormResult<S> {
		Ok(serde_json::from_value(self.to_json())?)
	}

	pub fn to_json(&self) -> serde_json::Value {
		serde_json::Value::Object(
			self.0
				.iter()
				.map(|(k, v)| (k.clone(), v.to_json()))
				.collect(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde::Deserialize;

	#[derive(Debug, PartialEq, Serialize, Deserialize)]
	struct Profile {
		name: String,
		age: String,
		plan: String,
		active: bool,
	}

	fn profile_schema() -> FormSchema {
		FormSchema::builder()
			.text("name")
			.numeric("age")
			.enumerated("plan", ["free", "pro"])
			.boolean("active")
			.build()
			.unwrap()
	}

	#[rstest]
	fn test_builder_keeps_declaration_order() {
		let schema = profile_schema();
		let names: Vec<_> = schema.names().collect();
		assert_eq!(names, vec!["name", "age", "plan", "active"]);
	}

	#[rstest]
	fn test_builder_rejects_duplicates() {
		// Arrange
		let builder = FormSchema::builder().text("email").boolean("email");

		// Act
		let result = builder.build();

		// Assert
		assert!(matches!(result, Err(FormError::InvalidSchema(msg)) if msg.contains("email")));
	}

	#[rstest]
	fn test_builder_rejects_empty_name() {
		let result = FormSchema::builder().text("").build();
		assert!(matches!(result, Err(FormError::InvalidSchema(_))));
	}

	#[rstest]
	fn test_values_round_trip_through_typed_struct() {
		// Arrange
		let schema = profile_schema();
		let profile = Profile {
			name: "Ada".to_string(),
			age: "36".to_string(),
			plan: "pro".to_string(),
			active: true,
		};

		// Act
		let values = Values::from_typed(&profile, &schema).unwrap();
		let back: Profile = values.to_typed().unwrap();

		// Assert
		assert_eq!(values.text("plan"), Some("pro"));
		assert_eq!(values.bool("active"), Some(true));
		assert_eq!(back, profile);
	}

	#[rstest]
	fn test_values_reject_out_of_enumeration_default() {
		let schema = profile_schema();
		let profile = Profile {
			name: "Ada".to_string(),
			age: "36".to_string(),
			plan: "enterprise".to_string(),
			active: true,
		};

		let result = Values::from_typed(&profile, &schema);

		assert!(matches!(result, Err(FormError::InvalidValue { field, .. }) if field == "plan"));
	}

	#[rstest]
	fn test_field_key_is_copy() {
		const NAME: FieldKey<Profile, String> = FieldKey::new("name");
		let copy = NAME;
		assert_eq!(copy.name(), NAME.name());
		assert_eq!(format!("{NAME:?}"), "FieldKey(\"name\")");
	}
}

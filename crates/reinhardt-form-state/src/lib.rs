//! Form-state management for Reinhardt field adapters
//!
//! This crate provides the store that field adapters bind to:
//! - Typed form schemas and field keys ([`FormValues`], [`FieldKey`])
//! - Field registration with validation rules ([`FormControl::register`])
//! - A rule engine with `required`, numeric, length, pattern and custom rules
//! - Dirty/touched bookkeeping and a submit pipeline
//! - Fine-grained subscriptions to form state and field values
//!
//! ## Example
//!
//! ```
//! use reinhardt_form_state::{
//!     FieldKey, FormControl, FormResult, FormSchema, FormValues, ValidationRule,
//! };
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Login {
//!     username: String,
//! }
//!
//! impl FormValues for Login {
//!     fn schema() -> FormResult<FormSchema> {
//!         FormSchema::builder().text("username").build()
//!     }
//! }
//!
//! const USERNAME: FieldKey<Login, String> = FieldKey::new("username");
//!
//! let form = FormControl::new(Login::default()).unwrap();
//! let username = form
//!     .register(USERNAME, ValidationRule::new().required(true))
//!     .unwrap();
//!
//! assert!(!form.trigger(None).unwrap());
//! username.set_value("ada".to_string());
//! assert!(form.trigger(None).unwrap());
//! assert_eq!(form.get_values().unwrap().username, "ada");
//! ```

pub mod binding;
pub mod config;
pub mod control;
pub mod error;
pub mod reactive;
pub mod rules;
pub mod schema;
pub mod state;
pub mod validation;
pub mod value;

pub use binding::{FieldBinding, FieldHandle, RegistrationGuard};
pub use config::{CriteriaMode, FormConfig, RevalidateMode, ValidationMode};
pub use control::{FormControl, SetValueOptions};
pub use error::{FormError, FormResult, SubmitError};
pub use reactive::{Signal, Subscription};
pub use rules::{
	EventKind, FieldEvent, FieldHook, Pattern, RuleValue, Validate, ValidateFn, ValidationRule,
};
pub use schema::{FieldDescriptor, FieldKey, FormSchema, FormSchemaBuilder, FormValues, Values};
pub use state::FormState;
pub use validation::{ErrorKind, FieldError, FieldErrors, ValidationState, validate_field};
pub use value::{FieldKind, FieldType, FieldValue};

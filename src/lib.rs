//! # Reinhardt Form Bridge
//!
//! Field adapters that connect presentational form inputs to a typed
//! form-state manager.
//!
//! A page declares its form values as a plain struct, creates a
//! [`FormControl`](state::FormControl) for it, and mounts one adapter per
//! field. Each adapter registers its field with the form, renders props for
//! its visual primitive from the field's current value and error, and writes
//! user edits back through the form so that dirty tracking and validation
//! always run first.
//!
//! ## Feature Flags
//!
//! - `state` - form-state manager only
//! - `adapters` (default) - field adapters and visual primitives
//!
//! ## Quick Example
//!
//! ```rust
//! use form_bridge::prelude::*;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Preferences {
//!     plan: String,
//!     newsletter: bool,
//! }
//!
//! impl FormValues for Preferences {
//!     fn schema() -> FormResult<FormSchema> {
//!         FormSchema::builder()
//!             .enumerated("plan", ["none", "basic"])
//!             .boolean("newsletter")
//!             .build()
//!     }
//! }
//!
//! const PLAN: FieldKey<Preferences, String> = FieldKey::new("plan");
//! const NEWSLETTER: FieldKey<Preferences, bool> = FieldKey::new("newsletter");
//!
//! let form = FormControl::new(Preferences {
//!     plan: "basic".into(),
//!     newsletter: true,
//! })
//! .unwrap();
//!
//! let plan = Select::new(&form, PLAN)
//!     .options([("No plan", "none"), ("Basic", "basic")])
//!     .on_change(|event, control| {
//!         if event.value.as_text() == Some("none") {
//!             control
//!                 .set_value("newsletter", false, SetValueOptions::default())
//!                 .unwrap();
//!         }
//!     })
//!     .mount()
//!     .unwrap();
//! let newsletter = Checkbox::new(&form, NEWSLETTER).mount().unwrap();
//!
//! plan.render().choose("none");
//! assert!(!newsletter.render().checked);
//! ```

pub mod state;

#[cfg(feature = "adapters")]
pub mod adapters;

/// Commonly used types for building form pages.
pub mod prelude {
	pub use crate::state::{
		FieldError, FieldKey, FormConfig, FormControl, FormError, FormResult, FormSchema,
		FormValues, Pattern, RuleValue, SetValueOptions, SubmitError, ValidationMode,
		ValidationRule, Values,
	};

	#[cfg(feature = "adapters")]
	pub use crate::adapters::{
		AdapterError, AdapterResult, Checkbox, FieldAdapter, RadioGroup, RadioOption,
		RenderHtml, Select, SelectOption, SingleChoiceList, TextField,
	};

	// External
	pub use serde::{Deserialize, Serialize};
}

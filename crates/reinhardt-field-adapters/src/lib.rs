//! Field adapters for Reinhardt forms
//!
//! Adapters connect presentational input primitives to a
//! [`reinhardt_form_state::FormControl`]. An adapter is given the form's
//! control, a typed field key, a rule bag and display settings; it registers
//! the field, renders primitive props from the field's current value and
//! error, and routes the primitive's change and blur notifications back into
//! the form.
//!
//! ## Adapters
//!
//! - [`TextField`]: free text or numeric string, with native constraint
//!   attributes projected from the rules
//! - [`Checkbox`]: boolean field
//! - [`Select`]: single value from a list of options
//! - [`RadioGroup`]: exclusive choice keyed by radio id
//! - [`SingleChoiceList`]: single value shown through a choice list
//!
//! ## Example
//!
//! ```
//! use reinhardt_field_adapters::{FieldAdapter, TextField};
//! use reinhardt_form_state::{FieldKey, FormControl, FormResult, FormSchema, FormValues};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Store {
//!     name: String,
//! }
//!
//! impl FormValues for Store {
//!     fn schema() -> FormResult<FormSchema> {
//!         FormSchema::builder().text("name").build()
//!     }
//! }
//!
//! const NAME: FieldKey<Store, String> = FieldKey::new("name");
//!
//! let form = FormControl::new(Store { name: "Jaded Pixel".into() }).unwrap();
//! let field = TextField::new(&form, NAME)
//!     .label("Store name")
//!     .mount()
//!     .unwrap();
//!
//! let props = field.render();
//! assert_eq!(props.value, "Jaded Pixel");
//! props.input("Corner Shop");
//! assert_eq!(field.render().value, "Corner Shop");
//! ```

pub mod adapters;
pub mod callback;
pub mod error;
pub mod merge;
pub mod options;
pub mod primitives;

pub use adapters::{
	Checkbox, CheckboxDisplay, FieldAdapter, MountedCheckbox, MountedRadioGroup, MountedSelect,
	MountedSingleChoiceList, MountedTextField, RadioGroup, RadioGroupDisplay, Select,
	SelectDisplay, SingleChoiceList, SingleChoiceListDisplay, TextField, TextFieldDisplay,
};
pub use callback::Callback;
pub use error::{AdapterError, AdapterResult};
pub use merge::{Overrides, default_label, merge_overrides};
pub use options::{OptionList, RadioOption, SelectOption, ensure_unique_ids};
pub use primitives::{
	CheckboxProps, ChoiceListProps, Direction, InputMode, InputType, RadioButtonProps,
	RadioGroupProps, RenderHtml, SelectProps, TextInputProps, html_escape,
};

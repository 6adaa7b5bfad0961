//! Store name page: one text field with a length rule.

use reinhardt_field_adapters::{FieldAdapter, TextField};
use reinhardt_form_state::{
	FieldKey, FormConfig, FormControl, FormResult, FormSchema, FormValues, RuleValue,
};
use serde::{Deserialize, Serialize};

use super::{heading, html, report, step};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreForm {
	pub name: String,
}

impl FormValues for StoreForm {
	fn schema() -> FormResult<FormSchema> {
		FormSchema::builder().text("name").build()
	}
}

const NAME: FieldKey<StoreForm, String> = FieldKey::new("name");

pub fn run(config: &FormConfig) -> anyhow::Result<()> {
	heading("Text field");
	let form = FormControl::with_config(
		StoreForm {
			name: "Jaded Pixel".to_string(),
		},
		config.clone(),
	)?;
	let name = TextField::new(&form, NAME)
		.label("Store name")
		.autocomplete("off")
		.required(RuleValue::with_message(true, "Store name is required"))
		.max_length(RuleValue::with_message(40, "Keep it under 40 characters"))
		.mount()?;
	html(&name.render_html());

	step("clear the name and submit");
	name.render().input("");
	report(form.handle_submit(|_| Ok::<(), String>(()), |_| {}))?;
	html(&name.render_html());

	step("type a new name and submit");
	name.render().input("Corner Shop");
	name.render().blur();
	report(form.handle_submit(
		|values: StoreForm| {
			println!("   name = {:?}", values.name);
			Ok::<(), String>(())
		},
		|_| {},
	))?;
	Ok(())
}

//! Dropdown page.

use reinhardt_field_adapters::{FieldAdapter, Select};
use reinhardt_form_state::{FieldKey, FormConfig, FormControl, FormResult, FormSchema, FormValues};
use serde::{Deserialize, Serialize};

use super::{heading, html, report, step};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectForm {
	pub sel: String,
}

impl FormValues for SelectForm {
	fn schema() -> FormResult<FormSchema> {
		FormSchema::builder().enumerated("sel", ["a", "b"]).build()
	}
}

const SEL: FieldKey<SelectForm, String> = FieldKey::new("sel");

pub fn run(config: &FormConfig) -> anyhow::Result<()> {
	heading("Select");
	let form = FormControl::with_config(
		SelectForm {
			sel: "b".to_string(),
		},
		config.clone(),
	)?;
	let sel = Select::new(&form, SEL)
		.label("Select label")
		.options([("A", "a"), ("B", "b")])
		.required(true)
		.mount()?;
	html(&sel.render_html());

	step("choose A");
	sel.render().choose("a");
	html(&sel.render_html());

	report(form.handle_submit(
		|values: SelectForm| {
			println!("   sel = {:?}", values.sel);
			Ok::<(), String>(())
		},
		|_| {},
	))
}

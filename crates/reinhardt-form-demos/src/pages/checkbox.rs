//! Basic checkbox page.

use reinhardt_field_adapters::{Checkbox, FieldAdapter};
use reinhardt_form_state::{FieldKey, FormConfig, FormControl, FormResult, FormSchema, FormValues};
use serde::{Deserialize, Serialize};

use super::{heading, html, report, step};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckForm {
	pub check: bool,
}

impl FormValues for CheckForm {
	fn schema() -> FormResult<FormSchema> {
		FormSchema::builder().boolean("check").build()
	}
}

const CHECK: FieldKey<CheckForm, bool> = FieldKey::new("check");

pub fn run(config: &FormConfig) -> anyhow::Result<()> {
	heading("Checkbox");
	let form = FormControl::with_config(CheckForm { check: true }, config.clone())?;
	let check = Checkbox::new(&form, CHECK)
		.label("Basic checkbox")
		.on_change(|event, _| tracing::info!(value = %event.value, "checkbox changed"))
		.mount()?;
	html(&check.render_html());

	step("toggle");
	check.render().toggle();
	html(&check.render_html());

	report(form.handle_submit(
		|values: CheckForm| {
			println!("   check = {}", values.check);
			Ok::<(), String>(())
		},
		|_| {},
	))
}

//! Choice list page.

use reinhardt_field_adapters::{FieldAdapter, SingleChoiceList};
use reinhardt_form_state::{FieldKey, FormConfig, FormControl, FormResult, FormSchema, FormValues};
use serde::{Deserialize, Serialize};

use super::{heading, html, report, step};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceForm {
	pub choice: String,
}

impl FormValues for ChoiceForm {
	fn schema() -> FormResult<FormSchema> {
		FormSchema::builder().text("choice").build()
	}
}

const CHOICE: FieldKey<ChoiceForm, String> = FieldKey::new("choice");

pub fn run(config: &FormConfig) -> anyhow::Result<()> {
	heading("Single choice list");
	let form = FormControl::with_config(
		ChoiceForm {
			choice: "x".to_string(),
		},
		config.clone(),
	)?;
	let choice = SingleChoiceList::new(&form, CHOICE)
		.title("Choices")
		.choices([("A", "a"), ("B", "b")])
		.mount()?;
	html(&choice.render_html());

	step("pick B");
	choice.render().click("b");
	html(&choice.render_html());

	step("report an empty selection");
	choice.render().report(Vec::new());

	report(form.handle_submit(
		|values: ChoiceForm| {
			println!("   choice = {:?}", values.choice);
			Ok::<(), String>(())
		},
		|_| {},
	))
}

//! Customer accounts page.

use reinhardt_field_adapters::{FieldAdapter, RadioGroup, RadioOption};
use reinhardt_form_state::{FieldKey, FormConfig, FormControl, FormResult, FormSchema, FormValues};
use serde::{Deserialize, Serialize};

use super::{heading, html, report, step};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsForm {
	pub accounts: String,
}

impl FormValues for AccountsForm {
	fn schema() -> FormResult<FormSchema> {
		FormSchema::builder()
			.enumerated("accounts", ["disabled", "optional"])
			.build()
	}
}

const ACCOUNTS: FieldKey<AccountsForm, String> = FieldKey::new("accounts");

pub(crate) fn account_options() -> Vec<RadioOption> {
	vec![
		RadioOption::new("disabled", "Accounts are disabled")
			.help_text("Customers will only be able to check out as guests."),
		RadioOption::new("optional", "Accounts are optional").help_text(
			"Customers will be able to check out with a customer account or as a guest.",
		),
	]
}

pub fn run(config: &FormConfig) -> anyhow::Result<()> {
	heading("Radio group");
	let form = FormControl::with_config(
		AccountsForm {
			accounts: "disabled".to_string(),
		},
		config.clone(),
	)?;
	let accounts = RadioGroup::new(&form, ACCOUNTS)
		.title("Customer accounts")
		.options(account_options())
		.mount()?;
	html(&accounts.render_html());

	step("pick optional accounts");
	accounts.render().click("optional");
	html(&accounts.render_html());

	report(form.handle_submit(
		|values: AccountsForm| {
			println!("   accounts = {:?}", values.accounts);
			Ok::<(), String>(())
		},
		|_| {},
	))
}

//! Signup page: every adapter on one form.
//!
//! The plan select carries the preferences rule: choosing the `none` plan
//! switches the newsletter checkbox off, and a newsletter subscription
//! without a plan fails validation.

use futures::executor::block_on;
use reinhardt_field_adapters::{
	Checkbox, FieldAdapter, RadioGroup, Select, SingleChoiceList, TextField,
};
use reinhardt_form_state::{
	FieldKey, FormConfig, FormControl, FormResult, FormSchema, FormValues, Pattern, RuleValue,
	SetValueOptions,
};
use serde::{Deserialize, Serialize};

use super::radio_group::account_options;
use super::{heading, html, report, step};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupForm {
	pub store_name: String,
	pub email: String,
	pub accounts: String,
	pub plan: String,
	pub newsletter: bool,
	pub choice: String,
}

impl FormValues for SignupForm {
	fn schema() -> FormResult<FormSchema> {
		FormSchema::builder()
			.text("store_name")
			.text("email")
			.enumerated("accounts", ["disabled", "optional"])
			.enumerated("plan", ["none", "basic", "pro"])
			.boolean("newsletter")
			.text("choice")
			.build()
	}
}

const STORE_NAME: FieldKey<SignupForm, String> = FieldKey::new("store_name");
const EMAIL: FieldKey<SignupForm, String> = FieldKey::new("email");
const ACCOUNTS: FieldKey<SignupForm, String> = FieldKey::new("accounts");
const PLAN: FieldKey<SignupForm, String> = FieldKey::new("plan");
const NEWSLETTER: FieldKey<SignupForm, bool> = FieldKey::new("newsletter");
const CHOICE: FieldKey<SignupForm, String> = FieldKey::new("choice");

fn defaults() -> SignupForm {
	SignupForm {
		store_name: "Jaded Pixel".to_string(),
		email: String::new(),
		accounts: "disabled".to_string(),
		plan: "basic".to_string(),
		newsletter: false,
		choice: "a".to_string(),
	}
}

pub fn run(config: &FormConfig) -> anyhow::Result<()> {
	heading("Signup");
	let form = FormControl::with_config(defaults(), config.clone())?;

	let store_name = TextField::new(&form, STORE_NAME)
		.label("Store name")
		.autocomplete("off")
		.required(RuleValue::with_message(true, "Store name is required"))
		.mount()?;
	let email = TextField::new(&form, EMAIL)
		.input_type(reinhardt_field_adapters::InputType::Email)
		.required(RuleValue::with_message(true, "Email is required"))
		.pattern(RuleValue::with_message(
			Pattern::new(r"^[^@\s]+@[^@\s]+$")?,
			"Enter a valid email address",
		))
		.mount()?;
	let accounts = RadioGroup::new(&form, ACCOUNTS)
		.title("Customer accounts")
		.options(account_options())
		.mount()?;
	let plan = Select::new(&form, PLAN)
		.label("Plan")
		.options([("No plan", "none"), ("Basic", "basic"), ("Pro", "pro")])
		.on_change(|event, control| {
			if event.value.as_text() == Some("none")
				&& let Err(e) =
					control.set_value("newsletter", false, SetValueOptions::validate())
			{
				tracing::warn!(error = %e, "could not clear newsletter");
			}
		})
		.mount()?;
	let newsletter = Checkbox::new(&form, NEWSLETTER)
		.label("Send me the newsletter")
		.validate(|value, values| {
			if value.as_bool() == Some(true) && values.text("plan") == Some("none") {
				Err("The newsletter needs a plan".to_string())
			} else {
				Ok(())
			}
		})
		.mount()?;
	let choice = SingleChoiceList::new(&form, CHOICE)
		.title("Choices")
		.choices([("A", "a"), ("B", "b")])
		.mount()?;

	for markup in [
		store_name.render_html(),
		email.render_html(),
		accounts.render_html(),
		plan.render_html(),
		newsletter.render_html(),
		choice.render_html(),
	] {
		html(&markup);
	}

	step("submit without an email");
	report(submit(&form))?;
	html(&email.render_html());

	step("fill in the form, subscribe, then drop the plan");
	email.render().input("owner@jadedpixel.test");
	accounts.render().click("optional");
	newsletter.render().toggle();
	plan.render().choose("none");
	println!("   newsletter checked: {}", newsletter.render().checked);
	choice.render().click("b");

	step("submit");
	report(submit(&form))
}

fn submit(form: &FormControl<SignupForm>) -> Result<(), reinhardt_form_state::SubmitError<String>> {
	block_on(form.handle_submit_async(|values: SignupForm| async move {
		tracing::info!(store = %values.store_name, "creating store");
		println!(
			"   {} <{}> accounts={} plan={} newsletter={} choice={}",
			values.store_name,
			values.email,
			values.accounts,
			values.plan,
			values.newsletter,
			values.choice
		);
		Ok::<(), String>(())
	}))
}

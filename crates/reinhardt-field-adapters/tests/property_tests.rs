//! Property-based tests for adapter projections
//!
//! Invariants checked:
//! - A radio group never renders more than one checked radio
//! - Writing through an adapter's change handler and reading the binding
//!   gives back the written value
//! - A single choice list writes the first element of any non-empty
//!   selection

use proptest::prelude::*;
use reinhardt_field_adapters::{FieldAdapter, RadioGroup, RadioOption, SingleChoiceList, TextField};
use reinhardt_form_state::{
	FieldKey, FormControl, FormResult, FormSchema, FormValues, SetValueOptions,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Page {
	title: String,
	picked: String,
}

impl FormValues for Page {
	fn schema() -> FormResult<FormSchema> {
		FormSchema::builder().text("title").text("picked").build()
	}
}

const TITLE: FieldKey<Page, String> = FieldKey::new("title");
const PICKED: FieldKey<Page, String> = FieldKey::new("picked");

fn radio_ids() -> impl Strategy<Value = Vec<String>> {
	prop::collection::hash_set("[a-z]{1,6}", 1..8).prop_map(|ids| ids.into_iter().collect())
}

proptest! {
	#[test]
	fn radio_group_checks_at_most_one(ids in radio_ids(), value in "[a-z]{0,6}") {
		let form = FormControl::new(Page::default()).unwrap();
		form.set_value("picked", value.as_str(), SetValueOptions::default()).unwrap();
		let group = RadioGroup::new(&form, PICKED)
			.options(ids.iter().map(|id| RadioOption::new(id.as_str(), id.to_uppercase())))
			.mount()
			.unwrap();

		let props = group.render();
		let checked: Vec<&str> = props
			.buttons
			.iter()
			.filter(|b| b.checked)
			.map(|b| b.id.as_str())
			.collect();

		prop_assert!(checked.len() <= 1);
		if ids.contains(&value) {
			prop_assert_eq!(checked, vec![value.as_str()]);
		} else {
			prop_assert!(checked.is_empty());
		}
	}

	#[test]
	fn radio_click_keeps_exclusivity(ids in radio_ids(), pick in any::<prop::sample::Index>()) {
		let form = FormControl::new(Page::default()).unwrap();
		let group = RadioGroup::new(&form, PICKED)
			.options(ids.iter().map(|id| RadioOption::new(id.as_str(), id.as_str())))
			.mount()
			.unwrap();
		let target = pick.get(&ids);

		group.render().click(target);

		let props = group.render();
		prop_assert_eq!(props.checked_id(), Some(target.as_str()));
		prop_assert_eq!(props.buttons.iter().filter(|b| b.checked).count(), 1);
	}

	#[test]
	fn text_field_round_trip(value in ".{0,40}") {
		let form = FormControl::new(Page::default()).unwrap();
		let field = TextField::new(&form, TITLE).mount().unwrap();

		field.render().input(value.clone());

		prop_assert_eq!(field.binding().value(), value.clone());
		prop_assert_eq!(field.render().value, value);
	}

	#[test]
	fn single_choice_list_writes_first(selection in prop::collection::vec("[a-z]{1,4}", 1..5)) {
		let form = FormControl::new(Page::default()).unwrap();
		let list = SingleChoiceList::new(&form, PICKED).mount().unwrap();

		list.render().report(selection.clone());

		prop_assert_eq!(list.binding().value(), selection[0].clone());
		prop_assert_eq!(list.render().selected, vec![selection[0].clone()]);
	}
}

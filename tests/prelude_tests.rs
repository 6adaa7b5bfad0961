//! Facade integration tests
//!
//! A page built only from `form_bridge::prelude` mounts every adapter and
//! submits through the shared form.

use form_bridge::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Listing {
	title: String,
	featured: bool,
	category: String,
	visibility: String,
	tag: String,
}

impl FormValues for Listing {
	fn schema() -> FormResult<FormSchema> {
		FormSchema::builder()
			.text("title")
			.boolean("featured")
			.enumerated("category", ["books", "music"])
			.enumerated("visibility", ["public", "private"])
			.text("tag")
			.build()
	}
}

const TITLE: FieldKey<Listing, String> = FieldKey::new("title");
const FEATURED: FieldKey<Listing, bool> = FieldKey::new("featured");
const CATEGORY: FieldKey<Listing, String> = FieldKey::new("category");
const VISIBILITY: FieldKey<Listing, String> = FieldKey::new("visibility");
const TAG: FieldKey<Listing, String> = FieldKey::new("tag");

fn listing() -> Listing {
	Listing {
		title: String::new(),
		featured: false,
		category: "books".to_string(),
		visibility: "public".to_string(),
		tag: "new".to_string(),
	}
}

#[rstest]
#[case("", false)]
#[case("Dune", true)]
fn test_page_submit_follows_required_title(#[case] title: &str, #[case] accepted: bool) {
	// Arrange
	let form = FormControl::new(listing()).unwrap();
	let title_field = TextField::new(&form, TITLE)
		.required(RuleValue::with_message(true, "Title is required"))
		.mount()
		.unwrap();
	let _featured = Checkbox::new(&form, FEATURED).mount().unwrap();
	let _category = Select::new(&form, CATEGORY)
		.options([("Books", "books"), ("Music", "music")])
		.mount()
		.unwrap();
	let _visibility = RadioGroup::new(&form, VISIBILITY)
		.options([
			RadioOption::new("public", "Public"),
			RadioOption::new("private", "Private"),
		])
		.mount()
		.unwrap();
	let _tag = SingleChoiceList::new(&form, TAG)
		.choices([SelectOption::new("New", "new"), SelectOption::new("Used", "used")])
		.mount()
		.unwrap();
	title_field.render().input(title);

	// Act
	let result = form.handle_submit(|_| Ok::<(), ()>(()), |_| {});

	// Assert
	assert_eq!(result.is_ok(), accepted);
	if !accepted {
		assert_eq!(
			title_field.render().error.as_deref(),
			Some("Title is required")
		);
	}
}

#[rstest]
fn test_prelude_exposes_config() {
	let config = FormConfig::new().with_mode(ValidationMode::OnBlur);

	let form = FormControl::with_config(listing(), config).unwrap();

	assert_eq!(form.config().mode, ValidationMode::OnBlur);
}

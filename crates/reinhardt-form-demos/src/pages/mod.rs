//! Demo pages
//!
//! Each page declares its form values, mounts its adapters, and runs a short
//! scripted session against them.

pub mod checkbox;
pub mod radio_group;
pub mod select;
pub mod signup;
pub mod single_choice_list;
pub mod text_field;

use std::fmt::Display;

use colored::Colorize;
use reinhardt_form_state::SubmitError;

pub(crate) fn heading(title: &str) {
	println!("{}", title.bold().cyan());
}

pub(crate) fn step(description: &str) {
	println!("{} {}", "->".yellow(), description);
}

pub(crate) fn html(markup: &str) {
	println!("   {}", markup.dimmed());
}

/// Print a submit outcome. Validation failures are an expected outcome of a
/// demo session and are not turned into errors.
pub(crate) fn report<E: Display>(result: Result<(), SubmitError<E>>) -> anyhow::Result<()> {
	match result {
		Ok(()) => {
			println!("{}", "Submitted".green().bold());
			Ok(())
		}
		Err(SubmitError::Invalid(errors)) => {
			println!("{}", "Submit blocked".red().bold());
			for (field, error) in &errors {
				println!("   {}: {}", field.bold(), error);
			}
			Ok(())
		}
		Err(SubmitError::Form(e)) => Err(e.into()),
		Err(SubmitError::Handler(e)) => Err(anyhow::anyhow!("submit handler failed: {e}")),
	}
}

//! Form configuration
//!
//! Controls when validation runs and how errors are collected. Loadable from
//! TOML:
//!
//! ```toml
//! mode = "on_blur"
//! revalidate_mode = "on_change"
//! criteria_mode = "all"
//! should_unregister = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};
use crate::rules::EventKind;

/// When fields are validated before the first submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
	#[default]
	OnSubmit,
	OnBlur,
	OnChange,
	/// On the first blur, then on every change
	OnTouched,
	/// On both blur and change
	All,
}

/// When fields are re-validated after the first submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevalidateMode {
	#[default]
	OnChange,
	OnBlur,
	OnSubmit,
}

/// Whether a field reports only its first failing rule or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriteriaMode {
	#[default]
	FirstError,
	All,
}

/// Form-wide settings.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
	pub mode: ValidationMode,
	pub revalidate_mode: RevalidateMode,
	pub criteria_mode: CriteriaMode,
	/// Reset a field's value and error when its last binding is dropped
	pub should_unregister: bool,
}

impl FormConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_mode(mut self, mode: ValidationMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn with_revalidate_mode(mut self, mode: RevalidateMode) -> Self {
		self.revalidate_mode = mode;
		self
	}

	pub fn with_criteria_mode(mut self, mode: CriteriaMode) -> Self {
		self.criteria_mode = mode;
		self
	}

	pub fn with_should_unregister(mut self, should_unregister: bool) -> Self {
		self.should_unregister = should_unregister;
		self
	}

	/// Parse configuration from a TOML string. Missing keys keep their
	/// defaults.
	pub fn from_toml_str(content: &str) -> FormResult<Self> {
		toml::from_str(content).map_err(|e| FormError::Config(e.to_string()))
	}

	/// Load configuration from a TOML file.
	///
	/// # Errors
	///
	/// Returns [`FormError::Config`] if the file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> FormResult<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path)
			.map_err(|e| FormError::Config(format!("{}: {}", path.display(), e)))?;
		Self::from_toml_str(&content)
	}

	/// Whether an event on a field should trigger validation.
	///
	/// `touched` is the field's touched flag before this event; `submitted`
	/// is whether the form has been submitted at least once.
	pub fn should_validate(&self, event: EventKind, touched: bool, submitted: bool) -> bool {
		let is_blur = event == EventKind::Blur;
		if self.mode == ValidationMode::All {
			return true;
		}
		if !submitted && self.mode == ValidationMode::OnTouched {
			return touched || is_blur;
		}

		let on_blur = if submitted {
			self.revalidate_mode == RevalidateMode::OnBlur
		} else {
			self.mode == ValidationMode::OnBlur
		};
		if on_blur {
			return is_blur;
		}

		let on_change = if submitted {
			self.revalidate_mode == RevalidateMode::OnChange
		} else {
			self.mode == ValidationMode::OnChange
		};
		if on_change {
			return !is_blur;
		}

		false
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let config = FormConfig::default();
		assert_eq!(config.mode, ValidationMode::OnSubmit);
		assert_eq!(config.revalidate_mode, RevalidateMode::OnChange);
		assert_eq!(config.criteria_mode, CriteriaMode::FirstError);
		assert!(!config.should_unregister);
	}

	#[rstest]
	fn test_from_toml_str_partial() {
		// Arrange
		let content = r#"
			mode = "on_touched"
			criteria_mode = "all"
		"#;

		// Act
		let config = FormConfig::from_toml_str(content).unwrap();

		// Assert
		assert_eq!(config.mode, ValidationMode::OnTouched);
		assert_eq!(config.criteria_mode, CriteriaMode::All);
		assert_eq!(config.revalidate_mode, RevalidateMode::OnChange);
	}

	#[rstest]
	fn test_from_toml_str_rejects_unknown_mode() {
		let result = FormConfig::from_toml_str(r#"mode = "whenever""#);
		assert!(matches!(result, Err(FormError::Config(_))));
	}

	#[rstest]
	fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		std::io::Write::write_all(&mut file, b"should_unregister = true\n").unwrap();

		let config = FormConfig::from_file(file.path()).unwrap();

		assert!(config.should_unregister);
	}

	#[rstest]
	// mode, event, touched, submitted, expected
	#[case(ValidationMode::OnSubmit, EventKind::Change, false, false, false)]
	#[case(ValidationMode::OnSubmit, EventKind::Blur, true, false, false)]
	#[case(ValidationMode::OnBlur, EventKind::Blur, false, false, true)]
	#[case(ValidationMode::OnBlur, EventKind::Change, true, false, false)]
	#[case(ValidationMode::OnChange, EventKind::Change, false, false, true)]
	#[case(ValidationMode::OnChange, EventKind::Blur, false, false, false)]
	#[case(ValidationMode::OnTouched, EventKind::Change, false, false, false)]
	#[case(ValidationMode::OnTouched, EventKind::Blur, false, false, true)]
	#[case(ValidationMode::OnTouched, EventKind::Change, true, false, true)]
	#[case(ValidationMode::All, EventKind::Change, false, false, true)]
	#[case(ValidationMode::All, EventKind::Blur, false, false, true)]
	// after submit the default revalidate mode is on_change
	#[case(ValidationMode::OnSubmit, EventKind::Change, false, true, true)]
	#[case(ValidationMode::OnSubmit, EventKind::Blur, false, true, false)]
	#[case(ValidationMode::OnBlur, EventKind::Change, false, true, true)]
	fn test_should_validate(
		#[case] mode: ValidationMode,
		#[case] event: EventKind,
		#[case] touched: bool,
		#[case] submitted: bool,
		#[case] expected: bool,
	) {
		let config = FormConfig::new().with_mode(mode);
		assert_eq!(config.should_validate(event, touched, submitted), expected);
	}

	#[rstest]
	fn test_revalidate_on_submit_skips_events() {
		let config = FormConfig::new().with_revalidate_mode(RevalidateMode::OnSubmit);
		assert!(!config.should_validate(EventKind::Change, true, true));
		assert!(!config.should_validate(EventKind::Blur, true, true));
	}
}

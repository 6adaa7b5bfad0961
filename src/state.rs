//! Form-state management
//!
//! This module provides access to reinhardt-form-state: typed form schemas,
//! field registration with validation rules, dirty/touched bookkeeping, the
//! submit pipeline and fine-grained subscriptions.
//!
//! ## Example
//!
//! ```rust
//! use form_bridge::state::{FormConfig, ValidationMode};
//!
//! let config = FormConfig::from_toml_str(r#"mode = "on_blur""#).unwrap();
//! assert_eq!(config.mode, ValidationMode::OnBlur);
//! ```

// Re-export all reinhardt-form-state functionality
pub use reinhardt_form_state::*;

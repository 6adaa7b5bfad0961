//! Field adapters and visual primitives
//!
//! This module provides access to reinhardt-field-adapters: the text field,
//! checkbox, select, radio group and single choice list adapters together
//! with the plain props structs they render.

// Re-export all reinhardt-field-adapters functionality
pub use reinhardt_field_adapters::*;

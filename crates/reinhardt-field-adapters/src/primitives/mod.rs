//! Stateless visual primitives
//!
//! Plain prop structs for the controls adapters drive. A primitive holds no
//! state of its own: it displays what its props say and reports user input
//! through its callbacks. Each one renders to plain HTML through
//! [`RenderHtml`], and exposes helpers (`input`, `toggle`, `choose`, `click`,
//! `blur`) that play the part of a user interacting with it.

pub mod checkbox;
pub mod choice_list;
pub mod html;
pub mod radio;
pub mod select;
pub mod text_input;

pub use checkbox::CheckboxProps;
pub use choice_list::ChoiceListProps;
pub use html::{RenderHtml, html_escape};
pub use radio::{Direction, RadioButtonProps, RadioGroupProps};
pub use select::SelectProps;
pub use text_input::{InputMode, InputType, TextInputProps};

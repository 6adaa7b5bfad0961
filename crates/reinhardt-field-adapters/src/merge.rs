//! Caller overrides applied on top of adapter-computed props
//!
//! Adapters compute a full props value from the binding, then hand it to
//! [`merge_overrides`] together with the caller's display settings. A set
//! override replaces the computed default. Override types only carry display
//! fields: the bound value and the change/blur notifiers have no override
//! field, so a caller cannot replace them.

/// Display settings that can be laid over a props value `P`.
pub trait Overrides<P> {
	fn apply_to(&self, props: &mut P);
}

/// Apply `overrides` to `computed` and return the merged props.
pub fn merge_overrides<P, O: Overrides<P>>(mut computed: P, overrides: &O) -> P {
	overrides.apply_to(&mut computed);
	computed
}

/// Replace `target` with a clone of `value` when it is set.
pub(crate) fn apply<T: Clone>(target: &mut T, value: &Option<T>) {
	if let Some(value) = value {
		*target = value.clone();
	}
}

/// Replace an optional `target` when `value` is set.
pub(crate) fn apply_opt<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
	if value.is_some() {
		target.clone_from(value);
	}
}

/// Turn a field name into a default label: `store_name` -> `Store name`.
pub fn default_label(name: &str) -> String {
	let words = name.replace(['_', '-'], " ");
	let mut chars = words.trim().chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

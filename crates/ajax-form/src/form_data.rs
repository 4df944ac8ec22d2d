//! Form field serialization.
//!
//! A form is read as a list of [`FormControl`]s in document order. Only
//! *successful* controls contribute to the payload:
//!
//! - the control has a non-empty `name` and is not disabled
//! - `submit`, `button`, `reset`, `image` and `file` inputs never contribute
//! - checkboxes and radios contribute only when checked
//! - a `<select>` contributes its selected, enabled options (all of them when
//!   `multiple`, otherwise the first)
//!
//! Line breaks in values are normalized to `\r\n`, matching what browsers send.
//!
//! The [`FormSource`] trait is the seam between the serializer and the DOM;
//! [`StaticForm`] is an in-memory source usable off-browser.

use serde_json::{Map, Value};
use std::cell::RefCell;

/// Flat payload mapping field name to value.
pub type FormData = Map<String, Value>;

/// Input types that are never serialized.
const EXCLUDED_INPUT_TYPES: &[&str] = &["submit", "button", "reset", "image", "file"];

/// One `<option>` of a `<select>` control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
	/// Option value
	pub value: String,
	/// Whether the option is selected
	pub selected: bool,
	/// Whether the option is disabled
	pub disabled: bool,
}

impl SelectOption {
	/// An enabled option.
	pub fn new(value: impl Into<String>, selected: bool) -> Self {
		Self {
			value: value.into(),
			selected,
			disabled: false,
		}
	}
}

/// A snapshot of one form control's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormControl {
	/// `<input type=...>`
	Input {
		/// Lowercase `type` attribute (`text`, `checkbox`, ...)
		input_type: String,
		/// `name` attribute
		name: String,
		/// Current value
		value: String,
		/// Checkedness (checkbox/radio only)
		checked: bool,
		/// Disabled state
		disabled: bool,
	},
	/// `<textarea>`
	TextArea {
		/// `name` attribute
		name: String,
		/// Current value
		value: String,
		/// Disabled state
		disabled: bool,
	},
	/// `<select>` / `<select multiple>`
	Select {
		/// `name` attribute
		name: String,
		/// Options in document order
		options: Vec<SelectOption>,
		/// Whether multiple selection is allowed
		multiple: bool,
		/// Disabled state
		disabled: bool,
	},
}

impl FormControl {
	/// An input of the given type.
	pub fn input(
		input_type: impl Into<String>,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> Self {
		Self::Input {
			input_type: input_type.into().to_ascii_lowercase(),
			name: name.into(),
			value: value.into(),
			checked: false,
			disabled: false,
		}
	}

	/// A `type="text"` input.
	pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self::input("text", name, value)
	}

	/// A `type="hidden"` input.
	pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self::input("hidden", name, value)
	}

	/// A checkbox with the given value and checkedness.
	pub fn checkbox(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
		Self::input("checkbox", name, value).with_checked(checked)
	}

	/// A radio button with the given value and checkedness.
	pub fn radio(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
		Self::input("radio", name, value).with_checked(checked)
	}

	/// A `<textarea>`.
	pub fn textarea(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self::TextArea {
			name: name.into(),
			value: value.into(),
			disabled: false,
		}
	}

	/// A `<select>`.
	pub fn select(name: impl Into<String>, options: Vec<SelectOption>, multiple: bool) -> Self {
		Self::Select {
			name: name.into(),
			options,
			multiple,
			disabled: false,
		}
	}

	/// Marks the control disabled.
	pub fn disabled(mut self) -> Self {
		match &mut self {
			Self::Input { disabled, .. }
			| Self::TextArea { disabled, .. }
			| Self::Select { disabled, .. } => *disabled = true,
		}
		self
	}

	fn with_checked(mut self, is_checked: bool) -> Self {
		if let Self::Input { checked, .. } = &mut self {
			*checked = is_checked;
		}
		self
	}

	/// The control's `name` attribute.
	pub fn name(&self) -> &str {
		match self {
			Self::Input { name, .. } | Self::TextArea { name, .. } | Self::Select { name, .. } => {
				name
			}
		}
	}

	fn is_disabled(&self) -> bool {
		match self {
			Self::Input { disabled, .. }
			| Self::TextArea { disabled, .. }
			| Self::Select { disabled, .. } => *disabled,
		}
	}

	/// Appends this control's name/value pairs to `pairs` if it is successful.
	fn collect_into(&self, pairs: &mut Vec<(String, String)>) {
		if self.name().is_empty() || self.is_disabled() {
			return;
		}

		match self {
			Self::Input {
				input_type,
				name,
				value,
				checked,
				..
			} => {
				if EXCLUDED_INPUT_TYPES.contains(&input_type.as_str()) {
					return;
				}
				if is_checkable(input_type) && !checked {
					return;
				}
				pairs.push((name.clone(), normalize_newlines(value)));
			}
			Self::TextArea { name, value, .. } => {
				pairs.push((name.clone(), normalize_newlines(value)));
			}
			Self::Select {
				name,
				options,
				multiple,
				..
			} => {
				let selected = options.iter().filter(|opt| opt.selected && !opt.disabled);
				let take = if *multiple { usize::MAX } else { 1 };
				for option in selected.take(take) {
					pairs.push((name.clone(), normalize_newlines(&option.value)));
				}
			}
		}
	}
}

fn is_checkable(input_type: &str) -> bool {
	input_type == "checkbox" || input_type == "radio"
}

fn normalize_newlines(value: &str) -> String {
	if !value.contains('\n') {
		return value.to_string();
	}
	value.replace("\r\n", "\n").replace('\n', "\r\n")
}

/// Anything that can report its form controls at submit time.
///
/// Implementations must read live state on every call; the submitter never
/// caches field values between submissions.
pub trait FormSource {
	/// Current controls in document order.
	fn controls(&self) -> Vec<FormControl>;
}

/// Serializes controls into ordered name/value pairs, keeping duplicates.
pub fn serialize_controls(controls: &[FormControl]) -> Vec<(String, String)> {
	let mut pairs = Vec::new();
	for control in controls {
		control.collect_into(&mut pairs);
	}
	pairs
}

/// Reads the source's successful controls into a flat mapping.
///
/// When several controls share a name, the last one in document order wins.
pub fn get_form_data(source: &dyn FormSource) -> FormData {
	serialize_controls(&source.controls())
		.into_iter()
		.map(|(name, value)| (name, Value::String(value)))
		.collect()
}

/// Overlays `additional` on `form_data`; additional entries win on collision.
pub fn merge_payload(mut form_data: FormData, additional: FormData) -> FormData {
	form_data.extend(additional);
	form_data
}

/// An in-memory form whose controls can be edited between submissions.
#[derive(Debug, Default)]
pub struct StaticForm {
	controls: RefCell<Vec<FormControl>>,
}

impl StaticForm {
	/// Creates a form from controls in document order.
	pub fn new(controls: Vec<FormControl>) -> Self {
		Self {
			controls: RefCell::new(controls),
		}
	}

	/// Appends a control.
	pub fn push(&self, control: FormControl) {
		self.controls.borrow_mut().push(control);
	}

	/// Sets the value of every non-checkable input or textarea named `name`.
	///
	/// Checkboxes and radios keep their value; only their checkedness is
	/// user-editable. Returns `false` if no matching control exists.
	pub fn set_value(&self, name: &str, new_value: impl Into<String>) -> bool {
		let new_value = new_value.into();
		let mut found = false;
		for control in self.controls.borrow_mut().iter_mut() {
			match control {
				FormControl::Input {
					input_type,
					name: n,
					value,
					..
				} if n.as_str() == name && !is_checkable(input_type) => {
					*value = new_value.clone();
					found = true;
				}
				FormControl::TextArea {
					name: n, value, ..
				} if n.as_str() == name => {
					*value = new_value.clone();
					found = true;
				}
				_ => {}
			}
		}
		found
	}
}

impl FormSource for StaticForm {
	fn controls(&self) -> Vec<FormControl> {
		self.controls.borrow().clone()
	}
}

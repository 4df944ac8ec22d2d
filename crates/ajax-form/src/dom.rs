//! Browser bindings (WASM only).
//!
//! - [`DomForm`] reads live control state from a DOM subtree.
//! - [`FormSubmitter::attach`] wires everything to the page: DOM-backed form,
//!   `reqwest` transport resolved against the current URL, and
//!   `location.replace` navigation.
//! - [`FormSubmitter::bind`] registers the click listener on the trigger.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::error::{AjaxFormError, Result};
use crate::form_data::{FormControl, FormSource, SelectOption};
use crate::navigation::LocationNavigator;
use crate::options::AjaxFormOptions;
use crate::submitter::{FormSubmitter, TriggerEvent};
use crate::transport::ReqwestTransport;
use crate::info_log;

const CONTROL_SELECTOR: &str = "input, select, textarea";

impl TriggerEvent for web_sys::Event {
	fn prevent_default(&self) {
		web_sys::Event::prevent_default(self);
	}
}

/// A [`FormSource`] backed by a DOM element (usually a `<form>`).
///
/// Controls are queried on every read, so values typed after binding are
/// always picked up.
#[derive(Debug, Clone)]
pub struct DomForm {
	element: Element,
}

impl DomForm {
	/// Wraps the element owning the form fields.
	pub fn new(element: Element) -> Self {
		Self { element }
	}

	/// The wrapped element.
	pub fn element(&self) -> &Element {
		&self.element
	}
}

impl FormSource for DomForm {
	fn controls(&self) -> Vec<FormControl> {
		let Ok(nodes) = self.element.query_selector_all(CONTROL_SELECTOR) else {
			return Vec::new();
		};

		(0..nodes.length())
			.filter_map(|i| nodes.item(i))
			.filter_map(|node| control_from_node(&node))
			.collect()
	}
}

fn control_from_node(node: &web_sys::Node) -> Option<FormControl> {
	if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
		let control = FormControl::Input {
			input_type: input.type_().to_ascii_lowercase(),
			name: input.name(),
			value: input.value(),
			checked: input.checked(),
			disabled: input.disabled(),
		};
		return Some(control);
	}

	if let Some(textarea) = node.dyn_ref::<HtmlTextAreaElement>() {
		return Some(FormControl::TextArea {
			name: textarea.name(),
			value: textarea.value(),
			disabled: textarea.disabled(),
		});
	}

	if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
		let options = (0..select.length())
			.filter_map(|i| select.item(i))
			.filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
			.map(|opt| SelectOption {
				value: opt.value(),
				selected: opt.selected(),
				disabled: opt.disabled(),
			})
			.collect();
		return Some(FormControl::Select {
			name: select.name(),
			options,
			multiple: select.multiple(),
			disabled: select.disabled(),
		});
	}

	None
}

impl FormSubmitter {
	/// Creates a submitter for `element` using browser collaborators and
	/// binds its trigger.
	///
	/// # Examples
	///
	/// ```ignore
	/// let form = document.get_element_by_id("profile").unwrap();
	/// let submitter = FormSubmitter::attach(form, options)?;
	/// ```
	pub fn attach(element: Element, options: AjaxFormOptions) -> Result<Self> {
		let transport =
			ReqwestTransport::for_current_page().map_err(|e| AjaxFormError::Dom(e.to_string()))?;
		let submitter = Self::new(
			Rc::new(DomForm::new(element)),
			options,
			Rc::new(transport),
			Rc::new(LocationNavigator),
		)?;
		submitter.bind()?;
		Ok(submitter)
	}

	/// Registers a click listener on every element matching the trigger
	/// selector.
	///
	/// Returns the number of elements bound. Fails when nothing matches.
	pub fn bind(&self) -> Result<u32> {
		let options = self.options();
		let selector = options.trigger_selector().unwrap_or_default();

		let document = web_sys::window()
			.and_then(|w| w.document())
			.ok_or_else(|| AjaxFormError::Dom("no document".into()))?;
		let triggers = document
			.query_selector_all(selector)
			.map_err(|e| AjaxFormError::Dom(format!("invalid selector {selector:?}: {e:?}")))?;
		if triggers.length() == 0 {
			return Err(AjaxFormError::Dom(format!(
				"trigger element not found: {selector}"
			)));
		}

		for i in 0..triggers.length() {
			let Some(trigger) = triggers.item(i) else {
				continue;
			};

			let submitter = self.clone();
			let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
				let pending = submitter.activate(&event);
				wasm_bindgen_futures::spawn_local(async move {
					pending.await;
				});
			}) as Box<dyn FnMut(_)>);

			trigger
				.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
				.map_err(|e| AjaxFormError::Dom(format!("failed to add click listener: {e:?}")))?;

			// The listener lives as long as the page
			closure.forget();
		}

		info_log!("bound {} trigger(s) for {}", triggers.length(), selector);
		Ok(triggers.length())
	}
}

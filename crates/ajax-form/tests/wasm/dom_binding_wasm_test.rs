//! DOM binding tests (WASM)
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/ajax-form
//!
//! These check that live DOM controls are serialized with the same rules as
//! the in-memory model, and that binding the trigger resolves the selector.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use ajax_form::testing::{MockTransport, RecordingNavigator};
use ajax_form::{AjaxFormError, AjaxFormOptions, DomForm, FormSubmitter, get_form_data};
use serde_json::{Value, json};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> web_sys::Element {
	let document = web_sys::window().unwrap().document().unwrap();
	let container = document.create_element("div").unwrap();
	container.set_inner_html(html);
	document.body().unwrap().append_child(&container).unwrap();
	container
}

#[wasm_bindgen_test]
fn test_dom_form_serializes_successful_controls() {
	let container = mount(
		r#"
		<form id="profile">
			<input type="text" name="name" value="alice">
			<input type="text" name="locked" value="x" disabled>
			<input type="checkbox" name="newsletter">
			<input type="checkbox" name="terms" checked>
			<input type="submit" name="go" value="Go">
			<select name="color"><option value="red">Red</option><option value="blue" selected>Blue</option></select>
			<textarea name="bio">hi</textarea>
		</form>
		"#,
	);
	let form = container.query_selector("#profile").unwrap().unwrap();

	let data = get_form_data(&DomForm::new(form));

	assert_eq!(
		Value::Object(data),
		json!({"name": "alice", "terms": "on", "color": "blue", "bio": "hi"})
	);
}

#[wasm_bindgen_test]
fn test_dom_form_reads_live_values() {
	let container = mount(r#"<form id="live"><input type="text" name="q" value="before"></form>"#);
	let form = DomForm::new(container.query_selector("#live").unwrap().unwrap());

	let input = container
		.query_selector("input")
		.unwrap()
		.unwrap()
		.dyn_into::<web_sys::HtmlInputElement>()
		.unwrap();
	input.set_value("after");

	assert_eq!(get_form_data(&form)["q"], "after");
}

#[wasm_bindgen_test]
fn test_bind_fails_without_trigger() {
	let container = mount(r#"<form id="orphan"></form>"#);
	let options = AjaxFormOptions::builder()
		.trigger_selector("#does-not-exist")
		.target_url("/api/submit")
		.build();
	let submitter = FormSubmitter::new(
		Rc::new(DomForm::new(container)),
		options,
		Rc::new(MockTransport::new()),
		Rc::new(RecordingNavigator::new()),
	)
	.unwrap();

	assert!(matches!(submitter.bind(), Err(AjaxFormError::Dom(_))));
}

#[wasm_bindgen_test]
fn test_bind_counts_matching_triggers() {
	let container = mount(
		r#"<form><button class="save-trigger">A</button><button class="save-trigger">B</button></form>"#,
	);
	let options = AjaxFormOptions::builder()
		.trigger_selector(".save-trigger")
		.target_url("/api/submit")
		.build();
	let submitter = FormSubmitter::new(
		Rc::new(DomForm::new(container)),
		options,
		Rc::new(MockTransport::new()),
		Rc::new(RecordingNavigator::new()),
	)
	.unwrap();

	assert_eq!(submitter.bind().unwrap(), 2);
}

use employee_posts::toggle::toggle_comments;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, Event};

wasm_bindgen_test_configure!(run_in_browser);

use web_transport_::{container, document, init_logging};

/// A container with a toggle button and hidden comment section for post 5.
fn post_5() -> (Element, Element, Element) {
	let document = document();
	let root = container();

	let button = document.create_element("button").unwrap();
	button.set_text_content(Some("Show Comments"));
	button.set_attribute("data-post-id", "5").unwrap();
	root.append_child(&button).unwrap();

	let section = document.create_element("section").unwrap();
	section.set_class_name("comments hide");
	section.set_attribute("data-post-id", "5").unwrap();
	root.append_child(&section).unwrap();

	(root, button, section)
}

fn click_on(target: &Element) -> Event {
	let event = Event::new("click").unwrap();
	target.dispatch_event(&event).unwrap();
	event
}

#[wasm_bindgen_test]
fn toggles_section_and_label() {
	init_logging();
	let (root, button, section) = post_5();
	let event = click_on(&button);

	let (found_section, found_button) = toggle_comments(&root, Some(&event), Some(5)).unwrap().unwrap();
	assert_eq!(found_section.as_ref(), Some(&section));
	assert_eq!(found_button.as_ref(), Some(&button));
	assert!(!section.class_list().contains("hide"));
	assert_eq!(button.text_content().as_deref(), Some("Hide Comments"));
	assert_eq!(Reflect::get(&button, &JsValue::from_str("listener")).unwrap(), JsValue::TRUE);
}

#[wasm_bindgen_test]
fn double_toggle_restores() {
	init_logging();
	let (root, button, section) = post_5();
	let event = click_on(&button);

	toggle_comments(&root, Some(&event), Some(5)).unwrap().unwrap();
	toggle_comments(&root, Some(&event), Some(5)).unwrap().unwrap();

	assert!(section.class_list().contains("hide"));
	assert_eq!(button.text_content().as_deref(), Some("Show Comments"));
}

#[wasm_bindgen_test]
fn without_post_id_nothing_happens() {
	init_logging();
	let (root, button, section) = post_5();
	let event = click_on(&button);

	assert!(toggle_comments(&root, Some(&event), None).unwrap().is_none());
	assert!(toggle_comments(&root, Some(&event), Some(0)).unwrap().is_none());
	assert!(toggle_comments(&root, None, Some(5)).unwrap().is_none());

	assert!(section.class_list().contains("hide"));
	assert_eq!(button.text_content().as_deref(), Some("Show Comments"));
}

#[wasm_bindgen_test]
fn unknown_post_id_finds_nothing() {
	init_logging();
	let (root, button, _) = post_5();
	let event = click_on(&button);

	assert_eq!(toggle_comments(&root, Some(&event), Some(6)).unwrap(), Some((None, None)));
}

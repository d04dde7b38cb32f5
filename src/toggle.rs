use crate::{
	error::{DomResultExt, Result},
	render::{HIDE_CLASS, HIDE_COMMENTS, POST_ID_ATTRIBUTE, SHOW_COMMENTS},
};
use js_sys::Reflect;
use tracing::{instrument, trace, warn};
use wasm_bindgen::JsValue;
use web_sys::{Element, Event};

/// Shows or hides the comment section of `post_id` below `root`.
///
/// # Errors
///
/// Iff the lookup or class toggle fails.
pub fn toggle_comment_section(root: &Element, post_id: Option<u32>) -> Result<Option<Element>> {
	let post_id = match post_id.filter(|&post_id| post_id != 0) {
		Some(post_id) => post_id,
		None => return Ok(None),
	};

	let section = root
		.query_selector(&format!("section[{}='{}']", POST_ID_ATTRIBUTE, post_id))
		.dom("querySelector")?;
	if let Some(section) = &section {
		section.class_list().toggle(HIDE_CLASS).dom("classList.toggle")?;
	}
	Ok(section)
}

/// Flips the label of the toggle button of `post_id` below `root`.
///
/// # Errors
///
/// Iff the lookup fails.
pub fn toggle_comment_button(root: &Element, post_id: Option<u32>) -> Result<Option<Element>> {
	let post_id = match post_id.filter(|&post_id| post_id != 0) {
		Some(post_id) => post_id,
		None => return Ok(None),
	};

	let button = root
		.query_selector(&format!("button[{}='{}']", POST_ID_ATTRIBUTE, post_id))
		.dom("querySelector")?;
	if let Some(button) = &button {
		let label = if button.text_content().as_deref() == Some(SHOW_COMMENTS) {
			HIDE_COMMENTS
		} else {
			SHOW_COMMENTS
		};
		button.set_text_content(Some(label));
	}
	Ok(button)
}

/// Handles a toggle button activation: flips the section and the button label and marks `event`'s target with `listener = true`.
///
/// Returns [`None`] without doing anything if there is no event or no post id.
///
/// # Errors
///
/// Iff a lookup or DOM update fails.
#[allow(clippy::type_complexity)]
#[instrument(skip(root, event))]
pub fn toggle_comments(root: &Element, event: Option<&Event>, post_id: Option<u32>) -> Result<Option<(Option<Element>, Option<Element>)>> {
	let (event, post_id) = match (event, post_id.filter(|&post_id| post_id != 0)) {
		(Some(event), Some(post_id)) => (event, post_id),
		_ => return Ok(None),
	};

	match event.target() {
		Some(target) => {
			Reflect::set(&target, &JsValue::from_str("listener"), &JsValue::TRUE).dom("Reflect.set")?;
		}
		None => warn!("Toggle event without target."),
	}

	let section = toggle_comment_section(root, Some(post_id))?;
	let button = toggle_comment_button(root, Some(post_id))?;
	trace!(found_section = section.is_some(), found_button = button.is_some(), "Toggled comments.");
	Ok(Some((section, button)))
}

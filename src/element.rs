use crate::error::{DomResultExt, Result};
use web_sys::{Document, Element, Node};

/// Creates a `tag` element with `text` as its text content and, if given, `class_name` as its `class`.
///
/// # Errors
///
/// Iff the element can't be created, e.g. because `tag` is not a valid name.
pub fn create_elem_with_text(document: &Document, tag: &str, text: &str, class_name: Option<&str>) -> Result<Element> {
	let element = document.create_element(tag).dom("createElement")?;
	element.set_text_content(Some(text));
	if let Some(class_name) = class_name {
		element.set_class_name(class_name);
	}
	Ok(element)
}

/// Removes all child nodes (elements and text) from `parent`.
///
/// # Errors
///
/// Iff a child can't be removed.
pub fn delete_child_elements(parent: &Element) -> Result<&Element> {
	let node: &Node = parent.as_ref();
	while let Some(child) = node.last_child() {
		node.remove_child(&child).dom("removeChild")?;
	}
	Ok(parent)
}

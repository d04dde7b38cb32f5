use crate::{
	error::{report_error, DomResultExt, Result},
	render::POST_ID_ATTRIBUTE,
	toggle::toggle_comments,
};
use hashbrown::{hash_map::Entry, HashMap};
use tracing::{error, instrument, trace, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, Event};

/// Click listeners of the toggle buttons currently on display, keyed by post id.
///
/// Each entry owns the [`Closure`] registered with its button, so attaching and detaching are plain insertions into and removals from this map.
///
/// # Safety
///
/// Dropping the registry detaches all listeners it still holds, so no registered JavaScript callback outlives its [`Closure`].
pub struct ListenerRegistry {
	listeners: HashMap<u32, ButtonListener>,
}

struct ButtonListener {
	button: Element,
	closure: Closure<dyn Fn(Event)>,
}

impl Default for ListenerRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl ListenerRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self { listeners: HashMap::new() }
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.listeners.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.listeners.is_empty()
	}

	#[must_use]
	pub fn contains(&self, post_id: u32) -> bool {
		self.listeners.contains_key(&post_id)
	}

	/// Registers a click listener on each `button[data-post-id]` below `root` that toggles that post's comments.
	///
	/// Buttons without a valid post id or with an already registered one are skipped.
	///
	/// # Errors
	///
	/// Iff the buttons can't be queried or a listener can't be added.
	/// Listeners attached before the failure stay registered.
	#[instrument(skip(self, root))]
	pub fn attach_all(&mut self, root: &Element) -> Result<Vec<Element>> {
		let buttons = root
			.query_selector_all(&format!("button[{}]", POST_ID_ATTRIBUTE))
			.dom("querySelectorAll")?;

		let mut attached = Vec::with_capacity(buttons.length() as usize);
		for i in 0..buttons.length() {
			let button: Element = match buttons.item(i).map(|node| node.dyn_into::<Element>()) {
				Some(Ok(button)) => button,
				_ => continue,
			};

			let post_id = match button.get_attribute(POST_ID_ATTRIBUTE).and_then(|post_id| post_id.parse::<u32>().ok()) {
				Some(post_id) if post_id != 0 => post_id,
				_ => {
					warn!("Skipping toggle button without valid post id.");
					continue;
				}
			};

			let vacant = match self.listeners.entry(post_id) {
				Entry::Vacant(vacant) => vacant,
				Entry::Occupied(_) => {
					warn!(post_id, "Skipping second toggle button for the same post.");
					continue;
				}
			};

			let root = root.clone();
			let closure = Closure::wrap(Box::new(move |event: Event| {
				if let Err(error) = toggle_comments(&root, Some(&event), Some(post_id)) {
					report_error(&error);
				}
			}) as Box<dyn Fn(Event)>);
			button
				.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
				.dom("addEventListener")?;

			trace!(post_id, "Attached toggle listener.");
			attached.push(button.clone());
			vacant.insert(ButtonListener { button, closure });
		}
		Ok(attached)
	}

	/// Removes every registered listener and returns the buttons they were attached to.
	#[instrument(skip(self))]
	pub fn detach_all(&mut self) -> Vec<Element> {
		self.listeners
			.drain()
			.map(|(post_id, ButtonListener { button, closure })| {
				if let Err(error) = button.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
					error!("Failed to remove toggle listener for post {}: {:?}", post_id, error);
				}
				trace!(post_id, "Detached toggle listener.");
				button
			})
			.collect()
	}
}

impl Drop for ListenerRegistry {
	fn drop(&mut self) {
		self.detach_all();
	}
}

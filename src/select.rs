use crate::{
	error::{report, Result},
	fetch::{Api, Transport},
	id::sanitize_selection,
	model::Post,
	refresh::{PostView, Refresh},
};
use core::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlSelectElement};

/// The outcome of one handled selection change.
#[derive(Debug)]
pub struct Selection {
	pub user_id: u32,
	pub posts: Option<Vec<Post>>,
	pub refresh: Option<Refresh>,
}

/// Reacts to `change` events of the user selector by displaying the selected user's posts.
pub struct SelectionHandler<T> {
	control_id: String,
	api: Rc<Api<T>>,
	view: RefCell<PostView<T>>,
	in_flight: Cell<bool>,
}

impl<T: Transport> SelectionHandler<T> {
	pub fn new(control_id: impl Into<String>, api: Rc<Api<T>>, view: PostView<T>) -> Self {
		Self {
			control_id: control_id.into(),
			api,
			view: RefCell::new(view),
			in_flight: Cell::new(false),
		}
	}

	/// Whether a selection is currently being processed.
	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		self.in_flight.get()
	}

	/// Borrows the managed view.
	///
	/// # Panics
	///
	/// Iff called while a selection [is in flight](`SelectionHandler::is_in_flight`).
	#[must_use]
	pub fn view(&self) -> core::cell::Ref<'_, PostView<T>> {
		self.view.borrow()
	}

	/// The selector and its non-empty value, iff `event` is a `change` event targeting the designated selector.
	#[must_use]
	pub fn accepts(&self, event: &Event) -> Option<(HtmlSelectElement, String)> {
		let control = event.target()?.dyn_into::<HtmlSelectElement>().ok()?;
		let value = control.value();
		if value.is_empty() || event.type_() != "change" || control.id() != self.control_id {
			return None;
		}
		Some((control, value))
	}

	/// Fetches and displays the posts of the selected user.
	///
	/// Events that aren't [accepted](`SelectionHandler::accepts`) and events arriving while another selection
	/// is still in flight are ignored and result in [`None`]. The selector is disabled for the duration of the run.
	///
	/// # Errors
	///
	/// Iff refreshing the view fails. The selector is re-enabled either way.
	#[allow(clippy::await_holding_refcell_ref)]
	#[instrument(skip(self, event))]
	pub async fn handle(&self, event: &Event) -> Result<Option<Selection>> {
		let (control, value) = match self.accepts(event) {
			Some(accepted) => accepted,
			None => {
				debug!("Ignoring event.");
				return Ok(None);
			}
		};
		if self.in_flight.get() {
			warn!("Ignoring selection change while another one is being processed.");
			return Ok(None);
		}
		let _busy = Busy::enter(&control, &self.in_flight);

		let user_id = sanitize_selection(&value);
		info!(user_id, "User selected.");

		let posts = report(self.api.user_posts(user_id).await).flatten();

		// `in_flight` keeps any other `handle` call from reaching this borrow.
		let refresh = {
			let mut view = self.view.borrow_mut();
			view.refresh(posts.as_deref()).await?
		};

		Ok(Some(Selection { user_id, posts, refresh }))
	}
}

/// Disables the selector and sets the in-flight flag until dropped.
struct Busy<'a> {
	control: &'a HtmlSelectElement,
	in_flight: &'a Cell<bool>,
}

impl<'a> Busy<'a> {
	fn enter(control: &'a HtmlSelectElement, in_flight: &'a Cell<bool>) -> Self {
		in_flight.set(true);
		control.set_disabled(true);
		Self { control, in_flight }
	}
}

impl Drop for Busy<'_> {
	fn drop(&mut self) {
		self.control.set_disabled(false);
		self.in_flight.set(false);
	}
}

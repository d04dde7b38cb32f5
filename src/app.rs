//! Page bootstrap: fills the user selector and wires it to a [`SelectionHandler`].

use crate::{
	config::Config,
	error::{report, report_error, DomResultExt, Error, Result},
	fetch::{Api, HttpTransport, Transport},
	model::User,
	refresh::PostView,
	select::SelectionHandler,
};
use std::rc::Rc;
use tracing::{debug, info, instrument};
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlOptionElement, HtmlSelectElement};

/// One `<option>` per user, valued with the user's id and labelled with their name.
///
/// # Errors
///
/// Iff an option can't be created.
pub fn create_select_options(document: &Document, users: Option<&[User]>) -> Result<Option<Vec<HtmlOptionElement>>> {
	let users = match users {
		Some(users) => users,
		None => return Ok(None),
	};

	users
		.iter()
		.map(|user| {
			let option: HtmlOptionElement = document
				.create_element("option")
				.dom("createElement")?
				.dyn_into()
				.map_err(|element| Error::Dom {
					operation: "createElement",
					message: format!("expected <option> but got {:?}", element),
				})?;
			option.set_value(&user.id.to_string());
			option.set_text_content(Some(&user.name));
			Ok(option)
		})
		.collect::<Result<_>>()
		.map(Some)
}

/// Appends an option per user to the `<select>` with id `select_menu_id` and returns it.
///
/// # Errors
///
/// Iff there's no such `<select>` or an option can't be added.
pub fn populate_select_menu(document: &Document, select_menu_id: &str, users: Option<&[User]>) -> Result<Option<HtmlSelectElement>> {
	let options = match create_select_options(document, users)? {
		Some(options) => options,
		None => return Ok(None),
	};

	let select_menu = select_menu(document, select_menu_id)?;
	for option in &options {
		select_menu.append_child(option).dom("appendChild")?;
	}
	Ok(Some(select_menu))
}

/// Fetches all users and lists them in the selector.
///
/// # Errors
///
/// Iff the selector can't be populated. Failing to fetch the users is only reported.
#[instrument(skip(api, document))]
pub async fn init_page<T: Transport>(api: &Api<T>, document: &Document, select_menu_id: &str) -> Result<(Option<Vec<User>>, Option<HtmlSelectElement>)> {
	let users = report(api.users().await);
	let select_menu = populate_select_menu(document, select_menu_id, users.as_deref())?;
	Ok((users, select_menu))
}

/// Wires the selector's `change` event to a [`SelectionHandler`] over the configured posts container and starts populating the selector.
///
/// The listener stays registered for the lifetime of the page.
///
/// # Errors
///
/// Iff the selector or posts container is missing, or the listener can't be added.
#[instrument]
pub fn init_app(config: &Config) -> Result<()> {
	let document = web_sys::window().ok_or(Error::NoWindow)?.document().ok_or(Error::NoDocument)?;
	let api = Rc::new(Api::new(HttpTransport, config.api_base_url.clone()));

	let container = document
		.query_selector(&config.posts_container_selector)
		.dom("querySelector")?
		.ok_or_else(|| Error::MissingElement(config.posts_container_selector.clone()))?;
	let view = PostView::new(Rc::clone(&api), container)?;
	let handler = Rc::new(SelectionHandler::new(config.select_menu_id.clone(), Rc::clone(&api), view));

	let on_change = Closure::wrap(Box::new(move |event: Event| {
		let handler = Rc::clone(&handler);
		spawn_local(async move {
			if let Err(error) = handler.handle(&event).await {
				report_error(&error);
			}
		});
	}) as Box<dyn Fn(Event)>);
	select_menu(&document, &config.select_menu_id)?
		.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
		.dom("addEventListener")?;
	on_change.forget();

	let select_menu_id = config.select_menu_id.clone();
	spawn_local(async move {
		match init_page(&*api, &document, &select_menu_id).await {
			Ok((users, _)) => info!(users = users.map(|users| users.len()), "Page initialized."),
			Err(error) => report_error(&error),
		}
	});
	Ok(())
}

/// JavaScript entry point: installs logging and runs [`init_app`] with the default [`Config`] once the DOM is ready.
#[wasm_bindgen]
pub fn start() {
	if tracing_wasm::try_set_as_global_default().is_err() {
		debug!("A global tracing subscriber is already installed.");
	}

	let document = match web_sys::window().and_then(|window| window.document()) {
		Some(document) => document,
		None => return report_error(&Error::NoDocument),
	};

	if document.ready_state() == "loading" {
		let on_ready = Closure::once_into_js(move || {
			if let Err(error) = init_app(&Config::default()) {
				report_error(&error);
			}
		});
		if let Err(error) = document
			.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
			.dom("addEventListener")
		{
			report_error(&error);
		}
	} else if let Err(error) = init_app(&Config::default()) {
		report_error(&error);
	}
}

fn select_menu(document: &Document, select_menu_id: &str) -> Result<HtmlSelectElement> {
	document
		.get_element_by_id(select_menu_id)
		.and_then(|element| element.dyn_into().ok())
		.ok_or_else(|| Error::MissingElement(format!("select#{}", select_menu_id)))
}

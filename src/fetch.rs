//! Remote data access.
//!
//! [`Api`] knows the four REST resources and how ids are coerced before they're requested.
//! The actual HTTP round trip is behind [`Transport`], implemented for the browser by [`HttpTransport`].

use crate::{
	error::{Error, Result},
	id::RawId,
	model::{Comment, Post, User},
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Performs a GET request and returns the parsed JSON body.
///
/// Implementations must treat non-2xx responses as [`Error::Status`].
#[async_trait(?Send)]
pub trait Transport {
	async fn get_json(&self, url: &str) -> Result<JsValue>;
}

/// [`Transport`] via the global `window.fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpTransport;

#[async_trait(?Send)]
impl Transport for HttpTransport {
	#[instrument]
	async fn get_json(&self, url: &str) -> Result<JsValue> {
		let window = web_sys::window().ok_or(Error::NoWindow)?;

		let init = RequestInit::new();
		init.set_method("GET");
		init.set_mode(RequestMode::Cors);
		let request = Request::new_with_str_and_init(url, &init).map_err(|error| Error::network(url, &error))?;
		request
			.headers()
			.set("Accept", "application/json")
			.map_err(|error| Error::network(url, &error))?;

		let response = JsFuture::from(window.fetch_with_request(&request))
			.await
			.map_err(|error| Error::network(url, &error))?;
		let response: Response = response.dyn_into().map_err(|value| Error::network(url, &value))?;
		trace!(status = response.status(), "Received response.");
		if !response.ok() {
			return Err(Error::Status {
				url: url.to_owned(),
				status: response.status(),
			});
		}

		let json = response.json().map_err(|error| Error::decode(url, format!("{:?}", error)))?;
		JsFuture::from(json).await.map_err(|error| Error::decode(url, format!("{:?}", error)))
	}
}

/// The users/posts/comments API.
///
/// Id-taking methods return `Ok(None)` without any request if the id [is falsy](`RawId::is_falsy`).
/// Other invalid ids are [coerced](`RawId::coerce`), usually to 1.
#[derive(Debug)]
pub struct Api<T> {
	transport: T,
	base_url: String,
}

impl<T: Transport> Api<T> {
	pub fn new(transport: T, base_url: impl Into<String>) -> Self {
		Self {
			transport,
			base_url: base_url.into(),
		}
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// # Errors
	///
	/// Iff the request fails, returns a non-success status or the body doesn't decode.
	#[instrument(skip(self))]
	pub async fn users(&self) -> Result<Vec<User>> {
		self.get(&format!("{}/users", self.base_url)).await
	}

	/// # Errors
	///
	/// Iff the request fails, returns a non-success status or the body doesn't decode.
	pub async fn user(&self, user_id: impl Into<RawId>) -> Result<Option<User>> {
		match user_id.into().coerce() {
			None => Ok(None),
			Some(user_id) => self.get(&format!("{}/users/{}", self.base_url, user_id)).await.map(Some),
		}
	}

	/// Unlike a falsy `user_id`, a user without posts results in `Ok(Some(vec![]))`.
	///
	/// # Errors
	///
	/// Iff the request fails, returns a non-success status or the body doesn't decode.
	pub async fn user_posts(&self, user_id: impl Into<RawId>) -> Result<Option<Vec<Post>>> {
		match user_id.into().coerce() {
			None => Ok(None),
			Some(user_id) => self.get(&format!("{}/posts?userId={}", self.base_url, user_id)).await.map(Some),
		}
	}

	/// # Errors
	///
	/// Iff the request fails, returns a non-success status or the body doesn't decode.
	pub async fn post_comments(&self, post_id: impl Into<RawId>) -> Result<Option<Vec<Comment>>> {
		match post_id.into().coerce() {
			None => Ok(None),
			Some(post_id) => self.get(&format!("{}/comments?postId={}", self.base_url, post_id)).await.map(Some),
		}
	}

	async fn get<D: DeserializeOwned>(&self, url: &str) -> Result<D> {
		debug!(url, "Fetching.");
		let json = self.transport.get_json(url).await?;
		serde_wasm_bindgen::from_value(json).map_err(|error| Error::decode(url, error))
	}
}

//! Error types and the one place where they are reported.
//!
//! Operations in this crate return [`Result`] and propagate failures with `?`.
//! At the outermost layer (event listeners, spawned futures, and wherever fetched data is optional anyway)
//! errors are handed to [`report`] or [`report_error`], which log them and let the caller continue with absent data.

use thiserror::Error;
use tracing::error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum Error {
	#[error("no global `window` object is available")]
	NoWindow,

	#[error("the window has no `document`")]
	NoDocument,

	#[error("no element matches {0:?}")]
	MissingElement(String),

	#[error("DOM operation `{operation}` failed: {message}")]
	Dom { operation: &'static str, message: String },

	#[error("request to {url} failed: {message}")]
	Network { url: String, message: String },

	#[error("request to {url} returned HTTP status {status}")]
	Status { url: String, status: u16 },

	#[error("response from {url} could not be decoded: {message}")]
	Decode { url: String, message: String },
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
	pub(crate) fn network(url: &str, value: &JsValue) -> Self {
		Self::Network {
			url: url.to_owned(),
			message: format!("{:?}", value),
		}
	}

	pub(crate) fn decode(url: &str, message: impl ToString) -> Self {
		Self::Decode {
			url: url.to_owned(),
			message: message.to_string(),
		}
	}
}

/// Maps `web_sys`' `Result<T, JsValue>` onto [`Error::Dom`].
pub trait DomResultExt<T> {
	/// # Errors
	///
	/// Iff `self` is [`Err`], naming `operation`.
	fn dom(self, operation: &'static str) -> Result<T>;
}
impl<T> DomResultExt<T> for core::result::Result<T, JsValue> {
	fn dom(self, operation: &'static str) -> Result<T> {
		self.map_err(|value| Error::Dom {
			operation,
			message: format!("{:?}", value),
		})
	}
}

/// Logs `error`.
pub fn report_error(error: &Error) {
	error!("{}", error);
}

/// Logs the error, if any, and continues with absent data.
#[must_use]
pub fn report<T>(result: Result<T>) -> Option<T> {
	match result {
		Ok(value) => Some(value),
		Err(error) => {
			report_error(&error);
			None
		}
	}
}

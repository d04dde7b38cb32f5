#![doc(html_root_url = "https://docs.rs/employee-posts/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Lists an employee's posts and their comments in the browser.
//!
//! The page provides a `<select id="selectMenu">` and a `<main>` container.
//! [`start`] fills the selector with all users and, on each selection, rebuilds the container's content
//! through [`refresh::PostView`]. Each post carries a button that shows or hides its comments.

pub mod app;
pub mod config;
pub mod element;
pub mod error;
pub mod fetch;
pub mod id;
pub mod listeners;
pub mod model;
pub mod refresh;
pub mod render;
pub mod select;
pub mod toggle;

pub use app::start;
pub use config::Config;
pub use error::{Error, Result};

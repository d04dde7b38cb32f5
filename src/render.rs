//! Turns fetched records into DOM nodes.

use crate::{
	element::create_elem_with_text,
	error::{report, DomResultExt, Result},
	fetch::{Api, Transport},
	model::{Comment, Post},
};
use tracing::{instrument, trace, warn};
use web_sys::{Document, DocumentFragment, Element, Node};

/// Attribute correlating a post's toggle button with its comment section.
pub const POST_ID_ATTRIBUTE: &str = "data-post-id";

/// Class that hides a comment section.
pub const HIDE_CLASS: &str = "hide";

pub const SHOW_COMMENTS: &str = "Show Comments";
pub const HIDE_COMMENTS: &str = "Hide Comments";

/// One `<article>` per comment, in order. [`None`] iff `comments` is [`None`].
///
/// # Errors
///
/// Iff DOM nodes can't be created or appended.
pub fn create_comments(document: &Document, comments: Option<&[Comment]>) -> Result<Option<DocumentFragment>> {
	let comments = match comments {
		Some(comments) => comments,
		None => return Ok(None),
	};

	let fragment = document.create_document_fragment();
	for comment in comments {
		if cfg!(feature = "dangerous-logging") {
			trace!(post_id = comment.post_id, name = %comment.name, email = %comment.email, "Rendering comment.");
		}

		let article = document.create_element("article").dom("createElement")?;
		for child in &[
			create_elem_with_text(document, "h3", &comment.name, None)?,
			create_elem_with_text(document, "p", &comment.body, None)?,
			create_elem_with_text(document, "p", &format!("From: {}", comment.email), None)?,
		] {
			article.append_child(child).dom("appendChild")?;
		}
		fragment.append_child(&article).dom("appendChild")?;
	}
	Ok(Some(fragment))
}

/// A hidden `<section class="comments hide">` tagged with `post_id`, containing the post's comments.
///
/// Comments that can't be fetched leave the section empty.
///
/// # Errors
///
/// Iff DOM nodes can't be created or appended.
#[instrument(skip(api, document))]
pub async fn display_comments<T: Transport>(api: &Api<T>, document: &Document, post_id: u32) -> Result<Element> {
	let section = document.create_element("section").dom("createElement")?;
	section.set_attribute(POST_ID_ATTRIBUTE, &post_id.to_string()).dom("setAttribute")?;
	section.class_list().add_2("comments", HIDE_CLASS).dom("classList.add")?;

	let comments = report(api.post_comments(post_id).await).flatten();
	if let Some(fragment) = create_comments(document, comments.as_deref())? {
		section.append_child(&fragment).dom("appendChild")?;
	}
	Ok(section)
}

/// One `<article>` per post, in order. [`None`] iff `posts` is [`None`].
///
/// Author and comments are fetched one post after the other.
///
/// # Errors
///
/// Iff DOM nodes can't be created or appended.
#[instrument(skip(api, document, posts), fields(posts = posts.map(<[_]>::len)))]
pub async fn create_posts<T: Transport>(api: &Api<T>, document: &Document, posts: Option<&[Post]>) -> Result<Option<DocumentFragment>> {
	let posts = match posts {
		Some(posts) => posts,
		None => return Ok(None),
	};

	let fragment = document.create_document_fragment();
	for post in posts {
		trace!(post_id = post.id, user_id = post.user_id, "Rendering post.");
		if cfg!(feature = "dangerous-logging") {
			trace!(post_id = post.id, title = %post.title);
		}

		let title = create_elem_with_text(document, "h2", &post.title, None)?;
		let body = create_elem_with_text(document, "p", &post.body, None)?;
		let post_id = create_elem_with_text(document, "p", &format!("Post ID: {}", post.id), None)?;

		let (author, catch_phrase) = match report(api.user(post.user_id).await).flatten() {
			Some(author) => {
				if cfg!(feature = "dangerous-logging") {
					trace!(post_id = post.id, author = %author.name, company = %author.company.name);
				}
				(format!("Author: {} with {}", author.name, author.company.name), author.company.catch_phrase)
			}
			None => {
				warn!(post_id = post.id, user_id = post.user_id, "Author unavailable.");
				("Author: unknown".to_owned(), String::new())
			}
		};
		let author = create_elem_with_text(document, "p", &author, None)?;
		let catch_phrase = create_elem_with_text(document, "p", &catch_phrase, None)?;

		let button = create_elem_with_text(document, "button", SHOW_COMMENTS, None)?;
		button.set_attribute(POST_ID_ATTRIBUTE, &post.id.to_string()).dom("setAttribute")?;

		let section = display_comments(api, document, post.id).await?;

		let article = document.create_element("article").dom("createElement")?;
		for child in &[title, body, post_id, author, catch_phrase, button, section] {
			article.append_child(child).dom("appendChild")?;
		}
		fragment.append_child(&article).dom("appendChild")?;
	}
	Ok(Some(fragment))
}

/// The notice shown when there are no posts to display.
///
/// # Errors
///
/// Iff the element can't be created.
pub fn placeholder(document: &Document) -> Result<Node> {
	create_elem_with_text(document, "p", "Select an Employee to display their posts.", Some("default-text")).map(Into::into)
}

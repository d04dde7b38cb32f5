use crate::{
	element::delete_child_elements,
	error::{DomResultExt, Error, Result},
	fetch::{Api, Transport},
	listeners::ListenerRegistry,
	model::Post,
	render::{create_posts, placeholder},
};
use std::rc::Rc;
use tracing::{debug, instrument, trace};
use web_sys::{Document, Element, Node};

/// Where a [`PostView::refresh`] run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
	Idle,
	TearingDown,
	FetchingAuthorData,
	Rendering,
	ListenerAttaching,
}

/// What a [`PostView::refresh`] run changed.
#[derive(Debug)]
pub struct Refresh {
	/// Buttons whose toggle listener was removed.
	pub detached: Vec<Element>,
	pub container: Element,
	/// The inserted posts fragment (empty after insertion) or placeholder.
	pub rendered: Node,
	/// Buttons that received a toggle listener.
	pub attached: Vec<Element>,
}

/// The posts container together with the toggle listeners registered inside it.
///
/// The container's child nodes are exclusively managed by this instance.
/// Every [`refresh`](`PostView::refresh`) discards and rebuilds all of them.
pub struct PostView<T> {
	api: Rc<Api<T>>,
	document: Document,
	container: Element,
	listeners: ListenerRegistry,
	stage: Stage,
}

impl<T: Transport> PostView<T> {
	/// # Errors
	///
	/// Iff `container` has no owner document.
	pub fn new(api: Rc<Api<T>>, container: Element) -> Result<Self> {
		let document = container.owner_document().ok_or(Error::NoDocument)?;
		Ok(Self {
			api,
			document,
			container,
			listeners: ListenerRegistry::new(),
			stage: Stage::Idle,
		})
	}

	#[must_use]
	pub fn container(&self) -> &Element {
		&self.container
	}

	#[must_use]
	pub fn listeners(&self) -> &ListenerRegistry {
		&self.listeners
	}

	#[must_use]
	pub fn stage(&self) -> Stage {
		self.stage
	}

	/// Replaces the displayed posts with `posts`, or with a placeholder notice if `posts` is empty.
	///
	/// Listeners are detached before the old content is removed and attached once the new content is in place.
	/// With `posts` being [`None`], nothing happens and [`None`] is returned.
	///
	/// # Errors
	///
	/// Iff a DOM operation fails. The view is [`Stage::Idle`] afterwards either way.
	#[instrument(skip(self, posts), fields(posts = posts.map(<[_]>::len)))]
	pub async fn refresh(&mut self, posts: Option<&[Post]>) -> Result<Option<Refresh>> {
		let posts = match posts {
			Some(posts) => posts,
			None => {
				debug!("No posts given. Leaving the view as is.");
				return Ok(None);
			}
		};

		let result = self.run(posts).await;
		self.enter(Stage::Idle);
		result.map(Some)
	}

	async fn run(&mut self, posts: &[Post]) -> Result<Refresh> {
		self.enter(Stage::TearingDown);
		let detached = self.listeners.detach_all();
		delete_child_elements(&self.container)?;

		self.enter(Stage::FetchingAuthorData);
		let rendered: Node = if posts.is_empty() {
			placeholder(&self.document)?
		} else {
			match create_posts(&*self.api, &self.document, Some(posts)).await? {
				Some(fragment) => fragment.into(),
				None => placeholder(&self.document)?,
			}
		};

		self.enter(Stage::Rendering);
		self.container.append_child(&rendered).dom("appendChild")?;

		self.enter(Stage::ListenerAttaching);
		let attached = self.listeners.attach_all(&self.container)?;

		Ok(Refresh {
			detached,
			container: self.container.clone(),
			rendered,
			attached,
		})
	}

	fn enter(&mut self, stage: Stage) {
		trace!(from = ?self.stage, to = ?stage, "Refresh stage.");
		self.stage = stage;
	}
}

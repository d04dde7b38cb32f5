/// Where to fetch from and which elements to drive.
///
/// The page's markup is expected to contain a `<select>` with id [`select_menu_id`](`Config::select_menu_id`)
/// and a container matching [`posts_container_selector`](`Config::posts_container_selector`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Base URL of the REST API, without trailing slash.
	pub api_base_url: String,
	pub select_menu_id: String,
	pub posts_container_selector: String,
}

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

impl Default for Config {
	fn default() -> Self {
		Self {
			api_base_url: DEFAULT_API_BASE_URL.to_owned(),
			select_menu_id: "selectMenu".to_owned(),
			posts_container_selector: "main".to_owned(),
		}
	}
}

impl Config {
	#[must_use]
	pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
		let api_base_url: String = api_base_url.into();
		self.api_base_url = api_base_url.trim_end_matches('/').to_owned();
		self
	}

	#[must_use]
	pub fn with_select_menu_id(mut self, select_menu_id: impl Into<String>) -> Self {
		self.select_menu_id = select_menu_id.into();
		self
	}

	#[must_use]
	pub fn with_posts_container_selector(mut self, posts_container_selector: impl Into<String>) -> Self {
		self.posts_container_selector = posts_container_selector.into();
		self
	}
}

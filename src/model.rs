//! Records as served by the REST API. Fields not listed here are ignored when decoding.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
	pub id: u32,
	pub name: String,
	pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
	pub name: String,
	pub catch_phrase: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	pub id: u32,
	pub user_id: u32,
	pub title: String,
	pub body: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
	pub post_id: u32,
	pub name: String,
	pub body: String,
	pub email: String,
}

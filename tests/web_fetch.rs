use employee_posts::{
	error::report,
	fetch::Api,
	Error,
};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

use web_transport_::{api, init_logging, MockTransport, BASE_URL};

#[wasm_bindgen_test]
async fn falsy_ids_issue_no_request() {
	init_logging();
	let api = api();

	assert!(api.user(0_u32).await.unwrap().is_none());
	assert!(api.user_posts("").await.unwrap().is_none());
	assert!(api.user_posts(f64::NAN).await.unwrap().is_none());
	assert!(api.post_comments(None::<u32>).await.unwrap().is_none());

	assert!(api.transport().requests().is_empty());
}

#[wasm_bindgen_test]
async fn invalid_ids_request_user_one() {
	init_logging();
	let api = api();

	api.user_posts(-5_i32).await.unwrap();
	api.user("abc").await.unwrap();
	api.user(0.25).await.unwrap();
	api.post_comments("0").await.unwrap();

	assert_eq!(api.transport().requests(), ["/posts?userId=1", "/users/1", "/users/1", "/comments?postId=1"]);
}

#[wasm_bindgen_test]
async fn user_without_posts_is_empty_not_absent() {
	init_logging();
	let api = api();

	assert_eq!(api.user_posts(2_u32).await.unwrap(), Some(vec![]));
	assert_eq!(api.user_posts(0_u32).await.unwrap(), None);
}

#[wasm_bindgen_test]
async fn decodes_records() {
	init_logging();
	let api = api();

	let users = api.users().await.unwrap();
	assert_eq!(users.len(), 2);
	assert_eq!(users[1].name, "Ervin Howell");
	assert_eq!(users[0].company.catch_phrase, "Multi-layered client-server neural-net");

	let posts = api.user_posts(1_u32).await.unwrap().unwrap();
	assert_eq!(posts.iter().map(|post| post.id).collect::<Vec<_>>(), [1, 2]);
	assert!(posts.iter().all(|post| post.user_id == 1));

	let comments = api.post_comments(1_u32).await.unwrap().unwrap();
	assert_eq!(comments[0].email, "Eliseo@gardner.biz");
	assert_eq!(comments[1].post_id, 1);
}

#[wasm_bindgen_test]
async fn non_success_status_is_reported_as_absent() {
	init_logging();
	let api = api();

	match api.user(3_u32).await {
		Err(Error::Status { status: 404, url }) => assert_eq!(url, format!("{}/users/3", BASE_URL)),
		other => panic!("Expected 404 but got {:?}", other),
	}
	assert!(report(api.user(3_u32).await).flatten().is_none());
}

#[wasm_bindgen_test]
async fn undecodable_body_is_an_error() {
	init_logging();
	let transport = MockTransport::default();
	transport.route("/users", r#"{"not":"a list"}"#);
	let api = Api::new(transport, BASE_URL);

	assert!(matches!(api.users().await, Err(Error::Decode { .. })));
}

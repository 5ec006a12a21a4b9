mod common;

use axum::http::StatusCode;
use common::{bob_and_alice, row_names, server_with_store, server_with_users, user};
use roster_business::{BusinessConfig, UserStore, UsersClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn default_view_sorts_by_id_ascending() {
    let server = server_with_users(bob_and_alice());

    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();

    assert_eq!(row_names(&html), vec!["Bob", "alice"]);
    assert!(html.contains(r#"Id<span class="sort-icon">▲</span>"#));
    assert!(
        response
            .header("content-type")
            .to_str()
            .expect("content type is ASCII")
            .starts_with("text/html")
    );
}

#[tokio::test]
async fn name_search_filters_rows() {
    let server = server_with_users(bob_and_alice());

    let response = server.get("/").add_query_param("name", "ALI").await;
    response.assert_status_ok();
    assert_eq!(row_names(&response.text()), vec!["alice"]);
}

#[tokio::test]
async fn both_searches_must_match() {
    let server = server_with_users(vec![
        user(1, "Ann", "ann@corp.io"),
        user(2, "Anna", "anna@home.net"),
        user(3, "Ben", "ben@corp.io"),
    ]);

    let response = server
        .get("/")
        .add_query_param("name", "ann")
        .add_query_param("email", "CORP")
        .await;
    assert_eq!(row_names(&response.text()), vec!["Ann"]);
}

#[tokio::test]
async fn clicking_headers_follows_sort_transitions() {
    let server = server_with_users(bob_and_alice());

    // First click on Name: ascending, raw code-point order puts "Bob" first.
    let first = server.get("/?sort=name&dir=asc").await.text();
    assert_eq!(row_names(&first), vec!["Bob", "alice"]);
    assert!(first.contains(r#"Name<span class="sort-icon">▲</span>"#));
    // The Name header now links to the descending view.
    assert!(first.contains(r#"href="/?sort=name&amp;dir=desc""#));

    let second = server.get("/?sort=name&dir=desc").await.text();
    assert_eq!(row_names(&second), vec!["alice", "Bob"]);
    assert!(second.contains(r#"Name<span class="sort-icon">▼</span>"#));
    // Switching to another column starts ascending.
    assert!(second.contains(r#"href="/?sort=email&amp;dir=asc""#));
}

#[tokio::test]
async fn equal_sort_keys_keep_source_order() {
    let server = server_with_users(vec![
        user(3, "Cara", "same@x.com"),
        user(1, "Abe", "same@x.com"),
        user(2, "Bea", "same@x.com"),
    ]);

    let asc = server.get("/?sort=email&dir=asc").await.text();
    assert_eq!(row_names(&asc), vec!["Cara", "Abe", "Bea"]);

    let desc = server.get("/?sort=email&dir=desc").await.text();
    assert_eq!(row_names(&desc), vec!["Cara", "Abe", "Bea"]);
}

#[tokio::test]
async fn unknown_search_field_is_rejected() {
    let server = server_with_users(bob_and_alice());

    let response = server.get("/").add_query_param("phone", "555").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_text("unknown search field: phone");
}

#[tokio::test]
async fn unknown_sort_column_is_rejected() {
    let server = server_with_users(bob_and_alice());

    let response = server.get("/?sort=company").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_text("unknown column: company");
}

#[tokio::test]
async fn page_is_served_before_users_load() {
    let server = server_with_store(UserStore::new());

    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<tbody></tbody>"));
    assert!(html.contains(r#"placeholder="Search by Name""#));
}

#[tokio::test]
async fn loaded_users_from_upstream_are_rendered() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 2, "name": "alice", "email": "a@x.com", "username": "al",
             "phone": "1", "website": "alice.dev"},
            {"id": 1, "name": "Bob", "email": "b@x.com", "username": "bob",
             "phone": "2", "website": "bob.dev"}
        ])))
        .expect(1)
        .mount(&upstream)
        .await;

    let store = UserStore::new();
    store
        .spawn_initial_load(UsersClient::new(BusinessConfig::new(upstream.uri())))
        .await
        .expect("load task should not panic");

    let server = server_with_store(store);
    assert_eq!(row_names(&server.get("/").await.text()), vec!["Bob", "alice"]);
    // Rendering again does not hit upstream a second time.
    assert_eq!(row_names(&server.get("/?dir=desc").await.text()), vec!["alice", "Bob"]);
}

#[tokio::test]
async fn failed_upstream_leaves_table_empty() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&upstream)
        .await;

    let store = UserStore::new();
    store
        .spawn_initial_load(UsersClient::new(BusinessConfig::new(upstream.uri())))
        .await
        .expect("load task should not panic");

    let response = server_with_store(store).get("/").await;
    response.assert_status_ok();
    assert!(row_names(&response.text()).is_empty());
}

#![allow(dead_code)]

//! Shared test utilities for integration tests.

use axum_test::TestServer;
use roster_business::{User, UserId, UserStore};
use roster_services::{config::Config, routes};

/// Builds a user with derived username, phone and website.
pub fn user(id: i64, name: &str, email: &str) -> User {
    User {
        id: UserId::Number(id),
        name: name.to_owned(),
        email: email.to_owned(),
        username: name.to_lowercase(),
        phone: format!("555-010{id}"),
        website: format!("{}.example", name.to_lowercase()),
    }
}

/// Bob (id 1) and alice (id 2), in that source order.
pub fn bob_and_alice() -> Vec<User> {
    vec![user(1, "Bob", "b@x.com"), user(2, "alice", "a@x.com")]
}

/// Test server over a store that already holds `users`.
pub fn server_with_users(users: Vec<User>) -> TestServer {
    server_with_store(UserStore::with_users(users))
}

pub fn server_with_store(store: UserStore) -> TestServer {
    TestServer::new(routes(store, Config::new_for_test())).expect("test server should start")
}

/// Names of the table body rows, in rendered order.
///
/// Relies on the name being the second cell of each row.
pub fn row_names(html: &str) -> Vec<String> {
    let Some(body) = html
        .split_once("<tbody>")
        .and_then(|(_, rest)| rest.split_once("</tbody>"))
        .map(|(body, _)| body)
    else {
        return Vec::new();
    };

    body.split("<tr>")
        .skip(1)
        .filter_map(|row| row.split("<td>").nth(2))
        .filter_map(|cell| cell.split_once("</td>").map(|(name, _)| name.to_owned()))
        .collect()
}

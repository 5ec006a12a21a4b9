//! Business layer of the roster users table.
//!
//! Owns the user record, the static column configuration, the view state
//! with its sort/search transitions, and the derivation of the visible rows.
//! Network IO is limited to [`UsersClient::list_users`], driven once by
//! [`UserStore::load_once`].

mod api;
mod column;
mod config;
mod derived_view;
mod error;
mod store;
mod user;
mod view_state;

pub use api::UsersClient;
pub use column::{COLUMNS, Column, ColumnDescriptor, DEFAULT_SORT_COLUMN, SearchField};
pub use config::BusinessConfig;
pub use derived_view::derive_view;
pub use error::{BusinessError, BusinessResult};
pub use store::{LoadOutcome, UserStore};
pub use user::{User, UserId};
pub use view_state::{SortDirection, ViewState};

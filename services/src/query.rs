//! View state carried in the page URL.
//!
//! `/?sort=name&dir=desc&name=ali&email=x.com`. Every parameter is optional.
//! Keys other than `sort` and `dir` must name a search field, so a miswired
//! search box surfaces as a `400` instead of being ignored.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_business::{BusinessError, BusinessResult, SearchField, ViewState};

/// Raw `key=value` pairs in the order they appear in the query string.
pub type QueryPairs = Vec<(String, String)>;

/// Builds the view state from decoded query pairs.
///
/// Values are parsed by the business types; the first unknown key or value
/// fails the whole request. A repeated key keeps its last value.
pub fn parse_view_state(pairs: QueryPairs) -> BusinessResult<ViewState> {
    let defaults = ViewState::default();
    let mut sort = defaults.sort_column();
    let mut dir = defaults.sort_direction();
    let mut state = defaults;

    for (key, value) in pairs {
        match key.as_str() {
            "sort" => sort = value.parse()?,
            "dir" => dir = value.parse()?,
            other => {
                let field: SearchField = other.parse()?;
                state.set_search(field, value);
            }
        }
    }

    Ok(state.sorted_by(sort, dir))
}

/// A query string the view state could not be built from.
#[derive(Debug)]
pub struct InvalidQuery(pub BusinessError);

impl From<BusinessError> for InvalidQuery {
    fn from(err: BusinessError) -> Self {
        Self(err)
    }
}

impl IntoResponse for InvalidQuery {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}

/// Encodes `state` as a query string, without the leading `?`.
///
/// Empty search strings are left out.
pub fn to_query_string(state: &ViewState) -> String {
    let mut query = format!(
        "sort={}&dir={}",
        state.sort_column().key(),
        state.sort_direction().as_str()
    );
    for field in [SearchField::Name, SearchField::Email] {
        let value = state.search(field);
        if !value.is_empty() {
            query.push('&');
            query.push_str(field.key());
            query.push('=');
            query.push_str(&urlencoding::encode(value));
        }
    }
    query
}

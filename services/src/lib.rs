use crate::config::Config;
use crate::page::UsersPage;
use crate::query::{InvalidQuery, QueryPairs, parse_view_state};
use axum::{
    Router,
    extract::{Extension, Query, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse},
    routing::{any, get},
};
use roster_business::UserStore;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

pub mod config;
pub mod page;
pub mod query;
pub mod telemetry;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
}

/// Package version plus the commit it was built from.
pub fn service_version() -> String {
    format!("{}+{}", env!("CARGO_PKG_VERSION"), env!("BUILD_COMMIT"))
}

/// Creates the service router over a user store.
///
/// The store may still be empty; the page renders whatever has been loaded.
pub fn routes(store: UserStore, config: Config) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/", get(users_page))
        .route("/is-health", get(health_check))
        .fallback(any(catch_all))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    http_request.method = ?request.method(),
                    http_request.uri = ?request.uri(),
                    http_request.version = ?request.version(),
                    http_request.user_agent = ?request.headers().get(axum::http::header::USER_AGENT),
                )
            }),
        )
        .layer(Extension(config))
        .with_state(state)
}

async fn users_page(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Html<String>, InvalidQuery> {
    let view = parse_view_state(pairs)
        .inspect_err(|e| warn!("Rejecting users page query: {e}"))?;
    let rows = state.store.derived(&view).await;
    debug!(
        rows = rows.len(),
        sort = %view.sort_column(),
        dir = view.sort_direction().as_str(),
        "Rendering users page"
    );
    Ok(Html(UsersPage::new(&rows, &view).to_string()))
}

async fn health_check(Extension(config): Extension<Config>) -> impl IntoResponse {
    let mut response = (StatusCode::OK, "OK").into_response();

    if let Ok(env_value) = HeaderValue::from_str(&config.environment().to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-service-env"), env_value);
    }
    if let Ok(version_value) = HeaderValue::from_str(&service_version()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-service-version"), version_value);
    }

    response
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}

//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use mergington_app::ports::ActivityRepository;

use crate::state::AppState;

/// Path of the landing page inside the static mount.
pub const LANDING_PAGE: &str = "/static/index.html";

/// Build the top-level axum [`Router`].
///
/// Merges the activities API at the root, mounts `static_dir` under
/// `/static`, and redirects `/` to the landing page.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>, static_dir: impl AsRef<Path>) -> Router
where
    R: ActivityRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(landing_redirect))
        .route("/health", get(health_check))
        .merge(crate::api::routes::<R>())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn landing_redirect() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

async fn health_check() -> &'static str {
    "OK"
}

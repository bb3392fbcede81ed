//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod activities;

use axum::Router;
use axum::routing::{get, post};

use mergington_app::ports::ActivityRepository;

use crate::state::AppState;

/// Build the activities sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ActivityRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/activities", get(activities::list::<R>))
        .route(
            "/activities/{activity_name}/signup",
            post(activities::signup::<R>).delete(activities::unregister::<R>),
        )
}

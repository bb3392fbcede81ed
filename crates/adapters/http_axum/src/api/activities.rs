//! JSON REST handlers for activities and signups.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use mergington_app::ports::ActivityRepository;
use mergington_domain::activity::Activity;
use mergington_domain::email::Email;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for signup and unregister.
#[derive(Deserialize)]
pub struct SignupParams {
    pub email: String,
}

/// Activities keyed by name, serialized as a JSON object in display order.
pub struct ActivityDirectory(pub Vec<Activity>);

#[derive(Serialize)]
struct ActivityDetails<'a> {
    description: &'a str,
    schedule: &'a str,
    max_participants: u32,
    participants: &'a [Email],
}

impl Serialize for ActivityDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(
                &activity.name,
                &ActivityDetails {
                    description: &activity.description,
                    schedule: &activity.schedule,
                    max_participants: activity.max_participants,
                    participants: &activity.participants,
                },
            )?;
        }
        map.end()
    }
}

/// Confirmation body for successful mutations.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ActivityDirectory>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the signup endpoint.
pub enum SignupResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for SignupResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the unregister endpoint.
pub enum UnregisterResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for UnregisterResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /activities`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: ActivityRepository + Send + Sync + 'static,
{
    let activities = state.activity_service.list_activities().await?;
    Ok(ListResponse::Ok(Json(ActivityDirectory(activities))))
}

/// `POST /activities/{activity_name}/signup?email=…`
pub async fn signup<R>(
    State(state): State<AppState<R>>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<SignupResponse, ApiError>
where
    R: ActivityRepository + Send + Sync + 'static,
{
    let enrollment = state
        .activity_service
        .enroll(&activity_name, Email::from(params.email))
        .await?;
    Ok(SignupResponse::Ok(Json(MessageBody {
        message: format!(
            "Signed up {} for {}",
            enrollment.email, enrollment.activity
        ),
    })))
}

/// `DELETE /activities/{activity_name}/signup?email=…`
pub async fn unregister<R>(
    State(state): State<AppState<R>>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<UnregisterResponse, ApiError>
where
    R: ActivityRepository + Send + Sync + 'static,
{
    let enrollment = state
        .activity_service
        .unenroll(&activity_name, Email::from(params.email))
        .await?;
    Ok(UnregisterResponse::Ok(Json(MessageBody {
        message: format!(
            "Unregistered {} from {}",
            enrollment.email, enrollment.activity
        ),
    })))
}

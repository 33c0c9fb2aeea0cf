//! Notification record endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::notification::{
    CreateNotificationRequest, CreateNotificationResponse, GetNotificationsResponse,
};
use crate::server::AppState;

/// Query parameters for listing a user's notifications.
#[derive(Debug, Deserialize)]
pub struct ListNotificationsParams {
    /// Partition key of the records to fetch
    pub user_id: String,
}

/// GET /notifications - list all stored records for a user.
///
/// Items come back in storage form, oldest first. An empty `user_id`
/// is passed through and yields an empty list.
#[tracing::instrument(
    name = "http.get_notifications",
    skip(state, params),
    fields(user_id = %params.user_id)
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    Query(params): Query<ListNotificationsParams>,
) -> Result<Json<GetNotificationsResponse>> {
    let notifications = state.notifications.get_notifications(&params.user_id).await?;
    Ok(Json(GetNotificationsResponse { notifications }))
}

/// POST /notification - record a new notification for a user.
///
/// Returns 202: the record is stored here, delivery happens downstream.
#[tracing::instrument(
    name = "http.create_notification",
    skip(state, request),
    fields(user_id = %request.user_id, category = %request.category)
)]
pub async fn create_notification(
    State(state): State<AppState>,
    Json(request): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<CreateNotificationResponse>)> {
    if request.user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id must not be empty".to_string()));
    }

    let response = state.notifications.create_notification(request).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

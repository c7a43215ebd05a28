use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::database::models::{NewUser, User};
use crate::error::ApiError;
use crate::AppState;

/// POST /users - register a new user.
///
/// Registration is deduplicated on email: an existing account is never
/// overwritten, the second attempt gets a conflict.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    if state.users.find_by_email(&input.email).await?.is_some() {
        tracing::debug!(email = %input.email, "Registration rejected: email already taken");
        return Err(ApiError::conflict("user already exists"));
    }

    let user = state.users.insert(User::new(input)).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /user/:email - look up a user by email; `null` when absent
pub async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Option<User>>, ApiError> {
    let user = state.users.find_by_email(&email).await?;
    Ok(Json(user))
}

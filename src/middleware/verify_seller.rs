use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::auth::AuthUser;
use crate::error::ApiError;
use crate::AppState;

/// Authorization middleware gating product creation on the seller role.
///
/// Second stage of the write-path pipeline: requires an `AuthUser` injected
/// by `jwt_auth_middleware`, then checks the stored role for that email.
/// The JWT proves identity only; the role is always read from the store so
/// a role change takes effect without reissuing tokens.
pub async fn verify_seller_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("Authentication required before seller check"))?;

    let user = state.users.find_by_email(&auth_user.email).await?;

    match user {
        Some(user) if user.is_seller() => Ok(next.run(request).await),
        Some(user) => {
            tracing::warn!(
                email = %user.email,
                role = user.role.as_deref().unwrap_or("none"),
                "Seller check failed: insufficient role"
            );
            Err(ApiError::forbidden("Forbidden access"))
        }
        None => {
            tracing::warn!(email = %auth_user.email, "Seller check failed: unknown user");
            Err(ApiError::forbidden("Forbidden access"))
        }
    }
}

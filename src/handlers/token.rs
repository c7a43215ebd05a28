use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::{generate_jwt, Claims};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /authentication - issue a signed bearer token for the given email.
///
/// The token asserts identity only; authorization is decided per request
/// against the stored role.
pub async fn authentication(
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = generate_jwt(Claims::new(request.email))?;
    Ok(Json(TokenResponse { token }))
}

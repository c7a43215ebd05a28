pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use state::AppState;

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router.
///
/// The product-creation route sits behind the authenticate/authorize
/// pipeline; everything else is public.
pub fn app(state: AppState) -> Router {
    let seller_routes = Router::new()
        .route("/add-products", post(handlers::products::add_product))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::verify_seller_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::jwt_auth_middleware));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Users
        .route("/users", post(handlers::users::create_user))
        .route("/user/:email", get(handlers::users::get_user))
        // Products
        .route("/all-products", get(handlers::products::all_products))
        // Token issuance
        .route("/authentication", post(handlers::token::authentication))
        // Seller-gated writes
        .merge(seller_routes)
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    match config::config().security.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!("Invalid CORS origin in config, falling back to permissive");
            CorsLayer::permissive()
        }
    }
}

async fn root() -> &'static str {
    "Gadget Shop server is running"
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match database::manager::health_check(&state.db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}

pub mod auth;
pub mod verify_seller;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use verify_seller::verify_seller_middleware;

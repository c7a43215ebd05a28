pub mod products;
pub mod token;
pub mod users;

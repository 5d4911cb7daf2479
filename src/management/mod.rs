mod auth;

pub use auth::TokenStore;

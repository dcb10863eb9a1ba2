pub mod auth_error;
pub mod bearer_auth;

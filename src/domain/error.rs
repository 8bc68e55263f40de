// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Not logged in. Run `dashpad login` first")]
    NotLoggedIn,
    #[error("Username and password must not be empty")]
    InvalidCredentials,
    #[error("{0}")]
    FetchFailed(String),
    #[error("User not found: {0}")]
    UserNotFound(i64),
    #[error("Unable to determine location")]
    LocationUnavailable,
    #[error("Storage error: {0}")]
    Store(String),
}

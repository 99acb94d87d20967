use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum PortalError {
    /// Email/password pair matched no user. Deliberately carries no hint of
    /// which field was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Email is already registered
    #[error("Email {0} already registered")]
    DuplicateEmail(String),

    /// One or more required form fields were empty or unselected
    #[error("Missing required fields: {0:?}")]
    ValidationFailed(Vec<String>),

    /// Writing a collection to the backing store failed
    #[error("Storage error: {0}")]
    Storage(String),
}

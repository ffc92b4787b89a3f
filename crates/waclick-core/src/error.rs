use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("phone number is required")]
    EmptyPhoneNumber,
    #[error("invalid phone policy: {0}")]
    InvalidPhonePolicy(String),
    #[error("invalid percent-encoded message")]
    InvalidEncoding,
}

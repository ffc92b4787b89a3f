use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error("command failed: {0}")]
    Command(String),
    #[error("qr encoding failed: {0}")]
    Qr(String),
}

pub type Result<T> = std::result::Result<T, PlatformError>;

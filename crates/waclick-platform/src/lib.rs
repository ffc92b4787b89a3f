pub mod clipboard;
pub mod error;
pub mod opener;
pub mod qr;

pub use error::{PlatformError, Result};

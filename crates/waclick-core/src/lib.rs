pub mod domain;
pub mod dto;
pub mod error;
pub mod form;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use form::{FormState, Notification, NotificationKind, Timings};

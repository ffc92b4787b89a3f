use serde::Serialize;

use crate::domain::{GeneratedLink, NormalizedPhone};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDto {
    pub phone: String,
    pub message: Option<String>,
    pub url: String,
}

impl From<&GeneratedLink> for LinkDto {
    fn from(link: &GeneratedLink) -> Self {
        let message = if link.message().is_empty() {
            None
        } else {
            Some(link.message().to_string())
        };
        Self {
            phone: link.phone().as_str().to_string(),
            message,
            url: link.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedPhoneDto {
    pub input: String,
    pub phone: String,
}

impl NormalizedPhoneDto {
    pub fn new(input: &str, phone: &NormalizedPhone) -> Self {
        Self {
            input: input.to_string(),
            phone: phone.as_str().to_string(),
        }
    }
}

use serde::Serialize;

use crate::domain::link::GeneratedLink;

pub const SHARE_TITLE: &str = "WhatsApp Link";

const SHARE_TEXT_PREFIX: &str = "WhatsApp link: ";

/// Payload handed to a native share target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    pub fn for_link(link: &GeneratedLink) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: format!("{SHARE_TEXT_PREFIX}{}", link.message()),
            url: link.as_str().to_string(),
        }
    }
}

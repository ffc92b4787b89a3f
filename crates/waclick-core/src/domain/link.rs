use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::domain::phone::NormalizedPhone;
use crate::error::CoreError;

pub const WA_ME_BASE: &str = "https://wa.me/";

const TEXT_PARAM: &str = "?text=";

/// Characters left unescaped by URI component encoding.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A `https://wa.me/<digits>[?text=<message>]` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedLink {
    phone: NormalizedPhone,
    message: String,
    url: String,
}

impl GeneratedLink {
    pub fn phone(&self) -> &NormalizedPhone {
        &self.phone
    }

    /// The message as typed, before encoding.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Decodes the `text` query parameter back out of the URL.
    pub fn message_param(&self) -> Option<Result<String, CoreError>> {
        self.url
            .split_once(TEXT_PARAM)
            .map(|(_, encoded)| decode_message(encoded))
    }

    pub fn into_string(self) -> String {
        self.url
    }
}

impl fmt::Display for GeneratedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for GeneratedLink {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

pub fn encode_message(message: &str) -> String {
    utf8_percent_encode(message, URI_COMPONENT).to_string()
}

pub fn decode_message(encoded: &str) -> Result<String, CoreError> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| CoreError::InvalidEncoding)
}

pub fn build_link(phone: &NormalizedPhone, message: &str) -> GeneratedLink {
    let encoded = encode_message(message);
    let mut url = format!("{WA_ME_BASE}{phone}");
    if !encoded.is_empty() {
        url.push_str(TEXT_PARAM);
        url.push_str(&encoded);
    }
    GeneratedLink {
        phone: phone.clone(),
        message: message.to_string(),
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::{build_link, decode_message, encode_message};
    use crate::domain::phone::normalize_phone;
    use crate::error::CoreError;

    fn phone() -> crate::domain::phone::NormalizedPhone {
        normalize_phone("972501234567").unwrap()
    }

    #[test]
    fn build_link_appends_encoded_message() {
        let link = build_link(&phone(), "Hello there");
        assert_eq!(
            link.as_str(),
            "https://wa.me/972501234567?text=Hello%20there"
        );
    }

    #[test]
    fn build_link_omits_query_for_empty_message() {
        let link = build_link(&phone(), "");
        assert_eq!(link.as_str(), "https://wa.me/972501234567");
        assert!(link.message_param().is_none());
    }

    #[test]
    fn build_link_keeps_whitespace_only_message() {
        let link = build_link(&phone(), " ");
        assert_eq!(link.as_str(), "https://wa.me/972501234567?text=%20");
    }

    #[test]
    fn encode_message_matches_uri_component_rules() {
        assert_eq!(encode_message(""), "");
        assert_eq!(encode_message("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_message("a&b=c?d#e/f"), "a%26b%3Dc%3Fd%23e%2Ff");
        assert_eq!(encode_message("100% + 1"), "100%25%20%2B%201");
        assert_eq!(encode_message("line\nbreak"), "line%0Abreak");
    }

    #[test]
    fn encode_message_escapes_utf8_bytes() {
        assert_eq!(encode_message("שלום"), "%D7%A9%D7%9C%D7%95%D7%9D");
        assert_eq!(encode_message("😀"), "%F0%9F%98%80");
    }

    #[test]
    fn distinct_messages_produce_distinct_links() {
        let phone = phone();
        let messages = ["a", "b", "a b", "a+b", "a%20b", "A", "a ", "שלום"];
        let mut urls: Vec<String> = messages
            .iter()
            .map(|message| build_link(&phone, message).into_string())
            .collect();
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), messages.len());
    }

    #[test]
    fn text_param_round_trips_original_message() {
        let phone = phone();
        for message in [
            "Hello there",
            "?text=nested&x=1",
            "100% sure",
            "multi\nline\tmessage",
            "שלום, מה נשמע?",
            "emoji 😀 and symbols #/@:",
        ] {
            let link = build_link(&phone, message);
            let decoded = link.message_param().expect("text param").expect("decode");
            assert_eq!(decoded, message);
            assert_eq!(link.message(), message);
        }
    }

    #[test]
    fn decode_message_rejects_invalid_utf8() {
        assert_eq!(decode_message("%FF%FE"), Err(CoreError::InvalidEncoding));
    }

    #[test]
    fn link_keeps_normalized_phone() {
        let link = build_link(&phone(), "hi");
        assert_eq!(link.phone().as_str(), "972501234567");
        assert_eq!(link.to_string(), "https://wa.me/972501234567?text=hi");
    }
}

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

pub const DEFAULT_COUNTRY_CODE: &str = "972";
pub const DEFAULT_LOCAL_LENGTH: usize = 9;

const MAX_COUNTRY_CODE_LEN: usize = 3;
const MAX_LOCAL_LENGTH: usize = 15;

/// Rules for turning a locally formatted number into an international one.
///
/// A number with a trunk prefix (`0...`) always gets `country_code` in place
/// of the `0`. A bare number gets it only when it is exactly `local_length`
/// digits long and does not already start with the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhonePolicy {
    country_code: String,
    local_length: usize,
}

impl PhonePolicy {
    pub fn new(country_code: &str, local_length: usize) -> Result<Self, CoreError> {
        let code = country_code.trim();
        if code.is_empty()
            || code.len() > MAX_COUNTRY_CODE_LEN
            || !code.chars().all(|ch| ch.is_ascii_digit())
        {
            return Err(CoreError::InvalidPhonePolicy(format!(
                "country code must be 1-{MAX_COUNTRY_CODE_LEN} digits, got {country_code:?}"
            )));
        }
        if code.starts_with('0') {
            return Err(CoreError::InvalidPhonePolicy(format!(
                "country code cannot start with 0, got {country_code:?}"
            )));
        }
        if local_length == 0 || local_length > MAX_LOCAL_LENGTH {
            return Err(CoreError::InvalidPhonePolicy(format!(
                "local length must be 1-{MAX_LOCAL_LENGTH}, got {local_length}"
            )));
        }
        Ok(Self {
            country_code: code.to_string(),
            local_length,
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn local_length(&self) -> usize {
        self.local_length
    }
}

impl Default for PhonePolicy {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            local_length: DEFAULT_LOCAL_LENGTH,
        }
    }
}

/// Digits-only, country-code-prefixed phone number. Never empty and never
/// starts with `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn normalize_phone(value: &str) -> Result<NormalizedPhone, CoreError> {
    normalize_phone_with(value, &PhonePolicy::default())
}

pub fn normalize_phone_with(
    value: &str,
    policy: &PhonePolicy,
) -> Result<NormalizedPhone, CoreError> {
    let digits: String = value.chars().filter(|ch| ch.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(CoreError::EmptyPhoneNumber);
    }

    let normalized = if let Some(rest) = digits.strip_prefix('0') {
        format!("{}{}", policy.country_code, rest)
    } else if !digits.starts_with(policy.country_code.as_str())
        && digits.len() == policy.local_length
    {
        format!("{}{}", policy.country_code, digits)
    } else {
        digits
    };

    Ok(NormalizedPhone(normalized))
}

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use waclick_config::AppConfig;
use waclick_core::domain::PhonePolicy;

use crate::error::invalid_input;

pub mod completions;
pub mod link;
pub mod tui;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

/// Per-invocation overrides for the configured phone policy.
#[derive(Debug, Default, Args)]
pub struct PolicyArgs {
    /// Country calling code added to local numbers
    #[arg(long)]
    pub country_code: Option<String>,
    /// Length of a local number written without the trunk prefix
    #[arg(long)]
    pub local_length: Option<usize>,
}

impl PolicyArgs {
    pub fn resolve(&self, configured: &PhonePolicy) -> Result<PhonePolicy> {
        if self.country_code.is_none() && self.local_length.is_none() {
            return Ok(configured.clone());
        }
        let country_code = self
            .country_code
            .as_deref()
            .unwrap_or(configured.country_code());
        let local_length = self.local_length.unwrap_or(configured.local_length());
        PhonePolicy::new(country_code, local_length).map_err(|err| invalid_input(err.to_string()))
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::PolicyArgs;
    use waclick_core::domain::PhonePolicy;

    #[test]
    fn policy_args_default_to_configured_policy() {
        let configured = PhonePolicy::new("44", 10).unwrap();
        let resolved = PolicyArgs::default().resolve(&configured).unwrap();
        assert_eq!(resolved, configured);
    }

    #[test]
    fn policy_args_override_single_field() {
        let configured = PhonePolicy::default();
        let args = PolicyArgs {
            country_code: Some("1".to_string()),
            local_length: None,
        };
        let resolved = args.resolve(&configured).unwrap();
        assert_eq!(resolved.country_code(), "1");
        assert_eq!(resolved.local_length(), 9);
    }

    #[test]
    fn policy_args_reject_invalid_override() {
        let args = PolicyArgs {
            country_code: None,
            local_length: Some(0),
        };
        assert!(args.resolve(&PhonePolicy::default()).is_err());
    }
}

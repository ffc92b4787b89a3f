use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;
use waclick_config::ConfigError;
use waclick_core::CoreError;
use waclick_platform::PlatformError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;
pub const EXIT_UNAVAILABLE: u8 = 4;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            };
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return EXIT_INVALID_INPUT;
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(platform_err) = cause.downcast_ref::<PlatformError>() {
            return platform_exit_code(platform_err);
        }
    }
    EXIT_FAILURE
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidPhone(_)
        | ConfigError::InvalidNotificationDuration { .. }
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn platform_exit_code(err: &PlatformError) -> u8 {
    match err {
        PlatformError::Unavailable(_) => EXIT_UNAVAILABLE,
        PlatformError::Qr(_) => EXIT_INVALID_INPUT,
        PlatformError::Io(_) | PlatformError::Clipboard(_) | PlatformError::Command(_) => {
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_status_for, invalid_input};
    use anyhow::Context as _;
    use waclick_core::CoreError;
    use waclick_platform::PlatformError;

    #[test]
    fn empty_phone_maps_to_invalid_input() {
        let err = Err::<(), _>(CoreError::EmptyPhoneNumber)
            .context("build link")
            .unwrap_err();
        assert_eq!(exit_status_for(&err), 3);
    }

    #[test]
    fn unavailable_platform_maps_to_dedicated_code() {
        let err = anyhow::Error::new(PlatformError::Unavailable("clipboard".to_string()));
        assert_eq!(exit_status_for(&err), 4);
    }

    #[test]
    fn unknown_errors_map_to_failure() {
        assert_eq!(exit_status_for(&anyhow::anyhow!("boom")), 1);
        assert_eq!(exit_status_for(&invalid_input("bad")), 3);
    }
}

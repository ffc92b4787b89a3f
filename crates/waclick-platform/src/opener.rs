use std::io::ErrorKind;
use std::process::Command;

use waclick_core::domain::ShareRequest;

use crate::{PlatformError, Result};

/// Hands a generated link to something outside the process.
pub trait Sharer {
    fn share(&self, request: &ShareRequest) -> Result<()>;
}

/// Opens the link with the desktop's URL handler. Terminals have no native
/// share sheet, so this is the share target for both shells.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl Sharer for SystemOpener {
    fn share(&self, request: &ShareRequest) -> Result<()> {
        open_url(&request.url)
    }
}

pub fn open_url(url: &str) -> Result<()> {
    let mut cmd = open_command(url);
    let program = cmd.get_program().to_string_lossy().into_owned();
    let output = cmd.output().map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            PlatformError::Unavailable(format!("{program} not found"))
        } else {
            PlatformError::Io(err)
        }
    })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = if stderr.trim().is_empty() {
            format!("{program} exited with status {}", output.status)
        } else {
            stderr.trim().to_string()
        };
        return Err(PlatformError::Command(message));
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn open_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn open_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(url);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

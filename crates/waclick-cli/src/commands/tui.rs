use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

pub fn launch(config_path: Option<PathBuf>) -> Result<()> {
    let mut command = build_command(config_path);
    debug!(program = %command.get_program().to_string_lossy(), "launching tui");

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let err = command.exec();
        Err(exec_error(err))
    }

    #[cfg(not(unix))]
    {
        let status = command.status().map_err(exec_error)?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn build_command(config_path: Option<PathBuf>) -> Command {
    let binary = find_tui_binary();
    let mut command = Command::new(binary);
    if let Some(path) = config_path {
        command.arg("--config").arg(path);
    }
    command
}

fn find_tui_binary() -> PathBuf {
    let name = format!("waclick-tui{}", env::consts::EXE_SUFFIX);
    if let Ok(current) = env::current_exe() {
        if let Some(dir) = current.parent() {
            let candidate = dir.join(&name);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(name)
}

fn exec_error(err: std::io::Error) -> anyhow::Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        return anyhow!(
            "waclick-tui binary not found; build it with `cargo build -p waclick-tui` or install the package"
        );
    }
    anyhow!("launch waclick-tui failed: {}", err)
}

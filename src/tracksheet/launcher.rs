use crate::error::{Result, SheetError};
use std::path::Path;
use std::process::Command;

/// Opens a file with whatever the host considers its default handler.
pub trait Opener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opens files through the platform's own launcher.
/// - macOS: uses open
/// - Linux: uses xdg-open
/// - Windows: uses `cmd /C start`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        let command = open_command(path)?;
        run(command)
    }
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> Result<Command> {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    Ok(cmd)
}

#[cfg(target_os = "linux")]
fn open_command(path: &Path) -> Result<Command> {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    Ok(cmd)
}

#[cfg(target_os = "windows")]
fn open_command(path: &Path) -> Result<Command> {
    // `start` is a cmd builtin; the empty string is the window title.
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    Ok(cmd)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn open_command(_path: &Path) -> Result<Command> {
    Err(SheetError::Launch(
        "Opening files is not supported on this platform".to_string(),
    ))
}

fn run(mut command: Command) -> Result<()> {
    let program = command.get_program().to_string_lossy().into_owned();
    tracing::debug!(program = %program, "launching opener");

    let status = command
        .status()
        .map_err(|e| SheetError::Launch(format!("Failed to spawn {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(SheetError::Launch(format!(
            "{} exited with {}",
            program, status
        )))
    }
}

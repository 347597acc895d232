use crate::commands::{CmdMessage, CmdResult};
use crate::launcher::Opener;
use std::path::Path;

pub const OPENED_MESSAGE: &str = "Opened in browser. Use Cmd+P (or Ctrl+P) to save as PDF.";
pub const MANUAL_OPEN_MESSAGE: &str =
    "Could not auto-open. Please open the file manually in your browser.";

/// Tries to open the written sheet. Never fails: a launch error only changes
/// the message.
pub fn run<O: Opener>(opener: &O, path: &Path) -> CmdResult {
    let mut result = CmdResult::default();

    match opener.open(path) {
        Ok(()) => result.add_message(CmdMessage::success(OPENED_MESSAGE)),
        Err(e) => {
            tracing::warn!(error = %e, "could not open sheet");
            result.add_message(CmdMessage::info(MANUAL_OPEN_MESSAGE));
        }
    }

    result
}

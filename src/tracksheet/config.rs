use crate::output::OUTPUT_FILENAME;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_FILENAME: &str = "images.txt";

/// Where the sheet is read from and written to for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl SheetConfig {
    /// Resolves paths from the optional input argument.
    /// The output always lands next to the input.
    pub fn resolve(input: Option<PathBuf>) -> Self {
        let input = input.unwrap_or_else(default_input);
        let output = output_for(&input);
        Self { input, output }
    }
}

/// `images.txt` beside the running executable, or in the working directory
/// when the executable location is unknown.
pub fn default_input() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map(|dir| dir.join(DEFAULT_INPUT_FILENAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILENAME))
}

pub fn output_for(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) => dir.join(OUTPUT_FILENAME),
        None => PathBuf::from(OUTPUT_FILENAME),
    }
}

use crate::error::Result;
use std::fs;
use std::path::Path;

pub const OUTPUT_FILENAME: &str = "tracking-sheet-print.html";

/// Writes the rendered sheet, replacing whatever is already at `path`.
pub fn write_sheet<P: AsRef<Path>>(path: P, html: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, html)?;
    tracing::debug!(path = %path.display(), bytes = html.len(), "wrote sheet");
    Ok(())
}

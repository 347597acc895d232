use crate::error::{Result, SheetError};
use crate::model::Trainee;
use std::fs;
use std::path::Path;

pub const DELIMITER: char = '|';

/// Parses `name|photo` lines into trainees, in input order.
///
/// Blank lines, lines without a delimiter, and lines whose name is empty
/// after trimming are dropped. Only the first delimiter splits; anything
/// after it belongs to the photo URL.
pub fn parse_trainees(raw: &str) -> Vec<Trainee> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains(DELIMITER))
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Trainee> {
    let (name, photo) = line.split_once(DELIMITER).unwrap_or((line, ""));
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(Trainee::new(name, photo.trim()))
}

/// Reads and parses the input file. An input with no usable lines is an error.
pub fn load_trainees<P: AsRef<Path>>(path: P) -> Result<Vec<Trainee>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let trainees = parse_trainees(&raw);

    if trainees.is_empty() {
        return Err(SheetError::NoTrainees {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(count = trainees.len(), path = %path.display(), "parsed trainees");
    Ok(trainees)
}

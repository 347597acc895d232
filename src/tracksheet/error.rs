use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("No trainees found in {}", path.display())]
    NoTrainees { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Launch error: {0}")]
    Launch(String),
}

pub type Result<T> = std::result::Result<T, SheetError>;

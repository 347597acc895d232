use crate::commands::{CmdMessage, CmdResult};
use crate::config::SheetConfig;
use crate::error::Result;
use crate::output::write_sheet;
use crate::parse::load_trainees;
use crate::render::render_sheet;

/// Parses the input, renders the sheet and writes it next to the input.
///
/// Nothing is written when the input holds no trainees.
pub fn run(config: &SheetConfig) -> Result<CmdResult> {
    let trainees = load_trainees(&config.input)?;

    let mut result = CmdResult::default()
        .with_trainee_count(trainees.len())
        .with_output_path(config.output.clone());
    result.add_message(CmdMessage::info(format!(
        "Found {} trainees in {}",
        trainees.len(),
        config.input.display()
    )));

    let html = render_sheet(&trainees)?;
    write_sheet(&config.output, &html)?;

    result.add_message(CmdMessage::success(format!(
        "Written to {}",
        config.output.display()
    )));
    Ok(result)
}

//! # Rendering Module
//!
//! Turns the parsed trainees into the printable HTML document.
//!
//! Layout values (ordinal labels, palette colours, initials) are computed here and
//! handed to the templates as plain strings, so the templates only iterate and
//! interpolate. Field groups are fixed: they print as empty boxes and circles to be
//! marked by hand, never as form controls.
//!
//! Interpolated values are escaped for HTML text and double-quoted attributes only
//! (`&`, `<`, `>`, `"`). minijinja's stock escaper also encodes `/` and `'`, which
//! would leave photo URLs and names entity-encoded in the file.

use crate::error::Result;
use crate::model::{color_for, Trainee};
use crate::templates::{CARD_TEMPLATE, CARD_TEMPLATE_NAME, SHEET_TEMPLATE, SHEET_TEMPLATE_NAME};
use minijinja::{escape_formatter, AutoEscape, Environment, ErrorKind, Output, State, Value};
use serde::Serialize;
use std::fmt::Write as _;

pub const SHEET_TITLE: &str = "Trainee Tracking Sheet";

/// How an option is drawn on paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Box,
    Circle,
}

impl Glyph {
    fn option_class(self) -> &'static str {
        match self {
            Glyph::Box => "checkbox",
            Glyph::Circle => "circle",
        }
    }

    fn mark_class(self) -> &'static str {
        match self {
            Glyph::Box => "box",
            Glyph::Circle => "circle",
        }
    }
}

/// A labelled set of choices printed on every card.
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup {
    pub label: &'static str,
    pub glyph: Glyph,
    pub options: &'static [&'static str],
}

pub const ATTENDANCE: FieldGroup = FieldGroup {
    label: "Attendance",
    glyph: Glyph::Box,
    options: &["Present", "Absent", "Late"],
};

pub const PARTICIPATION: FieldGroup = FieldGroup {
    label: "Participation",
    glyph: Glyph::Circle,
    options: &["Low", "Medium", "High"],
};

pub const COMPREHENSION: FieldGroup = FieldGroup {
    label: "Comprehension",
    glyph: Glyph::Circle,
    options: &["Struggling", "Getting there", "Solid"],
};

/// Field groups per printed row.
pub const FIELD_ROWS: &[&[FieldGroup]] = &[&[ATTENDANCE, PARTICIPATION], &[COMPREHENSION]];

#[derive(Serialize)]
struct CardData<'a> {
    ordinal: String,
    name: &'a str,
    photo: &'a str,
    initials: String,
    color: &'static str,
}

#[derive(Serialize)]
struct FieldGroupData {
    label: &'static str,
    glyph: &'static str,
    mark: &'static str,
    options: &'static [&'static str],
}

#[derive(Serialize)]
struct SheetData<'a> {
    title: &'static str,
    cards: Vec<CardData<'a>>,
    field_rows: Vec<Vec<FieldGroupData>>,
}

impl From<&FieldGroup> for FieldGroupData {
    fn from(group: &FieldGroup) -> Self {
        Self {
            label: group.label,
            glyph: group.glyph.option_class(),
            mark: group.glyph.mark_class(),
            options: group.options,
        }
    }
}

fn card_data(position: usize, trainee: &Trainee) -> CardData<'_> {
    CardData {
        ordinal: format!("{}.", position + 1),
        name: &trainee.name,
        photo: &trainee.photo,
        initials: trainee.initials(),
        color: color_for(position),
    }
}

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_formatter(html_formatter);
    env.add_template(SHEET_TEMPLATE_NAME, SHEET_TEMPLATE)?;
    env.add_template(CARD_TEMPLATE_NAME, CARD_TEMPLATE)?;
    Ok(env)
}

/// Escapes the characters that can end an element or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn html_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> std::result::Result<(), minijinja::Error> {
    let escape = !value.is_safe() && matches!(state.auto_escape(), AutoEscape::Html);
    match value.as_str() {
        Some(text) if escape => out
            .write_str(&escape_html(text))
            .map_err(|_| minijinja::Error::new(ErrorKind::WriteFailure, "failed to write output")),
        _ => escape_formatter(out, state, value),
    }
}

/// Renders the complete tracking sheet, one card per trainee in input order.
pub fn render_sheet(trainees: &[Trainee]) -> Result<String> {
    let env = environment()?;
    let template = env.get_template(SHEET_TEMPLATE_NAME)?;

    let data = SheetData {
        title: SHEET_TITLE,
        cards: trainees
            .iter()
            .enumerate()
            .map(|(i, t)| card_data(i, t))
            .collect(),
        field_rows: FIELD_ROWS
            .iter()
            .map(|row| row.iter().map(FieldGroupData::from).collect())
            .collect(),
    };

    let html = template.render(data)?;
    tracing::debug!(cards = trainees.len(), bytes = html.len(), "rendered sheet");
    Ok(html)
}

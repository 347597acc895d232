//! # Tracksheet
//!
//! Turns a pipe-delimited list of trainees into a print-ready HTML tracking sheet.
//!
//! ```text
//! Jane Doe|https://example.com/jane.jpg
//! John Smith|https://example.com/john.jpg
//! ```
//!
//! The run is a straight line: [`parse`] the input, [`render`] one card per trainee
//! into the fixed document from [`templates`], write it with [`output`], then hand the
//! file to the platform opener through [`launcher`]. Cards are printed blank, to be
//! filled in by hand during a session.
//!
//! ## Layers
//!
//! The library never prints and never exits. [`commands`] bundles the steps into
//! `generate` and `open`, each returning a `CmdResult` carrying user-facing messages.
//! The binary decides how to show those messages and which exit code to use.
//!
//! Opening the browser is best effort: `commands::open` turns every launch failure
//! into an informational message, since the sheet is already on disk by then.
//!
//! ## Module Overview
//!
//! - [`model`]: `Trainee`, the colour palette and initials
//! - [`parse`]: input parsing and loading
//! - [`render`]: HTML rendering
//! - [`templates`]: the embedded document templates
//! - [`output`]: writing the sheet
//! - [`launcher`]: cross-platform "open with default app"
//! - [`config`]: input/output path resolution
//! - [`commands`]: the generate and open operations
//! - [`error`]: error types
//! - [`logger`]: tracing subscriber setup

pub mod commands;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logger;
pub mod model;
pub mod output;
pub mod parse;
pub mod render;
pub mod templates;

//! # Sheet Templates
//!
//! The document is rendered with minijinja from standalone template files, kept
//! outside the Rust source so the markup and print CSS stay easy to edit and diff.
//! They are compiled into the binary here; nothing is loaded at runtime.
//!
//! Template names end in `.html` so minijinja's auto-escaping applies to every
//! interpolated value (names and photo URLs come straight from the input file).
//!
//! `SHEET_TEMPLATE` is the page shell and print styling. It includes
//! `CARD_TEMPLATE` once per trainee, with `card` bound by the loop. Anything
//! beyond simple iteration (ordinals, colours, initials) is computed in Rust
//! and passed in ready to print.

pub const SHEET_TEMPLATE_NAME: &str = "sheet.html";
pub const CARD_TEMPLATE_NAME: &str = "card.html";

pub const SHEET_TEMPLATE: &str = include_str!("templates/sheet.html.j2");
pub const CARD_TEMPLATE: &str = include_str!("templates/card.html.j2");

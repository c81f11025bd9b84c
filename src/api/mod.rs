//! Command handlers for the Spellbook Archive text protocol
//!
//! Each handler runs one command against the services and renders the text of
//! its response block. Domain errors render through their `Display` impl.

pub mod catalog;
pub mod collection;
pub mod command;
pub mod help;
pub mod loans;
pub mod output;
pub mod students;

use std::fmt::Display;

use crate::models::Spellbook;

pub use command::{Command, CommonIds};
pub use output::BlockWriter;

pub const SUCCESS: &str = "Success.";

/// One item per line
fn lines<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Short forms one per line, or long forms separated by a blank line
fn render_spellbooks(books: &[&Spellbook], long: bool) -> String {
    if long {
        books
            .iter()
            .map(|b| b.long().to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    } else {
        lines(books.iter().map(|b| b.short()))
    }
}

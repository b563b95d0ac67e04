//! Console narration shared by the examples.
//!
//! Every example narrates what it does on stdout. These helpers keep the
//! look consistent: bold banners, dimmed steps, green outcomes, yellow
//! diagnostics and red failures.

use crate::catalog::{Catalog, PatternEntry};
use colored::Colorize;

/// Prints a section heading, e.g. `=== Command Pattern ===`.
pub fn banner(title: &str) {
    println!("{}", format!("=== {} ===", title).bold());
}

pub fn step(message: impl AsRef<str>) {
    println!("{}", message.as_ref().dimmed());
}

pub fn outcome(message: impl AsRef<str>) {
    println!("{}", message.as_ref().green());
}

pub fn warn(message: impl AsRef<str>) {
    println!("{}", message.as_ref().yellow());
}

pub fn failure(message: impl AsRef<str>) {
    println!("{} {}", "error:".red().bold(), message.as_ref().red());
}

/// Formats the numbered "when to use" notes of an entry.
pub fn rationale_lines(entry: &PatternEntry) -> Vec<String> {
    entry
        .when_to_use
        .iter()
        .enumerate()
        .map(|(i, note)| format!("{}. {}", i + 1, note))
        .collect()
}

/// Prints the catalogue's "when to use" notes for `key`.
pub fn when_to_use(key: &str) {
    let entry = Catalog::embedded().and_then(|catalog| catalog.get(key).cloned());
    match entry {
        Ok(entry) => {
            println!();
            println!("{}", format!("When to use {}:", entry.name).bold());
            for line in rationale_lines(&entry) {
                println!("  {}", line);
            }
        }
        Err(err) => failure(err.to_string()),
    }
}

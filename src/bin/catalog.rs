use colored::Colorize;
use design_patterns::console;
use design_patterns::{Catalog, Category, PatternEntry};
use std::env;

fn print_entry(entry: &PatternEntry) {
    console::banner(&entry.name);
    println!("{}", entry.summary);
    println!("Run with: cargo run --bin {}", entry.key.replace('-', "_"));
    console::when_to_use(&entry.key);
}

fn print_index(catalog: &Catalog) {
    println!("{}", "Design Patterns Catalogue".bold());
    println!("=========================\n");

    for category in Category::ALL {
        console::banner(&category.to_string());
        for entry in catalog.by_category(category) {
            println!("  {:<26} {}", entry.key.cyan(), entry.name);
        }
        println!();
    }

    println!("{} patterns. Pass a key to see its notes.", catalog.len());
}

fn main() {
    let catalog = match Catalog::embedded() {
        Ok(catalog) => catalog,
        Err(err) => {
            console::failure(err.to_string());
            std::process::exit(1);
        }
    };

    match env::args().nth(1) {
        Some(key) => match catalog.get(&key) {
            Ok(entry) => print_entry(entry),
            Err(err) => {
                console::failure(err.to_string());
                std::process::exit(1);
            }
        },
        None => print_index(&catalog),
    }
}

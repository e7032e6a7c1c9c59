//! `wstag --list-tags`: print the tag vocabulary.

use anyhow::Result;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use wstag_core::TagRegistry;

use super::Settings;

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "tag")]
    name: String,
    #[tabled(rename = "symbol")]
    symbol: String,
}

pub fn run(settings: &Settings) -> Result<()> {
    let registry = settings.registry();
    if registry.is_empty() {
        println!("No tags configured.");
        return Ok(());
    }
    println!("{}", "The following tags are known".bold());
    println!("{}", render(&registry));
    Ok(())
}

fn render(registry: &TagRegistry) -> Table {
    let rows: Vec<TagRow> = registry
        .entries()
        .map(|(name, symbol)| TagRow {
            name: name.to_string(),
            symbol: symbol.to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}

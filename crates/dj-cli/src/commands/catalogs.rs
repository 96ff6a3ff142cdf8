//! The `affairs` and `industries` listing subcommands.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dj_analysis::{Industry, affair::affair_book};

pub fn affairs() -> Result<(), String> {
    println!("  {}", "Affairs".bold());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Name", "Chinese", "Symbols"]);
    for config in affair_book() {
        let symbols: Vec<String> = config.primary.iter().map(|s| s.to_string()).collect();
        table.add_row(vec![
            config.affair.key().to_string(),
            config.name.to_string(),
            config.chinese.to_string(),
            symbols.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn industries() -> Result<(), String> {
    println!("  {}", "Industries".bold());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Chinese", "Priority symbols"]);
    for industry in Industry::all() {
        let symbols: Vec<String> = industry
            .priority_symbols()
            .iter()
            .map(|s| s.to_string())
            .collect();
        table.add_row(vec![
            industry.key().to_string(),
            industry.chinese().to_string(),
            symbols.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

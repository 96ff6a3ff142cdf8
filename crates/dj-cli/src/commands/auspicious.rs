//! The `auspicious` subcommand: rank times and directions for an affair.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dj_advisor::{RangeSelector, find_auspicious_times};
use dj_analysis::{Affair, Industry};

pub fn run(
    affair_arg: &str,
    range_arg: &str,
    industry_arg: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let affair = Affair::parse(affair_arg)
        .ok_or_else(|| format!("unknown affair: {affair_arg} (see `dj affairs`)"))?;
    let range = RangeSelector::parse(range_arg).map_err(|e| e.to_string())?;
    let industry = industry_arg
        .map(|s| Industry::parse(s).ok_or_else(|| format!("unknown industry: {s}")))
        .transpose()?;

    let results = find_auspicious_times(affair, range, industry, super::now());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?
        );
        return Ok(());
    }

    let config = affair.config();
    println!(
        "  {} {} ({}){}",
        "Auspicious times for".bold(),
        config.name,
        config.chinese,
        industry.map_or(String::new(), |i| format!(" in {i}")).dimmed()
    );
    println!();

    if results.is_empty() {
        println!("  No window in range clears the threshold; widen the range or wait.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Window", "Direction", "Score", "Pattern"]);
    for (rank, r) in results.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            r.window.label.clone(),
            r.direction.name().to_string(),
            r.score.to_string(),
            r.details.pattern.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{table}");
    println!();

    for (rank, r) in results.iter().enumerate() {
        println!("  [{}] {}", rank + 1, r.details.advice);
        for w in &r.details.warnings {
            println!("      {} {}", "!".yellow().bold(), w);
        }
    }
    Ok(())
}

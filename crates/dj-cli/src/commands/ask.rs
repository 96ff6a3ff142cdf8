//! The `ask` subcommand: parse a free-text question and answer it.

use chrono::NaiveDateTime;
use colored::Colorize;

use dj_advisor::RangeSelector;
use dj_chart::{Ju, Symbol};
use dj_intent::parse_intent;

pub fn run(text: &str, json: bool) -> Result<(), String> {
    let now = super::now();
    let intent = parse_intent(text, now);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&intent).map_err(|e| e.to_string())?
        );
        return Ok(());
    }

    println!(
        "  {} confidence {:.1}",
        "Parsed".bold(),
        intent.confidence
    );
    for e in &intent.explanations {
        println!("  - {e}");
    }
    println!();

    if let Some(affair) = intent.affair {
        // The question names an affair: rank windows on the target day.
        let range = intent
            .timestamp
            .map_or(RangeSelector::Today, |t: NaiveDateTime| {
                RangeSelector::Date(t.date())
            });
        return super::auspicious::run(
            affair.key(),
            &range_to_arg(range),
            intent.industry.map(|i| i.key()),
            false,
        );
    }

    if let Some(t) = intent.timestamp {
        // Only a time was recognized: show that moment's chart and how
        // the day stem fares in it.
        let ju = Ju::build(t);
        super::chart::print_header(&ju);
        super::chart::print_grid(&ju);
        if let Some(result) = dj_analysis::analyze_owning(&ju, Symbol::DayStem, intent.industry) {
            let advice = dj_advisor::advise(&result, &ju);
            println!();
            println!("  {} {}", "Advice".bold(), advice.title);
            println!("  {}", advice.content);
        }
        return Ok(());
    }

    println!("  Nothing recognizable in the question; try naming a day or an affair.");
    Ok(())
}

/// Render a range selector back into its CLI argument form.
fn range_to_arg(range: RangeSelector) -> String {
    match range {
        RangeSelector::Today => "today".to_string(),
        RangeSelector::ThreeDays => "3days".to_string(),
        RangeSelector::Week => "week".to_string(),
        RangeSelector::Date(d) => d.format("%Y-%m-%d").to_string(),
    }
}

//! The `analyze` subcommand: judge a symbol in its owning palace.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dj_advisor::advise;
use dj_analysis::{Industry, analyze_owning};
use dj_chart::{Ju, Symbol};

pub fn run(
    symbol_arg: &str,
    at: Option<&str>,
    industry_arg: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let t = super::parse_at(at)?;
    let symbol = Symbol::parse(symbol_arg)
        .ok_or_else(|| format!("unknown symbol: {symbol_arg}"))?;
    let industry = industry_arg
        .map(|s| Industry::parse(s).ok_or_else(|| format!("unknown industry: {s}")))
        .transpose()?;

    let ju = Ju::build(t);
    let Some(result) = analyze_owning(&ju, symbol, industry) else {
        println!("  {symbol} owns no palace in this chart; nothing to analyze.");
        return Ok(());
    };
    let advice = advise(&result, &ju);

    if json {
        let out = serde_json::json!({
            "analysis": result,
            "advice": advice,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?
        );
        return Ok(());
    }

    super::chart::print_header(&ju);

    println!(
        "  {} {} in palace {}",
        "Analysis".bold(),
        result.symbol,
        result.palace
    );
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Facet", "Value"]);
    table.add_row(vec![
        "Seasonal state".to_string(),
        format!("{} ({})", result.seasonal_state, result.seasonal_state.chinese()),
    ]);
    table.add_row(vec![
        "Life stage".to_string(),
        result
            .life_stage
            .map_or("-".to_string(), |s| format!("{s} ({})", s.chinese())),
    ]);
    table.add_row(vec!["Void".to_string(), result.is_void.to_string()]);
    table.add_row(vec!["In grave".to_string(), result.in_grave.to_string()]);
    table.add_row(vec!["Punished".to_string(), result.punished.to_string()]);
    table.add_row(vec![
        "Day relation".to_string(),
        format!("{:?}", result.day_relation),
    ]);
    println!("{table}");

    if !result.patterns.is_empty() {
        println!("  {}", "Patterns".bold());
        for p in &result.patterns {
            let class = match p.class {
                dj_analysis::PatternClass::Auspicious => format!("{}", p.class).green(),
                dj_analysis::PatternClass::Inauspicious => format!("{}", p.class).red(),
                _ => format!("{}", p.class).normal(),
            };
            println!("  {} {} [{}] {}", p.chinese, p.name.dimmed(), class, p.description);
        }
    }

    println!(
        "  {} state {} relation {} pattern {} industry {} deductions {} -> total {}",
        "Scores".bold(),
        result.scores.state,
        result.scores.relation,
        result.scores.pattern,
        result.scores.industry,
        result.scores.deductions,
        result.scores.total.to_string().bold()
    );
    println!();
    println!("  {} {}", "Advice".bold(), advice.title);
    println!("  {}", advice.content);
    Ok(())
}

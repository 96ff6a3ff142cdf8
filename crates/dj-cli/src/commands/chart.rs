//! The `chart` subcommand: build and display a chart.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dj_chart::{Ju, Palace, PalaceIndex};

pub fn run(at: Option<&str>, json: bool) -> Result<(), String> {
    let t = super::parse_at(at)?;
    let ju = Ju::build(t);

    if json {
        let out = serde_json::to_string_pretty(&ju).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    print_header(&ju);
    print_grid(&ju);
    Ok(())
}

/// Print the chart header: term, escapement, pillars, duty pair.
pub fn print_header(ju: &Ju) {
    println!(
        "  {} {} {}",
        "Chart".bold(),
        format!("{} ({})", ju.term.chinese(), ju.term).cyan(),
        format!(
            "{} dun {} ju, {} yuan",
            ju.polarity, ju.configuration, ju.yuan
        )
        .dimmed()
    );
    println!("  Pillars: {}", ju.pillars);
    println!(
        "  Duty star {} ({}), duty door {} ({})",
        ju.duty_star.chinese(),
        ju.duty_star,
        ju.duty_door.chinese(),
        ju.duty_door
    );
    println!();
}

/// Render one palace cell.
fn cell(palace: &Palace) -> String {
    let direction = palace
        .index
        .direction()
        .map_or("centre".to_string(), |d| d.name().to_string());
    let mut flags = String::new();
    if palace.is_void {
        flags.push_str(" 空");
    }
    if palace.is_horse {
        flags.push_str(" 马");
    }
    format!(
        "{}{} {}\n{} {}/{}\n{} {}{}",
        palace.index.chinese(),
        palace.index.get(),
        direction,
        palace.star.chinese(),
        palace.heaven_stem.chinese(),
        palace.earth_stem.chinese(),
        palace.door.chinese(),
        palace.deity.chinese(),
        flags
    )
}

/// Print the 3x3 palace grid in the traditional layout: south at the top.
pub fn print_grid(ju: &Ju) {
    let layout: [[u8; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for row in layout {
        let cells: Vec<String> = row
            .iter()
            .filter_map(|i| PalaceIndex::new(*i))
            .map(|i| cell(ju.palace(i)))
            .collect();
        table.add_row(cells);
    }
    println!("{table}");
}

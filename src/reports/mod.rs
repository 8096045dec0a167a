use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use courtside::roster::Roster;
use courtside::selection::Side;
use courtside::tactic::TacticReport;

fn grade_color(grade: f64) -> Color {
    if grade > 0.0 {
        Color::Green
    } else if grade < 0.0 {
        Color::Red
    } else {
        Color::Reset
    }
}

pub fn print_roster(side: Side, roster: &Roster) {
    println!("\nSelect Player ({})", side);
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Height"),
        Cell::new("Weight"),
        Cell::new("BMI"),
        Cell::new("Eff").fg(Color::Cyan),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for p in roster.players() {
        table.add_row(vec![
            Cell::new(&p.name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.0}", p.biometrics.height_cm)),
            Cell::new(format!("{:.1}", p.biometrics.weight_kg)),
            Cell::new(format!("{:.2}", p.bmi())),
            Cell::new(format!("{:.1}", p.efficiency())).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}

pub fn print_tactic_report(report: &TacticReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Pos").add_attribute(Attribute::Bold),
        Cell::new(Side::Ours.to_string()),
        Cell::new("Eff"),
        Cell::new("BMI"),
        Cell::new(Side::Opponent.to_string()),
        Cell::new("Eff"),
        Cell::new("BMI"),
        Cell::new("Grade").add_attribute(Attribute::Bold),
    ]);

    for i in [2, 3, 5, 6, 7] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for m in &report.matchups {
        table.add_row(vec![
            Cell::new(m.position.to_string()).add_attribute(Attribute::Bold),
            Cell::new(&m.ours),
            Cell::new(format!("{:.1}", m.our_efficiency)),
            Cell::new(format!("{:.2}", m.our_bmi)),
            Cell::new(&m.theirs),
            Cell::new(format!("{:.1}", m.their_efficiency)),
            Cell::new(format!("{:.2}", m.their_bmi)),
            Cell::new(format!("{:+.4}", m.grade)).fg(grade_color(m.grade)),
        ]);
    }
    println!("\n{}", table);

    println!("Final grade: {:.4}", report.final_grade);
    println!("Bucket: {}", report.bucket);
    match report.images() {
        Ok(images) => println!(
            "Tactic: {} + {}",
            images.offense_file(),
            images.defense_file()
        ),
        Err(e) => println!("Tactic: {}", e),
    }
}

pub fn print_audit(side: Side, audit: &[(String, usize)]) {
    println!("\n{}", side);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Rows"),
        Cell::new("Status"),
    ]);

    for (name, rows) in audit {
        let status = if *rows == 1 {
            Cell::new("ok").fg(Color::Green)
        } else {
            Cell::new("MISMATCH").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(rows).set_alignment(CellAlignment::Right),
            status,
        ]);
    }
    println!("{}", table);
}

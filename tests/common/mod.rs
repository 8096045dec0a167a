#![allow(dead_code)]

use courtside::grader::BOX_SCORE_LEN;
use courtside::roster::{Biometrics, PlayerRecord};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const HEADER: &str =
    "Name, Height, Weight, PTS, FGA, FGM, 3PA, 3PM, FTA, FTM, AST, REB, STL, BLK, TOV";

/// Box score whose efficiency equals `eff` (points only).
pub fn points_only(eff: f64) -> [f64; BOX_SCORE_LEN] {
    let mut stats = [0.0; BOX_SCORE_LEN];
    stats[0] = eff;
    stats
}

/// 200 cm / 100 kg, BMI 25.
pub fn player(name: &str, eff: f64) -> PlayerRecord {
    player_with_body(name, eff, 200.0, 100.0)
}

pub fn player_with_body(name: &str, eff: f64, height_cm: f64, weight_kg: f64) -> PlayerRecord {
    PlayerRecord::new(
        name,
        Biometrics {
            height_cm,
            weight_kg,
        },
        points_only(eff),
    )
}

pub fn row(name: &str, height_cm: f64, weight_kg: f64, stats: &[f64; BOX_SCORE_LEN]) -> String {
    let mut fields = vec![name.to_string(), height_cm.to_string(), weight_kg.to_string()];
    fields.extend(stats.iter().map(|v| v.to_string()));
    fields.join(", ")
}

pub fn write_roster(dir: &Path, file_name: &str, rows: &[String]) -> PathBuf {
    let path = dir.join(file_name);
    let mut file = File::create(&path).unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for r in rows {
        writeln!(file, "{}", r).unwrap();
    }
    path
}

/// Five players named `<prefix>1..<prefix>5`, all BMI 25 with efficiency `eff`.
pub fn uniform_rows(prefix: &str, eff: f64) -> Vec<String> {
    (1..=5)
        .map(|i| row(&format!("{}{}", prefix, i), 200.0, 100.0, &points_only(eff)))
        .collect()
}

use crate::error::{CourtsideError, CsResult};
use crate::roster::Biometrics;

/// Number of fields in a box-score row.
pub const BOX_SCORE_LEN: usize = 12;

/// Defense image numbers, read from the back with the bucket magnitude.
const DEFENSE_SEQUENCE: [i32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Points plus positive counting stats, minus missed shots and turnovers.
///
/// Field layout: `f0` points, `f1/f2`, `f3/f4`, `f5/f6` attempted/made pairs
/// for three shot types, `f7..=f10` positive counting stats, `f11` turnovers.
pub fn player_efficiency(box_score: &[f64; BOX_SCORE_LEN]) -> f64 {
    let f = box_score;
    let positive = f[0] + f[7] + f[8] + f[9] + f[10];
    let misses = (f[1] - f[2]) + (f[3] - f[4]) + (f[5] - f[6]);
    positive - (misses + f[11])
}

pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm * 0.01;
    weight_kg / (height_m * height_m)
}

/// Grade of one positional matchup, bounded to (-1, 1).
///
/// Negative values are folded with a floored modulo, so a normalized value of
/// `-1.3` becomes `-1 + 0.7`.
pub fn opponent_grade(
    eff_a: f64,
    eff_b: f64,
    biol_a: Biometrics,
    biol_b: Biometrics,
) -> CsResult<f64> {
    let physique_diff = biol_a.bmi() - biol_b.bmi();
    let raw = eff_a - eff_b + physique_diff;

    let denom = (raw + 1.0).abs();
    if denom == 0.0 {
        return Err(CourtsideError::DegenerateGrade);
    }

    let normalized = raw / denom;
    if normalized >= 0.0 {
        Ok(normalized)
    } else {
        Ok(-1.0 + normalized.rem_euclid(1.0))
    }
}

/// Mean of the per-position grades.
pub fn final_grade(grades: &[f64]) -> CsResult<f64> {
    if grades.is_empty() {
        return Err(CourtsideError::Validation(
            "Cannot average zero matchup grades".to_string(),
        ));
    }
    Ok(grades.iter().sum::<f64>() / grades.len() as f64)
}

/// `round(grade * 10)`, ties to even.
pub fn bucket(final_grade: f64) -> i32 {
    (final_grade * 10.0).round_ties_even() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TacticImages {
    pub offense: i32,
    pub defense: i32,
}

impl TacticImages {
    /// Offense is `|bucket|`; defense is `DEFENSE_SEQUENCE[-|bucket|]`.
    ///
    /// A zero bucket wraps to the front of the sequence and picks
    /// `defense-1`, not `defense-10`.
    pub fn for_bucket(bucket: i32) -> CsResult<Self> {
        let magnitude = bucket.unsigned_abs() as usize;
        let len = DEFENSE_SEQUENCE.len();

        let defense = if magnitude == 0 {
            DEFENSE_SEQUENCE[0]
        } else if magnitude <= len {
            DEFENSE_SEQUENCE[len - magnitude]
        } else {
            return Err(CourtsideError::NoDefenseImage(bucket));
        };

        Ok(Self {
            offense: magnitude as i32,
            defense,
        })
    }

    pub fn offense_file(&self) -> String {
        format!("offense-{}.jpg", self.offense)
    }

    pub fn defense_file(&self) -> String {
        format!("defense-{}.jpg", self.defense)
    }
}

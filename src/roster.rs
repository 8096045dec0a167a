use crate::error::{CourtsideError, CsResult};
use crate::grader::{self, BOX_SCORE_LEN};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::{debug, info};

/// name, height, weight, then the box score.
pub const ROW_FIELDS: usize = 3 + BOX_SCORE_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Biometrics {
    pub fn bmi(&self) -> f64 {
        grader::bmi(self.height_cm, self.weight_kg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub biometrics: Biometrics,
    pub box_score: [f64; BOX_SCORE_LEN],
    // Row as it appeared in the file, used by substring lookups.
    line: String,
}

impl PlayerRecord {
    pub fn new(name: &str, biometrics: Biometrics, box_score: [f64; BOX_SCORE_LEN]) -> Self {
        let mut fields = vec![
            name.to_string(),
            biometrics.height_cm.to_string(),
            biometrics.weight_kg.to_string(),
        ];
        fields.extend(box_score.iter().map(|v| v.to_string()));
        Self {
            name: name.to_string(),
            biometrics,
            box_score,
            line: fields.join(", "),
        }
    }

    pub fn efficiency(&self) -> f64 {
        grader::player_efficiency(&self.box_score)
    }

    pub fn bmi(&self) -> f64 {
        self.biometrics.bmi()
    }

    fn from_csv(rec: &csv::StringRecord, line: usize, raw: &str) -> CsResult<Self> {
        if rec.len() < ROW_FIELDS {
            return Err(CourtsideError::MalformedRow {
                line,
                reason: format!("expected {} fields, found {}", ROW_FIELDS, rec.len()),
            });
        }

        let name = rec[0].trim();
        if name.is_empty() {
            return Err(CourtsideError::MalformedRow {
                line,
                reason: "empty player name".to_string(),
            });
        }

        let number = |idx: usize| -> CsResult<f64> {
            let raw = rec[idx].trim();
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CourtsideError::MalformedRow {
                    line,
                    reason: format!("field {} ('{}') is not a number", idx + 1, raw),
                })
        };

        let biometrics = Biometrics {
            height_cm: number(1)?,
            weight_kg: number(2)?,
        };
        if biometrics.height_cm <= 0.0 {
            return Err(CourtsideError::MalformedRow {
                line,
                reason: format!("height must be positive, got {}", biometrics.height_cm),
            });
        }

        let mut box_score = [0.0; BOX_SCORE_LEN];
        for (i, slot) in box_score.iter_mut().enumerate() {
            *slot = number(3 + i)?;
        }

        Ok(Self {
            name: name.to_string(),
            biometrics,
            box_score,
            line: raw.to_string(),
        })
    }
}

/// How a selected name is matched against roster rows.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Display,
    EnumString,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    /// Name field must equal the selection.
    #[default]
    Exact,
    /// Selection may appear anywhere in the row text.
    Substring,
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<PlayerRecord>,
}

impl Roster {
    pub fn new(players: Vec<PlayerRecord>) -> CsResult<Self> {
        let mut seen = HashSet::new();
        for p in &players {
            if !seen.insert(p.name.as_str()) {
                return Err(CourtsideError::Validation(format!(
                    "Duplicate player '{}' in roster",
                    p.name
                )));
            }
        }
        Ok(Self { players })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> CsResult<Self> {
        let path = path.as_ref();
        info!("📂 Loading Roster: {}", path.display());
        let file = File::open(path)?;
        let roster = Self::from_reader(file)?;
        debug!("   -> {} players", roster.len());
        Ok(roster)
    }

    /// Header line is skipped; fields are split on commas and trimmed.
    /// Each record keeps its row text exactly as written in the file.
    pub fn from_reader<R: Read>(reader: R) -> CsResult<Self> {
        let text = std::io::read_to_string(reader)?;
        let rows: Vec<&str> = text.lines().collect();

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut players = Vec::new();
        for result in rdr.records() {
            let rec = result?;
            let line = rec.position().map(|p| p.line() as usize).unwrap_or(0);
            if rec.iter().all(str::is_empty) {
                continue;
            }
            let raw = line
                .checked_sub(1)
                .and_then(|i| rows.get(i))
                .copied()
                .unwrap_or_default();
            players.push(PlayerRecord::from_csv(&rec, line, raw)?);
        }

        Self::new(players)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Display names in file order.
    pub fn names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn matches(&self, name: &str, mode: LookupMode) -> Vec<&PlayerRecord> {
        self.players
            .iter()
            .filter(|p| match mode {
                LookupMode::Exact => p.name == name,
                LookupMode::Substring => p.line.contains(name),
            })
            .collect()
    }

    pub fn lookup(&self, name: &str, mode: LookupMode) -> CsResult<&PlayerRecord> {
        let found = self.matches(name, mode);
        match found.as_slice() {
            [one] => Ok(one),
            [] => Err(CourtsideError::PlayerNotFound(name.to_string())),
            many => Err(CourtsideError::AmbiguousPlayer {
                name: name.to_string(),
                matches: many.len(),
            }),
        }
    }

    /// Rows matched by each listed name.
    pub fn audit(&self, mode: LookupMode) -> Vec<(String, usize)> {
        self.players
            .iter()
            .map(|p| (p.name.clone(), self.matches(&p.name, mode).len()))
            .collect()
    }
}

use crate::error::{CourtsideError, CsResult};
use crate::grader::{self, TacticImages};
use crate::roster::{LookupMode, PlayerRecord, Roster};
use crate::selection::{Position, RosterSelector, Side};
use strum::IntoEnumIterator;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub position: Position,
    pub ours: String,
    pub theirs: String,
    pub our_efficiency: f64,
    pub their_efficiency: f64,
    pub our_bmi: f64,
    pub their_bmi: f64,
    pub grade: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TacticReport {
    pub matchups: Vec<Matchup>,
    pub final_grade: f64,
    pub bucket: i32,
}

impl TacticReport {
    /// Image pair for the bucket. Fails for a bucket of ±10.
    pub fn images(&self) -> CsResult<TacticImages> {
        TacticImages::for_bucket(self.bucket)
    }
}

/// Resolves a side's selected names to roster rows, in position order.
pub fn resolve_lineup<'r>(
    selector: &RosterSelector,
    side: Side,
    roster: &'r Roster,
    mode: LookupMode,
) -> CsResult<Vec<&'r PlayerRecord>> {
    let names = selector.get_selected(side);
    if names.len() != Position::COUNT {
        return Err(CourtsideError::IncompleteLineup {
            side,
            selected: names.len(),
        });
    }

    names
        .iter()
        .map(|name| {
            let found = roster.lookup(name, mode);
            if let Err(CourtsideError::AmbiguousPlayer { matches, .. }) = &found {
                warn!("'{}' matched {} rows on {}", name, matches, side);
            }
            found
        })
        .collect()
}

/// Grades position i of `ours` against position i of `theirs`.
pub fn evaluate(ours: &[&PlayerRecord], theirs: &[&PlayerRecord]) -> CsResult<TacticReport> {
    for (side, lineup) in [(Side::Ours, ours), (Side::Opponent, theirs)] {
        if lineup.len() != Position::COUNT {
            return Err(CourtsideError::IncompleteLineup {
                side,
                selected: lineup.len(),
            });
        }
    }

    let mut matchups = Vec::with_capacity(Position::COUNT);
    for ((position, a), b) in Position::iter().zip(ours).zip(theirs) {
        let our_efficiency = a.efficiency();
        let their_efficiency = b.efficiency();
        let grade =
            grader::opponent_grade(our_efficiency, their_efficiency, a.biometrics, b.biometrics)?;
        debug!(
            "{}: {} ({:.1}) vs {} ({:.1}) -> {:.4}",
            position, a.name, our_efficiency, b.name, their_efficiency, grade
        );
        matchups.push(Matchup {
            position,
            ours: a.name.clone(),
            theirs: b.name.clone(),
            our_efficiency,
            their_efficiency,
            our_bmi: a.bmi(),
            their_bmi: b.bmi(),
            grade,
        });
    }

    let grades: Vec<f64> = matchups.iter().map(|m| m.grade).collect();
    let final_grade = grader::final_grade(&grades)?;
    let bucket = grader::bucket(final_grade);

    Ok(TacticReport {
        matchups,
        final_grade,
        bucket,
    })
}

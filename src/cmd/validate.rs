use crate::reports;
use clap::Args;
use courtside::config::Config;
use courtside::error::{CourtsideError, CsResult};
use courtside::roster::Roster;
use courtside::selection::Side;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: Config,
}

/// Every listed name must resolve to exactly one row.
pub fn run(args: ValidateArgs, ours_roster: &Roster, theirs_roster: &Roster) -> CsResult<()> {
    let mode = args.config.lookup.lookup;
    info!("🔎 Auditing roster lookups ({} match)", mode);

    let mut failures = 0;
    for (side, roster) in [(Side::Ours, ours_roster), (Side::Opponent, theirs_roster)] {
        let audit = roster.audit(mode);
        reports::print_audit(side, &audit);
        for (name, rows) in &audit {
            if *rows != 1 {
                warn!("{}: '{}' resolves to {} rows", side, name, rows);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(CourtsideError::Validation(format!(
            "{} player name(s) do not resolve to exactly one row",
            failures
        )));
    }
    println!("\nAll names resolve to exactly one row.");
    Ok(())
}

use crate::reports;
use clap::Args;
use courtside::config::Config;
use courtside::display::ImageDisplay;
use courtside::error::CsResult;
use courtside::roster::Roster;
use courtside::selection::{parse_lineup, LogNotifier, RosterSelector, Side};
use courtside::tactic::{evaluate, resolve_lineup};
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct TacticArgs {
    #[command(flatten)]
    pub config: Config,

    /// Your lineup in PG,SG,SF,PF,C order
    #[arg(long)]
    pub ours: String,

    /// Opponent lineup in PG,SG,SF,PF,C order
    #[arg(long)]
    pub theirs: String,
}

pub fn run(args: TacticArgs, ours_roster: &Roster, theirs_roster: &Roster) -> CsResult<()> {
    let config = &args.config;
    let mut selector = RosterSelector::new();
    let mut notifier = LogNotifier;

    for (side, lineup) in [(Side::Ours, &args.ours), (Side::Opponent, &args.theirs)] {
        let names = parse_lineup(lineup)?;
        for (binding, name) in RosterSelector::bindings(side).zip(&names) {
            if let Err(e) = binding.write(&mut selector, name, &mut notifier) {
                debug!("{}: {}", binding.label(), e);
            }
        }
    }

    let mode = config.lookup.lookup;
    let ours = resolve_lineup(&selector, Side::Ours, ours_roster, mode)?;
    let theirs = resolve_lineup(&selector, Side::Opponent, theirs_roster, mode)?;

    info!("🏀 Grading {} matchups", ours.len());
    let report = evaluate(&ours, &theirs)?;
    reports::print_tactic_report(&report);

    if config.display.no_images {
        return Ok(());
    }

    let display = ImageDisplay::new(&config.display.image_dir, &config.display.output);
    let path = display.show(report.bucket)?;
    println!("Image: {}", path.display());
    Ok(())
}

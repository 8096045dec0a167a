use crate::reports;
use clap::Args;
use courtside::roster::Roster;
use courtside::selection::Side;

#[derive(Args, Debug, Clone)]
pub struct RosterArgs {
    /// Only print one side
    #[arg(short, long, value_enum)]
    pub side: Option<Side>,
}

pub fn run(args: RosterArgs, ours_roster: &Roster, theirs_roster: &Roster) {
    for (side, roster) in [(Side::Ours, ours_roster), (Side::Opponent, theirs_roster)] {
        if args.side.is_some_and(|s| s != side) {
            continue;
        }
        reports::print_roster(side, roster);
    }
}

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use courtside::config::{Config, DEFAULT_OURS_ROSTER, DEFAULT_THEIRS_ROSTER};
use courtside::roster::Roster;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Basketball tactic grader", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value = DEFAULT_OURS_ROSTER)]
    ours_roster: String,

    #[arg(global = true, long, default_value = DEFAULT_THEIRS_ROSTER)]
    theirs_roster: String,

    /// JSON file with lookup/display settings
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grade two lineups and compose the tactic image
    Tactic(cmd::tactic::TacticArgs),
    /// List both rosters
    Roster(cmd::roster::RosterArgs),
    /// Check that every roster name resolves to exactly one row
    Validate(cmd::validate::ValidateArgs),
}

fn load_roster(path: &str) -> Roster {
    Roster::load(path).unwrap_or_else(|e| {
        error!("❌ Failed to load roster '{}': {}", path, e);
        process::exit(1);
    })
}

fn resolve_config(cli_config: &Config, file: Option<&str>, sub_matches: &ArgMatches) -> Config {
    let Some(path) = file else {
        return cli_config.clone();
    };

    info!("⚙️  Loading Config from: {}", path);
    match Config::load_from_file(path) {
        Ok(mut file_config) => {
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let ours_roster = load_roster(&cli.ours_roster);
    let theirs_roster = load_roster(&cli.theirs_roster);
    if ours_roster.is_empty() || theirs_roster.is_empty() {
        warn!("⚠️  A roster has no players.");
    }

    let result = match cli.command {
        Commands::Tactic(mut args) => {
            if let Some(sub) = matches.subcommand_matches("tactic") {
                args.config = resolve_config(&args.config, cli.config.as_deref(), sub);
            }
            cmd::tactic::run(args, &ours_roster, &theirs_roster)
        }
        Commands::Validate(mut args) => {
            if let Some(sub) = matches.subcommand_matches("validate") {
                args.config = resolve_config(&args.config, cli.config.as_deref(), sub);
            }
            cmd::validate::run(args, &ours_roster, &theirs_roster)
        }
        Commands::Roster(args) => {
            cmd::roster::run(args, &ours_roster, &theirs_roster);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

use crate::error::{CourtsideError, CsResult};
use crate::roster::LookupMode;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_OURS_ROSTER: &str = "team-first.txt";
pub const DEFAULT_THEIRS_ROSTER: &str = "team-second.txt";

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub lookup: LookupParams,
    #[command(flatten)]
    pub display: DisplayParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LookupParams {
    /// How selected names are matched against roster rows
    #[arg(long, value_enum, default_value_t = LookupMode::Exact)]
    pub lookup: LookupMode,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayParams {
    /// Directory holding offense-<n>.jpg and defense-<n>.jpg
    #[arg(long, default_value = ".")]
    pub image_dir: String,

    /// Where the combined tactic image is written
    #[arg(short, long, default_value = "tactic.png")]
    pub output: String,

    /// Grade only, skip image composition
    #[arg(long, default_value_t = false)]
    pub no_images: bool,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            image_dir: ".".to_string(),
            output: "tactic.png".to_string(),
            no_images: false,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CourtsideError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Flags typed on the command line win over values from the file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(lookup.lookup);
        update_if_present!(display.image_dir);
        update_if_present!(display.output);
        update_if_present!(display.no_images);
    }
}

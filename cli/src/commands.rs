pub mod balls;
pub mod draws;
pub mod filter;
pub mod parse;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use sift_common::config::{Config, DEFAULT_API, DEFAULT_TIMEOUT};
use sift_core::reconcile::Action;

#[derive(Parser)]
#[command(name = "sift")]
#[command(version, about = "Derive 49-ball attributes and filter them down.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Year whose zodiac rotation applies (defaults to the current year)
    #[arg(short, long, global = true, env = "SIFT_YEAR", allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Less output: -q hides headers, -qq prints bare results
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log detail: -v debug, -vv trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print JSON instead of the colored layout
    #[arg(long, global = true)]
    pub json: bool,

    /// Seconds to wait for draw data before giving up
    #[arg(long, global = true, env = "SIFT_TIMEOUT", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Draw data endpoint
    #[arg(long, global = true, env = "SIFT_API", default_value = DEFAULT_API)]
    pub api: String,

    /// Skip the network and use the last known draw
    #[arg(long, global = true)]
    pub no_fetch: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the 49-ball table for the year, or the details of some numbers
    #[command(alias = "b")]
    Balls { numbers: Vec<u8> },
    /// Apply filter actions in order and print the survivors
    #[command(alias = "f")]
    Filter {
        /// tail:3 zodiac:蛇 half-wave:RED_odd kill:01,02 keep:0510 ball:13 mode:keep clear reset
        actions: Vec<Action>,
        /// Name the rule that removed each excluded ball
        #[arg(long)]
        explain: bool,
    },
    /// Read a manual number list the way the filter does
    #[command(alias = "p")]
    Parse { text: Vec<String> },
    /// Fetch the latest draw
    #[command(alias = "l")]
    Latest {
        /// Keep polling every SECS seconds until Ctrl-C
        #[arg(long, value_name = "SECS")]
        watch: Option<u64>,
    },
    /// Fetch recent draws, newest first
    #[command(alias = "h")]
    History,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            year: self.year.unwrap_or_else(Config::current_year),
            quiet: self.quiet,
            no_fetch: self.no_fetch,
            timeout: Duration::from_secs(self.timeout),
            api_base: self.api.clone(),
            json: self.json,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

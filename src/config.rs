use crate::prelude::*;

use anyhow::Context;
use log::LevelFilter;

/// Settings for the demo scenarios. Every flag can also come from its
/// `PUZZLES_*` environment variable.
#[derive(clap::Parser, Debug, Clone, PartialEq)]
#[command(
    name = "facelet-astar",
    about = "Compare A* heuristics on the magic truck and the Rubik's cube"
)]
pub struct Config {
    #[arg(long, env = "PUZZLES_LOG", default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,

    #[arg(long, env = "PUZZLES_TRUCK_START", default_value_t = 1)]
    pub truck_start: u64,

    #[arg(long, env = "PUZZLES_TRUCK_GOAL", default_value_t = 50)]
    pub truck_goal: u64,

    /// Quarter turns applied to a solved cube, e.g. "U R'"
    #[arg(long, env = "PUZZLES_SCRAMBLE", value_delimiter = ' ', default_values = ["U", "R"])]
    pub scramble: Vec<Move>,

    /// Expansions allowed per search, or "none"
    #[arg(
        long = "node-limit",
        env = "PUZZLES_NODE_LIMIT",
        default_value = "2000000",
        value_parser = parse_limits
    )]
    pub limits: SearchLimits,
}

impl Config {
    /// Reads the command line and environment, exiting with usage on a parse error.
    pub fn load() -> anyhow::Result<Config> {
        <Config as clap::Parser>::parse().validated()
    }

    pub fn try_load_from<I, T>(args: I) -> anyhow::Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Config as clap::Parser>::try_parse_from(args)?.validated()
    }

    fn validated(self) -> anyhow::Result<Config> {
        anyhow::ensure!(
            self.truck_start <= self.truck_goal,
            "truck start ({}) is past the goal ({})",
            self.truck_start,
            self.truck_goal
        );
        Ok(self)
    }
}

fn parse_level(value: &str) -> anyhow::Result<LevelFilter> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid log level {:?}", value))
}

fn parse_limits(value: &str) -> anyhow::Result<SearchLimits> {
    if value.trim() == "none" {
        return Ok(SearchLimits::unlimited());
    }
    let limit = value
        .trim()
        .parse()
        .with_context(|| format!("expected a number or \"none\", got {:?}", value))?;
    Ok(SearchLimits {
        node_limit: Some(limit),
    })
}

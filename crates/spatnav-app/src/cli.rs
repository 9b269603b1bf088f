//! Command-line parsing.

use std::path::PathBuf;

use anyhow::{Result, bail};
use spatnav_types::Direction;

pub const USAGE: &str = "\
usage: spatnav <command> <fixture> [args] [--config <file>] [--json]

commands:
  audit                    report navigation traps, loops and unreachable elements
  navigate <dir>...        press arrows from the fixture's focus and show each gesture
  search <id> <dir>        best candidate from element <id> towards <dir>

<dir> is one of left, up, right, down.
fixtures ending in .json are read as JSON, anything else as TOML.";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Audit,
    Navigate(Vec<Direction>),
    Search { id: String, dir: Direction },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub command: Command,
    pub fixture: PathBuf,
    pub config: Option<PathBuf>,
    pub json: bool,
}

fn direction(s: &str) -> Result<Direction> {
    match Direction::parse(&s.to_ascii_lowercase()) {
        Some(dir) => Ok(dir),
        None => bail!("unknown direction '{s}' (expected left, up, right or down)"),
    }
}

impl Args {
    /// Parse arguments, program name excluded. Flags may appear anywhere.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut positional = Vec::new();
        let mut config = None;
        let mut json = false;
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--json" => json = true,
                "--config" => match iter.next() {
                    Some(path) => config = Some(PathBuf::from(path)),
                    None => bail!("--config needs a file"),
                },
                flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let (Some(name), Some(fixture)) = (positional.next(), positional.next()) else {
            bail!("missing command or fixture");
        };
        let rest: Vec<String> = positional.collect();
        let command = match name.as_str() {
            "audit" => {
                if !rest.is_empty() {
                    bail!("audit takes no arguments");
                }
                Command::Audit
            },
            "navigate" => {
                if rest.is_empty() {
                    bail!("navigate needs at least one direction");
                }
                Command::Navigate(rest.iter().map(|s| direction(s)).collect::<Result<_>>()?)
            },
            "search" => match rest.as_slice() {
                [id, dir] => Command::Search {
                    id: id.clone(),
                    dir: direction(dir)?,
                },
                _ => bail!("search needs an element id and a direction"),
            },
            other => bail!("unknown command '{other}'"),
        };
        Ok(Self {
            command,
            fixture: PathBuf::from(fixture),
            config,
            json,
        })
    }
}

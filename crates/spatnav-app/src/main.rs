//! `spatnav` command-line entry point.
//!
//! Loads a layout fixture and either audits it for keyboard navigation
//! problems, replays arrow presses against it, or runs a single
//! directional search. Output is plain text, or JSON with `--json`.
//! `RUST_LOG=debug` traces every state the navigation passes through.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use cli::{Args, Command};
use commands::Session;

fn print<T: Serialize + std::fmt::Display>(value: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        let text = value.to_string();
        println!("{}", text.trim_end());
    }
    Ok(())
}

fn run(args: Args) -> Result<ExitCode> {
    let mut session = Session::open(&args.fixture, args.config.as_deref())?;

    match args.command {
        Command::Audit => {
            let report = session.audit()?;
            print(&report, args.json)?;
            if report.has_errors() {
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Navigate(dirs) => {
            let steps = session.navigate(&dirs);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&steps)?);
            } else {
                for step in &steps {
                    println!("{step}");
                }
            }
        },
        Command::Search { id, dir } => {
            let result = session.search(&id, dir)?;
            print(&result, args.json)?;
        },
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\n\n{}", cli::USAGE);
            return Ok(ExitCode::from(2));
        },
    };
    run(args)
}

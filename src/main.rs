use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{bail, Context, Result};
use clap::Parser;

use advent2023::{default_input, load_input, Day, ALL_SOLUTIONS};

/// Advent of Code 2023 solutions.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Day to run (1-25). Runs every day against `inputs/` when omitted.
    day: Option<usize>,
    /// Puzzle input. Defaults to `inputs/<DAY>.txt`.
    filename: Option<PathBuf>,
    /// Only run this part and print just its answer.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,
    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let Some(n) = args.day else {
        return run_all();
    };
    let day = n
        .checked_sub(1)
        .and_then(|i| ALL_SOLUTIONS.get(i))
        .with_context(|| format!("no solution for day {}", n))?;
    let input = match &args.filename {
        Some(path) => load_input(path)?,
        None => default_input(n)?,
    };

    match args.part {
        Some(p) => {
            let Some((_, part)) = day.parts().find(|&(i, _)| i == p as usize) else {
                bail!("day {} has no part {}", n, p);
            };
            println!("{}", part(&input)?);
        }
        None => {
            execute_day(n, day, &input)?;
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run_all() -> Result<()> {
    let mut total = Duration::default();
    for (i, day) in ALL_SOLUTIONS.iter().enumerate() {
        let input = match default_input(i + 1) {
            Ok(input) => input,
            Err(err) => {
                log::warn!("skipping day {}: {:#}", i + 1, err);
                continue;
            }
        };
        total += execute_day(i + 1, day, &input)?;
    }
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

fn execute_day(n: usize, day: &Day, input: &str) -> Result<Duration> {
    println!("Day {}:", n);

    let mut elapsed = Duration::default();
    for (i, part) in day.parts() {
        let start = Instant::now();
        let answer = part(input).with_context(|| format!("day {} part {}", n, i))?;
        elapsed += start.elapsed();
        println!("  Part {}: {}", i, answer);
    }
    println!("  Finished in {}", format_duration(elapsed));
    println!("---------------------");
    Ok(elapsed)
}

mod library;

mod day18;

use std::{fs, io, io::Read, num::ParseIntError, path::PathBuf, str::FromStr};

use anyhow::Context;
use log::debug;
use structopt::StructOpt;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SolutionDayError {
    #[error("Failed to parse day: {0}")]
    Parse(#[from] ParseIntError),

    #[error("{0} is not an Advent Puzzle Day; must be 1 through 25")]
    BadDay(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionDay(u8);

impl FromStr for SolutionDay {
    type Err = SolutionDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse()?;

        match value {
            1..=25 => Ok(SolutionDay(value)),
            value => Err(SolutionDayError::BadDay(value)),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum SolutionPartError {
    #[error("Failed to parse part: {0}")]
    Parse(#[from] ParseIntError),

    #[error("{0} is not an Advent Puzzle Part; must be 1 or 2")]
    BadPart(u8),
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionPart {
    part1,
    part2,
}

impl FromStr for SolutionPart {
    type Err = SolutionPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse()?;

        match value {
            1 => Ok(SolutionPart::part1),
            2 => Ok(SolutionPart::part2),
            value => Err(SolutionPartError::BadPart(value)),
        }
    }
}

/// Solutions for the Advent of Code, 2022.
#[derive(Debug, StructOpt)]
struct Args {
    /// Which day's solution are you looking for?
    #[structopt(short, long)]
    pub day: SolutionDay,

    /// Part 1 or Part 2?
    #[structopt(short, long)]
    pub part: SolutionPart,

    /// The file from which to read input. If omitted, we read from stdin.
    pub input: Option<PathBuf>,
}

macro_rules! solver_picker {
    ($day:expr, $part:expr, $input:expr; $(
        $number:literal => $Day:ident { $($Part:ident)* }
    )*) => {{
        #[allow(unreachable_patterns)]
        match ($day, $part) {
            $($(
                (SolutionDay($number), SolutionPart::$Part) => println!("{}", crate::$Day::$Part($input)?),
            )*)*
            (day, part) => anyhow::bail!("No solution code for {:?}, {:?}", day, part),
        }
    }};
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read from input file '{}'", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read input from stdin")?;
            Ok(input)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Args = Args::from_args();
    let input = read_input(args.input.as_ref())?;

    debug!(
        "solving {:?} {:?} with {} bytes of input",
        args.day,
        args.part,
        input.len()
    );

    solver_picker! (
        args.day, args.part, &input;

        18 => day18 {part1 part2}
    );

    Ok(())
}

use std::path::PathBuf;
use std::process::ExitCode;

use aoc2025::days::AVAILABLE_DAYS;
use aoc2025::runner::{run, OutputFormat, RunConfig};
use clap::Parser;

/// Solve one day of the puzzle calendar
#[derive(Parser, Debug)]
#[command(name = "aoc", version, about)]
struct Args {
    /// Day to solve
    #[arg(short, long)]
    day: u8,

    /// Only run this part (1 or 2)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Explicit input file, instead of the one derived from --input-dir
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory holding input_dayNN.txt files
    #[arg(long, default_value = "input")]
    input_dir: PathBuf,

    /// Use the worked example input_dayNN_example.txt
    #[arg(short, long)]
    example: bool,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut config = RunConfig::new(args.day)
        .with_input_dir(args.input_dir)
        .with_example(args.example)
        .with_format(if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        });
    if let Some(part) = args.part {
        config = config.with_part(part);
    }
    if let Some(input) = args.input {
        config = config.with_input(input);
    }

    let reports = match run(&config) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("Error: {e}");
            if !AVAILABLE_DAYS.contains(&args.day) {
                eprintln!("Available days: {AVAILABLE_DAYS:?}");
            }
            return ExitCode::FAILURE;
        }
    };

    match config.format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{report}");
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: cannot serialize reports: {e}");
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}

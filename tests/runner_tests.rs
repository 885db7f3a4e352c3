use std::path::PathBuf;

use aoc2025::days::FreeVariableBounds;
use aoc2025::runner::{run, run_on, OutputFormat, PartReport, RunConfig};
use aoc2025::Error;

const DAY05: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";

fn temp_input_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("aoc2025-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

// Test the configuration defaults and builders
#[test]
fn test_run_config() {
    let config = RunConfig::default();
    assert_eq!(config.input_dir, PathBuf::from("input"));
    assert_eq!(config.part, None);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.input_path(), PathBuf::from("input").join("input_day01.txt"));

    let config = RunConfig::new(7)
        .with_input_dir("data")
        .with_example(true)
        .with_part(2)
        .with_format(OutputFormat::Json);
    assert_eq!(config.input_path(), PathBuf::from("data").join("input_day07_example.txt"));
    assert_eq!(config.part, Some(2));

    let config = config.with_input("elsewhere.txt");
    assert_eq!(config.input_path(), PathBuf::from("elsewhere.txt"));
}

#[test]
fn test_run_on_loaded_input() {
    let reports = run_on(&RunConfig::new(5), DAY05).unwrap();

    let answers: Vec<(u8, i64)> = reports.iter().map(|r| (r.part, r.answer)).collect();
    assert_eq!(answers, vec![(1, 3), (2, 14)]);
    assert!(reports.iter().all(|r| r.day == 5));

    let only_second = run_on(&RunConfig::new(5).with_part(2), DAY05).unwrap();
    assert_eq!(only_second.len(), 1);
    assert_eq!(only_second[0].answer, 14);

    assert!(run_on(&RunConfig::new(5).with_part(3), DAY05).is_err());
}

// Test reading the example file from an input directory
#[test]
fn test_run_reads_example_file() {
    let dir = temp_input_dir("runner");
    std::fs::write(dir.join("input_day05_example.txt"), DAY05).unwrap();

    let config = RunConfig::new(5).with_input_dir(&dir).with_example(true);
    let reports = run(&config).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1].answer, 14);

    let missing = RunConfig::new(5).with_input_dir(&dir);
    assert!(matches!(run(&missing), Err(Error::Io { .. })));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_run_unknown_day() {
    assert!(matches!(run(&RunConfig::new(3)), Err(Error::DayNotAvailable(3))));
}

// Test the day 10 bounds reach the solver
#[test]
fn test_day10_bounds_from_config() {
    let input = "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}\n";
    let config = RunConfig::new(10)
        .with_part(2)
        .with_day10_bounds(FreeVariableBounds::default().with_two_free(0).with_many_free(0));

    // With every free variable pinned to zero the optimum is out of reach
    let default_reports = run_on(&RunConfig::new(10).with_part(2), input).unwrap();
    assert_eq!(default_reports[0].answer, 10);
    let pinned = run_on(&config, input);
    assert!(pinned.map_or(true, |reports| reports[0].answer >= 10));
}

// Test the text and JSON renderings of a report
#[test]
fn test_part_report_output() {
    let report = PartReport {
        day: 1,
        part: 2,
        answer: 6,
        elapsed_ms: 3,
    };

    assert_eq!(report.to_string(), "Result part 2 : 6 in 3ms");

    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["day"], 1);
    assert_eq!(json["part"], 2);
    assert_eq!(json["answer"], 6);
    assert_eq!(json["elapsed_ms"], 3);
}

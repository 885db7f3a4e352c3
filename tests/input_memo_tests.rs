use std::cell::Cell;
use std::path::Path;

use aoc2025::data_structures::{memoize, memoize2, MemoCache};
use aoc2025::input::{
    day_input_path, extract_int, extract_ints, parse_delimited, read_all, read_lines,
    split_by_empty_lines,
};
use aoc2025::Error;

// Test number extraction from free-form text
#[test]
fn test_extract_ints() {
    let values: Vec<i64> = extract_ints("p=0,4 v=-3,-3 and 12abc7").unwrap();
    assert_eq!(values, vec![0, 4, -3, -3, 12, 7]);

    let none: Vec<i32> = extract_ints("no numbers here").unwrap();
    assert!(none.is_empty());

    assert_eq!(extract_int::<u32>("Game 42: red").unwrap(), 42);
    assert!(matches!(extract_int::<i32>("none"), Err(Error::MalformedInput(_))));
    assert!(matches!(extract_ints::<u8>("300"), Err(Error::ParseInt(_))));
}

#[test]
fn test_parse_delimited() {
    assert_eq!(parse_delimited::<i32>("1, 2,,3 ", ",").unwrap(), vec![1, 2, 3]);
    assert_eq!(parse_delimited::<u64>("7 | 8", "|").unwrap(), vec![7, 8]);
    assert!(parse_delimited::<i32>("1,x", ",").is_err());
}

#[test]
fn test_split_by_empty_lines() {
    let groups = split_by_empty_lines("a\nb\n\n\nc\n\nd\ne\n");

    assert_eq!(groups, vec![vec!["a", "b"], vec!["c"], vec!["d", "e"]]);
    assert!(split_by_empty_lines("").is_empty());
}

// Test input file naming and reading
#[test]
fn test_input_files() {
    assert_eq!(
        day_input_path("input", 5, false),
        Path::new("input").join("input_day05.txt")
    );
    assert_eq!(
        day_input_path("data", 12, true),
        Path::new("data").join("input_day12_example.txt")
    );

    let dir = std::env::temp_dir().join(format!("aoc2025-input-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("sample.txt");
    std::fs::write(&path, "first\nsecond\n").unwrap();

    assert_eq!(read_lines(&path).unwrap(), vec!["first", "second"]);
    assert_eq!(read_all(&path).unwrap(), "first\nsecond\n");
    assert!(matches!(read_all(dir.join("missing.txt")), Err(Error::Io { .. })));

    std::fs::remove_dir_all(&dir).unwrap();
}

// Test the explicit memo table
#[test]
fn test_memo_cache() {
    let mut cache: MemoCache<u64, u64> = MemoCache::new();
    assert!(cache.is_empty());

    assert_eq!(*cache.get_or_insert_with(3, |&k| k * 10), 30);
    assert_eq!(*cache.get_or_insert_with(3, |_| unreachable!()), 30);
    cache.insert(4, 1);
    assert!(cache.contains(&4));
    assert_eq!(cache.get(&4), Some(&1));
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.get(&3).is_none());
}

// Test that the memoized wrappers compute each input once
#[test]
fn test_memoize_calls_once() {
    let calls = Cell::new(0);
    let mut square = memoize(|&n: &u64| {
        calls.set(calls.get() + 1);
        n * n
    });

    assert_eq!(square(9), 81);
    assert_eq!(square(9), 81);
    assert_eq!(square(3), 9);
    assert_eq!(calls.get(), 2);

    let mut add = memoize2(|a: &String, b: &i32| format!("{a}{b}"));
    assert_eq!(add("x".to_string(), 1), "x1");
    assert_eq!(add("x".to_string(), 1), "x1");
}

// Test a recursive solver threading the cache explicitly
#[test]
fn test_recursive_memo() {
    fn fib(n: u64, cache: &mut MemoCache<u64, u64>) -> u64 {
        if n < 2 {
            return n;
        }
        if let Some(&known) = cache.get(&n) {
            return known;
        }
        let value = fib(n - 1, cache) + fib(n - 2, cache);
        cache.insert(n, value);
        value
    }

    let mut cache = MemoCache::new();
    assert_eq!(fib(90, &mut cache), 2_880_067_194_370_816_120);
}

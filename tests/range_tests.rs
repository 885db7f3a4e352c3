use aoc2025::data_structures::RangeSplit;
use aoc2025::{Error, Range};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn range(start: i64, end: i64) -> Range {
    Range::new(start, end).unwrap()
}

fn random_ranges(rng: &mut StdRng, count: usize) -> Vec<Range> {
    (0..count)
        .map(|_| {
            let start = rng.gen_range(-50..50);
            range(start, start + rng.gen_range(0..15))
        })
        .collect()
}

// Test that overlapping ranges merge into one
#[test]
fn test_merge_overlapping() {
    let ranges = [range(1, 5), range(3, 8)];

    assert_eq!(Range::merge(&ranges), vec![range(1, 8)]);
    assert_eq!(Range::total_coverage(&ranges), 8);
}

// Test that separated ranges stay apart
#[test]
fn test_merge_disjoint() {
    let ranges = [range(10, 12), range(1, 3)];

    assert_eq!(Range::merge(&ranges), vec![range(1, 3), range(10, 12)]);
    assert_eq!(Range::total_coverage(&ranges), 6);
}

// Test that touching ranges merge but gapped ranges do not
#[test]
fn test_union_touching() {
    assert_eq!(range(1, 3).union(&range(4, 6)), Some(range(1, 6)));
    assert_eq!(range(4, 6).union(&range(1, 3)), Some(range(1, 6)));
    assert_eq!(range(1, 3).union(&range(5, 6)), None);
    assert_eq!(Range::merge(&[range(1, 3), range(4, 6)]), vec![range(1, 6)]);
}

// Test merging ranges that end at the extremes of i64
#[test]
fn test_merge_at_i64_bounds() {
    let wide = range(0, i64::MAX);
    assert_eq!(Range::merge(&[wide, range(5, 10)]), vec![wide]);
    assert_eq!(range(5, 10).union(&wide), Some(wide));
    assert_eq!(range(i64::MIN, -1).union(&wide), Some(range(i64::MIN, i64::MAX)));
    assert_eq!(range(i64::MIN, -5).union(&range(i64::MAX, i64::MAX)), None);

    assert_eq!(wide.len(), i64::MAX);
    assert_eq!(Range::total_coverage(&[wide, range(5, 10)]), i64::MAX);
    assert_eq!(Range::total_coverage(&[range(i64::MIN, i64::MAX)]), i64::MAX);
}

// Test subtracting a range from the middle
#[test]
fn test_subtract_middle() {
    assert_eq!(range(1, 10).subtract(&range(3, 5)), vec![range(1, 2), range(6, 10)]);
    assert!(range(1, 10).subtract(&range(0, 20)).is_empty());
    assert_eq!(range(1, 10).subtract(&range(8, 20)), vec![range(1, 7)]);
    assert_eq!(range(1, 10).subtract(&range(20, 30)), vec![range(1, 10)]);
}

// Test construction rejects inverted bounds
#[test]
fn test_invalid_range() {
    assert!(matches!(
        Range::new(5, 3),
        Err(Error::InvalidRange { start: 5, end: 3 })
    ));
    assert!(Range::exclusive(3, 3).is_err());
    assert_eq!(Range::exclusive(3, 6).unwrap(), range(3, 5));
    assert_eq!(Range::of_length(10, 3).unwrap(), range(10, 12));
}

// Test the basic queries
#[test]
fn test_queries() {
    let r = range(-2, 4);

    assert_eq!(r.len(), 7);
    assert!(r.contains(-2) && r.contains(4));
    assert!(!r.contains(5));
    assert!(r.contains_range(&range(0, 4)));
    assert!(!r.contains_range(&range(0, 5)));
    assert!(r.overlaps(&range(4, 9)));
    assert!(!r.overlaps(&range(5, 9)));
    assert_eq!(r.intersection(&range(3, 9)), Some(range(3, 4)));
    assert_eq!(r.intersection(&range(5, 9)), None);
    assert_eq!(r.shift(10), range(8, 14));
    assert_eq!(r.to_string(), "[-2..4]");
}

// Test splitting into inside and outside parts
#[test]
fn test_split_by() {
    let split = range(1, 10).split_by(&range(4, 6));
    assert_eq!(
        split,
        RangeSplit {
            inside: Some(range(4, 6)),
            outside: vec![range(1, 3), range(7, 10)],
        }
    );
    assert!(split.has_inside());

    let miss = range(1, 3).split_by(&range(7, 9));
    assert!(!miss.has_inside());
    assert_eq!(miss.outside, vec![range(1, 3)]);
}

// Test merge invariants on random collections
#[test]
fn test_merge_invariants_random() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let count = rng.gen_range(0..12);
        let ranges = random_ranges(&mut rng, count);
        let merged = Range::merge(&ranges);

        // Sorted, disjoint, with a gap between neighbours
        for pair in merged.windows(2) {
            assert!(pair[0].end() + 1 < pair[1].start(), "{} and {}", pair[0], pair[1]);
        }

        // Coverage matches a brute-force count and never exceeds the naive sum
        let naive: i64 = ranges.iter().map(Range::len).sum();
        let brute = (-60..80)
            .filter(|&v| ranges.iter().any(|r| r.contains(v)))
            .count() as i64;
        assert_eq!(Range::total_coverage(&ranges), brute);
        assert!(Range::total_coverage(&ranges) <= naive);

        // Idempotent
        assert_eq!(Range::merge(&merged), merged);
    }
}

// Test that subtraction and intersection partition the original range
#[test]
fn test_subtract_reconstructs_random() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let pair = random_ranges(&mut rng, 2);
        let (a, b) = (pair[0], pair[1]);

        let mut pieces = a.subtract(&b);
        pieces.extend(a.intersection(&b));

        let covered: i64 = pieces.iter().map(Range::len).sum();
        assert_eq!(covered, a.len(), "{a} - {b} loses or duplicates values");
        for v in a.start()..=a.end() {
            assert_eq!(pieces.iter().filter(|r| r.contains(v)).count(), 1);
        }
        assert!(pieces.iter().all(|r| a.contains_range(r)));
    }
}

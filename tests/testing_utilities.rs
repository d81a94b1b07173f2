use rillet::testing::*;
use rillet::*;

#[test]
fn stream_equal_accepts_matching_output() {
    assert_stream_equal(Stream::from_vec(vec![1, 2, 3]), &[1, 2, 3]);
}

#[test]
#[should_panic(expected = "Stream length mismatch")]
fn stream_equal_rejects_length_mismatch() {
    assert_stream_equal(Stream::from_vec(vec![1, 2]), &[1, 2, 3]);
}

#[test]
#[should_panic(expected = "Stream mismatch at index 1")]
fn stream_equal_rejects_content_mismatch() {
    assert_stream_equal(Stream::from_vec(vec![1, 5, 3]), &[1, 2, 3]);
}

#[test]
fn unordered_equal_counts_duplicates() {
    assert_stream_unordered_equal(Stream::from_vec(vec![2, 1, 2]), vec![1, 2, 2]);
}

#[test]
#[should_panic(expected = "ignoring order")]
fn unordered_equal_rejects_different_multiplicity() {
    assert_stream_unordered_equal(Stream::from_vec(vec![1, 1, 2]), vec![1, 2, 2]);
}

#[test]
#[should_panic(expected = "Pair mismatch")]
fn pairs_unordered_equal_rejects_wrong_value() {
    assert_pairs_unordered_equal(
        Stream::from_vec(vec![Pair::of("a", 1)]),
        vec![Pair::of("a", 2)],
    );
}

#[test]
#[should_panic(expected = "Predicate failed for element at index 2")]
fn assert_all_reports_failing_index() {
    assert_all(Stream::from_vec(vec![2, 4, 5]), |v| v % 2 == 0);
}

#[test]
fn call_counter_is_shared_between_clones() {
    let counter = CallCounter::new();
    let clone = counter.clone();
    clone.bump();
    counter.bump();
    assert_eq!(counter.count(), 2);
    assert_eq!(clone.track(Stream::range(0, 3)).count(), 3);
    assert_eq!(counter.count(), 5);
}

#[test]
fn builders_assemble_inputs() {
    let b = TestDataBuilder::<i32>::new().add_range(1..=3).add_values([9, 9]);
    assert_eq!(b.len(), 5);
    assert!(!b.is_empty());
    assert_stream_equal(b.stream(), &[1, 2, 3, 9, 9]);

    let pairs = PairDataBuilder::new()
        .add_key_with_values('k', vec![1, 2])
        .add_pair('j', 0)
        .stream()
        .to_map_merge(|_, a, b| a + b);
    assert_eq!(pairs[&'k'], 3);
    assert_eq!(pairs[&'j'], 0);
}

#[test]
fn pseudo_random_data_is_deterministic() {
    let a = pseudo_random_data(1, 100, 0, 10);
    assert_eq!(a, pseudo_random_data(1, 100, 0, 10));
    assert_ne!(a, pseudo_random_data(2, 100, 0, 10));
    assert!(a.iter().all(|v| (0..10).contains(v)));
}

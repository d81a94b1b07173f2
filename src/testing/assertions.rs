//! Assertions that drive a stream and check its output.

use crate::pair::Pair;
use crate::stream::Stream;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Drive `actual` and assert it produced exactly `expected`, in order.
///
/// # Panics
///
/// Panics if the outputs differ in length or content.
///
/// # Example
///
/// ```
/// use rillet::Stream;
/// use rillet::testing::assert_stream_equal;
///
/// assert_stream_equal(Stream::from_vec(vec![1, 2]).map(|v| v * 3), &[3, 6]);
/// ```
pub fn assert_stream_equal<'a, T: Debug + PartialEq + 'a>(actual: Stream<'a, T>, expected: &[T]) {
    let actual = actual.to_vec();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Stream length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Stream mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Drive `actual` and assert it produced the same elements as `expected`,
/// counting duplicates but ignoring order.
///
/// # Panics
///
/// Panics if the two multisets differ.
///
/// # Example
///
/// ```
/// use rillet::Stream;
/// use rillet::testing::assert_stream_unordered_equal;
///
/// assert_stream_unordered_equal(Stream::from_vec(vec![3, 1, 3]), vec![3, 3, 1]);
/// ```
pub fn assert_stream_unordered_equal<'a, T>(actual: Stream<'a, T>, expected: Vec<T>)
where
    T: Debug + Eq + Hash + 'a,
{
    let actual = actual.to_vec();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Stream length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    fn tally<T: Eq + Hash>(vals: &[T]) -> HashMap<&T, usize> {
        let mut m = HashMap::new();
        for v in vals {
            *m.entry(v).or_default() += 1;
        }
        m
    }
    assert_eq!(
        tally(&actual),
        tally(&expected),
        "Stream content mismatch (ignoring order):\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Drive a pair-stream and compare it against `expected` after sorting both
/// sides by key, then by value.
///
/// Useful for streams built from a `HashMap`, whose order is unspecified.
///
/// # Panics
///
/// Panics if the sorted pairs differ.
///
/// # Example
///
/// ```
/// use rillet::{Pair, Stream};
/// use rillet::testing::assert_pairs_unordered_equal;
/// use std::collections::HashMap;
///
/// let m = HashMap::from([("b", 2), ("a", 1)]);
/// assert_pairs_unordered_equal(Stream::from_map(m), vec![Pair::of("a", 1), Pair::of("b", 2)]);
/// ```
pub fn assert_pairs_unordered_equal<'a, K, V>(
    actual: Stream<'a, Pair<K, V>>,
    mut expected: Vec<Pair<K, V>>,
) where
    K: Debug + Ord + 'a,
    V: Debug + Ord + 'a,
{
    let mut actual = actual.to_vec();
    actual.sort();
    expected.sort();

    assert_eq!(
        actual.len(),
        expected.len(),
        "Pair count mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a == e,
            "Pair mismatch at index {i} after sorting:\n  Expected: ({:?}, {:?})\n  Actual: ({:?}, {:?})\n  Full expected: {expected:?}\n  Full actual: {actual:?}",
            e.first,
            e.second,
            a.first,
            a.second
        );
    }
}

/// Drive `actual` and assert every element satisfies `predicate`.
///
/// # Panics
///
/// Panics at the first element that does not satisfy the predicate.
///
/// # Example
///
/// ```
/// use rillet::Stream;
/// use rillet::testing::assert_all;
///
/// assert_all(Stream::range(0, 10).map(|v| v * 2), |v| v % 2 == 0);
/// ```
pub fn assert_all<'a, T: Debug + 'a>(actual: Stream<'a, T>, predicate: impl Fn(&T) -> bool) {
    let collected = actual.to_vec();
    for (i, item) in collected.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Stream output: {collected:?}"
        );
    }
}

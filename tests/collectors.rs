use rillet::testing::*;
use rillet::*;

#[test]
fn reduce_with_seed() {
    assert_eq!(Stream::range(1, 5).reduce(0, |acc, v| acc + v), 10);
    assert_eq!(Stream::<i32>::empty().reduce(7, |acc, v| acc + v), 7);
    let lens = Stream::from_vec(vec!["ab", "c"]).reduce(Vec::new(), |mut acc, s| {
        acc.push(s.len());
        acc
    });
    assert_eq!(lens, vec![2, 1]);
}

#[test]
fn reduce_first_uses_first_element() {
    assert_eq!(
        Stream::from_vec(vec![3, 9, 4]).reduce_first(|a, b| a.max(b)),
        Opt::of(9)
    );
    assert_eq!(Stream::once(5).reduce_first(|a, b| a + b), Opt::of(5));
    assert!(Stream::<i32>::empty().reduce_first(|a, b| a + b).is_empty());
}

#[test]
fn find_stops_at_first_match() {
    let visits = CallCounter::new();
    let mut tested = 0;
    let found = visits.track(Stream::from_vec(vec![1, 2, 3, 4, 5])).find(|v| {
        tested += 1;
        *v == 3
    });
    assert_eq!(found, Opt::of(3));
    assert_eq!(visits.count(), 3);
    assert_eq!(tested, 3);
}

#[test]
fn find_without_match_visits_everything() {
    let visits = CallCounter::new();
    let found = visits.track(Stream::range(0, 6)).find(|v| *v > 10);
    assert!(found.is_empty());
    assert_eq!(visits.count(), 6);
}

#[test]
fn first_pulls_one_element() {
    let visits = CallCounter::new();
    assert_eq!(visits.track(Stream::range(10, 20)).first(), Opt::of(10));
    assert_eq!(visits.count(), 1);
    assert!(Stream::<u8>::empty().first().is_empty());
}

#[test]
fn count_elements() {
    assert_eq!(Stream::range(0, 42).count(), 42);
}

#[test]
fn any_match_short_circuits() {
    let visits = CallCounter::new();
    assert!(visits.track(Stream::from_vec(vec![1, 8, 2, 9])).any_match(|v| *v > 5));
    assert_eq!(visits.count(), 2);
    assert!(!Stream::from_vec(vec![1, 2]).any_match(|v| *v > 5));
}

#[test]
fn all_match_short_circuits() {
    let visits = CallCounter::new();
    assert!(!visits.track(Stream::from_vec(vec![2, 4, 5, 6])).all_match(|v| v % 2 == 0));
    assert_eq!(visits.count(), 3);
    assert!(Stream::from_vec(vec![2, 4]).all_match(|v| v % 2 == 0));
}

#[test]
fn matchers_on_empty_stream_never_call_predicate() {
    let mut calls = 0;
    assert!(!Stream::<i32>::empty().any_match(|_| {
        calls += 1;
        true
    }));
    assert!(Stream::<i32>::empty().all_match(|_| {
        calls += 1;
        false
    }));
    assert_eq!(calls, 0);
}

#[test]
fn short_circuit_reaches_through_transforms() {
    let source = CallCounter::new();
    let mapped = CallCounter::new();
    let found = mapped
        .track(
            source
                .track(Stream::range(0, 1_000))
                .keep(|v| v % 3 == 0)
                .map(|v| v * 2),
        )
        .find(|v| *v > 10);
    assert_eq!(found, Opt::of(12));
    assert_eq!(source.count(), 7);
    assert_eq!(mapped.count(), 3);
}

#[test]
fn join_string_separates_neighbours() {
    assert_eq!(
        Stream::from_vec(vec!["a".to_string(), "b".to_string()]).join_string(", "),
        "a, b"
    );
    assert_eq!(Stream::once("solo").join_string("|"), "solo");
    assert_eq!(Stream::<String>::empty().join_string("|"), "");
}

#[test]
fn collect_fail_fast_returns_all_values() -> anyhow::Result<()> {
    let parsed = Stream::from_vec(vec!["1", "2", "3"])
        .map(|s| s.parse::<i32>())
        .collect_fail_fast()?;
    assert_eq!(parsed, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn collect_fail_fast_stops_at_first_error() {
    let visits = CallCounter::new();
    let result = visits
        .track(Stream::from_vec(vec!["1", "x", "3", "y"]))
        .map(|s| s.parse::<i32>().map_err(|_| format!("bad input {s:?}")))
        .collect_fail_fast();
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "element failed: bad input \"x\"");
    assert_eq!(visits.count(), 2);
}

#[test]
fn reduce_threads_accumulator_through_every_element() {
    let joined = Stream::range(0, 1_000).reduce(String::new(), |mut acc, v| {
        if v % 250 == 0 {
            acc.push_str(&v.to_string());
            acc.push(';');
        }
        acc
    });
    assert_eq!(joined, "0;250;500;750;");
    assert_eq!(Stream::<u8>::empty().reduce(String::from("seed"), |acc, _| acc), "seed");
}

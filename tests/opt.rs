use rillet::*;
use std::collections::HashMap;

#[test]
fn opt_constructors() {
    assert!(Opt::of(3).has_value());
    assert!(Opt::<i32>::empty().is_empty());
    assert_eq!(Opt::of_nullable(Some("x")), Opt::of("x"));
    assert_eq!(Opt::<&str>::of_nullable(None), Opt::empty());
    assert_eq!(Opt::of_flag(5, true), Opt::of(5));
    assert_eq!(Opt::of_flag(5, false), Opt::empty());
}

#[test]
fn opt_of_ref_clones_target() {
    let owned = String::from("hello");
    let opt = Opt::of_ref(Some(&owned));
    assert_eq!(opt.get(), "hello");
    assert!(Opt::<String>::of_ref(None).is_empty());
}

#[test]
fn opt_map_and_slice_lookups() {
    let m = HashMap::from([("a", 1), ("b", 2)]);
    assert_eq!(Opt::map_get(&m, &"b"), Opt::of(2));
    assert!(Opt::map_get(&m, &"z").is_empty());

    let xs = vec![10, 20, 30];
    assert_eq!(Opt::slice_get(&xs, 2), Opt::of(30));
    assert!(Opt::slice_get(&xs, 3).is_empty());
}

#[test]
fn opt_get_on_empty_panics() {
    let result = std::panic::catch_unwind(|| Opt::<i32>::empty().get());
    assert!(result.is_err());
}

#[test]
fn opt_try_get_reports_unexpected_empty() {
    assert_eq!(Opt::of(1).try_get(), Ok(1));
    assert!(matches!(
        Opt::<i32>::empty().try_get(),
        Err(StreamError::UnexpectedEmpty { .. })
    ));
}

#[test]
fn opt_callbacks_fire_by_state() {
    let mut seen = Vec::new();
    let mut empties = 0;
    Opt::of(4)
        .if_present(|v| seen.push(*v))
        .if_empty(|| empties += 1);
    Opt::<i32>::empty()
        .if_present(|v| seen.push(*v))
        .if_empty(|| empties += 1);
    assert_eq!(seen, vec![4]);
    assert_eq!(empties, 1);
}

#[test]
fn opt_fallbacks() {
    assert_eq!(Opt::of(1).or_else(9), 1);
    assert_eq!(Opt::empty().or_else(9), 9);

    let mut calls = 0;
    let v = Opt::of(1).or_else_compute(|| {
        calls += 1;
        9
    });
    assert_eq!(v, 1);
    assert_eq!(calls, 0);
    assert_eq!(Opt::empty().or_else_compute(|| 7), 7);
}

#[test]
fn opt_map_and_flat_map() {
    assert_eq!(Opt::of(2).map(|v| v * 10), Opt::of(20));
    assert_eq!(Opt::<i32>::empty().map(|v| v * 10), Opt::empty());

    let half = |v: i32| Opt::of_flag(v / 2, v % 2 == 0);
    assert_eq!(Opt::of(8).flat_map(half), Opt::of(4));
    assert_eq!(Opt::of(7).flat_map(half), Opt::empty());
    assert_eq!(Opt::of(Opt::of(1)).flatten(), Opt::of(1));
    assert_eq!(Opt::of(Opt::<i32>::empty()).flatten(), Opt::empty());
}

#[test]
fn opt_to_list_and_stream() {
    assert_eq!(Opt::of('a').to_list(), vec!['a']);
    assert!(Opt::<char>::empty().to_list().is_empty());
    assert_eq!(Opt::of(3).stream().to_vec(), vec![3]);
    assert_eq!(Opt::<i32>::empty().stream().count(), 0);
}

#[test]
fn opt_option_conversions() {
    let o: Opt<i32> = Some(5).into();
    assert_eq!(o, Opt::of(5));
    let back: Option<i32> = o.into();
    assert_eq!(back, Some(5));
    assert_eq!(Opt::of(2).as_ref().map(|v| *v + 1), Opt::of(3));
}

use rillet::testing::*;
use rillet::*;

#[test]
fn float_stats_single_pass() {
    let s = Stream::from_vec(vec![1.0, 2.5, -10.0, 5.0]).stats();
    assert_eq!(s.size, 4);
    assert_eq!(s.total, -1.5);
    assert_eq!(s.min, -10.0);
    assert_eq!(s.max, 5.0);
    assert!((s.average - -0.375).abs() < 1e-12);
}

#[test]
fn integer_stats() {
    let s = Stream::range(1u32, 5).stats();
    assert_eq!(
        s,
        SummaryStats {
            average: 2.5,
            size: 4,
            total: 10,
            min: 1,
            max: 4,
        }
    );
}

#[test]
fn empty_stats_use_extreme_bounds() {
    let ints = Stream::<i64>::empty().stats();
    assert_eq!(ints.size, 0);
    assert_eq!(ints.total, 0);
    assert_eq!(ints.min, i64::MAX);
    assert_eq!(ints.max, i64::MIN);
    assert_eq!(ints.average, 0.0);

    let floats = Stream::<f32>::empty().stats();
    assert_eq!(floats.min, f32::INFINITY);
    assert_eq!(floats.max, f32::NEG_INFINITY);
}

#[test]
fn stats_match_a_naive_computation() {
    let data = pseudo_random_data(7, 500, -1_000, 1_000);
    let s = Stream::from_slice(&data).stats();
    assert_eq!(s.size, data.len());
    assert_eq!(s.total, data.iter().sum::<i64>());
    assert_eq!(Some(&s.min), data.iter().min());
    assert_eq!(Some(&s.max), data.iter().max());
}

#[test]
fn summary_stats_fold_manually() {
    let mut acc = SummaryStats::<u8>::default();
    acc.add(4);
    acc.add(2);
    let done = acc.finish();
    assert_eq!((done.size, done.total, done.min, done.max), (2, 6, 2, 4));
    assert_eq!(done.average, 3.0);
}

#[test]
fn nums_helpers() {
    assert_eq!(nums::min(3, 1), 1);
    assert_eq!(nums::max(3.5, 1.0), 3.5);
    assert_eq!(nums::order(9, 2), (2, 9));
    assert_eq!(nums::order(2, 9), (2, 9));
    assert_eq!(<u16 as Number>::MAX, u16::MAX);
    assert_eq!(<f64 as Number>::MIN, f64::NEG_INFINITY);
    assert_eq!(7u8.to_f64(), 7.0);
}

#[test]
fn integer_total_wraps_instead_of_panicking() {
    let s = Stream::from_vec(vec![200u8, 100]).stats();
    assert_eq!(s.size, 2);
    assert_eq!(s.total, 44);
    assert_eq!(s.min, 100);
    assert_eq!(s.max, 200);

    let wide = Stream::from_vec(vec![i32::MAX, 1]).stats();
    assert_eq!(wide.total, i32::MIN);
    assert_eq!((wide.min, wide.max), (1, i32::MAX));
}

#[test]
fn number_wrapping_add() {
    assert_eq!(Number::wrapping_add(250u8, 10), 4);
    assert_eq!(Number::wrapping_add(1.5f64, 2.0), 3.5);
}

use rillet::*;

#[test]
fn pair_accessors() {
    let p = Pair::of("k", 7);
    assert_eq!(p.first, "k");
    assert_eq!(p.second, 7);
    assert_eq!(p.as_ref(), Pair::of(&"k", &7));
    assert_eq!(p.get(), ("k", 7));
}

#[test]
fn pair_of_matches_constructor() {
    assert_eq!(pair_of(1, 'x'), Pair::of(1, 'x'));
}

#[test]
fn pair_tuple_conversions() {
    let p: Pair<i32, &str> = (1, "one").into();
    assert_eq!(p, Pair::of(1, "one"));
    let t: (i32, &str) = p.into();
    assert_eq!(t, (1, "one"));
}

#[test]
fn pair_display_and_ordering() {
    assert_eq!(Pair::of("a", 1).to_string(), "(`a`, `1`)");
    let mut ps = vec![Pair::of(2, 'a'), Pair::of(1, 'z'), Pair::of(1, 'b')];
    ps.sort();
    assert_eq!(ps, vec![Pair::of(1, 'b'), Pair::of(1, 'z'), Pair::of(2, 'a')]);
}

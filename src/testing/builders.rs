//! Fluent builders for stream test inputs.

use crate::pair::Pair;
use crate::stream::Stream;
use std::ops::RangeInclusive;

/// A fluent builder for a vector of test elements.
///
/// # Example
///
/// ```
/// use rillet::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::new()
///     .add_value(7)
///     .add_repeated(1, 3)
///     .add_generated(2, |i| i as i32 * 10)
///     .build();
///
/// assert_eq!(data, vec![7, 1, 1, 1, 0, 10]);
/// ```
#[derive(Debug, Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    #[must_use]
    pub fn add_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.data.extend(values);
        self
    }

    /// Append `count` clones of `value`.
    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    /// Append `f(0)`, `f(1)`, ..., `f(count - 1)`.
    #[must_use]
    pub fn add_generated(mut self, count: usize, f: impl FnMut(usize) -> T) -> Self {
        self.data.extend((0..count).map(f));
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }

    /// Finish building and stream the data.
    pub fn stream<'a>(self) -> Stream<'a, T>
    where
        T: 'a,
    {
        Stream::from_vec(self.data)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: From<i32>> TestDataBuilder<T> {
    /// Append every integer of `range`, converted to `T`.
    ///
    /// ```
    /// use rillet::testing::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::<f64>::new().add_range(1..=3).build();
    /// assert_eq!(data, vec![1.0, 2.0, 3.0]);
    /// ```
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.data.extend(range.map(T::from));
        self
    }
}

/// A fluent builder for pair-stream inputs.
///
/// ```
/// use rillet::Pair;
/// use rillet::testing::PairDataBuilder;
///
/// let pairs = PairDataBuilder::new()
///     .add_pair("a", 1)
///     .add_key_with_values("b", vec![2, 3])
///     .build();
/// assert_eq!(pairs, vec![Pair::of("a", 1), Pair::of("b", 2), Pair::of("b", 3)]);
/// ```
#[derive(Debug, Default)]
pub struct PairDataBuilder<K, V> {
    data: Vec<Pair<K, V>>,
}

impl<K, V> PairDataBuilder<K, V> {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_pair(mut self, key: K, value: V) -> Self {
        self.data.push(Pair::of(key, value));
        self
    }

    /// Append one pair per value, all sharing `key`.
    #[must_use]
    pub fn add_key_with_values(mut self, key: K, values: Vec<V>) -> Self
    where
        K: Clone,
    {
        self.data
            .extend(values.into_iter().map(|v| Pair::of(key.clone(), v)));
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<Pair<K, V>> {
        self.data
    }

    /// Finish building and stream the pairs.
    pub fn stream<'a>(self) -> Stream<'a, Pair<K, V>>
    where
        K: 'a,
        V: 'a,
    {
        Stream::from_vec(self.data)
    }
}

/// Deterministic pseudo-random integers in `min..max`, from a linear
/// congruential generator seeded with `seed`.
///
/// ```
/// use rillet::testing::pseudo_random_data;
///
/// let data = pseudo_random_data(42, 50, -5, 5);
/// assert_eq!(data.len(), 50);
/// assert!(data.iter().all(|v| (-5..5).contains(v)));
/// assert_eq!(data, pseudo_random_data(42, 50, -5, 5));
/// ```
///
/// # Panics
///
/// Panics if `min >= max`.
#[must_use]
pub fn pseudo_random_data(seed: u64, count: usize, min: i64, max: i64) -> Vec<i64> {
    assert!(min < max, "pseudo_random_data: empty range {min}..{max}");
    let span = max.abs_diff(min);
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            // Upper bits of an LCG are the well-mixed ones.
            let offset = (state >> 33) % span;
            min.wrapping_add_unsigned(offset)
        })
        .collect()
}

//! Stream-to-stream operators.
//!
//! Every operator here is built on [`Stream::transform`]: the new stream's
//! source wraps the parent stream and an operator closure. When the new stream
//! is driven, it drives its parent with a callback that hands each value to
//! the operator along with the downstream callback `next`.
//!
//! The operator decides how many times to call `next` (zero to drop a value,
//! once to map it, several to expand it) and returns whatever the last `next`
//! call returned, or `true` if it never called it. That return value is what
//! carries an early stop back to the source.
//!
//! ## Provided methods
//! - [`map`](Stream::map) -- `T -> U`
//! - [`keep`](Stream::keep) / [`remove`](Stream::remove) -- filter in / out
//! - [`peek`](Stream::peek) -- observe without altering
//! - [`flat_map`](Stream::flat_map) -- `T -> zero or more U`
//! - [`key_by`](Stream::key_by) / [`to_pairs`](Stream::to_pairs) -- into a pair-stream
//!
//! ## Example
//! ```
//! use rillet::Stream;
//!
//! let out = Stream::from_vec(vec![1, 2, 3, 4, 5, 6])
//!     .keep(|n| n % 2 == 0)
//!     .map(|n| n * 10)
//!     .to_vec();
//! assert_eq!(out, vec![20, 40, 60]);
//! ```

use crate::pair::Pair;
use crate::source::Source;
use crate::stream::Stream;

/// Source that runs `op` over every value of `parent`.
struct Transform<'a, T, F> {
    parent: Stream<'a, T>,
    op: F,
}

impl<T, U, F> Source<U> for Transform<'_, T, F>
where
    F: FnMut(T, &mut dyn FnMut(U) -> bool) -> bool,
{
    fn iterate(&mut self, next: &mut dyn FnMut(U) -> bool) -> bool {
        let op = &mut self.op;
        self.parent.src.iterate(&mut |v| op(v, &mut *next))
    }
}

impl<'a, T: 'a> Stream<'a, T> {
    /// Build a stream from this one and a per-element operator.
    ///
    /// `op(value, next)` may call `next` any number of times and must return
    /// the result of the last call (or `true` if it made none). Returning
    /// `false` without `next` having done so stops the stream.
    ///
    /// ```
    /// use rillet::Stream;
    ///
    /// // Emit every value twice.
    /// let doubled = Stream::from_vec(vec!['a', 'b'])
    ///     .transform(|c, next: &mut dyn FnMut(char) -> bool| next(c) && next(c))
    ///     .to_vec();
    /// assert_eq!(doubled, vec!['a', 'a', 'b', 'b']);
    /// ```
    pub fn transform<U, F>(self, op: F) -> Stream<'a, U>
    where
        U: 'a,
        F: FnMut(T, &mut dyn FnMut(U) -> bool) -> bool + 'a,
    {
        Stream::new(Transform { parent: self, op })
    }

    /// Replace each element with `f(element)`.
    pub fn map<U, F>(self, mut f: F) -> Stream<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> U + 'a,
    {
        self.transform(move |v, next| next(f(v)))
    }

    /// Keep only the elements for which `pred` is true.
    pub fn keep<P>(self, mut pred: P) -> Stream<'a, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.transform(move |v, next| if pred(&v) { next(v) } else { true })
    }

    /// Drop the elements for which `pred` is true.
    pub fn remove<P>(self, mut pred: P) -> Stream<'a, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.transform(move |v, next| if pred(&v) { true } else { next(v) })
    }

    /// Call `f` on each element as it passes through, without changing it.
    pub fn peek<F>(self, mut f: F) -> Stream<'a, T>
    where
        F: FnMut(&T) + 'a,
    {
        self.transform(move |v, next| {
            f(&v);
            next(v)
        })
    }

    /// Replace each element with every item of `f(element)`.
    pub fn flat_map<U, I, F>(self, mut f: F) -> Stream<'a, U>
    where
        U: 'a,
        I: IntoIterator<Item = U>,
        F: FnMut(T) -> I + 'a,
    {
        self.transform(move |v, next| f(v).into_iter().all(|u| next(u)))
    }

    /// Pair each element with a key derived from it: `T -> Pair<K, T>`.
    pub fn key_by<K, F>(self, mut key_fn: F) -> Stream<'a, Pair<K, T>>
    where
        K: 'a,
        F: FnMut(&T) -> K + 'a,
    {
        self.transform(move |v, next| {
            let k = key_fn(&v);
            next(Pair::of(k, v))
        })
    }

    /// Split each element into a key/value pair.
    pub fn to_pairs<K, V, F>(self, mut f: F) -> Stream<'a, Pair<K, V>>
    where
        K: 'a,
        V: 'a,
        F: FnMut(T) -> (K, V) + 'a,
    {
        self.transform(move |v, next| next(Pair::from(f(v))))
    }
}

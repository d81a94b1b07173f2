//! Terminal operations that fold, search, or join a stream.
//!
//! The searching operations ([`find`](Stream::find),
//! [`any_match`](Stream::any_match), [`all_match`](Stream::all_match)) stop
//! the source as soon as the answer is known: no element past the deciding one
//! is ever produced, so upstream `peek`s and generators don't run for it.

use crate::opt::Opt;
use crate::stream::Stream;
use anyhow::{Result, anyhow};
use std::fmt::Display;

impl<'a, T: 'a> Stream<'a, T> {
    /// Fold every element into `seed` with `combine(acc, element)`.
    ///
    /// ```
    /// use rillet::Stream;
    ///
    /// let product = Stream::from_vec(vec![1, 2, 3, 4]).reduce(1, |acc, v| acc * v);
    /// assert_eq!(product, 24);
    /// ```
    pub fn reduce<A, F>(self, seed: A, mut combine: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        // `acc` is only empty between the `take` and the store that follows it.
        let mut acc = Some(seed);
        self.each(|v| acc = acc.take().map(|cur| combine(cur, v)));
        let Some(total) = acc else {
            unreachable!("reduce accumulator is restored after every element")
        };
        total
    }

    /// Fold using the first element as the seed; empty for an empty stream.
    ///
    /// ```
    /// use rillet::{Opt, Stream};
    ///
    /// let max = Stream::from_vec(vec![-5, -2, -9]).reduce_first(|a, b| a.max(b));
    /// assert_eq!(max, Opt::of(-2));
    /// ```
    pub fn reduce_first<F>(self, mut combine: F) -> Opt<T>
    where
        F: FnMut(T, T) -> T,
    {
        let mut acc: Option<T> = None;
        self.each(|v| {
            acc = Some(match acc.take() {
                Some(cur) => combine(cur, v),
                None => v,
            });
        });
        Opt::of_nullable(acc)
    }

    /// The first element matching `pred`, or empty.
    ///
    /// `pred` runs exactly once per visited element and the stream stops at
    /// the match.
    pub fn find<P>(self, mut pred: P) -> Opt<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut found = None;
        let completed = self.drive(&mut |v| {
            if pred(&v) {
                found = Some(v);
                false
            } else {
                true
            }
        });
        tracing::trace!(completed, "find: traversal finished");
        Opt::of_nullable(found)
    }

    /// The first element, or empty. Produces at most one element.
    pub fn first(self) -> Opt<T> {
        self.find(|_| true)
    }

    /// Number of elements.
    pub fn count(self) -> usize {
        let mut n = 0;
        self.each(|_| n += 1);
        n
    }

    /// Whether any element matches `pred`. `false` for an empty stream.
    pub fn any_match<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        // Stopped early means something matched.
        !self.drive(&mut |v| !pred(&v))
    }

    /// Whether every element matches `pred`. `true` for an empty stream.
    pub fn all_match<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.drive(&mut |v| pred(&v))
    }
}

impl<'a, T: AsRef<str> + 'a> Stream<'a, T> {
    /// Concatenate the elements with `sep` between each pair of neighbours.
    ///
    /// ```
    /// use rillet::Stream;
    ///
    /// assert_eq!(Stream::from_vec(vec!["a", "b", "c"]).join_string("-"), "a-b-c");
    /// assert_eq!(Stream::<&str>::empty().join_string("-"), "");
    /// ```
    pub fn join_string(self, sep: &str) -> String {
        let mut out = String::new();
        let mut first = true;
        self.each(|v| {
            if first {
                first = false;
            } else {
                out.push_str(sep);
            }
            out.push_str(v.as_ref());
        });
        out
    }
}

impl<'a, T: 'a, E: Display + 'a> Stream<'a, std::result::Result<T, E>> {
    /// Collect the `Ok` values, stopping at the first `Err`.
    ///
    /// Elements after the failing one are never produced.
    pub fn collect_fail_fast(self) -> Result<Vec<T>> {
        let mut ok = Vec::new();
        let mut failure = None;
        self.each_until(|r| match r {
            Ok(v) => {
                ok.push(v);
                true
            }
            Err(e) => {
                failure = Some(anyhow!("element failed: {}", e));
                false
            }
        });
        match failure {
            Some(e) => Err(e),
            None => Ok(ok),
        }
    }
}
